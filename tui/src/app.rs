use color_eyre::eyre::Result;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use specmap_core::PlotSurface;
use specmap_core::Shade;
use specmap_core::SpecmapError;
use specmap_core::SpectrumController;
use specmap_core::Transition;
use specmap_core::ViewState;
use specmap_core::sector_colour;
use tokio::select;
use tokio::sync::mpsc::unbounded_channel;
use tokio_stream::StreamExt;
use tracing::error;
use tracing::info;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;
use crate::band_list::BandListAdapter;
use crate::hint_bar::HintBar;
use crate::hint_bar::key_hints;
use crate::hint_bar::split_area_for_hints;
use crate::plot_view::PlotView;
use crate::render::list_view::ListViewState;
use crate::render::list_view::clamp_step;
use crate::render::list_view::wrap_step;
use crate::sector_picker::SectorListAdapter;
use crate::theme::Theme;
use crate::tui::Tui;
use crate::tui::TuiEvent;

const HINT_LINES: u16 = 2;
const SECTOR_COLUMN_WIDTH: u16 = 30;
const KEY_HINTS: &[(&str, &str)] = &[
    ("Tab", "switch list"),
    ("↑↓", "move"),
    ("Enter", "select"),
    ("r", "reset"),
    ("q", "quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Sectors,
    Bands,
}

/// Interactive spectrum map. Key presses become [`AppEvent`]s, and every
/// event runs one controller transition whose render batch is applied to
/// the plot surface in full before the next frame.
pub(crate) struct App {
    controller: SpectrumController,
    surface: PlotSurface,
    app_event_tx: AppEventSender,
    theme: Theme,
    sectors: Vec<String>,
    active_sector: Option<String>,
    focus: Focus,
    sector_cursor: usize,
    band_cursor: usize,
    sector_list: ListViewState,
    band_list: ListViewState,
    last_list_height: u16,
    error: Option<String>,
    is_done: bool,
}

impl App {
    pub(crate) async fn run(
        tui: &mut Tui,
        controller: SpectrumController,
        theme: Theme,
    ) -> Result<()> {
        let (app_event_tx, mut app_event_rx) = unbounded_channel();
        let mut app = Self::new(controller, theme, AppEventSender::new(app_event_tx))?;

        let tui_events = tui.event_stream();
        tokio::pin!(tui_events);

        while !app.is_done() {
            tui.terminal
                .draw(|frame| app.render(frame.area(), frame.buffer_mut()))?;
            select! {
                Some(event) = app_event_rx.recv() => app.handle_event(event),
                Some(event) = tui_events.next() => app.handle_tui_event(event),
                else => break,
            }
        }
        tui.terminal.clear()?;
        Ok(())
    }

    /// Loads the first sector and highlights its first band.
    pub(crate) fn new(
        mut controller: SpectrumController,
        theme: Theme,
        app_event_tx: AppEventSender,
    ) -> Result<Self> {
        let sectors = controller.sectors();
        let transition = controller.load()?;
        let mut app = Self {
            controller,
            surface: PlotSurface::default(),
            app_event_tx,
            theme,
            sectors,
            active_sector: None,
            focus: Focus::Bands,
            sector_cursor: 0,
            band_cursor: 0,
            sector_list: ListViewState::new(),
            band_list: ListViewState::new(),
            last_list_height: 0,
            error: None,
            is_done: false,
        };
        app.apply(transition);
        Ok(app)
    }

    pub(crate) fn is_done(&self) -> bool {
        self.is_done
    }

    fn handle_tui_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            TuiEvent::Key(_) | TuiEvent::Draw => {}
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_event_tx.send(AppEvent::ExitRequest);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.app_event_tx.send(AppEvent::ExitRequest),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::PageUp => self.page_cursor(-1),
            KeyCode::PageDown => self.page_cursor(1),
            KeyCode::Enter => self.activate_cursor(),
            KeyCode::Char('r') => self.app_event_tx.send(AppEvent::ResetClicked),
            _ => {}
        }
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        let result = match event {
            AppEvent::SectorChosen(sector) => self.controller.change_sector(&sector),
            AppEvent::BandClicked(index) => self.controller.select_band(index),
            AppEvent::ResetClicked => Ok(self.controller.reset()),
            AppEvent::ExitRequest => {
                self.is_done = true;
                return;
            }
        };
        match result {
            Ok(transition) => {
                self.error = None;
                self.apply(transition);
            }
            Err(err) => self.report(&err),
        }
    }

    fn apply(&mut self, transition: Transition) {
        self.surface.apply(&transition.batch);
        let view = &transition.view;
        self.active_sector = view.state.sector().map(str::to_string);
        if let Some(index) = self
            .active_sector()
            .and_then(|sector| self.sectors.iter().position(|s| s == sector))
        {
            self.sector_cursor = index;
        }
        match view.state {
            ViewState::BandActive { index, .. } => self.band_cursor = index,
            ViewState::SectorView { .. } if view.selection.is_none() => {
                self.band_cursor = self.band_cursor.min(view.listing.len().saturating_sub(1));
            }
            _ => {}
        }
    }

    fn report(&mut self, err: &SpecmapError) {
        if err.is_lookup_inconsistency() {
            error!("band lookup failed: {err}");
        } else {
            info!("event rejected: {err}");
        }
        self.error = Some(err.to_string());
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sectors => Focus::Bands,
            Focus::Bands => Focus::Sectors,
        };
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Sectors => {
                self.sector_cursor = wrap_step(self.sector_cursor, delta, self.sectors.len());
            }
            Focus::Bands => {
                self.band_cursor = wrap_step(self.band_cursor, delta, self.surface.listing.len());
            }
        }
    }

    fn page_cursor(&mut self, direction: isize) {
        let step = ListViewState::page_step(self.last_list_height) as isize * direction;
        match self.focus {
            Focus::Sectors => {
                self.sector_cursor = clamp_step(self.sector_cursor, step, self.sectors.len());
            }
            Focus::Bands => {
                self.band_cursor = clamp_step(self.band_cursor, step, self.surface.listing.len());
            }
        }
    }

    fn activate_cursor(&mut self) {
        match self.focus {
            Focus::Sectors => {
                if let Some(sector) = self.sectors.get(self.sector_cursor) {
                    self.app_event_tx.send(AppEvent::SectorChosen(sector.clone()));
                    self.band_cursor = 0;
                    self.focus = Focus::Bands;
                }
            }
            Focus::Bands => {
                if !self.surface.listing.is_empty() {
                    self.app_event_tx.send(AppEvent::BandClicked(self.band_cursor));
                }
            }
        }
    }

    fn active_sector(&self) -> Option<&str> {
        self.active_sector.as_deref()
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let (content, hint_area) = split_area_for_hints(area, HINT_LINES);
        let [plot_area, lists_area] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Min(5)]).areas(content);
        let [sector_area, band_area] = Layout::horizontal([
            Constraint::Length(SECTOR_COLUMN_WIDTH),
            Constraint::Min(20),
        ])
        .areas(lists_area);

        PlotView {
            surface: &self.surface,
            theme: &self.theme,
        }
        .render(plot_area, buf);
        self.render_sectors(sector_area, buf);
        self.render_bands(band_area, buf);
        self.hint_bar().render(hint_area, buf);
    }

    fn list_block(&self, title: &'static str, focus: Focus) -> Block<'static> {
        let color = if self.focus == focus {
            self.theme.focus
        } else {
            self.theme.border
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Line::from(title).bold())
    }

    fn render_sectors(&mut self, area: Rect, buf: &mut Buffer) {
        let block = self.list_block(" Sectors ", Focus::Sectors);
        let inner = block.inner(area);
        block.render(area, buf);
        let active = self
            .active_sector()
            .and_then(|sector| self.sectors.iter().position(|s| s == sector));
        let cursor = (self.focus == Focus::Sectors).then_some(self.sector_cursor);
        let adapter = SectorListAdapter {
            sectors: &self.sectors,
            theme: &self.theme,
        };
        self.sector_list
            .render(&adapter, cursor, active, inner, buf);
    }

    fn render_bands(&mut self, area: Rect, buf: &mut Buffer) {
        let block = self.list_block(" Bands ", Focus::Bands);
        let inner = block.inner(area);
        block.render(area, buf);
        self.last_list_height = inner.height;
        let row_colour = self
            .active_sector()
            .map(|sector| self.theme.paint(sector_colour(sector, Shade::Translucent)))
            .unwrap_or_else(|| self.theme.background_color());
        let cursor = (self.focus == Focus::Bands).then_some(self.band_cursor);
        let adapter = BandListAdapter {
            listing: &self.surface.listing,
            row_colour,
            theme: &self.theme,
        };
        self.band_list
            .render(&adapter, cursor, self.surface.selection, inner, buf);
    }

    fn hint_bar(&self) -> HintBar {
        let mut status = vec![Span::from("sector ").fg(self.theme.muted)];
        status.push(Span::from(self.active_sector().unwrap_or("-").to_string()).bold());
        if let Some(index) = self.surface.selection {
            status.push(Span::from(" · band ").fg(self.theme.muted));
            status.push(Span::from(format!("{}/{}", index + 1, self.surface.listing.len())));
        }
        if let Some(error) = &self.error {
            status.push(Span::from(" · ").fg(self.theme.muted));
            status.push(Span::from(format!("error: {error}")).fg(self.theme.error));
        }
        HintBar::new(vec![
            Line::from(status),
            key_hints(KEY_HINTS, self.theme.muted),
        ])
    }
}
