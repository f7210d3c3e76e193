use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// How a row relates to the list's state when it is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RowState {
    /// Under the keyboard cursor of the focused list.
    pub cursor: bool,
    /// The committed choice (active sector or highlighted band).
    pub active: bool,
}

/// Single-line rows drawn on demand, so only the visible window is touched.
pub(crate) trait ListAdapter {
    fn len(&self) -> usize;
    fn render_row(&self, index: usize, area: Rect, buf: &mut Buffer, state: RowState);
}

#[derive(Debug, Default)]
pub(crate) struct ListViewState {
    offset: usize,
}

impl ListViewState {
    pub(crate) fn new() -> Self {
        Self { offset: 0 }
    }

    #[cfg(test)]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Scrolls the least amount needed to show `cursor` in `height` rows.
    pub(crate) fn ensure_visible(&mut self, len: usize, cursor: usize, height: u16) {
        let height = usize::from(height);
        if height == 0 || len == 0 {
            self.offset = 0;
            return;
        }
        let cursor = cursor.min(len - 1);
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + height {
            self.offset = cursor + 1 - height;
        }
        self.offset = self.offset.min(len.saturating_sub(height));
    }

    pub(crate) fn render<A: ListAdapter>(
        &mut self,
        adapter: &A,
        cursor: Option<usize>,
        active: Option<usize>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        self.ensure_visible(adapter.len(), cursor.or(active).unwrap_or(0), area.height);
        let rows = (self.offset..adapter.len()).zip(area.top()..area.bottom());
        let mut drawn: u16 = 0;
        for (index, y) in rows {
            let state = RowState {
                cursor: cursor == Some(index),
                active: active == Some(index),
            };
            adapter.render_row(index, Rect::new(area.x, y, area.width, 1), buf, state);
            drawn += 1;
        }
        for y in area.top().saturating_add(drawn)..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].reset();
            }
        }
    }

    /// Rows moved by PageUp/PageDown.
    pub(crate) fn page_step(height: u16) -> usize {
        usize::from(height.saturating_sub(1)).max(1)
    }
}

/// Moves `current` by `delta` rows, wrapping at both ends.
pub(crate) fn wrap_step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

/// Moves `current` by `delta` rows, stopping at the ends.
pub(crate) fn clamp_step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
