/// Events handled by [`crate::app::App`], one at a time and in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppEvent {
    /// A sector was picked in the sector selector.
    SectorChosen(String),

    /// A row of the band selector was activated. The index refers to the
    /// active sector's unmerged listing.
    BandClicked(usize),

    /// The reset control was triggered.
    ResetClicked,

    /// Request to exit the application gracefully.
    ExitRequest,
}
