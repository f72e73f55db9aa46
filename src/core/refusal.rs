use thiserror::Error;

/// A derived view that cannot be produced from the current history.
///
/// Not an error: the session reports it and goes back to the menu.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    #[error("log at least {needed} days of entries first (found {found})")]
    NotEnoughEntries { needed: usize, found: usize },

    #[error("'{0}' is a new activity, there is no mood prediction for it yet")]
    UnseenActivity(String),

    #[error("no entries yet, nothing to recommend")]
    NoHistory,

    #[error("log today's mood first to get a recommendation")]
    NoEntryToday,

    #[error("not enough activity data for a recommendation yet")]
    NotEnoughData,
}
