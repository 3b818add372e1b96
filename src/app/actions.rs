use chrono::{DateTime, Utc};

#[derive(Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    Reload,
    Refreshed(DateTime<Utc>),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Tear down the live updater and register every target again.
    Reinitialize,
}
