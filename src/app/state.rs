use chrono::{DateTime, Utc};

use crate::util::config::WatchTarget;

#[derive(Debug)]
pub struct AppState {
    pub targets: Vec<WatchTarget>,
    pub cursor: usize,
    pub last_refresh: Option<DateTime<Utc>>,
    /// Number of times the view has been re-initialized.
    pub generation: u32,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(targets: Vec<WatchTarget>) -> Self {
        Self {
            targets,
            cursor: 0,
            last_refresh: None,
            generation: 0,
            should_quit: false,
        }
    }

    pub fn selected_target(&self) -> Option<&WatchTarget> {
        self.targets.get(self.cursor)
    }
}
