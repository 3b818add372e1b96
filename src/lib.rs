pub mod app;
pub mod format;
pub mod live;
pub mod ui;
pub mod util;

pub use format::{FormatError, format_relative_time, format_relative_time_str};
pub use live::{LiveElement, LiveUpdater};
