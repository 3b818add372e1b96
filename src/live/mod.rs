pub mod element;
pub mod markup;
pub mod updater;

pub use element::{LiveElement, TargetError, TextElement, read_target};
pub use markup::{DiffTime, RenderContext, UPDATER_SCRIPT};
pub use updater::{ElementId, LiveUpdater, UPDATE_INTERVAL};
