pub mod history_events;
pub mod history_render;
mod history_state;
mod matcher;
mod tracker;

pub use history_state::{HistoryPopup, MAX_VISIBLE_SUGGESTIONS};
pub use matcher::HistoryMatcher;
pub use tracker::HistoryTracker;
