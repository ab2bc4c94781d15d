mod banner;
mod view_sync;

pub use banner::{ErrorBanner, INVALID_EXPRESSION_MESSAGE};
pub use view_sync::{ApplyResult, Renderer, ViewSynchronizer};
