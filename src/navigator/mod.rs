pub mod core;
pub mod save;
pub mod state;

#[cfg(test)]
mod tests;

// Re-export the primary types so `crate::navigator::*` paths stay short.
pub use self::core::ViewNavigator;
pub use save::{LoggingSaveHandler, SaveFn, SaveHandler};
pub use state::{Trigger, ViewMode, ViewState};

#[cfg(any(test, feature = "test-utils"))]
pub use save::RecordingSaveHandler;
