pub mod domain;
pub mod error;
pub mod fetch;
pub mod rule;
pub mod store;
pub mod sync;

pub use error::SyncError;
pub use sync::{run_sync, SyncOutcome};
