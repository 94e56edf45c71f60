pub mod backup;
pub mod observer;
pub mod record;
pub mod store;

pub use backup::BackupPolicy;
pub use observer::{CatalogObserver, NullObserver, TracingObserver};
pub use record::{Record, Status};
pub use store::{CatalogStore, LoadOutcome};
