pub mod content_records;
pub mod content_store;

pub use content_store::{ContentStore, ContentStoreError};
