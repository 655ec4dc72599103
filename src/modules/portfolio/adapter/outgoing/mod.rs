pub mod content_store_config;
pub mod content_store_http;

pub use content_store_config::{ContentStoreConfig, ContentStoreConfigError};
pub use content_store_http::{ContentStoreHttp, ContentStoreSetupError};
