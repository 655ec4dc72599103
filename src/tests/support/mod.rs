pub mod app_state_builder;
pub mod content_store_fixtures;
pub mod stubs;
