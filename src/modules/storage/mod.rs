pub mod json_backend;
pub mod settings_store;
