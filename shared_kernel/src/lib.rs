pub mod configuration;
pub mod http_client;
mod non_empty_string;
mod string_key;
pub mod tracing;
