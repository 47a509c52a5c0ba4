pub mod api_doc;
pub mod cors;
pub mod error_handlers;
pub mod settings;
