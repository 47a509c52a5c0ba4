pub mod error_construct;
pub mod query_constructor_executor;
