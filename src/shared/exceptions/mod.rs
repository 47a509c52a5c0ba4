pub mod exception;
pub mod persistence_error;
