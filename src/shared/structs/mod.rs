pub mod error_struct;
