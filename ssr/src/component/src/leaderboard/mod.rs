pub mod api;
pub mod error;
pub mod table;
pub mod types;
