pub mod health;
pub mod host;
