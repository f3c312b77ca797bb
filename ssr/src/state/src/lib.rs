pub mod auth;
#[cfg(feature = "ssr")]
pub mod server;
