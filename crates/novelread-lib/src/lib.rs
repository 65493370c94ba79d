pub mod api;
pub mod carousel;
pub mod config;
pub mod error;
pub mod fetch_slot;
pub mod format;
pub mod load_state;
pub mod models;
pub mod parallax;
pub mod route;
pub mod sanitize;
pub mod sort;
pub mod view;

pub use error::{Error, Result};

/// Version reported in the browser console at startup.
pub static LIB_VERSION: &str = env!("CARGO_PKG_VERSION");
