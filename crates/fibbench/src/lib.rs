//! fibbench library: configuration, dispatch, and error mapping for the
//! benchmark driver.

pub mod app;
pub mod config;
pub mod errors;
