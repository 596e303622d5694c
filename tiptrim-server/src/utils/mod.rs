//! Utility modules

pub mod logger;
pub mod validation;

pub use logger::init_logger;
