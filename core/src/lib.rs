pub mod error;
pub mod format;
pub mod models;

pub use error::{DonutError, Result};
