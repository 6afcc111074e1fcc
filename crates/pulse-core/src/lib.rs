pub mod error;
pub mod source;
pub mod types;

pub use error::Error;
pub use source::HealthSource;
pub use types::{HealthReport, STARTUP_MESSAGE};
