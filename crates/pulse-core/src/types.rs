use serde::{Deserialize, Serialize};

/// Text reported by a freshly scaffolded backend.
pub const STARTUP_MESSAGE: &str = "initial setup done from backend";

/// The health payload returned by the server's root endpoint.
///
/// Shared by server and client so the wire shape is checked at the
/// deserialization boundary rather than read as untyped JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub message: String,
}

impl HealthReport {
    /// The fixed report the server constructs for every request.
    #[must_use]
    pub fn startup() -> Self {
        Self {
            message: STARTUP_MESSAGE.to_string(),
        }
    }
}
