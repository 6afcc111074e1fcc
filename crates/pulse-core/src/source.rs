use async_trait::async_trait;

use crate::error::Error;
use crate::types::HealthReport;

/// Source of health reports. Views depend on this trait rather than a
/// concrete HTTP client so they can be driven by a fixed or failing
/// source in tests.
#[async_trait]
pub trait HealthSource: Send + Sync {
    /// Fetch the current health report.
    async fn fetch(&self) -> Result<HealthReport, Error>;
}
