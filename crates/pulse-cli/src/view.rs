use pulse_core::source::HealthSource;
use pulse_core::types::HealthReport;

/// The client view: a single state slot that starts empty and holds the
/// last successfully fetched report.
#[derive(Default)]
pub struct HealthView {
    report: Option<HealthReport>,
}

impl HealthView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one report into the view. A failed fetch is logged and
    /// leaves the state untouched, so the view keeps rendering empty.
    pub async fn load(&mut self, source: &dyn HealthSource) {
        match source.fetch().await {
            Ok(report) => {
                tracing::debug!("received health report: {report:?}");
                self.report = Some(report);
            }
            Err(e) => {
                tracing::warn!("failed to fetch health report: {e}");
            }
        }
    }

    /// The displayed message, empty until a report has been loaded.
    #[must_use]
    pub fn message(&self) -> &str {
        self.report.as_ref().map_or("", |r| r.message.as_str())
    }

    /// Render the view: fixed heading plus the message line.
    #[must_use]
    pub fn render(&self) -> String {
        format!("Initial Setup\n{}", self.message())
    }
}
