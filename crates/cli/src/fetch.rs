pub(crate) mod client;
pub(crate) mod error;

use jobscope_insights::series::MetricRecord;

use crate::fetch::error::Result;

/// A source of the statistics records backing one panel.
///
/// The render orchestration is generic over the source so it can be
/// exercised with stub records in tests.
pub(crate) trait RecordSource {
    /// Fetches the records of the given endpoint.
    async fn records(&self, endpoint: &str) -> Result<Vec<MetricRecord>>;
}
