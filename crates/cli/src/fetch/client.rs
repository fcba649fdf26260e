use reqwest::Client;
use reqwest::StatusCode;

use jobscope_insights::series::MetricRecord;

use crate::fetch::RecordSource;
use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

/// The job market statistics API client.
#[derive(Clone)]
pub(crate) struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    pub(crate) fn new(base_url: String) -> StatsClient {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = Client::new();

        Self { client, base_url }
    }
}

impl RecordSource for StatsClient {
    async fn records(&self, endpoint: &str) -> Result<Vec<MetricRecord>> {
        let url = format!("{base_url}{endpoint}", base_url = self.base_url);
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let records: Vec<MetricRecord> = response.json().await?;
                Ok(records)
            }
            status_code => {
                let message = response.text().await?;
                let error = FetchError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_base_url_keeps_no_trailing_slash() {
        let client = StatsClient::new(String::from("http://localhost:5000/"));

        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
