use crate::domain::entities::record::Record;
use crate::usecase::ports::source::{RecordSource, SourceError};

/// Unauthenticated GET of a static JSON array of records.
pub struct HttpRecordSource {
    pub url: String,
    client: reqwest::Client,
}

impl HttpRecordSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl RecordSource for HttpRecordSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_records(&self) -> Result<Vec<Record>, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| SourceError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Record>>()
            .await
            .map_err(|err| SourceError::Decode(err.to_string()))
    }
}
