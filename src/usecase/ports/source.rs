use crate::domain::entities::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("source returned status {0}")]
    Status(u16),
    #[error("response is not a record list: {0}")]
    Decode(String),
}

/// Read-only origin of the record collection, queried once at startup.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    fn location(&self) -> &str;

    async fn fetch_records(&self) -> Result<Vec<Record>, SourceError>;
}
