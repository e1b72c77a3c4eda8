use tracing::{error, info};

use crate::domain::entities::record::Record;
use crate::usecase::ports::source::{RecordSource, SourceError};

pub struct LoadService<S> {
    source: S,
}

impl<S: RecordSource> LoadService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Single attempt, no retry. A failure is logged and surfaces as `Err`
    /// so the caller can leave the table untouched.
    pub async fn load(&self) -> Result<Vec<Record>, SourceError> {
        let location = self.source.location();
        match self.source.fetch_records().await {
            Ok(records) => {
                info!(location, count = records.len(), "records loaded");
                Ok(records)
            }
            Err(err) => {
                error!(location, error = %err, "error fetching records");
                Err(err)
            }
        }
    }
}
