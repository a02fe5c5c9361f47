use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use super::{
    error::FetchError,
    helpers::{endpoint, error_message},
    models::Resource,
    renderer::{render, Page},
    transport::Transport,
};

/// Either the fetched list or a message saying why there is none.
pub type FetchResult<T> = Result<Fetched<T>, FetchError>;

/// A fetched list exactly as the backend sent it, next to the typed view of
/// each element. `records[i]` is `None` when `raw[i]` is not a usable record.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub raw: Vec<Value>,
    pub records: Vec<Option<T>>,
}

impl<T: Resource> Fetched<T> {
    /// Types every element, logging the ones that fail. Nothing is dropped.
    pub fn screen(raw: Vec<Value>) -> Self {
        let records = raw
            .iter()
            .enumerate()
            .map(|(index, value)| screen_record::<T>(index, value))
            .collect();
        Self { raw, records }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The records that passed screening.
    pub fn valid(&self) -> impl Iterator<Item = &T> {
        self.records.iter().flatten()
    }
}

/// One-shot loader of resource lists. Callers re-invoke it after mutations.
pub struct DataFetcher<'a, H: Transport> {
    transport: &'a H,
    api_base: &'a str,
}

impl<'a, H: Transport> DataFetcher<'a, H> {
    pub fn new(transport: &'a H, api_base: &'a str) -> Self {
        Self {
            transport,
            api_base,
        }
    }

    pub fn api_base(&self) -> &'a str {
        self.api_base
    }

    pub async fn fetch<T: Resource>(&self, query: &[(String, String)]) -> FetchResult<T> {
        let url = endpoint(self.api_base, T::PATH);
        let reply = self.transport.get(&url, query).await?;
        if !reply.is_success() {
            let message = error_message(&reply);
            warn!("Loading {} failed with {}: {}", url, reply.status, message);
            return Err(FetchError::Status {
                status: reply.status,
                message,
            });
        }
        let raw: Vec<Value> = serde_json::from_str(&reply.body)
            .map_err(|err| FetchError::Malformed(err.to_string()))?;
        let fetched = Fetched::<T>::screen(raw);
        info!("Fetched {} record(s) from {}", fetched.len(), url);
        Ok(fetched)
    }

    /// A full fetch + render cycle into `page`, using the page's own filter.
    pub async fn load<T: Resource>(&self, page: &mut Page) {
        let query = page.query.clone();
        let result = self.fetch::<T>(&query).await;
        render(page, &result);
    }
}

fn screen_record<T: Resource>(index: usize, value: &Value) -> Option<T> {
    if let Some(field) = T::REQUIRED_FIELDS
        .iter()
        .find(|field| value.get(**field).map_or(true, Value::is_null))
    {
        warn!("Record #{} is missing field {}", index, field);
        return None;
    }
    match T::deserialize(value) {
        Ok(record) => {
            if let Err(problem) = record.check() {
                warn!("Suspicious record #{}: {}", index, problem);
            }
            Some(record)
        }
        Err(err) => {
            warn!("Record #{} does not match the model: {}", index, err);
            None
        }
    }
}
