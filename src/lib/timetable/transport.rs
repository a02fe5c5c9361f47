use log::{debug, info};
use reqwest::Client;
use serde_json::Value;

use super::error::TransportError;

/// What came back from the backend, already read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .unwrap_or_default()
                .to_owned(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A trait, necessary for every entity that talks to the timetable backend.
/// One call is exactly one request, there are no retries.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<HttpReply, TransportError>;

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError>;

    async fn delete(&self, url: &str) -> Result<HttpReply, TransportError>;
}

async fn read_reply(response: reqwest::Response) -> Result<HttpReply, TransportError> {
    let status = response.status();
    let body = response.text().await?;
    debug!("Response {} with body {}", status, body);
    Ok(HttpReply {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_owned(),
        body,
    })
}

/// Allows Client to be used as a transport via real HTTP requests.
impl Transport for Client {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<HttpReply, TransportError> {
        info!("GET {} {:?}", url, query);
        let response = Client::get(self, url).query(query).send().await?;
        read_reply(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError> {
        info!("POST {}", url);
        debug!("Request body {}", body);
        let response = self.post(url).json(body).send().await?;
        read_reply(response).await
    }

    async fn delete(&self, url: &str) -> Result<HttpReply, TransportError> {
        info!("DELETE {}", url);
        let response = Client::delete(self, url).send().await?;
        read_reply(response).await
    }
}
