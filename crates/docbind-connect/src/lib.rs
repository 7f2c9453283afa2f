//! HTTP glue to the remote document-rendering service.
//!
//! Everything here is transport: endpoints, retry backoff and template
//! fetching. Timeouts and transient-failure policy live at this layer, not
//! in the binding/validation core.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use docbind_model::{DocumentResponse, ExportBatchRequest, ExportRequest};

pub const EXPORT_SINGLE_ENDPOINT: &str = "/document-service/export/singlefile";
pub const EXPORT_MULTI_ENDPOINT: &str = "/document-service/export/multifile";
pub const MERGE_PDF_ENDPOINT: &str = "/document-service/export/merge-pdf";

/// Backoff schedule for transient failures (transport errors and 5xx).
pub const RETRY_DELAYS: [Duration; 3] = [
    Duration::from_millis(100),
    Duration::from_millis(500),
    Duration::from_secs(2),
];

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error {status} from {endpoint}")]
    Server {
        status: reqwest::StatusCode,
        endpoint: String,
    },
    #[error("template not found: {0}")]
    TemplateNotFound(String),
}

/// Blocking client for the document service.
pub struct DocumentConnector {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl DocumentConnector {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConnectError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Render one document from a template and payload.
    pub fn export_single(
        &self,
        request: &ExportRequest,
    ) -> Result<DocumentResponse, ConnectError> {
        self.post_with_retry(EXPORT_SINGLE_ENDPOINT, request)
    }

    /// Render one document per batch item against the same template.
    pub fn export_multiple(
        &self,
        request: &ExportBatchRequest,
    ) -> Result<DocumentResponse, ConnectError> {
        self.post_with_retry(EXPORT_MULTI_ENDPOINT, request)
    }

    /// Fetch template bytes from the storage service. An empty body is
    /// treated as a missing template.
    pub fn fetch_template(&self, uri: &str) -> Result<Vec<u8>, ConnectError> {
        let url = self.resolve(uri);
        let response = self.client.get(&url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        if bytes.is_empty() {
            return Err(ConnectError::TemplateNotFound(uri.to_string()));
        }
        Ok(bytes.to_vec())
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn resolve(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            uri.to_string()
        } else {
            self.endpoint_url(uri)
        }
    }

    fn post_with_retry<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ConnectError> {
        let url = self.endpoint_url(endpoint);
        let mut attempt = 0usize;
        loop {
            match self.post_once(&url, endpoint, body) {
                Ok(response) => return Ok(response),
                Err(error) if attempt < RETRY_DELAYS.len() && is_transient(&error) => {
                    warn!(endpoint, attempt, %error, "transient failure, retrying");
                    std::thread::sleep(RETRY_DELAYS[attempt]);
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn post_once<B: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ConnectError> {
        debug!(endpoint, "posting export request");
        let response = self.client.post(url).json(body).send()?;
        let status = response.status();
        if status.is_server_error() {
            return Err(ConnectError::Server {
                status,
                endpoint: endpoint.to_string(),
            });
        }
        Ok(response.error_for_status()?.json()?)
    }
}

fn is_transient(error: &ConnectError) -> bool {
    match error {
        ConnectError::Server { .. } => true,
        ConnectError::Http(inner) => inner.is_timeout() || inner.is_connect(),
        ConnectError::TemplateNotFound(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_join_without_duplicate_slashes() {
        let connector = DocumentConnector::new("http://bff.local/").expect("client");
        assert_eq!(
            connector.endpoint_url(EXPORT_SINGLE_ENDPOINT),
            "http://bff.local/document-service/export/singlefile"
        );
    }

    #[test]
    fn retry_schedule_backs_off() {
        assert_eq!(RETRY_DELAYS.len(), 3);
        assert!(RETRY_DELAYS[0] < RETRY_DELAYS[1]);
        assert!(RETRY_DELAYS[1] < RETRY_DELAYS[2]);
    }

    #[test]
    fn transient_classification_covers_server_errors_only() {
        let server = ConnectError::Server {
            status: reqwest::StatusCode::BAD_GATEWAY,
            endpoint: EXPORT_SINGLE_ENDPOINT.to_string(),
        };
        assert!(is_transient(&server));
        assert!(!is_transient(&ConnectError::TemplateNotFound(
            "t.xlsx".to_string()
        )));
    }
}
