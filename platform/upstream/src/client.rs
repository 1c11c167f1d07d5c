use entity::EmployeeInput;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::UpstreamSettings;
use crate::dto::{DeleteByName, EmployeeRecord, Envelope};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("employee service rate limited the request")]
    RateLimited,
    #[error("employee resource not found")]
    NotFound,
    #[error("unexpected employee service status: {0}")]
    Status(StatusCode),
    #[error("employee service response carried no data")]
    MissingData,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Thin reqwest wrapper around the employee service endpoints. One call per
/// operation; no caching, no retries.
#[derive(Clone, Debug)]
pub struct EmployeeClient {
    http: reqwest::Client,
    base_url: String,
}

impl EmployeeClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.read_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET {base}`. An envelope without data counts as an empty directory.
    pub async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, UpstreamError> {
        let response = self.http.get(&self.base_url).send().await?;
        let envelope: Envelope<Vec<EmployeeRecord>> = check(response)?.json().await?;
        let Some(records) = envelope.data else {
            warn!("employee list response carried no data; treating as empty");
            return Ok(Vec::new());
        };
        debug!(count = records.len(), "fetched employee list");
        Ok(records)
    }

    /// `GET {base}/{id}`. Both an upstream 404 and a dataless envelope mean
    /// the id is unknown.
    pub async fn fetch_by_id(&self, id: Uuid) -> Result<EmployeeRecord, UpstreamError> {
        let url = format!("{}/{id}", self.base_url);
        let response = self.http.get(&url).send().await?;
        let envelope: Envelope<EmployeeRecord> = check(response)?.json().await?;
        envelope.data.ok_or(UpstreamError::NotFound)
    }

    /// `POST {base}`. The upstream assigns the id and echoes the record back.
    pub async fn create(&self, input: &EmployeeInput) -> Result<EmployeeRecord, UpstreamError> {
        let response = self.http.post(&self.base_url).json(input).send().await?;
        let envelope: Envelope<EmployeeRecord> = check(response)?.json().await?;
        envelope.data.ok_or(UpstreamError::MissingData)
    }

    /// `DELETE {base}` with a name body; the upstream keys deletion on the
    /// employee name. Returns whether anything was actually deleted.
    pub async fn delete_by_name(&self, name: &str) -> Result<bool, UpstreamError> {
        let response = self
            .http
            .delete(&self.base_url)
            .json(&DeleteByName { name })
            .send()
            .await?;
        let envelope: Envelope<bool> = check(response)?.json().await?;
        Ok(envelope.data.unwrap_or(false))
    }
}

fn check(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(UpstreamError::RateLimited);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(UpstreamError::NotFound);
    }
    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }
    Ok(response)
}
