//! REST client for the survey backend.
//!
//! Every endpoint answers with the envelope `{ success, data?, error?, message? }`.
//! Reads go through [`with_retry_if`] and are retried on 5xx, 429 and
//! transport failures. Writes get a single attempt unless configured otherwise.

use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use crate::survey::{Survey, SurveyError, SurveyStatus};
use anyhow::Context;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Survey API error ({status}) on {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Survey API rejected {endpoint}: {reason}")]
    Rejected { endpoint: String, reason: String },

    #[error("Failed to parse response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    #[error("Response from {0} contained no data")]
    MissingData(String),

    #[error("Survey has no id; create it before {0}")]
    MissingId(&'static str),

    #[error("Only published surveys can be assigned (status is {0})")]
    NotAssignable(SurveyStatus),

    #[error("No clients given to assign the survey to")]
    NoClients,

    #[error(transparent)]
    Survey(#[from] SurveyError),
}

impl ApiError {
    /// 5xx, 429 and transport failures are worth another attempt.
    /// Other 4xx answers and local errors are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport { .. } => true,
            ApiError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct AssignRequest<'a> {
    #[serde(rename = "clientIds")]
    client_ids: &'a [String],
}

/// Result of assigning a survey to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Assignment {
    pub assigned: usize,
}

pub struct SurveyApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    read_retry: RetryConfig,
    write_retry: RetryConfig,
}

impl SurveyApiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(
            client,
            &config.api_base_url,
            config.api_token.clone(),
        ))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            read_retry: RetryConfig::survey_read(),
            write_retry: RetryConfig::single_attempt(),
        }
    }

    pub fn with_read_retry(mut self, retry: RetryConfig) -> Self {
        self.read_retry = retry;
        self
    }

    pub fn with_write_retry(mut self, retry: RetryConfig) -> Self {
        self.write_retry = retry;
        self
    }

    pub async fn list_surveys(&self) -> Result<Vec<Survey>, ApiError> {
        self.read("surveys").await
    }

    pub async fn get_survey(&self, id: &str) -> Result<Survey, ApiError> {
        self.read(&format!("surveys/{}", id)).await
    }

    pub async fn create_survey(&self, survey: &Survey) -> Result<Survey, ApiError> {
        let created: Survey = self
            .write(Method::POST, "surveys", survey)
            .await?
            .ok_or_else(|| ApiError::MissingData("surveys".to_string()))?;
        info!(
            "Created survey {} ({})",
            created.id.as_deref().unwrap_or("<no id>"),
            created.title
        );
        Ok(created)
    }

    pub async fn update_survey(&self, survey: &Survey) -> Result<Survey, ApiError> {
        let id = survey.id.as_deref().ok_or(ApiError::MissingId("updating"))?;
        let path = format!("surveys/{}", id);
        self.write(Method::PUT, &path, survey)
            .await?
            .ok_or(ApiError::MissingData(path))
    }

    pub async fn delete_survey(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("surveys/{}", id);
        let _: Option<serde_json::Value> = self
            .send(Method::DELETE, &path, None::<&()>, &self.write_retry)
            .await?;
        info!("Deleted survey {}", id);
        Ok(())
    }

    /// Apply a status transition locally, then persist it.
    pub async fn transition_survey(
        &self,
        survey: &Survey,
        target: SurveyStatus,
    ) -> Result<Survey, ApiError> {
        let updated = survey.transition_status(target)?;
        self.update_survey(&updated).await
    }

    /// Assign a published survey to the given clients.
    pub async fn assign_survey(
        &self,
        survey: &Survey,
        client_ids: &[String],
    ) -> Result<Assignment, ApiError> {
        if survey.status != SurveyStatus::Published {
            return Err(ApiError::NotAssignable(survey.status));
        }
        if client_ids.is_empty() {
            return Err(ApiError::NoClients);
        }
        let id = survey.id.as_deref().ok_or(ApiError::MissingId("assigning"))?;
        let path = format!("surveys/{}/assign", id);

        let assignment: Assignment = self
            .write(Method::POST, &path, &AssignRequest { client_ids })
            .await?
            .ok_or(ApiError::MissingData(path))?;
        info!("Assigned survey {} to {} clients", id, assignment.assigned);
        Ok(assignment)
    }

    /// Fetch a survey, copy it as a new draft and store the copy.
    pub async fn duplicate_survey(&self, id: &str) -> Result<Survey, ApiError> {
        let source = self.get_survey(id).await?;
        self.create_survey(&source.duplicate()).await
    }

    async fn read<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, None::<&()>, &self.read_retry)
            .await?
            .ok_or_else(|| ApiError::MissingData(path.to_string()))
    }

    async fn write<T, B>(&self, method: Method, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(method, path, Some(body), &self.write_retry).await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        retry: &RetryConfig,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{} {}", method, path);
        with_retry_if(
            retry,
            &endpoint,
            || async {
                let mut request = self.request(method.clone(), path);
                if let Some(body) = body {
                    request = request.json(body);
                }
                self.execute(request, &endpoint).await
            },
            ApiError::is_retryable,
        )
        .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<Option<T>, ApiError> {
        debug!("Survey API: {}", endpoint);

        let response = request.send().await.map_err(|source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !envelope.success {
            let reason = envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| "no reason given".to_string());
            return Err(ApiError::Rejected {
                endpoint: endpoint.to_string(),
                reason,
            });
        }

        Ok(envelope.data)
    }
}
