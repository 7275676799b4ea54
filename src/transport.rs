use crate::models::{
    BackendStatus, ChatboxRequest, ChatboxResponse, FitnessPlanRequest, FitnessPlanResponse,
    MoodChatRequest, MoodChatResponse, ReportAnalysis, UploadedFile,
};
use reqwest::{Client, Response, multipart};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Backend calls the companion knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    MoodChat,
    FitnessPlan,
    ChatboxMessage,
    AnalyzeReport,
}

impl Endpoint {
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::MoodChat => "mood-chat",
            Endpoint::FitnessPlan => "fitness-plan",
            Endpoint::ChatboxMessage => "chatbox-message",
            Endpoint::AnalyzeReport => "analyze-report",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::MoodChat => "/chat/mood",
            Endpoint::FitnessPlan => "/fitness/plan",
            Endpoint::ChatboxMessage => "/chatbox",
            Endpoint::AnalyzeReport => "/health/report",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("backend unavailable: {0}")]
    TransportUnavailable(String),

    #[error("unexpected response body: {0}")]
    MalformedResponse(String),
}

impl TransportError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::MalformedResponse(err.to_string())
        } else {
            TransportError::TransportUnavailable(err.to_string())
        }
    }
}

/// Thin HTTP client bound to one backend base URL. No retries, no timeouts.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("wellbeing-companion/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub async fn mood_chat(
        &self,
        request: &MoodChatRequest,
    ) -> Result<MoodChatResponse, TransportError> {
        self.post_json(Endpoint::MoodChat, request).await
    }

    pub async fn fitness_plan(
        &self,
        request: &FitnessPlanRequest,
    ) -> Result<FitnessPlanResponse, TransportError> {
        self.post_json(Endpoint::FitnessPlan, request).await
    }

    pub async fn chatbox_message(
        &self,
        request: &ChatboxRequest,
    ) -> Result<ChatboxResponse, TransportError> {
        self.post_json(Endpoint::ChatboxMessage, request).await
    }

    /// Uploads the file as the single multipart field `file`.
    pub async fn analyze_report(
        &self,
        file: UploadedFile,
    ) -> Result<ReportAnalysis, TransportError> {
        let endpoint = Endpoint::AnalyzeReport;
        debug!(%endpoint, file = %file.name, bytes = file.bytes.len(), "uploading report");
        let part = multipart::Part::bytes(file.bytes).file_name(file.name);
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|err| unavailable(endpoint, err))?;
        decode(endpoint.name(), response).await
    }

    /// Health probe against the backend root.
    pub async fn status(&self) -> Result<BackendStatus, TransportError> {
        let url = format!("{}/", self.base_url);
        debug!(%url, "checking backend status");
        let response = self.http.get(url).send().await.map_err(|err| {
            warn!("backend status check failed: {err}");
            TransportError::TransportUnavailable(err.to_string())
        })?;
        decode("status", response).await
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%endpoint, "sending request");
        let response = self
            .http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|err| unavailable(endpoint, err))?;
        decode(endpoint.name(), response).await
    }
}

fn unavailable(endpoint: Endpoint, err: reqwest::Error) -> TransportError {
    warn!(%endpoint, "backend unreachable: {err}");
    TransportError::TransportUnavailable(err.to_string())
}

async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        let body = failure_body(response.text().await);
        warn!(%endpoint, status = status.as_u16(), "backend request failed: {body}");
        return Err(TransportError::RequestFailed {
            status: status.as_u16(),
            body,
        });
    }

    response.json::<T>().await.map_err(|err| {
        warn!(%endpoint, "could not decode backend response: {err}");
        TransportError::from_reqwest(err)
    })
}

fn failure_body(read: reqwest::Result<String>) -> String {
    read.unwrap_or_else(|err| format!("<unreadable body: {err}>"))
}
