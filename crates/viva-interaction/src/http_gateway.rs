//! HTTP implementation of the interview gateway.
//!
//! Talks to the interview service over its REST surface: multipart for
//! the resume artifact, form posts for missing info and answers, plain
//! GETs for the read-only views.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, multipart};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use viva_core::candidate::{CandidateOverview, CandidateReport};
use viva_core::{
    AnswerReply, CandidateId, IntakeReply, InterviewGateway, ProfileField, Result, ResumeFile,
    VivaError,
};

use crate::config::GatewayConfig;
use crate::wire::{CandidateDto, ChatResponse, IntakeResponse, SummaryResponse};

/// Gateway implementation that talks to the interview service over HTTP.
pub struct HttpInterviewGateway {
    client: Client,
    base_url: String,
}

impl HttpInterviewGateway {
    /// Creates a new gateway with the provided configuration.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| VivaError::network(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a gateway from environment configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and deserializes a successful response body.
    ///
    /// Transport failures become [`VivaError::Network`]; non-2xx statuses
    /// and undeserializable bodies become [`VivaError::Server`].
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|err| {
            VivaError::network(format!("interview service request failed: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, body));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| VivaError::server(format!("failed to parse service response: {err}")))
    }
}

#[async_trait]
impl InterviewGateway for HttpInterviewGateway {
    async fn upload_resume(&self, file: &ResumeFile) -> Result<IntakeReply> {
        tracing::debug!(
            file_name = file.file_name(),
            size = file.bytes().len(),
            "uploading resume"
        );

        let part = multipart::Part::bytes(file.bytes().to_vec())
            .file_name(file.file_name().to_string())
            .mime_str(file.mime_type())
            .map_err(|err| {
                VivaError::validation(format!("resume could not be staged for upload: {err}"))
            })?;
        let form = multipart::Form::new().part("file", part);

        let response: IntakeResponse = self
            .execute(self.client.post(self.url("/upload_resume")).multipart(form))
            .await?;
        response.into_reply()
    }

    async fn submit_missing_info(
        &self,
        candidate_id: &CandidateId,
        values: &[(ProfileField, String)],
    ) -> Result<IntakeReply> {
        tracing::debug!(candidate_id = %candidate_id, fields = values.len(), "submitting missing info");

        let mut form: Vec<(&str, String)> = vec![("candidate_id", candidate_id.to_string())];
        for (field, value) in values {
            form.push((field.as_str(), value.clone()));
        }

        let response: IntakeResponse = self
            .execute(
                self.client
                    .post(self.url("/submit_missing_info"))
                    .form(&form),
            )
            .await?;
        response.into_reply()
    }

    async fn submit_answer(
        &self,
        candidate_id: &CandidateId,
        answer: &str,
    ) -> Result<AnswerReply> {
        tracing::debug!(candidate_id = %candidate_id, "submitting answer");

        let form = [
            ("candidate_id", candidate_id.to_string()),
            ("answer", answer.to_string()),
        ];

        let response: ChatResponse = self
            .execute(self.client.post(self.url("/chat")).form(&form))
            .await?;
        response.into_reply()
    }

    async fn fetch_candidate(&self, candidate_id: &CandidateId) -> Result<CandidateReport> {
        let response: SummaryResponse = self
            .execute(self.client.get(self.url(&format!("/summary/{candidate_id}"))))
            .await?;
        response.into_report()
    }

    async fn list_candidates(&self) -> Result<Vec<CandidateOverview>> {
        let response: Vec<CandidateDto> = self
            .execute(self.client.get(self.url("/candidates")))
            .await?;
        response
            .into_iter()
            .map(CandidateDto::into_overview)
            .collect()
    }
}

/// Error body the service attaches to non-2xx responses. FastAPI-style
/// backends use `detail`, the interview endpoints themselves use `error`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

fn map_http_error(status: StatusCode, body: String) -> VivaError {
    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error.or(envelope.detail).unwrap_or(body),
        Err(_) => body,
    };
    let message = if message.trim().is_empty() {
        status.to_string()
    } else {
        message
    };
    VivaError::server(format!(
        "interview service returned {}: {}",
        status.as_u16(),
        message
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prefers_the_error_field() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": "no resume on file"}"#.to_string(),
        );
        assert!(err.is_server());
        assert!(err.to_string().contains("no resume on file"));
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn http_error_falls_back_to_detail_then_raw_body() {
        let err = map_http_error(
            StatusCode::NOT_FOUND,
            r#"{"detail": "Not Found"}"#.to_string(),
        );
        assert!(err.to_string().contains("Not Found"));

        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream died".to_string());
        assert!(err.to_string().contains("upstream died"));
    }

    #[test]
    fn empty_error_body_uses_the_status_line() {
        let err = map_http_error(StatusCode::SERVICE_UNAVAILABLE, String::new());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let gateway =
            HttpInterviewGateway::new(GatewayConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(gateway.url("/chat"), "http://localhost:8000/chat");
    }
}
