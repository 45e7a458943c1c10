//! Presentation layer — form state for one interactive session and the
//! HTTP client it uses to reach `POST /api/generate`.
//!
//! State lives in an explicit `FormState` passed to `submit`; nothing is global.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use crate::errors::INVALID_INPUT_MESSAGE;
use crate::interview::models::{GenerationRequest, Question};
use crate::routes::health::HealthStatus;

pub const GENERATION_FAILED_MESSAGE: &str = "면접 질문 생성에 실패했습니다.";
pub const MISSING_QUESTION_MESSAGE: &str = "질문 데이터를 받을 수 없습니다.";

/// The one backend call the form makes.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Question, String>;
}

/// Form fields plus the outcome of the last submission.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub company: String,
    pub job_title: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub questions: Vec<Question>,
}

impl FormState {
    pub fn new(company: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            job_title: job_title.into(),
            ..Self::default()
        }
    }

    /// Clears the previous outcome, checks the fields locally, then calls the backend.
    /// Returns `true` when a question was received.
    pub async fn submit(&mut self, backend: &dyn GenerateBackend) -> bool {
        self.error = None;
        self.questions.clear();

        let company = self.company.trim();
        let job_title = self.job_title.trim();
        if company.is_empty() || job_title.is_empty() {
            self.error = Some(INVALID_INPUT_MESSAGE.to_string());
            return false;
        }

        let request = GenerationRequest::new(company, job_title);

        self.is_loading = true;
        let outcome = backend.generate(&request).await;
        self.is_loading = false;

        match outcome {
            Ok(question) => {
                self.questions = vec![question];
                true
            }
            Err(message) => {
                error!("Question generation failed: {message}");
                self.error = Some(message);
                false
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateEnvelope {
    question: Option<Question>,
    error: Option<String>,
}

/// Talks to a running API server over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }

    /// Fetches `GET /health` from the server.
    pub async fn health(&self) -> Result<HealthStatus, String> {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.to_string())?;
        response.json().await.map_err(|e| e.to_string())
    }
}

/// Maps a backend status and decoded body to the form's outcome.
fn interpret(success: bool, envelope: GenerateEnvelope) -> Result<Question, String> {
    if !success {
        return Err(envelope
            .error
            .unwrap_or_else(|| GENERATION_FAILED_MESSAGE.to_string()));
    }
    envelope
        .question
        .ok_or_else(|| MISSING_QUESTION_MESSAGE.to_string())
}

#[async_trait]
impl GenerateBackend for HttpBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<Question, String> {
        let response = self
            .client
            .post(self.generate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let success = response.status().is_success();
        let envelope: GenerateEnvelope = response.json().await.map_err(|e| e.to_string())?;
        interpret(success, envelope)
    }
}
