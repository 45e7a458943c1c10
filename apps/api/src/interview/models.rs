use serde::{Deserialize, Serialize};

/// Identifier used when the provider omits one.
pub const DEFAULT_QUESTION_ID: &str = "Q1";

/// Body of `POST /api/generate`.
///
/// Absent and `null` fields both land as `None` and fail validation with a 400.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, rename = "jobTitle")]
    pub job_title: Option<String>,
}

impl GenerationRequest {
    pub fn new(company: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            job_title: Some(job_title.into()),
        }
    }
}

/// A single generated interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub evaluation_focus: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub question: Question,
}
