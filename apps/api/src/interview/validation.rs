use crate::errors::{AppError, INVALID_INPUT_MESSAGE};
use crate::interview::models::GenerationRequest;

/// A request whose fields are trimmed and known to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub company: String,
    pub job_title: String,
}

/// Rejects requests where either field is missing, null or blank after trimming.
pub fn validate_request(request: &GenerationRequest) -> Result<ValidatedRequest, AppError> {
    let company = request.company.as_deref().unwrap_or_default().trim();
    let job_title = request.job_title.as_deref().unwrap_or_default().trim();

    if company.is_empty() || job_title.is_empty() {
        return Err(AppError::InvalidInput(INVALID_INPUT_MESSAGE.to_string()));
    }

    Ok(ValidatedRequest {
        company: company.to_string(),
        job_title: job_title.to_string(),
    })
}
