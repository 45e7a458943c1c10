//! Question generator — one provider call, then normalization.

use tracing::info;

use crate::errors::AppError;
use crate::interview::models::Question;
use crate::interview::normalizer::normalize;
use crate::interview::prompts::{build_question_prompt, system_prompt};
use crate::interview::validation::ValidatedRequest;
use crate::llm_client::CompletionProvider;

/// Asks the provider for one question and normalizes the answer.
///
/// Provider failures and empty content propagate as errors; a malformed
/// answer does not, it is absorbed by the normalizer's fallback.
pub async fn generate_question(
    provider: &dyn CompletionProvider,
    api_key: &str,
    request: &ValidatedRequest,
) -> Result<Question, AppError> {
    let prompt = build_question_prompt(&request.company, &request.job_title);

    let raw = provider.complete(api_key, &system_prompt(), &prompt).await?;

    let question = normalize(&raw, &request.company, &request.job_title);
    info!(
        "Generated question {} for company={} job_title={}",
        question.id, request.company, request.job_title
    );
    Ok(question)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    /// Canned provider for tests. Records calls and the last prompt it saw.
    pub struct StubProvider {
        reply: Box<dyn Fn() -> Result<String, LlmError> + Send + Sync>,
        pub calls: AtomicUsize,
        pub last_prompt: Mutex<Option<String>>,
    }

    impl StubProvider {
        pub fn replying(text: &str) -> Self {
            let text = text.to_string();
            Self::with(move || Ok(text.clone()))
        }

        pub fn with(reply: impl Fn() -> Result<String, LlmError> + Send + Sync + 'static) -> Self {
            Self {
                reply: Box::new(reply),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(
            &self,
            _api_key: &str,
            _system: &str,
            prompt: &str,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            (self.reply)()
        }
    }

    fn request() -> ValidatedRequest {
        ValidatedRequest {
            company: "카카오".into(),
            job_title: "서비스 기획자".into(),
        }
    }

    #[tokio::test]
    async fn test_generate_normalizes_provider_text() {
        let provider = StubProvider::replying(r#"{"question":"카카오톡의 다음 기능은?"}"#);
        let question = generate_question(&provider, "sk-test", &request())
            .await
            .unwrap();
        assert_eq!(question.id, "Q1");
        assert_eq!(question.question, "카카오톡의 다음 기능은?");
        assert_eq!(provider.call_count(), 1);
        let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("카카오") && prompt.contains("서비스 기획자"));
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_prose() {
        let provider = StubProvider::replying("I cannot do that.");
        let question = generate_question(&provider, "sk-test", &request())
            .await
            .unwrap();
        assert!(question.question.contains("카카오"));
        assert_eq!(question.evaluation_focus.len(), 3);
    }

    #[tokio::test]
    async fn test_generate_propagates_provider_failure() {
        let provider = StubProvider::with(|| {
            Err(LlmError::Api {
                status: 500,
                message: "upstream down".into(),
            })
        });
        let err = generate_question(&provider, "sk-test", &request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[tokio::test]
    async fn test_generate_maps_empty_content() {
        let provider = StubProvider::with(|| Err(LlmError::EmptyContent));
        let err = generate_question(&provider, "sk-test", &request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyResponse));
    }
}
