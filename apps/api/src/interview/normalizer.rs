//! Response Normalizer — turns raw provider text into a well-formed `Question`.
//!
//! `normalize` is total: malformed JSON, an unexpected shape or a blank
//! question all resolve to the locally built fallback, never to an error.

use serde_json::{Map, Value};
use tracing::warn;

use crate::interview::models::{Question, DEFAULT_QUESTION_ID};
use crate::llm_client::strip_json_fences;

/// Evaluation focus attached to every fallback question.
pub const FALLBACK_EVALUATION_FOCUS: [&str; 3] =
    ["기업 문화 이해도", "직무 역량 분석", "가치 창출 사고"];

/// Which acceptance rule matched the parsed object.
#[derive(Debug, PartialEq, Eq)]
enum Shape<'a> {
    /// Both an identifier and a question are present.
    Identified { id: &'a str, question: &'a str },
    /// Only a question is present; the default identifier applies.
    QuestionOnly { question: &'a str },
    Unrecognized,
}

fn non_empty_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn classify(object: &Map<String, Value>) -> Shape<'_> {
    match (non_empty_str(object, "id"), non_empty_str(object, "question")) {
        (Some(id), Some(question)) => Shape::Identified { id, question },
        (None, Some(question)) => Shape::QuestionOnly { question },
        _ => Shape::Unrecognized,
    }
}

/// Accepts `evaluation_focus` only as an array of strings; anything else is empty.
fn evaluation_focus(object: &Map<String, Value>) -> Vec<String> {
    let Some(items) = object.get("evaluation_focus").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

fn try_normalize(raw: &str) -> Result<Question, String> {
    let value: Value =
        serde_json::from_str(strip_json_fences(raw)).map_err(|e| format!("invalid JSON: {e}"))?;
    let object = value
        .as_object()
        .ok_or_else(|| "response is not a JSON object".to_string())?;

    let (id, question) = match classify(object) {
        Shape::Identified { id, question } => (id, question),
        Shape::QuestionOnly { question } => (DEFAULT_QUESTION_ID, question),
        Shape::Unrecognized => return Err("no usable question field".to_string()),
    };

    if question.trim().is_empty() {
        return Err("question text is blank".to_string());
    }

    Ok(Question {
        id: id.to_string(),
        question: question.to_string(),
        evaluation_focus: evaluation_focus(object),
    })
}

/// Deterministic question built only from the request, used whenever the
/// provider output cannot be validated.
pub fn fallback_question(company: &str, job_title: &str) -> Question {
    Question {
        id: DEFAULT_QUESTION_ID.to_string(),
        question: format!(
            "{company}의 {job_title} 직무에서 요구되는 핵심 역량과 {company}의 기업 문화가 \
             어떻게 연결되는지, 그리고 이를 바탕으로 당신이 이 직무에서 어떤 가치를 창출할 수 \
             있다고 생각하시나요?"
        ),
        evaluation_focus: FALLBACK_EVALUATION_FOCUS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Normalizes provider text into a `Question`, substituting the fallback on any failure.
pub fn normalize(raw: &str, company: &str, job_title: &str) -> Question {
    match try_normalize(raw) {
        Ok(question) => question,
        Err(reason) => {
            warn!("Falling back to local question ({reason}); raw provider text: {raw}");
            fallback_question(company, job_title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPANY: &str = "카카오";
    const JOB: &str = "서비스 기획자";

    fn assert_fallback(question: &Question) {
        assert_eq!(question, &fallback_question(COMPANY, JOB));
        assert!(question.question.contains(COMPANY));
        assert!(question.question.contains(JOB));
        assert_eq!(question.evaluation_focus.len(), 3);
    }

    #[test]
    fn test_well_formed_payload_round_trips() {
        let q = normalize(
            r#"{"id":"Q1","question":"X","evaluation_focus":["a","b"]}"#,
            COMPANY,
            JOB,
        );
        assert_eq!(
            q,
            Question {
                id: "Q1".into(),
                question: "X".into(),
                evaluation_focus: vec!["a".into(), "b".into()],
            }
        );
    }

    #[test]
    fn test_provider_identifier_is_kept() {
        let q = normalize(r#"{"id":"Q7","question":"Z"}"#, COMPANY, JOB);
        assert_eq!(q.id, "Q7");
    }

    #[test]
    fn test_question_only_gets_default_id_and_empty_focus() {
        let q = normalize(r#"{"question":"Y"}"#, COMPANY, JOB);
        assert_eq!(
            q,
            Question {
                id: "Q1".into(),
                question: "Y".into(),
                evaluation_focus: vec![],
            }
        );
    }

    #[test]
    fn test_prose_falls_back() {
        let q = normalize("Here is a great interview question for you!", COMPANY, JOB);
        assert_fallback(&q);
    }

    #[test]
    fn test_blank_question_falls_back() {
        let q = normalize(r#"{"id":"Q9","question":"   "}"#, COMPANY, JOB);
        assert_fallback(&q);
    }

    #[test]
    fn test_missing_question_falls_back() {
        let q = normalize(r#"{"id":"Q2","evaluation_focus":["a"]}"#, COMPANY, JOB);
        assert_fallback(&q);
    }

    #[test]
    fn test_non_string_question_falls_back() {
        assert_fallback(&normalize(r#"{"question": 42}"#, COMPANY, JOB));
        assert_fallback(&normalize(r#"{"question": ["a"]}"#, COMPANY, JOB));
    }

    #[test]
    fn test_non_object_json_falls_back() {
        assert_fallback(&normalize(r#"["question"]"#, COMPANY, JOB));
        assert_fallback(&normalize("null", COMPANY, JOB));
        assert_fallback(&normalize("", COMPANY, JOB));
    }

    #[test]
    fn test_non_string_id_uses_default() {
        let q = normalize(r#"{"id": 9, "question":"W"}"#, COMPANY, JOB);
        assert_eq!(q.id, "Q1");
        assert_eq!(q.question, "W");
    }

    #[test]
    fn test_malformed_evaluation_focus_is_emptied() {
        let wrong_type = normalize(r#"{"question":"Q","evaluation_focus":"a, b"}"#, COMPANY, JOB);
        assert!(wrong_type.evaluation_focus.is_empty());

        let mixed = normalize(r#"{"question":"Q","evaluation_focus":["a", 2]}"#, COMPANY, JOB);
        assert!(mixed.evaluation_focus.is_empty());
    }

    #[test]
    fn test_fenced_payload_is_accepted() {
        let q = normalize(
            "```json\n{\"id\":\"Q1\",\"question\":\"F\",\"evaluation_focus\":[\"x\"]}\n```",
            COMPANY,
            JOB,
        );
        assert_eq!(q.question, "F");
        assert_eq!(q.evaluation_focus, vec!["x".to_string()]);
    }

    #[test]
    fn test_fallback_focus_is_fixed() {
        let q = fallback_question("Naver", "Backend Engineer");
        assert_eq!(
            q.evaluation_focus,
            vec!["기업 문화 이해도", "직무 역량 분석", "가치 창출 사고"]
        );
        assert_eq!(q.id, "Q1");
    }

    #[test]
    fn test_classify_orders_rules() {
        let both: Map<String, Value> =
            serde_json::from_str(r#"{"id":"A","question":"B"}"#).unwrap();
        assert_eq!(
            classify(&both),
            Shape::Identified {
                id: "A",
                question: "B"
            }
        );

        let only: Map<String, Value> = serde_json::from_str(r#"{"id":"","question":"B"}"#).unwrap();
        assert_eq!(classify(&only), Shape::QuestionOnly { question: "B" });

        let neither: Map<String, Value> = serde_json::from_str(r#"{"id":"A"}"#).unwrap();
        assert_eq!(classify(&neither), Shape::Unrecognized);
    }
}
