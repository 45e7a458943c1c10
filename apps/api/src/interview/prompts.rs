// All LLM prompt constants for interview question generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, JSON_ONLY_SYSTEM};

/// System prompt persona. `JSON_ONLY_SYSTEM` is appended by `system_prompt`.
const INTERVIEWER_SYSTEM: &str = "당신은 기업 문화와 직무 역량을 깊이 있게 분석하여 \
    날카로운 면접 질문을 생성하는 전문가입니다.";

/// Question prompt template.
/// Replace: {company}, {job_title}, {json_only}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"당신은 2026년 채용 트렌드에 맞는 면접 질문을 생성하는 전문가입니다.

회사명: {company}
지원 직무: {job_title}

위 정보를 바탕으로 {company}의 기업 문화와 {job_title} 직무의 핵심 역량을 날카롭게 파고드는 면접 질문 1개를 생성해주세요.
질문은 다음 형식의 JSON 객체로 응답해주세요:

{
  "id": "Q1",
  "question": "질문 내용",
  "evaluation_focus": ["평가 포인트1", "평가 포인트2", "평가 포인트3"]
}

요구사항:
- {company}의 실제 기업 문화, 가치관, 비즈니스 모델을 깊이 있게 이해한 후 질문을 생성해야 합니다
- {job_title} 직무에서 요구되는 핵심 역량과 실제 업무 상황을 반영한 질문이어야 합니다
- 단순한 일반적인 질문이 아닌, 해당 기업과 직무에 특화된 날카롭고 구체적인 질문이어야 합니다
- 지원자의 사고력, 문제 해결 능력, 기업 이해도, 직무 역량을 종합적으로 평가할 수 있는 질문이어야 합니다
- 평가 포인트는 2-3개 정도로 구체적으로 작성해주세요
- {json_only}"#;

pub fn system_prompt() -> String {
    format!("{INTERVIEWER_SYSTEM} {JSON_ONLY_SYSTEM}")
}

/// Builds the user prompt for one question about `company` / `job_title`.
pub fn build_question_prompt(company: &str, job_title: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{company}", company)
        .replace("{job_title}", job_title)
}
