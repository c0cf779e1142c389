//! Study plan generation: one fixed prompt, role and week count substituted in.

use serde_json::Value;
use tracing::error;

use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::TextGenerator;
use crate::study_plan::prompts::STUDY_PLAN_PROMPT_TEMPLATE;

pub const DEFAULT_ROLE: &str = "Software Engineer";
pub const DEFAULT_WEEKS: u32 = 4;
pub const MAX_WEEKS: u32 = 52;

/// Resolves the requested role; absent, `null` or blank selects `DEFAULT_ROLE`.
///
/// Non-string values are used in their JSON form, so `5` becomes `"5"`.
pub fn resolve_role(role: Option<&Value>) -> String {
    let role = match role {
        None | Some(Value::Null) => return DEFAULT_ROLE.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    };

    if role.is_empty() {
        DEFAULT_ROLE.to_string()
    } else {
        role
    }
}

/// Resolves the requested week count.
///
/// Accepts a JSON integer or a numeric string. Absent or `null` selects
/// `DEFAULT_WEEKS`. Anything else, or a value outside `1..=MAX_WEEKS`, is a
/// validation error.
pub fn resolve_weeks(weeks: Option<&Value>) -> Result<u32, AppError> {
    let parsed = match weeks {
        None | Some(Value::Null) => return Ok(DEFAULT_WEEKS),
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(w) if (1..=MAX_WEEKS).contains(&w) => Ok(w),
        _ => Err(AppError::Validation(format!(
            "weeks must be a whole number between 1 and {MAX_WEEKS}"
        ))),
    }
}

pub fn build_study_plan_prompt(role: &str, weeks: u32) -> String {
    let weeks = weeks.to_string();
    fill_template(
        STUDY_PLAN_PROMPT_TEMPLATE,
        &[("weeks", weeks.as_str()), ("role", role)],
    )
}

/// Generates the plan text. A failed model call is reported inline as
/// `"Error: <cause>"` rather than as an error response.
pub async fn generate_study_plan(generator: &dyn TextGenerator, role: &str, weeks: u32) -> String {
    let prompt = build_study_plan_prompt(role, weeks);

    match generator.generate(&prompt).await {
        Ok(plan) => plan,
        Err(e) => {
            error!("Study plan generation failed for {role} ({weeks} weeks): {e}");
            format!("Error: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeGenerator, FakeReply};
    use serde_json::json;

    #[test]
    fn test_resolve_role_defaults() {
        assert_eq!(resolve_role(None), "Software Engineer");
        assert_eq!(resolve_role(Some(&Value::Null)), "Software Engineer");
        assert_eq!(resolve_role(Some(&json!("   "))), "Software Engineer");
        assert_eq!(resolve_role(Some(&json!(" Data Scientist "))), "Data Scientist");
    }

    #[test]
    fn test_resolve_role_stringifies_other_values() {
        assert_eq!(resolve_role(Some(&json!(5))), "5");
        assert_eq!(resolve_role(Some(&json!(true))), "true");
    }

    #[test]
    fn test_resolve_weeks_defaults_to_four() {
        assert_eq!(resolve_weeks(None).unwrap(), 4);
        assert_eq!(resolve_weeks(Some(&Value::Null)).unwrap(), 4);
    }

    #[test]
    fn test_resolve_weeks_accepts_number_and_numeric_string() {
        assert_eq!(resolve_weeks(Some(&json!(6))).unwrap(), 6);
        assert_eq!(resolve_weeks(Some(&json!("8"))).unwrap(), 8);
        assert_eq!(resolve_weeks(Some(&json!(" 12 "))).unwrap(), 12);
    }

    #[test]
    fn test_resolve_weeks_rejects_out_of_range() {
        assert!(resolve_weeks(Some(&json!(0))).is_err());
        assert!(resolve_weeks(Some(&json!(53))).is_err());
        assert!(resolve_weeks(Some(&json!(-2))).is_err());
    }

    #[test]
    fn test_resolve_weeks_rejects_non_integers() {
        assert!(resolve_weeks(Some(&json!(2.5))).is_err());
        assert!(resolve_weeks(Some(&json!("four"))).is_err());
        assert!(resolve_weeks(Some(&json!([4]))).is_err());
        assert!(resolve_weeks(Some(&json!(true))).is_err());
    }

    #[test]
    fn test_prompt_embeds_role_and_weeks() {
        let prompt = build_study_plan_prompt("Data Analyst", 6);
        assert!(prompt.starts_with(
            "Generate a 6-week structured interview preparation plan for a Data Analyst."
        ));
        assert!(prompt.contains("Week 4: Programming Languages & Web Development"));
    }

    #[tokio::test]
    async fn test_generate_returns_model_text() {
        let generator = FakeGenerator::text("Week 1: Arrays");
        let plan = generate_study_plan(generator.as_ref(), "SDE", 2).await;
        assert_eq!(plan, "Week 1: Arrays");
        assert!(generator.last_prompt().unwrap().contains("2-week"));
    }

    #[tokio::test]
    async fn test_generate_failure_is_inline_error() {
        let generator = FakeGenerator::new(FakeReply::Fail);
        let plan = generate_study_plan(generator.as_ref(), "SDE", 2).await;
        assert!(plan.starts_with("Error: "));
        assert!(plan.contains("model overloaded"));
    }
}
