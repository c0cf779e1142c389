//! Résumé analyzer: picks one of six fixed prompts and forwards the
//! extracted résumé text to the model.

use tracing::{error, warn};

use crate::analysis::prompts::{
    ATS_OPTIMIZATION, ATS_OPTIMIZATION_WITH_JD, DETAILED_ANALYSIS, DETAILED_ANALYSIS_WITH_JD,
    QUICK_SCAN, QUICK_SCAN_WITH_JD,
};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{LlmError, TextGenerator};

/// Returned in place of an analysis when the model call fails.
pub const AI_PROCESSING_ERROR: &str = "Error in AI processing.";
/// Returned in place of an analysis when the model answers without text.
pub const NO_RESPONSE: &str = "No response received.";

/// Which feedback template to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisType {
    #[default]
    QuickScan,
    DetailedAnalysis,
    AtsOptimization,
}

impl AnalysisType {
    /// Parses the `analysis_option` form value.
    ///
    /// Anything that is neither "Quick Scan" nor "Detailed Analysis" selects
    /// ATS optimization.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("Quick Scan") {
            AnalysisType::QuickScan
        } else if label.eq_ignore_ascii_case("Detailed Analysis") {
            AnalysisType::DetailedAnalysis
        } else {
            if !label.eq_ignore_ascii_case("ATS Optimization") {
                warn!("Unknown analysis option '{label}', using ATS Optimization");
            }
            AnalysisType::AtsOptimization
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalysisType::QuickScan => "Quick Scan",
            AnalysisType::DetailedAnalysis => "Detailed Analysis",
            AnalysisType::AtsOptimization => "ATS Optimization",
        }
    }

    fn template(self, with_job_description: bool) -> &'static str {
        match (self, with_job_description) {
            (AnalysisType::QuickScan, true) => QUICK_SCAN_WITH_JD,
            (AnalysisType::QuickScan, false) => QUICK_SCAN,
            (AnalysisType::DetailedAnalysis, true) => DETAILED_ANALYSIS_WITH_JD,
            (AnalysisType::DetailedAnalysis, false) => DETAILED_ANALYSIS,
            (AnalysisType::AtsOptimization, true) => ATS_OPTIMIZATION_WITH_JD,
            (AnalysisType::AtsOptimization, false) => ATS_OPTIMIZATION,
        }
    }
}

/// Builds the prompt for `analysis`. A blank job description counts as absent.
pub fn build_analysis_prompt(
    resume_text: &str,
    job_description: Option<&str>,
    analysis: AnalysisType,
) -> String {
    let job_description = job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty());
    let template = analysis.template(job_description.is_some());

    fill_template(
        template,
        &[
            ("resume_text", resume_text),
            ("job_description", job_description.unwrap_or_default()),
        ],
    )
}

/// Runs the analysis and returns the model's text verbatim.
///
/// Model failures do not propagate: they become `AI_PROCESSING_ERROR`
/// (or `NO_RESPONSE` when the model produced no text).
pub async fn analyze_resume(
    generator: &dyn TextGenerator,
    resume_text: &str,
    job_description: Option<&str>,
    analysis: AnalysisType,
) -> String {
    let prompt = build_analysis_prompt(resume_text, job_description, analysis);

    match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(LlmError::EmptyContent) => {
            warn!("Model returned no text for {} analysis", analysis.label());
            NO_RESPONSE.to_string()
        }
        Err(e) => {
            error!("Error in AI processing: {e}");
            AI_PROCESSING_ERROR.to_string()
        }
    }
}
