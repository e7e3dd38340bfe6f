//! Run and step bookkeeping for pipeline invocations.

use serde::Serialize;

use briefkit_core::{AudienceSuggestion, BrandAnalysis, ExtractedContent};

/// Overall state of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Extracting,
    Analyzing,
    Generating,
    /// Terminal success state: the brief is assembled and awaits review.
    Review,
    Complete,
    Error,
}

/// State of one recorded step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Running,
    Complete,
    Error,
}

/// One step's outcome, kept for diagnostic display even when a later step
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub name: String,
    pub status: StepStatus,
    pub message: String,
    pub error: Option<String>,
}

/// Everything a pipeline run produced, including partial results of failed
/// runs.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub status: RunStatus,
    pub steps: Vec<StepRecord>,

    // Intermediate outputs.
    pub extracted_content: Option<ExtractedContent>,
    pub brand_analysis: Option<BrandAnalysis>,
    pub audience_suggestion: Option<AudienceSuggestion>,

    // Assembled outputs.
    pub offer_section: String,
    pub brief: String,

    /// Run-level error. Set together with `status == Error`.
    pub error: Option<String>,
}

impl Default for PipelineResult {
    fn default() -> Self {
        Self {
            status: RunStatus::Pending,
            steps: Vec::new(),
            extracted_content: None,
            brand_analysis: None,
            audience_suggestion: None,
            offer_section: String::new(),
            brief: String::new(),
            error: None,
        }
    }
}

impl PipelineResult {
    pub(crate) fn add_step(&mut self, name: &str, status: StepStatus, message: impl Into<String>) {
        self.steps.push(StepRecord {
            name: name.to_string(),
            status,
            message: message.into(),
            error: None,
        });
    }

    pub(crate) fn add_failed_step(
        &mut self,
        name: &str,
        message: impl Into<String>,
        error: impl Into<String>,
    ) {
        self.steps.push(StepRecord {
            name: name.to_string(),
            status: StepStatus::Error,
            message: message.into(),
            error: Some(error.into()),
        });
    }

    /// Moves the run into its terminal error state, keeping completed steps.
    pub(crate) fn fail(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.status = RunStatus::Error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&RunStatus::Review).unwrap(), "\"review\"");
        assert_eq!(serde_json::to_string(&StepStatus::Complete).unwrap(), "\"complete\"");
    }

    #[test]
    fn fail_preserves_existing_steps() {
        let mut result = PipelineResult::default();
        result.add_step("extract", StepStatus::Complete, "done");
        result.fail("boom");
        assert_eq!(result.status, RunStatus::Error);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.error.as_deref(), Some("boom"));
    }
}
