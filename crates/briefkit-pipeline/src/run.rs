//! The pipeline coordinator.

use briefkit_classify::{analyze_brand, suggest_audiences};
use briefkit_core::{
    AppConfig, AudienceInput, AudienceSuggestion, BrandAnalysis, BrandPreferences,
    ExtractedContent, JourneyType,
};
use briefkit_extract::{merge_sources, ExtractError, FetchClient};

use crate::steps::{PipelineResult, RunStatus, StepStatus};

/// Text already extracted from an uploaded document by the PDF collaborator.
#[derive(Debug, Clone)]
pub struct DocumentText {
    pub name: String,
    pub text: String,
    pub pages: usize,
}

/// One pipeline invocation's inputs. Source order is meaningful: URLs are
/// reconciled before documents, in the order given here.
#[derive(Debug, Clone, Default)]
pub struct PipelineRequest {
    pub urls: Vec<String>,
    pub documents: Vec<DocumentText>,
    pub journey_type: JourneyType,
    pub brand_preferences: Option<BrandPreferences>,
    pub audience: Option<AudienceInput>,
}

/// Downstream document assembly: turns classified outputs into the offer
/// section and the combined brief. Implementations live outside the core.
pub trait Assembler {
    /// Formats the offer/timeline section for the reconciled content.
    ///
    /// # Errors
    ///
    /// Implementations may fail (e.g. template rendering); the failure is
    /// recorded as a step-level error and aborts the run.
    fn format_offer(&self, content: &ExtractedContent) -> anyhow::Result<String>;

    /// Merges brand, audience, and offer outputs into one reviewable brief.
    ///
    /// # Errors
    ///
    /// Same contract as [`format_offer`](Self::format_offer).
    fn merge_brief(
        &self,
        brand: &BrandAnalysis,
        audience: &AudienceSuggestion,
        offer_section: &str,
    ) -> anyhow::Result<String>;
}

type ProgressFn = Box<dyn Fn(&str, &str) + Send + Sync>;

/// Coordinates one extract → brand → audience → offer → brief sequence.
pub struct Pipeline<A: Assembler> {
    fetch: FetchClient,
    assembler: A,
    progress: Option<ProgressFn>,
}

impl<A: Assembler> Pipeline<A> {
    /// Builds a pipeline with the given assembler.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig, assembler: A) -> Result<Self, ExtractError> {
        Ok(Self {
            fetch: FetchClient::new(config)?,
            assembler,
            progress: None,
        })
    }

    /// Registers an observational progress callback receiving
    /// `(step_name, message)` pairs. The callback has no control-flow
    /// effect and must not block.
    #[must_use]
    pub fn with_progress(mut self, progress: impl Fn(&str, &str) + Send + Sync + 'static) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    fn emit(&self, step: &str, message: &str) {
        tracing::info!(step, "{message}");
        if let Some(progress) = &self.progress {
            progress(step, message);
        }
    }

    /// Runs the full pipeline.
    ///
    /// Never returns an error: failures are reported through
    /// [`PipelineResult::status`] and [`PipelineResult::error`], with every
    /// step completed before the failure preserved in
    /// [`PipelineResult::steps`].
    pub async fn run(&self, request: &PipelineRequest) -> PipelineResult {
        let mut result = PipelineResult::default();

        // Step 1: extract and reconcile sources. A failed source is recorded
        // and skipped; only zero usable sources fails the run.
        result.status = RunStatus::Extracting;
        self.emit("extract", "Extracting content from sources...");

        let extractions = self.extract_sources(request, &mut result).await;
        let merged = match merge_sources(extractions) {
            Ok(merged) => merged,
            Err(ExtractError::NoContent) => {
                result.fail("No content could be extracted from provided sources");
                return result;
            }
            Err(other) => {
                result.fail(other.to_string());
                return result;
            }
        };
        result.add_step("extract", StepStatus::Complete, "Extracted content from sources");

        // Step 2: brand analysis.
        result.status = RunStatus::Analyzing;
        self.emit("brand", "Analyzing brand characteristics...");
        let brand = analyze_brand(&merged, request.brand_preferences.as_ref());
        result.add_step(
            "brand",
            StepStatus::Complete,
            format!("Analyzed brand: {}", brand.company_name),
        );

        // Step 3: audience segments.
        self.emit("audience", "Generating audience segments...");
        let audience = suggest_audiences(&merged, request.journey_type, request.audience.as_ref());
        result.add_step(
            "audience",
            StepStatus::Complete,
            format!("Suggested {} audience segments", audience.segments.len()),
        );

        // Step 4: offer section via the external assembler.
        result.status = RunStatus::Generating;
        self.emit("offer", "Structuring offer and timeline...");
        let offer_section = match self.assembler.format_offer(&merged) {
            Ok(section) => section,
            Err(err) => {
                result.add_failed_step("offer", "Failed to structure offer", err.to_string());
                result.extracted_content = Some(merged);
                result.brand_analysis = Some(brand);
                result.audience_suggestion = Some(audience);
                result.fail(err.to_string());
                return result;
            }
        };
        result.add_step("offer", StepStatus::Complete, "Generated offer and timeline structure");

        // Step 5: combined brief.
        self.emit("merge", "Merging into combined brief...");
        let brief = match self.assembler.merge_brief(&brand, &audience, &offer_section) {
            Ok(brief) => brief,
            Err(err) => {
                result.add_failed_step("merge", "Failed to merge brief", err.to_string());
                result.extracted_content = Some(merged);
                result.brand_analysis = Some(brand);
                result.audience_suggestion = Some(audience);
                result.offer_section = offer_section;
                result.fail(err.to_string());
                return result;
            }
        };
        result.add_step("merge", StepStatus::Complete, "Created combined brief for review");

        result.extracted_content = Some(merged);
        result.brand_analysis = Some(brand);
        result.audience_suggestion = Some(audience);
        result.offer_section = offer_section;
        result.brief = brief;
        result.status = RunStatus::Review;
        self.emit("complete", "Ready for review");
        result
    }

    /// Extracts every source in request order: URLs first, then documents.
    /// Sources whose extraction degraded are recorded and excluded from
    /// reconciliation.
    async fn extract_sources(
        &self,
        request: &PipelineRequest,
        result: &mut PipelineResult,
    ) -> Vec<ExtractedContent> {
        let mut extractions = Vec::new();

        for url in &request.urls {
            self.emit("extract", &format!("Scraping {url}..."));
            let extraction = self.fetch.extract_url(url).await;
            match extraction.error {
                None => {
                    result.add_step(
                        "extract_url",
                        StepStatus::Complete,
                        format!("Extracted from {url}"),
                    );
                    extractions.push(extraction.content);
                }
                Some(err) => {
                    result.add_failed_step(
                        "extract_url",
                        format!("Failed to extract from {url}"),
                        err,
                    );
                }
            }
        }

        for document in &request.documents {
            self.emit("extract", &format!("Extracting from {}...", document.name));
            let extraction = self.fetch.extract_text(&document.text, &document.name);
            result.add_step(
                "extract_pdf",
                StepStatus::Complete,
                format!("Extracted from {} ({} pages)", document.name, document.pages),
            );
            extractions.push(extraction.content);
        }

        extractions
    }
}

// --------------------------------------------------------------------------
// Tests
// --------------------------------------------------------------------------
