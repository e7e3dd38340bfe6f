//! Audience segment suggestion.

use briefkit_core::{
    AudienceInput, AudienceSegment, AudienceSuggestion, AwarenessLevel, BuyingStage,
    ExtractedContent, JourneyType,
};

use crate::segments;

const FALLBACK_QUESTION: &str = "What's most important to you?";
const GOAL_QUESTION: &str = "What's your main goal right now?";
const AWARENESS_QUESTION: &str = "How familiar are you with this type of product?";
const B2B_QUESTION: &str = "What's your company's biggest challenge right now?";

/// Suggests 1–3 audience segments for the journey.
///
/// A user-supplied audience becomes the primary segment verbatim, paired
/// with one synthesized contrasting segment. Without user input the
/// authored per-industry table is consulted, falling back to a single
/// generic segment built from the product name and benefits.
#[must_use]
pub fn suggest_audiences(
    content: &ExtractedContent,
    journey_type: JourneyType,
    user_provided: Option<&AudienceInput>,
) -> AudienceSuggestion {
    let industry = if content.brand.industry.is_empty() {
        "general business"
    } else {
        content.brand.industry.as_str()
    };
    let product_name = if content.product.name.is_empty() {
        "the product"
    } else {
        content.product.name.as_str()
    };

    let segments = match user_provided {
        Some(input) => {
            let primary = segment_from_user_input(input, journey_type);
            let secondary = contrasting_segment(journey_type, &primary);
            vec![primary, secondary]
        }
        None => segments_for_industry(
            industry,
            journey_type,
            product_name,
            &content.value_proposition.key_benefits,
        ),
    };

    let segmentation_question = segmentation_question(&segments);
    let recommended_paths = segments.len().min(3);
    tracing::debug!(
        industry,
        segments = segments.len(),
        "audience suggestion built"
    );

    AudienceSuggestion {
        journey_type,
        segments,
        recommended_paths,
        segmentation_question,
    }
}

fn segment_from_user_input(input: &AudienceInput, journey_type: JourneyType) -> AudienceSegment {
    let mut segment = AudienceSegment::new(
        input.name.clone().unwrap_or_else(|| "Primary Audience".to_string()),
        journey_type,
    );
    segment.description = input.description.clone().unwrap_or_default();
    segment.age_range = input.age_range.clone().unwrap_or_default();
    segment.location = input.location.clone().unwrap_or_default();
    segment.occupation = input.occupation.clone().unwrap_or_default();

    if journey_type == JourneyType::B2B {
        segment.company_size = input.company_size.clone().unwrap_or_default();
        segment.job_titles = input.job_titles.clone();
        segment.industry = input.industry.clone().unwrap_or_default();
    }

    segment.pain_points = input.pain_points.clone();
    segment.goals = input.goals.clone();
    segment
}

/// Synthesizes one segment that contrasts with the user's primary: by age
/// bracket for B2C, by company size for B2B.
fn contrasting_segment(journey_type: JourneyType, primary: &AudienceSegment) -> AudienceSegment {
    match journey_type {
        JourneyType::B2C => {
            let primary_is_young =
                primary.age_range.contains("18-") || primary.age_range.contains("25-");
            if primary_is_young {
                let mut s = AudienceSegment::new("Established Professionals", JourneyType::B2C);
                s.description =
                    "More established individuals with different priorities".to_string();
                s.age_range = "35-55".to_string();
                s.awareness_level = AwarenessLevel::SolutionAware;
                s.buying_stage = BuyingStage::Consideration;
                s.pain_points =
                    vec!["Time constraints".to_string(), "Want proven solutions".to_string()];
                s.goals = vec!["Efficiency".to_string(), "Reliability".to_string()];
                s
            } else {
                let mut s = AudienceSegment::new("Young Professionals", JourneyType::B2C);
                s.description = "Younger audience entering this market".to_string();
                s.age_range = "25-35".to_string();
                s.awareness_level = AwarenessLevel::ProblemAware;
                s.buying_stage = BuyingStage::Awareness;
                s.pain_points = vec!["New to this".to_string(), "Budget conscious".to_string()];
                s.goals = vec!["Getting started".to_string(), "Learning".to_string()];
                s
            }
        }
        JourneyType::B2B => {
            let mut s = AudienceSegment::new("Growing Companies", JourneyType::B2B);
            s.description = "Companies in growth phase".to_string();
            s.company_size = "11-50 employees".to_string();
            s.job_titles = vec!["Operations Manager".to_string(), "Team Lead".to_string()];
            s.awareness_level = AwarenessLevel::ProblemAware;
            s.buying_stage = BuyingStage::Consideration;
            s.pain_points =
                vec!["Scaling challenges".to_string(), "Resource constraints".to_string()];
            s.goals = vec!["Efficiency".to_string(), "Growth enablement".to_string()];
            s
        }
    }
}

fn segments_for_industry(
    industry: &str,
    journey_type: JourneyType,
    product_name: &str,
    benefits: &[String],
) -> Vec<AudienceSegment> {
    let mut segments = segments::for_industry(industry, journey_type)
        .unwrap_or_else(|| vec![default_segment(journey_type, product_name, benefits)]);
    segments.truncate(3);
    segments
}

fn default_segment(
    journey_type: JourneyType,
    product_name: &str,
    benefits: &[String],
) -> AudienceSegment {
    match journey_type {
        JourneyType::B2C => {
            let mut s = AudienceSegment::new("Primary Audience", JourneyType::B2C);
            s.description = format!("Target customers for {product_name}");
            s.age_range = "25-55".to_string();
            s.awareness_level = AwarenessLevel::ProblemAware;
            s.buying_stage = BuyingStage::Consideration;
            s.pain_points = vec!["Looking for solutions".to_string()];
            s.goals = if benefits.is_empty() {
                vec!["Solve their problem".to_string()]
            } else {
                benefits.iter().take(3).cloned().collect()
            };
            s
        }
        JourneyType::B2B => {
            let mut s = AudienceSegment::new("Business Decision Makers", JourneyType::B2B);
            s.description = format!("Key decision makers for {product_name}");
            s.job_titles =
                vec!["Manager".to_string(), "Director".to_string(), "VP".to_string()];
            s.company_size = "10-500 employees".to_string();
            s.awareness_level = AwarenessLevel::SolutionAware;
            s.buying_stage = BuyingStage::Consideration;
            s.pain_points = vec!["Need efficient solutions".to_string()];
            s.goals = vec!["Improve operations".to_string(), "Reduce costs".to_string()];
            s
        }
    }
}

fn segmentation_question(segments: &[AudienceSegment]) -> String {
    if segments.len() < 2 {
        return FALLBACK_QUESTION.to_string();
    }
    match segments[0].segment_type {
        JourneyType::B2C => {
            let first_goals: Vec<&String> = segments
                .iter()
                .filter_map(|s| s.goals.first())
                .collect();
            let goals_differ = first_goals.windows(2).any(|pair| pair[0] != pair[1]);
            if goals_differ {
                GOAL_QUESTION.to_string()
            } else {
                AWARENESS_QUESTION.to_string()
            }
        }
        JourneyType::B2B => B2B_QUESTION.to_string(),
    }
}

// --------------------------------------------------------------------------
// Tests
// --------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use briefkit_core::SourceKind;

    fn content(industry: &str) -> ExtractedContent {
        let mut c = ExtractedContent::new("https://acme.example.com", SourceKind::Url);
        c.brand.industry = industry.to_string();
        c
    }

    #[test]
    fn known_industry_uses_authored_table() {
        let suggestion =
            suggest_audiences(&content("financial services"), JourneyType::B2C, None);
        assert_eq!(suggestion.segments.len(), 2);
        assert_eq!(suggestion.segments[0].name, "First-Time Savers");
        assert_eq!(suggestion.recommended_paths, 2);
    }

    #[test]
    fn unknown_industry_synthesizes_generic_segment() {
        let mut c = content("general business");
        c.product.name = "Acme Billing".to_string();
        c.value_proposition.key_benefits =
            vec!["Faster invoicing".to_string(), "Fewer errors".to_string()];

        let suggestion = suggest_audiences(&c, JourneyType::B2C, None);
        assert_eq!(suggestion.segments.len(), 1);
        assert_eq!(suggestion.segments[0].name, "Primary Audience");
        assert!(suggestion.segments[0].description.contains("Acme Billing"));
        assert_eq!(
            suggestion.segments[0].goals,
            vec!["Faster invoicing".to_string(), "Fewer errors".to_string()]
        );
        assert_eq!(suggestion.recommended_paths, 1);
        assert_eq!(suggestion.segmentation_question, FALLBACK_QUESTION);
    }

    #[test]
    fn user_input_becomes_primary_with_contrasting_secondary() {
        let input = AudienceInput {
            name: Some("Recent Graduates".to_string()),
            age_range: Some("18-25".to_string()),
            goals: vec!["Start saving".to_string()],
            ..AudienceInput::default()
        };
        let suggestion =
            suggest_audiences(&content("general business"), JourneyType::B2C, Some(&input));

        assert_eq!(suggestion.segments.len(), 2);
        assert_eq!(suggestion.segments[0].name, "Recent Graduates");
        assert_eq!(suggestion.segments[1].name, "Established Professionals");
    }

    #[test]
    fn older_primary_gets_young_professionals_contrast() {
        let input = AudienceInput {
            age_range: Some("45-60".to_string()),
            ..AudienceInput::default()
        };
        let suggestion =
            suggest_audiences(&content("general business"), JourneyType::B2C, Some(&input));
        assert_eq!(suggestion.segments[1].name, "Young Professionals");
    }

    #[test]
    fn b2b_contrast_is_always_growing_companies() {
        let input = AudienceInput {
            name: Some("Enterprise IT".to_string()),
            company_size: Some("1000+ employees".to_string()),
            ..AudienceInput::default()
        };
        let suggestion =
            suggest_audiences(&content("saas"), JourneyType::B2B, Some(&input));
        assert_eq!(suggestion.segments[1].name, "Growing Companies");
        assert_eq!(suggestion.segmentation_question, B2B_QUESTION);
    }

    #[test]
    fn firmographics_only_populated_for_b2b() {
        let input = AudienceInput {
            company_size: Some("10-50".to_string()),
            job_titles: vec!["CTO".to_string()],
            ..AudienceInput::default()
        };
        let b2c = segment_from_user_input(&input, JourneyType::B2C);
        assert!(b2c.company_size.is_empty());
        assert!(b2c.job_titles.is_empty());

        let b2b = segment_from_user_input(&input, JourneyType::B2B);
        assert_eq!(b2b.company_size, "10-50");
        assert_eq!(b2b.job_titles, vec!["CTO".to_string()]);
    }

    #[test]
    fn b2c_question_depends_on_goal_divergence() {
        let differing =
            suggest_audiences(&content("financial services"), JourneyType::B2C, None);
        assert_eq!(differing.segmentation_question, GOAL_QUESTION);
    }

    #[test]
    fn recommended_paths_tracks_segment_count() {
        for industry in ["financial services", "saas", "general business"] {
            for journey in [JourneyType::B2B, JourneyType::B2C] {
                let suggestion = suggest_audiences(&content(industry), journey, None);
                assert!((1..=3).contains(&suggestion.segments.len()));
                assert_eq!(
                    suggestion.recommended_paths,
                    suggestion.segments.len().min(3)
                );
            }
        }
    }
}
