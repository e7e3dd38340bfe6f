//! Markdown section assembly for the CLI.
//!
//! A minimal [`Assembler`] implementation that renders the classified
//! outputs into a reviewable brief. Richer assemblers (platform constraint
//! sections, template packs) plug in through the same trait.

use briefkit_core::{AudienceSuggestion, BrandAnalysis, ExtractedContent, JourneyType};
use briefkit_pipeline::Assembler;

pub struct BriefAssembler;

const NOT_SPECIFIED: &str = "(Not specified)";

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        format!("- {NOT_SPECIFIED}")
    } else {
        items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Assembler for BriefAssembler {
    fn format_offer(&self, content: &ExtractedContent) -> anyhow::Result<String> {
        let headline = or_placeholder(&content.value_proposition.headline);
        let primary_cta = or_placeholder(&content.ctas.primary);
        Ok(format!(
            "# Offer & Timeline\n\n\
             **Offer Headline:** {headline}\n\n\
             **Primary CTA:** {primary_cta}\n\n\
             ## Key Benefits\n\n{}\n",
            bullet_list(&content.value_proposition.key_benefits)
        ))
    }

    fn merge_brief(
        &self,
        brand: &BrandAnalysis,
        audience: &AudienceSuggestion,
        offer_section: &str,
    ) -> anyhow::Result<String> {
        let mut brief = format!(
            "# Campaign Brief\n\n\
             > Review and edit this document before generation.\n\n\
             ---\n\n\
             # Brand Profile\n\n\
             | Field | Value |\n|-------|-------|\n\
             | Company Name | {} |\n\
             | Industry | {} |\n\
             | Tone | {} |\n\
             | Target Emotion | {} |\n\n\
             ## Key Phrases\n\n{}\n\n\
             ## Words to Avoid\n\n{}\n\n\
             ---\n\n\
             # Audience Segments\n\n\
             **Journey Type:** {:?}\n\n\
             **Recommended Paths:** {}\n\n\
             **Segmentation Question:** \"{}\"\n",
            or_placeholder(&brand.company_name),
            or_placeholder(&brand.industry),
            brand.tone.join(", "),
            or_placeholder(&brand.target_emotion),
            bullet_list(&brand.key_phrases),
            bullet_list(&brand.words_to_avoid),
            audience.journey_type,
            audience.recommended_paths,
            audience.segmentation_question,
        );

        for (i, segment) in audience.segments.iter().enumerate() {
            let identity = match segment.segment_type {
                JourneyType::B2C => format!("**Age Range:** {}", or_placeholder(&segment.age_range)),
                JourneyType::B2B => format!(
                    "**Company Size:** {}",
                    or_placeholder(&segment.company_size)
                ),
            };
            brief.push_str(&format!(
                "\n## Segment {}: {}\n\n\
                 {}\n\n{identity}\n\n\
                 ### Pain Points\n\n{}\n\n\
                 ### Goals\n\n{}\n",
                i + 1,
                segment.name,
                or_placeholder(&segment.description),
                bullet_list(&segment.pain_points),
                bullet_list(&segment.goals),
            ));
        }

        brief.push_str(&format!("\n---\n\n{offer_section}"));
        Ok(brief)
    }
}
