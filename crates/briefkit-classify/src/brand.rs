//! Brand voice classification.
//!
//! Every derivation here reads from static tables in a fixed order, then an
//! optional user-preference overlay is applied last and always wins.

use briefkit_core::{
    truncate_chars, BrandAnalysis, BrandPreferences, EmojiUsage, ExtractedContent, Formality,
};

/// Tone labels that read as casual copy.
const CASUAL_INDICATORS: &[&str] = &["friendly", "fun", "casual", "playful"];
/// Tone labels that read as formal copy.
const FORMAL_INDICATORS: &[&str] = &["premium", "luxury", "established", "traditional"];

/// Industry → personality traits. Industries missing here get the generic
/// pair below.
const INDUSTRY_TRAITS: &[(&str, &[&str])] = &[
    ("financial services", &["trustworthy", "reliable", "expert"]),
    ("e-commerce", &["helpful", "efficient", "customer-focused"]),
    ("saas", &["innovative", "smart", "solution-oriented"]),
    ("healthcare", &["caring", "professional", "supportive"]),
    ("education", &["knowledgeable", "encouraging", "patient"]),
    ("real estate", &["local expert", "trustworthy", "responsive"]),
    (
        "grant management",
        &["innovative", "caring", "solution-oriented", "impact-focused"],
    ),
    ("recruitment", &["people-focused", "efficient", "responsive"]),
    ("travel", &["inspiring", "helpful", "trustworthy"]),
    ("marketing automation", &["innovative", "smart", "results-driven"]),
];
const GENERIC_TRAITS: &[&str] = &["professional", "helpful"];

/// Phrases unsafe in any vertical's marketing copy.
const GENERAL_AVOID: &[&str] = &["spam", "guaranteed", "no risk", "act now"];
const FINANCIAL_AVOID: &[&str] = &[
    "guaranteed returns",
    "risk-free",
    "get rich",
    "best rates",
    "no-brainer",
];
const HEALTHCARE_AVOID: &[&str] = &["cure", "miracle", "guaranteed results", "no side effects"];

/// Regulated or sensitive verticals where emoji never belong.
const FORMAL_INDUSTRIES: &[&str] = &["financial services", "healthcare", "legal"];

const EMOTION_MAP: &[(&str, &str)] = &[
    ("financial services", "security"),
    ("e-commerce", "excitement"),
    ("saas", "confidence"),
    ("healthcare", "reassurance"),
    ("education", "aspiration"),
    ("real estate", "trust"),
    ("grant management", "empowerment"),
    ("marketing automation", "confidence"),
];
const DEFAULT_EMOTION: &str = "trust";

/// Derives a [`BrandAnalysis`] from reconciled content.
///
/// Preferences, when given, overwrite derived values field for field after
/// all derivation is done.
#[must_use]
pub fn analyze_brand(
    content: &ExtractedContent,
    preferences: Option<&BrandPreferences>,
) -> BrandAnalysis {
    let mut analysis = BrandAnalysis {
        company_name: content.brand.name.clone(),
        industry: if content.brand.industry.is_empty() {
            "general business".to_string()
        } else {
            content.brand.industry.clone()
        },
        ..BrandAnalysis::default()
    };

    analysis.tone = if content.brand.tone_keywords.is_empty() {
        vec!["professional".to_string()]
    } else {
        content.brand.tone_keywords.clone()
    };

    analysis.formality_level = derive_formality(&analysis.tone);
    analysis.personality_traits = derive_personality(&analysis.industry, &analysis.tone);

    // Colors map positionally onto the palette; defaults fill the rest.
    let colors = &content.brand.colors;
    if let Some(primary) = colors.first() {
        analysis.primary_color = primary.clone();
    }
    if let Some(accent) = colors.get(1) {
        analysis.accent_color = accent.clone();
    }
    if let Some(background) = colors.get(2) {
        analysis.background_color = background.clone();
    }

    let headline = &content.value_proposition.headline;
    if !headline.is_empty() {
        analysis.key_phrases.push(headline.clone());
    }
    analysis.key_phrases.extend(
        content.value_proposition.key_benefits.iter().take(3).cloned(),
    );

    analysis.words_to_avoid = words_to_avoid(&analysis.industry);
    analysis.emoji_recommendation =
        recommend_emoji_usage(analysis.formality_level, &analysis.industry);

    analysis.value_statement = if headline.is_empty() {
        truncate_chars(&content.product.description, 200)
    } else {
        headline.clone()
    };

    analysis.target_emotion = EMOTION_MAP
        .iter()
        .find(|(industry, _)| *industry == analysis.industry)
        .map_or(DEFAULT_EMOTION, |(_, emotion)| *emotion)
        .to_string();

    if let Some(preferences) = preferences {
        apply_preferences(&mut analysis, preferences);
    }

    tracing::debug!(
        industry = %analysis.industry,
        formality = ?analysis.formality_level,
        "brand analysis derived"
    );
    analysis
}

fn derive_formality(tone: &[String]) -> Formality {
    if tone.iter().any(|t| CASUAL_INDICATORS.contains(&t.as_str())) {
        Formality::Casual
    } else if tone.iter().any(|t| FORMAL_INDICATORS.contains(&t.as_str())) {
        Formality::Formal
    } else {
        Formality::Professional
    }
}

/// Union of industry traits and tone-derived traits, first-seen order,
/// capped at 5.
fn derive_personality(industry: &str, tone: &[String]) -> Vec<String> {
    let mut traits: Vec<String> = INDUSTRY_TRAITS
        .iter()
        .find(|(name, _)| *name == industry)
        .map_or(GENERIC_TRAITS, |(_, traits)| *traits)
        .iter()
        .map(|t| (*t).to_string())
        .collect();

    let tone_has = |label: &str| tone.iter().any(|t| t == label);
    if tone_has("friendly") {
        traits.push("approachable".to_string());
    }
    if tone_has("innovative") {
        traits.push("forward-thinking".to_string());
    }
    if tone_has("premium") {
        traits.push("sophisticated".to_string());
    }

    let mut deduped = Vec::new();
    for t in traits {
        if !deduped.contains(&t) {
            deduped.push(t);
        }
    }
    deduped.truncate(5);
    deduped
}

fn words_to_avoid(industry: &str) -> Vec<String> {
    let industry_list: &[&str] = match industry {
        "financial services" => FINANCIAL_AVOID,
        "healthcare" => HEALTHCARE_AVOID,
        _ => &[],
    };
    GENERAL_AVOID
        .iter()
        .chain(industry_list)
        .map(|w| (*w).to_string())
        .collect()
}

fn recommend_emoji_usage(formality: Formality, industry: &str) -> EmojiUsage {
    if FORMAL_INDUSTRIES.contains(&industry) || formality == Formality::Formal {
        EmojiUsage::None
    } else if formality == Formality::Casual {
        EmojiUsage::Moderate
    } else {
        EmojiUsage::Minimal
    }
}

fn apply_preferences(analysis: &mut BrandAnalysis, preferences: &BrandPreferences) {
    if let Some(name) = &preferences.company_name {
        analysis.company_name = name.clone();
    }
    if let Some(tone) = &preferences.tone {
        analysis.tone = tone.clone().into_vec();
    }
    if let Some(color) = &preferences.primary_color {
        analysis.primary_color = color.clone();
    }
    if let Some(color) = &preferences.accent_color {
        analysis.accent_color = color.clone();
    }
    match preferences.use_emojis {
        Some(false) => analysis.emoji_recommendation = EmojiUsage::None,
        Some(true) => analysis.emoji_recommendation = EmojiUsage::Moderate,
        None => {}
    }
    if let Some(phrases) = &preferences.brand_phrases {
        analysis.key_phrases = phrases.clone();
    }
}

// --------------------------------------------------------------------------
// Tests
// --------------------------------------------------------------------------
