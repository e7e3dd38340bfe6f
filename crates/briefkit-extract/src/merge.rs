//! Multi-source reconciliation.
//!
//! The first source is the accumulator and always wins where it has data;
//! later sources only fill gaps and extend lists. URLs are expected before
//! documents in the input order, which gives structured markup precedence
//! over noisier PDF text.

use briefkit_core::ExtractedContent;

use crate::error::ExtractError;
use crate::patterns::push_unique;

/// Post-reconciliation list caps. `features` is allowed to grow past its
/// per-source cap of 8 because multiple sources usually describe different
/// facets of the same product.
const MERGED_BENEFITS_CAP: usize = 5;
const MERGED_FEATURES_CAP: usize = 10;
const MERGED_TESTIMONIALS_CAP: usize = 3;
const MERGED_STATS_CAP: usize = 5;

/// Reconciles per-source extractions into one record.
///
/// Scalar fields are first-wins: a later source supplies `headline` or
/// `subheadline` only when the accumulator's is still empty. List fields
/// are extended with items not already present, then truncated to their
/// caps. PDF and video asset lists are concatenated as-is.
///
/// # Errors
///
/// Returns [`ExtractError::NoContent`] when `sources` is empty. An empty
/// input is a distinct failure from sources that extracted nothing: callers
/// must not conflate "no sources" with "sources yielded no fields".
pub fn merge_sources(sources: Vec<ExtractedContent>) -> Result<ExtractedContent, ExtractError> {
    let mut iter = sources.into_iter();
    let mut merged = iter.next().ok_or(ExtractError::NoContent)?;

    for source in iter {
        tracing::debug!(source = %source.source, "merging source into accumulator");

        if merged.value_proposition.headline.is_empty() {
            merged.value_proposition.headline = source.value_proposition.headline;
        }
        if merged.value_proposition.subheadline.is_empty() {
            merged.value_proposition.subheadline = source.value_proposition.subheadline;
        }

        extend_unique(
            &mut merged.value_proposition.key_benefits,
            source.value_proposition.key_benefits,
        );
        extend_unique(&mut merged.product.features, source.product.features);
        extend_unique(
            &mut merged.social_proof.testimonials,
            source.social_proof.testimonials,
        );
        extend_unique(&mut merged.social_proof.stats, source.social_proof.stats);

        merged.assets.pdfs.extend(source.assets.pdfs);
        merged.assets.videos.extend(source.assets.videos);
    }

    merged.value_proposition.key_benefits.truncate(MERGED_BENEFITS_CAP);
    merged.product.features.truncate(MERGED_FEATURES_CAP);
    merged.social_proof.testimonials.truncate(MERGED_TESTIMONIALS_CAP);
    merged.social_proof.stats.truncate(MERGED_STATS_CAP);

    Ok(merged)
}

fn extend_unique(accumulator: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        push_unique(accumulator, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefkit_core::SourceKind;

    fn source(name: &str) -> ExtractedContent {
        ExtractedContent::new(name, SourceKind::Url)
    }

    #[test]
    fn empty_input_is_no_content_not_empty_record() {
        let err = merge_sources(Vec::new()).unwrap_err();
        assert!(matches!(err, ExtractError::NoContent));
    }

    #[test]
    fn all_empty_single_source_yields_empty_record() {
        let merged = merge_sources(vec![source("a")]).unwrap();
        assert!(merged.is_empty());
        assert_eq!(merged.source, "a");
    }

    #[test]
    fn single_source_passes_through() {
        let mut a = source("a");
        a.value_proposition.headline = "Only headline".to_string();
        let merged = merge_sources(vec![a.clone()]).unwrap();
        assert_eq!(merged, a);
    }

    #[test]
    fn scalars_are_first_wins_not_overwrite() {
        let mut a = source("a");
        a.value_proposition.headline = "First headline".to_string();
        let mut b = source("b");
        b.value_proposition.headline = "Second headline".to_string();
        b.value_proposition.subheadline = "Second subheadline".to_string();

        let merged = merge_sources(vec![a, b]).unwrap();
        assert_eq!(merged.value_proposition.headline, "First headline");
        assert_eq!(merged.value_proposition.subheadline, "Second subheadline");
    }

    #[test]
    fn lists_extend_without_duplicates() {
        let mut a = source("a");
        a.value_proposition.key_benefits = vec!["Shared".to_string(), "A only".to_string()];
        let mut b = source("b");
        b.value_proposition.key_benefits = vec!["Shared".to_string(), "B only".to_string()];

        let merged = merge_sources(vec![a, b]).unwrap();
        assert_eq!(
            merged.value_proposition.key_benefits,
            vec!["Shared".to_string(), "A only".to_string(), "B only".to_string()]
        );
    }

    #[test]
    fn features_grow_to_ten_across_sources() {
        let mut a = source("a");
        a.product.features = (0..8).map(|i| format!("a-{i}")).collect();
        let mut b = source("b");
        b.product.features = (0..8).map(|i| format!("b-{i}")).collect();

        let merged = merge_sources(vec![a, b]).unwrap();
        assert_eq!(merged.product.features.len(), 10);
        assert_eq!(merged.product.features[8], "b-0");
    }

    #[test]
    fn pdfs_and_videos_concatenated_without_dedup() {
        let mut a = source("a");
        a.assets.pdfs = vec!["x.pdf".to_string()];
        let mut b = source("b");
        b.assets.pdfs = vec!["x.pdf".to_string(), "y.pdf".to_string()];

        let merged = merge_sources(vec![a, b]).unwrap();
        assert_eq!(merged.assets.pdfs.len(), 3);
    }

    #[test]
    fn accumulator_identity_fields_are_kept() {
        let mut a = source("a");
        a.brand.name = "Acme".to_string();
        let mut b = source("b");
        b.brand.name = "Other".to_string();

        let merged = merge_sources(vec![a, b]).unwrap();
        assert_eq!(merged.brand.name, "Acme");
        assert_eq!(merged.source, "a");
    }
}
