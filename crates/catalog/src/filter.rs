//! Predicate filtering over the catalog.
//!
//! Plain linear scans preserving catalog order. No ranking, no pagination;
//! an empty result is a valid outcome.

use motionmart_core::{AnimationEntry, FilterCriteria, PriceTier};

/// Whether an entry satisfies every set field of the criteria.
#[must_use]
pub fn matches(entry: &AnimationEntry, criteria: &FilterCriteria) -> bool {
    if let Some(category) = criteria.category
        && entry.category != category
    {
        return false;
    }

    if !criteria.query.is_empty() {
        let query = criteria.query.to_lowercase();
        let haystack = format!(
            "{} {} {}",
            entry.title,
            entry.description,
            entry.tags.join(" ")
        )
        .to_lowercase();
        if !haystack.contains(&query) {
            return false;
        }
    }

    match criteria.price {
        PriceTier::Free if entry.is_premium => return false,
        PriceTier::Premium if !entry.is_premium => return false,
        _ => {}
    }

    if let Some(difficulty) = criteria.difficulty
        && entry.difficulty != difficulty
    {
        return false;
    }

    true
}

/// Entries matching the criteria, in catalog order.
#[must_use]
pub fn search<'a>(entries: &'a [AnimationEntry], criteria: &FilterCriteria) -> Vec<&'a AnimationEntry> {
    entries.iter().filter(|e| matches(e, criteria)).collect()
}

/// Up to `limit` entries related to `reference`: same category or an
/// overlapping tag, excluding the reference itself. Catalog order decides
/// which make the cut; category matches and tag matches are not ranked
/// against each other.
#[must_use]
pub fn related_to<'a>(
    entries: &'a [AnimationEntry],
    reference: &AnimationEntry,
    limit: usize,
) -> Vec<&'a AnimationEntry> {
    entries
        .iter()
        .filter(|e| e.id != reference.id)
        .filter(|e| {
            e.category == reference.category || e.tags.iter().any(|t| reference.has_tag(t))
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use motionmart_core::{
        AnimationCategory, AnimationId, AnimationKind, Difficulty, NewAnimation, Price,
    };

    fn entry(
        id: u32,
        title: &str,
        category: AnimationCategory,
        price: &str,
        premium: bool,
        tags: &[&str],
        difficulty: Difficulty,
    ) -> AnimationEntry {
        NewAnimation {
            title: title.to_owned(),
            description: format!("{title} animation"),
            category,
            kind: AnimationKind::FadeIn,
            price: Price::new(price),
            is_premium: premium,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            difficulty,
            code_example: None,
            thumbnail: None,
        }
        .into_entry(AnimationId::new(id))
    }

    fn fixture() -> Vec<AnimationEntry> {
        vec![
            entry(
                1,
                "Pulse",
                AnimationCategory::Loaders,
                "$5",
                true,
                &["pulse", "scale"],
                Difficulty::Beginner,
            ),
            entry(
                2,
                "Fade In",
                AnimationCategory::Transitions,
                "Free",
                false,
                &["fade", "opacity"],
                Difficulty::Beginner,
            ),
            entry(
                3,
                "Flip Card",
                AnimationCategory::ThreeDEffects,
                "$10",
                true,
                &["3d", "flip"],
                Difficulty::Advanced,
            ),
        ]
    }

    #[test]
    fn test_category_filter_only_returns_that_category() {
        let entries = fixture();
        let criteria = FilterCriteria::any().with_category(AnimationCategory::Loaders);
        let results = search(&entries, &criteria);
        assert_eq!(results.len(), 1);
        assert!(
            results
                .iter()
                .all(|e| e.category == AnimationCategory::Loaders)
        );
    }

    #[test]
    fn test_free_tier_excludes_premium_and_vice_versa() {
        let entries = fixture();

        let free = search(&entries, &FilterCriteria::any().with_price(PriceTier::Free));
        assert_eq!(free.len(), 1);
        assert!(free.iter().all(|e| !e.is_premium));
        assert_eq!(free.first().unwrap().category, AnimationCategory::Transitions);

        let premium = search(
            &entries,
            &FilterCriteria::any().with_price(PriceTier::Premium),
        );
        assert_eq!(premium.len(), 2);
        assert!(premium.iter().all(|e| e.is_premium));
    }

    #[test]
    fn test_query_matches_title_description_and_tags() {
        let entries = fixture();

        let by_title = search(&entries, &FilterCriteria::any().with_query("PULSE"));
        assert_eq!(by_title.len(), 1);

        let by_tag = search(&entries, &FilterCriteria::any().with_query("opacity"));
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag.first().unwrap().title, "Fade In");

        let empty_query = search(&entries, &FilterCriteria::any());
        assert_eq!(empty_query.len(), entries.len());
    }

    #[test]
    fn test_difficulty_filter() {
        let entries = fixture();
        let results = search(
            &entries,
            &FilterCriteria::any().with_difficulty(Difficulty::Advanced),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().unwrap().title, "Flip Card");
    }

    #[test]
    fn test_all_criteria_must_hold() {
        let entries = fixture();
        let criteria = FilterCriteria::any()
            .with_category(AnimationCategory::Loaders)
            .with_price(PriceTier::Free);
        assert!(search(&entries, &criteria).is_empty());
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let entries = fixture();
        let results = search(
            &entries,
            &FilterCriteria::any().with_price(PriceTier::Premium),
        );
        let ids: Vec<u32> = results.iter().map(|e| e.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_related_excludes_reference_and_truncates() {
        let mut entries = fixture();
        entries.push(entry(
            4,
            "Shimmer",
            AnimationCategory::Loaders,
            "$5",
            true,
            &["shimmer", "loading"],
            Difficulty::Intermediate,
        ));
        entries.push(entry(
            5,
            "Scale",
            AnimationCategory::Transitions,
            "Free",
            false,
            &["scale", "size"],
            Difficulty::Beginner,
        ));

        let reference = entries.first().unwrap().clone(); // Pulse: Loaders, tags pulse/scale

        // Shimmer shares the category, Scale shares a tag; both qualify.
        let related = related_to(&entries, &reference, 10);
        let ids: Vec<u32> = related.iter().map(|e| e.id.as_u32()).collect();
        assert_eq!(ids, vec![4, 5]);

        // Truncation keeps earlier catalog positions.
        let truncated = related_to(&entries, &reference, 1);
        assert_eq!(truncated.len(), 1);
        assert_eq!(truncated.first().unwrap().id.as_u32(), 4);
    }

    #[test]
    fn test_related_empty_when_nothing_shared() {
        let entries = vec![
            fixture().into_iter().next().unwrap(),
            entry(
                9,
                "Wave",
                AnimationCategory::TextEffects,
                "$8",
                true,
                &["text", "wave"],
                Difficulty::Intermediate,
            ),
        ];
        let reference = entries.first().unwrap().clone();
        assert!(related_to(&entries, &reference, 5).is_empty());
    }
}
