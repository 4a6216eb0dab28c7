//! Catalog entity types: animation entries, categories, and tags.

use serde::{Deserialize, Serialize};

use super::id::{AnimationId, CategoryId, TagId};
use super::price::Price;

/// The fixed set of catalog categories.
///
/// Category records must use one of these names; entries classify under
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationCategory {
    Transitions,
    Loaders,
    #[serde(rename = "Hover Effects")]
    HoverEffects,
    #[serde(rename = "Text Effects")]
    TextEffects,
    Layout,
    #[serde(rename = "3D Effects")]
    ThreeDEffects,
}

impl AnimationCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Transitions,
        Self::Loaders,
        Self::HoverEffects,
        Self::TextEffects,
        Self::Layout,
        Self::ThreeDEffects,
    ];

    /// Display name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transitions => "Transitions",
            Self::Loaders => "Loaders",
            Self::HoverEffects => "Hover Effects",
            Self::TextEffects => "Text Effects",
            Self::Layout => "Layout",
            Self::ThreeDEffects => "3D Effects",
        }
    }
}

impl std::fmt::Display for AnimationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AnimationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// The animation effect implemented by an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    FadeIn,
    SlideUp,
    Pulse,
    Bounce,
    Flip,
    TextWave,
    Scale,
    Shimmer,
    Rotate,
    Float,
}

/// How much experience an entry's code sample assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            _ => Err(format!("unknown difficulty: {s}")),
        }
    }
}

/// A purchasable animation asset in the catalog.
///
/// `is_premium` and `price` are independently settable: a premium entry may
/// be priced "Free" during a promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationEntry {
    pub id: AnimationId,
    pub title: String,
    pub description: String,
    pub category: AnimationCategory,
    pub kind: AnimationKind,
    pub price: Price,
    pub is_premium: bool,
    /// Free-form tags. Order is preserved for display; matching ignores it.
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl AnimationEntry {
    /// Whether this entry carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Payload for creating an animation entry; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnimation {
    pub title: String,
    pub description: String,
    pub category: AnimationCategory,
    pub kind: AnimationKind,
    pub price: Price,
    pub is_premium: bool,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub code_example: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl NewAnimation {
    /// Attach an assigned id, producing a catalog entry.
    #[must_use]
    pub fn into_entry(self, id: AnimationId) -> AnimationEntry {
        AnimationEntry {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            kind: self.kind,
            price: self.price,
            is_premium: self.is_premium,
            tags: self.tags,
            difficulty: self.difficulty,
            code_example: self.code_example,
            thumbnail: self.thumbnail,
        }
    }
}

/// A category record with its derived entry count.
///
/// `animation_count` is recomputed from the catalog after every entry
/// mutation; it is never authoritative input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: AnimationCategory,
    pub description: String,
    pub animation_count: usize,
}

/// A tag record with its derived entry count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub animation_count: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_display_names() {
        let json = serde_json::to_string(&AnimationCategory::HoverEffects).unwrap();
        assert_eq!(json, "\"Hover Effects\"");

        let parsed: AnimationCategory = serde_json::from_str("\"3D Effects\"").unwrap();
        assert_eq!(parsed, AnimationCategory::ThreeDEffects);
    }

    #[test]
    fn test_category_from_str() {
        let parsed: AnimationCategory = "Loaders".parse().unwrap();
        assert_eq!(parsed, AnimationCategory::Loaders);
        assert!("Explosions".parse::<AnimationCategory>().is_err());
    }

    #[test]
    fn test_kind_serde_kebab_case() {
        let json = serde_json::to_string(&AnimationKind::FadeIn).unwrap();
        assert_eq!(json, "\"fade-in\"");
    }

    #[test]
    fn test_new_animation_into_entry() {
        let new = NewAnimation {
            title: "Fade In".to_owned(),
            description: "Smooth fade".to_owned(),
            category: AnimationCategory::Transitions,
            kind: AnimationKind::FadeIn,
            price: Price::free(),
            is_premium: false,
            tags: vec!["fade".to_owned()],
            difficulty: Difficulty::Beginner,
            code_example: None,
            thumbnail: None,
        };

        let entry = new.into_entry(AnimationId::new(1));
        assert_eq!(entry.id, AnimationId::new(1));
        assert_eq!(entry.title, "Fade In");
        assert!(entry.has_tag("fade"));
        assert!(!entry.has_tag("slide"));
    }
}
