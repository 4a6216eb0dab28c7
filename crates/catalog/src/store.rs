//! Catalog store: animations, categories, and tags with derived counts.
//!
//! A single in-memory collection behind an `RwLock` stands in for the
//! database. Every public operation resolves after a simulated latency, and
//! every mutation of the animation list triggers a full recount of category
//! and tag usage: an O(n) rescan chosen for determinism over incremental
//! bookkeeping at this data scale.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, instrument};

use motionmart_core::{
    AnimationCategory, AnimationEntry, AnimationId, Category, CategoryId, FilterCriteria,
    NewAnimation, Tag, TagId,
};

use crate::filter;

/// Editable category fields. The derived count is deliberately absent so an
/// update can never clobber it with a stale value.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub name: AnimationCategory,
    pub description: String,
}

#[derive(Debug, Default)]
struct CatalogData {
    animations: Vec<AnimationEntry>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    next_animation_id: u32,
    next_category_id: u32,
    next_tag_id: u32,
}

impl CatalogData {
    fn insert_animation(&mut self, new: NewAnimation) -> AnimationEntry {
        self.next_animation_id += 1;
        let entry = new.into_entry(AnimationId::new(self.next_animation_id));
        self.animations.push(entry.clone());
        self.recount();
        entry
    }

    fn insert_category(&mut self, name: AnimationCategory, description: String) -> Category {
        self.next_category_id += 1;
        let category = Category {
            id: CategoryId::new(self.next_category_id),
            name,
            description,
            animation_count: 0,
        };
        self.categories.push(category.clone());
        self.recount();
        // recount may have found matching entries already in the catalog
        self.categories
            .last()
            .cloned()
            .unwrap_or(category)
    }

    fn insert_tag(&mut self, name: String) -> Tag {
        self.next_tag_id += 1;
        let tag = Tag {
            id: TagId::new(self.next_tag_id),
            name,
            animation_count: 0,
        };
        self.tags.push(tag.clone());
        self.recount();
        self.tags.last().cloned().unwrap_or(tag)
    }

    /// Recompute every derived count from the animation list.
    fn recount(&mut self) {
        for category in &mut self.categories {
            category.animation_count = self
                .animations
                .iter()
                .filter(|a| a.category == category.name)
                .count();
        }
        for tag in &mut self.tags {
            tag.animation_count = self
                .animations
                .iter()
                .filter(|a| a.has_tag(&tag.name))
                .count();
        }
    }
}

/// In-memory catalog service.
///
/// Cheaply cloneable; clones share the same underlying data.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<RwLock<CatalogData>>,
    latency: Duration,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService {
    /// Create an empty catalog with the default simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CatalogData::default())),
            latency: crate::DEFAULT_LATENCY,
        }
    }

    /// Override the simulated per-call latency. Zero disables the delay
    /// entirely (useful in tests).
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Populate the catalog from seed payloads. Used at startup.
    pub async fn load(&self, animations: Vec<NewAnimation>, categories: Vec<(AnimationCategory, String)>, tags: Vec<String>) {
        let mut data = self.inner.write().await;
        for (name, description) in categories {
            data.insert_category(name, description);
        }
        for tag in tags {
            data.insert_tag(tag);
        }
        for animation in animations {
            data.insert_animation(animation);
        }
        debug!(
            animations = data.animations.len(),
            categories = data.categories.len(),
            tags = data.tags.len(),
            "catalog loaded"
        );
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    // =========================================================================
    // Animations
    // =========================================================================

    /// All entries, in catalog order.
    pub async fn list_animations(&self) -> Vec<AnimationEntry> {
        self.simulate_latency().await;
        self.inner.read().await.animations.clone()
    }

    /// Entry by id, or `None`.
    pub async fn get_animation(&self, id: AnimationId) -> Option<AnimationEntry> {
        self.simulate_latency().await;
        self.inner
            .read()
            .await
            .animations
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Entries classified under a category, in catalog order.
    pub async fn animations_by_category(
        &self,
        category: AnimationCategory,
    ) -> Vec<AnimationEntry> {
        self.simulate_latency().await;
        self.inner
            .read()
            .await
            .animations
            .iter()
            .filter(|a| a.category == category)
            .cloned()
            .collect()
    }

    /// Entries whose id appears in `ids`, in catalog order. Unknown ids are
    /// silently skipped.
    pub async fn animations_by_ids(&self, ids: &[AnimationId]) -> Vec<AnimationEntry> {
        self.simulate_latency().await;
        self.inner
            .read()
            .await
            .animations
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect()
    }

    /// Entries satisfying every set field of the criteria, in catalog order.
    pub async fn search(&self, criteria: &FilterCriteria) -> Vec<AnimationEntry> {
        self.simulate_latency().await;
        let data = self.inner.read().await;
        filter::search(&data.animations, criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Up to `limit` entries sharing the reference's category or a tag.
    pub async fn related(&self, reference: &AnimationEntry, limit: usize) -> Vec<AnimationEntry> {
        self.simulate_latency().await;
        let data = self.inner.read().await;
        filter::related_to(&data.animations, reference, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Create an entry; the store assigns the next id and recounts.
    #[instrument(skip(self, new), fields(title = %new.title))]
    pub async fn create_animation(&self, new: NewAnimation) -> AnimationEntry {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let entry = data.insert_animation(new);
        debug!(id = %entry.id, title = %entry.title, "animation created");
        entry
    }

    /// Replace the entry with the same id. `None` when the id is unknown.
    #[instrument(skip(self, updated), fields(id = %updated.id))]
    pub async fn update_animation(&self, updated: AnimationEntry) -> Option<AnimationEntry> {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let slot = data.animations.iter_mut().find(|a| a.id == updated.id)?;
        *slot = updated.clone();
        data.recount();
        debug!(id = %updated.id, "animation updated");
        Some(updated)
    }

    /// Delete by id. `false` when the id is unknown.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_animation(&self, id: AnimationId) -> bool {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let before = data.animations.len();
        data.animations.retain(|a| a.id != id);
        let deleted = data.animations.len() < before;
        if deleted {
            data.recount();
            debug!(%id, "animation deleted");
        }
        deleted
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// All category records with current derived counts.
    pub async fn list_categories(&self) -> Vec<Category> {
        self.simulate_latency().await;
        self.inner.read().await.categories.clone()
    }

    /// Create a category record. Its count reflects entries already present.
    #[instrument(skip(self, description), fields(name = %name))]
    pub async fn create_category(
        &self,
        name: AnimationCategory,
        description: String,
    ) -> Category {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let category = data.insert_category(name, description);
        debug!(id = %category.id, name = %category.name, "category created");
        category
    }

    /// Update name/description; the derived count is recomputed, never taken
    /// from the caller.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Option<Category> {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let slot = data.categories.iter_mut().find(|c| c.id == id)?;
        slot.name = update.name;
        slot.description = update.description;
        let updated = slot.clone();
        // Renaming can change which entries match; keep the count honest.
        data.recount();
        data.categories.iter().find(|c| c.id == id).cloned().or(Some(updated))
    }

    /// Delete by id. `false` when the id is unknown. Entries keep their
    /// classification; only the record (and its description) goes away.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_category(&self, id: CategoryId) -> bool {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let before = data.categories.len();
        data.categories.retain(|c| c.id != id);
        data.categories.len() < before
    }

    /// The fixed enumerated category set, independent of stored records.
    #[must_use]
    pub const fn category_names() -> [AnimationCategory; 6] {
        AnimationCategory::ALL
    }

    // =========================================================================
    // Tags
    // =========================================================================

    /// All tag records with current derived counts.
    pub async fn list_tags(&self) -> Vec<Tag> {
        self.simulate_latency().await;
        self.inner.read().await.tags.clone()
    }

    /// Create a tag record. Its count reflects entries already present.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn create_tag(&self, name: String) -> Tag {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let tag = data.insert_tag(name);
        debug!(id = %tag.id, name = %tag.name, "tag created");
        tag
    }

    /// Delete by id. `false` when the id is unknown.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_tag(&self, id: TagId) -> bool {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let before = data.tags.len();
        data.tags.retain(|t| t.id != id);
        data.tags.len() < before
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use motionmart_core::{AnimationKind, Difficulty, Price};
    use std::time::Duration;

    fn service() -> CatalogService {
        CatalogService::new().with_latency(Duration::ZERO)
    }

    fn new_animation(title: &str, category: AnimationCategory, tags: &[&str]) -> NewAnimation {
        NewAnimation {
            title: title.to_owned(),
            description: format!("{title} animation"),
            category,
            kind: AnimationKind::Pulse,
            price: Price::new("$5"),
            is_premium: true,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            difficulty: Difficulty::Beginner,
            code_example: None,
            thumbnail: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let catalog = service();
        let new = new_animation("Pulse", AnimationCategory::Loaders, &["pulse"]);

        let created = catalog.create_animation(new.clone()).await;
        let fetched = catalog.get_animation(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.title, new.title);
        assert_eq!(fetched.price, new.price);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let catalog = service();
        assert!(catalog.get_animation(AnimationId::new(42)).await.is_none());
    }

    #[tokio::test]
    async fn test_ids_stay_unique_after_delete() {
        let catalog = service();
        let a = catalog
            .create_animation(new_animation("A", AnimationCategory::Loaders, &[]))
            .await;
        assert!(catalog.delete_animation(a.id).await);
        let b = catalog
            .create_animation(new_animation("B", AnimationCategory::Loaders, &[]))
            .await;
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_counts_recomputed_after_mutations() {
        let catalog = service();
        catalog
            .load(
                Vec::new(),
                vec![(AnimationCategory::Loaders, "Loading indicators".to_owned())],
                vec!["pulse".to_owned()],
            )
            .await;

        let entry = catalog
            .create_animation(new_animation("Pulse", AnimationCategory::Loaders, &["pulse"]))
            .await;

        let categories = catalog.list_categories().await;
        assert_eq!(categories.first().unwrap().animation_count, 1);
        let tags = catalog.list_tags().await;
        assert_eq!(tags.first().unwrap().animation_count, 1);

        // Reclassify away from Loaders and drop the tag.
        let mut updated = entry.clone();
        updated.category = AnimationCategory::Transitions;
        updated.tags.clear();
        catalog.update_animation(updated).await.unwrap();

        assert_eq!(
            catalog.list_categories().await.first().unwrap().animation_count,
            0
        );
        assert_eq!(catalog.list_tags().await.first().unwrap().animation_count, 0);
    }

    #[tokio::test]
    async fn test_delete_animation_recounts() {
        let catalog = service();
        catalog
            .load(
                Vec::new(),
                vec![(AnimationCategory::Loaders, String::new())],
                Vec::new(),
            )
            .await;
        let entry = catalog
            .create_animation(new_animation("Pulse", AnimationCategory::Loaders, &[]))
            .await;
        assert_eq!(
            catalog.list_categories().await.first().unwrap().animation_count,
            1
        );

        assert!(catalog.delete_animation(entry.id).await);
        assert!(!catalog.delete_animation(entry.id).await);
        assert_eq!(
            catalog.list_categories().await.first().unwrap().animation_count,
            0
        );
    }

    #[tokio::test]
    async fn test_update_unknown_animation_is_none() {
        let catalog = service();
        let entry = new_animation("Ghost", AnimationCategory::Layout, &[])
            .into_entry(AnimationId::new(99));
        assert!(catalog.update_animation(entry).await.is_none());
    }

    #[tokio::test]
    async fn test_update_category_preserves_count() {
        let catalog = service();
        catalog
            .load(
                vec![new_animation("Pulse", AnimationCategory::Loaders, &[])],
                vec![(AnimationCategory::Loaders, "old".to_owned())],
                Vec::new(),
            )
            .await;

        let id = catalog.list_categories().await.first().unwrap().id;
        let updated = catalog
            .update_category(
                id,
                CategoryUpdate {
                    name: AnimationCategory::Loaders,
                    description: "new description".to_owned(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, "new description");
        assert_eq!(updated.animation_count, 1);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_category_resolves_false() {
        let catalog = service();
        catalog
            .load(
                Vec::new(),
                vec![(AnimationCategory::Layout, String::new())],
                Vec::new(),
            )
            .await;

        let before = catalog.list_categories().await.len();
        assert!(!catalog.delete_category(CategoryId::new(999)).await);
        assert_eq!(catalog.list_categories().await.len(), before);
    }

    #[tokio::test]
    async fn test_tag_create_delete() {
        let catalog = service();
        let tag = catalog.create_tag("shimmer".to_owned()).await;
        assert_eq!(tag.animation_count, 0);
        assert!(catalog.delete_tag(tag.id).await);
        assert!(!catalog.delete_tag(tag.id).await);
    }

    #[tokio::test]
    async fn test_search_scenario_free_vs_category() {
        let catalog = service();
        let mut loader = new_animation("Pulse", AnimationCategory::Loaders, &[]);
        loader.price = Price::new("$5");
        loader.is_premium = true;
        let mut transition = new_animation("Fade", AnimationCategory::Transitions, &[]);
        transition.price = Price::free();
        transition.is_premium = false;
        catalog.load(vec![loader, transition], Vec::new(), Vec::new()).await;

        let free = catalog
            .search(&FilterCriteria::any().with_price(motionmart_core::PriceTier::Free))
            .await;
        assert_eq!(free.len(), 1);
        assert_eq!(free.first().unwrap().category, AnimationCategory::Transitions);

        let loaders = catalog
            .search(&FilterCriteria::any().with_category(AnimationCategory::Loaders))
            .await;
        assert_eq!(loaders.len(), 1);
        assert!(loaders.first().unwrap().is_premium);
    }

    #[tokio::test]
    async fn test_category_names_is_fixed_set() {
        assert_eq!(CatalogService::category_names(), AnimationCategory::ALL);
    }
}
