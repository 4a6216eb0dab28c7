//! User store: accounts plus their purchased and favorite animation lists.
//!
//! Same shape as the catalog store: an `RwLock`-guarded vector, simulated
//! latency on every call, and `Option`/`bool` results for missing rows. The
//! guest sentinel never appears here; it exists only as an in-session
//! placeholder for unauthenticated visitors.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use motionmart_core::{
    AccountStatus, AnimationId, Email, NewUser, ProfileUpdate, User, UserId,
};

#[derive(Debug, Default)]
struct UserData {
    users: Vec<User>,
    next_user_id: u32,
}

/// In-memory user service. Cheaply cloneable; clones share data.
#[derive(Clone)]
pub struct UserService {
    inner: Arc<RwLock<UserData>>,
    latency: Duration,
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

impl UserService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(UserData::default())),
            latency: crate::DEFAULT_LATENCY,
        }
    }

    /// Override the simulated per-call latency. Zero disables the delay.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// All accounts, in creation order.
    pub async fn list(&self) -> Vec<User> {
        self.simulate_latency().await;
        self.inner.read().await.users.clone()
    }

    pub async fn get_by_id(&self, id: UserId) -> Option<User> {
        self.simulate_latency().await;
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub async fn get_by_email(&self, email: &Email) -> Option<User> {
        self.simulate_latency().await;
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.email == *email)
            .cloned()
    }

    /// Create an account. The store assigns the id and registration date;
    /// purchased and favorite lists start empty.
    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn create(&self, new: NewUser) -> User {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        data.next_user_id += 1;
        let user = User {
            id: UserId::new(data.next_user_id),
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            registered_at: Utc::now().date_naive(),
            status: AccountStatus::Active,
            first_name: new.first_name,
            last_name: new.last_name,
            avatar: new.avatar,
            purchased: Vec::new(),
            favorites: Vec::new(),
        };
        data.users.push(user.clone());
        debug!(id = %user.id, email = %user.email, role = %user.role, "user created");
        user
    }

    /// Replace the account with the same id. `None` when the id is unknown.
    pub async fn update(&self, updated: User) -> Option<User> {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let slot = data.users.iter_mut().find(|u| u.id == updated.id)?;
        *slot = updated.clone();
        Some(updated)
    }

    /// Update display fields only. `None` when the id is unknown.
    pub async fn update_profile(&self, id: UserId, profile: ProfileUpdate) -> Option<User> {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let slot = data.users.iter_mut().find(|u| u.id == id)?;
        if let Some(first_name) = profile.first_name {
            slot.first_name = Some(first_name);
        }
        if let Some(last_name) = profile.last_name {
            slot.last_name = Some(last_name);
        }
        if let Some(avatar) = profile.avatar {
            slot.avatar = Some(avatar);
        }
        Some(slot.clone())
    }

    /// Swap in a new password hash. `false` when the id is unknown.
    #[instrument(skip(self, password_hash), fields(id = %id))]
    pub async fn update_password(&self, id: UserId, password_hash: String) -> bool {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        match data.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.password_hash = Some(password_hash);
                true
            }
            None => false,
        }
    }

    /// Flip the account status. `None` when the id is unknown.
    #[instrument(skip(self), fields(id = %id, status = ?status))]
    pub async fn set_status(&self, id: UserId, status: AccountStatus) -> Option<User> {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let slot = data.users.iter_mut().find(|u| u.id == id)?;
        slot.status = status;
        debug!(%id, ?status, "user status changed");
        Some(slot.clone())
    }

    /// Delete by id. `false` when the id is unknown.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: UserId) -> bool {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        let before = data.users.len();
        data.users.retain(|u| u.id != id);
        data.users.len() < before
    }

    // =========================================================================
    // Favorites and purchases
    // =========================================================================

    /// Add to favorites. `false` when the user is unknown or the entry is
    /// already favorited.
    pub async fn add_favorite(&self, id: UserId, animation: AnimationId) -> bool {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        match data.users.iter_mut().find(|u| u.id == id) {
            Some(user) if !user.favorites.contains(&animation) => {
                user.favorites.push(animation);
                true
            }
            _ => false,
        }
    }

    /// Remove from favorites. `false` when the user is unknown or the entry
    /// was not favorited.
    pub async fn remove_favorite(&self, id: UserId, animation: AnimationId) -> bool {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        match data.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                let before = user.favorites.len();
                user.favorites.retain(|a| *a != animation);
                user.favorites.len() < before
            }
            None => false,
        }
    }

    pub async fn favorite_ids(&self, id: UserId) -> Vec<AnimationId> {
        self.simulate_latency().await;
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.favorites.clone())
            .unwrap_or_default()
    }

    pub async fn purchased_ids(&self, id: UserId) -> Vec<AnimationId> {
        self.simulate_latency().await;
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.purchased.clone())
            .unwrap_or_default()
    }

    /// Record a completed checkout. Already-owned entries are skipped so the
    /// purchased list never holds duplicates. `false` when the user is
    /// unknown.
    pub async fn record_purchase(&self, id: UserId, animations: &[AnimationId]) -> bool {
        self.simulate_latency().await;
        let mut data = self.inner.write().await;
        match data.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                for animation in animations {
                    if !user.purchased.contains(animation) {
                        user.purchased.push(*animation);
                    }
                }
                debug!(%id, count = animations.len(), "purchase recorded");
                true
            }
            None => false,
        }
    }
}
