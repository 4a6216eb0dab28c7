//! Core type definitions.

pub mod animation;
pub mod email;
pub mod filter;
pub mod id;
pub mod price;
pub mod user;

pub use animation::{
    AnimationCategory, AnimationEntry, AnimationKind, Category, Difficulty, NewAnimation, Tag,
};
pub use email::{Email, EmailError};
pub use filter::{FilterCriteria, PriceTier};
pub use id::{AnimationId, CategoryId, TagId, UserId};
pub use price::Price;
pub use user::{AccountStatus, Capability, NewUser, ProfileUpdate, User, UserRole};
