//! Demo fixtures loaded at startup.
//!
//! Nine animations across the six categories, the category and tag records
//! they reference, and two demo accounts. The data lives only for the
//! lifetime of the process.

use chrono::NaiveDate;
use motionmart_core::{
    AccountStatus, AnimationCategory, AnimationId, AnimationKind, Difficulty, Email, NewAnimation,
    NewUser, Price, User, UserRole,
};

use crate::{CatalogService, UserService};

const THUMBNAIL: &str = "/placeholder.svg?height=100&width=100";

fn animation(
    title: &str,
    description: &str,
    category: AnimationCategory,
    kind: AnimationKind,
    price: &str,
    is_premium: bool,
    tags: &[&str],
    difficulty: Difficulty,
    code_example: &str,
) -> NewAnimation {
    NewAnimation {
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        kind,
        price: Price::new(price),
        is_premium,
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        difficulty,
        code_example: Some(code_example.trim().to_owned()),
        thumbnail: Some(THUMBNAIL.to_owned()),
    }
}

fn animations() -> Vec<NewAnimation> {
    vec![
        animation(
            "Fade In",
            "Smooth fade in animation with configurable duration and delay",
            AnimationCategory::Transitions,
            AnimationKind::FadeIn,
            "Free",
            false,
            &["fade", "transition", "opacity"],
            Difficulty::Beginner,
            r".fade-in {
  animation: fadeIn 1s ease-in-out;
}

@keyframes fadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}",
        ),
        animation(
            "Slide Up",
            "Element slides up from below with customizable easing",
            AnimationCategory::Transitions,
            AnimationKind::SlideUp,
            "Free",
            false,
            &["slide", "transform", "transition"],
            Difficulty::Beginner,
            r".slide-up {
  animation: slideUp 0.5s ease-out;
}

@keyframes slideUp {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}",
        ),
        animation(
            "Pulse",
            "Pulsating animation perfect for notifications and highlights",
            AnimationCategory::Loaders,
            AnimationKind::Pulse,
            "$5",
            true,
            &["pulse", "scale", "attention"],
            Difficulty::Beginner,
            r".pulse {
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; transform: scale(1); }
  50% { opacity: .5; transform: scale(1.05); }
}",
        ),
        animation(
            "Bounce",
            "Playful bouncing animation with natural physics",
            AnimationCategory::HoverEffects,
            AnimationKind::Bounce,
            "Free",
            false,
            &["bounce", "physics", "playful"],
            Difficulty::Intermediate,
            r".bounce {
  animation: bounce 1s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-25%); }
}",
        ),
        animation(
            "Flip Card",
            "3D card flip effect with front and back sides",
            AnimationCategory::ThreeDEffects,
            AnimationKind::Flip,
            "$10",
            true,
            &["3d", "flip", "card", "perspective"],
            Difficulty::Advanced,
            r".flip-card {
  perspective: 1000px;
}

.flip-card-inner {
  transition: transform 0.6s;
  transform-style: preserve-3d;
}

.flip-card:hover .flip-card-inner {
  transform: rotateY(180deg);
}",
        ),
        animation(
            "Text Wave",
            "Character-by-character wave animation for text",
            AnimationCategory::TextEffects,
            AnimationKind::TextWave,
            "$8",
            true,
            &["text", "wave", "characters"],
            Difficulty::Intermediate,
            r".text-wave span {
  display: inline-block;
  animation: wave 1s ease-in-out infinite;
}

@keyframes wave {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}",
        ),
        animation(
            "Scale",
            "Smooth scaling animation with configurable origin point",
            AnimationCategory::Transitions,
            AnimationKind::Scale,
            "Free",
            false,
            &["scale", "transform", "size"],
            Difficulty::Beginner,
            r".scale {
  animation: scaleIn 0.3s ease-out;
}

@keyframes scaleIn {
  from { transform: scale(0); }
  to { transform: scale(1); }
}",
        ),
        animation(
            "Shimmer",
            "Content placeholder shimmer effect for loading states",
            AnimationCategory::Loaders,
            AnimationKind::Shimmer,
            "$5",
            true,
            &["shimmer", "loading", "skeleton"],
            Difficulty::Intermediate,
            r".shimmer {
  background: linear-gradient(90deg, #f0f0f0 25%, #e0e0e0 50%, #f0f0f0 75%);
  background-size: 200% 100%;
  animation: shimmer 1.5s infinite;
}

@keyframes shimmer {
  0% { background-position: 200% 0; }
  100% { background-position: -200% 0; }
}",
        ),
        animation(
            "Rotate",
            "Rotation animation with customizable degrees and origin",
            AnimationCategory::Transitions,
            AnimationKind::Rotate,
            "Free",
            false,
            &["rotate", "transform", "spin"],
            Difficulty::Beginner,
            r".rotate {
  animation: rotate 2s linear infinite;
}

@keyframes rotate {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}",
        ),
    ]
}

fn categories() -> Vec<(AnimationCategory, String)> {
    vec![
        (
            AnimationCategory::Transitions,
            "Smooth transitions between states.".to_owned(),
        ),
        (
            AnimationCategory::Loaders,
            "Engaging loading indicators.".to_owned(),
        ),
        (
            AnimationCategory::HoverEffects,
            "Interactive effects on hover.".to_owned(),
        ),
        (
            AnimationCategory::TextEffects,
            "Dynamic text animations.".to_owned(),
        ),
        (
            AnimationCategory::Layout,
            "Animations for layout changes.".to_owned(),
        ),
        (
            AnimationCategory::ThreeDEffects,
            "Animations with depth and perspective.".to_owned(),
        ),
    ]
}

fn tags() -> Vec<String> {
    [
        "fade", "transition", "opacity", "slide", "transform", "pulse", "scale", "attention",
        "bounce", "physics", "playful", "3d", "flip", "card", "perspective", "text", "wave",
        "characters", "size", "shimmer", "loading", "skeleton", "rotate", "spin",
    ]
    .iter()
    .map(|t| (*t).to_owned())
    .collect()
}

/// Load the demo catalog into a fresh service.
pub async fn load_catalog(catalog: &CatalogService) {
    catalog.load(animations(), categories(), tags()).await;
}

fn ids(raw: &[u32]) -> Vec<AnimationId> {
    raw.iter().copied().map(AnimationId::new).collect()
}

/// Create the two demo accounts. Both authenticate with the password the
/// provided hash was derived from (the demo binaries use "password").
pub async fn load_users(users: &UserService, password_hash: &str) -> Vec<User> {
    let admin = users
        .create(NewUser {
            email: Email::parse("admin@example.com").unwrap_or_else(|_| unreachable!()),
            password_hash: Some(password_hash.to_owned()),
            role: UserRole::Admin,
            first_name: Some("Admin".to_owned()),
            last_name: Some("User".to_owned()),
            avatar: Some(THUMBNAIL.to_owned()),
        })
        .await;
    let member = users
        .create(NewUser {
            email: Email::parse("user@example.com").unwrap_or_else(|_| unreachable!()),
            password_hash: Some(password_hash.to_owned()),
            role: UserRole::User,
            first_name: Some("Regular".to_owned()),
            last_name: Some("User".to_owned()),
            avatar: Some(THUMBNAIL.to_owned()),
        })
        .await;

    let mut seeded = Vec::with_capacity(2);
    for (user, registered_at, purchased, favorites) in [
        (admin, date(2023, 1, 15), ids(&[3, 5, 6, 8]), ids(&[1, 4, 7])),
        (member, date(2023, 2, 20), ids(&[3]), ids(&[2, 9])),
    ] {
        let account = User {
            registered_at,
            purchased,
            favorites,
            status: AccountStatus::Active,
            ..user
        };
        if let Some(updated) = users.update(account).await {
            seeded.push(updated);
        }
    }
    seeded
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
