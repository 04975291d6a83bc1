use serde::Serialize;
use utoipa::ToSchema;

/// The two per-user, per-post toggles. Each is backed by its own table
/// with a unique (user, post) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Share,
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactionKind::Like => f.write_str("like"),
            ReactionKind::Share => f.write_str("share"),
        }
    }
}

/// Outcome of a toggle: whether the actor now holds the reaction, and the
/// post's total for that kind after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionToggle {
    pub active: bool,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShareResponse {
    pub shared: bool,
    pub shares_count: u64,
}

impl From<ReactionToggle> for LikeResponse {
    fn from(toggle: ReactionToggle) -> Self {
        Self {
            liked: toggle.active,
            likes_count: toggle.count,
        }
    }
}

impl From<ReactionToggle> for ShareResponse {
    fn from(toggle: ReactionToggle) -> Self {
        Self {
            shared: toggle.active,
            shares_count: toggle.count,
        }
    }
}
