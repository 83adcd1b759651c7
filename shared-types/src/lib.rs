//! Shared types between the microblog server and the browser client
//!
//! These types describe the reaction endpoints:
//! - `POST /like_post/{id}`
//! - `POST /dislike_post/{id}`
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// Core Types
// ============================================================================

/// Identifier of a post, as rendered in `data-post-id`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(transparent)]
#[ts(export, export_to = "../../microblog-ui/bindings/reactions.ts")]
pub struct PostId(pub i64);

impl PostId {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(Self)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two mutually exclusive reactions a viewer can hold on a post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../microblog-ui/bindings/reactions.ts")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Path segment of the endpoint that toggles this reaction
    pub fn endpoint(self) -> &'static str {
        match self {
            ReactionKind::Like => "like_post",
            ReactionKind::Dislike => "dislike_post",
        }
    }

    pub fn path(self, post_id: PostId) -> String {
        format!("/{}/{}", self.endpoint(), post_id)
    }
}

// ============================================================================
// Reaction Endpoints
// ============================================================================

/// Body returned by both reaction endpoints.
///
/// A like response carries `liked`, a dislike response carries `disliked`;
/// both carry the two counts. A rejected request carries only `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../microblog-ui/bindings/reactions.ts")]
pub struct ReactionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disliked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dislike_count: Option<u32>,
}

impl ReactionResponse {
    pub fn liked(liked: bool, like_count: u32, dislike_count: u32) -> Self {
        Self {
            liked: Some(liked),
            like_count: Some(like_count),
            dislike_count: Some(dislike_count),
            ..Self::default()
        }
    }

    pub fn disliked(disliked: bool, dislike_count: u32, like_count: u32) -> Self {
        Self {
            disliked: Some(disliked),
            like_count: Some(like_count),
            dislike_count: Some(dislike_count),
            ..Self::default()
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Interpret the body as the answer to a `kind` request.
    ///
    /// An empty `error` string does not count as a rejection.
    pub fn into_reply(self, kind: ReactionKind) -> ReactionReply {
        if let Some(message) = self.error.filter(|message| !message.is_empty()) {
            return ReactionReply::Rejected(message);
        }

        let active = match kind {
            ReactionKind::Like => self.liked,
            ReactionKind::Dislike => self.disliked,
        };

        match (active, self.like_count, self.dislike_count) {
            (Some(active), Some(like_count), Some(dislike_count)) => {
                ReactionReply::Applied(ReactionCounts {
                    kind,
                    active,
                    like_count,
                    dislike_count,
                })
            }
            _ => ReactionReply::Malformed,
        }
    }
}

/// Server-authoritative result of one reaction round trip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../microblog-ui/bindings/reactions.ts")]
pub struct ReactionCounts {
    /// Which reaction was requested
    pub kind: ReactionKind,
    /// Whether the requested reaction is now held by the viewer
    pub active: bool,
    pub like_count: u32,
    pub dislike_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionReply {
    Applied(ReactionCounts),
    Rejected(String),
    Malformed,
}

// ============================================================================
// Tests
// ============================================================================
