//! Like/dislike state and the request flow, without any DOM.

use dioxus_logger::tracing::debug;
use shared_types::{PostId, ReactionCounts, ReactionKind, ReactionReply};

use crate::api::ReactionApi;
use crate::error::FeedError;

/// What the viewer sees on one post's reaction controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionState {
    pub liked: bool,
    pub like_count: u32,
    pub disliked: bool,
    pub dislike_count: u32,
}

impl ReactionState {
    pub fn is_active(&self, kind: ReactionKind) -> bool {
        match kind {
            ReactionKind::Like => self.liked,
            ReactionKind::Dislike => self.disliked,
        }
    }

    pub fn count(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like_count,
            ReactionKind::Dislike => self.dislike_count,
        }
    }

    /// Take both sides from the server. The opposite reaction is always
    /// cleared: the two are mutually exclusive.
    pub fn apply(&mut self, counts: &ReactionCounts) {
        match counts.kind {
            ReactionKind::Like => {
                self.liked = counts.active;
                self.disliked = false;
            }
            ReactionKind::Dislike => {
                self.disliked = counts.active;
                self.liked = false;
            }
        }
        self.like_count = counts.like_count;
        self.dislike_count = counts.dislike_count;
    }
}

/// Floating icon played after a reaction round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Like,
    Unlike,
    Dislike,
    Undislike,
}

impl FeedbackKind {
    pub fn from_counts(counts: &ReactionCounts) -> Self {
        match (counts.kind, counts.active) {
            (ReactionKind::Like, true) => FeedbackKind::Like,
            (ReactionKind::Like, false) => FeedbackKind::Unlike,
            (ReactionKind::Dislike, true) => FeedbackKind::Dislike,
            (ReactionKind::Dislike, false) => FeedbackKind::Undislike,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            FeedbackKind::Like | FeedbackKind::Unlike => "fas fa-heart",
            FeedbackKind::Dislike | FeedbackKind::Undislike => "fas fa-thumbs-down",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            FeedbackKind::Like => "#198754",
            FeedbackKind::Dislike => "#dc3545",
            FeedbackKind::Unlike | FeedbackKind::Undislike => "#6c757d",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionOutcome {
    Applied {
        state: ReactionState,
        feedback: FeedbackKind,
    },
    /// The server answered with an `error` field; nothing changes.
    Rejected(String),
    Failed(FeedError),
}

/// Send one reaction and work out the resulting state from `current`.
pub async fn submit_reaction<A>(
    api: &A,
    kind: ReactionKind,
    post_id: PostId,
    current: ReactionState,
) -> ReactionOutcome
where
    A: ReactionApi + ?Sized,
{
    let response = match api.react(kind, post_id).await {
        Ok(response) => response,
        Err(e) => return ReactionOutcome::Failed(e),
    };

    match response.into_reply(kind) {
        ReactionReply::Applied(counts) => {
            debug!(
                "post {} {:?} -> active={} likes={} dislikes={}",
                post_id, kind, counts.active, counts.like_count, counts.dislike_count
            );
            let mut state = current;
            state.apply(&counts);
            ReactionOutcome::Applied {
                state,
                feedback: FeedbackKind::from_counts(&counts),
            }
        }
        ReactionReply::Rejected(message) => ReactionOutcome::Rejected(message),
        ReactionReply::Malformed => ReactionOutcome::Failed(FeedError::Decode(format!(
            "{} response is missing fields",
            kind.endpoint()
        ))),
    }
}
