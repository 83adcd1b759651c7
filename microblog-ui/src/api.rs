use async_trait::async_trait;
use gloo_net::http::Request;
use shared_types::{PostId, ReactionKind, ReactionResponse};
use std::sync::OnceLock;

use crate::error::FeedError;

/// Port `dx serve` hosts the bundle on during development.
const DEV_SERVER_PORT: &str = "8080";
/// Where the Flask app listens during development.
const DEV_API_BASE: &str = "http://localhost:5000";

/// Pick the API base URL for a page served from `hostname:port`
/// - Served by the WASM dev server on localhost: talk to the dev API
/// - Anything else: same origin (the server renders the pages)
pub fn resolve_api_base(hostname: &str, port: &str) -> String {
    let local = hostname == "localhost" || hostname == "127.0.0.1";
    if local && port == DEV_SERVER_PORT {
        DEV_API_BASE.to_string()
    } else {
        String::new()
    }
}

fn get_api_base() -> String {
    let location = web_sys::window().map(|w| w.location());
    let hostname = location
        .as_ref()
        .and_then(|l| l.hostname().ok())
        .unwrap_or_default();
    let port = location
        .as_ref()
        .and_then(|l| l.port().ok())
        .unwrap_or_default();

    resolve_api_base(&hostname, &port)
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

pub fn reaction_url(base: &str, kind: ReactionKind, post_id: PostId) -> String {
    format!("{}{}", base, kind.path(post_id))
}

// ============================================================================
// Reaction API
// ============================================================================

/// Transport for the like/dislike endpoints.
#[async_trait(?Send)]
pub trait ReactionApi {
    async fn react(
        &self,
        kind: ReactionKind,
        post_id: PostId,
    ) -> Result<ReactionResponse, FeedError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpReactionApi;

#[async_trait(?Send)]
impl ReactionApi for HttpReactionApi {
    async fn react(
        &self,
        kind: ReactionKind,
        post_id: PostId,
    ) -> Result<ReactionResponse, FeedError> {
        let url = reaction_url(api_base(), kind, post_id);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        // Error statuses still carry `{ "error": ... }` bodies worth showing.
        let ok = response.ok();
        let status = response.status();

        match response.json::<ReactionResponse>().await {
            Ok(body) => Ok(body),
            Err(_) if !ok => Err(FeedError::Http(status)),
            Err(e) => Err(FeedError::Decode(e.to_string())),
        }
    }
}
