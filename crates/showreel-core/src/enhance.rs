//! Bio enhancement gateway
//!
//! Sends the bio, role and name to a text-generation backend with a fixed
//! prompt and sampling setup, and hands back a rewritten bio. The gateway
//! never fails from the caller's point of view: errors, empty replies and
//! timeouts all fall back to the original text.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::PortfolioError;

/// Model every rewrite is sent to
pub const MODEL: &str = "gemini-3-flash-preview";
pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.9;

/// Language the rewritten bio must be in
pub const TARGET_LANGUAGE: &str = "Italian";

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Credentials and timeout; model and sampling are fixed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    /// Give up and keep the original bio after this long
    pub timeout_secs: u64,
    /// Falls back to `GEMINI_API_KEY`, then `API_KEY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            api_key: None,
        }
    }
}

impl EnhancementConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured key, or the first one found in the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Fill the fixed instruction template
pub fn build_prompt(bio: &str, role: &str, name: &str) -> String {
    format!(
        "Rewrite the following personal description as a professional, minimal and \
         sophisticated biography for a creative professional's portfolio. \
         The person is called {name} and works as {role}.\n\
         The tone must be inspirational, cinematic and refined. Keep it short \
         (2-3 sentences at most).\n\
         The answer must be written strictly in {language}.\n\n\
         Source text: \"{bio}\"",
        name = name,
        role = role,
        language = TARGET_LANGUAGE,
        bio = bio,
    )
}

/// Anything offering "complete this prompt" semantics
#[async_trait]
pub trait BioEnhancer: Send + Sync {
    /// Rewrite `bio`. Errors are absorbed by [`EnhancementGateway`].
    async fn rewrite(&self, bio: &str, role: &str, name: &str) -> Result<String, PortfolioError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect::<String>())
            .unwrap_or_default()
    }
}

/// Gemini `generateContent` backend.
///
/// The key travels in a header, never in the URL, so transport errors can be
/// logged as-is.
pub struct GeminiEnhancer {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiEnhancer {
    pub fn new(config: &EnhancementConfig) -> Result<Self, PortfolioError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| PortfolioError::Config("GEMINI_API_KEY not set".to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PortfolioError::Enhancement(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            endpoint: GEMINI_ENDPOINT.to_string(),
        })
    }

    /// Point at another `models` base URL (a proxy or a local stub)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint.trim_end_matches('/'), MODEL)
    }
}

fn build_request(bio: &str, role: &str, name: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: build_prompt(bio, role, name),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
        },
    }
}

fn transport_error(e: reqwest::Error) -> PortfolioError {
    PortfolioError::Enhancement(e.without_url().to_string())
}

#[async_trait]
impl BioEnhancer for GeminiEnhancer {
    async fn rewrite(&self, bio: &str, role: &str, name: &str) -> Result<String, PortfolioError> {
        let resp = self
            .http
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&build_request(bio, role, name))
            .send()
            .await
            .map_err(transport_error)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let body: String = body.trim().chars().take(800).collect();
            return Err(PortfolioError::Enhancement(format!(
                "gemini error: {} {}",
                status, body
            )));
        }

        let body: GeminiResponse = resp.json().await.map_err(transport_error)?;
        Ok(body.text())
    }
}

/// What a call to [`EnhancementGateway::enhance`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhanceOutcome {
    /// The backend produced a new bio
    Enhanced(String),
    /// The backend failed; this is the original bio
    Fallback(String),
    /// Another enhancement is already running; nothing was sent
    Busy,
}

impl EnhanceOutcome {
    /// The bio to show, if this call produced one
    pub fn into_bio(self) -> Option<String> {
        match self {
            EnhanceOutcome::Enhanced(bio) | EnhanceOutcome::Fallback(bio) => Some(bio),
            EnhanceOutcome::Busy => None,
        }
    }
}

/// Clears the in-flight flag even if the call future is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Fallback-and-guard wrapper around a [`BioEnhancer`]
#[derive(Clone)]
pub struct EnhancementGateway {
    backend: Arc<dyn BioEnhancer>,
    in_flight: Arc<AtomicBool>,
    timeout: Duration,
}

impl EnhancementGateway {
    pub fn new(backend: Arc<dyn BioEnhancer>, timeout: Duration) -> Self {
        Self {
            backend,
            in_flight: Arc::new(AtomicBool::new(false)),
            timeout,
        }
    }

    /// Gateway over Gemini; `None` when no API key is available
    pub fn gemini(config: &EnhancementConfig) -> Option<Self> {
        match GeminiEnhancer::new(config) {
            Ok(backend) => Some(Self::new(Arc::new(backend), config.timeout())),
            Err(e) => {
                warn!("Bio enhancement unavailable: {}", e);
                None
            }
        }
    }

    /// Whether an enhancement is currently running
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Rewrite `bio`, or return it unchanged on any failure.
    ///
    /// Returns [`EnhanceOutcome::Busy`] without calling the backend if another
    /// enhancement has not finished yet.
    pub async fn enhance(&self, bio: &str, role: &str, name: &str) -> EnhanceOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            info!("Enhancement already in flight, ignoring request");
            return EnhanceOutcome::Busy;
        }
        let _guard = InFlight(&self.in_flight);

        let call = self.backend.rewrite(bio, role, name);
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                info!(chars = text.len(), "Bio enhanced");
                EnhanceOutcome::Enhanced(text.trim().to_string())
            }
            Ok(Ok(_)) => {
                warn!("Enhancement returned empty text, keeping original bio");
                EnhanceOutcome::Fallback(bio.to_string())
            }
            Ok(Err(e)) => {
                warn!("Enhancement failed, keeping original bio: {}", e);
                EnhanceOutcome::Fallback(bio.to_string())
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "Enhancement timed out, keeping original bio");
                EnhanceOutcome::Fallback(bio.to_string())
            }
        }
    }
}
