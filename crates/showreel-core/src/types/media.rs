//! Media references - durable URLs vs session-scoped handles
//!
//! A picked local file only lives for the current session. Keeping that fact in
//! the type lets persistence warn about (or strip) references that will dangle
//! after a restart instead of silently saving them.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Prefix of handles minted by the media resolver
pub const SESSION_PREFIX: &str = "session:";

/// Prefix of browser object URLs written by older documents
const BLOB_PREFIX: &str = "blob:";

/// Session-scoped handle for a transient media file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(String);

impl SessionHandle {
    /// Mint a fresh handle
    pub fn new() -> Self {
        Self(format!("{}{}", SESSION_PREFIX, Ulid::new()))
    }

    /// Wrap an existing handle string (e.g. one read back from storage)
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an image or video comes from.
///
/// Serialized with a `kind` tag. Bare strings are accepted on read so documents
/// written before the tag existed still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", from = "MediaRefRepr")]
pub enum MediaRef {
    /// A URL that stays valid across sessions
    Durable { url: String },
    /// A file picked during this session; invalid after restart
    Transient { handle: SessionHandle },
}

impl MediaRef {
    /// Create a durable reference
    pub fn durable(url: impl Into<String>) -> Self {
        MediaRef::Durable { url: url.into() }
    }

    /// Create a transient reference
    pub fn transient(handle: SessionHandle) -> Self {
        MediaRef::Transient { handle }
    }

    /// Classify a raw source string
    pub fn from_source(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with(SESSION_PREFIX) || raw.starts_with(BLOB_PREFIX) {
            MediaRef::Transient {
                handle: SessionHandle(raw),
            }
        } else {
            MediaRef::Durable { url: raw }
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, MediaRef::Transient { .. })
    }

    /// The raw string behind this reference (URL or handle)
    pub fn as_str(&self) -> &str {
        match self {
            MediaRef::Durable { url } => url,
            MediaRef::Transient { handle } => handle.as_str(),
        }
    }
}

impl fmt::Display for MediaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shapes accepted when reading a `MediaRef`
#[derive(Deserialize)]
#[serde(untagged)]
enum MediaRefRepr {
    Raw(String),
    Tagged(TaggedMediaRef),
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum TaggedMediaRef {
    Durable { url: String },
    Transient { handle: SessionHandle },
}

impl From<MediaRefRepr> for MediaRef {
    fn from(repr: MediaRefRepr) -> Self {
        match repr {
            MediaRefRepr::Raw(raw) => MediaRef::from_source(raw),
            MediaRefRepr::Tagged(TaggedMediaRef::Durable { url }) => MediaRef::Durable { url },
            MediaRefRepr::Tagged(TaggedMediaRef::Transient { handle }) => {
                MediaRef::Transient { handle }
            }
        }
    }
}

/// Kind of media a picker slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// `image/*` (profile picture, logo)
    Image,
    /// `video/*` (projects)
    Video,
}

impl MediaKind {
    /// File extensions offered by the picker for this kind
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => &["png", "jpg", "jpeg", "webp", "gif", "svg"],
            MediaKind::Video => &["mp4", "webm", "mov", "m4v", "ogv"],
        }
    }

    /// Label for the picker filter
    pub fn filter_name(&self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
        }
    }

    /// Best-effort MIME type for a file of this kind
    pub fn mime_for(&self, path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match (self, ext.as_str()) {
            (MediaKind::Image, "jpg" | "jpeg") => "image/jpeg",
            (MediaKind::Image, "webp") => "image/webp",
            (MediaKind::Image, "gif") => "image/gif",
            (MediaKind::Image, "svg") => "image/svg+xml",
            (MediaKind::Image, _) => "image/png",
            (MediaKind::Video, "webm") => "video/webm",
            (MediaKind::Video, "mov") => "video/quicktime",
            (MediaKind::Video, "ogv") => "video/ogg",
            (MediaKind::Video, _) => "video/mp4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_handle_prefix() {
        let handle = SessionHandle::new();
        assert!(handle.as_str().starts_with(SESSION_PREFIX));
        assert_ne!(handle, SessionHandle::new());
    }

    #[test]
    fn test_tagged_serialization() {
        let durable = MediaRef::durable("https://example.com/a.jpg");
        let json = serde_json::to_string(&durable).unwrap();
        assert_eq!(json, r#"{"kind":"durable","url":"https://example.com/a.jpg"}"#);

        let back: MediaRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, durable);
    }

    #[test]
    fn test_transient_roundtrip() {
        let transient = MediaRef::transient(SessionHandle::new());
        let json = serde_json::to_string(&transient).unwrap();
        let back: MediaRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, transient);
        assert!(back.is_transient());
    }

    #[test]
    fn test_bare_string_is_durable() {
        let parsed: MediaRef = serde_json::from_str(r#""https://images.example/p.jpg""#).unwrap();
        assert_eq!(parsed, MediaRef::durable("https://images.example/p.jpg"));
    }

    #[test]
    fn test_bare_blob_url_is_transient() {
        let parsed: MediaRef =
            serde_json::from_str(r#""blob:http://localhost:3000/3b1f""#).unwrap();
        assert!(parsed.is_transient());
        assert_eq!(parsed.as_str(), "blob:http://localhost:3000/3b1f");
    }

    #[test]
    fn test_mime_guess() {
        assert_eq!(MediaKind::Image.mime_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(MediaKind::Video.mime_for(Path::new("clip.webm")), "video/webm");
        assert_eq!(MediaKind::Video.mime_for(Path::new("clip")), "video/mp4");
    }
}
