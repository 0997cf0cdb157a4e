//! Transient media resolver
//!
//! Turns a picked local file into a session handle that the view can use as an
//! image or video source. Nothing is uploaded or copied to durable storage:
//! the registry lives in memory and dies with the process, so handles read
//! back from storage after a restart resolve to nothing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::PortfolioError;
use crate::types::{MediaKind, MediaRef, SessionHandle};

/// A file registered for this session
#[derive(Debug, Clone)]
struct TransientMedia {
    /// `data:` URI, built once at registration
    source: Arc<str>,
    bytes: usize,
}

/// Session-scoped registry of picked files
#[derive(Clone, Default)]
pub struct MediaResolver {
    entries: Arc<RwLock<HashMap<SessionHandle, TransientMedia>>>,
}

impl MediaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a local file and return a transient reference to it.
    ///
    /// Reads and encodes the whole file on the calling thread. No MIME or size
    /// validation happens here; the picker's filter is the only restriction on
    /// what gets through.
    pub fn resolve(
        &self,
        path: impl AsRef<Path>,
        kind: MediaKind,
    ) -> Result<MediaRef, PortfolioError> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| PortfolioError::Media(format!("{}: {}", path.display(), e)))?;

        let mime = kind.mime_for(path);
        let handle = self.register_bytes(&data, mime);
        info!(?path, %handle, bytes = data.len(), "Registered transient media");
        Ok(MediaRef::transient(handle))
    }

    /// [`MediaResolver::resolve`] on the blocking pool, for callers on an
    /// async UI task
    pub async fn resolve_file(
        &self,
        path: PathBuf,
        kind: MediaKind,
    ) -> Result<MediaRef, PortfolioError> {
        let resolver = self.clone();
        tokio::task::spawn_blocking(move || resolver.resolve(&path, kind))
            .await
            .map_err(|e| PortfolioError::Media(format!("media loader stopped: {}", e)))?
    }

    /// Register in-memory bytes under a fresh handle
    pub fn register_bytes(&self, data: &[u8], mime: &str) -> SessionHandle {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        let source: Arc<str> = format!("data:{};base64,{}", mime, encoded).into();

        let handle = SessionHandle::new();
        self.entries.write().insert(
            handle.clone(),
            TransientMedia {
                source,
                bytes: data.len(),
            },
        );
        handle
    }

    /// Display source for a reference.
    ///
    /// Durable URLs pass through. Transient handles resolve only if they were
    /// registered in this session; otherwise `None` (a dangling reference).
    ///
    /// The returned source shares the registered buffer.
    pub fn source(&self, media: &MediaRef) -> Option<Arc<str>> {
        match media {
            MediaRef::Durable { url } => Some(Arc::from(url.as_str())),
            MediaRef::Transient { handle } => {
                let entries = self.entries.read();
                match entries.get(handle) {
                    Some(entry) => Some(entry.source.clone()),
                    None => {
                        debug!(%handle, "Transient media reference from an earlier session");
                        None
                    }
                }
            }
        }
    }

    /// Whether a transient handle is still backed by data
    pub fn is_live(&self, media: &MediaRef) -> bool {
        match media {
            MediaRef::Durable { .. } => true,
            MediaRef::Transient { handle } => self.entries.read().contains_key(handle),
        }
    }

    /// Forget a handle (e.g. when its project is removed)
    pub fn release(&self, media: &MediaRef) {
        if let MediaRef::Transient { handle } = media {
            if let Some(entry) = self.entries.write().remove(handle) {
                debug!(%handle, bytes = entry.bytes, "Released transient media");
            }
        }
    }

    /// Release `old` once `new` has taken its place
    pub fn replace(&self, old: Option<&MediaRef>, new: Option<&MediaRef>) {
        if let Some(old) = old {
            if Some(old) != new {
                self.release(old);
            }
        }
    }

    /// Number of registered files
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
