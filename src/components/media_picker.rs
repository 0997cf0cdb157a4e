//! Native file picker for portfolio media.
//!
//! Picks a local image or video and registers it with the session resolver.

use std::path::PathBuf;

use rfd::FileDialog;
use showreel_core::{MediaKind, MediaRef, MediaResolver};

/// Open the file dialog filtered to `kind`.
///
/// The dialog blocks, so it runs on the blocking pool. `None` when the user
/// cancels.
pub async fn pick_file(kind: MediaKind) -> Option<PathBuf> {
    let picked = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter(kind.filter_name(), kind.extensions())
            .set_title(match kind {
                MediaKind::Image => "Seleziona immagine",
                MediaKind::Video => "Seleziona video",
            })
            .pick_file()
    })
    .await;

    match picked {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("File picker error: {:?}", e);
            None
        }
    }
}

/// Pick a file and turn it into a session-scoped media reference.
///
/// Reading and encoding happen on the blocking pool so a large video does not
/// stall the window.
pub async fn pick_media(resolver: MediaResolver, kind: MediaKind) -> Option<MediaRef> {
    let path = pick_file(kind).await?;
    match resolver.resolve_file(path.clone(), kind).await {
        Ok(media) => Some(media),
        Err(e) => {
            tracing::error!("Failed to load {}: {}", path.display(), e);
            None
        }
    }
}
