//! Editor context for the portfolio window.
//!
//! Provides the editor, the published document, the admin gate and the media
//! services to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let document = use_document();
//! let editor = use_editor();
//!
//! apply_mutation(editor, Mutation::SetRole("Colorist".into()));
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use parking_lot::RwLock;
use showreel_core::{
    AdminGate, EditorConfig, EnhancementGateway, MediaResolver, Mutation, PortfolioDocument,
    PortfolioEditor,
};

/// Shared editor type for context.
///
/// `None` until the store has been opened. The lock is never held across an
/// await point.
pub type SharedEditor = Arc<RwLock<Option<PortfolioEditor>>>;

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the editor settings loaded at startup.
pub fn get_editor_config() -> EditorConfig {
    crate::get_editor_config()
}

pub fn use_editor() -> Signal<SharedEditor> {
    use_context::<Signal<SharedEditor>>()
}

/// Latest document published by the editor.
pub fn use_document() -> Signal<PortfolioDocument> {
    use_context::<Signal<PortfolioDocument>>()
}

/// Hook to access the edit-mode gate.
pub fn use_gate() -> Signal<AdminGate> {
    use_context::<Signal<AdminGate>>()
}

pub fn use_resolver() -> MediaResolver {
    use_context::<MediaResolver>()
}

/// Enhancement backend, `None` when no API key is configured.
pub fn use_gateway() -> Option<EnhancementGateway> {
    use_context::<Option<EnhancementGateway>>()
}

/// True while a bio enhancement is running.
pub fn use_enhancing() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Send one edit through the editor.
///
/// Failed writes are logged; the document signal still updates because the
/// editor publishes before it persists.
pub fn apply_mutation(editor: Signal<SharedEditor>, mutation: Mutation) {
    let shared = editor();
    let mut guard = shared.write();
    match guard.as_mut() {
        Some(ed) => {
            if let Err(e) = ed.apply(mutation) {
                tracing::error!("Failed to save edit: {}", e);
            }
        }
        None => tracing::warn!(mutation = mutation.label(), "Editor not ready, edit dropped"),
    }
}
