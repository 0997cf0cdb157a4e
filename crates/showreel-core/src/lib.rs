//! Showreel Core Library
//!
//! State, persistence and edit-mode gate for a single-page, self-editable
//! video portfolio.
//!
//! ## Overview
//!
//! The whole portfolio (name, role, bio, contacts, images, video projects) is
//! one [`PortfolioDocument`]. A [`PortfolioEditor`] hydrates it from a
//! [`DocumentStore`], applies typed [`Mutation`]s, and writes the full
//! document back after each one. An [`AdminGate`] decides whether the page is
//! editable at all.
//!
//! ## Core Principles
//!
//! - **Local only**: one redb file, one key, no server
//! - **Whole-document writes**: no partial updates, no merge
//! - **Never crash on bad data**: unreadable storage falls back to the default
//!   document, a failing enhancement backend falls back to the original bio
//!
//! ## Quick Start
//!
//! ```ignore
//! use showreel_core::{MediaRef, Mutation, PortfolioEditor, Storage};
//!
//! let storage = Storage::new("./data/showreel.redb")?;
//! let mut editor = PortfolioEditor::open(storage, Default::default());
//!
//! editor.apply(Mutation::SetName("Giulia Neri".into()))?;
//! editor.apply(Mutation::AddProject {
//!     url: MediaRef::durable("https://cdn.example/reel.mp4"),
//! })?;
//!
//! let title = editor.document().display_name();
//! println!("{} / {}", title.first, title.rest_or_placeholder());
//! ```

pub mod autosave;
pub mod config;
pub mod editor;
pub mod enhance;
pub mod error;
pub mod gate;
pub mod mutation;
pub mod resolver;
pub mod storage;
pub mod types;

// Re-exports
pub use autosave::DebouncedStore;
pub use config::{EditorConfig, SaveMode, TransientPolicy};
pub use editor::{Hydration, PortfolioEditor};
pub use enhance::{
    BioEnhancer, EnhanceOutcome, EnhancementConfig, EnhancementGateway, GeminiEnhancer,
};
pub use error::{PortfolioError, PortfolioResult};
pub use gate::{AdminGate, GateConfig, GateState, GestureOutcome};
pub use mutation::Mutation;
pub use resolver::MediaResolver;
pub use storage::{DocumentStore, MemoryStore, Storage, DEFAULT_STORAGE_KEY};
pub use types::*;

use std::path::Path;

/// Open the editor over the redb store in `data_dir`, honoring `config`.
///
/// With [`SaveMode::Debounced`] this must run inside a tokio runtime.
pub fn open_editor(
    data_dir: impl AsRef<Path>,
    config: &EditorConfig,
) -> Result<PortfolioEditor, PortfolioError> {
    let data_dir = data_dir.as_ref();
    std::fs::create_dir_all(data_dir)?;

    let storage = Storage::with_key(EditorConfig::database_path(data_dir), config.storage_key())?;
    let editor = match config.save_mode.quiet_period() {
        Some(quiet) => PortfolioEditor::open(
            DebouncedStore::spawn(storage, quiet),
            config.transient_policy,
        ),
        None => PortfolioEditor::open(storage, config.transient_policy),
    };
    Ok(editor)
}
