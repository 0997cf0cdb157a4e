//! PortfolioEditor - application state container
//!
//! Owns the current document and the store behind it. Every edit goes through
//! [`PortfolioEditor::apply`], which computes the next document, persists it
//! and publishes it to subscribers. Nothing else writes to storage.
//!
//! # Example
//!
//! ```ignore
//! use showreel_core::{Mutation, PortfolioEditor, Storage};
//!
//! let storage = Storage::new("~/.local/share/showreel/showreel.redb")?;
//! let mut editor = PortfolioEditor::open(storage, Default::default());
//!
//! let mut updates = editor.subscribe();
//! editor.apply(Mutation::SetRole("Director of Photography".into()))?;
//! assert!(updates.has_changed()?);
//! ```

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::TransientPolicy;
use crate::enhance::{EnhanceOutcome, EnhancementGateway};
use crate::error::PortfolioError;
use crate::mutation::Mutation;
use crate::storage::DocumentStore;
use crate::types::PortfolioDocument;

/// How the document was obtained when the editor opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// Read back from storage
    Restored,
    /// Nothing stored yet; started from the default document
    Fresh,
    /// Stored value was unreadable; started from the default document
    Recovered { reason: String },
}

/// Single-writer owner of the portfolio document
pub struct PortfolioEditor {
    store: Box<dyn DocumentStore>,
    doc_tx: watch::Sender<PortfolioDocument>,
    policy: TransientPolicy,
    hydration: Hydration,
}

impl PortfolioEditor {
    /// Hydrate from `store`, falling back to the default document.
    ///
    /// Never fails: an unreadable stored value is logged and replaced in
    /// memory by the default (the stored bytes stay until the next save).
    pub fn open(store: impl DocumentStore + 'static, policy: TransientPolicy) -> Self {
        let (doc, hydration) = match store.load() {
            Ok(Some(mut doc)) => {
                let repaired = doc.dedupe_project_ids();
                if repaired > 0 {
                    warn!(repaired, "Stored portfolio had duplicate project ids, re-identified");
                }
                info!(projects = doc.projects.len(), "Portfolio restored from storage");
                (doc, Hydration::Restored)
            }
            Ok(None) => {
                info!("No stored portfolio, starting from default");
                (PortfolioDocument::default(), Hydration::Fresh)
            }
            Err(e) => {
                warn!("Failed to load stored portfolio, using default: {}", e);
                (
                    PortfolioDocument::default(),
                    Hydration::Recovered {
                        reason: e.to_string(),
                    },
                )
            }
        };

        let (doc_tx, _) = watch::channel(doc);
        Self {
            store: Box::new(store),
            doc_tx,
            policy,
            hydration,
        }
    }

    pub fn hydration(&self) -> &Hydration {
        &self.hydration
    }

    /// Current document
    pub fn document(&self) -> PortfolioDocument {
        self.doc_tx.borrow().clone()
    }

    /// Receive every document published from now on
    pub fn subscribe(&self) -> watch::Receiver<PortfolioDocument> {
        self.doc_tx.subscribe()
    }

    /// Apply one edit, persist, publish.
    ///
    /// The in-memory document is updated even if the write fails; the error
    /// is returned so the caller can report it.
    pub fn apply(&mut self, mutation: Mutation) -> Result<PortfolioDocument, PortfolioError> {
        let label = mutation.label();
        let next = self.doc_tx.borrow().apply(mutation);
        debug!(mutation = label, "Applying mutation");

        self.doc_tx.send_replace(next.clone());
        self.persist(&next)?;
        Ok(next)
    }

    /// Replace the whole document (import).
    ///
    /// A document with repeated project ids is refused and nothing changes.
    pub fn replace(&mut self, doc: PortfolioDocument) -> Result<(), PortfolioError> {
        let dupes = doc.duplicate_project_ids();
        if !dupes.is_empty() {
            let ids: Vec<&str> = dupes.iter().map(|id| id.as_str()).collect();
            return Err(PortfolioError::InvalidDocument(format!(
                "duplicate project ids: {}",
                ids.join(", ")
            )));
        }

        self.doc_tx.send_replace(doc.clone());
        self.persist(&doc)
    }

    /// Drop the stored document and go back to the default
    pub fn reset(&mut self) -> Result<(), PortfolioError> {
        self.store.clear()?;
        self.doc_tx.send_replace(PortfolioDocument::default());
        info!("Portfolio reset to default");
        Ok(())
    }

    /// Write out anything the store is buffering
    pub fn flush(&self) -> Result<(), PortfolioError> {
        self.store.flush()
    }

    /// Rewrite the bio through `gateway` and store the result.
    ///
    /// A failed enhancement leaves the bio untouched; a busy gateway changes
    /// nothing.
    pub async fn enhance_bio(
        &mut self,
        gateway: &EnhancementGateway,
    ) -> Result<EnhanceOutcome, PortfolioError> {
        let doc = self.document();
        let outcome = gateway.enhance(&doc.bio, &doc.role, &doc.name).await;
        if let EnhanceOutcome::Enhanced(bio) = &outcome {
            self.apply(Mutation::SetBio(bio.clone()))?;
        }
        Ok(outcome)
    }

    fn persist(&self, doc: &PortfolioDocument) -> Result<(), PortfolioError> {
        let transient = doc.transient_refs();
        let result = match self.policy {
            TransientPolicy::Warn => {
                if !transient.is_empty() {
                    warn!(
                        count = transient.len(),
                        "Saving session-only media references; they will not survive a restart"
                    );
                }
                self.store.save(doc)
            }
            TransientPolicy::Strip => {
                if transient.is_empty() {
                    self.store.save(doc)
                } else {
                    debug!(count = transient.len(), "Leaving session-only media out of saved copy");
                    self.store.save(&doc.without_transient())
                }
            }
        };

        if let Err(e) = &result {
            tracing::error!("Failed to save portfolio: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhance::BioEnhancer;
    use crate::storage::MemoryStore;
    use crate::types::{MediaRef, ProjectId, SessionHandle, VideoProject};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl DocumentStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioError> {
            Ok(None)
        }

        fn save(&self, _: &PortfolioDocument) -> Result<(), PortfolioError> {
            Err(PortfolioError::Storage("read-only".to_string()))
        }

        fn clear(&self) -> Result<(), PortfolioError> {
            Ok(())
        }
    }

    #[test]
    fn test_open_empty_store_is_fresh() {
        let editor = PortfolioEditor::open(MemoryStore::new(), TransientPolicy::Warn);
        assert_eq!(editor.hydration(), &Hydration::Fresh);
        assert_eq!(editor.document(), PortfolioDocument::default());
    }

    fn doc_with_repeated_id() -> PortfolioDocument {
        let id = ProjectId::from_raw("twice");
        let mut doc = PortfolioDocument::default();
        doc.projects.push(VideoProject::new(id.clone(), MediaRef::durable("https://v/a.mp4")));
        doc.projects.push(VideoProject::new(id, MediaRef::durable("https://v/b.mp4")));
        doc
    }

    #[test]
    fn test_replace_refuses_duplicate_ids() {
        let mut editor = PortfolioEditor::open(MemoryStore::new(), TransientPolicy::Warn);
        let before = editor.document();

        let result = editor.replace(doc_with_repeated_id());
        assert!(matches!(
            result,
            Err(PortfolioError::InvalidDocument(ref msg)) if msg.contains("twice")
        ));
        assert_eq!(editor.document(), before);
    }

    #[test]
    fn test_open_repairs_duplicate_ids() {
        let store = MemoryStore::new();
        store.save(&doc_with_repeated_id()).unwrap();

        let mut editor = PortfolioEditor::open(store, TransientPolicy::Warn);
        let doc = editor.document();
        assert_eq!(doc.projects.len(), 2);
        assert_ne!(doc.projects[0].id, doc.projects[1].id);

        // Removing one project no longer takes the other with it
        let first = doc.projects[0].id.clone();
        let next = editor.apply(Mutation::RemoveProject { id: first }).unwrap();
        assert_eq!(next.projects.len(), 1);
        assert_eq!(next.projects[0].url.as_str(), "https://v/b.mp4");
    }

    #[test]
    fn test_open_restores_saved_document() {
        let store = MemoryStore::new();
        let saved = PortfolioDocument::default().apply(Mutation::SetName("Giulia Neri".into()));
        store.save(&saved).unwrap();

        let editor = PortfolioEditor::open(store, TransientPolicy::Warn);
        assert_eq!(editor.hydration(), &Hydration::Restored);
        assert_eq!(editor.document(), saved);
    }

    #[test]
    fn test_open_corrupt_store_recovers_default() {
        let store = MemoryStore::new();
        store.save_raw(b"{\"name\": 42");

        let editor = PortfolioEditor::open(store, TransientPolicy::Warn);
        assert!(matches!(editor.hydration(), Hydration::Recovered { .. }));
        assert_eq!(editor.document(), PortfolioDocument::default());
    }

    #[test]
    fn test_apply_persists_every_mutation() {
        let store = MemoryStore::new();
        let mut editor = PortfolioEditor::open(store.clone(), TransientPolicy::Warn);

        editor.apply(Mutation::SetName("A".into())).unwrap();
        assert_eq!(store.load().unwrap().unwrap().name, "A");

        editor.apply(Mutation::SetName("Al".into())).unwrap();
        assert_eq!(store.load().unwrap().unwrap().name, "Al");
    }

    #[test]
    fn test_subscribers_see_updates() {
        let mut editor = PortfolioEditor::open(MemoryStore::new(), TransientPolicy::Warn);
        let mut rx = editor.subscribe();

        editor.apply(Mutation::SetRole("Editor".into())).unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().role, "Editor");
    }

    #[test]
    fn test_failed_write_still_updates_memory() {
        let mut editor = PortfolioEditor::open(ReadOnlyStore, TransientPolicy::Warn);

        let result = editor.apply(Mutation::SetBio("new".into()));
        assert!(matches!(result, Err(PortfolioError::Storage(_))));
        assert_eq!(editor.document().bio, "new");
    }

    #[test]
    fn test_warn_policy_keeps_transient_refs() {
        let store = MemoryStore::new();
        let mut editor = PortfolioEditor::open(store.clone(), TransientPolicy::Warn);

        let logo = MediaRef::transient(SessionHandle::new());
        editor.apply(Mutation::SetLogo(Some(logo.clone()))).unwrap();

        assert_eq!(store.load().unwrap().unwrap().logo_url, Some(logo));
    }

    #[test]
    fn test_strip_policy_drops_transient_refs_from_saved_copy() {
        let store = MemoryStore::new();
        let mut editor = PortfolioEditor::open(store.clone(), TransientPolicy::Strip);

        editor
            .apply(Mutation::AddProject {
                url: MediaRef::transient(SessionHandle::new()),
            })
            .unwrap();
        editor
            .apply(Mutation::AddProject {
                url: MediaRef::durable("https://v/keep.mp4"),
            })
            .unwrap();

        assert_eq!(editor.document().projects.len(), 2);
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.projects.len(), 1);
        assert_eq!(saved.projects[0].url.as_str(), "https://v/keep.mp4");
    }

    #[test]
    fn test_remove_missing_project_leaves_document_equal() {
        let mut editor = PortfolioEditor::open(MemoryStore::new(), TransientPolicy::Warn);
        editor
            .apply(Mutation::AddProject {
                url: MediaRef::durable("https://v/1.mp4"),
            })
            .unwrap();
        let before = editor.document();

        let after = editor
            .apply(Mutation::RemoveProject {
                id: ProjectId::from_raw("missing"),
            })
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reset() {
        let store = MemoryStore::new();
        let mut editor = PortfolioEditor::open(store.clone(), TransientPolicy::Warn);
        editor.apply(Mutation::SetName("Temp".into())).unwrap();

        editor.reset().unwrap();
        assert_eq!(editor.document(), PortfolioDocument::default());
        assert!(store.load().unwrap().is_none());
    }

    struct Echo;

    #[async_trait]
    impl BioEnhancer for Echo {
        async fn rewrite(&self, bio: &str, role: &str, _: &str) -> Result<String, PortfolioError> {
            Ok(format!("{} / {}", role, bio))
        }
    }

    struct Down;

    #[async_trait]
    impl BioEnhancer for Down {
        async fn rewrite(&self, _: &str, _: &str, _: &str) -> Result<String, PortfolioError> {
            Err(PortfolioError::Enhancement("offline".into()))
        }
    }

    #[tokio::test]
    async fn test_enhance_bio_updates_and_persists() {
        let store = MemoryStore::new();
        let mut editor = PortfolioEditor::open(store.clone(), TransientPolicy::Warn);
        editor.apply(Mutation::SetBio("short".into())).unwrap();
        editor.apply(Mutation::SetRole("Editor".into())).unwrap();

        let gateway = EnhancementGateway::new(Arc::new(Echo), Duration::from_secs(5));
        let outcome = editor.enhance_bio(&gateway).await.unwrap();

        assert_eq!(outcome, EnhanceOutcome::Enhanced("Editor / short".into()));
        assert_eq!(store.load().unwrap().unwrap().bio, "Editor / short");
    }

    #[tokio::test]
    async fn test_enhance_bio_failure_keeps_bio() {
        let mut editor = PortfolioEditor::open(MemoryStore::new(), TransientPolicy::Warn);
        let before = editor.document().bio;

        let gateway = EnhancementGateway::new(Arc::new(Down), Duration::from_secs(5));
        let outcome = editor.enhance_bio(&gateway).await.unwrap();

        assert_eq!(outcome, EnhanceOutcome::Fallback(before.clone()));
        assert_eq!(editor.document().bio, before);
    }
}
