//! Debounced autosave.
//!
//! Wraps any [`DocumentStore`] so bursts of saves (one per keystroke) collapse
//! into a single write once edits go quiet. Reads see the pending document,
//! and `flush` (or dropping the store) writes it out immediately, so nothing
//! accepted by `save` is lost on a normal shutdown.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::error::PortfolioError;
use crate::storage::DocumentStore;
use crate::types::PortfolioDocument;

/// Store wrapper that coalesces writes
pub struct DebouncedStore<S: DocumentStore + 'static> {
    shared: Arc<Shared<S>>,
    notify: Arc<Notify>,
    writer: JoinHandle<()>,
}

struct Shared<S> {
    inner: S,
    pending: Mutex<Option<PortfolioDocument>>,
    /// Held from taking the pending document until its write returns, so
    /// writes reach `inner` in the order they were taken.
    write_lock: Mutex<()>,
}

impl<S: DocumentStore> Shared<S> {
    fn write_pending(&self) -> Result<(), PortfolioError> {
        let _writing = self.write_lock.lock();
        let doc = self.pending.lock().take();
        match doc {
            Some(doc) => {
                debug!(projects = doc.projects.len(), "Writing pending save");
                self.inner.save(&doc)
            }
            None => Ok(()),
        }
    }
}

impl<S: DocumentStore + 'static> DebouncedStore<S> {
    /// Wrap `inner`, writing after `quiet` has passed without a new save.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(inner: S, quiet: Duration) -> Self {
        let shared = Arc::new(Shared {
            inner,
            pending: Mutex::new(None),
            write_lock: Mutex::new(()),
        });
        let notify = Arc::new(Notify::new());

        // The writer only holds a weak handle, so dropping the store releases
        // `inner` right away instead of whenever the aborted task is reaped.
        let writer = tokio::spawn(write_loop(Arc::downgrade(&shared), notify.clone(), quiet));

        Self {
            shared,
            notify,
            writer,
        }
    }

    /// Whether a save is waiting to be written
    pub fn has_pending(&self) -> bool {
        self.shared.pending.lock().is_some()
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.shared.inner
    }
}

async fn write_loop<S: DocumentStore>(
    shared: Weak<Shared<S>>,
    notify: Arc<Notify>,
    quiet: Duration,
) {
    loop {
        notify.notified().await;

        // Every new save restarts the quiet period
        loop {
            tokio::select! {
                _ = tokio::time::sleep(quiet) => break,
                _ = notify.notified() => continue,
            }
        }

        let Some(shared) = shared.upgrade() else {
            break;
        };
        if let Err(e) = shared.write_pending() {
            error!("Debounced save failed: {}", e);
        }
    }
}

impl<S: DocumentStore + 'static> DocumentStore for DebouncedStore<S> {
    fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioError> {
        if let Some(doc) = self.shared.pending.lock().clone() {
            return Ok(Some(doc));
        }
        self.shared.inner.load()
    }

    fn save(&self, doc: &PortfolioDocument) -> Result<(), PortfolioError> {
        *self.shared.pending.lock() = Some(doc.clone());
        self.notify.notify_one();
        Ok(())
    }

    fn clear(&self) -> Result<(), PortfolioError> {
        let _writing = self.shared.write_lock.lock();
        self.shared.pending.lock().take();
        self.shared.inner.clear()
    }

    /// Write the pending document now, after any write already in progress
    fn flush(&self) -> Result<(), PortfolioError> {
        self.shared.write_pending()
    }
}

impl<S: DocumentStore + 'static> Drop for DebouncedStore<S> {
    fn drop(&mut self) {
        // Abort cannot interrupt a save already running on another worker;
        // flush waits for it on the write lock.
        self.writer.abort();
        if let Err(e) = self.flush() {
            error!("Failed to flush pending save on shutdown: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::Mutation;
    use crate::storage::{MemoryStore, Storage};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// MemoryStore that counts writes
    #[derive(Clone, Default)]
    struct CountingStore {
        store: MemoryStore,
        writes: Arc<AtomicUsize>,
    }

    impl DocumentStore for CountingStore {
        fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioError> {
            self.store.load()
        }

        fn save(&self, doc: &PortfolioDocument) -> Result<(), PortfolioError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.store.save(doc)
        }

        fn clear(&self) -> Result<(), PortfolioError> {
            self.store.clear()
        }
    }

    fn named(name: &str) -> PortfolioDocument {
        PortfolioDocument::default().apply(Mutation::SetName(name.to_string()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_into_one_write() {
        let counting = CountingStore::default();
        let writes = counting.writes.clone();
        let backing = counting.store.clone();
        let store = DebouncedStore::spawn(counting, Duration::from_millis(500));

        for name in ["A", "Al", "Ale"] {
            store.save(&named(name)).unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(writes.load(Ordering::SeqCst), 0);
        assert!(store.has_pending());

        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(writes.load(Ordering::SeqCst), 1);
        assert_eq!(backing.load().unwrap().unwrap().name, "Ale");
        assert!(!store.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_sees_pending_document() {
        let store = DebouncedStore::spawn(MemoryStore::new(), Duration::from_secs(5));

        store.save(&named("Pending")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().name, "Pending");
        assert!(store.inner().load().unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_writes_immediately() {
        let store = DebouncedStore::spawn(MemoryStore::new(), Duration::from_secs(5));

        store.save(&named("Flushed")).unwrap();
        store.flush().unwrap();

        assert_eq!(store.inner().load().unwrap().unwrap().name, "Flushed");
        assert!(!store.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_flushes_pending() {
        let backing = MemoryStore::new();
        {
            let store = DebouncedStore::spawn(backing.clone(), Duration::from_secs(5));
            store.save(&named("On Exit")).unwrap();
        }
        assert_eq!(backing.load().unwrap().unwrap().name, "On Exit");
    }

    /// Holds the first write until told to finish; records write order
    #[derive(Clone, Default)]
    struct SlowFirstWrite {
        store: MemoryStore,
        started: Arc<AtomicBool>,
        release: Arc<AtomicBool>,
        order: Arc<Mutex<Vec<String>>>,
    }

    impl DocumentStore for SlowFirstWrite {
        fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioError> {
            self.store.load()
        }

        fn save(&self, doc: &PortfolioDocument) -> Result<(), PortfolioError> {
            if !self.started.swap(true, Ordering::SeqCst) {
                while !self.release.load(Ordering::SeqCst) {
                    std::thread::sleep(Duration::from_millis(5));
                }
            }
            self.order.lock().push(doc.name.clone());
            self.store.save(doc)
        }

        fn clear(&self) -> Result<(), PortfolioError> {
            self.store.clear()
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_flush_during_slow_write_keeps_newest() {
        let slow = SlowFirstWrite::default();
        let probe = slow.clone();
        let store = DebouncedStore::spawn(slow, Duration::from_millis(10));

        store.save(&named("Old")).unwrap();
        while !probe.started.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        // The writer is stuck inside save("Old")
        store.save(&named("New")).unwrap();
        let release = probe.release.clone();
        let unblock = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(100));
            release.store(true, Ordering::SeqCst);
        });

        store.flush().unwrap();
        drop(store);
        unblock.join().unwrap();

        assert_eq!(*probe.order.lock(), vec!["Old".to_string(), "New".to_string()]);
        assert_eq!(probe.store.load().unwrap().unwrap().name, "New");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_drop_waits_for_write_in_progress() {
        let slow = SlowFirstWrite::default();
        let probe = slow.clone();
        let store = DebouncedStore::spawn(slow, Duration::from_millis(10));

        store.save(&named("Old")).unwrap();
        while !probe.started.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        store.save(&named("New")).unwrap();

        let release = probe.release.clone();
        let unblock = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(100));
            release.store(true, Ordering::SeqCst);
        });
        drop(store);
        unblock.join().unwrap();

        assert_eq!(probe.store.load().unwrap().unwrap().name, "New");
    }

    #[tokio::test]
    async fn test_drop_releases_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debounced.redb");

        let store = DebouncedStore::spawn(Storage::new(&path).unwrap(), Duration::from_secs(60));
        store.save(&named("Closed")).unwrap();
        drop(store);

        // No yield in between: the writer task has not been reaped yet
        let reopened = Storage::new(&path).unwrap();
        assert_eq!(reopened.load().unwrap().unwrap().name, "Closed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_discards_pending() {
        let backing = MemoryStore::new();
        backing.save(&named("Stored")).unwrap();

        let store = DebouncedStore::spawn(backing.clone(), Duration::from_secs(5));
        store.save(&named("Pending")).unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_none());
        drop(store);
        assert!(backing.load().unwrap().is_none());
    }
}
