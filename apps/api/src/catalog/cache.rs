//! Read-through catalog cache keyed by source identity (path + mtime).
//!
//! Handlers take an immutable `Arc<Catalog>` snapshot per request, so CSV
//! edits show up on the next request without a restart. The first load is
//! fail-fast; reload failures degrade to the last good snapshot.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;

use anyhow::Result;
use tracing::{info, warn};

use super::loader;
use super::Catalog;

#[derive(Clone)]
pub struct CatalogCache {
    roles_path: PathBuf,
    questions_path: PathBuf,
    inner: Arc<RwLock<Snapshot>>,
}

struct Snapshot {
    catalog: Arc<Catalog>,
    roles_mtime: Option<SystemTime>,
    questions_mtime: Option<SystemTime>,
}

impl CatalogCache {
    /// Loads both catalogs eagerly. A missing or unreadable file is fatal
    /// here; after startup the cache serves the last good snapshot instead.
    pub fn open(roles_path: PathBuf, questions_path: PathBuf) -> Result<Self> {
        let roles_mtime = mtime(&roles_path);
        let questions_mtime = mtime(&questions_path);
        let catalog = load(&roles_path, &questions_path)?;
        info!(
            roles = catalog.roles.len(),
            questions = catalog.questions.len(),
            "loaded catalogs"
        );
        Ok(Self {
            roles_path,
            questions_path,
            inner: Arc::new(RwLock::new(Snapshot {
                catalog: Arc::new(catalog),
                roles_mtime,
                questions_mtime,
            })),
        })
    }

    /// Current snapshot, reloading first when either file's mtime moved.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let roles_mtime = mtime(&self.roles_path);
        let questions_mtime = mtime(&self.questions_path);

        {
            let guard = read_lock(&self.inner);
            if guard.roles_mtime == roles_mtime && guard.questions_mtime == questions_mtime {
                return Arc::clone(&guard.catalog);
            }
        }

        let mut guard = write_lock(&self.inner);
        // Another request may have reloaded while we waited for the lock.
        if guard.roles_mtime == roles_mtime && guard.questions_mtime == questions_mtime {
            return Arc::clone(&guard.catalog);
        }
        match load(&self.roles_path, &self.questions_path) {
            Ok(catalog) => {
                info!(
                    roles = catalog.roles.len(),
                    questions = catalog.questions.len(),
                    "reloaded catalogs after source change"
                );
                guard.catalog = Arc::new(catalog);
                guard.roles_mtime = roles_mtime;
                guard.questions_mtime = questions_mtime;
                Arc::clone(&guard.catalog)
            }
            Err(err) => {
                // Stale mtimes stay in place so the next request retries.
                warn!(error = %err, "catalog reload failed; serving last good snapshot");
                Arc::clone(&guard.catalog)
            }
        }
    }
}

fn load(roles_path: &Path, questions_path: &Path) -> Result<Catalog> {
    Ok(Catalog {
        roles: loader::load_job_roles(roles_path)?,
        questions: loader::load_questions(questions_path)?,
    })
}

fn mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

// A poisoned lock only means a reload panicked mid-swap; the snapshot it
// holds is still the last coherent one, so recover it instead of panicking.
fn read_lock(lock: &RwLock<Snapshot>) -> RwLockReadGuard<'_, Snapshot> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock(lock: &RwLock<Snapshot>) -> RwLockWriteGuard<'_, Snapshot> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
