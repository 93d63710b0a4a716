use std::sync::Arc;

#[cfg(test)]
use tokio::sync::RwLockReadGuard;
use tokio::sync::{RwLock, RwLockWriteGuard};

/// Append-only, process-local record list.
///
/// Clones share the same underlying list. Records are never removed or
/// rewritten; the list lives as long as the last clone.
pub struct MemDb<T> {
    handle: Arc<RwLock<Vec<T>>>,
}
impl<T> MemDb<T> {
    pub fn new() -> Self {
        Self {
            handle: Arc::new(RwLock::new(Vec::new())),
        }
    }

    // borrow mutable list
    async fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.handle.write().await
    }

    /// Appends `value` and returns the position it was stored at.
    pub async fn push(&self, value: T) -> usize {
        let mut records = self.write().await;
        records.push(value);
        records.len() - 1
    }
}

// read side, only inspected by tests
#[cfg(test)]
impl<T: Clone> MemDb<T> {
    // borrow immutable list
    async fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.handle.read().await
    }
    pub(crate) async fn len(&self) -> usize {
        self.read().await.len()
    }
    pub(crate) async fn is_empty(&self) -> bool {
        self.read().await.is_empty()
    }
    /// Ordered copy of every stored record.
    pub(crate) async fn snapshot(&self) -> Vec<T> {
        self.read().await.clone()
    }
}

// derived Clone would require `T: Clone`
impl<T> Clone for MemDb<T> {
    fn clone(&self) -> Self {
        Self {
            handle: Arc::clone(&self.handle),
        }
    }
}

impl<T> Default for MemDb<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Required Debug implementation for `MemDb`
impl<T> std::fmt::Debug for MemDb<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemDb").finish_non_exhaustive()
    }
}
