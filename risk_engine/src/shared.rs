use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::game_engine::GameEngine;

/// A match shared between sessions. Mutations take the write lock, so an attack is never
/// observed half-resolved; queries share the read lock.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<GameEngine>>,
}

impl SharedEngine {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, GameEngine> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, GameEngine> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut GameEngine) -> T) -> T {
        f(&mut self.write())
    }
}
