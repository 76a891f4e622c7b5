// core/src/memory/shared.rs
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// A table set shared between clones of an in-memory adapter.
///
/// IMPORTANT: guards are blocking and MUST NOT be held across `.await` points. The adapters
/// take a guard, do all their work synchronously, and drop it before returning.
#[derive(Debug)]
pub struct Shared<T>(Arc<RwLock<T>>);

impl<T> Shared<T> {
  pub fn new(data: T) -> Self {
    Shared(Arc::new(RwLock::new(data)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }
}

impl<T> Clone for Shared<T> {
  fn clone(&self) -> Self {
    Shared(Arc::clone(&self.0))
  }
}

impl<T: Default> Default for Shared<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

/// Hands out row ids starting at 1, like a serial column.
#[derive(Debug, Default)]
pub struct Sequence(i64);

impl Sequence {
  pub fn next(&mut self) -> i64 {
    self.0 += 1;
    self.0
  }
}
