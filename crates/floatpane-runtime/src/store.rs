#![forbid(unsafe_code)]

//! Pluggable key-value store for persisted panel geometry.
//!
//! The engine needs exactly two operations over a single fixed key, so
//! the backend contract is deliberately small. Failures are surfaced as
//! [`StoreError`] so the caller can log them; the engine never retries
//! and never lets a storage failure block an interaction.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum StoreError {
    /// I/O failure in a file- or network-backed store.
    Io(std::io::Error),
    /// Backend refused the operation (quota exceeded, read-only, ...).
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A string key-value store the engine persists geometry into.
///
/// `&mut self` on [`set`](PanelStore::set) is deliberate: the engine is
/// single-threaded, so backends need no interior synchronization.
pub trait PanelStore {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-memory store for testing and ephemeral sessions.
///
/// State is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut data = HashMap::new();
        data.insert(key.into(), value.into());
        Self { data }
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl PanelStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared store handle, for hosts that keep the backend alive outside
/// the controller (session restore, multiple panels over one backend).
impl<S: PanelStore> PanelStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.borrow_mut().set(key, value)
    }
}
