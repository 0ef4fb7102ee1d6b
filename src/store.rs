//! Small persistence helpers on top of an injected key/value store.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::StatementResult;

pub const DEV_LOG_KEY: &str = "devLogs";
pub const PREVIOUS_BALANCE_KEY: &str = "previousBalance";
pub const MAX_DEV_LOG_ENTRIES: usize = 100;

/// String key/value storage supplied by the host (browser storage, a file...).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// Rolling diagnostic log kept under [`DEV_LOG_KEY`].
pub struct DevLog<'a, S: KeyValueStore> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore> DevLog<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        DevLog { store }
    }

    pub fn log(&mut self, message: &str) -> StatementResult<()> {
        self.log_at(Utc::now(), message)
    }

    /// Appends an entry, dropping the oldest beyond [`MAX_DEV_LOG_ENTRIES`].
    pub fn log_at(&mut self, timestamp: DateTime<Utc>, message: &str) -> StatementResult<()> {
        let mut entries = self.entries();
        entries.push(LogEntry {
            timestamp,
            message: message.to_string(),
        });

        let overflow = entries.len().saturating_sub(MAX_DEV_LOG_ENTRIES);
        entries.drain(..overflow);

        self.store.set(DEV_LOG_KEY, serde_json::to_string(&entries)?);
        Ok(())
    }

    /// Stored entries, oldest first. Unreadable data reads as empty.
    pub fn entries(&self) -> Vec<LogEntry> {
        let Some(raw) = self.store.get(DEV_LOG_KEY) else {
            return Vec::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding unreadable dev log");
            Vec::new()
        })
    }

    pub fn clear(&mut self) {
        self.store.remove(DEV_LOG_KEY);
    }
}

pub fn remember_balance<S: KeyValueStore>(store: &mut S, balance: Decimal) {
    store.set(PREVIOUS_BALANCE_KEY, balance.to_string());
}

pub fn saved_balance<S: KeyValueStore>(store: &S) -> Option<Decimal> {
    let raw = store.get(PREVIOUS_BALANCE_KEY)?;
    Decimal::from_str(raw.trim())
        .inspect_err(|e| tracing::warn!(error = %e, "ignoring unreadable saved balance"))
        .ok()
}
