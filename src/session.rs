// ABOUTME: In-process registry of per-session user data
// ABOUTME: Each session owns an independent record; no cross-session sharing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Session Registry
//!
//! Maps session ids to their [`UserData`] records. Each record is owned
//! exclusively by its session: reads hand out snapshots and writes go
//! through a closure over the exclusive map entry, so no record is ever
//! mutated concurrently.

use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

use crate::tracking::UserData;

/// Registry of active sessions
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: DashMap<Uuid, UserData>,
}

impl SessionManager {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session anchored to `today` and return its id
    pub fn create_session(&self, today: NaiveDate) -> Uuid {
        let session_id = Uuid::new_v4();
        self.sessions.insert(session_id, UserData::new(today));
        tracing::debug!(%session_id, "session created");
        session_id
    }

    /// Snapshot of a session's data
    #[must_use]
    pub fn get(&self, session_id: Uuid) -> Option<UserData> {
        self.sessions.get(&session_id).map(|entry| entry.clone())
    }

    /// Run `f` against a session's record under exclusive access
    ///
    /// Returns `None` when the session does not exist.
    pub fn update<T>(&self, session_id: Uuid, f: impl FnOnce(&mut UserData) -> T) -> Option<T> {
        self.sessions.get_mut(&session_id).map(|mut entry| f(&mut entry))
    }

    /// Drop a session's record, returning whether it existed
    pub fn remove(&self, session_id: Uuid) -> bool {
        self.sessions.remove(&session_id).is_some()
    }

    /// Number of active sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_session_lifecycle() {
        let manager = SessionManager::new();
        assert!(manager.is_empty());

        let id = manager.create_session(day());
        assert_eq!(manager.len(), 1);
        assert!(manager.get(id).is_some());

        let completed = manager.update(id, |data| {
            data.acknowledge_exercise_snack();
            data.reminders.completed_today
        });
        assert_eq!(completed, Some(1));

        let snapshot = manager.get(id).unwrap();
        assert_eq!(snapshot.reminders.completed_today, 1);

        assert!(manager.remove(id));
        assert!(!manager.remove(id));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn test_update_missing_session() {
        let manager = SessionManager::new();
        assert_eq!(manager.update(Uuid::new_v4(), |_| ()), None);
    }
}
