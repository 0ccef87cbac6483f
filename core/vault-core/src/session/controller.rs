//! Session controller: owns one session and its persistence side channel.
//!
//! Storage is best-effort. Every read or write failure is logged at warn and
//! swallowed, so the in-memory state keeps working for the whole process even
//! when the store is disabled or full.

use chrono::{SecondsFormat, Utc};

use crate::sections;
use crate::storage::{KeyValueStore, LAST_SECTION_KEY, VISITED_AT_KEY, VISITED_BEFORE_KEY};

use super::reducer::reduce;
use super::types::{Action, Effect, SessionState};

pub struct SessionController<S: KeyValueStore> {
    state: SessionState,
    store: S,
}

impl<S: KeyValueStore> SessionController<S> {
    /// Creates a controller whose initial state is hydrated from `store`.
    pub fn new(store: S) -> Self {
        let state = hydrate(&store);
        SessionController { state, store }
    }

    /// Creates a controller with an explicit initial state, skipping hydration.
    pub fn with_initial_state(store: S, state: SessionState) -> Self {
        SessionController { state, store }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies `action`, commits the new state, then runs its effects.
    pub fn dispatch(&mut self, action: Action) -> &SessionState {
        let transition = reduce(&self.state, &action);
        self.state = transition.state;

        tracing::debug!(
            action = action.kind(),
            section = self.state.current_section,
            effects = transition.effects.len(),
            "Session action applied"
        );
        if self.state.has_entered && !self.state.is_unlocked {
            tracing::debug!(action = action.kind(), "Session entered without unlock");
        }

        for effect in transition.effects {
            self.perform(effect);
        }

        &self.state
    }

    /// Moves to the next section, if there is one.
    pub fn next(&mut self) -> &SessionState {
        match sections::next_action(self.state.current_section) {
            Some(action) => self.dispatch(action),
            None => &self.state,
        }
    }

    /// Moves to the previous section, if there is one.
    pub fn previous(&mut self) -> &SessionState {
        match sections::previous_action(self.state.current_section) {
            Some(action) => self.dispatch(action),
            None => &self.state,
        }
    }

    pub fn has_visited_before(&self) -> bool {
        has_visited_before(&self.store)
    }

    /// Forgets everything: default state in memory, persisted flags removed.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
        for key in [VISITED_BEFORE_KEY, LAST_SECTION_KEY, VISITED_AT_KEY] {
            if let Err(err) = self.store.remove(key) {
                tracing::warn!(error = %err, key, "Failed to clear persisted session flag");
            }
        }
        tracing::debug!("Session reset");
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::MarkVisited => {
                self.write(VISITED_BEFORE_KEY, "true");
                let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                self.write(VISITED_AT_KEY, &now);
            }
            Effect::RememberSection(section) => {
                self.write(LAST_SECTION_KEY, &section.to_string());
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(error = %err, key, "Failed to persist session flag");
        }
    }
}

/// True when a previous visit completed the entry sequence.
pub fn has_visited_before<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    match store.get(VISITED_BEFORE_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read visited flag");
            false
        }
    }
}

/// Builds the initial session from persisted flags.
///
/// A returning visitor resumes entered at their last section; anyone else
/// starts from the default state.
pub fn hydrate<S: KeyValueStore + ?Sized>(store: &S) -> SessionState {
    if !has_visited_before(store) {
        return SessionState::default();
    }

    let last_section = match store.get(LAST_SECTION_KEY) {
        Ok(value) => value.as_deref().map(parse_section).unwrap_or(0),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read last section");
            0
        }
    };

    tracing::debug!(section = last_section, "Hydrated returning visitor");

    SessionState {
        is_unlocked: true,
        has_entered: true,
        current_section: last_section,
        unlocked_sections: [last_section].into_iter().collect(),
    }
}

/// Parses the leading integer of `raw` (`"3abc"` → 3). Garbage and negatives give 0.
fn parse_section(raw: &str) -> usize {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use crate::error::StorageError;
    use crate::storage::{DisabledStore, MemoryStore};

    /// Reads succeed, writes fail.
    #[derive(Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded { used: 1, limit: 0 })
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read only".to_string()))
        }
    }

    #[test]
    fn parse_section_follows_leading_integer_rules() {
        assert_eq!(parse_section("3"), 3);
        assert_eq!(parse_section("  4"), 4);
        assert_eq!(parse_section("5abc"), 5);
        assert_eq!(parse_section("+2"), 2);
        assert_eq!(parse_section(""), 0);
        assert_eq!(parse_section("abc"), 0);
        assert_eq!(parse_section("-2"), 0);
        assert_eq!(parse_section("99999999999999999999999"), 0);
    }

    #[test]
    fn hydrate_returning_visitor() {
        let store = MemoryStore::with_entries([
            (VISITED_BEFORE_KEY, "true"),
            (LAST_SECTION_KEY, "3"),
        ]);
        let controller = SessionController::new(store);
        assert_eq!(
            controller.state(),
            &SessionState {
                is_unlocked: true,
                has_entered: true,
                current_section: 3,
                unlocked_sections: [3].into_iter().collect(),
            }
        );
    }

    #[test]
    fn hydrate_without_flags_is_default() {
        let controller = SessionController::new(MemoryStore::new());
        assert_eq!(controller.state(), &SessionState::default());
    }

    #[test]
    fn hydrate_ignores_last_section_without_visited_flag() {
        let store = MemoryStore::with_entries([(LAST_SECTION_KEY, "4")]);
        assert_eq!(hydrate(&store), SessionState::default());
    }

    #[test]
    fn hydrate_visited_with_missing_section_starts_at_intro() {
        let store = MemoryStore::with_entries([(VISITED_BEFORE_KEY, "true")]);
        let state = hydrate(&store);
        assert!(state.has_entered);
        assert_eq!(state.current_section, 0);
        assert_eq!(state.unlocked_sections, BTreeSet::from([0]));
    }

    #[test]
    fn explicit_initial_state_bypasses_hydration() {
        let store = MemoryStore::with_entries([
            (VISITED_BEFORE_KEY, "true"),
            (LAST_SECTION_KEY, "3"),
        ]);
        let custom = SessionState {
            current_section: 1,
            ..Default::default()
        };
        let controller = SessionController::with_initial_state(store, custom.clone());
        assert_eq!(controller.state(), &custom);
    }

    #[test]
    fn enter_and_navigate_write_through() {
        let mut controller = SessionController::new(MemoryStore::new());
        controller.dispatch(Action::Unlock);
        assert!(controller.store().is_empty());

        controller.dispatch(Action::Enter);
        let store = controller.store();
        assert_eq!(
            store.get(VISITED_BEFORE_KEY).unwrap().as_deref(),
            Some("true")
        );
        let stamp = store.get(VISITED_AT_KEY).unwrap().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());

        controller.dispatch(Action::Navigate(4));
        assert_eq!(
            controller.store().get(LAST_SECTION_KEY).unwrap().as_deref(),
            Some("4")
        );
    }

    #[test]
    fn next_and_previous_stop_at_edges() {
        let mut controller = SessionController::new(MemoryStore::new());
        controller.previous();
        assert_eq!(controller.state().current_section, 0);
        assert!(controller.store().is_empty());

        for _ in 0..10 {
            controller.next();
        }
        assert_eq!(controller.state().current_section, 5);
        assert_eq!(
            controller.state().unlocked_sections,
            (1..=5).collect::<BTreeSet<usize>>()
        );

        controller.previous();
        assert_eq!(controller.state().current_section, 4);
    }

    #[test]
    fn disabled_storage_never_breaks_the_session() {
        let mut controller = SessionController::new(DisabledStore);
        assert!(!controller.has_visited_before());
        assert_eq!(controller.state(), &SessionState::default());

        controller.dispatch(Action::Unlock);
        controller.dispatch(Action::Enter);
        controller.dispatch(Action::Navigate(2));
        controller.reset();
        controller.dispatch(Action::Enter);

        assert!(controller.state().has_entered);
        assert!(!controller.state().is_unlocked);
    }

    #[test]
    fn failed_writes_keep_in_memory_state() {
        let mut controller = SessionController::new(ReadOnlyStore::default());
        controller.dispatch(Action::Enter);
        controller.dispatch(Action::Navigate(3));

        assert!(controller.state().has_entered);
        assert_eq!(controller.state().current_section, 3);
        assert!(!controller.has_visited_before());
    }

    #[test]
    fn reset_clears_state_and_flags() {
        let mut controller = SessionController::new(MemoryStore::new());
        controller.dispatch(Action::Unlock);
        controller.dispatch(Action::Enter);
        controller.dispatch(Action::Navigate(2));
        assert!(controller.has_visited_before());

        controller.reset();
        assert_eq!(controller.state(), &SessionState::default());
        assert!(controller.store().is_empty());
        assert!(!controller.has_visited_before());
    }
}
