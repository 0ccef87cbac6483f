//! Session data types.
//!
//! JSON shapes follow the front end: state fields are camelCase and actions are
//! `{ "type": "NAVIGATE", "payload": 3 }`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The single mutable session tracked for a running tour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Set by the first unlock gesture. Only an explicit reset clears it.
    pub is_unlocked: bool,
    /// Set once the entry sequence completes.
    pub has_entered: bool,
    /// Index into the six-section tour. Never negative; upper bound is the caller's job.
    pub current_section: usize,
    /// Sections visited at least once. Grows until reset.
    pub unlocked_sections: BTreeSet<usize>,
}

impl SessionState {
    pub fn has_visited_section(&self, index: usize) -> bool {
        self.unlocked_sections.contains(&index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    try_from = "RawAction"
)]
pub enum Action {
    Unlock,
    Enter,
    Navigate(i64),
    UnlockSection(i64),
    /// Any action kind this build does not recognize, whatever its payload.
    /// Reduces to itself.
    Unknown,
}

/// Wire shape accepted for every action before the kind is known.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<serde_json::Value>,
}

impl TryFrom<RawAction> for Action {
    type Error = String;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let index = |kind: &str| {
            raw.payload
                .as_ref()
                .and_then(serde_json::Value::as_i64)
                .ok_or_else(|| format!("{} requires an integer payload", kind))
        };

        match raw.kind.as_str() {
            "UNLOCK" => Ok(Action::Unlock),
            "ENTER" => Ok(Action::Enter),
            "NAVIGATE" => index("NAVIGATE").map(Action::Navigate),
            "UNLOCK_SECTION" => index("UNLOCK_SECTION").map(Action::UnlockSection),
            _ => Ok(Action::Unknown),
        }
    }
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Unlock => "UNLOCK",
            Action::Enter => "ENTER",
            Action::Navigate(_) => "NAVIGATE",
            Action::UnlockSection(_) => "UNLOCK_SECTION",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// Persistence work requested by a transition, executed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write `visited_before = "true"` and stamp `visited_at`.
    MarkVisited,
    /// Write `last_section`.
    RememberSection(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub(crate) fn pure(state: SessionState) -> Self {
        Transition {
            state,
            effects: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_parse_from_front_end_json() {
        let navigate: Action = serde_json::from_str(r#"{"type":"NAVIGATE","payload":3}"#).unwrap();
        assert_eq!(navigate, Action::Navigate(3));

        let unlock: Action = serde_json::from_str(r#"{"type":"UNLOCK"}"#).unwrap();
        assert_eq!(unlock, Action::Unlock);

        let section: Action =
            serde_json::from_str(r#"{"type":"UNLOCK_SECTION","payload":-2}"#).unwrap();
        assert_eq!(section, Action::UnlockSection(-2));
    }

    #[test]
    fn unrecognized_action_kind_parses_as_unknown() {
        let action: Action = serde_json::from_str(r#"{"type":"TELEPORT"}"#).unwrap();
        assert_eq!(action, Action::Unknown);
    }

    #[test]
    fn unrecognized_action_kind_ignores_its_payload() {
        let scalar: Action =
            serde_json::from_str(r#"{"type":"TELEPORT","payload":3}"#).unwrap();
        assert_eq!(scalar, Action::Unknown);

        let object: Action =
            serde_json::from_str(r#"{"type":"TELEPORT","payload":{"a":1}}"#).unwrap();
        assert_eq!(object, Action::Unknown);
    }

    #[test]
    fn known_index_actions_require_integer_payload() {
        assert!(serde_json::from_str::<Action>(r#"{"type":"NAVIGATE"}"#).is_err());
        assert!(serde_json::from_str::<Action>(r#"{"type":"NAVIGATE","payload":"2"}"#).is_err());
        assert!(
            serde_json::from_str::<Action>(r#"{"type":"UNLOCK_SECTION","payload":1.5}"#).is_err()
        );
    }

    #[test]
    fn actions_serialize_to_front_end_json() {
        assert_eq!(
            serde_json::to_value(Action::Navigate(4)).unwrap(),
            serde_json::json!({ "type": "NAVIGATE", "payload": 4 })
        );
        assert_eq!(
            serde_json::to_value(Action::Enter).unwrap(),
            serde_json::json!({ "type": "ENTER" })
        );
    }

    #[test]
    fn state_serializes_with_camel_case_fields() {
        let state = SessionState {
            is_unlocked: true,
            has_entered: true,
            current_section: 2,
            unlocked_sections: [0, 2].into_iter().collect(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isUnlocked": true,
                "hasEntered": true,
                "currentSection": 2,
                "unlockedSections": [0, 2],
            })
        );
    }
}
