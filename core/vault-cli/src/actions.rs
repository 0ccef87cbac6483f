//! Parsing of action arguments for `prisi-vault dispatch`.
//!
//! Accepted forms: `unlock`, `enter`, `navigate=N`, `unlock-section=N`,
//! a section id (`services`, `work`, ...), or raw JSON such as
//! `{"type":"NAVIGATE","payload":3}`.

use vault_core::{sections, Action, Section};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("Unknown action: {0}")]
    Unknown(String),

    #[error("Invalid section index for {action}: {value}")]
    BadIndex { action: String, value: String },

    #[error("Invalid action JSON: {0}")]
    Json(String),
}

pub fn parse_action(raw: &str) -> Result<Action, ActionParseError> {
    let raw = raw.trim();
    if raw.starts_with('{') {
        return serde_json::from_str(raw).map_err(|e| ActionParseError::Json(e.to_string()));
    }

    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (raw, None),
    };
    let name = name.to_ascii_lowercase().replace('_', "-");

    match (name.as_str(), value) {
        ("unlock", None) => Ok(Action::Unlock),
        ("enter", None) => Ok(Action::Enter),
        ("navigate", Some(value)) => Ok(Action::Navigate(parse_index(&name, value)?)),
        ("unlock-section", Some(value)) => {
            Ok(Action::UnlockSection(parse_index(&name, value)?))
        }
        (id, None) => Section::from_id(id)
            .map(|section| sections::go_to_action(section.index() as i64))
            .ok_or_else(|| ActionParseError::Unknown(raw.to_string())),
        _ => Err(ActionParseError::Unknown(raw.to_string())),
    }
}

fn parse_index(action: &str, value: &str) -> Result<i64, ActionParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ActionParseError::BadIndex {
            action: action.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_actions() {
        assert_eq!(parse_action("unlock"), Ok(Action::Unlock));
        assert_eq!(parse_action("ENTER"), Ok(Action::Enter));
        assert_eq!(parse_action("navigate=3"), Ok(Action::Navigate(3)));
        assert_eq!(parse_action("navigate=-1"), Ok(Action::Navigate(-1)));
        assert_eq!(
            parse_action("unlock_section=4"),
            Ok(Action::UnlockSection(4))
        );
    }

    #[test]
    fn section_ids_jump_directly() {
        assert_eq!(parse_action("work"), Ok(Action::Navigate(3)));
        assert_eq!(parse_action("connect"), Ok(Action::Navigate(5)));
    }

    #[test]
    fn json_actions_pass_through_serde() {
        assert_eq!(
            parse_action(r#"{"type":"NAVIGATE","payload":2}"#),
            Ok(Action::Navigate(2))
        );
        assert_eq!(parse_action(r#"{"type":"WARP"}"#), Ok(Action::Unknown));
        assert_eq!(
            parse_action(r#"{"type":"TELEPORT","payload":3}"#),
            Ok(Action::Unknown)
        );
        assert!(matches!(
            parse_action("{broken"),
            Err(ActionParseError::Json(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_action("dance"),
            Err(ActionParseError::Unknown("dance".to_string()))
        );
        assert!(matches!(
            parse_action("navigate=two"),
            Err(ActionParseError::BadIndex { .. })
        ));
        assert!(matches!(
            parse_action("unlock=1"),
            Err(ActionParseError::Unknown(_))
        ));
    }
}
