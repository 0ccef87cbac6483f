//! Pure transition function for the vault session.
//!
//! ```text
//! UNLOCK             → is_unlocked = true
//! ENTER              → has_entered = true, visit 0          [MarkVisited]
//! NAVIGATE(n)        → current = max(0, n), visit current   [RememberSection]
//! UNLOCK_SECTION(n)  → visit max(0, n)
//! unknown            → unchanged
//! ```
//!
//! The reducer does not require UNLOCK before ENTER or NAVIGATE.

use super::types::{Action, Effect, SessionState, Transition};

pub fn reduce(state: &SessionState, action: &Action) -> Transition {
    match *action {
        Action::Unlock => {
            let mut next = state.clone();
            next.is_unlocked = true;
            Transition::pure(next)
        }
        Action::Enter => {
            let mut next = state.clone();
            next.has_entered = true;
            next.unlocked_sections.insert(0);
            Transition {
                state: next,
                effects: vec![Effect::MarkVisited],
            }
        }
        Action::Navigate(index) => {
            let section = clamp_section(index);
            let mut next = state.clone();
            next.current_section = section;
            next.unlocked_sections.insert(section);
            Transition {
                state: next,
                effects: vec![Effect::RememberSection(section)],
            }
        }
        Action::UnlockSection(index) => {
            let mut next = state.clone();
            next.unlocked_sections.insert(clamp_section(index));
            Transition::pure(next)
        }
        Action::Unknown => Transition::pure(state.clone()),
    }
}

fn clamp_section(index: i64) -> usize {
    usize::try_from(index.max(0)).unwrap_or(usize::MAX)
}
