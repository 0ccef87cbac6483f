//! The fixed six-section tour and prev/next sequencing.
//!
//! Consumers clamp indices into `[0, TOTAL_SECTIONS - 1]` before dispatching;
//! the reducer itself only enforces the lower bound.

use serde::Serialize;

use crate::session::Action;

pub const TOTAL_SECTIONS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Intro,
    Services,
    Process,
    Work,
    Tools,
    Connect,
}

impl Section {
    pub const ALL: [Section; TOTAL_SECTIONS] = [
        Section::Intro,
        Section::Services,
        Section::Process,
        Section::Work,
        Section::Tools,
        Section::Connect,
    ];

    /// Section shown for `index`, clamping out-of-range values to the last section.
    pub fn from_index(index: usize) -> Section {
        Section::ALL[clamp_index(index)]
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> &'static str {
        match self {
            Section::Intro => "intro",
            Section::Services => "services",
            Section::Process => "process",
            Section::Work => "work",
            Section::Tools => "tools",
            Section::Connect => "connect",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Intro => "Prisi Ops",
            Section::Services => "Services",
            Section::Process => "Process",
            Section::Work => "Work",
            Section::Tools => "Tech Stack",
            Section::Connect => "Connect",
        }
    }

    /// Short label used by the navigation dots.
    pub fn label(self) -> &'static str {
        match self {
            Section::Intro => "Intro",
            Section::Services => "Services",
            Section::Process => "Process",
            Section::Work => "Work",
            Section::Tools => "Tools",
            Section::Connect => "Connect",
        }
    }
}

pub fn clamp_index(index: usize) -> usize {
    index.min(TOTAL_SECTIONS - 1)
}

pub fn can_go_previous(current: usize) -> bool {
    clamp_index(current) > 0
}

pub fn can_go_next(current: usize) -> bool {
    clamp_index(current) < TOTAL_SECTIONS - 1
}

pub fn previous_action(current: usize) -> Option<Action> {
    let current = clamp_index(current);
    if current == 0 {
        return None;
    }
    Some(Action::Navigate((current - 1) as i64))
}

pub fn next_action(current: usize) -> Option<Action> {
    let current = clamp_index(current);
    if current >= TOTAL_SECTIONS - 1 {
        return None;
    }
    Some(Action::Navigate((current + 1) as i64))
}

/// Action for a direct jump (navigation dot), clamped into range.
pub fn go_to_action(index: i64) -> Action {
    let upper = (TOTAL_SECTIONS - 1) as i64;
    Action::Navigate(index.clamp(0, upper))
}

/// Position indicator, e.g. `"03 / 06"`.
pub fn progress_label(current: usize) -> String {
    format!("{:02} / {:02}", clamp_index(current) + 1, TOTAL_SECTIONS)
}
