use serde::{Deserialize, Serialize};

/// The two states a draft can be in. Export is only offered in `HasContent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DraftState {
    #[default]
    Empty,
    HasContent,
}

impl DraftState {
    pub fn of(text: &str) -> Self {
        if text.trim().is_empty() {
            DraftState::Empty
        } else {
            DraftState::HasContent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftState::Empty => "EMPTY",
            DraftState::HasContent => "DRAFT",
        }
    }

    pub fn can_export(&self) -> bool {
        *self == DraftState::HasContent
    }
}
