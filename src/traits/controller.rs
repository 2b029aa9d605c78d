use serde::{Deserialize, Serialize};

/// Pointer button identifier
///
/// Raw ids follow the usual windowing convention: 1 is the primary button,
/// 2 the secondary. Anything else is carried through as `Other` and ignored
/// by the trackball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum Button {
    Primary,
    Secondary,
    Other(u32),
}

impl Button {
    pub const fn from_id(id: u32) -> Self {
        match id {
            1 => Button::Primary,
            2 => Button::Secondary,
            other => Button::Other(other),
        }
    }

    pub const fn id(self) -> u32 {
        match self {
            Button::Primary => 1,
            Button::Secondary => 2,
            Button::Other(id) => id,
        }
    }
}

impl From<u32> for Button {
    fn from(id: u32) -> Self {
        Button::from_id(id)
    }
}

impl From<Button> for u32 {
    fn from(button: Button) -> Self {
        button.id()
    }
}
