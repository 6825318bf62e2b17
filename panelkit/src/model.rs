use serde::{Deserialize, Serialize};

// Field order matters: the canonical JSON encoding is {"height":H,"width":W}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePreference {
    pub height: u32,
    pub width: u32,
}
