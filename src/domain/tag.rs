// src/domain/tag.rs
use serde::{Deserialize, Serialize};

/// A named label, stored as `{id, name}`.
///
/// Tags are not referenced by [`crate::domain::Note`]; notes carry their tag
/// names as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
