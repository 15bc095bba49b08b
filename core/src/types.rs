//! Domain types for the todo API.
//!
//! Every field is optional: a locally built item has no `id` until the server
//! assigns one, and the server may omit `userId` in its echoes.

use serde::{Deserialize, Serialize};

/// A single todo item as exchanged with the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoItem {
    /// A not-yet-created item: no owner, no id, not completed.
    pub fn draft(title: impl Into<String>) -> Self {
        Self {
            owner_id: None,
            id: None,
            title: Some(title.into()),
            completed: Some(false),
        }
    }

    /// Copy of this item with a different title.
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self.clone()
        }
    }

    /// Copy of this item with `completed` flipped. An absent flag counts as
    /// `false`, so it becomes `true`.
    pub fn toggled(&self) -> Self {
        Self {
            completed: Some(!self.completed.unwrap_or(false)),
            ..self.clone()
        }
    }

    /// The fields sent on create and update.
    pub fn params(&self) -> TodoParams {
        TodoParams {
            title: self.title.clone().unwrap_or_default(),
            completed: self.completed.unwrap_or(false),
        }
    }
}

/// Request body for create and update: the full mutable field set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoParams {
    pub title: String,
    pub completed: bool,
}
