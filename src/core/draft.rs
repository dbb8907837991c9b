//! # Post Draft
//!
//! The in-progress post before it is shared. A draft is a plain value:
//! edits produce a new draft instead of mutating fields in place, so the
//! reducer can be tested with `assert_eq!` and nothing else.
//!
//! ```text
//! PostDraft
//! ├── name: String            // author shown with the post
//! ├── prompt: String          // text sent to the image endpoint
//! └── photo: Option<String>   // data URI, set once generation succeeds
//! ```

use serde::{Deserialize, Serialize};

/// Which field of the draft an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Prompt,
    Photo,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Prompt => "Prompt",
            Field::Photo => "Photo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub name: String,
    pub prompt: String,
    pub photo: Option<String>,
}

impl PostDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns a copy with only `field` replaced.
    ///
    /// An empty value for `Field::Photo` clears the photo.
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Prompt => next.prompt = value,
            Field::Photo => next.photo = (!value.is_empty()).then_some(value),
        }
        next
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt.is_empty()
    }

    pub fn has_photo(&self) -> bool {
        self.photo.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Both the prompt and the photo are present, so the draft may be shared.
    pub fn is_shareable(&self) -> bool {
        self.has_prompt() && self.has_photo()
    }
}
