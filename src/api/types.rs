//! Wire types for the two endpoints the form talks to.

use serde::{Deserialize, Serialize};

use crate::core::draft::PostDraft;

/// Body of `POST /api/v1/dalle`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateImageRequest<'a> {
    pub prompt: &'a str,
}

/// Reply of `POST /api/v1/dalle`. `photo` is bare base64, no media prefix.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateImageResponse {
    pub photo: String,
}

/// Body of `POST /api/v1/post`. The photo is sent as the full data URI.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreatePostRequest<'a> {
    pub name: &'a str,
    pub prompt: &'a str,
    pub photo: &'a str,
}

impl<'a> CreatePostRequest<'a> {
    pub fn from_draft(draft: &'a PostDraft) -> Self {
        Self {
            name: &draft.name,
            prompt: &draft.prompt,
            photo: draft.photo.as_deref().unwrap_or_default(),
        }
    }
}
