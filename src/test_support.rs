//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ApiError, PostApi};
use crate::core::draft::PostDraft;
use crate::core::notify::{Navigator, Notice, Notifier};
use crate::core::state::Route;

/// In-memory [`PostApi`] that records every call.
pub struct FakeApi {
    image: Result<String, ApiError>,
    post_error: Option<ApiError>,
    image_prompts: Mutex<Vec<String>>,
    posted: Mutex<Vec<PostDraft>>,
}

impl FakeApi {
    pub fn returning_photo(payload: &str) -> Self {
        Self {
            image: Ok(payload.to_string()),
            post_error: None,
            image_prompts: Mutex::new(Vec::new()),
            posted: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_image(error: ApiError) -> Self {
        Self {
            image: Err(error),
            ..Self::returning_photo("")
        }
    }

    pub fn with_post_error(mut self, error: ApiError) -> Self {
        self.post_error = Some(error);
        self
    }

    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().unwrap().clone()
    }

    pub fn posted(&self) -> Vec<PostDraft> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostApi for FakeApi {
    async fn generate_image(&self, prompt: &str) -> Result<String, ApiError> {
        self.image_prompts.lock().unwrap().push(prompt.to_string());
        self.image.clone()
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError> {
        self.posted.lock().unwrap().push(draft.clone());
        match &self.post_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
