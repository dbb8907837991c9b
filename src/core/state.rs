//! # Application State
//!
//! Core business state for promptshare. Domain data only, no TUI types.
//! Presentation state (focus, open alerts, spinner) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── route: Route                  // which view is showing
//! ├── form: FormState               // the Create Post form
//! │   ├── draft: PostDraft          // name, prompt, photo
//! │   ├── generating: bool          // image request in flight
//! │   ├── submitting: bool          // post request in flight
//! │   └── image_request/post_request // ids of the requests this form sent
//! ├── default_name: String          // pre-filled author name
//! ├── shared_posts: Vec<SharedPost> // posts shared during this run
//! ├── last_request: RequestId       // last id handed out, never reused
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{DateTime, Local};

use crate::core::draft::PostDraft;

/// Views the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Application root, listing what was shared.
    Home,
    #[default]
    CreatePost,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::CreatePost => "/create-post",
        }
    }
}

/// A post the server acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedPost {
    pub name: String,
    pub prompt: String,
    pub shared_at: DateTime<Local>,
}

impl SharedPost {
    pub fn from_draft(draft: &PostDraft, shared_at: DateTime<Local>) -> Self {
        Self {
            name: draft.name.clone(),
            prompt: draft.prompt.clone(),
            shared_at,
        }
    }
}

/// Tags a request so its result can be matched to the form that sent it.
pub type RequestId = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: PostDraft,
    pub generating: bool,
    pub submitting: bool,
    /// Id of the latest image request; 0 before the first one.
    pub image_request: RequestId,
    pub post_request: RequestId,
}

impl FormState {
    pub fn new(default_name: &str) -> Self {
        Self {
            draft: PostDraft::new(default_name),
            generating: false,
            submitting: false,
            image_request: 0,
            post_request: 0,
        }
    }
}

pub struct App {
    pub route: Route,
    pub form: FormState,
    pub default_name: String,
    pub shared_posts: Vec<SharedPost>,
    pub status_message: String,
    /// Spans form resets, so a discarded form's ids never come back.
    pub last_request: RequestId,
}

impl App {
    pub fn new(default_name: impl Into<String>) -> Self {
        let default_name = default_name.into();
        Self {
            route: Route::CreatePost,
            form: FormState::new(&default_name),
            default_name,
            shared_posts: Vec::new(),
            status_message: String::from("Describe an image and press Ctrl+G"),
            last_request: 0,
        }
    }

    /// Hands out a fresh request id.
    pub fn next_request(&mut self) -> RequestId {
        self.last_request += 1;
        self.last_request
    }
}
