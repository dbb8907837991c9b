//! # Actions
//!
//! Everything that can happen on the form becomes an `Action`.
//! User presses Ctrl+G? That's `Action::Generate`.
//! The image endpoint answers? That's `Action::ImageGenerated { .. }`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns the effects the caller must perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Effect>
//! ```
//!
//! Requests are never issued twice: `Generate` while an image request is in
//! flight, or `Share` while a post request is in flight, is dropped.
//!
//! Every request carries a `RequestId` and its result comes back with it.
//! A result whose id is not the form's current one belongs to a request
//! that was superseded or to a form that was discarded, and is dropped.

use log::{debug, info, warn};

use crate::core::draft::{Field, PostDraft};
use crate::core::notify::{MSG_MISSING_DETAILS, MSG_MISSING_PROMPT, MSG_SUCCESS, Notice};
use crate::core::photo;
use crate::core::state::{App, FormState, RequestId, Route, SharedPost};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    EditField { field: Field, value: String },
    /// Replace the prompt with a randomizer suggestion.
    SurpriseMe(String),
    Generate,
    /// Base64 JPEG payload, or the error text to show.
    ImageGenerated {
        request: RequestId,
        result: Result<String, String>,
    },
    Share,
    PostShared {
        request: RequestId,
        result: Result<SharedPost, String>,
    },
    Navigate(Route),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notice),
    RequestImage { request: RequestId, prompt: String },
    RequestPost { request: RequestId, draft: PostDraft },
    Navigate(Route),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::EditField { field, value } => {
            app.form.draft = app.form.draft.with_field(field, value);
            Vec::new()
        }
        Action::SurpriseMe(prompt) => {
            app.form.draft = app.form.draft.with_field(Field::Prompt, prompt);
            Vec::new()
        }
        Action::Generate => {
            if app.form.generating {
                debug!("Generate ignored: image request already in flight");
                return Vec::new();
            }
            if !app.form.draft.has_prompt() {
                return vec![Effect::Notify(Notice::error(MSG_MISSING_PROMPT))];
            }
            let request = app.next_request();
            app.form.generating = true;
            app.form.image_request = request;
            app.status_message = String::from("Generating...");
            vec![Effect::RequestImage {
                request,
                prompt: app.form.draft.prompt.clone(),
            }]
        }
        Action::ImageGenerated { request, result } => {
            if !app.form.generating || request != app.form.image_request {
                warn!("Dropping stale image result (request {request})");
                return Vec::new();
            }
            app.form.generating = false;
            match result {
                Ok(payload) => {
                    info!("Image received ({} base64 chars)", payload.len());
                    app.form.draft = app
                        .form
                        .draft
                        .with_field(Field::Photo, photo::to_data_uri(&payload));
                    app.status_message = String::from("Image ready. Share it with Ctrl+P");
                    Vec::new()
                }
                Err(message) => {
                    app.status_message = String::from("Image generation failed");
                    vec![Effect::Notify(Notice::error(message))]
                }
            }
        }
        Action::Share => {
            if app.form.submitting {
                debug!("Share ignored: post request already in flight");
                return Vec::new();
            }
            if !app.form.draft.is_shareable() {
                return vec![Effect::Notify(Notice::error(MSG_MISSING_DETAILS))];
            }
            let request = app.next_request();
            app.form.submitting = true;
            app.form.post_request = request;
            app.status_message = String::from("Sharing...");
            vec![Effect::RequestPost {
                request,
                draft: app.form.draft.clone(),
            }]
        }
        Action::PostShared { request, result } => {
            let waiting = app.form.submitting && request == app.form.post_request;
            if waiting {
                app.form.submitting = false;
            }
            match result {
                Ok(post) => {
                    app.shared_posts.push(post);
                    if !waiting {
                        warn!("Post acknowledged after the form was discarded");
                        return Vec::new();
                    }
                    vec![
                        Effect::Notify(Notice::info(MSG_SUCCESS)),
                        Effect::Navigate(Route::Home),
                    ]
                }
                Err(message) if waiting => {
                    app.status_message = String::from("Sharing failed");
                    vec![Effect::Notify(Notice::error(message))]
                }
                Err(message) => {
                    warn!("Dropping post failure for a discarded form: {message}");
                    Vec::new()
                }
            }
        }
        Action::Navigate(route) => {
            if app.route != route {
                info!("Navigating to {}", route.path());
                app.route = route;
                // Leaving or re-entering the form discards the draft.
                app.form = FormState::new(&app.default_name);
                app.status_message = match route {
                    Route::Home => format!("{} post(s) shared", app.shared_posts.len()),
                    Route::CreatePost => String::from("Describe an image and press Ctrl+G"),
                };
            }
            Vec::new()
        }
        Action::Quit => vec![Effect::Quit],
    }
}
