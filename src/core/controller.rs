//! # Controller
//!
//! Headless driver for the Create Post form. It feeds actions through
//! `update()` and performs the resulting effects inline: requests are awaited
//! and their results fed back as actions, notices go to the injected
//! [`Notifier`], route changes to the injected [`Navigator`].
//!
//! ```text
//! dispatch(Generate)
//!   └─ update → RequestImage ─ await api.generate_image ─┐
//!   ┌─────────────────────────────────────────────────────┘
//!   └─ update(ImageGenerated) → [Notify?]
//! ```
//!
//! The TUI runs the same reducer but spawns requests as background tasks so
//! the screen stays live while they are in flight.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::Local;
use log::{debug, info, warn};
use rand::Rng;

use crate::api::PostApi;
use crate::core::action::{Action, Effect, update};
use crate::core::draft::Field;
use crate::core::notify::{Navigator, Notifier};
use crate::core::state::{App, SharedPost};
use crate::core::surprise;

pub struct Controller {
    app: App,
    api: Arc<dyn PostApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    quit: bool,
}

impl Controller {
    pub fn new(
        app: App,
        api: Arc<dyn PostApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            app,
            api,
            notifier,
            navigator,
            quit: false,
        }
    }

    pub fn state(&self) -> &App {
        &self.app
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub async fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(Action::EditField {
            field,
            value: value.into(),
        })
        .await;
    }

    pub async fn surprise_me<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let prompt = surprise::random_prompt(&self.app.form.draft.prompt, rng);
        self.dispatch(Action::SurpriseMe(prompt)).await;
    }

    pub async fn generate(&mut self) {
        self.dispatch(Action::Generate).await;
    }

    pub async fn share(&mut self) {
        self.dispatch(Action::Share).await;
    }

    /// Runs `action` and every action its effects produce until the queue drains.
    pub async fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            debug!("Controller dispatch: {:?}", action);
            for effect in update(&mut self.app, action) {
                if let Some(next) = self.perform(effect).await {
                    queue.push_back(next);
                }
            }
        }
    }

    async fn perform(&mut self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::Notify(notice) => {
                self.notifier.notify(&notice);
                None
            }
            Effect::RequestImage { request, prompt } => {
                info!("Image request {} started", request);
                let result = self.api.generate_image(&prompt).await.map_err(|e| {
                    warn!("Image request {} failed: {}", request, e);
                    e.to_string()
                });
                Some(Action::ImageGenerated { request, result })
            }
            Effect::RequestPost { request, draft } => {
                info!("Post request {} started", request);
                let result = self
                    .api
                    .create_post(&draft)
                    .await
                    .map(|()| SharedPost::from_draft(&draft, Local::now()))
                    .map_err(|e| {
                        warn!("Post request {} failed: {}", request, e);
                        e.to_string()
                    });
                Some(Action::PostShared { request, result })
            }
            Effect::Navigate(route) => {
                self.navigator.navigate(route);
                Some(Action::Navigate(route))
            }
            Effect::Quit => {
                self.quit = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::{Level, MSG_MISSING_DETAILS, MSG_MISSING_PROMPT, MSG_SUCCESS};
    use crate::api::ApiError;
    use crate::core::state::Route;
    use crate::test_support::{FakeApi, RecordingNavigator, RecordingNotifier};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Harness {
        controller: Controller,
        api: Arc<FakeApi>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
    }

    fn harness(api: FakeApi) -> Harness {
        let api = Arc::new(api);
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let controller = Controller::new(
            App::new(""),
            api.clone(),
            notifier.clone(),
            navigator.clone(),
        );
        Harness {
            controller,
            api,
            notifier,
            navigator,
        }
    }

    #[tokio::test]
    async fn test_empty_prompt_is_rejected_without_request() {
        let mut h = harness(FakeApi::returning_photo("YWJj"));
        h.controller.generate().await;

        assert!(h.api.image_prompts().is_empty());
        assert_eq!(h.notifier.messages(), vec![MSG_MISSING_PROMPT.to_string()]);
        assert!(!h.controller.state().form.generating);
    }

    #[tokio::test]
    async fn test_generate_stores_data_uri() {
        let mut h = harness(FakeApi::returning_photo("YWJj"));
        h.controller.edit(Field::Prompt, "a red fox").await;
        h.controller.generate().await;

        assert_eq!(h.api.image_prompts(), vec!["a red fox".to_string()]);
        let form = &h.controller.state().form;
        assert_eq!(form.draft.photo.as_deref(), Some("data:image/jpeg;base64,YWJj"));
        assert!(!form.generating);
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_photo_unchanged() {
        let mut h = harness(FakeApi::failing_image(ApiError::Network(
            "connection refused".to_string(),
        )));
        h.controller.edit(Field::Prompt, "a red fox").await;
        h.controller.generate().await;

        let form = &h.controller.state().form;
        assert!(!form.generating);
        assert!(form.draft.photo.is_none());
        let notices = h.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, Level::Error);
        assert_eq!(notices[0].message, "network error: connection refused");
    }

    #[tokio::test]
    async fn test_share_without_photo_is_rejected_without_request() {
        let mut h = harness(FakeApi::returning_photo("YWJj"));
        h.controller.edit(Field::Prompt, "fox").await;
        h.controller.share().await;

        assert!(h.api.posted().is_empty());
        assert_eq!(h.notifier.messages(), vec![MSG_MISSING_DETAILS.to_string()]);
    }

    #[tokio::test]
    async fn test_share_success_posts_once_and_navigates_home_once() {
        let mut h = harness(FakeApi::returning_photo("YWJj"));
        h.controller.edit(Field::Name, "Jane").await;
        h.controller.edit(Field::Prompt, "fox").await;
        h.controller.generate().await;
        h.controller.share().await;

        let posted = h.api.posted();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].name, "Jane");
        assert_eq!(posted[0].prompt, "fox");
        assert_eq!(posted[0].photo.as_deref(), Some("data:image/jpeg;base64,YWJj"));

        assert_eq!(h.notifier.messages(), vec![MSG_SUCCESS.to_string()]);
        assert_eq!(h.navigator.routes(), vec![Route::Home]);

        let app = h.controller.state();
        assert_eq!(app.route, Route::Home);
        assert!(!app.form.submitting);
        assert_eq!(app.shared_posts.len(), 1);
    }

    #[tokio::test]
    async fn test_share_failure_stays_on_form() {
        let mut h = harness(FakeApi::returning_photo("YWJj").with_post_error(ApiError::Api {
            status: 503,
            message: "down".to_string(),
        }));
        h.controller.edit(Field::Prompt, "fox").await;
        h.controller.generate().await;
        h.controller.share().await;

        assert_eq!(h.api.posted().len(), 1);
        assert_eq!(h.notifier.messages(), vec!["API error (HTTP 503): down".to_string()]);
        assert!(h.navigator.routes().is_empty());
        let app = h.controller.state();
        assert_eq!(app.route, Route::CreatePost);
        assert!(!app.form.submitting);
        assert!(app.form.draft.has_photo());
    }

    #[tokio::test]
    async fn test_surprise_me_changes_prompt() {
        let mut h = harness(FakeApi::returning_photo("YWJj"));
        let mut rng = StdRng::seed_from_u64(1);
        h.controller.surprise_me(&mut rng).await;
        let first = h.controller.state().form.draft.prompt.clone();
        assert!(!first.is_empty());

        h.controller.surprise_me(&mut rng).await;
        assert_ne!(h.controller.state().form.draft.prompt, first);
    }

    #[tokio::test]
    async fn test_quit_sets_flag() {
        let mut h = harness(FakeApi::returning_photo("YWJj"));
        assert!(!h.controller.should_quit());
        h.controller.dispatch(Action::Quit).await;
        assert!(h.controller.should_quit());
    }
}
