//! # Batch Mode
//!
//! Runs the Create Post form without a terminal UI: fill the draft from CLI
//! flags, generate once, optionally save and share. Notices print to stderr
//! instead of a modal.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::api::PostApi;
use crate::core::config::ResolvedConfig;
use crate::core::controller::Controller;
use crate::core::draft::Field;
use crate::core::notify::{Level, Navigator, Notice, Notifier};
use crate::core::photo;
use crate::core::state::{App, Route};

#[derive(Debug, Clone, Default)]
pub struct BatchRequest {
    /// `None` asks the randomizer for a prompt.
    pub prompt: Option<String>,
    pub save: bool,
    pub share: bool,
}

/// Writes notices to a sink and remembers whether any was an error.
pub struct ConsoleNotifier<W: Write + Send> {
    out: std::sync::Mutex<W>,
    failed: AtomicBool,
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: std::sync::Mutex::new(out),
            failed: AtomicBool::new(false),
        }
    }

    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, notice: &Notice) {
        if notice.level == Level::Error {
            self.failed.store(true, Ordering::SeqCst);
        }
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(out, "[{}] {}", notice.title(), notice.message);
    }
}

struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        info!("Batch mode: navigation to {} requested", route.path());
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: bool,
    pub saved_to: Option<PathBuf>,
    pub shared: bool,
}

pub async fn run_batch<W: Write + Send + 'static>(
    config: &ResolvedConfig,
    api: Arc<dyn PostApi>,
    notifier: Arc<ConsoleNotifier<W>>,
    request: BatchRequest,
) -> BatchOutcome {
    let mut controller = Controller::new(
        App::new(config.default_name.clone()),
        api,
        notifier.clone(),
        Arc::new(LogNavigator),
    );

    match request.prompt {
        Some(prompt) => controller.edit(Field::Prompt, prompt).await,
        None => controller.surprise_me(&mut StdRng::from_entropy()).await,
    }
    info!("Batch prompt: {:?}", controller.state().form.draft.prompt);

    controller.generate().await;

    let draft = controller.state().form.draft.clone();
    let mut saved_to = None;
    if request.save
        && let Some(uri) = draft.photo.as_deref()
    {
        match photo::save_photo(uri, &config.save_dir, &draft.prompt) {
            Ok(path) => {
                notifier.notify(&Notice::info(format!("Saved {}", path.display())));
                saved_to = Some(path);
            }
            Err(e) => notifier.notify(&Notice::error(e.to_string())),
        }
    }

    let mut shared = false;
    if request.share && !notifier.failed() {
        let before = controller.state().shared_posts.len();
        controller.share().await;
        shared = controller.state().shared_posts.len() > before;
    }

    BatchOutcome {
        succeeded: !notifier.failed(),
        saved_to,
        shared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::FakeApi;
    use std::time::Duration;

    fn config(save_dir: PathBuf) -> ResolvedConfig {
        ResolvedConfig {
            base_url: "http://unused".to_string(),
            timeout: Duration::from_secs(1),
            default_name: "Jane".to_string(),
            save_dir,
        }
    }

    #[tokio::test]
    async fn test_batch_generates_and_shares() {
        let api = Arc::new(FakeApi::returning_photo("YWJj"));
        let notifier = Arc::new(ConsoleNotifier::new(Vec::new()));
        let outcome = run_batch(
            &config(PathBuf::from(".")),
            api.clone(),
            notifier.clone(),
            BatchRequest {
                prompt: Some("a red fox".to_string()),
                save: false,
                share: true,
            },
        )
        .await;

        assert!(outcome.succeeded);
        assert!(outcome.shared);
        assert_eq!(api.posted()[0].name, "Jane");
        drop(api);
        let notifier = Arc::try_unwrap(notifier).ok().unwrap();
        assert_eq!(String::from_utf8(notifier.into_inner()).unwrap(), "[Notice] Success\n");
    }

    #[tokio::test]
    async fn test_batch_without_prompt_uses_surprise() {
        let api = Arc::new(FakeApi::returning_photo("YWJj"));
        let notifier = Arc::new(ConsoleNotifier::new(Vec::new()));
        let outcome = run_batch(
            &config(PathBuf::from(".")),
            api.clone(),
            notifier,
            BatchRequest::default(),
        )
        .await;

        assert!(outcome.succeeded);
        assert!(!outcome.shared);
        let prompts = api.image_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(crate::core::surprise::SURPRISE_PROMPTS.contains(&prompts[0].as_str()));
    }

    #[tokio::test]
    async fn test_batch_failed_generation_skips_share() {
        let api = Arc::new(FakeApi::failing_image(ApiError::Network(
            "timed out".to_string(),
        )));
        let notifier = Arc::new(ConsoleNotifier::new(Vec::new()));
        let outcome = run_batch(
            &config(PathBuf::from(".")),
            api.clone(),
            notifier,
            BatchRequest {
                prompt: Some("fox".to_string()),
                save: true,
                share: true,
            },
        )
        .await;

        assert!(!outcome.succeeded);
        assert!(!outcome.shared);
        assert_eq!(outcome.saved_to, None);
        assert!(api.posted().is_empty());
    }

    #[tokio::test]
    async fn test_batch_saves_photo() {
        let dir = std::env::temp_dir().join(format!("promptshare-batch-{}", std::process::id()));
        let api = Arc::new(FakeApi::returning_photo("YWJj"));
        let notifier = Arc::new(ConsoleNotifier::new(Vec::new()));
        let outcome = run_batch(
            &config(dir.clone()),
            api,
            notifier,
            BatchRequest {
                prompt: Some("red fox".to_string()),
                save: true,
                share: false,
            },
        )
        .await;

        let path = outcome.saved_to.unwrap();
        assert_eq!(path, dir.join("red-fox.jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
