//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form, and
//! translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Requests
//!
//! `update()` asks for a request by returning an `Effect`. The loop spawns it
//! as a tokio task and goes straight back to drawing; the task sends its
//! result back over an mpsc channel as an `Action`, which the loop feeds
//! through `update()` like any key press. Only the loop touches `App`.
//!
//! ## Redraw Strategy
//!
//! - **Busy** (a request in flight): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::collections::VecDeque;
use std::io::stdout;
use std::path::Path;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use rand::Rng;

use crate::api::{HttpPostApi, PostApi};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::draft::{Field, PostDraft};
use crate::core::notify::Notice;
use crate::core::photo;
use crate::core::state::{App, RequestId, Route, SharedPost};
use crate::core::surprise;
use crate::tui::component::EventHandler;
use crate::tui::components::{AlertEvent, AlertKeys, FieldEvent, TextField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which control receives typing and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Prompt,
    Generate,
    Share,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Prompt,
            Focus::Prompt => Focus::Generate,
            Focus::Generate => Focus::Share,
            Focus::Share => Focus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Name => Focus::Share,
            Focus::Prompt => Focus::Name,
            Focus::Generate => Focus::Prompt,
            Focus::Share => Focus::Generate,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub name_field: TextField,
    pub prompt_field: TextField,
    pub focus: Focus,
    /// Open notices; the front one is on screen
    pub alerts: VecDeque<Notice>,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            name_field: TextField::new(Field::Name.label(), "Ex., john doe"),
            prompt_field: TextField::new(
                Field::Prompt.label(),
                "An Impressionist oil painting of sunflowers in a purple vase...",
            )
            .with_hint(" Ctrl+R: Surprise me "),
            focus: Focus::Name,
            alerts: VecDeque::new(),
            spinner_frame: 0,
        }
    }

    /// Mirror draft values into the text fields.
    pub fn sync(&mut self, app: &App) {
        self.name_field.sync(&app.form.draft.name);
        self.prompt_field.sync(&app.form.draft.prompt);
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the loop should do in response to one terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    SavePhoto,
}

/// Translate a terminal event into commands. Purely presentational changes
/// (focus, cursor, dismissing an alert) are applied to `tui` directly.
pub fn interpret<R: Rng + ?Sized>(
    app: &App,
    tui: &mut TuiState,
    event: &TuiEvent,
    rng: &mut R,
) -> Vec<Command> {
    if *event == TuiEvent::ForceQuit {
        return vec![Command::Dispatch(Action::Quit)];
    }

    // Open alert swallows everything else
    if !tui.alerts.is_empty() {
        if let Some(AlertEvent::Dismiss) = AlertKeys.handle_event(event) {
            tui.alerts.pop_front();
        }
        return Vec::new();
    }

    match app.route {
        Route::Home => match event {
            TuiEvent::InputChar('n') | TuiEvent::Submit => {
                tui.focus = Focus::Name;
                vec![Command::Dispatch(Action::Navigate(Route::CreatePost))]
            }
            TuiEvent::InputChar('q') | TuiEvent::Escape => vec![Command::Dispatch(Action::Quit)],
            _ => Vec::new(),
        },
        Route::CreatePost => interpret_form(app, tui, event, rng),
    }
}

fn interpret_form<R: Rng + ?Sized>(
    app: &App,
    tui: &mut TuiState,
    event: &TuiEvent,
    rng: &mut R,
) -> Vec<Command> {
    let act = |action| vec![Command::Dispatch(action)];
    match event {
        TuiEvent::Generate => act(Action::Generate),
        TuiEvent::Share => act(Action::Share),
        TuiEvent::SurpriseMe => act(Action::SurpriseMe(surprise::random_prompt(
            &app.form.draft.prompt,
            rng,
        ))),
        TuiEvent::SavePhoto => vec![Command::SavePhoto],
        TuiEvent::Escape => act(Action::Navigate(Route::Home)),
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            Vec::new()
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            Vec::new()
        }
        TuiEvent::Submit => match tui.focus {
            Focus::Name => {
                tui.focus = Focus::Prompt;
                Vec::new()
            }
            Focus::Prompt | Focus::Generate => act(Action::Generate),
            Focus::Share => act(Action::Share),
        },
        _ => match tui.focus {
            Focus::Name => edit(&mut tui.name_field, Field::Name, event),
            Focus::Prompt => edit(&mut tui.prompt_field, Field::Prompt, event),
            // Space presses a focused button
            Focus::Generate if *event == TuiEvent::InputChar(' ') => act(Action::Generate),
            Focus::Share if *event == TuiEvent::InputChar(' ') => act(Action::Share),
            Focus::Generate | Focus::Share => Vec::new(),
        },
    }
}

fn edit(field_box: &mut TextField, field: Field, event: &TuiEvent) -> Vec<Command> {
    match field_box.handle_event(event) {
        Some(FieldEvent::Changed(value)) => {
            vec![Command::Dispatch(Action::EditField { field, value })]
        }
        None => Vec::new(),
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn PostApi> = Arc::new(
        HttpPostApi::new(config.base_url.clone(), config.timeout).map_err(std::io::Error::other)?,
    );
    let mut app = App::new(config.default_name.clone());
    let mut tui = TuiState::new();
    let mut rng = rand::thread_rng();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        tui.sync(&app);
        let animating = app.form.generating || app.form.submitting;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &config.base_url))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for command in interpret(&app, &mut tui, &event, &mut rng) {
                match command {
                    Command::Dispatch(action) => {
                        should_quit |= dispatch(&mut app, &mut tui, action, &api, &tx);
                    }
                    Command::SavePhoto => save_current_photo(&app, &mut tui, &config.save_dir),
                }
            }
            // Keep field mirrors current for the next event in this batch
            tui.sync(&app);
        }

        // Handle results from background requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            should_quit |= dispatch(&mut app, &mut tui, action, &api, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Feed `action` through the reducer and carry out the effects.
/// Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    api: &Arc<dyn PostApi>,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let mut quit = false;
    let mut queue = VecDeque::from([action]);
    while let Some(action) = queue.pop_front() {
        debug!("Event loop dispatch: {:?}", action);
        for effect in update(app, action) {
            match effect {
                Effect::Notify(notice) => {
                    info!("Notice ({:?}): {}", notice.level, notice.message);
                    tui.alerts.push_back(notice);
                }
                Effect::RequestImage { request, prompt } => {
                    spawn_image_request(api.clone(), request, prompt, tx.clone());
                }
                Effect::RequestPost { request, draft } => {
                    spawn_post_request(api.clone(), request, draft, tx.clone());
                }
                Effect::Navigate(route) => {
                    tui.focus = Focus::Name;
                    queue.push_back(Action::Navigate(route));
                }
                Effect::Quit => quit = true,
            }
        }
    }
    quit
}

fn save_current_photo(app: &App, tui: &mut TuiState, dir: &Path) {
    let draft = &app.form.draft;
    let notice = match draft.photo.as_deref() {
        None => Notice::error("Generate an image before saving it"),
        Some(uri) => match photo::save_photo(uri, dir, &draft.prompt) {
            Ok(path) => Notice::info(format!("Saved to {}", path.display())),
            Err(e) => {
                warn!("Saving photo failed: {}", e);
                Notice::error(e.to_string())
            }
        },
    };
    tui.alerts.push_back(notice);
}

fn spawn_image_request(
    api: Arc<dyn PostApi>,
    request: RequestId,
    prompt: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning image request {}", request);
    tokio::spawn(async move {
        let result = api.generate_image(&prompt).await.map_err(|e| {
            warn!("Image request {} failed: {}", request, e);
            e.to_string()
        });
        if tx.send(Action::ImageGenerated { request, result }).is_err() {
            warn!("Failed to send image result: receiver dropped");
        }
    });
}

fn spawn_post_request(
    api: Arc<dyn PostApi>,
    request: RequestId,
    draft: PostDraft,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning post request {}", request);
    tokio::spawn(async move {
        let result = api
            .create_post(&draft)
            .await
            .map(|()| SharedPost::from_draft(&draft, chrono::Local::now()))
            .map_err(|e| {
                warn!("Post request {} failed: {}", request, e);
                e.to_string()
            });
        if tx.send(Action::PostShared { request, result }).is_err() {
            warn!("Failed to send post result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeApi;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        let api: Arc<dyn PostApi> = Arc::new(FakeApi::returning_photo("YWJj"));
        let (tx, _rx) = mpsc::channel();
        let mut rng = StdRng::seed_from_u64(0);
        for c in text.chars() {
            for command in interpret(app, tui, &TuiEvent::InputChar(c), &mut rng) {
                if let Command::Dispatch(action) = command {
                    dispatch(app, tui, action, &api, &tx);
                }
            }
            tui.sync(app);
        }
    }

    #[test]
    fn test_focus_cycles() {
        let mut focus = Focus::Name;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Name);
        assert_eq!(Focus::Name.prev(), Focus::Share);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut app = App::new("");
        let mut tui = TuiState::new();
        type_text(&mut app, &mut tui, "Jane");
        assert_eq!(app.form.draft.name, "Jane");

        tui.focus = Focus::Prompt;
        type_text(&mut app, &mut tui, "fox");
        assert_eq!(app.form.draft.prompt, "fox");
        assert_eq!(app.form.draft.name, "Jane");
    }

    #[test]
    fn test_enter_on_name_moves_to_prompt() {
        let app = App::new("");
        let mut tui = TuiState::new();
        let mut rng = StdRng::seed_from_u64(0);
        let commands = interpret(&app, &mut tui, &TuiEvent::Submit, &mut rng);
        assert!(commands.is_empty());
        assert_eq!(tui.focus, Focus::Prompt);
    }

    #[test]
    fn test_shortcuts_map_to_actions() {
        let app = App::new("");
        let mut tui = TuiState::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            interpret(&app, &mut tui, &TuiEvent::Generate, &mut rng),
            vec![Command::Dispatch(Action::Generate)]
        );
        assert_eq!(
            interpret(&app, &mut tui, &TuiEvent::Share, &mut rng),
            vec![Command::Dispatch(Action::Share)]
        );
        assert_eq!(
            interpret(&app, &mut tui, &TuiEvent::SavePhoto, &mut rng),
            vec![Command::SavePhoto]
        );
        assert_eq!(
            interpret(&app, &mut tui, &TuiEvent::ForceQuit, &mut rng),
            vec![Command::Dispatch(Action::Quit)]
        );
    }

    #[test]
    fn test_surprise_me_suggests_new_prompt() {
        let app = App::new("");
        let mut tui = TuiState::new();
        let mut rng = StdRng::seed_from_u64(3);
        let commands = interpret(&app, &mut tui, &TuiEvent::SurpriseMe, &mut rng);
        match commands.as_slice() {
            [Command::Dispatch(Action::SurpriseMe(prompt))] => assert!(!prompt.is_empty()),
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn test_alert_blocks_input_until_dismissed() {
        let app = App::new("");
        let mut tui = TuiState::new();
        let mut rng = StdRng::seed_from_u64(0);
        tui.alerts.push_back(Notice::error("Please provide proper prompt"));

        assert!(interpret(&app, &mut tui, &TuiEvent::Generate, &mut rng).is_empty());
        assert_eq!(tui.alerts.len(), 1);

        assert!(interpret(&app, &mut tui, &TuiEvent::Submit, &mut rng).is_empty());
        assert!(tui.alerts.is_empty());
    }

    #[test]
    fn test_generate_without_prompt_opens_alert() {
        let mut app = App::new("");
        let mut tui = TuiState::new();
        let api: Arc<dyn PostApi> = Arc::new(FakeApi::returning_photo("YWJj"));
        let (tx, rx) = mpsc::channel();

        let quit = dispatch(&mut app, &mut tui, Action::Generate, &api, &tx);
        assert!(!quit);
        assert_eq!(
            tui.alerts.front().map(|n| n.message.as_str()),
            Some(crate::core::notify::MSG_MISSING_PROMPT)
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_post_result_navigates_home_and_alerts() {
        let mut app = App::new("Jane");
        let mut tui = TuiState::new();
        let api: Arc<dyn PostApi> = Arc::new(FakeApi::returning_photo("YWJj"));
        let (tx, _rx) = mpsc::channel();

        app.form.draft = app.form.draft.with_field(Field::Prompt, "fox");
        app.form.draft = app.form.draft.with_field(Field::Photo, "data:image/jpeg;base64,YWJj");
        app.form.submitting = true;
        app.form.post_request = app.next_request();
        tui.focus = Focus::Share;

        let post = SharedPost::from_draft(&app.form.draft, chrono::Local::now());
        let action = Action::PostShared {
            request: app.form.post_request,
            result: Ok(post),
        };
        dispatch(&mut app, &mut tui, action, &api, &tx);

        assert_eq!(app.route, Route::Home);
        assert_eq!(tui.focus, Focus::Name);
        assert_eq!(tui.alerts.front().map(|n| n.message.as_str()), Some("Success"));
    }

    #[test]
    fn test_home_keys() {
        let mut app = App::new("");
        app.route = Route::Home;
        let mut tui = TuiState::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            interpret(&app, &mut tui, &TuiEvent::InputChar('n'), &mut rng),
            vec![Command::Dispatch(Action::Navigate(Route::CreatePost))]
        );
        assert_eq!(
            interpret(&app, &mut tui, &TuiEvent::InputChar('q'), &mut rng),
            vec![Command::Dispatch(Action::Quit)]
        );
    }

    #[test]
    fn test_save_without_photo_alerts() {
        let app = App::new("");
        let mut tui = TuiState::new();
        save_current_photo(&app, &mut tui, Path::new("."));
        assert_eq!(
            tui.alerts.front().map(|n| n.message.as_str()),
            Some("Generate an image before saving it")
        );
    }
}
