use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Route};
use crate::tui::component::Component;
use crate::tui::components::{ActionBar, Alert, Home, Preview, TitleBar};
use crate::tui::{Focus, TuiState};

const HELP: &str =
    "Tab: next  Ctrl+G: generate  Ctrl+R: surprise me  Ctrl+P: share  Ctrl+S: save  Esc: home";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, base_url: &str) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(app.route, base_url.to_string(), app.status_message.clone())
        .render(frame, title_area);

    match app.route {
        Route::CreatePost => draw_create_post(frame, main_area, app, tui),
        Route::Home => Home {
            shared_posts: &app.shared_posts,
        }
        .render(frame, main_area),
    }

    if let Some(notice) = tui.alerts.front() {
        Alert { notice }.render(frame, frame.area());
    }
}

fn draw_create_post(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [header, name, prompt, preview, buttons, share_hint, help] = Layout::vertical([
        Length(3),
        Length(3),
        Length(3),
        Min(6),
        Length(3),
        Length(1),
        Length(1),
    ])
    .areas(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled("Create", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            "Generate an imaginative image through DALL-E AI and share it with the community",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(intro, header);

    // Alerts are modal, so no field shows a cursor underneath one
    let modal = !tui.alerts.is_empty();
    tui.name_field.focused = !modal && tui.focus == Focus::Name;
    tui.prompt_field.focused = !modal && tui.focus == Focus::Prompt;
    tui.name_field.render(frame, name);
    tui.prompt_field.render(frame, prompt);

    let draft = &app.form.draft;
    Preview {
        photo: draft.photo.as_deref(),
        prompt: &draft.prompt,
        generating: app.form.generating,
        spinner_frame: tui.spinner_frame,
    }
    .render(frame, preview);

    ActionBar {
        generating: app.form.generating,
        submitting: app.form.submitting,
        generate_focused: tui.focus == Focus::Generate,
        share_focused: tui.focus == Focus::Share,
    }
    .render(frame, buttons);

    frame.render_widget(
        Span::styled(
            "** Once you have created the image you want, you can share it with others in the community **",
            Style::default().fg(Color::DarkGray),
        ),
        share_hint,
    );
    frame.render_widget(
        Span::styled(HELP, Style::default().fg(Color::DarkGray)),
        help,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::draft::Field;
    use crate::core::notify::Notice;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        tui.sync(app);
        terminal
            .draw(|f| draw_ui(f, app, tui, "http://localhost:8080"))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_create_post() {
        let mut app = App::new("Jane");
        update(
            &mut app,
            Action::EditField {
                field: Field::Prompt,
                value: "a red fox".to_string(),
            },
        );
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains("Your Name"));
        assert!(text.contains("Jane"));
        assert!(text.contains("a red fox"));
        assert!(text.contains("Generate"));
        assert!(text.contains("Share with the Community"));
    }

    #[test]
    fn test_draw_busy_labels() {
        let mut app = App::new("Jane");
        update(
            &mut app,
            Action::EditField {
                field: Field::Prompt,
                value: "fox".to_string(),
            },
        );
        update(&mut app, Action::Generate);
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains("Generating..."));
    }

    #[test]
    fn test_draw_alert_overlay() {
        let app = App::new("");
        let mut tui = TuiState::new();
        tui.alerts.push_back(Notice::info("Success"));
        let text = screen(&app, &mut tui);
        assert!(text.contains("Success"));
        assert!(text.contains("dismiss"));
    }

    #[test]
    fn test_draw_home() {
        let mut app = App::new("");
        update(&mut app, Action::Navigate(Route::Home));
        let mut tui = TuiState::new();
        let text = screen(&app, &mut tui);
        assert!(text.contains("Nothing shared yet"));
    }
}
