use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Landing, MessageList, TitleBar};

/// Draw one frame: title bar on top, transcript (or the welcome
/// placeholder while it is empty) in the middle, composer at the bottom.
/// The composer row height follows its content, so the layout is
/// recomputed every frame.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let input_height = tui.input_box.calculate_height(frame.area().width);
    let layout = Layout::vertical([Length(1), Min(0), Length(input_height)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    if app.transcript.is_empty() {
        Landing.render(frame, main_area);
        tui.message_list.has_unseen_content = false;
    } else {
        let mut list = MessageList::new(
            &mut tui.message_list,
            &app.transcript,
            app.is_loading,
            spinner_frame,
        );
        list.render(frame, main_area);
    }

    let mut title_bar = TitleBar::new(
        app.server_url.clone(),
        app.status.clone(),
        tui.message_list.has_unseen_content,
    );
    title_bar.render(frame, title_area);

    tui.input_box.dimmed = app.is_loading;
    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::test_support::test_app;

    fn draw_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| {
                draw_ui(f, app, &mut tui, 0);
            })
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
    fn test_empty_transcript_shows_welcome() {
        let app = test_app();
        let text = draw_to_string(&app);
        assert!(text.contains("study buddy"));
        assert!(text.contains("Ready to help!"));
        assert!(text.contains("0/1000"));
    }

    #[test]
    fn test_messages_replace_welcome() {
        let mut app = test_app();
        app.transcript.push_user("What is 15 x 8?".to_string());
        app.transcript.push_tutor("15 x 8 = 120".to_string());

        let text = draw_to_string(&app);
        assert!(!text.contains("study buddy"));
        assert!(text.contains("What is 15 x 8?"));
        assert!(text.contains("15 x 8 = 120"));
    }
}
