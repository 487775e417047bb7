//! 视图层模块
//!
//! 纯函数：根据当前状态生成一帧文本，不修改状态

pub mod components;
pub mod theme;

use ratatui::{
    Frame,
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::state::{App, AppMode};
use components::{mod_row, text_field_spans};
use theme::Theme;

const LISTING_HELP: &str = "[q] quit  [a] add mod  [j/k] navigate  [alt+j/k] move mod";
const ADDING_HELP: &str = "[enter] save  [tab] next field  [esc] cancel";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    frame.render_widget(Paragraph::new(frame_text(app, theme)), frame.area());
}

/// 当前模式对应的整帧文本
pub fn frame_text(app: &App, theme: &Theme) -> Text<'static> {
    match app.mode {
        AppMode::Listing => listing_text(app, theme),
        AppMode::Adding => adding_text(app, theme),
        AppMode::Exiting => exiting_text(theme),
    }
}

fn listing_text(app: &App, theme: &Theme) -> Text<'static> {
    let mods = &app.mods;
    let mut lines = vec![
        Line::default(),
        Line::from(format!("Installed mods: {}", mods.len())),
        Line::default(),
    ];

    for i in mods.visible_range() {
        lines.push(mod_row(&mods.items()[i], i == mods.cursor(), theme));
    }

    lines.push(Line::default());
    lines.push(Line::styled(LISTING_HELP, theme.hint_style()));
    Text::from(lines)
}

fn adding_text(app: &App, theme: &Theme) -> Text<'static> {
    let mut lines: Vec<Line> = app
        .form
        .fields()
        .iter()
        .map(|field| {
            let mut spans = vec![
                Span::styled(field.label().to_string(), theme.input_style()),
                Span::raw(": "),
            ];
            spans.extend(text_field_spans(field, theme));
            Line::from(spans)
        })
        .collect();

    if let Some(message) = &app.message {
        lines.push(Line::styled(message.clone(), theme.cursor_style()));
    }
    lines.push(Line::default());
    lines.push(Line::styled(ADDING_HELP, theme.hint_style()));
    Text::from(lines)
}

fn exiting_text(theme: &Theme) -> Text<'static> {
    Text::from(Line::styled(theme.farewell.clone(), theme.cursor_style()))
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::models::ModList;
    use crate::ui::actions::Action;
    use crate::ui::form::InputForm;

    fn app_with(n: usize) -> App {
        let items = (1..=n).map(|i| format!("Brita_{i}")).collect();
        App::new(ModList::new(items), InputForm::default())
    }

    fn lines(text: &Text) -> Vec<String> {
        text.lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_listing_frame() {
        let app = app_with(3);
        let text = lines(&frame_text(&app, &Theme::default()));
        assert_eq!(text[1], "Installed mods: 3");
        assert_eq!(text[3], ">  Brita_1");
        assert_eq!(text[4], "   Brita_2");
        assert_eq!(text[5], "   Brita_3");
        assert_eq!(text.last().map(String::as_str), Some(LISTING_HELP));
    }

    #[test]
    fn test_listing_renders_window_plus_one_rows() {
        let app = app_with(40);
        let text = lines(&frame_text(&app, &Theme::default()));
        let rows = text.iter().filter(|l| l.contains("Brita_")).count();
        assert_eq!(rows, 16);
    }

    #[test]
    fn test_listing_follows_scroll() {
        let mut app = app_with(40);
        for _ in 0..20 {
            app.dispatch(Action::MoveSelectionDown);
        }
        let text = lines(&frame_text(&app, &Theme::default()));
        let start = app.mods.start_index();
        assert_eq!(text[3], format!("   Brita_{}", start + 1));
        assert!(text.contains(&">  Brita_21".to_string()));
    }

    #[test]
    fn test_adding_frame() {
        let mut app = app_with(1);
        app.dispatch(Action::StartAddMod);
        let text = lines(&frame_text(&app, &Theme::default()));
        assert_eq!(text[0], "Name: Brita_2");
    }

    #[test]
    fn test_exiting_frame() {
        let mut app = app_with(1);
        app.dispatch(Action::Quit);
        let text = lines(&frame_text(&app, &Theme::default()));
        assert_eq!(text, ["So long!"]);
    }

    #[test]
    fn test_render_to_backend() {
        let app = app_with(2);
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..20u16)
            .map(|x| buffer[(x, 1u16)].symbol().to_string())
            .collect();
        assert_eq!(row, "Installed mods: 2   ");
    }
}
