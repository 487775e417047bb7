//! 通用 UI 组件
//!
//! mod 行和输入框的 Span 构建

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::Theme;
use crate::ui::form::TextField;

/// [组件] 列表中的一行：光标标记 + mod 名称
pub fn mod_row(name: &str, is_selected: bool, theme: &Theme) -> Line<'static> {
    let marker = Span::styled(theme.cursor_marker.clone(), theme.cursor_style());
    let (cursor, name) = if is_selected {
        (marker, Span::styled(name.to_string(), theme.selected_style()))
    } else {
        // 按显示宽度留白，宽字符标记也能对齐
        (
            Span::raw(" ".repeat(marker.width())),
            Span::styled(name.to_string(), theme.unselected_style()),
        )
    };
    Line::from(vec![cursor, Span::raw("  "), name])
}

/// [组件] 输入框当前内容，获得焦点时用反色块显示光标
pub fn text_field_spans(field: &TextField, theme: &Theme) -> Vec<Span<'static>> {
    let block = Style::default().add_modifier(Modifier::REVERSED);

    if field.value().is_empty() {
        let placeholder = field.placeholder();
        if !field.is_focused() {
            return vec![Span::styled(placeholder.to_string(), theme.placeholder_style())];
        }
        let mut chars = placeholder.chars();
        let first = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
        return vec![
            Span::styled(first, theme.placeholder_style().patch(block)),
            Span::styled(chars.collect::<String>(), theme.placeholder_style()),
        ];
    }

    if !field.is_focused() {
        return vec![Span::raw(field.value().to_string())];
    }

    let before: String = field.value().chars().take(field.cursor()).collect();
    let at: String = field
        .value()
        .chars()
        .nth(field.cursor())
        .map(String::from)
        .unwrap_or_else(|| " ".to_string());
    let after: String = field.value().chars().skip(field.cursor() + 1).collect();

    vec![Span::raw(before), Span::styled(at, block), Span::raw(after)]
}
