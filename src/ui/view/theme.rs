//! 渲染配置
//!
//! 颜色和标记由调用方注入，不使用全局常量

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::storage::ThemeSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub selected: Color,
    pub hint: Color,
    pub cursor_marker: String,
    pub farewell: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0xFF, 0x06, 0xB7),
            muted: Color::Rgb(0x76, 0x76, 0x76),
            selected: Color::Rgb(0xFA, 0xFA, 0xFA),
            hint: Color::Indexed(241),
            cursor_marker: ">".to_string(),
            farewell: "So long!".to_string(),
        }
    }
}

impl Theme {
    /// 无法识别的颜色记录警告并保留默认值
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let defaults = Self::default();
        Self {
            accent: parse_color("accent", settings.accent.as_deref(), defaults.accent),
            muted: parse_color("muted", settings.muted.as_deref(), defaults.muted),
            selected: parse_color("selected", settings.selected.as_deref(), defaults.selected),
            hint: parse_color("hint", settings.hint.as_deref(), defaults.hint),
            cursor_marker: settings
                .cursor_marker
                .clone()
                .unwrap_or(defaults.cursor_marker),
            farewell: settings.farewell.clone().unwrap_or(defaults.farewell),
        }
    }

    pub fn input_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn unselected_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

fn parse_color(name: &str, value: Option<&str>, fallback: Color) -> Color {
    let Some(value) = value else {
        return fallback;
    };
    Color::from_str(value).unwrap_or_else(|_| {
        warn!("unknown {} color {:?}, keeping default", name, value);
        fallback
    })
}
