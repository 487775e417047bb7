//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action，退出键优先于各模式自己的绑定

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};

/// `q` 和 Ctrl+C 在任何模式下都直接退出
pub fn is_quit_key(key: &KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') => ctrl,
        KeyCode::Char('q') => !ctrl && !alt,
        _ => false,
    }
}

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyEvent) -> Option<Action> {
    if mode == AppMode::Exiting {
        return None;
    }
    if is_quit_key(&key) {
        return Some(Action::Quit);
    }

    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match mode {
        AppMode::Listing => match key.code {
            KeyCode::Char('k') | KeyCode::Up if alt => Some(Action::MoveModUp),
            KeyCode::Char('j') | KeyCode::Down if alt => Some(Action::MoveModDown),
            KeyCode::Char('k') | KeyCode::Up if !ctrl => Some(Action::MoveSelectionUp),
            KeyCode::Char('j') | KeyCode::Down if !ctrl => Some(Action::MoveSelectionDown),
            KeyCode::Char('a') if !ctrl => Some(Action::StartAddMod),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        AppMode::Adding => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::BackTab => Some(Action::FocusPrevious),
            KeyCode::Tab if shift => Some(Action::FocusPrevious),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::Char('p') if ctrl => Some(Action::FocusPrevious),
            KeyCode::Char('n') if ctrl => Some(Action::FocusNext),
            _ => Some(Action::Edit(key)),
        },
        AppMode::Exiting => None,
    }
}

/// 处理按键事件，返回是否应该退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app.mode, key) {
        Some(action) => app.dispatch(action),
        None => app.should_quit(),
    }
}
