//! Action 枚举定义 (Intent)
//!
//! 按键转化为语义化的 Action

use crossterm::event::KeyEvent;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,

    // 调整顺序
    MoveModUp,
    MoveModDown,

    StartAddMod,

    // 表单交互
    Cancel,  // Esc
    Submit,  // Enter
    FocusNext,
    FocusPrevious,
    Edit(KeyEvent), // 交给输入框处理
}
