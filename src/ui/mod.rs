//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs / form.rs): App 结构体、输入表单
//! - View (view/): 纯函数，将 State 映射为一帧文本
//! - Intent (actions.rs / input.rs): 按键转化为明确的语义化 Action
//! - Update (logic.rs): 屏幕状态机

pub mod actions;
pub mod form;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::{App, AppMode};
pub use view::{render, theme::Theme};
