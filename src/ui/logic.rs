//! 业务逻辑处理 (Update/Dispatch)
//!
//! 屏幕状态机：Listing / Adding / Exiting

use log::debug;

use super::actions::Action;
use super::form::MOD_NAME;
use super::state::{App, AppMode};

impl App {
    /// 核心逻辑分发，返回是否应该退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        if self.should_quit() {
            return true;
        }

        let was_adding = self.mode == AppMode::Adding;
        match action {
            Action::Quit => self.quit(),
            Action::MoveSelectionUp => self.mods.move_cursor_up(),
            Action::MoveSelectionDown => self.mods.move_cursor_down(),
            Action::MoveModUp => self.move_mod_up(),
            Action::MoveModDown => self.move_mod_down(),
            Action::StartAddMod => self.start_add_mod(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.submit(),
            Action::FocusNext => self.form.focus_next(),
            Action::FocusPrevious => self.form.focus_previous(),
            Action::Edit(key) => {
                if self.form.handle_key(key) {
                    self.message = None;
                }
            }
        }

        // 每个按键之后保证只有一个输入框获得焦点
        if was_adding {
            self.form.sync_focus();
        }
        self.should_quit()
    }

    // ============ 列表相关 ============

    fn move_mod_up(&mut self) {
        let before = self.mods.cursor();
        self.mods.swap_with_previous();
        if self.mods.cursor() != before {
            debug!("moved {:?} to position {}", self.mods.selected(), self.mods.cursor());
        }
    }

    fn move_mod_down(&mut self) {
        let before = self.mods.cursor();
        self.mods.swap_with_next();
        if self.mods.cursor() != before {
            debug!("moved {:?} to position {}", self.mods.selected(), self.mods.cursor());
        }
    }

    // ============ 添加 mod 相关 ============

    /// 进入添加模式，表单总是从空白开始
    pub fn start_add_mod(&mut self) {
        self.form.reset_all();
        self.form.focus_first();
        self.form.sync_focus();
        self.message = None;
        self.set_mode(AppMode::Adding);
    }

    /// 最后一个输入框上按 Enter 提交，否则跳到下一个输入框
    pub fn submit(&mut self) {
        if !self.form.is_last_focused() {
            self.form.focus_next();
            return;
        }

        if !self.allow_empty_names && self.form.fields()[MOD_NAME].value().trim().is_empty() {
            self.message = Some("Mod name cannot be empty".to_string());
            return;
        }

        let name = self.form.submit_and_reset();
        debug!("appending mod {:?}", name);
        self.mods.append_item(name);
        self.message = None;
        self.set_mode(AppMode::Listing);
    }

    // ============ 通用操作 ============

    /// 取消添加，列表保持不变
    pub fn cancel(&mut self) {
        self.form.reset_all();
        self.message = None;
        self.set_mode(AppMode::Listing);
    }

    pub fn quit(&mut self) {
        self.set_mode(AppMode::Exiting);
    }

    fn set_mode(&mut self, mode: AppMode) {
        if self.mode != mode {
            debug!("mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}
