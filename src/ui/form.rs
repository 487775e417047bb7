//! 添加表单 (Input Form)
//!
//! 有序的文本输入框列表，同一时间只有一个输入框获得焦点

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 名称输入框的索引
pub const MOD_NAME: usize = 0;
/// 默认字符上限
pub const DEFAULT_CHAR_LIMIT: usize = 255;
/// 默认占位符
pub const DEFAULT_PLACEHOLDER: &str = "Brita_2";

/// 单行文本输入框
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    label: String,
    value: String,
    cursor: usize, // 字符索引，不是字节索引
    placeholder: String,
    char_limit: usize,
    focused: bool,
}

impl TextField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
            placeholder: String::new(),
            char_limit: DEFAULT_CHAR_LIMIT,
            focused: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// 取出当前值并清空
    pub fn take_value(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    /// 处理编辑按键，只有获得焦点时才生效
    ///
    /// 返回按键是否被消费
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => self.move_home(),
                KeyCode::Char('e') => self.move_end(),
                KeyCode::Char('b') => self.move_left(),
                KeyCode::Char('f') => self.move_right(),
                KeyCode::Char('h') => self.delete_before(),
                KeyCode::Char('d') => self.delete_at(),
                KeyCode::Char('u') => self.kill_to_start(),
                KeyCode::Char('k') => self.kill_to_end(),
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => false,
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.delete_before(),
            KeyCode::Delete => self.delete_at(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => false,
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.char_count() >= self.char_limit {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    fn delete_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    fn delete_at(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    fn move_left(&mut self) -> bool {
        self.cursor = self.cursor.saturating_sub(1);
        true
    }

    fn move_right(&mut self) -> bool {
        self.cursor = (self.cursor + 1).min(self.char_count());
        true
    }

    fn move_home(&mut self) -> bool {
        self.cursor = 0;
        true
    }

    fn move_end(&mut self) -> bool {
        self.cursor = self.char_count();
        true
    }

    fn kill_to_start(&mut self) -> bool {
        let at = self.byte_index(self.cursor);
        self.value.drain(..at);
        self.cursor = 0;
        true
    }

    fn kill_to_end(&mut self) -> bool {
        let at = self.byte_index(self.cursor);
        self.value.truncate(at);
        true
    }
}

/// 添加 mod 用的表单
#[derive(Debug, Clone, PartialEq)]
pub struct InputForm {
    fields: Vec<TextField>,
    focused: usize,
}

impl InputForm {
    pub fn new(fields: Vec<TextField>) -> Self {
        assert!(!fields.is_empty(), "input form needs at least one field");
        let mut form = Self { fields, focused: 0 };
        form.sync_focus();
        form
    }

    /// 只有 "Name" 一个输入框的表单
    pub fn mod_name(placeholder: &str, char_limit: usize) -> Self {
        Self::new(vec![
            TextField::new("Name")
                .with_placeholder(placeholder)
                .with_char_limit(char_limit),
        ])
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> &TextField {
        &self.fields[self.focused]
    }

    pub fn is_last_focused(&self) -> bool {
        self.focused == self.fields.len() - 1
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = match self.focused {
            0 => self.fields.len() - 1,
            n => n - 1,
        };
    }

    pub fn focus_first(&mut self) {
        self.focused = MOD_NAME;
    }

    /// 先让所有输入框失焦，再聚焦当前索引
    pub fn sync_focus(&mut self) {
        for field in &mut self.fields {
            field.blur();
        }
        self.fields[self.focused].focus();
    }

    pub fn reset_all(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }

    /// 取出名称输入框的值，清空它并把焦点移回名称输入框
    pub fn submit_and_reset(&mut self) -> String {
        let value = self.fields[MOD_NAME].take_value();
        self.focus_first();
        self.sync_focus();
        value
    }

    /// 把按键交给当前获得焦点的输入框
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.fields[self.focused].handle_key(key)
    }
}

impl Default for InputForm {
    fn default() -> Self {
        Self::mod_name(DEFAULT_PLACEHOLDER, DEFAULT_CHAR_LIMIT)
    }
}
