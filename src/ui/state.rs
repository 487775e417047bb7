//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及模式枚举

use crate::models::ModList;
use crate::storage::Settings;

use super::form::InputForm;

/// 应用状态
#[derive(Debug, Clone)]
pub struct App {
    pub mods: ModList,
    pub form: InputForm,
    pub mode: AppMode,
    pub message: Option<String>,
    pub allow_empty_names: bool,
}

/// 应用模式，同一时间只有一个生效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Listing,
    Adding,
    Exiting,
}

impl App {
    /// 创建新的应用实例
    pub fn new(mods: ModList, form: InputForm) -> Self {
        Self {
            mods,
            form,
            mode: AppMode::Listing,
            message: None,
            allow_empty_names: true,
        }
    }

    /// 按设置文件构建列表和表单
    pub fn from_settings(items: Vec<String>, settings: &Settings) -> Self {
        let mods = ModList::with_window(items, settings.window_size, settings.scroll_margin)
            .with_inclusive_bound(settings.inclusive_window_bound);
        let form = InputForm::mod_name(&settings.name_placeholder, settings.name_char_limit);

        let mut app = Self::new(mods, form);
        app.allow_empty_names = settings.allow_empty_names;
        app
    }

    pub fn should_quit(&self) -> bool {
        self.mode == AppMode::Exiting
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ModList::default(), InputForm::default())
    }
}
