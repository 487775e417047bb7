use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{ModlistError, Result};
use crate::models::{DEFAULT_SCROLL_MARGIN, DEFAULT_WINDOW_SIZE};
use crate::ui::form::{DEFAULT_CHAR_LIMIT, DEFAULT_PLACEHOLDER};

/// 服务器配置中保存 mod 列表的键
pub const MODS_KEY: &str = "Mods";
/// 默认的服务器配置文件
pub const DEFAULT_CONFIG_PATH: &str = "./servertest.ini";

/// `Key=v1;v2;...` 格式的服务器配置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerConfig {
    entries: HashMap<String, Vec<String>>,
}

impl ServerConfig {
    /// 解析配置文本
    ///
    /// 没有 `=` 的行被忽略；键取第一个 `=` 之前的部分；
    /// `Key=` 得到空列表；重复的键以后出现的为准。
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let values = if value.is_empty() {
                Vec::new()
            } else {
                value.split(';').map(str::to_string).collect()
            };
            entries.insert(key.to_string(), values);
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// 取出某个键的列表，不存在时为空
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key).map(<[String]>::to_vec).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 读取服务器配置文件，文件不存在或无法读取都是错误
pub fn load_config(path: &Path) -> Result<ServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ModlistError::ConfigNotFound(path.to_path_buf()),
        _ => ModlistError::Io(e),
    })?;
    let config = ServerConfig::parse(&content);
    debug!("loaded {} keys from {}", config.len(), path.display());
    Ok(config)
}

/// 程序自身的设置 (`settings.toml`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_size: usize,
    pub scroll_margin: usize,
    /// 可见窗口是否多渲染一行
    pub inclusive_window_bound: bool,
    pub allow_empty_names: bool,
    pub name_placeholder: String,
    pub name_char_limit: usize,
    pub theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            inclusive_window_bound: true,
            allow_empty_names: true,
            name_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            name_char_limit: DEFAULT_CHAR_LIMIT,
            theme: ThemeSettings::default(),
        }
    }
}

/// 颜色可以是名称、`#RRGGBB` 或 256 色索引
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub accent: Option<String>,
    pub muted: Option<String>,
    pub selected: Option<String>,
    pub hint: Option<String>,
    pub cursor_marker: Option<String>,
    pub farewell: Option<String>,
}

impl Settings {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut settings: Settings = toml::from_str(content).map_err(|source| ModlistError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        if settings.window_size == 0 {
            warn!("window_size must be positive, using {}", DEFAULT_WINDOW_SIZE);
            settings.window_size = DEFAULT_WINDOW_SIZE;
        }
        Ok(settings)
    }
}

/// 默认设置文件路径 (~/.config/modlist/settings.toml)
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("modlist").join("settings.toml"))
}

/// 加载设置
///
/// 显式指定的文件必须存在；默认位置的文件不存在时使用默认值。
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_settings_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Settings::default()),
        },
    };

    let content = fs::read_to_string(&path)?;
    let settings = Settings::parse(&content, &path)?;
    debug!("loaded settings from {}", path.display());
    Ok(settings)
}
