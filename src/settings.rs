// 設定ファイルの読み込み
// 起動時にマウントするドライブと初期タグを JSON で定義する

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{app, drive};
use crate::drive::TagsDrive;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveDefinition {
    pub name: String,
    pub root: String,
    #[serde(default = "default_separator")]
    pub separator: char,
    #[serde(default = "default_native_separator")]
    pub native_separator: char,
    #[serde(default)]
    pub seed_tags: Vec<String>,
}

fn default_separator() -> char {
    drive::DEFAULT_SEPARATOR
}

fn default_native_separator() -> char {
    drive::NATIVE_SEPARATOR
}

impl Default for DriveDefinition {
    fn default() -> Self {
        Self {
            name: drive::DEFAULT_NAME.to_string(),
            root: drive::DEFAULT_ROOT.to_string(),
            separator: drive::DEFAULT_SEPARATOR,
            native_separator: drive::NATIVE_SEPARATOR,
            seed_tags: Vec::new(),
        }
    }
}

impl DriveDefinition {
    /// 必須項目の検証（ルート未設定などはここで致命的エラーにする）
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::config("drive name must not be empty"));
        }
        if self.root.trim_end_matches(self.separator).is_empty() {
            let name = &self.name;
            return Err(AppError::config(format!("drive {name} has no root")));
        }
        if self.separator == self.native_separator {
            let name = &self.name;
            return Err(AppError::config(format!(
                "drive {name}: separator and native separator must differ"
            )));
        }
        Ok(())
    }

    pub fn build_drive(&self) -> AppResult<TagsDrive> {
        self.validate()?;
        let drive = TagsDrive::new(&self.name, &self.root, self.separator, self.native_separator)
            .with_tags(self.seed_tags.iter().map(String::as_str));
        Ok(drive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub drives: Vec<DriveDefinition>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drives: vec![DriveDefinition::default()],
        }
    }
}

/// 設定ファイルのパス（環境変数で上書き可能）
pub fn default_settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(app::SETTINGS_ENV_VAR) {
        return PathBuf::from(path);
    }

    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app::DATA_DIR_NAME)
        .join(app::SETTINGS_FILENAME)
}

pub fn load_settings(path: &Path) -> AppResult<Settings> {
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    for definition in &settings.drives {
        definition.validate()?;
    }
    Ok(settings)
}

/// ファイルが存在しない場合は既定値を返す
pub fn load_or_default(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        log::info!("No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    load_settings(path)
}

pub fn save_settings(path: &Path, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}
