use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

pub mod api_types;
mod config;
pub mod drive;
pub mod drive_commands;
pub mod errors;
pub mod path_maker;
pub mod registry;
pub mod repositories;
pub mod settings;
pub mod shell;
pub mod tag;
mod tag_validator;

use registry::DriveRegistry;
use settings::Settings;
use shell::{Shell, ShellOutcome};

pub use drive::TagsDrive;
pub use errors::{AppError, AppResult};
pub use path_maker::PathMaker;
pub use repositories::{InMemoryTagRepository, TagRepository};
pub use tag::Tag;

// アプリケーション状態管理
pub struct AppState {
    pub drives: Arc<Mutex<DriveRegistry>>,
}

impl AppState {
    pub fn new() -> AppResult<Self> {
        let settings_path = settings::default_settings_path();
        let settings = settings::load_or_default(&settings_path)?;
        Self::from_settings(&settings)
    }

    /// 設定に定義されたドライブをマウントした状態を作成
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let mut registry = DriveRegistry::new();
        for definition in &settings.drives {
            registry.mount(definition.build_drive()?)?;
        }

        Ok(AppState {
            drives: Arc::new(Mutex::new(registry)),
        })
    }
}

pub fn run() -> Result<()> {
    // ログ初期化
    env_logger::init();

    // アプリケーション状態を初期化
    let app_state = AppState::new().context("Failed to initialize application state")?;
    let shell = Shell::new().context("Failed to initialize shell")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", shell.prompt(&app_state))?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match shell.execute(&app_state, &line) {
            Ok(ShellOutcome::Exit) => break,
            Ok(ShellOutcome::Output(text)) if text.is_empty() => {}
            Ok(ShellOutcome::Output(text)) => writeln!(stdout, "{text}")?,
            Err(e) => {
                log::warn!("Command failed: {line:?}: {e}");
                writeln!(stdout, "{}", e.user_message())?;
            }
        }
    }

    Ok(())
}
