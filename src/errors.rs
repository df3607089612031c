use thiserror::Error;

/// アプリケーション全体で使用する統一エラー型
///
/// The path algebra and the repository never fail; these errors come from the
/// drive registry, the command layer, the shell and settings loading.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Drive not found: {0}")]
    DriveNotFound(String),

    #[error("Drive already exists: {0}")]
    DriveAlreadyExists(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // メッセージはそのまま表示する
    #[error("{0}")]
    StateLock(String),
}

impl AppError {
    /// バリデーションエラーを作成
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 設定エラーを作成
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn drive_not_found(name: impl Into<String>) -> Self {
        Self::DriveNotFound(name.into())
    }

    pub fn drive_already_exists(name: impl Into<String>) -> Self {
        Self::DriveAlreadyExists(name.into())
    }

    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound(path.into())
    }

    /// 状態ロックエラーを作成
    pub fn state_lock(message: impl Into<String>) -> Self {
        Self::StateLock(message.into())
    }
}

/// アプリケーション全体で使用するResult型
pub type AppResult<T> = Result<T, AppError>;

/// エラーのカテゴリ分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// ユーザー操作エラー（修正可能）
    UserError,
    /// システムエラー（再試行可能）
    SystemError,
    /// 設定エラー（設定変更が必要）
    ConfigError,
    /// 重大なエラー（アプリケーション終了）
    FatalError,
}

impl AppError {
    /// エラーのカテゴリを取得
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation { .. } => ErrorCategory::UserError,
            AppError::DriveNotFound(_) => ErrorCategory::UserError,
            AppError::DriveAlreadyExists(_) => ErrorCategory::UserError,
            AppError::PathNotFound(_) => ErrorCategory::UserError,
            AppError::UnknownCommand(_) => ErrorCategory::UserError,
            AppError::Configuration(_) => ErrorCategory::ConfigError,
            AppError::Pattern(_) => ErrorCategory::ConfigError,
            AppError::Io(_) => ErrorCategory::SystemError,
            AppError::StateLock(_) => ErrorCategory::SystemError,
            AppError::Serialization(_) => ErrorCategory::FatalError,
        }
    }

    /// ユーザー向けメッセージを取得
    pub fn user_message(&self) -> String {
        match self {
            AppError::Io(_) => {
                "ファイル操作中にエラーが発生しました。ファイルの権限を確認してください。"
                    .to_string()
            }
            AppError::Serialization(_) => "データの変換中にエラーが発生しました。".to_string(),
            AppError::Pattern(err) => format!("パターンの作成に失敗しました: {err}"),
            AppError::Validation { field, message } => format!("{field}: {message}"),
            AppError::Configuration(msg) => format!("設定エラー: {msg}"),
            AppError::DriveNotFound(name) => format!("ドライブが見つかりません: {name}"),
            AppError::DriveAlreadyExists(name) => format!("ドライブは既に存在します: {name}"),
            AppError::PathNotFound(path) => format!("パスが見つかりません: {path}"),
            AppError::UnknownCommand(cmd) => {
                format!("不明なコマンドです: {cmd}（help で一覧を表示）")
            }
            AppError::StateLock(msg) => msg.clone(),
        }
    }

    /// 再試行可能かどうか
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::SystemError)
    }
}
