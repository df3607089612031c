// タグバリデーション機能のモジュール
// リポジトリ自体は任意の文字列を受け付けるため、新規作成時の検証はホスト側で行う

use crate::config::tags;
use crate::errors::{AppError, AppResult};
use crate::path_maker::PathMaker;

/// 1セグメント分のタグ名の検証
pub fn is_valid_tag(tag_text: &str) -> bool {
    !tag_text.trim().is_empty() && tag_text.chars().count() <= tags::MAX_TAG_LENGTH
}

/// 新規作成するタグパスの検証（ルート以下の全セグメントを確認）
pub fn validate_tag_path(path_maker: &PathMaker, path: &str) -> AppResult<()> {
    let separator = path_maker.separator();
    let trimmed = path.trim_end_matches(separator);
    let clean_root = path_maker.clean_root();

    if trimmed.is_empty() || trimmed == clean_root {
        return Err(AppError::validation("path", "the drive root cannot be created as a tag"));
    }

    let relative = match trimmed.strip_prefix(clean_root) {
        Some(rest) => rest.strip_prefix(separator).unwrap_or(rest),
        None => trimmed,
    };

    for segment in relative.split(separator) {
        if !is_valid_tag(segment) {
            return Err(AppError::validation(
                "path",
                format!(
                    "invalid tag name {segment:?} (must be non-blank and at most {} characters)",
                    tags::MAX_TAG_LENGTH
                ),
            ));
        }
    }

    Ok(())
}
