// PathMaker - パス文字列の結合・分解・ルート補正
// ツリー構造は持たず、区切り文字とルートトークンだけでパスの階層を表現する

use crate::config::drive;

/// 区切り文字とルートトークンによる純粋なパス演算
///
/// どの操作も失敗しない（不正な入力や区切りだらけの入力にも文字列を返す）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMaker {
    separator: char,
    root: String,
    native_separator: char,
}

impl PathMaker {
    /// `root` は末尾区切りの有無どちらでもよい（`Tags:` / `Tags:/`）
    pub fn new(separator: char, root: impl Into<String>) -> Self {
        Self::with_native_separator(separator, root, drive::NATIVE_SEPARATOR)
    }

    pub fn with_native_separator(separator: char, root: impl Into<String>, native_separator: char) -> Self {
        Self {
            separator,
            root: root.into(),
            native_separator,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// 末尾区切りを除いたルート
    pub fn clean_root(&self) -> &str {
        self.root.trim_end_matches(self.separator)
    }

    /// `parent` と `child` を連結する（ルート付きの `child` は `parent` を置き換える）
    pub fn make_path(&self, parent: &str, child: &str) -> String {
        if child.is_empty() {
            return self.ensure_root_separator(parent);
        }

        if parent.is_empty() || child.starts_with(self.clean_root()) {
            return self.ensure_root_separator(child);
        }

        format!(
            "{}{}{}",
            parent.trim_end_matches(self.separator),
            self.separator,
            child.trim_start_matches(self.separator)
        )
    }

    pub fn get_parent_path(&self, path: &str) -> String {
        let last_separator = path.trim_end_matches(self.separator).rfind(self.separator);

        match last_separator {
            Some(0) => self.separator.to_string(),
            Some(index) => self.ensure_root_separator(&path[..index]),
            None => self.ensure_root_separator(path),
        }
    }

    pub fn get_child_name(&self, path: &str) -> String {
        let clean_path = path.trim_end_matches(self.separator);
        if clean_path.is_empty() {
            return path.to_string();
        }

        match clean_path.rfind(self.separator) {
            Some(index) => clean_path[index + self.separator.len_utf8()..].to_string(),
            None => self.ensure_root_separator(clean_path),
        }
    }

    /// ルート直後のネイティブ区切り（`Tags:\...`）を `Tags:/...` に補正する
    /// それ以外の位置のネイティブ区切りはタグ名の文字として残す
    pub fn fix_root(&self, path: &str) -> String {
        let clean_root = self.clean_root();
        let broken_root = format!("{}{}", clean_root, self.native_separator);
        let Some(rest) = path.strip_prefix(broken_root.as_str()) else {
            return path.to_string();
        };

        let clean_path = format!(
            "{}{}{}",
            clean_root,
            self.separator,
            rest.trim_start_matches(self.separator)
        );
        self.ensure_root_separator(&clean_path)
    }

    /// ルートのみのパスには末尾区切りを1つだけ付け、他はそのまま返す
    pub fn ensure_root_separator(&self, path: &str) -> String {
        let clean_path = path.trim_end_matches(self.separator);
        let clean_root = self.clean_root();
        if clean_path == clean_root {
            format!("{}{}", clean_path, self.separator)
        } else {
            path.to_string()
        }
    }
}
