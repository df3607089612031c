// TagsDrive - ドライブ単位でリポジトリを束ねる
// 入力パスはルート補正してからリポジトリへ渡し、出力パスはルート区切りを保証する

use crate::path_maker::PathMaker;
use crate::repositories::{InMemoryTagRepository, TagRepository};
use crate::tag::Tag;

/// マウントされた1つの名前空間（ルートトークンと専用リポジトリの組）
///
/// 入力が `None` の場合は空パスとして扱う
#[derive(Debug, Clone)]
pub struct TagsDrive {
    name: String,
    path_maker: PathMaker,
    repository: InMemoryTagRepository,
}

impl TagsDrive {
    pub fn new(name: impl Into<String>, root: &str, separator: char, native_separator: char) -> Self {
        let root = root.trim_end_matches(separator);
        let path_maker = PathMaker::with_native_separator(separator, root, native_separator);
        Self {
            name: name.into(),
            repository: InMemoryTagRepository::with_path_maker(path_maker.clone()),
            path_maker,
        }
    }

    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        for tag in tags {
            self.add_tag(Some(tag));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 末尾区切りなしのルート（例: `Tags:`）
    pub fn root(&self) -> &str {
        self.path_maker.clean_root()
    }

    /// 表示用のルート（例: `Tags:/`）
    pub fn display_root(&self) -> String {
        self.path_maker.ensure_root_separator(self.root())
    }

    pub fn path_maker(&self) -> &PathMaker {
        &self.path_maker
    }

    pub fn tag_count(&self) -> usize {
        self.repository.len()
    }

    /// ルート補正後のパスがこのドライブ上にあるか
    pub fn owns_path(&self, path: &str) -> bool {
        let path = self.clean_input(Some(path));
        match path.strip_prefix(self.root()) {
            Some(rest) => rest.is_empty() || rest.starts_with(self.path_maker.separator()),
            None => false,
        }
    }

    fn clean_input(&self, path: Option<&str>) -> String {
        self.path_maker.fix_root(path.unwrap_or_default())
    }

    fn clean_output(&self, path: &str) -> String {
        self.path_maker.ensure_root_separator(path)
    }

    pub fn add_tag(&mut self, path: Option<&str>) -> Tag {
        let path = self.clean_input(path);
        let tag = self.repository.add_tag(&path);
        log::debug!("[{}] add_tag({path:?}) => {:?}", self.name, tag.path());
        tag
    }

    pub fn get_tag(&self, path: Option<&str>) -> Option<Tag> {
        let path = self.clean_input(path);
        let tag = self.repository.get_tag(&path);
        log::debug!("[{}] get_tag({path:?}) => {}", self.name, tag.is_some());
        tag
    }

    pub fn item_exists(&self, path: Option<&str>) -> bool {
        let path = self.clean_input(path);
        let exists = self.repository.item_exists(&path);
        log::debug!("[{}] item_exists({path:?}) => {exists}", self.name);
        exists
    }

    /// タグはいつでも子を持てるため、存在するパスはすべてコンテナ
    pub fn is_item_container(&self, path: Option<&str>) -> bool {
        self.item_exists(path)
    }

    pub fn get_child_tags(&self, path: Option<&str>, depth: Option<u32>) -> Vec<Tag> {
        let path = self.clean_input(path);
        let tags = self.repository.get_child_tags(&path, depth);
        log::debug!(
            "[{}] get_child_tags({path:?}, {depth:?}) => {}",
            self.name,
            tags.len()
        );
        tags
    }

    pub fn make_path(&self, parent: Option<&str>, child: Option<&str>) -> String {
        let parent = self.clean_input(parent);
        let child = self.clean_input(child);
        let result = self.repository.make_path(&parent, &child);
        self.clean_output(&result)
    }

    pub fn get_parent_path(&self, path: Option<&str>) -> String {
        let path = self.clean_input(path);
        let result = self.repository.get_parent_path(&path);
        self.clean_output(&result)
    }

    pub fn get_child_name(&self, path: Option<&str>) -> String {
        let path = self.clean_input(path);
        let result = self.repository.get_child_name(&path);
        self.clean_output(&result)
    }
}
