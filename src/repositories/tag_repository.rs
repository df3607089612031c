// TagRepository - タグパス集合の責務を分離
// フラットなパス一覧だけを保持し、階層は前方一致で判定する

use std::collections::HashSet;

use crate::path_maker::PathMaker;
use crate::tag::Tag;

/// タグ操作の責務を持つRepository trait
pub trait TagRepository {
    fn add_tag(&mut self, path: &str) -> Tag;
    fn get_tag(&self, path: &str) -> Option<Tag>;
    fn item_exists(&self, path: &str) -> bool;
    /// `depth` が `None` なら配下の格納パスをそのまま返し、
    /// `Some(n)` なら `path` から `n + 1` 階層で切り詰める
    fn get_child_tags(&self, path: &str, depth: Option<u32>) -> Vec<Tag>;

    fn make_path(&self, parent: &str, child: &str) -> String;
    fn get_parent_path(&self, path: &str) -> String;
    fn get_child_name(&self, path: &str) -> String;
}

/// メモリ上のパス一覧によるTagRepository実装
#[derive(Debug, Clone)]
pub struct InMemoryTagRepository {
    path_maker: PathMaker,
    tags: Vec<String>,
}

impl InMemoryTagRepository {
    pub fn new(separator: char, root: impl Into<String>) -> Self {
        Self::with_path_maker(PathMaker::new(separator, root))
    }

    pub fn with_path_maker(path_maker: PathMaker) -> Self {
        Self {
            path_maker,
            tags: Vec::new(),
        }
    }

    /// 格納済みのパス（挿入順、重複あり）
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn separator(&self) -> char {
        self.path_maker.separator()
    }

    fn trim(&self, path: &str) -> String {
        path.trim_end_matches(self.separator()).to_string()
    }

    fn is_root(&self, trimmed: &str) -> bool {
        trimmed == self.path_maker.clean_root()
    }

    fn build_tag(&self, path: String) -> Tag {
        Tag::from_path(path, self.separator())
    }

    /// `position` 以降 `depth + 1` 個目の区切りで `tag` を切る
    fn partial_path<'t>(&self, tag: &'t str, position: usize, depth: u32) -> &'t str {
        let mut position = position;
        let mut remaining = depth;
        loop {
            match self.next_separator(tag, position) {
                None => return tag,
                Some(found) if remaining == 0 => return &tag[..found],
                Some(found) => {
                    remaining -= 1;
                    position = found;
                }
            }
        }
    }

    // 検索は position の次の文字から始める
    fn next_separator(&self, tag: &str, position: usize) -> Option<usize> {
        let skipped = tag.get(position..)?.chars().next()?;
        let start = position + skipped.len_utf8();
        tag[start..].find(self.separator()).map(|index| start + index)
    }
}

impl TagRepository for InMemoryTagRepository {
    fn add_tag(&mut self, path: &str) -> Tag {
        let path = self.trim(path);

        // 空文字とルートは暗黙に存在するため格納しない
        if path.is_empty() || self.is_root(&path) {
            log::debug!("Skipping implicit path {path:?}");
        } else {
            self.tags.push(path.clone());
        }

        self.build_tag(path)
    }

    fn get_tag(&self, path: &str) -> Option<Tag> {
        let path = self.trim(path);
        if self.tags.contains(&path) {
            Some(self.build_tag(path))
        } else {
            None
        }
    }

    fn item_exists(&self, path: &str) -> bool {
        let path = self.trim(path);
        if self.is_root(&path) {
            return true;
        }

        let prefix = format!("{}{}", path, self.separator());
        self.tags
            .iter()
            .any(|tag| *tag == path || tag.starts_with(&prefix))
    }

    fn get_child_tags(&self, path: &str, depth: Option<u32>) -> Vec<Tag> {
        let prefix = format!("{}{}", self.trim(path), self.separator());
        let mut seen = HashSet::new();

        self.tags
            .iter()
            .filter(|tag| tag.starts_with(&prefix))
            .map(|tag| match depth {
                None => tag.as_str(),
                Some(depth) => self.partial_path(tag, prefix.len(), depth),
            })
            .filter(|child| seen.insert(*child))
            .map(|child| self.build_tag(child.to_string()))
            .collect()
    }

    fn make_path(&self, parent: &str, child: &str) -> String {
        self.path_maker.make_path(parent, child)
    }

    fn get_parent_path(&self, path: &str) -> String {
        self.path_maker.get_parent_path(path)
    }

    fn get_child_name(&self, path: &str) -> String {
        self.path_maker.get_child_name(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_values::*;

    fn create_test_repository() -> InMemoryTagRepository {
        let mut repo = InMemoryTagRepository::new('/', "Tags:");
        for path in SCENARIO_TAGS {
            repo.add_tag(path);
        }
        repo
    }

    fn paths(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(Tag::path).collect()
    }

    #[test]
    fn test_add_tag_returns_trimmed_tag() {
        let mut repo = InMemoryTagRepository::new('/', "Tags:");

        let tag = repo.add_tag("Tags:/Author/Gordon Freeman//");

        assert_eq!(tag.path(), GORDON_FREEMAN);
        assert_eq!(tag.value(), "Gordon Freeman");
        assert_eq!(repo.tags(), [GORDON_FREEMAN.to_string()]);
    }

    #[test]
    fn test_add_tag_keeps_duplicates() {
        let mut repo = InMemoryTagRepository::new('/', "Tags:");
        repo.add_tag(THE_G_MAN);
        repo.add_tag(THE_G_MAN);

        assert_eq!(repo.len(), 2);
        assert_eq!(paths(&repo.get_child_tags("Tags:", None)), vec![THE_G_MAN]);
    }

    #[test]
    fn test_add_tag_does_not_store_root_or_empty() {
        let mut repo = InMemoryTagRepository::new('/', "Tags:");

        let root = repo.add_tag("Tags:/");
        let empty = repo.add_tag("//");

        assert_eq!(root.path(), "Tags:");
        assert_eq!(empty.path(), "");
        assert!(repo.is_empty());
    }

    #[test]
    fn test_get_existing_tag() {
        let repo = create_test_repository();

        let tag = repo.get_tag(GORDON_FREEMAN).expect("tag should exist");
        assert_eq!(tag.path(), GORDON_FREEMAN);
        assert_eq!(tag.value(), "Gordon Freeman");

        assert!(repo.get_tag("Tags:/Author/Gordon Freeman/").is_some());
    }

    #[test]
    fn test_get_tag_ignores_parent_partial_and_unknown() {
        let repo = create_test_repository();

        assert!(repo.get_tag("Tags:/Author").is_none());
        assert!(repo.get_tag("Tags:/Author/Gordon").is_none());
        assert!(repo.get_tag("Tags:/People/Gordon Freeman").is_none());
    }

    #[test]
    fn test_item_exists() {
        let repo = create_test_repository();

        assert!(repo.item_exists(GORDON_FREEMAN));
        assert!(repo.item_exists("Tags:/Author"));
        assert!(repo.item_exists("Tags:/Author/"));
        assert!(!repo.item_exists("Tags:/Author/Gordon"));
        assert!(!repo.item_exists("Tags:/Nobody"));
    }

    #[test]
    fn test_root_always_exists() {
        let empty = InMemoryTagRepository::new('/', "Tags:/");
        assert!(empty.item_exists("Tags:"));
        assert!(empty.item_exists("Tags:/"));
        assert!(!empty.item_exists("Tags:/Author"));

        let repo = create_test_repository();
        assert!(repo.item_exists("Tags:"));
    }

    #[test]
    fn test_empty_root_always_exists() {
        let mut repo = InMemoryTagRepository::new('/', "");
        repo.add_tag("Author/Gordon Freeman");

        assert!(repo.item_exists(""));
        assert!(repo.item_exists("/"));
        assert!(repo.item_exists("Author"));
        assert!(!repo.item_exists("People"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_separator_heavy_queries() {
        let repo = create_test_repository();

        assert!(repo.item_exists("Tags:///"));
        assert!(!repo.item_exists(""));
        assert!(!repo.item_exists("///"));
        assert_eq!(
            paths(&repo.get_child_tags("Tags:///", Some(0))),
            vec!["Tags:/Author", "Tags:/People"]
        );
        assert!(repo.get_child_tags("", None).is_empty());
        assert!(repo.get_child_tags("", Some(0)).is_empty());
        assert!(repo.get_child_tags("///", Some(1)).is_empty());
    }

    #[test]
    fn test_child_tags_recursive_lists_full_paths() {
        let repo = create_test_repository();

        let tags = repo.get_child_tags("Tags:", None);

        assert_eq!(paths(&tags), SCENARIO_TAGS.to_vec());
    }

    #[test]
    fn test_child_tags_depth_zero_lists_first_level() {
        let repo = create_test_repository();

        let tags = repo.get_child_tags("Tags:/", Some(0));

        assert_eq!(paths(&tags), vec!["Tags:/Author", "Tags:/People"]);
        assert_eq!(tags[0].value(), "Author");
        assert_eq!(tags[1].value(), "People");
    }

    #[test]
    fn test_child_tags_limited_recursion() {
        let repo = create_test_repository();

        let tags = repo.get_child_tags("Tags:", Some(1));

        assert_eq!(paths(&tags), vec![GORDON_FREEMAN, ADRIAN_SHEPHARD, THE_G_MAN]);
    }

    #[test]
    fn test_child_tags_deep_truncation() {
        let mut repo = InMemoryTagRepository::new('/', "Tags:");
        repo.add_tag("Tags:/A/B/C/D");
        repo.add_tag("Tags:/A/X");
        repo.add_tag("Tags:/A/B/C/E");

        assert_eq!(paths(&repo.get_child_tags("Tags:", Some(2))), vec!["Tags:/A/B/C", "Tags:/A/X"]);
        assert_eq!(
            paths(&repo.get_child_tags("Tags:", Some(3))),
            vec!["Tags:/A/B/C/D", "Tags:/A/X", "Tags:/A/B/C/E"]
        );
        assert_eq!(paths(&repo.get_child_tags("Tags:/A", Some(1))), vec!["Tags:/A/B/C", "Tags:/A/X"]);
    }

    #[test]
    fn test_child_tags_in_subfolder() {
        let repo = create_test_repository();

        assert_eq!(
            paths(&repo.get_child_tags("Tags:/Author", Some(0))),
            vec![GORDON_FREEMAN, ADRIAN_SHEPHARD]
        );
        assert_eq!(
            paths(&repo.get_child_tags("Tags:/Author/Adrian Shephard", Some(0))),
            vec![ADRIAN_SHEPHARD_OTHER]
        );
        assert!(repo.get_child_tags(GORDON_FREEMAN, None).is_empty());
    }

    #[test]
    fn test_child_tags_does_not_match_sibling_prefix() {
        let mut repo = InMemoryTagRepository::new('/', "Tags:");
        repo.add_tag("Tags:/Author/Gordon Freeman");
        repo.add_tag("Tags:/Authority/Combine");

        let tags = repo.get_child_tags("Tags:/Author", None);

        assert_eq!(paths(&tags), vec!["Tags:/Author/Gordon Freeman"]);
    }

    #[test]
    fn test_backslash_separator_repository() {
        let mut repo = InMemoryTagRepository::new('\\', "Tags:");
        repo.add_tag(r"Tags:\Author\Gordon Freeman");
        repo.add_tag(r"Tags:\People\The G-Man");

        assert!(repo.item_exists(r"Tags:\Author"));
        assert_eq!(
            paths(&repo.get_child_tags("Tags:", Some(0))),
            vec![r"Tags:\Author", r"Tags:\People"]
        );
    }

    #[test]
    fn test_path_wrappers_delegate_to_path_maker() {
        let repo = create_test_repository();

        assert_eq!(repo.make_path("Tags:/Tag1", "Tags:"), "Tags:/");
        assert_eq!(repo.get_parent_path(GORDON_FREEMAN), "Tags:/Author");
        assert_eq!(repo.get_child_name(THE_G_MAN), "The G-Man");
    }
}
