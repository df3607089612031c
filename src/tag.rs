use serde::{Deserialize, Serialize};

/// A node of the tag namespace, addressed by its full path.
///
/// `value` is the last segment of `path` and is only ever derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    path: String,
    value: String,
}

impl Tag {
    pub fn from_path(path: impl Into<String>, separator: char) -> Self {
        let path = path.into();
        let value = path.rsplit(separator).next().unwrap_or_default().to_string();
        Self { path, value }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
