// API型定義 - TypeScript自動生成対応
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::drive::TagsDrive;
use crate::tag::Tag;

// =============================================================================
// Core Domain Types
// =============================================================================

/// 一覧表示用のタグ項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TagItem {
    pub path: String,
    pub value: String,
    pub is_container: bool,
}

impl From<&Tag> for TagItem {
    fn from(tag: &Tag) -> Self {
        Self {
            path: tag.path().to_string(),
            value: tag.value().to_string(),
            is_container: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DriveInfo {
    pub name: String,
    pub root: String,
    pub separator: String,
    pub tag_count: usize,
}

impl From<&TagsDrive> for DriveInfo {
    fn from(drive: &TagsDrive) -> Self {
        Self {
            name: drive.name().to_string(),
            root: drive.display_root(),
            separator: drive.path_maker().separator().to_string(),
            tag_count: drive.tag_count(),
        }
    }
}

// =============================================================================
// API Request/Response Types
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewDriveRequest {
    pub name: String,
    pub root: String,
    pub separator: Option<char>,
    pub native_separator: Option<char>,
}

/// `recurse = false` は直下の子のみ。`recurse = true` の場合、
/// `depth = None` は格納パスをすべて返し、`depth = Some(n)` は `n` 階層下で止める
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChildItemsRequest {
    pub path: Option<String>,
    pub recurse: bool,
    pub depth: Option<u32>,
}

impl ChildItemsRequest {
    pub fn effective_depth(&self) -> Option<u32> {
        if self.recurse {
            self.depth
        } else {
            Some(0)
        }
    }
}

// =============================================================================
// Schema Generation Helpers
// =============================================================================

/// TypeScript型定義を生成するヘルパー関数
pub fn generate_typescript_bindings() -> Vec<String> {
    vec![
        TagItem::decl(),
        DriveInfo::decl(),
        NewDriveRequest::decl(),
        ChildItemsRequest::decl(),
    ]
}

/// JSON Schemaを生成するヘルパー関数
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    use schemars::schema_for;

    let schema = schema_for!(TagItem);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_item_from_tag() {
        let tag = Tag::from_path("Tags:/Author/Gordon Freeman", '/');

        let item = TagItem::from(&tag);

        assert_eq!(item.path, "Tags:/Author/Gordon Freeman");
        assert_eq!(item.value, "Gordon Freeman");
        assert!(item.is_container);
    }

    #[test]
    fn test_tag_item_serializes_camel_case() {
        let item = TagItem::from(&Tag::from_path("Tags:/People", '/'));

        let json = serde_json::to_string(&item).unwrap();

        assert_eq!(
            json,
            r#"{"path":"Tags:/People","value":"People","isContainer":true}"#
        );
    }

    #[test]
    fn test_effective_depth() {
        let flat = ChildItemsRequest {
            path: None,
            recurse: false,
            depth: Some(3),
        };
        let unlimited = ChildItemsRequest {
            recurse: true,
            ..Default::default()
        };
        let limited = ChildItemsRequest {
            recurse: true,
            depth: Some(2),
            ..Default::default()
        };

        assert_eq!(flat.effective_depth(), Some(0));
        assert_eq!(unlimited.effective_depth(), None);
        assert_eq!(limited.effective_depth(), Some(2));
    }

    #[test]
    fn test_child_items_request_deserializes_missing_fields() {
        let request: ChildItemsRequest =
            serde_json::from_str(r#"{"path":"Tags:/Author","recurse":true}"#).unwrap();

        assert_eq!(request.path.as_deref(), Some("Tags:/Author"));
        assert_eq!(request.effective_depth(), None);
    }

    #[test]
    fn test_generated_schemas_mention_fields() {
        let bindings = generate_typescript_bindings();
        assert_eq!(bindings.len(), 4);
        assert!(bindings[0].contains("isContainer"));

        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("TagItem"));
        assert!(schema.contains("isContainer"));
    }
}
