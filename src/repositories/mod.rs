// Repository Pattern実装
// タグパスの保持と階層検索の責務を分離

pub mod tag_repository;

pub use tag_repository::{InMemoryTagRepository, TagRepository};
