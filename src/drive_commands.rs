use std::sync::MutexGuard;

use crate::api_types::{ChildItemsRequest, DriveInfo, NewDriveRequest, TagItem};
use crate::config::drive;
use crate::drive::TagsDrive;
use crate::errors::AppResult;
use crate::registry::DriveRegistry;
use crate::tag_validator::validate_tag_path;
use crate::{AppError, AppState};

fn lock_drives(state: &AppState) -> AppResult<MutexGuard<'_, DriveRegistry>> {
    state
        .drives
        .lock()
        .map_err(|e| AppError::state_lock(format!("Drive state lock error: {e}")))
}

// ドライブ管理コマンド
pub fn new_drive(state: &AppState, request: NewDriveRequest) -> AppResult<DriveInfo> {
    let separator = request.separator.unwrap_or(drive::DEFAULT_SEPARATOR);
    let native_separator = request.native_separator.unwrap_or(drive::NATIVE_SEPARATOR);

    if request.name.trim().is_empty() {
        return Err(AppError::validation("name", "drive name must not be empty"));
    }
    if request.root.trim_end_matches(separator).is_empty() {
        return Err(AppError::validation("root", "drive root must not be empty"));
    }
    if separator == native_separator {
        return Err(AppError::validation(
            "separator",
            "separator and native separator must differ",
        ));
    }

    let mut drives = lock_drives(state)?;
    let tags_drive = TagsDrive::new(&request.name, &request.root, separator, native_separator);
    let mounted = drives.mount(tags_drive)?;

    Ok(DriveInfo::from(mounted))
}

pub fn remove_drive(state: &AppState, name: String) -> AppResult<DriveInfo> {
    let mut drives = lock_drives(state)?;
    let removed = drives.unmount(&name)?;

    Ok(DriveInfo::from(&removed))
}

pub fn get_drives(state: &AppState) -> AppResult<Vec<DriveInfo>> {
    let drives = lock_drives(state)?;

    Ok(drives.drives().iter().map(DriveInfo::from).collect())
}

// タグ操作コマンド
pub fn new_item(state: &AppState, path: Option<String>) -> AppResult<TagItem> {
    let mut drives = lock_drives(state)?;
    let path = drives.resolve(path.as_deref())?;
    let tags_drive = drives.drive_for_mut(&path)?;

    if let Err(e) = validate_tag_path(tags_drive.path_maker(), &path) {
        log::warn!("Rejected new item {path:?}: {e}");
        return Err(e);
    }

    let tag = tags_drive.add_tag(Some(&path));
    Ok(TagItem::from(&tag))
}

pub fn get_item(state: &AppState, path: Option<String>) -> AppResult<TagItem> {
    let drives = lock_drives(state)?;
    let path = drives.resolve(path.as_deref())?;
    let tags_drive = drives.drive_for(&path)?;

    tags_drive
        .get_tag(Some(&path))
        .map(|tag| TagItem::from(&tag))
        .ok_or_else(|| AppError::path_not_found(path))
}

pub fn get_child_items(state: &AppState, request: ChildItemsRequest) -> AppResult<Vec<TagItem>> {
    let drives = lock_drives(state)?;
    let path = drives.resolve(request.path.as_deref())?;
    let tags_drive = drives.drive_for(&path)?;

    if !tags_drive.item_exists(Some(&path)) {
        return Err(AppError::path_not_found(path));
    }

    let tags = tags_drive.get_child_tags(Some(&path), request.effective_depth());
    Ok(tags.iter().map(TagItem::from).collect())
}

/// 未知のドライブや解決できない相対パスは存在しないものとして扱う
pub fn test_path(state: &AppState, path: Option<String>) -> AppResult<bool> {
    let drives = lock_drives(state)?;
    let Ok(path) = drives.resolve(path.as_deref()) else {
        return Ok(false);
    };

    Ok(drives
        .drive_for(&path)
        .map(|tags_drive| tags_drive.item_exists(Some(&path)))
        .unwrap_or(false))
}

// パス操作コマンド
pub fn join_path(state: &AppState, parent: Option<String>, child: Option<String>) -> AppResult<String> {
    let drives = lock_drives(state)?;

    // 子・親・現在位置の順にドライブを決定する
    let anchor = [child.as_deref(), parent.as_deref(), drives.location()]
        .into_iter()
        .flatten()
        .find(|candidate| drives.drive_for(candidate).is_ok())
        .ok_or_else(|| AppError::drive_not_found(parent.clone().unwrap_or_default()))?;
    let tags_drive = drives.drive_for(anchor)?;

    Ok(tags_drive.make_path(parent.as_deref(), child.as_deref()))
}

pub fn split_parent(state: &AppState, path: Option<String>) -> AppResult<String> {
    let drives = lock_drives(state)?;
    let path = drives.resolve(path.as_deref())?;
    let tags_drive = drives.drive_for(&path)?;

    Ok(tags_drive.get_parent_path(Some(&path)))
}

pub fn split_leaf(state: &AppState, path: Option<String>) -> AppResult<String> {
    let drives = lock_drives(state)?;
    let path = drives.resolve(path.as_deref())?;
    let tags_drive = drives.drive_for(&path)?;

    Ok(tags_drive.get_child_name(Some(&path)))
}

// 現在位置コマンド
pub fn set_location(state: &AppState, path: Option<String>) -> AppResult<String> {
    let mut drives = lock_drives(state)?;

    drives.set_location(path.as_deref())
}

pub fn get_location(state: &AppState) -> AppResult<Option<String>> {
    let drives = lock_drives(state)?;

    Ok(drives.location().map(str::to_string))
}
