// DriveRegistry - マウント中のドライブと現在位置の管理
// ドライブごとにリポジトリを1つ所有し、アンマウント時に破棄する

use crate::drive::TagsDrive;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct DriveRegistry {
    drives: Vec<TagsDrive>,
    location: Option<String>,
}

impl DriveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drives(&self) -> &[TagsDrive] {
        &self.drives
    }

    pub fn mount(&mut self, drive: TagsDrive) -> AppResult<&TagsDrive> {
        if self.drives.iter().any(|d| d.name() == drive.name()) {
            return Err(AppError::drive_already_exists(drive.name()));
        }
        if self.drives.iter().any(|d| d.root() == drive.root()) {
            return Err(AppError::drive_already_exists(drive.root()));
        }

        log::info!("Mounted drive {} at {}", drive.name(), drive.display_root());
        let index = self.drives.len();
        self.drives.push(drive);
        Ok(&self.drives[index])
    }

    pub fn unmount(&mut self, name: &str) -> AppResult<TagsDrive> {
        let index = self
            .drives
            .iter()
            .position(|d| d.name() == name)
            .ok_or_else(|| AppError::drive_not_found(name))?;
        let drive = self.drives.remove(index);

        if self.location.as_deref().is_some_and(|l| drive.owns_path(l)) {
            self.location = None;
        }

        log::info!("Unmounted drive {} ({} tags dropped)", drive.name(), drive.tag_count());
        Ok(drive)
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// 既存パスのみ現在位置に設定できる
    pub fn set_location(&mut self, path: Option<&str>) -> AppResult<String> {
        let path = self.resolve(path)?;
        let drive = self.drive_for(&path)?;
        if !drive.item_exists(Some(&path)) {
            return Err(AppError::path_not_found(path));
        }

        let location = drive.make_path(Some(&path), None);
        self.location = Some(location.clone());
        Ok(location)
    }

    /// 入力パスをルート付きパスに解決する
    /// ルート付きならドライブの `fix_root` で補正し、それ以外は現在位置に連結する
    pub fn resolve(&self, path: Option<&str>) -> AppResult<String> {
        let path = path.unwrap_or_default();

        if let Some(drive) = self.drives.iter().find(|d| d.owns_path(path)) {
            return Ok(drive.path_maker().fix_root(path));
        }

        let location = self
            .location
            .as_deref()
            .ok_or_else(|| AppError::path_not_found(path))?;
        let drive = self.drive_for(location)?;
        Ok(drive.make_path(Some(location), Some(path)))
    }

    pub fn drive_for(&self, path: &str) -> AppResult<&TagsDrive> {
        self.drives
            .iter()
            .find(|d| d.owns_path(path))
            .ok_or_else(|| AppError::drive_not_found(path))
    }

    pub fn drive_for_mut(&mut self, path: &str) -> AppResult<&mut TagsDrive> {
        self.drives
            .iter_mut()
            .find(|d| d.owns_path(path))
            .ok_or_else(|| AppError::drive_not_found(path))
    }
}
