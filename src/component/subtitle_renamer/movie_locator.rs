//! 電影定位器
//!
//! 在電影資料夾中找出唯一符合條件的電影檔案

use crate::config::FileTypeTable;
use crate::tools::scan_movie_candidates;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 電影定位失敗的原因
#[derive(Debug, Error)]
pub enum MovieLocateError {
    /// 資料夾中沒有任何符合條件的電影檔案
    #[error("在 {} 中找不到任何電影檔案", .0.display())]
    NotFound(PathBuf),
    /// 資料夾中有多個符合條件的電影檔案，無法判斷哪個是電影本體
    #[error("在 {} 中找到多於一個電影檔案", .0.display())]
    Ambiguous(PathBuf),
}

/// 找出電影資料夾中唯一的電影檔案
///
/// 「一個資料夾恰好一部電影」是前置條件：零個或多個候選都視為
/// 定位失敗，不做大小或副檔名的優先挑選。
pub fn locate_movie(directory: &Path, file_type_table: &FileTypeTable) -> Result<PathBuf> {
    let mut candidates = scan_movie_candidates(directory, file_type_table)?;

    debug!(
        "在 {} 中掃描到 {} 個電影候選檔案",
        directory.display(),
        candidates.len()
    );

    match candidates.len() {
        0 => Err(MovieLocateError::NotFound(directory.to_path_buf()).into()),
        1 => Ok(candidates.remove(0).path),
        _ => Err(MovieLocateError::Ambiguous(directory.to_path_buf()).into()),
    }
}
