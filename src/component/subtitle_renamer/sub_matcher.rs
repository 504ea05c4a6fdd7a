//! 字幕配對器
//!
//! 掃描 Subs 子資料夾中的字幕檔案，並計算以電影名稱為前綴的新路徑

use crate::config::{FileTypeTable, SUBS_DIR_NAME};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 單筆重新命名計畫：來源字幕路徑與目標路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// 找出電影資料夾下 Subs 子資料夾中的所有字幕檔案（不進入更深層）
///
/// Subs 不存在或不是資料夾時回傳空清單，這不是錯誤狀態。
/// 結果依路徑排序，讓每次執行的處理順序一致。
#[must_use]
pub fn find_subtitles(movie_dir: &Path, file_type_table: &FileTypeTable) -> Vec<PathBuf> {
    let subs_dir = movie_dir.join(SUBS_DIR_NAME);
    if !subs_dir.is_dir() {
        return Vec::new();
    }

    let mut subtitles: Vec<PathBuf> = WalkDir::new(&subs_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| file_type_table.is_subtitle_extension(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    subtitles.sort();
    subtitles
}

/// 計算字幕檔案的重新命名計畫
///
/// 目標路徑為 `{電影資料夾}/{電影主檔名}.{字幕主檔名}.{字幕副檔名}`，
/// 讓字幕成為電影檔案同層的附屬檔案，媒體伺服器才能依檔名配對。
/// 純函式，不碰檔案系統。
#[must_use]
pub fn plan_renames(movie: &Path, subtitles: &[PathBuf]) -> Vec<RenamePlan> {
    let movie_dir = movie.parent().unwrap_or_else(|| Path::new(""));
    let movie_stem = movie.file_stem().unwrap_or_default().to_string_lossy();

    subtitles
        .iter()
        .filter_map(|sub| {
            let sub_stem = sub.file_stem()?.to_string_lossy();
            let sub_ext = sub.extension()?.to_string_lossy();
            Some(RenamePlan {
                from: sub.clone(),
                to: movie_dir.join(format!("{movie_stem}.{sub_stem}.{sub_ext}")),
            })
        })
        .collect()
}
