use crate::config::{FileTypeTable, MIN_MOVIE_SIZE};
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 電影候選檔案資訊
#[derive(Debug, Clone)]
pub struct MovieFileInfo {
    pub path: PathBuf,
    pub size: u64,
}

/// 掃描電影資料夾中符合條件的電影檔案（不進入子資料夾）
///
/// 條件：副檔名在認可清單中（區分大小寫），且檔案大小嚴格大於
/// `MIN_MOVIE_SIZE`。結果依路徑排序。
pub fn scan_movie_candidates(
    directory: &Path,
    file_type_table: &FileTypeTable,
) -> Result<Vec<MovieFileInfo>> {
    let mut candidates: Vec<MovieFileInfo> = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| file_type_table.is_video_extension(entry.path()))
        .filter_map(|entry| {
            let metadata = entry.metadata().ok()?;
            (metadata.len() > MIN_MOVIE_SIZE).then(|| MovieFileInfo {
                size: metadata.len(),
                path: entry.into_path(),
            })
        })
        .collect();

    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}
