use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 電影檔案大小下限（300 MiB），小於等於此大小的檔案不視為電影本體
pub const MIN_MOVIE_SIZE: u64 = 300 * 1024 * 1024;

/// 字幕子資料夾的固定名稱
pub const SUBS_DIR_NAME: &str = "Subs";

/// 認可的副檔名清單，由編譯時嵌入的 JSON 載入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTypeTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
    #[serde(rename = "SUBTITLE_FILE")]
    pub subtitle_file: Vec<String>,
}

impl FileTypeTable {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_file.iter().cloned().collect()
    }

    #[must_use]
    pub fn subtitle_extensions_set(&self) -> HashSet<String> {
        self.subtitle_file.iter().cloned().collect()
    }

    /// 判斷路徑是否具有認可的電影副檔名（區分大小寫）
    #[must_use]
    pub fn is_video_extension(&self, path: &Path) -> bool {
        let video_extensions = self.video_extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| video_extensions.contains(&format!(".{ext}")))
    }

    /// 判斷路徑是否具有認可的字幕副檔名（區分大小寫）
    #[must_use]
    pub fn is_subtitle_extension(&self, path: &Path) -> bool {
        let subtitle_extensions = self.subtitle_extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| subtitle_extensions.contains(&format!(".{ext}")))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub file_type_table: FileTypeTable,
}
