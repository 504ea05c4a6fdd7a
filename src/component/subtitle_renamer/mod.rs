//! 字幕整理元件
//!
//! 將電影資料夾中 Subs 子資料夾內的字幕檔案搬移到電影同層，
//! 並以電影名稱為前綴重新命名，讓媒體伺服器能依檔名配對

mod main;
mod movie_locator;
mod sub_matcher;

pub use main::{BatchResult, SubtitleRenamer};
pub use movie_locator::{MovieLocateError, locate_movie};
pub use sub_matcher::{RenamePlan, find_subtitles, plan_renames};
