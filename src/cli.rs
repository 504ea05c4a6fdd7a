//! 命令列介面定義

use clap::Parser;
use std::path::PathBuf;

/// 搬移並重新命名字幕檔案，讓媒體伺服器能依檔名配對字幕
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// 包含多個電影資料夾的上層資料夾，每個子資料夾都以 --movie
    /// 的方式處理；不給值時視為目前資料夾
    #[arg(
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = ".",
        action = clap::ArgAction::Append
    )]
    pub all_movies: Vec<PathBuf>,

    /// 包含一部電影與字幕檔案的資料夾；不給值時視為目前資料夾
    #[arg(
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = ".",
        action = clap::ArgAction::Append
    )]
    pub movie: Vec<PathBuf>,

    /// 只顯示將進行的重新命名，不實際改動檔案
    #[arg(long)]
    pub dry_run: bool,
}
