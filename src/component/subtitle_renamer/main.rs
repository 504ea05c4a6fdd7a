//! 字幕整理主模組
//!
//! 協調電影定位、字幕配對與重新命名的整體流程

use super::movie_locator::{MovieLocateError, locate_movie};
use super::sub_matcher::{RenamePlan, find_subtitles, plan_renames};
use crate::config::Config;
use crate::tools::validate_directory_exists;
use anyhow::{Context, Result};
use console::style;
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 字幕整理元件
pub struct SubtitleRenamer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
    dry_run: bool,
}

/// 批次處理結果統計
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功處理的電影資料夾數
    pub directories_processed: usize,
    /// 重新命名的字幕檔案數
    pub subtitles_renamed: usize,
    /// 電影定位失敗而跳過的資料夾數
    pub directories_skipped: usize,
}

impl SubtitleRenamer {
    #[must_use]
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>, dry_run: bool) -> Self {
        Self {
            config,
            shutdown_signal,
            dry_run,
        }
    }

    /// 處理單一電影資料夾，回傳重新命名的字幕數
    ///
    /// 定位電影、配對字幕並逐筆重新命名。沒有字幕時什麼都不做。
    /// 任何失敗都往外傳遞，由呼叫端決定是否攔截。
    pub fn run_movie_dir(&self, directory: &Path) -> Result<usize> {
        validate_directory_exists(directory)?;

        let movie = locate_movie(directory, &self.config.file_type_table)?;
        info!("定位到電影: {}", movie.display());

        let subtitles = find_subtitles(directory, &self.config.file_type_table);
        let plans = plan_renames(&movie, &subtitles);

        if plans.is_empty() {
            info!("在 {} 中沒有需要處理的字幕", directory.display());
            return Ok(0);
        }

        for plan in &plans {
            self.apply_rename(plan)?;
        }

        Ok(plans.len())
    }

    /// 處理包含多個電影資料夾的上層資料夾
    ///
    /// 逐一處理每個子資料夾，非資料夾的項目直接略過。
    /// 電影定位失敗只回報並跳過該資料夾；其他錯誤會中止整個批次。
    pub fn run_all_movies(&self, container: &Path) -> Result<BatchResult> {
        validate_directory_exists(container)?;

        info!("開始批次處理: {}", container.display());

        let entries = fs::read_dir(container)
            .with_context(|| format!("無法讀取資料夾: {}", container.display()))?;

        let mut result = BatchResult::default();

        for entry in entries {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                break;
            }

            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("讀取資料夾項目失敗: {e}");
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            match self.run_movie_dir(&path) {
                Ok(renamed) => {
                    result.directories_processed += 1;
                    result.subtitles_renamed += renamed;
                }
                Err(e) if e.downcast_ref::<MovieLocateError>().is_some() => {
                    eprintln!("{} {e}", style("錯誤:").red().bold());
                    result.directories_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        self.display_summary(&result);

        Ok(result)
    }

    /// 套用單筆重新命名（預覽模式只輸出不改動）
    fn apply_rename(&self, plan: &RenamePlan) -> Result<()> {
        println!("{} -> {}", plan.from.display(), plan.to.display());

        if self.dry_run {
            return Ok(());
        }

        fs::rename(&plan.from, &plan.to).with_context(|| {
            format!(
                "重新命名失敗: {} -> {}",
                plan.from.display(),
                plan.to.display()
            )
        })
    }

    fn display_summary(&self, result: &BatchResult) {
        println!();
        println!("{}", style("=== 處理結果 ===").cyan().bold());
        if self.dry_run {
            println!("{}", style("(預覽模式，未實際重新命名)").yellow());
        }
        println!(
            "  已處理資料夾: {} 個",
            style(result.directories_processed).green()
        );
        println!(
            "  重新命名字幕: {} 個",
            style(result.subtitles_renamed).green()
        );
        if result.directories_skipped > 0 {
            println!(
                "  已跳過資料夾: {} 個",
                style(result.directories_skipped).yellow()
            );
        }

        info!(
            "批次處理完成 - 處理: {}, 重新命名: {}, 跳過: {}",
            result.directories_processed, result.subtitles_renamed, result.directories_skipped
        );
    }
}
