//! 整合測試 - 透過程式庫 API 驗證完整的字幕整理流程

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use subtitle_organize::component::subtitle_renamer::{
    MovieLocateError, SubtitleRenamer, find_subtitles, locate_movie, plan_renames,
};
use subtitle_organize::config::{Config, MIN_MOVIE_SIZE, SUBS_DIR_NAME};
use tempfile::TempDir;

fn write_file_with_size(path: &Path, size: u64) {
    let file = fs::File::create(path).unwrap();
    file.set_len(size).unwrap();
}

/// 建立一個電影資料夾：電影檔案加上 Subs 子資料夾中的字幕
fn make_movie_dir(base: &Path, name: &str, movie: &str, subtitles: &[&str]) {
    let dir = base.join(name);
    fs::create_dir_all(dir.join(SUBS_DIR_NAME)).unwrap();
    write_file_with_size(&dir.join(movie), MIN_MOVIE_SIZE + 1);
    for subtitle in subtitles {
        fs::write(dir.join(SUBS_DIR_NAME).join(subtitle), "subtitle").unwrap();
    }
}

fn make_renamer(dry_run: bool) -> SubtitleRenamer {
    SubtitleRenamer::new(
        Config::new().unwrap(),
        Arc::new(AtomicBool::new(false)),
        dry_run,
    )
}

/// 測試 1: 定位加配對的完整管線，不實際改動檔案
#[test]
fn test_locate_and_plan_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    make_movie_dir(base, "Foo", "Movie.Name.mkv", &["2_English.srt", "3_French.srt"]);
    let movie_dir = base.join("Foo");

    let config = Config::new().unwrap();
    let movie = locate_movie(&movie_dir, &config.file_type_table).unwrap();
    assert_eq!(movie, movie_dir.join("Movie.Name.mkv"));

    let subtitles = find_subtitles(&movie_dir, &config.file_type_table);
    let plans = plan_renames(&movie, &subtitles);

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].to, movie_dir.join("Movie.Name.2_English.srt"));
    assert_eq!(plans[1].to, movie_dir.join("Movie.Name.3_French.srt"));

    // 計畫本身不碰檔案系統
    assert!(movie_dir.join(SUBS_DIR_NAME).join("2_English.srt").exists());
    assert!(!movie_dir.join("Movie.Name.2_English.srt").exists());
}

/// 測試 2: 單一電影資料夾的重新命名
#[test]
fn test_single_movie_dir_rename() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    make_movie_dir(base, "Foo", "Movie.Name.mkv", &["2_English.srt", "3_French.srt"]);
    let movie_dir = base.join("Foo");

    let renamed = make_renamer(false).run_movie_dir(&movie_dir).unwrap();

    assert_eq!(renamed, 2);
    assert!(movie_dir.join("Movie.Name.2_English.srt").exists());
    assert!(movie_dir.join("Movie.Name.3_French.srt").exists());
    assert!(movie_dir.join("Movie.Name.mkv").exists());
    assert!(!movie_dir.join(SUBS_DIR_NAME).join("2_English.srt").exists());
}

/// 測試 3: 預覽模式不改動檔案系統
#[test]
fn test_dry_run_keeps_filesystem_identical() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    make_movie_dir(base, "Foo", "Movie.mkv", &["2_English.srt", "track.idx"]);
    let movie_dir = base.join("Foo");

    let before: Vec<_> = walk_paths(&movie_dir);
    let renamed = make_renamer(true).run_movie_dir(&movie_dir).unwrap();
    let after: Vec<_> = walk_paths(&movie_dir);

    assert_eq!(renamed, 2);
    assert_eq!(before, after);
}

fn walk_paths(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut paths: Vec<_> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .map(walkdir::DirEntry::into_path)
        .collect();
    paths.sort();
    paths
}

/// 測試 4: 重複執行時第二次是無操作
#[test]
fn test_second_run_finds_nothing_to_rename() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    make_movie_dir(base, "Foo", "Movie.mkv", &["2_English.srt"]);
    let movie_dir = base.join("Foo");

    let renamer = make_renamer(false);
    assert_eq!(renamer.run_movie_dir(&movie_dir).unwrap(), 1);

    // 字幕已搬離 Subs，第二次執行沒有東西可以處理
    assert_eq!(renamer.run_movie_dir(&movie_dir).unwrap(), 0);
    assert!(movie_dir.join("Movie.2_English.srt").exists());
}

/// 測試 5: 批次模式隔離單一資料夾的定位失敗
#[test]
fn test_batch_isolates_locate_failures() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();

    make_movie_dir(base, "First", "First.Movie.mkv", &["2_English.srt"]);
    make_movie_dir(base, "Second", "Second.Movie.mp4", &["3_French.srt"]);
    // 兩個合格的電影檔案，定位失敗
    make_movie_dir(base, "Third", "cut_a.mkv", &["x.srt"]);
    write_file_with_size(&base.join("Third/cut_b.mkv"), MIN_MOVIE_SIZE + 1);

    let result = make_renamer(false).run_all_movies(base).unwrap();

    assert_eq!(result.directories_processed, 2);
    assert_eq!(result.subtitles_renamed, 2);
    assert_eq!(result.directories_skipped, 1);

    assert!(base.join("First/First.Movie.2_English.srt").exists());
    assert!(base.join("Second/Second.Movie.3_French.srt").exists());
    assert!(base.join("Third").join(SUBS_DIR_NAME).join("x.srt").exists());
}

/// 測試 6: 單一電影模式的定位失敗會往外傳遞
#[test]
fn test_direct_mode_propagates_failure() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::create_dir(base.join("OnlySample")).unwrap();
    write_file_with_size(&base.join("OnlySample/sample.mkv"), 10 * 1024 * 1024);

    let err = make_renamer(false)
        .run_movie_dir(&base.join("OnlySample"))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MovieLocateError>(),
        Some(MovieLocateError::NotFound(_))
    ));
}

/// 測試 7: 沒有 Subs 子資料夾的電影資料夾是合法的無操作
#[test]
fn test_movie_without_subs_directory() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path();
    fs::create_dir(base.join("Bare")).unwrap();
    write_file_with_size(&base.join("Bare/Movie.ts"), MIN_MOVIE_SIZE + 1);

    let renamed = make_renamer(false).run_movie_dir(&base.join("Bare")).unwrap();
    assert_eq!(renamed, 0);
}
