use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::style;
use log::{info, warn};
use subtitle_organize::cli::Cli;
use subtitle_organize::component::SubtitleRenamer;
use subtitle_organize::config::Config;
use subtitle_organize::init;
use subtitle_organize::signal::setup_shutdown_signal;

fn main() -> Result<()> {
    init::init();

    let cli = Cli::parse();

    // 沒有指定任何處理模式時顯示說明並以狀態碼 1 結束
    if cli.all_movies.is_empty() && cli.movie.is_empty() {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    match run(&cli) {
        Ok(()) => {
            info!("程式正常結束");
            Ok(())
        }
        Err(e) => {
            warn!("程式執行失敗: {e}");
            eprintln!("{} {e:#}", style("錯誤:").red().bold());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let shutdown_signal = setup_shutdown_signal()?;
    let config = Config::new()?;
    let renamer = SubtitleRenamer::new(config, shutdown_signal, cli.dry_run);

    if cli.dry_run {
        info!("預覽模式已啟用，不會改動任何檔案");
    }

    // 先處理批次模式，再處理單一電影模式；
    // 批次模式會攔截定位失敗，單一電影模式的失敗直接中止
    for container in &cli.all_movies {
        renamer.run_all_movies(container)?;
    }

    for directory in &cli.movie {
        renamer.run_movie_dir(directory)?;
    }

    Ok(())
}
