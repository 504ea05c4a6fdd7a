//! 程式初始化

use env_logger::Env;

/// 初始化日誌系統，輸出層級由 `RUST_LOG` 環境變數控制
pub fn init() {
    env_logger::Builder::from_env(Env::default())
        .format_timestamp_secs()
        .init();
}
