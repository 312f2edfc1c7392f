#![cfg(feature = "serial")]

//! 共通: 実機テスト用ヘルパー
//!
//! このファイルは `--features serial` でコンパイルされる実機テストに
//! 共通で使える関数を提供します。主な目的はテスト中に PN532 を安全に
//! open/initialize して、モジュールが無い環境（CI 等）では `Ok(None)` を
//! 返すことです。ポートは環境変数 `DFRNFC_PORT` で指定します
//! （未設定なら `/dev/ttyUSB0`）。

use dfrnfc::reader::{Initialized, Reader};
use dfrnfc::{Error, Result};

/// PN532 を開いて初期化した `Reader<Initialized>` を返す。
///
/// - Ok(Some(reader)) : モジュールが見つかり初期化に成功
/// - Ok(None) : ポートが開けない（CI 等では許容）
/// - Err(e) : その他の致命的なエラー
pub fn open_and_initialize_reader() -> Result<Option<Reader<Initialized>>> {
    // RUST_LOG=trace で送受信フレームを確認できる
    let _ = env_logger::builder().is_test(true).try_init();

    let port = std::env::var("DFRNFC_PORT").unwrap_or_else(|_| "/dev/ttyUSB0".to_string());
    match Reader::open(&port) {
        Ok(reader) => Ok(Some(reader.initialize()?)),
        Err(Error::Serial(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
