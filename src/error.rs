use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // IOまわりのエラー (レポートのファイル出力など)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // アドレス文字列が指定された基数の形式に合わない
    // 2番目の要素は期待していた基数名 ("DEC"など)
    #[error("Invalid {1} address: {0}")]
    InvalidAddress(String, &'static str),

    // 数値入力が有効な範囲の外
    // サブネット数0、プレフィックス長33以上、スーパーネット対象が2未満など
    #[error("Out of range: {0}")]
    OutOfRange(String),

    // 要求サブネット数がクラスの残りホストビットに収まらない
    #[error("Oversubscribed: {0}")]
    Oversubscribed(String),

    // CLI引数の組み合わせが不正だった場合など
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // JSONシリアライズの失敗
    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),
}
