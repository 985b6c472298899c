use crate::error::AppError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// 汎用ヘッダー生成
pub fn make_header(now_str: &str, mode_label: &str) -> String {
    format!("# Generated at: {}\n# Mode: {}\n\n", now_str, mode_label)
}

/// レポートのファイル書き出し用の共通ヘルパー。
/// modeが"append"なら追記し、それ以外は上書きする。
pub fn write_report<P: AsRef<Path>>(path: P, content: &str, mode: &str) -> Result<(), AppError> {
    match mode {
        "append" => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(content.as_bytes())?;
        }
        _ => {
            // まるごと書き込む場合
            fs::write(path, content)?;
        }
    }
    Ok(())
}
