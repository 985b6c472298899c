use once_cell::sync::Lazy;
use std::str::FromStr;

/// オクテットの入出力に使う基数
/// 内部表現は常に10進のIpv4Addrで、基数が影響するのは文字列との変換だけ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralBase {
    Dec,
    Bin,
    Oct,
    Hex,
}

impl FromStr for NumeralBase {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dec" => Ok(NumeralBase::Dec),
            "bin" => Ok(NumeralBase::Bin),
            "oct" => Ok(NumeralBase::Oct),
            "hex" => Ok(NumeralBase::Hex),
            _ => Err("Invalid numeral base. Must be 'dec', 'bin', 'oct' or 'hex'"),
        }
    }
}

impl NumeralBase {
    /// エラーメッセージやレポートで使うラベル用
    pub fn as_str(self) -> &'static str {
        match self {
            NumeralBase::Dec => "DEC",
            NumeralBase::Bin => "BIN",
            NumeralBase::Oct => "OCT",
            NumeralBase::Hex => "HEX",
        }
    }

    /// from_str_radix へ渡す基数値
    pub fn radix(self) -> u32 {
        match self {
            NumeralBase::Dec => 10,
            NumeralBase::Bin => 2,
            NumeralBase::Oct => 8,
            NumeralBase::Hex => 16,
        }
    }
}

/// 出力形式を管理するためのenum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text, // デフォルトは Text
        }
    }
}

static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| std::env::var("SUBNET_SCOPE_DEBUG").is_ok());

/// SUBNET_SCOPE_DEBUG が設定されているときだけ診断メッセージを表示する
pub fn debug_log(msg: impl AsRef<str>) {
    if *DEBUG_ENABLED {
        eprintln!("[debug] {}", msg.as_ref());
    }
}
