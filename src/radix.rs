use crate::common::NumeralBase;
use crate::error::AppError;
use std::net::Ipv4Addr;

/// ドット区切り4オクテットのアドレス文字列を指定基数でパースする。
/// 部分的な成功はなく、1箇所でも規則に反していれば全体をエラーにする。
pub fn parse_address(text: &str, base: NumeralBase) -> Result<Ipv4Addr, AppError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(invalid(text, base));
    }

    let mut octets = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        octets[i] = parse_octet(part, base).ok_or_else(|| invalid(text, base))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// アドレスを指定基数の文字列へ変換する。
/// BINは8桁、OCTは3桁、HEXは大文字2桁に揃え、DECは桁詰めしない。
/// どの基数でもparse_addressと往復して元のアドレスに戻る。
pub fn format_address(addr: Ipv4Addr, base: NumeralBase) -> String {
    addr.octets()
        .iter()
        .map(|o| format_octet(*o, base))
        .collect::<Vec<_>>()
        .join(".")
}

/// 1オクテット分の検証と変換。
/// 基数ごとの文字種を先に確認するため、符号付きや混入文字はfrom_str_radixに渡る前に落ちる。
fn parse_octet(part: &str, base: NumeralBase) -> Option<u8> {
    let well_formed = match base {
        NumeralBase::Dec => !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()),
        NumeralBase::Bin => part.len() == 8 && part.bytes().all(|b| matches!(b, b'0' | b'1')),
        NumeralBase::Oct => !part.is_empty() && part.bytes().all(|b| matches!(b, b'0'..=b'7')),
        NumeralBase::Hex => part.len() == 2 && part.bytes().all(|b| b.is_ascii_hexdigit()),
    };
    if !well_formed {
        return None;
    }

    // 長大な桁列はfrom_str_radix側の桁あふれErrで落ちる
    let value = u32::from_str_radix(part, base.radix()).ok()?;
    u8::try_from(value).ok()
}

fn format_octet(octet: u8, base: NumeralBase) -> String {
    match base {
        NumeralBase::Dec => octet.to_string(),
        NumeralBase::Bin => format!("{octet:08b}"),
        NumeralBase::Oct => format!("{octet:03o}"),
        NumeralBase::Hex => format!("{octet:02X}"),
    }
}

fn invalid(text: &str, base: NumeralBase) -> AppError {
    AppError::InvalidAddress(text.to_string(), base.as_str())
}
