use crate::error::AppError;
use std::net::Ipv4Addr;

pub const MAX_PREFIX_LEN: u8 = 32;

/// プレフィックス長から連続1のサブネットマスクを生成する。
/// 0〜32以外はエラー。
pub fn mask_from_prefix_len(prefix_len: u8) -> Result<Ipv4Addr, AppError> {
    if prefix_len > MAX_PREFIX_LEN {
        return Err(AppError::OutOfRange(format!(
            "prefix length must be between 0 and {}: {}",
            MAX_PREFIX_LEN, prefix_len
        )));
    }

    // /0のときシフト量が32になるため、u64経由でシフトしてから戻す
    let shift = u32::from(MAX_PREFIX_LEN - prefix_len);
    let bits = (u64::from(u32::MAX) >> shift) << shift;
    Ok(Ipv4Addr::from(bits as u32))
}

/// マスクの先頭1ビット数を数えてプレフィックス長に戻す。
/// mask_from_prefix_lenと両方向で無損失に往復できる。
pub fn prefix_len_of(mask: Ipv4Addr) -> u8 {
    u32::from(mask).count_ones() as u8
}

/// ホストビットをすべて0にしたネットワークIDを返す
pub fn network_id(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & u32::from(mask))
}

/// ホストビットをすべて1にしたブロードキャストアドレスを返す
pub fn broadcast_address(network_id: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(network_id) | !u32::from(mask))
}

/// ネットワークIDの次のアドレス。
/// /31と/32にはホスト領域が存在しないためNoneを返す。
pub fn first_host(network_id: Ipv4Addr, prefix_len: u8) -> Option<Ipv4Addr> {
    if prefix_len >= MAX_PREFIX_LEN - 1 {
        return None;
    }
    Some(Ipv4Addr::from(u32::from(network_id).checked_add(1)?))
}

/// ブロードキャストの1つ前のアドレス。
/// first_hostと対称で、/31と/32ではNone。
pub fn last_host(broadcast: Ipv4Addr, prefix_len: u8) -> Option<Ipv4Addr> {
    if prefix_len >= MAX_PREFIX_LEN - 1 {
        return None;
    }
    Some(Ipv4Addr::from(u32::from(broadcast).checked_sub(1)?))
}

/// 利用可能ホスト数 2^(ホストビット数) - 2。
/// /31と/32では負にせず0に丸める。
pub fn usable_host_count(mask: Ipv4Addr) -> u64 {
    let host_bits = u32::from(MAX_PREFIX_LEN) - u32::from(mask).count_ones();
    (1u64 << host_bits).saturating_sub(2)
}
