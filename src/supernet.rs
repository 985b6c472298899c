use crate::common::NumeralBase;
use crate::error::AppError;
use crate::mask::{self, MAX_PREFIX_LEN};
use crate::radix::parse_address;
use ipnet::Ipv4Net;
use serde::Serialize;
use std::net::Ipv4Addr;

/// 経路集約の計算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupernetResult {
    /// 集約ネットワーク+共通プレフィックス長
    pub aggregate: Ipv4Net,
    pub aggregate_mask: Ipv4Addr,
    /// 入力順を保持したメンバーネットワーク
    pub member_networks: Vec<Ipv4Addr>,
    pub range_low: Ipv4Addr,
    pub range_high: Ipv4Addr,
    pub total_addresses: u64,
}

impl SupernetResult {
    pub fn prefix_len(&self) -> u8 {
        self.aggregate.prefix_len()
    }
}

/// 2つ以上のネットワークアドレスを受け取り、全員を包含する最小の共通スーパーネットを求める。
pub fn calculate_supernet(
    addresses: &[String],
    base: NumeralBase,
) -> Result<SupernetResult, AppError> {
    if addresses.len() < 2 {
        return Err(AppError::OutOfRange(
            "at least two network addresses are required".into(),
        ));
    }

    let members = addresses
        .iter()
        .map(|text| parse_address(text, base))
        .collect::<Result<Vec<_>, _>>()?;

    let prefix_len = common_prefix_len(&members);
    let aggregate_mask = mask::mask_from_prefix_len(prefix_len)?;
    let aggregate_id = mask::network_id(members[0], aggregate_mask);
    let aggregate =
        Ipv4Net::new(aggregate_id, prefix_len).map_err(|e| AppError::OutOfRange(e.to_string()))?;
    let (range_low, range_high) = octet_range(&members);

    Ok(SupernetResult {
        aggregate,
        aggregate_mask,
        member_networks: members,
        range_low,
        range_high,
        total_addresses: mask::usable_host_count(aggregate_mask),
    })
}

/// 全メンバーが先頭から一致するビット数。
/// 先頭メンバーとのXORで最初に食い違う桁を求め、その最小値をとる。
/// 全メンバーが同一なら32。
fn common_prefix_len(members: &[Ipv4Addr]) -> u8 {
    let first = u32::from(members[0]);
    let mut len = u32::from(MAX_PREFIX_LEN);

    for member in &members[1..] {
        let diff = first ^ u32::from(*member);
        len = len.min(diff.leading_zeros());
    }
    len as u8
}

/// オクテットごとに独立した最小値と最大値。
/// 32bit値としての大小比較ではないため、どの入力とも一致しないアドレスになり得る。
fn octet_range(members: &[Ipv4Addr]) -> (Ipv4Addr, Ipv4Addr) {
    let mut low = members[0].octets();
    let mut high = members[0].octets();

    for member in &members[1..] {
        for (i, octet) in member.octets().iter().enumerate() {
            low[i] = low[i].min(*octet);
            high[i] = high[i].max(*octet);
        }
    }
    (Ipv4Addr::from(low), Ipv4Addr::from(high))
}
