use crate::class::NetworkClass;
use crate::common::NumeralBase;
use crate::error::AppError;
use crate::mask::{self, MAX_PREFIX_LEN};
use crate::radix::parse_address;
use ipnet::Ipv4Net;
use serde::Serialize;
use std::net::Ipv4Addr;

/// u32用のヘルパートレイト。
/// 要求サブネット数を収容するのに必要なビット数の計算に使う。
pub trait CeilLog2 {
    fn ceil_log2(&self) -> u32;
}

impl CeilLog2 for u32 {
    fn ceil_log2(&self) -> u32 {
        if *self <= 1 {
            0
        } else {
            32 - (*self - 1).leading_zeros()
        }
    }
}

/// 1サブネット分の計算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubnetRecord {
    /// 1始まりの連番
    pub index: u32,
    /// サブネットID+新プレフィックス長
    pub network: Ipv4Net,
    pub mask: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// /31と/32にはホスト領域が無いためNone
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub usable_hosts: u64,
}

impl SubnetRecord {
    pub fn subnet_id(&self) -> Ipv4Addr {
        self.network.addr()
    }
}

/// 分割計算全体の結果。
/// 元になったネットワークの情報と、昇順に並んだ各サブネットのレコードを持つ。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubnetPlan {
    pub address: Ipv4Addr,
    pub class: NetworkClass,
    pub default_mask: Ipv4Addr,
    pub network_id: Ipv4Addr,
    pub new_prefix_len: u8,
    pub new_mask: Ipv4Addr,
    pub subnets: Vec<SubnetRecord>,
}

/// ベースアドレスをクラス標準マスクで正規化し、count個の等サイズサブネットに分割する。
/// countが2の冪でない場合も、収容できる最小のビット数で分割してcount個だけ列挙する。
pub fn calculate_subnets(
    address: &str,
    base: NumeralBase,
    count: u32,
) -> Result<SubnetPlan, AppError> {
    if count < 1 {
        return Err(AppError::OutOfRange(
            "number of subnets must be at least 1".into(),
        ));
    }

    let addr = parse_address(address, base)?;
    let class = NetworkClass::of(addr);
    let default_mask = class.default_mask();
    let network_id = mask::network_id(addr, default_mask);

    let subnet_bits = count.ceil_log2() as u8;
    let default_prefix_len = class.default_prefix_len();
    let new_prefix_len = default_prefix_len + subnet_bits;
    if new_prefix_len > MAX_PREFIX_LEN {
        return Err(AppError::Oversubscribed(format!(
            "{} subnets need {} subnet bits, but class {} (/{}) has only {} host bits",
            count,
            subnet_bits,
            class.as_str(),
            default_prefix_len,
            MAX_PREFIX_LEN - default_prefix_len
        )));
    }

    let new_mask = mask::mask_from_prefix_len(new_prefix_len)?;
    // i番目のサブネットIDはネットワークIDへブロックサイズのi倍を32bit加算した値。
    // オクテット単位の加算ではないため、桁上がりはu64側でまとめて処理される。
    let block_size = 1u64 << (MAX_PREFIX_LEN - new_prefix_len);
    let base_bits = u64::from(u32::from(network_id));

    let mut subnets = Vec::with_capacity(count as usize);
    for i in 0..count {
        let id_bits = base_bits + u64::from(i) * block_size;
        if id_bits > u64::from(u32::MAX) {
            // new_prefix_lenの検証後は到達しない32bit境界超過。
            // 部分的な結果は返さず、フェイルセーフとしてエラーにする
            return Err(AppError::OutOfRange(format!(
                "subnet {} exceeds the IPv4 address space",
                i + 1
            )));
        }
        subnets.push(subnet_record(
            Ipv4Addr::from(id_bits as u32),
            new_prefix_len,
            new_mask,
            i + 1,
        )?);
    }

    Ok(SubnetPlan {
        address: addr,
        class,
        default_mask,
        network_id,
        new_prefix_len,
        new_mask,
        subnets,
    })
}

/// サブネットIDから1レコード分の情報を組み立てる
fn subnet_record(
    subnet_id: Ipv4Addr,
    prefix_len: u8,
    mask_addr: Ipv4Addr,
    index: u32,
) -> Result<SubnetRecord, AppError> {
    let broadcast = mask::broadcast_address(subnet_id, mask_addr);
    let network =
        Ipv4Net::new(subnet_id, prefix_len).map_err(|e| AppError::OutOfRange(e.to_string()))?;

    Ok(SubnetRecord {
        index,
        network,
        mask: mask_addr,
        broadcast,
        first_host: mask::first_host(subnet_id, prefix_len),
        last_host: mask::last_host(broadcast, prefix_len),
        usable_hosts: mask::usable_host_count(mask_addr),
    })
}
