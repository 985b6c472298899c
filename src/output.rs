use crate::common::{NumeralBase, OutputFormat};
use crate::error::AppError;
use crate::radix::format_address;
use crate::subnet::SubnetPlan;
use crate::supernet::SupernetResult;
use std::net::Ipv4Addr;

/// SubnetPlanを指定形式のレポート文字列にする。
/// テキストは要求された基数で表記し、JSONは常に正規の10進ドット表記で出力する。
pub fn render_subnet_report(
    plan: &SubnetPlan,
    base: NumeralBase,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_subnet_plan(plan, base)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(plan)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// SupernetResultを指定形式のレポート文字列にする
pub fn render_supernet_report(
    result: &SupernetResult,
    base: NumeralBase,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(render_supernet_result(result, base)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// 元の計算ページの表示ブロックに倣ったテキストレポート (サブネット分割)
fn render_subnet_plan(plan: &SubnetPlan, base: NumeralBase) -> String {
    let w = address_width(base).max("First Host".len()) + 2;
    let mut out = String::new();

    out.push_str("# Network Information\n");
    out.push_str(&format!(
        "IP Address:      {}\n",
        format_address(plan.address, base)
    ));
    out.push_str(&format!("Network Class:   {}\n", plan.class.as_str()));
    out.push_str(&format!(
        "Default Mask:    {}\n",
        format_address(plan.default_mask, base)
    ));
    out.push_str(&format!(
        "Network ID:      {}\n",
        format_address(plan.network_id, base)
    ));
    out.push_str(&format!(
        "New Subnet Mask: /{} ({})\n",
        plan.new_prefix_len,
        format_address(plan.new_mask, base)
    ));
    out.push('\n');

    out.push_str("# Subnet Details\n");
    out.push_str(&format!(
        "{:<5} {:<w$} {:<w$} {:<w$} {:<w$} {}\n",
        "No.", "Subnet ID", "First Host", "Last Host", "Broadcast", "Usable Hosts",
    ));
    for record in &plan.subnets {
        out.push_str(&format!(
            "{:<5} {:<w$} {:<w$} {:<w$} {:<w$} {}\n",
            record.index,
            format_address(record.subnet_id(), base),
            host_cell(record.first_host, base),
            host_cell(record.last_host, base),
            format_address(record.broadcast, base),
            record.usable_hosts,
        ));
    }
    out
}

/// テキストレポート (スーパーネット集約)
fn render_supernet_result(result: &SupernetResult, base: NumeralBase) -> String {
    let mut out = String::new();

    out.push_str("# Supernetting Results\n");
    out.push_str(&format!(
        "Supernet Address:            {}\n",
        format_address(result.aggregate.addr(), base)
    ));
    out.push_str(&format!(
        "Supernet Mask:               {} (/{})\n",
        format_address(result.aggregate_mask, base),
        result.prefix_len()
    ));
    out.push_str(&format!(
        "Number of Combined Networks: {}\n",
        result.member_networks.len()
    ));
    out.push_str(&format!(
        "Address Range:               {} - {}\n",
        format_address(result.range_low, base),
        format_address(result.range_high, base)
    ));
    out.push_str(&format!(
        "Total Addresses:             {}\n",
        result.total_addresses
    ));
    out.push('\n');

    out.push_str("# Original Networks\n");
    for (i, member) in result.member_networks.iter().enumerate() {
        out.push_str(&format!("{:<5} {}\n", i + 1, format_address(*member, base)));
    }
    out
}

/// 列幅はその基数で最長になる表記 (255.255.255.255相当) に合わせる
fn address_width(base: NumeralBase) -> usize {
    format_address(Ipv4Addr::BROADCAST, base).len()
}

/// ホスト範囲が存在しないセルは "-" を表示する
fn host_cell(host: Option<Ipv4Addr>, base: NumeralBase) -> String {
    match host {
        Some(addr) => format_address(addr, base),
        None => "-".to_string(),
    }
}
