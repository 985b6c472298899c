use subnet_scope::common::{NumeralBase, OutputFormat};
use subnet_scope::error::AppError;
use subnet_scope::output::{render_subnet_report, render_supernet_report};
use subnet_scope::subnet::calculate_subnets;
use subnet_scope::supernet::calculate_supernet;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn subnet_text_report_lists_network_information_and_rows() -> Result<(), AppError> {
    let plan = calculate_subnets("192.168.1.0", NumeralBase::Dec, 4)?;
    let text = render_subnet_report(&plan, NumeralBase::Dec, OutputFormat::Text)?;

    assert!(text.contains("# Network Information"));
    assert!(text.contains("IP Address:      192.168.1.0"));
    assert!(text.contains("Network Class:   C"));
    assert!(text.contains("Default Mask:    255.255.255.0"));
    assert!(text.contains("New Subnet Mask: /26 (255.255.255.192)"));

    assert!(text.contains("# Subnet Details"));
    assert!(text.contains("Usable Hosts"));
    assert!(text.contains("192.168.1.64"));
    assert!(text.contains("192.168.1.127"));
    assert!(text.contains("62"));

    // 末尾の改行はちょうど1つ
    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
    Ok(())
}

#[test]
fn subnet_text_report_honors_the_requested_base() -> Result<(), AppError> {
    let plan = calculate_subnets("192.168.1.0", NumeralBase::Dec, 2)?;
    let text = render_subnet_report(&plan, NumeralBase::Bin, OutputFormat::Text)?;

    // 入力が10進でも表示基数は独立に選べる
    assert!(text.contains("11000000.10101000.00000001.00000000"));
    assert!(text.contains("11111111.11111111.11111111.10000000"));
    Ok(())
}

#[test]
fn hosts_columns_show_a_dash_when_no_hosts_exist() -> Result<(), AppError> {
    // クラスDは/32の1ブロックになり、ホスト列は"-"
    let plan = calculate_subnets("224.0.0.0", NumeralBase::Dec, 1)?;
    let text = render_subnet_report(&plan, NumeralBase::Dec, OutputFormat::Text)?;

    assert!(text.contains("Network Class:   D"));
    assert!(text.contains(" - "));
    Ok(())
}

#[test]
fn subnet_json_report_is_machine_readable() -> Result<(), AppError> {
    let plan = calculate_subnets("192.168.1.0", NumeralBase::Dec, 4)?;
    let json = render_subnet_report(&plan, NumeralBase::Dec, OutputFormat::Json)?;
    let value: serde_json::Value =
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("invalid json: {e}"));

    assert_eq!(value["class"], "C");
    assert_eq!(value["network_id"], "192.168.1.0");
    assert_eq!(value["new_prefix_len"], 26);
    assert_eq!(value["new_mask"], "255.255.255.192");
    assert_eq!(value["subnets"][1]["network"], "192.168.1.64/26");
    assert_eq!(value["subnets"][1]["first_host"], "192.168.1.65");
    assert_eq!(value["subnets"][1]["usable_hosts"], 62);

    // JSONは表示基数の指定に関わらず正規の10進ドット表記
    let json_hex = render_subnet_report(&plan, NumeralBase::Hex, OutputFormat::Json)?;
    assert_eq!(json, json_hex);

    assert!(json.ends_with('\n'));
    Ok(())
}

#[test]
fn json_host_fields_are_null_when_no_hosts_exist() -> Result<(), AppError> {
    let plan = calculate_subnets("192.168.1.0", NumeralBase::Dec, 256)?;
    let json = render_subnet_report(&plan, NumeralBase::Dec, OutputFormat::Json)?;
    let value: serde_json::Value =
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("invalid json: {e}"));

    assert_eq!(value["subnets"][0]["first_host"], serde_json::Value::Null);
    assert_eq!(value["subnets"][0]["last_host"], serde_json::Value::Null);
    Ok(())
}

#[test]
fn supernet_text_report_summarizes_the_aggregate() -> Result<(), AppError> {
    let result = calculate_supernet(&strings(&["192.168.0.0", "192.168.1.0"]), NumeralBase::Dec)?;
    let text = render_supernet_report(&result, NumeralBase::Dec, OutputFormat::Text)?;

    assert!(text.contains("# Supernetting Results"));
    assert!(text.contains("Supernet Address:            192.168.0.0"));
    assert!(text.contains("Supernet Mask:               255.255.254.0 (/23)"));
    assert!(text.contains("Number of Combined Networks: 2"));
    assert!(text.contains("Address Range:               192.168.0.0 - 192.168.1.0"));
    assert!(text.contains("Total Addresses:             510"));

    // 元ネットワークの一覧は番号付き
    assert!(text.contains("# Original Networks"));
    assert!(text.contains("192.168.1.0"));
    Ok(())
}

#[test]
fn supernet_json_report_is_machine_readable() -> Result<(), AppError> {
    let result = calculate_supernet(&strings(&["192.168.0.0", "192.168.1.0"]), NumeralBase::Dec)?;
    let json = render_supernet_report(&result, NumeralBase::Dec, OutputFormat::Json)?;
    let value: serde_json::Value =
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("invalid json: {e}"));

    assert_eq!(value["aggregate"], "192.168.0.0/23");
    assert_eq!(value["aggregate_mask"], "255.255.254.0");
    assert_eq!(value["member_networks"][0], "192.168.0.0");
    assert_eq!(value["member_networks"][1], "192.168.1.0");
    assert_eq!(value["range_low"], "192.168.0.0");
    assert_eq!(value["range_high"], "192.168.1.0");
    assert_eq!(value["total_addresses"], 510);
    Ok(())
}
