use clap::Parser;
use subnet_scope::cli::Cli;

#[test]
fn cli_parses_subnet_mode_with_defaults() {
    let args = ["subnet-scope", "-s", "192.168.1.0", "-n", "4"];

    let cli = Cli::parse_from(args);
    assert_eq!(cli.subnet_address.as_deref(), Some("192.168.1.0"));
    assert_eq!(cli.num_subnets, Some(4));
    assert!(cli.supernet_networks.is_none());

    // 省略時の既定値
    assert_eq!(cli.base, "dec");
    assert_eq!(cli.output_format, "text");
    assert_eq!(cli.mode, "overwrite");
    assert!(cli.output.is_none());
}

#[test]
fn cli_parses_supernet_mode_with_base_and_format() {
    let args = [
        "subnet-scope",
        "-S",
        "C0.A8.00.00",
        "C0.A8.01.00",
        "-b",
        "hex",
        "-f",
        "json",
    ];

    let cli = Cli::parse_from(args);
    let networks = cli.supernet_networks.expect("supernet networks required");
    assert_eq!(
        networks,
        vec!["C0.A8.00.00".to_string(), "C0.A8.01.00".to_string()]
    );
    assert!(cli.subnet_address.is_none());
    assert_eq!(cli.base, "hex");
    assert_eq!(cli.output_format, "json");
}

#[test]
fn cli_parses_file_output_options() {
    let args = [
        "subnet-scope",
        "-s",
        "10.0.0.0",
        "-n",
        "2",
        "-o",
        "report.txt",
        "-m",
        "append",
    ];

    let cli = Cli::parse_from(args);
    assert_eq!(cli.output.expect("output path").to_str(), Some("report.txt"));
    assert_eq!(cli.mode, "append");
}

#[test]
fn cli_rejects_incomplete_or_conflicting_arguments() {
    // -s には -n が必要
    assert!(Cli::try_parse_from(["subnet-scope", "-s", "10.0.0.0"]).is_err());
    // -n 単独も不可
    assert!(Cli::try_parse_from(["subnet-scope", "-n", "4"]).is_err());
    // -S は2つ以上
    assert!(Cli::try_parse_from(["subnet-scope", "-S", "10.0.0.0"]).is_err());
    // -s と -S の同時指定は不可
    assert!(
        Cli::try_parse_from([
            "subnet-scope",
            "-s",
            "10.0.0.0",
            "-n",
            "2",
            "-S",
            "10.0.0.0",
            "10.1.0.0",
        ])
        .is_err()
    );
    // -m は -o とセットでのみ指定できる
    assert!(
        Cli::try_parse_from(["subnet-scope", "-s", "10.0.0.0", "-n", "2", "-m", "append"]).is_err()
    );
    // どちらのモードも無い場合はエラー
    assert!(Cli::try_parse_from(["subnet-scope"]).is_err());
    // -n は符号なし整数のみ
    assert!(Cli::try_parse_from(["subnet-scope", "-s", "10.0.0.0", "-n", "four"]).is_err());
}
