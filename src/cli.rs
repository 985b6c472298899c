use clap::Parser;
use std::path::PathBuf;

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "This tool can be used to calculate IPv4 subnet divisions and supernet aggregations."
)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "subnet",
        required_unless_present = "supernet_networks",
        required = false,
        requires = "num_subnets",
        conflicts_with = "supernet_networks",
        help = "Specify the network address to subnet.\nExample: 192.168.1.0"
    )]
    pub subnet_address: Option<String>,

    #[arg(
        short = 'n',
        long = "num-subnets",
        required = false,
        value_parser = clap::value_parser!(u32),
        requires = "subnet_address",
        help = "Specify the number of subnets to divide into.\nExample: 4"
    )]
    pub num_subnets: Option<u32>,

    #[arg(
        short = 'S',
        long = "supernet",
        required_unless_present = "subnet_address",
        required = false,
        num_args = 2..,
        help = "Specify two or more network addresses to combine.\nExample: 192.168.0.0 192.168.1.0"
    )]
    pub supernet_networks: Option<Vec<String>>,

    #[arg(
        short = 'b',
        long = "base",
        default_value = "dec",
        required = false,
        hide_default_value = true,
        help = "Select the numeral base for addresses: 'dec', 'bin', 'oct' or 'hex'.\ndefault: dec"
    )]
    pub base: String,

    #[arg(
        short = 'f',
        long = "format",
        default_value = "text",
        required = false,
        hide_default_value = true,
        help = "Select output format: 'text' or 'json'.\ndefault: text"
    )]
    pub output_format: String,

    #[arg(
        short = 'o',
        long = "output",
        required = false,
        help = "Write the report to the specified file instead of stdout.\nExample: report.txt"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'm',
        long = "mode",
        default_value = "overwrite",
        required = false,
        hide_default_value = true,
        requires = "output",
        help = "Select file output mode: 'append' or 'overwrite'.\ndefault: overwrite"
    )]
    pub mode: String,
}
