use crate::cli::Cli;
use crate::common::debug_log;
use crate::common::{NumeralBase, OutputFormat};
use crate::error::AppError;
use crate::output::render_supernet_report;
use crate::output_common::{make_header, write_report};
use crate::supernet::calculate_supernet;
use chrono::Local;

/// スーパーネット集約モードの実行
pub fn run_supernet(
    networks: &[String],
    args: &Cli,
    base: NumeralBase,
    format: OutputFormat,
) -> Result<(), AppError> {
    let networks: Vec<String> = networks.iter().map(|n| n.trim().to_string()).collect();
    let result = calculate_supernet(&networks, base)?;

    debug_log(format!(
        "supernet: members={} aggregate={}",
        result.member_networks.len(),
        result.aggregate
    ));

    let report = render_supernet_report(&result, base, format)?;

    match &args.output {
        Some(path) => {
            // JSON出力時はヘッダを付けない
            let content = match format {
                OutputFormat::Text => {
                    let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
                    format!("{}{}", make_header(&now_str, "supernet"), report)
                }
                OutputFormat::Json => report,
            };
            write_report(path, &content, &args.mode)?;
            println!("[output] Wrote supernet report to: {}", path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}
