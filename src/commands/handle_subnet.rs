use crate::cli::Cli;
use crate::common::debug_log;
use crate::common::{NumeralBase, OutputFormat};
use crate::error::AppError;
use crate::output::render_subnet_report;
use crate::output_common::{make_header, write_report};
use crate::subnet::calculate_subnets;
use chrono::Local;

/// サブネット分割モードの実行
pub fn run_subnet(
    address: &str,
    count: u32,
    args: &Cli,
    base: NumeralBase,
    format: OutputFormat,
) -> Result<(), AppError> {
    let plan = calculate_subnets(address.trim(), base, count)?;

    debug_log(format!(
        "subnet: class={} default=/{} new=/{} records={}",
        plan.class.as_str(),
        plan.class.default_prefix_len(),
        plan.new_prefix_len,
        plan.subnets.len()
    ));

    let report = render_subnet_report(&plan, base, format)?;

    match &args.output {
        Some(path) => {
            // JSON出力時はヘッダを付けない
            let content = match format {
                OutputFormat::Text => {
                    let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
                    format!("{}{}", make_header(&now_str, "subnet"), report)
                }
                OutputFormat::Json => report,
            };
            write_report(path, &content, &args.mode)?;
            println!("[output] Wrote subnet report to: {}", path.display());
        }
        None => print!("{}", report),
    }
    Ok(())
}
