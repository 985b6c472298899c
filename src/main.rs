use clap::Parser;
use subnet_scope::cli::Cli;
use subnet_scope::commands::handle_subnet::run_subnet;
use subnet_scope::commands::handle_supernet::run_supernet;
use subnet_scope::common::{NumeralBase, OutputFormat};
use subnet_scope::error::AppError;

fn main() -> Result<(), AppError> {
    let args = Cli::parse();
    run(&args)
}

/// アプリケーションのメインロジック
fn run(args: &Cli) -> Result<(), AppError> {
    let base = args
        .base
        .parse::<NumeralBase>()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    let format = OutputFormat::from_str(&args.output_format);

    // --supernet オプションが指定された場合
    if let Some(networks) = &args.supernet_networks {
        run_supernet(networks, args, base, format)?;
        return Ok(());
    }

    // --subnet オプション
    if let Some(address) = &args.subnet_address {
        let count = args.num_subnets.ok_or_else(|| {
            AppError::InvalidInput("--num-subnets is required together with --subnet".to_string())
        })?;
        run_subnet(address, count, args, base, format)?;
        return Ok(());
    }

    // どちらも指定されなかった場合
    eprintln!("Error: Please specify --subnet or --supernet.\nUse --help for usage.");
    Ok(())
}
