use clap::Parser;

use super::DEFAULT_CONFIG_PATH;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "priceoptimize-api")]
#[command(about = "PriceOptimize AI dynamic pricing agent - demo API", version)]
pub struct CliArgs {
    /// Config file path; the extension may be omitted
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Validate the configuration and exit
    #[arg(long)]
    pub check: bool,
}
