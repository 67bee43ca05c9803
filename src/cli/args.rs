use clap::Parser;

use numwords::OutputFormat;

#[derive(Parser)]
#[command(
    name = "numwords",
    version,
    about = "Convert integers to British English words",
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Numbers to convert. Starts an interactive session when omitted
    pub numbers: Vec<String>,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: keep converting the remaining numbers when one is invalid
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
