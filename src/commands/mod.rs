pub mod cancel;
pub mod init;
pub mod pause;
pub mod start;
pub mod status;
pub mod summary;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the configuration file")]
    Init(init::InitArgs),
    #[command(about = "Start the next interval or resume the current one")]
    Start(start::StartArgs),
    #[command(about = "Pause the running interval")]
    Pause,
    #[command(about = "Cancel the current interval")]
    Cancel,
    #[command(about = "Show the current interval")]
    Status,
    #[command(about = "Show work and break totals for a day")]
    Summary(summary::SummaryArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start(args) => start::cmd(args).await,
            Commands::Pause => pause::cmd(),
            Commands::Cancel => cancel::cmd(),
            Commands::Status => status::cmd(),
            Commands::Summary(args) => summary::cmd(args),
        }
    }
}
