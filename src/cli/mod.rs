pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "electctl")]
#[command(about = "Command-line administration for the election admin API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "http://localhost:3000",
        help = "Base URL of the API server"
    )]
    pub server: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check server and directory health")]
    Health,

    #[command(about = "Tenant directory management")]
    Tenant {
        #[command(subcommand)]
        cmd: commands::tenant::TenantCommands,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Health => commands::health(&cli.server, output_format).await,
        Commands::Tenant { cmd } => commands::tenant::handle(cmd, &cli.server, output_format).await,
    }
}
