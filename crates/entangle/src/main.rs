//! entangle - render TypeScript model files from an entity schema.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "entangle",
    version,
    about = "Generate TypeScript model files from entity schemas"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render interface files (and endpoint constants) from a schema document
    Generate(commands::generate::GenerateArgs),
    /// Render only the endpoint constants file from paths given directly
    Endpoints(commands::endpoints::EndpointsArgs),
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Generate(args) => commands::generate::run(args),
        Command::Endpoints(args) => commands::endpoints::run(args),
    };
    std::process::exit(code);
}
