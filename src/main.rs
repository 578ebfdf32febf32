mod cli;
mod credentials;
mod fetch;
mod observation;
mod output;
mod stations;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Current {} => match command::current().await {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => eprintln!("Error: {}", e),
        },
        Commands::Minutely {} => match command::minutely().await {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => eprintln!("Error: {}", e),
        },
        Commands::Flood { region } => match command::flood(region.as_deref()).await {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => eprintln!("Error: {}", e),
        },
    }

    Ok(())
}
