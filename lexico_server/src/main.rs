use clap::Parser;
use color_eyre::eyre::{Context, Result};
use log::LevelFilter;
use server::Server;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::{fs::File, path::PathBuf};

mod error;
mod handler;
mod io;
mod server;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(short, long, default_value_t = 8080)]
    port: u16,
    /// Write logs to this file instead of the terminal
    #[arg(long)]
    log_file: Option<PathBuf>,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logger(&args)?;
    let server = Server::bind(&args.host, args.port).await?;
    server.run().await
}

fn init_logger(args: &Args) -> Result<()> {
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Cannot create log file {}", path.display()))?;
            WriteLogger::init(args.log_level, Config::default(), file)
        }
        None => TermLogger::init(
            args.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    }
    .wrap_err("Cannot initialize logger")
}
