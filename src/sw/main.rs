use clap::Parser;
use clap::error::ErrorKind;
use colored::*;
use std::io::IsTerminal;
use sw::api::SwApi;
use sw::commands::{CmdMessage, CmdResult, Entry, MessageLevel};
use sw::config::SwConfig;
use sw::error::Result;
use sw::runner::ShellRunner;
use sw::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands, USAGE};

const LOG_ENV: &str = "SW_LOG";

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!("unrecognized invocation: {:?}", e.kind());
            print_usage();
            return Ok(());
        }
    };

    let Some(command) = cli.command else {
        print_usage();
        return Ok(());
    };

    let config = SwConfig::from_env()?;
    tracing::debug!("keyring at {}", config.keyring_path.display());
    let store = FileStore::new(&config.keyring_path);
    let mut api = SwApi::new(store, ShellRunner, config.ssh_program);
    let mut notify = |message: CmdMessage| print_messages(std::slice::from_ref(&message));

    match command {
        Commands::Version => {
            println!("{}", api.version());
            Ok(())
        }
        Commands::List => {
            let result = api.list()?;
            print_entries(&result.listed_entries);
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Add { args } => report(api.add(&args)?),
        Commands::Rename { args } => report(api.rename(&args)?),
        Commands::Remove { args } => report(api.remove(&args)?),
        Commands::Connect { args } => report(api.connect(&args, &mut notify)?),
        Commands::Run { args } => report(api.run(&args, &mut notify)?),
        Commands::Export => {
            let result = api.export()?;
            if let Some(json) = &result.exported {
                println!("{}", json);
            }
            Ok(())
        }
        Commands::Import { args } => report(api.import(&args, &mut notify)?),
    }
}

fn report(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn print_usage() {
    println!("{}", USAGE);
}

fn print_entries(entries: &[Entry]) {
    println!("LABEL\tADDRESS");
    for entry in entries {
        println!("{}\t{}", entry.label, entry.address);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
