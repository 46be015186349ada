use anyhow::{Context, Result};
use clap::Parser;
use materials_admin::shell::Shell;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "materials")]
#[command(about = "Manage study materials from the terminal", long_about = None)]
struct Cli {
    #[arg(short, long, help = "Read commands from a file instead of stdin")]
    script: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut shell = Shell::new();
    let mut stdout = io::stdout().lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            shell.run(BufReader::new(file), &mut stdout, false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                writeln!(
                    stdout,
                    "📚 Study materials shell. Type 'help' for commands, 'quit' to leave."
                )?;
            }
            shell.run(stdin.lock(), &mut stdout, interactive)
        }
    }
}
