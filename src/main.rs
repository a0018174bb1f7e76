use std::path::PathBuf;

use clap::{Parser, Subcommand};
use libbilang::{config, pages, switcher};

#[derive(Parser, Debug)]
#[command(name = "bilang")]
#[command(author, version, about = "Build helpers for a bilingual English/Hebrew static site", long_about = None)]
struct Args {
    /// Log every page decision, not just summaries.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite language-switcher placeholders in the generated site (default).
    Fix {
        /// Directory the site generator wrote its output into.
        #[arg(default_value = config::SITE_DIR)]
        site_dir: PathBuf,
    },
    /// Regenerate combined bilingual collection pages from their sources.
    Merge {
        /// Directory holding the collections.
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("libbilang={level}").parse()?),
        )
        .init();

    let command = args.command.unwrap_or(Command::Fix {
        site_dir: PathBuf::from(config::SITE_DIR),
    });

    match command {
        Command::Fix { site_dir } => {
            switcher::fix_at(&site_dir)?;
        }
        Command::Merge { root } => {
            pages::merge_at(&root)?;
        }
    }

    Ok(())
}
