//! CLI for content-bridge - rewrite and resolve cross-source links

use clap::{Parser, Subcommand};
use content_bridge::{get_content_path, SourceBase, SourceConfig};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite links in an HTML document to app-relative paths
    Rewrite {
        /// Source configuration (JSON)
        #[arg(long)]
        config: PathBuf,

        /// Input HTML file path (reads stdin if not specified)
        input: Option<PathBuf>,

        /// Output file path (prints to stdout if not specified)
        output: Option<PathBuf>,

        /// Base URL for generated links (overrides the config's home_url)
        #[arg(long)]
        home_url: Option<String>,

        /// Decode HTML entities after rewriting
        #[arg(long)]
        render: bool,
    },
    /// Resolve a single URL to its content type and id
    Resolve {
        /// Source configuration (JSON)
        #[arg(long)]
        config: PathBuf,

        url: String,
    },
    /// Print the app-relative path for a content item
    Path { content_type: String, id: u64 },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> content_bridge::Result<()> {
    match command {
        Command::Rewrite {
            config,
            input,
            output,
            home_url,
            render,
        } => {
            let config = SourceConfig::from_path(&config)?;
            let base = SourceBase::from_config(&config)?;
            let home_url = home_url.unwrap_or_else(|| config.home_url.clone());

            let html = match input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let rewritten = if render {
                base.rendered_content(&html, &home_url)
            } else {
                base.rewrite_internal_links(&html, &home_url).into_owned()
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &rewritten)?;
                    eprintln!("Successfully rewrote links to {:?}", path);
                }
                None => print!("{}", rewritten),
            }
        }
        Command::Resolve { config, url } => {
            let config = SourceConfig::from_path(&config)?;
            let base = SourceBase::from_config(&config)?;
            match base.resolve_incoming_url(&url) {
                Some(content) => println!(
                    "{} {} {}",
                    content.content_type(),
                    content.id(),
                    content.path()
                ),
                None => {
                    eprintln!("no match: {}", url);
                    std::process::exit(1);
                }
            }
        }
        Command::Path { content_type, id } => {
            println!("{}", get_content_path(&content_type, id)?);
        }
    }
    Ok(())
}
