//! CLI entry point for mdposts

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdposts::content::PageQuery;

#[derive(Parser)]
#[command(name = "mdposts")]
#[command(version)]
#[command(about = "Load, enrich and export markdown blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PageArgs {
    /// Page number, starting at 1
    #[arg(short, long)]
    page: Option<usize>,

    /// Posts per page (defaults to `per_page` when --page is given)
    #[arg(short, long)]
    limit: Option<usize>,
}

impl PageArgs {
    /// All posts unless a page or limit was asked for
    fn query(self, per_page: usize) -> PageQuery {
        match (self.page, self.limit) {
            (None, None) => PageQuery::all(),
            (page, limit) => PageQuery::page(page.unwrap_or(1), limit.unwrap_or(per_page)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Write posts as JSON for the /posts.json endpoint
    Export {
        #[command(flatten)]
        paging: PageArgs,

        /// Output file (defaults to <public_dir>/posts.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show site name and URL
    Info,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdposts=debug,info"
    } else {
        "mdposts=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::List { paging } => {
            let blog = mdposts::Blog::new(&base_dir)?;
            let query = paging.query(blog.config.per_page);
            mdposts::commands::list::run(&blog, query)?;
        }

        Commands::Export { paging, output } => {
            let blog = mdposts::Blog::new(&base_dir)?;
            let query = paging.query(blog.config.per_page);
            blog.export(query, output.as_deref())?;
            println!("Exported successfully!");
        }

        Commands::Info => {
            let blog = mdposts::Blog::new(&base_dir)?;
            println!("{}", blog.config.name);
            println!("{}", blog.config.website);
        }

        Commands::Version => {
            println!("mdposts version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
