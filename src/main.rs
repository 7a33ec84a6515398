use clap::{Parser, Subcommand};
use gallery_sync::sync::SyncMode;
use gallery_sync::{config, output, render, scan, sync};
use std::path::PathBuf;

#[derive(clap::Args, Clone, Default)]
struct SyncArgs {
    /// Report whether the page would change without writing it
    #[arg(long)]
    dry_run: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "gallery-sync")]
#[command(about = "Sync a gallery page's asset arrays with the files on disk")]
#[command(long_about = "\
Sync a gallery page's asset arrays with the files on disk

Run with no arguments from the site directory. The page's four array
declarations are rebuilt from the asset directories and the page is
rewritten only if something changed.

Site structure:

  site/
  ├── gallery-sync.toml        # Optional overrides (see gen-config)
  ├── index.html               # Holds the four declarations below
  └── assets/
      ├── images/              # const galleryImages = [ \"assets/images/a.jpg\", ... ];
      ├── pdf/                 # const pdfFiles = [ { name, file }, ... ];
      ├── 360-images/          # const panoImages = [ { src, title: \"View N\" }, ... ];
      └── videos/              # const videoFiles = [ { src, title }, ... ];

Titles:
  PDFs, videos:  filename → final_report-v2.pdf → \"Final Report V2\"
  360 images:    position → \"View 1\", \"View 2\", ...")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding the gallery page and its asset directories
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite the asset arrays in the gallery page (default)
    Sync(SyncArgs),
    /// List discovered assets without touching the page
    Scan {
        /// Print the scan manifest as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock gallery-sync.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Sync(SyncArgs::default())) {
        Command::Sync(args) => {
            let config = config::load_config(&cli.root)?;
            let manifest = scan::scan(&cli.root, &config)?;
            output::print_scan_summary(&manifest);

            let blocks = render::render_blocks(&manifest);
            let mode = if args.dry_run {
                SyncMode::DryRun
            } else {
                SyncMode::Write
            };
            // Page read/write failures end the run with a message, not an error exit.
            match sync::update_document(&config.document_path(&cli.root), &blocks, mode) {
                Ok(report) => output::print_sync_output(&report),
                Err(err) => output::print_sync_error(&err),
            }
        }
        Command::Scan { json } => {
            let config = config::load_config(&cli.root)?;
            let manifest = scan::scan(&cli.root, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                output::print_scan_output(&manifest);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
