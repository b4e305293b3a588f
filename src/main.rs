//! opsdeck - A terminal dashboard for GitOps deployment environments
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use opsdeck_app::config;
use opsdeck_core::DeploySnapshot;

/// opsdeck - A terminal dashboard for GitOps deployment environments
#[derive(Parser, Debug)]
#[command(name = "opsdeck")]
#[command(about = "A terminal dashboard for GitOps deployment environments", long_about = None)]
struct Args {
    /// Path to a deploy snapshot file (JSON with already-fetched environment facts)
    #[arg(value_name = "SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Disable watch-triggered snapshot reloads for this run
    #[arg(long)]
    no_watch: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    opsdeck_core::logging::init()?;

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut settings = config::load_settings(&base_dir);
    if args.no_watch {
        settings.watcher.auto_reload = false;
    }

    let (snapshot, snapshot_path) = match args.snapshot {
        Some(path) => {
            let path = if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            };
            match DeploySnapshot::load(&path) {
                Ok(snapshot) => (snapshot, Some(path)),
                Err(err) => {
                    eprintln!("❌ Cannot load snapshot {}: {err}", path.display());
                    eprintln!();
                    eprintln!("A deploy snapshot is a JSON file such as:");
                    eprintln!("  {{");
                    eprintln!("    \"environments\": [");
                    eprintln!(
                        "      {{\"name\": \"staging\", \"online\": true, \"gitops_repo\": false}}"
                    );
                    eprintln!("    ]");
                    eprintln!("  }}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            eprintln!("No snapshot file given, starting with an empty dashboard.");
            eprintln!("Hint: opsdeck deploy.json");
            (DeploySnapshot::default(), None)
        }
    };

    opsdeck_tui::run(settings, snapshot, snapshot_path).await?;
    Ok(())
}
