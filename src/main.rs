use anyhow::Result;
use clap::Parser;

use git_bump::{config, diff, git_ops, manifest, ui, version};

#[derive(clap::Parser)]
#[command(
    name = "git-bump",
    about = "Bump the manifest version based on the latest commit's diff"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Manifest file path (overrides configuration)")]
    manifest: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-bump {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let manifest_path = args.manifest.unwrap_or(config.manifest.path);
    let dry_run = args.dry_run || config.behavior.dry_run;

    // Initialize git operations
    let git_repo = match git_ops::GitRepo::new() {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    // Get the stat summary for the change-set between HEAD~1 and HEAD
    let stat_text = match git_repo.diff_stat_since_parent() {
        Ok(text) => text,
        Err(e) => {
            ui::display_error(&format!("Failed to get diff statistics: {}", e));
            std::process::exit(1);
        }
    };

    let stats = diff::parse_diff_stats(&stat_text);
    ui::display_diff_summary(&stats);

    // Load the manifest and its stored version
    let mut manifest = match manifest::Manifest::load(&manifest_path) {
        Ok(m) => m,
        Err(e) => {
            ui::display_error(&format!("Manifest error: {}", e));
            std::process::exit(1);
        }
    };

    let stored_version = match manifest.version() {
        Ok(v) => v.to_string(),
        Err(e) => {
            ui::display_error(&format!("Manifest error: {}", e));
            std::process::exit(1);
        }
    };

    let current_version = match version::parse_version(&stored_version) {
        Ok(v) => v,
        Err(e) => {
            ui::display_error(&format!(
                "Invalid version in '{}': {}",
                manifest.path().display(),
                e
            ));
            std::process::exit(1);
        }
    };

    // Compute the candidate version from the change summary
    let new_version = match diff::determine_version_bump(&stats) {
        Some(bump) => version::bump_version(&current_version, &bump),
        None => current_version.clone(),
    };

    // Only rewrite the manifest if the version actually changed
    if new_version != current_version {
        ui::display_proposed_version(
            &current_version.to_string(),
            &new_version.to_string(),
        );

        if dry_run {
            ui::display_status(&format!(
                "Dry run: would bump version to {} in {}",
                new_version,
                manifest.path().display()
            ));
            return Ok(());
        }

        manifest.set_version(&new_version.to_string());
        if let Err(e) = manifest.save() {
            ui::display_error(&format!("Failed to write manifest: {}", e));
            std::process::exit(1);
        }

        ui::display_success(&format!("Version bumped to {}", new_version));
    } else {
        ui::display_status("No version bump needed");
    }

    Ok(())
}
