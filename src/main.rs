use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_changelog::cli::orchestration::{run_changelog_workflow, ChangelogWorkflowArgs};
use git_changelog::config;
use git_changelog::git::Git2CommitSource;
use git_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Generate a categorized changelog from commits since the last release tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = "HEAD", help = "Revision to read commits from")]
    rev: String,

    #[arg(short, long, help = "Start after this tag instead of the latest reachable one")]
    since: Option<String>,

    #[arg(short, long, help = "Write the changelog to this file instead of stdout")]
    output: Option<String>,

    #[arg(long, help = "Append the contributor section")]
    contributors: bool,

    #[arg(short, long, help = "Overwrite the output file without asking")]
    force: bool,

    #[arg(long, help = "Show configured categories and exit")]
    list: bool,
}

/// Console logging controlled by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.list {
        ui::display_categories(&config.sorted_categories());
        return Ok(());
    }

    let mut source = match Git2CommitSource::open(".") {
        Ok(source) => source.with_rev(&args.rev),
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };
    if let Some(tag) = &args.since {
        source = source.with_since(tag);
    }

    let workflow_args = ChangelogWorkflowArgs {
        contributors: args.contributors,
    };
    let result = match run_changelog_workflow(&source, config, &workflow_args) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    match &args.output {
        Some(path) => {
            if Path::new(path).exists()
                && !args.force
                && !ui::confirm_action(&format!("Overwrite {}?", path))?
            {
                ui::display_status("Changelog not written.");
                return Ok(());
            }
            fs::write(path, &result.changelog)?;
            ui::display_success(&format!("Wrote changelog to {}", path));
        }
        None => print!("{}", result.changelog),
    }

    ui::display_status(&ui::format_summary(
        result.commit_count,
        result.rendered_count,
        result.since_tag.as_deref(),
    ));

    Ok(())
}
