use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use bump::cli::{run_bump, BumpOutcome, BumpWorkflowArgs};
use bump::config::{self, CONFIG_ENV};
use bump::domain::BumpKind;
use bump::git::SystemGit;
use bump::{logging, ui, BumpError};

#[derive(clap::Parser)]
#[command(
    name = "bump",
    version,
    about = "Bump the project version, then commit and tag the release"
)]
struct Args {
    #[arg(value_name = "KIND", help = "Version component to bump: major, minor or patch")]
    kind: Option<String>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let rendered = e.to_string();
            let first_line = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            ui::display_error(first_line);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init() {
        tracing::warn!(error = %e, "diagnostic logging unavailable");
    }

    if let Err(e) = run(args) {
        // BumpError messages already include their cause
        let message = match e.downcast_ref::<BumpError>() {
            Some(err) => err.to_string(),
            None => format!("{:#}", e),
        };
        ui::display_error(&message);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let kind: BumpKind = args.kind.as_deref().unwrap_or("(none)").parse()?;

    let root = env::current_dir().context("cannot determine the working directory")?;
    let explicit = env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = config::load_config(&root, explicit.as_deref())?;

    let repo = SystemGit::new(&root).with_program(&config.git.program);
    let outcome = run_bump(&BumpWorkflowArgs { kind, root }, &config, &repo)?;

    report(&outcome);
    Ok(())
}

fn report(outcome: &BumpOutcome) {
    ui::display_version_change(&outcome.project, &outcome.previous, &outcome.version);

    for change in outcome.templates.iter().filter(|c| c.replacements > 0) {
        ui::display_status(&format!(
            "Updated {} ({} occurrence{})",
            change.path.display(),
            change.replacements,
            if change.replacements == 1 { "" } else { "s" }
        ));
    }

    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_success(&format!(
        "Committed {}",
        outcome.tag.commit_message(&outcome.project)
    ));
    ui::display_success(&format!(
        "Created {} tag {}",
        if outcome.signed { "signed" } else { "annotated" },
        outcome.tag
    ));
}
