//! Application orchestrator.
//! Loads/merges config, initializes logging, prepares the archive directory,
//! relocates the built-in scripts and prints the per-item lines and summary.

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use organize_scripts::cli::Args;
use organize_scripts::config::{config_path_is_explicit, default_config_path, load_config};
use organize_scripts::output as out;
use organize_scripts::{LEGACY_SCRIPTS, Relocator};

use crate::logging::init_tracing;

/// Run the CLI application.
///
/// Per-candidate failures never change the exit status; only a config error
/// or an unusable archive directory returns `Err`.
pub fn run(args: Args) -> Result<()> {
    if args.list {
        for name in LEGACY_SCRIPTS {
            out::print_user(name);
        }
        return Ok(());
    }

    if args.print_config {
        print_config_location();
        return Ok(());
    }

    // Setup errors are reported once, by `main` returning them.
    let mut cfg = load_config()?;
    args.apply_overrides(&mut cfg);
    cfg.validate()?;

    let guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json)
        .context("Failed to initialize logging")?;

    if let Some(raw) = args.log_level.as_deref()
        && args.effective_log_level().is_none()
    {
        warn!(value = raw, "Unknown --log-level; keeping {}", cfg.log_level);
    }
    debug!(?args, ?cfg, "Starting organize_scripts");

    let relocator = Relocator::from_config(&cfg);
    let result = (|| -> Result<()> {
        match relocator.prepare() {
            Ok(true) => out::print_user(&format!("✓ Created {}/ directory\n", cfg.target_dir)),
            Ok(false) => {}
            Err(e) => {
                error!(code = e.code(), error = %e, "Cannot prepare archive directory");
                return Err(e.into());
            }
        }

        let summary = relocator.process(LEGACY_SCRIPTS, |report| {
            out::print_report(report, &cfg.target_dir, relocator.is_dry_run())
        });
        out::print_summary(&summary, relocator.is_dry_run());

        if summary.has_errors() {
            warn!(failed = summary.failed, "Some scripts could not be moved");
        }
        info!(
            root = %relocator.root().display(),
            target = %relocator.target_dir().display(),
            moved = summary.moved,
            skipped = summary.skipped(),
            "Cleanup complete"
        );
        Ok(())
    })();

    // Flush the file appender before exit.
    drop(guard);
    result
}

fn print_config_location() {
    match default_config_path() {
        Some(p) => {
            let source = if config_path_is_explicit() {
                "ORGANIZE_SCRIPTS_CONFIG (explicit)"
            } else {
                "default location"
            };
            out::print_info(&format!("Config file ({source}):\n  {}", p.display()));
            if p.exists() {
                out::print_info("The file exists and will be read.");
            } else {
                out::print_info("No file there; built-in defaults are used.");
            }
        }
        None => out::print_info("No config location could be determined; built-in defaults are used."),
    }
}
