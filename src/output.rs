use owo_colors::OwoColorize;

use crate::fs_ops::{CandidateReport, MoveOutcome, Summary};

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

/// Print a plain line (no prefix).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Status marker for an outcome: ✓ moved, → already organized, - missing, ✗ failed.
pub fn outcome_marker(outcome: &MoveOutcome) -> &'static str {
    match outcome {
        MoveOutcome::Moved => "✓",
        MoveOutcome::AlreadyAtDestination => "→",
        MoveOutcome::NotFound => "-",
        MoveOutcome::Error(_) => "✗",
    }
}

/// Uncolored status line for one candidate.
pub fn format_report(report: &CandidateReport, target_label: &str, dry_run: bool) -> String {
    let name = &report.name;
    let marker = outcome_marker(&report.outcome);
    match &report.outcome {
        MoveOutcome::Moved if dry_run => format!("{marker} Would move {name}"),
        MoveOutcome::Moved => format!("{marker} Moved {name}"),
        MoveOutcome::AlreadyAtDestination => format!("{marker} {name} already in {target_label}"),
        MoveOutcome::NotFound => format!("{marker} {name} not found"),
        MoveOutcome::Error(detail) => format!("{marker} Error moving {name}: {detail}"),
    }
}

pub fn print_report(report: &CandidateReport, target_label: &str, dry_run: bool) {
    let line = format_report(report, target_label, dry_run);
    if !is_tty() {
        println!("{line}");
        return;
    }
    // Color only the marker; the rest stays greppable.
    let marker = outcome_marker(&report.outcome);
    let rest = &line[marker.len()..];
    match report.outcome {
        MoveOutcome::Moved => println!("{}{}", marker.green().bold(), rest),
        MoveOutcome::AlreadyAtDestination => println!("{}{}", marker.cyan(), rest),
        MoveOutcome::NotFound => println!("{}{}", marker.dimmed(), rest),
        MoveOutcome::Error(_) => println!("{}{}", marker.red().bold(), rest),
    }
}

/// Trailing summary: a blank line, the completion banner and two counters.
pub fn format_summary(summary: &Summary, dry_run: bool) -> Vec<String> {
    let banner = if dry_run {
        "✓ Dry run complete!"
    } else {
        "✓ Cleanup complete!"
    };
    vec![
        String::new(),
        banner.to_string(),
        format!("  Moved: {}", summary.moved),
        format!("  Already organized: {}", summary.skipped()),
    ]
}

pub fn print_summary(summary: &Summary, dry_run: bool) {
    for line in format_summary(summary, dry_run) {
        print_user(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, outcome: MoveOutcome) -> CandidateReport {
        CandidateReport {
            name: name.into(),
            outcome,
        }
    }

    #[test]
    fn status_lines() {
        let label = "build-scripts";
        assert_eq!(
            format_report(&report("a.sh", MoveOutcome::Moved), label, false),
            "✓ Moved a.sh"
        );
        assert_eq!(
            format_report(&report("a.sh", MoveOutcome::Moved), label, true),
            "✓ Would move a.sh"
        );
        assert_eq!(
            format_report(&report("b.sh", MoveOutcome::AlreadyAtDestination), label, false),
            "→ b.sh already in build-scripts"
        );
        assert_eq!(
            format_report(&report("c.sh", MoveOutcome::NotFound), label, false),
            "- c.sh not found"
        );
        assert_eq!(
            format_report(&report("d.sh", MoveOutcome::Error("denied".into())), label, false),
            "✗ Error moving d.sh: denied"
        );
    }

    #[test]
    fn summary_has_two_counters() {
        let mut s = Summary::default();
        s.record(report("a.sh", MoveOutcome::Moved));
        s.record(report("b.sh", MoveOutcome::NotFound));
        s.record(report("c.sh", MoveOutcome::Error("x".into())));
        let lines = format_summary(&s, false);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "✓ Cleanup complete!");
        assert_eq!(lines[2], "  Moved: 1");
        assert_eq!(lines[3], "  Already organized: 2");
    }
}
