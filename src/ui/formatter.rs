//! Formatting functions for status output.
//!
//! Stdout carries only the computed tag, so everything here writes to
//! stderr. Colors are dropped automatically when stderr is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::NextTagPlan;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green().for_stderr(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow().for_stderr(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), warning);
}

/// Describe how the next tag was computed, one step per line.
pub fn format_plan(plan: &NextTagPlan) -> String {
    let current = if plan.current.is_empty() {
        "(none)"
    } else {
        plan.current.as_str()
    };

    let mut lines = vec![
        format!("current:  {}", current),
        format!("prefix:   '{}'", plan.prefix),
        format!("version:  {}", plan.stripped),
        format!("format:   {}", plan.format),
    ];
    if plan.bump_adjusted() {
        lines.push(format!(
            "bump:     {} (requested {})",
            plan.bump, plan.requested_bump
        ));
    } else {
        lines.push(format!("bump:     {}", plan.bump));
    }
    lines.push(format!("next:     {}", plan.tag));

    lines.join("\n")
}

/// Display the computation steps of the next tag.
pub fn display_plan(plan: &NextTagPlan) {
    eprintln!("{}", style("Next tag:").bold().for_stderr());
    for line in format_plan(plan).lines() {
        eprintln!("  {}", line);
    }
}

/// Display manual push instruction for a tag.
///
/// # Arguments
/// * `tag` - The tag that was created locally
/// * `remote` - The remote name (e.g., "origin")
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    eprintln!(
        "{} To push this tag later, run:\n  {}",
        style("→").yellow().for_stderr(),
        style(format!("git push {} {}", remote, tag))
            .cyan()
            .for_stderr()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::plan_next_tag;
    use crate::config::Config;

    #[test]
    fn test_format_plan_lists_steps() {
        let plan = plan_next_tag("v1.2", &Config::default()).unwrap();
        let text = format_plan(&plan);
        assert!(text.contains("prefix:   'v'"));
        assert!(text.contains("format:   majorminor"));
        assert!(text.contains("bump:     minor (requested patch)"));
        assert!(text.ends_with("next:     v1.3"));
    }

    #[test]
    fn test_format_plan_without_current_tag() {
        let plan = plan_next_tag("", &Config::default()).unwrap();
        assert!(format_plan(&plan).starts_with("current:  (none)"));
    }
}
