use colored::Colorize;
use supports_color::Stream;

use crate::materializer::{MaterializePlan, MaterializeReport};
use crate::tree::NodeKind;

/// Aligns `colored`'s global decision with actual terminal support so piped
/// and redirected output stays plain.
pub fn init_colors() {
    colored::control::set_override(supports_color::on(Stream::Stdout).is_some());
}

pub fn print_plan(plan: &MaterializePlan) {
    for entry in plan.entries() {
        let tag = match entry.kind {
            NodeKind::Directory => "dir ".blue().bold(),
            NodeKind::File => "file".normal(),
        };
        println!("{} {}", tag, entry.path.display());
    }
    println!(
        "{} {} directories and {} files would be created under {}",
        "plan:".bold(),
        plan.directory_count(),
        plan.file_count(),
        plan.base().display()
    );
}

pub fn print_report(report: &MaterializeReport) {
    let summary = format!(
        "{} created, {} already existed",
        report.created().len(),
        report.skipped().len()
    );
    println!("{} {}", "done:".green().bold(), summary);
}
