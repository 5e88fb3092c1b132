//! Statistics reporting.

use console::style;

use crate::fetch::FetchReport;

/// Print the outcome of a batch.
pub fn print_report(report: &FetchReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Download summary:").bold());
    println!("  Items finished:     {}", report.completed);
    println!("  Converted to MP3:   {}", report.transcoded);
    if report.transcode_failed > 0 {
        println!(
            "  Failed conversions: {} (originals retained)",
            style(report.transcode_failed).red()
        );
    }
    if report.batch_failed {
        println!(
            "  {}",
            style("The download tool reported a batch-level failure.").yellow()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
