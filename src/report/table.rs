//! Terminal table rendering for the status report.
//!
//! One line per place with a status marker, then a progress footer:
//! - [collected] / [in range] / [420m] / [no fix] markers
//! - collected count, total, and a percentage bar

use crate::rally::CollectionStatus;
use crate::util::format_distance;

use super::StatusReport;

const BAR_WIDTH: usize = 20;

pub fn render(report: &StatusReport) -> String {
    let mut output = String::new();

    output.push_str("대전 역사 스탬프\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for place in &report.places {
        output.push_str(&format!(
            "  {:<12} {:>2}  {:<24} {}\n",
            status_marker(&place.status),
            place.id,
            place.name,
            place.era
        ));
    }

    let progress = &report.progress;
    output.push_str(&format!(
        "\nprogress: {} / {} ({}%)\n",
        progress.collected, progress.total, progress.percentage
    ));
    output.push_str(&format!("[{}]\n", progress_bar(progress.percentage)));

    output
}

fn status_marker(status: &CollectionStatus) -> String {
    match status {
        CollectionStatus::Collected => String::from("[collected]"),
        CollectionStatus::InRange => String::from("[in range]"),
        CollectionStatus::OutOfRange { distance_km } => {
            format!("[{}]", format_distance(*distance_km))
        }
        CollectionStatus::Unknown => String::from("[no fix]"),
    }
}

fn progress_bar(percentage: u8) -> String {
    let filled = (usize::from(percentage.min(100)) * BAR_WIDTH) / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
