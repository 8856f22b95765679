//! Plain-text rendering of a meeting report.
//!
//! Deterministic: for a fixed report the rendered bytes are exact. The
//! binary points this at stdout.

use std::io::{self, Write};

use crate::types::meeting::MeetingReport;

/// Render a report as plain text.
///
/// Fields the model left null are omitted; the model's summary, when
/// present, is the last line, verbatim.
pub fn render<W: Write>(report: &MeetingReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Town: {}", report.town)?;
    writeln!(out, "Website: {}", report.website)?;

    if !report.details.has_findings() {
        writeln!(out, "No meeting information was found on the site.")?;
        return Ok(());
    }

    if let Some(schedule) = &report.details.schedule {
        writeln!(out, "Schedule: {}", schedule)?;
    }
    if let Some(cron) = &report.details.schedule_cron {
        writeln!(out, "Schedule (cron): {}", cron)?;
    }
    if let Some(location) = &report.details.location {
        writeln!(out, "Location: {}", location)?;
    }
    if let Some(url) = &report.details.agenda.url {
        writeln!(out, "Agendas: {} ({})", url, report.details.agenda.format)?;
    }
    if let Some(notes) = &report.details.agenda.notes {
        writeln!(out, "Agenda notes: {}", notes)?;
    }
    if let Some(summary) = &report.details.summary {
        writeln!(out, "{}", summary)?;
    }

    Ok(())
}
