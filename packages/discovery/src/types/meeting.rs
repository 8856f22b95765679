//! Structured meeting information extracted by the language model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::town::Town;

/// How a municipality publishes its agendas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgendaFormat {
    /// Links to external files (usually PDFs)
    DocumentLinks,

    /// Webpages that display the agenda inline
    EmbeddedHtml,

    #[default]
    Unknown,

    Other,
}

impl fmt::Display for AgendaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgendaFormat::DocumentLinks => "document-links",
            AgendaFormat::EmbeddedHtml => "embedded-html",
            AgendaFormat::Unknown => "unknown",
            AgendaFormat::Other => "other",
        };
        f.write_str(s)
    }
}

/// Where and how agendas are published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaInfo {
    /// URL where agenda documents can be found
    pub url: Option<String>,

    /// How the agendas are stored
    #[serde(default)]
    pub format: AgendaFormat,

    /// Concise additional information for locating the agendas
    pub notes: Option<String>,
}

/// The structured answer the language model must produce.
///
/// Every field is optional: the model leaves out what the pages do not
/// state. A response that fails to parse into this shape is a
/// [`crate::error::DiscoveryError::MalformedAnswer`], never passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingDetails {
    /// Concise user-friendly description of when meetings happen,
    /// like "1st and 3rd Tuesdays at 7pm" or "As needed"
    pub schedule: Option<String>,

    /// Cron representation of the schedule, only when meetings are regular
    pub schedule_cron: Option<String>,

    /// Where meetings are held
    pub location: Option<String>,

    /// Where agendas are published
    #[serde(default)]
    pub agenda: AgendaInfo,

    /// One or two sentence synthesis of the findings
    pub summary: Option<String>,
}

impl MeetingDetails {
    /// Whether the model found anything at all.
    pub fn has_findings(&self) -> bool {
        self.schedule.is_some()
            || self.location.is_some()
            || self.agenda.url.is_some()
            || self.summary.is_some()
    }
}

/// Final pipeline output for one town.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingReport {
    /// The town that was analyzed
    pub town: Town,

    /// The located official website
    pub website: String,

    /// URLs whose content went into the synthesizer prompt
    pub pages_consulted: Vec<String>,

    /// The extracted meeting details
    pub details: MeetingDetails,
}
