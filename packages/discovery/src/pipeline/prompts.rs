//! LLM prompts for the discovery pipeline.

use crate::content::FilteredContent;
use crate::types::town::Town;

/// System prompt for the website lookup.
pub const LOCATE_SYSTEM_PROMPT: &str =
    "You are a helpful research assistant. Answer ONLY with the requested information.";

/// Prompt asking for a town's official website.
pub const LOCATE_PROMPT: &str = r#"What is the official government website for {location}?
Please return only the URL without any additional text or explanation."#;

/// System prompt for the meeting synthesis call.
pub const SYNTHESIZE_SYSTEM_PROMPT: &str = "You are an expert in analyzing municipal government websites. You locate information to help keep citizens informed and engaged. Only report what the provided pages state.";

/// Prompt asking for structured meeting details from filtered pages.
pub const SYNTHESIZE_PROMPT: &str = r#"The pages below come from the official website for {location}.

Find when the municipality's public meetings happen, where they are held,
and where meeting agendas are published.

{pages}

Output JSON with this structure:
{
    "schedule": "concise description of when meetings happen, like '1st and 3rd Tuesdays at 7pm'. null if not stated",
    "schedule_cron": "cron representation, only when meetings recur on a fixed rule. null otherwise",
    "location": "where meetings are held. null if not stated",
    "agenda": {
        "url": "URL where the agenda documents can be found. null if not found",
        "format": "document-links" | "embedded-html" | "unknown" | "other",
        "notes": "concise additional information for locating the agendas. null if none"
    },
    "summary": "one or two sentence synthesis of the findings"
}

Rules:
- Only report information stated on the pages.
- Leave a field null when the pages do not answer it.
- Respond with the JSON object only."#;

/// Format the website lookup prompt.
pub fn format_locate_prompt(town: &Town) -> String {
    LOCATE_PROMPT.replace("{location}", &town.location())
}

/// Format the synthesis prompt from filtered pages.
///
/// Each page's text is truncated to `max_page_chars` bytes (on a char
/// boundary) before formatting.
pub fn format_synthesize_prompt(
    town: &Town,
    pages: &[(String, FilteredContent)],
    max_page_chars: usize,
) -> String {
    let pages_text = pages
        .iter()
        .map(|(url, content)| format_page_block(url, content, max_page_chars))
        .collect::<Vec<_>>()
        .join("\n---\n");

    SYNTHESIZE_PROMPT
        .replace("{location}", &town.location())
        .replace("{pages}", &pages_text)
}

fn format_page_block(url: &str, content: &FilteredContent, max_page_chars: usize) -> String {
    let mut block = format!("=== PAGE: {} ===\n", url);
    if let Some(title) = &content.title {
        block.push_str(&format!("Title: {}\n", title));
    }
    block.push_str(truncate(&content.text, max_page_chars));
    block.push('\n');

    if !content.links.is_empty() {
        block.push_str("Links:\n");
        for link in &content.links {
            block.push_str(&format!("- [{}]({})\n", link.text, link.url));
        }
    }

    block
}

/// Truncate to at most `max_bytes`, backing up to a char boundary.
fn truncate(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
