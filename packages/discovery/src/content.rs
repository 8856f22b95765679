//! Heuristic HTML filtering.
//!
//! Reduces a raw page to the text and links worth sending to the language
//! model: boilerplate regions (scripts, styles, navigation, headers,
//! footers) are dropped, remaining markup is stripped, and hyperlinks are
//! collected with resolved absolute URLs. Best effort only; there is no
//! correctness contract beyond reducing noise.

use regex::Regex;
use url::Url;

/// Link text or URL substrings that mark a link as meeting-related.
const MEETING_TERMS: &[&str] = &[
    "meeting",
    "agenda",
    "minutes",
    "committee",
    "commission",
    "board",
    "council",
    "calendar",
];

/// Reduced page content.
#[derive(Debug, Clone, Default)]
pub struct FilteredContent {
    /// Page title from `<title>`, if present
    pub title: Option<String>,

    /// Visible text with boilerplate removed
    pub text: String,

    /// Hyperlinks surviving the filter
    pub links: Vec<PageLink>,
}

/// A hyperlink with resolved URL and anchor text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub url: String,
    pub text: String,
}

impl FilteredContent {
    /// Whether the filter produced any usable text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Links whose text or URL mentions a meeting-related term.
    pub fn meeting_links(&self) -> Vec<&PageLink> {
        self.links
            .iter()
            .filter(|link| {
                let text = link.text.to_lowercase();
                let url = link.url.to_lowercase();
                MEETING_TERMS
                    .iter()
                    .any(|term| text.contains(term) || url.contains(term))
            })
            .collect()
    }
}

/// Filter raw HTML down to title, text, and links.
///
/// `base_url` is used to resolve relative hrefs.
pub fn filter_html(html: &str, base_url: &str) -> FilteredContent {
    let title = extract_title(html);
    let stripped = strip_boilerplate(html);
    let links = extract_links(&stripped, base_url);
    let text = html_to_text(&stripped);

    FilteredContent { title, text, links }
}

/// Remove comments, scripts, styles, and navigation boilerplate.
fn strip_boilerplate(html: &str) -> String {
    let mut text = html.to_string();

    for pattern in [
        r"(?is)<!--.*?-->",
        r"(?is)<script[^>]*>.*?</script>",
        r"(?is)<style[^>]*>.*?</style>",
        r"(?is)<nav[^>]*>.*?</nav>",
        r"(?is)<header[^>]*>.*?</header>",
        r"(?is)<footer[^>]*>.*?</footer>",
    ] {
        let re = Regex::new(pattern).unwrap();
        text = re.replace_all(&text, "").to_string();
    }

    text
}

/// Convert boilerplate-stripped HTML to plain text.
fn html_to_text(html: &str) -> String {
    let mut text = html.to_string();

    // Keep heading structure
    let h1_pattern = Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").unwrap();
    let h2_pattern = Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").unwrap();
    let h3_pattern = Regex::new(r"(?is)<h3[^>]*>(.*?)</h3>").unwrap();
    text = h1_pattern.replace_all(&text, "# $1\n").to_string();
    text = h2_pattern.replace_all(&text, "## $1\n").to_string();
    text = h3_pattern.replace_all(&text, "### $1\n").to_string();

    // Paragraphs and line breaks
    let p_pattern = Regex::new(r"(?is)<p[^>]*>(.*?)</p>").unwrap();
    let br_pattern = Regex::new(r"(?i)<br\s*/?>").unwrap();
    text = p_pattern.replace_all(&text, "$1\n\n").to_string();
    text = br_pattern.replace_all(&text, "\n").to_string();

    // Inline links keep their target
    let link_pattern =
        Regex::new(r#"(?is)<a[^>]*href\s*=\s*["']([^"']+)["'][^>]*>(.*?)</a>"#).unwrap();
    text = link_pattern.replace_all(&text, "[$2]($1)").to_string();

    // List items
    let li_pattern = Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap();
    text = li_pattern.replace_all(&text, "- $1\n").to_string();

    // Remove remaining tags
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();
    text = tag_pattern.replace_all(&text, "").to_string();

    // Clean up whitespace
    let multi_newline = Regex::new(r"\n{3,}").unwrap();
    text = multi_newline.replace_all(&text, "\n\n").to_string();

    decode_entities(&text).trim().to_string()
}

/// Extract hyperlinks with resolved absolute URLs.
fn extract_links(html: &str, base_url: &str) -> Vec<PageLink> {
    let link_pattern =
        Regex::new(r#"(?is)<a[^>]*href\s*=\s*["']([^"']+)["'][^>]*>(.*?)</a>"#).unwrap();
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();
    let base = Url::parse(base_url).ok();

    let mut links = Vec::new();

    for cap in link_pattern.captures_iter(html) {
        let href = cap.get(1).map(|m| m.as_str()).unwrap_or_default();

        // Skip anchors, javascript, mailto, tel
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("javascript:")
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
        {
            continue;
        }

        let inner = cap.get(2).map(|m| m.as_str()).unwrap_or_default();
        let text = decode_entities(&tag_pattern.replace_all(inner, ""))
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            continue;
        }

        // Resolve relative URLs against the base
        let resolved = match &base {
            Some(base) => match base.join(href) {
                Ok(url) => url.to_string(),
                Err(_) => continue,
            },
            None => match Url::parse(href) {
                Ok(url) => url.to_string(),
                Err(_) => continue,
            },
        };

        links.push(PageLink {
            url: resolved,
            text,
        });
    }

    links
}

/// Extract the page title from `<title>`.
fn extract_title(html: &str) -> Option<String> {
    let title_pattern = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").ok()?;
    title_pattern
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| decode_entities(m.as_str()).trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Decode the handful of HTML entities that matter for plain text.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<html>
<head><title>Town of Springfield</title><style>body { color: red; }</style></head>
<body>
<script>trackVisit();</script>
<nav><a href="/services">Online Services</a><a href="/payments">Pay a Bill</a></nav>
<main>Town meets Tuesdays at 6pm, agenda at /agenda
<a href="/agenda">Meeting Agendas</a></main>
<footer>Copyright Town of Springfield</footer>
</body>
</html>"#;

    #[test]
    fn test_strips_script_and_style() {
        let filtered = filter_html(FIXTURE, "https://springfield.example.gov");
        assert!(!filtered.text.contains("trackVisit"));
        assert!(!filtered.text.contains("color: red"));
    }

    #[test]
    fn test_strips_nav_and_footer() {
        let filtered = filter_html(FIXTURE, "https://springfield.example.gov");
        assert!(!filtered.text.contains("Online Services"));
        assert!(!filtered.text.contains("Pay a Bill"));
        assert!(!filtered.text.contains("Copyright"));
        assert!(!filtered.links.iter().any(|l| l.url.contains("/services")));
    }

    #[test]
    fn test_retains_body_text_and_link() {
        let filtered = filter_html(FIXTURE, "https://springfield.example.gov");
        assert!(filtered
            .text
            .contains("Town meets Tuesdays at 6pm, agenda at /agenda"));
        assert!(filtered.links.contains(&PageLink {
            url: "https://springfield.example.gov/agenda".to_string(),
            text: "Meeting Agendas".to_string(),
        }));
        assert_eq!(filtered.title.as_deref(), Some("Town of Springfield"));
    }

    #[test]
    fn test_meeting_links_filter() {
        let html = r#"<body>
<a href="/agenda">Agendas &amp; Minutes</a>
<a href="/parks">Parks</a>
<a href="/boards">Boards and Commissions</a>
</body>"#;
        let filtered = filter_html(html, "https://example.gov");
        let meeting: Vec<_> = filtered
            .meeting_links()
            .iter()
            .map(|l| l.url.clone())
            .collect();

        assert!(meeting.contains(&"https://example.gov/agenda".to_string()));
        assert!(meeting.contains(&"https://example.gov/boards".to_string()));
        assert!(!meeting.contains(&"https://example.gov/parks".to_string()));
    }

    #[test]
    fn test_skips_anchor_and_script_links() {
        let html = r##"<body>
<a href="#top">Back to top</a>
<a href="javascript:void(0)">Menu</a>
<a href="mailto:clerk@example.gov">Email the clerk</a>
<a href="/meetings">Meetings</a>
</body>"##;
        let filtered = filter_html(html, "https://example.gov");

        assert_eq!(filtered.links.len(), 1);
        assert_eq!(filtered.links[0].url, "https://example.gov/meetings");
    }

    #[test]
    fn test_empty_page_is_empty() {
        let filtered = filter_html("<script>only();</script>", "https://example.gov");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_decodes_entities() {
        let filtered = filter_html(
            "<main>Planning &amp; Zoning meets at 7pm</main>",
            "https://example.gov",
        );
        assert!(filtered.text.contains("Planning & Zoning meets at 7pm"));
    }

    #[test]
    fn test_list_items_become_bullets() {
        let html = "<ul><li>Select Board</li><li>School Committee</li></ul>";
        let filtered = filter_html(html, "https://example.gov");
        assert!(filtered.text.contains("- Select Board"));
        assert!(filtered.text.contains("- School Committee"));
    }
}
