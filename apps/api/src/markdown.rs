//! Markdown post processing — title and Sources extraction.
//!
//! Generated posts are opaque Markdown; two things are pulled out of them
//! before rendering: a display title and the trailing "Sources" reference
//! block. Both extractions are pure functions over text and degrade to
//! documented defaults on malformed input instead of failing.

use serde::{Deserialize, Serialize};

/// Sentinel returned when no title heading is found.
/// Callers fall back to a humanized form of the post key.
pub const UNTITLED_POST: &str = "Untitled Post";

/// Titles are only looked for near the top of the document.
const TITLE_SCAN_WINDOW: usize = 15;

/// One `- Title: (URL)` reference from a Sources section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub url: String,
}

/// Result of processing one Markdown document.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedPost {
    /// Extracted title, or [`UNTITLED_POST`].
    pub title: String,
    /// Document content with the Sources span removed.
    pub body: String,
    /// References in document order.
    pub sources: Vec<SourceLink>,
}

/// Extracts the post title: the first line within the scan window whose
/// trimmed form starts with `"# "`. Returns [`UNTITLED_POST`] otherwise.
pub fn extract_title(content: &str) -> String {
    for line in content.lines().take(TITLE_SCAN_WINDOW) {
        if let Some(rest) = line.trim().strip_prefix("# ") {
            return rest.trim().to_string();
        }
    }
    UNTITLED_POST.to_string()
}

/// Processes a Markdown document into title, body, and sources.
///
/// Pass 1 scans lines for heading markers to locate a heading whose text
/// contains "sources" (case-insensitive, numbering prefixes irrelevant). The
/// section it opens is bounded by the next heading of equal-or-higher level,
/// or end of document. Pass 2 matches `- <title>: (<url>)` lines inside that
/// span, keeping http/https URLs only. The whole span, heading line included,
/// is removed from the returned body. Without a Sources heading the content
/// comes back unmodified and the sources list is empty.
pub fn process(content: &str) -> ProcessedPost {
    let title = extract_title(content);
    let lines: Vec<&str> = content.lines().collect();

    let sources_heading = lines.iter().enumerate().find_map(|(idx, line)| {
        heading_parts(line)
            .filter(|(_, text)| text.to_lowercase().contains("sources"))
            .map(|(level, _)| (idx, level))
    });

    let Some((start, level)) = sources_heading else {
        return ProcessedPost {
            title,
            body: content.to_string(),
            sources: Vec::new(),
        };
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| heading_parts(line).is_some_and(|(lvl, _)| lvl <= level))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    let sources = lines[start..end]
        .iter()
        .filter_map(|line| parse_source_line(line))
        .collect();

    let body = lines[..start]
        .iter()
        .chain(lines[end..].iter())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    ProcessedPost {
        title,
        body,
        sources,
    }
}

/// Splits an ATX heading line into (level, text). `None` for non-headings.
fn heading_parts(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim();
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 {
        return None;
    }
    let text = trimmed[level..].strip_prefix(' ')?;
    Some((level, text.trim()))
}

/// Matches one `- <title>: (<url>)` reference line.
fn parse_source_line(line: &str) -> Option<SourceLink> {
    let rest = line.trim().strip_prefix("- ")?;
    let rest = rest.strip_suffix(')')?;
    let (title, url) = rest.rsplit_once(": (")?;
    let title = title.trim();
    let url = url.trim();
    if title.is_empty() {
        return None;
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return None;
    }
    Some(SourceLink {
        title: title.to_string(),
        url: url.to_string(),
    })
}
