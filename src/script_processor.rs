use std::fmt;
use std::fs::File;
use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::numeral_utils;

// @module: Script splitting and episode assembly

// @const: Episode heading regex, applied to one physical line at a time.
// Opening and closing decorations are independently optional; the title
// separator accepts the double em-dash pair or a single separator char.
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*[【《(（\[]?\s*(第?\s*(?:[一二三四五六七八九十百]+|[0-9]+)\s*集)\s*[】》)）\]]?\s*(?:——|[:：.、\-—])?\s*(.*?)\s*$",
    )
    .unwrap()
});

// @struct: One detected episode heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    // @field: Byte offset where the heading line begins
    pub heading_start: usize,

    // @field: Byte offset of the first line after the heading, or
    // end-of-text when the heading is the last line
    pub content_start: usize,

    // @field: Raw number token, e.g. "第1集" or "十二集"
    pub number_token: String,

    // @field: Trailing title text, if any
    pub title: Option<String>,
}

/// Raw episode span produced by boundary composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeSpan {
    /// Resolved episode number
    pub number: u32,

    /// Detected title (may be empty)
    pub title: String,

    /// Byte range of the episode in the normalized text, heading line
    /// included
    pub span: Range<usize>,
}

// @struct: Single episode entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    // @field: Episode number (detection order is preserved, numeric
    // order is not enforced)
    pub number: u32,

    // @field: Title text from the heading; informational only, never
    // part of the exported name
    pub title: String,

    // @field: Episode content, trimmed
    pub content: String,
}

impl Episode {
    /// Creates a new episode - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(number: u32, title: String, content: String) -> Self {
        Episode {
            number,
            title,
            content,
        }
    }

    /// Identifier used in the export structure ("EP" + number)
    pub fn id(&self) -> String {
        format!("EP{}", self.number)
    }

    /// Canonical display name, always "第<number>集" regardless of the
    /// original heading decoration or title
    pub fn display_name(&self) -> String {
        format!("第{}集", self.number)
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.display_name())?;
        writeln!(f, "{}", self.content)?;
        writeln!(f)
    }
}

/// Single episode record in the export structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeRecord {
    /// "EP" + episode number
    pub episode_id: String,

    /// "第<number>集"
    pub episode_name: String,

    /// Trimmed episode text, heading line included
    pub episode_content: String,
}

/// Top-level export structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptExport {
    /// Episode records in detection order
    pub episodes: Vec<EpisodeRecord>,
}

/// Normalize all line endings to a single line feed
///
/// Handles Windows (\r\n) and old Mac (\r) conventions. Scanning and span
/// arithmetic assume this normalization has happened.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Scan normalized text for all episode headings, in document order
///
/// A heading occupies a whole physical line: optional bracket decoration,
/// optional 第, a Chinese or decimal numeral, 集, then an optional
/// separator and title. Returns an empty Vec when nothing matches; the
/// caller decides the whole-document fallback.
pub fn scan_headings(text: &str) -> Vec<HeadingMatch> {
    let mut matches = Vec::new();
    let mut line_start = 0;

    loop {
        let line_end = text[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(text.len());
        let line = &text[line_start..line_end];

        // Content starts on the next physical line, or at end-of-text
        // for a heading on the last line
        let content_start = if line_end < text.len() {
            line_end + 1
        } else {
            text.len()
        };

        if let Some(caps) = HEADING_REGEX.captures(line) {
            let title = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string());

            matches.push(HeadingMatch {
                heading_start: line_start,
                content_start,
                number_token: caps[1].to_string(),
                title,
            });
        }

        if line_end >= text.len() {
            break;
        }
        line_start = line_end + 1;
    }

    matches
}

/// Compute raw episode spans from heading positions
///
/// Each span runs from its heading line (inclusive) to the next heading
/// line (exclusive), the last one to end-of-text. With no headings the
/// whole text becomes a single span numbered 1. Episode numbers pass
/// through as detected: duplicates and out-of-order numbers are kept.
pub fn compose_spans(text: &str, matches: &[HeadingMatch]) -> Vec<EpisodeSpan> {
    if matches.is_empty() {
        return vec![EpisodeSpan {
            number: 1,
            title: String::new(),
            span: 0..text.len(),
        }];
    }

    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches
                .get(i + 1)
                .map_or(text.len(), |next| next.heading_start);

            EpisodeSpan {
                number: numeral_utils::resolve_episode_number(&m.number_token),
                title: m.title.clone().unwrap_or_default(),
                span: m.heading_start..end,
            }
        })
        .collect()
}

/// Build final episodes from raw spans
///
/// Content is the span substring trimmed of leading and trailing
/// whitespace. Episodes are never mutated after this point.
pub fn assemble(text: &str, spans: Vec<EpisodeSpan>) -> Vec<Episode> {
    spans
        .into_iter()
        .map(|s| Episode {
            number: s.number,
            title: s.title,
            content: text[s.span].trim().to_string(),
        })
        .collect()
}

/// Collection of episodes split out of one script
#[derive(Debug)]
pub struct EpisodeCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// Episodes in detection order
    pub episodes: Vec<Episode>,
}

impl EpisodeCollection {
    /// Create an empty collection - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(source_file: PathBuf) -> Self {
        EpisodeCollection {
            source_file,
            episodes: Vec::new(),
        }
    }

    /// Read a script file and split it into episodes
    #[allow(dead_code)]
    pub fn from_script_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {:?}", path))?;

        Ok(EpisodeCollection {
            source_file: path.to_path_buf(),
            episodes: Self::split_script(&content),
        })
    }

    /// Split raw script text into episodes
    ///
    /// This is the core entry point and is total: any input, including
    /// the empty string, yields at least one episode.
    pub fn split_script(content: &str) -> Vec<Episode> {
        let normalized = normalize_line_endings(content);
        let matches = scan_headings(&normalized);

        if matches.is_empty() {
            debug!("No episode headings found, treating the whole script as one episode");
        } else {
            debug!("Found {} episode heading(s)", matches.len());
        }

        let spans = compose_spans(&normalized, &matches);
        assemble(&normalized, spans)
    }

    /// Build the export structure
    pub fn to_export(&self) -> ScriptExport {
        ScriptExport {
            episodes: self
                .episodes
                .iter()
                .map(|ep| EpisodeRecord {
                    episode_id: ep.id(),
                    episode_name: ep.display_name(),
                    episode_content: ep.content.clone(),
                })
                .collect(),
        }
    }

    /// Serialize the export structure to JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let export = self.to_export();
        let json = if pretty {
            serde_json::to_string_pretty(&export)
        } else {
            serde_json::to_string(&export)
        };
        json.context("Failed to serialize episodes to JSON")
    }

    /// Write the JSON export to a file
    pub fn write_to_json<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        file.write_all(self.to_json(pretty)?.as_bytes())
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;

        Ok(())
    }
}

impl fmt::Display for EpisodeCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Episode Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Episodes: {}", self.episodes.len())?;
        Ok(())
    }
}
