//! Parser for AUDIOSCROBBLER/1.1 listening logs.
//!
//! Portable players append one tab-separated record per played track to a
//! `.scrobbler.log` file. The first two lines identify the format version
//! and the timezone marker and must match exactly; everything after that is
//! data. Timestamps are device-local when the timezone marker is `UNKNOWN`,
//! which is why submission applies an explicit UTC offset.

use std::path::Path;

use crate::types::{Rating, ScrobbleTrack};

pub const HEADER_FORMAT: &str = "#AUDIOSCROBBLER/1.1";
pub const HEADER_TZ: &str = "#TZ/UNKNOWN";

const FIELD_COUNT: usize = 8;

#[derive(Debug)]
pub enum LogError {
    IoError(std::io::Error),
    BadHeader {
        line: usize,
        expected: &'static str,
        found: String,
    },
    NoEntries,
    MalformedLine {
        line: usize,
        reason: String,
    },
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "cannot read log file: {}", e),
            LogError::BadHeader {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected header '{}', found '{}'",
                line, expected, found
            ),
            LogError::NoEntries => write!(f, "log contains no track entries"),
            LogError::MalformedLine { line, reason } => {
                write!(f, "line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for LogError {}

/// Reads and parses a listening log from disk.
pub async fn load(path: &Path) -> Result<Vec<ScrobbleTrack>, LogError> {
    let content = async_fs::read_to_string(path).await?;
    parse(&content)
}

/// Parses listening-log content into track entries.
///
/// Validates the two fixed header lines, then maps every remaining
/// non-blank line to a [`ScrobbleTrack`]. A log without at least one data
/// line is rejected.
pub fn parse(content: &str) -> Result<Vec<ScrobbleTrack>, LogError> {
    let mut lines = content.lines();

    expect_header(lines.next(), 1, HEADER_FORMAT)?;
    expect_header(lines.next(), 2, HEADER_TZ)?;

    let mut tracks = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // header lines are 1 and 2, data starts at line 3
        tracks.push(parse_line(line, idx + 3)?);
    }

    if tracks.is_empty() {
        return Err(LogError::NoEntries);
    }

    Ok(tracks)
}

fn expect_header(
    line: Option<&str>,
    lineno: usize,
    expected: &'static str,
) -> Result<(), LogError> {
    match line {
        Some(found) if found.trim_end() == expected => Ok(()),
        other => Err(LogError::BadHeader {
            line: lineno,
            expected,
            found: other.unwrap_or_default().to_string(),
        }),
    }
}

fn parse_line(line: &str, lineno: usize) -> Result<ScrobbleTrack, LogError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < FIELD_COUNT {
        return Err(LogError::MalformedLine {
            line: lineno,
            reason: format!(
                "expected {} tab-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    }

    let rating = match fields[5] {
        "L" => Rating::Listened,
        "S" => Rating::Skipped,
        other => {
            return Err(LogError::MalformedLine {
                line: lineno,
                reason: format!("unknown rating flag '{}'", other),
            });
        }
    };

    Ok(ScrobbleTrack {
        artist: fields[0].to_string(),
        album: optional(fields[1]),
        title: fields[2].to_string(),
        track_number: parse_number(fields[3], lineno, "track number")?,
        duration: parse_number(fields[4], lineno, "duration")?,
        rating,
        timestamp: parse_number(fields[6], lineno, "timestamp")?,
        mbid: optional(fields[7]),
    })
}

fn optional(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_number<T: std::str::FromStr>(
    field: &str,
    lineno: usize,
    what: &str,
) -> Result<T, LogError> {
    field.trim().parse().map_err(|_| LogError::MalformedLine {
        line: lineno,
        reason: format!("cannot parse {} '{}'", what, field),
    })
}
