use scroblcli::logfile::{self, HEADER_FORMAT, HEADER_TZ, LogError};
use scroblcli::types::Rating;

const LINE_LISTENED: &str = "Autechre\tAmber\tSilverside\t9\t321\tL\t1700000000\t";
const LINE_SKIPPED: &str = "Plaid\tDouble Figure\tEyen\t3\t262\tS\t1700000100\t";

// Helper to build a log with valid headers and the given data lines
fn sample_log(lines: &[&str]) -> String {
    let mut content = format!("{}\n{}\n", HEADER_FORMAT, HEADER_TZ);
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}

#[test]
fn test_parse_well_formed_entry() {
    let content = sample_log(&["Artist\tAlbum\tTrack\t1\t200\tL\t1700000000\tmbid-1"]);
    let tracks = logfile::parse(&content).unwrap();

    assert_eq!(tracks.len(), 1);
    let track = &tracks[0];
    assert_eq!(track.artist, "Artist");
    assert_eq!(track.album.as_deref(), Some("Album"));
    assert_eq!(track.title, "Track");
    assert_eq!(track.track_number, 1);
    assert_eq!(track.duration, 200);
    assert_eq!(track.rating, Rating::Listened);
    assert_eq!(track.timestamp, 1_700_000_000);
    assert_eq!(track.mbid.as_deref(), Some("mbid-1"));
}

#[test]
fn test_empty_optional_fields_become_none() {
    let content = sample_log(&["Artist\t\tTrack\t1\t200\tL\t1700000000\t"]);
    let tracks = logfile::parse(&content).unwrap();

    assert_eq!(tracks[0].album, None);
    assert_eq!(tracks[0].mbid, None);
}

#[test]
fn test_rejects_wrong_format_header() {
    let content = format!("#AUDIOSCROBBLER/1.0\n{}\n{}\n", HEADER_TZ, LINE_LISTENED);
    let result = logfile::parse(&content);
    assert!(matches!(result, Err(LogError::BadHeader { line: 1, .. })));
}

#[test]
fn test_rejects_wrong_timezone_header() {
    let content = format!("{}\n#TZ/UTC\n{}\n", HEADER_FORMAT, LINE_LISTENED);
    let result = logfile::parse(&content);
    assert!(matches!(result, Err(LogError::BadHeader { line: 2, .. })));
}

#[test]
fn test_rejects_empty_file() {
    let result = logfile::parse("");
    assert!(matches!(result, Err(LogError::BadHeader { line: 1, .. })));
}

#[test]
fn test_rejects_header_only_log() {
    let content = format!("{}\n{}\n", HEADER_FORMAT, HEADER_TZ);
    let result = logfile::parse(&content);
    assert!(matches!(result, Err(LogError::NoEntries)));
}

#[test]
fn test_rejects_line_with_too_few_fields() {
    let content = sample_log(&["Artist\tAlbum\tTrack\t1\t200\tL"]);
    let result = logfile::parse(&content);
    assert!(matches!(result, Err(LogError::MalformedLine { line: 3, .. })));
}

#[test]
fn test_rejects_unknown_rating_flag() {
    let content = sample_log(&["Artist\tAlbum\tTrack\t1\t200\tX\t1700000000\t"]);
    let result = logfile::parse(&content);
    assert!(matches!(result, Err(LogError::MalformedLine { line: 3, .. })));
}

#[test]
fn test_rejects_unparsable_timestamp() {
    let content = sample_log(&["Artist\tAlbum\tTrack\t1\t200\tL\tyesterday\t"]);
    let result = logfile::parse(&content);
    assert!(matches!(result, Err(LogError::MalformedLine { line: 3, .. })));
}

#[test]
fn test_malformed_line_number_counts_from_file_start() {
    let content = sample_log(&[LINE_LISTENED, "broken line"]);
    let result = logfile::parse(&content);
    assert!(matches!(result, Err(LogError::MalformedLine { line: 4, .. })));
}

#[test]
fn test_blank_lines_are_ignored() {
    let content = sample_log(&[LINE_LISTENED, "", LINE_SKIPPED]);
    let tracks = logfile::parse(&content).unwrap();
    assert_eq!(tracks.len(), 2);
}

#[test]
fn test_filter_keeps_only_listened_entries() {
    let content = sample_log(&[LINE_LISTENED, LINE_SKIPPED, LINE_LISTENED]);
    let tracks = logfile::parse(&content).unwrap();
    assert_eq!(tracks.len(), 3);

    let listened: Vec<_> = tracks.into_iter().filter(|t| t.is_listened()).collect();
    assert_eq!(listened.len(), 2);
    assert!(listened.iter().all(|t| t.rating == Rating::Listened));
}
