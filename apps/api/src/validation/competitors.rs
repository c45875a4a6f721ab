//! Competitor extractor — turns the "Key Competitors" section body into
//! individual attribute records.

use crate::validation::models::CompetitorRecord;

const MARKER_PREFIX: &str = "Competitor #";

/// Splits the section body at every `Competitor #<digits>:` marker and parses
/// each chunk into a record. Markers are discarded; chunks that yield no
/// attributes (blank, or no colon-separated lines) are dropped. Output order
/// follows text order.
pub(crate) fn extract_competitors(body: &str) -> Vec<CompetitorRecord> {
    split_on_markers(body)
        .into_iter()
        .filter_map(parse_chunk)
        .collect()
}

/// Returns the text segments around each marker, including whatever precedes
/// the first marker. The markers themselves are not part of any segment.
fn split_on_markers(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    while let Some((marker_start, marker_end)) = find_marker(&body[start..]) {
        segments.push(&body[start..start + marker_start]);
        start += marker_end;
    }
    segments.push(&body[start..]);
    segments
}

/// Locates the next `Competitor #<digits>:` occurrence in `text`, returning
/// (start of marker, end of marker) byte offsets.
fn find_marker(text: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(found) = text[from..].find(MARKER_PREFIX) {
        let start = from + found;
        let after_prefix = start + MARKER_PREFIX.len();
        let digits = text[after_prefix..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        let after_digits = after_prefix + digits;
        if digits > 0 && text[after_digits..].starts_with(':') {
            return Some((start, after_digits + 1));
        }
        from = start + 1;
    }
    None
}

/// Parses one chunk into a record: each line splits on its first colon into
/// attribute and value. Lines without a colon contribute nothing; an empty
/// record means the chunk is dropped.
fn parse_chunk(chunk: &str) -> Option<CompetitorRecord> {
    let mut record = CompetitorRecord::default();
    for line in chunk.lines() {
        if let Some((attribute, value)) = line.split_once(':') {
            record.insert(attribute.trim().to_string(), value.trim().to_string());
        }
    }
    (!record.is_empty()).then_some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_COMPETITORS: &str = "Competitor #1:\n    Name: Acme\n    Strengths: cheap\n    Weaknesses: slow\nCompetitor #2:\n    Name: Zenith\n    Strengths: fast\n    Weaknesses: pricey\n";

    #[test]
    fn test_extracts_two_competitors_in_order() {
        let competitors = extract_competitors(TWO_COMPETITORS);
        assert_eq!(competitors.len(), 2);
        assert_eq!(
            competitors[0],
            CompetitorRecord::from([
                ("Name", "Acme"),
                ("Strengths", "cheap"),
                ("Weaknesses", "slow"),
            ])
        );
        assert_eq!(
            competitors[1],
            CompetitorRecord::from([
                ("Name", "Zenith"),
                ("Strengths", "fast"),
                ("Weaknesses", "pricey"),
            ])
        );
    }

    #[test]
    fn test_empty_body_yields_no_records() {
        assert!(extract_competitors("").is_empty());
        assert!(extract_competitors("   \n  \n").is_empty());
    }

    #[test]
    fn test_whitespace_only_chunk_is_dropped() {
        let body = "Competitor #1:\n   \nCompetitor #2:\nName: Zenith\n";
        let competitors = extract_competitors(body);
        assert_eq!(competitors.len(), 1);
        assert_eq!(competitors[0].get("Name"), Some("Zenith"));
    }

    #[test]
    fn test_lines_without_colon_are_ignored() {
        let body = "Competitor #1:\nName: Acme\nstray text without separator\n\nStrengths: cheap\n";
        let competitors = extract_competitors(body);
        assert_eq!(competitors.len(), 1);
        assert_eq!(
            competitors[0],
            CompetitorRecord::from([("Name", "Acme"), ("Strengths", "cheap")])
        );
    }

    #[test]
    fn test_value_keeps_additional_colons() {
        let body = "Competitor #1:\nName: Acme: The Original\n";
        let competitors = extract_competitors(body);
        assert_eq!(competitors[0].get("Name"), Some("Acme: The Original"));
    }

    #[test]
    fn test_text_before_first_marker_forms_a_chunk() {
        let body = "Name: Incumbent\nCompetitor #1:\nName: Acme\n";
        let competitors = extract_competitors(body);
        assert_eq!(competitors.len(), 2);
        assert_eq!(competitors[0].get("Name"), Some("Incumbent"));
        assert_eq!(competitors[1].get("Name"), Some("Acme"));
    }

    #[test]
    fn test_marker_without_digits_is_not_a_marker() {
        let body = "Competitor #: not a marker\nName: Acme\n";
        let competitors = extract_competitors(body);
        // Single chunk: the bogus marker line still parses as an attribute.
        assert_eq!(competitors.len(), 1);
        assert_eq!(competitors[0].get("Name"), Some("Acme"));
        assert_eq!(competitors[0].get("Competitor #"), Some("not a marker"));
    }

    #[test]
    fn test_multi_digit_markers() {
        let body = "Competitor #10:\nName: Deca\n";
        let competitors = extract_competitors(body);
        assert_eq!(competitors.len(), 1);
        assert_eq!(competitors[0].get("Name"), Some("Deca"));
    }
}
