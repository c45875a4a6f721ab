//! Section splitter — a two-state line scanner that cuts the model's raw
//! reply into labeled sections.
//!
//! Heading detection is deliberately heuristic: any line that starts (no
//! indentation) with a capital letter and has only alphabetic words before
//! its first colon opens a new section. That matches the shape the prompt asks for
//! ("Market Demand:") but will also fire on any capitalized phrase the model
//! happens to end with a colon. Parsing is best-effort; mis-splits surface as
//! unrecognized section names and get dropped at the schema layer.

/// One labeled block of the raw reply. Not exposed outside the parsing core.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawSection {
    pub name: String,
    pub body: String,
}

enum ScanState {
    /// No heading seen yet; lines are discarded.
    SeekingHeading,
    /// Collecting body lines for the most recent heading.
    AccumulatingBody { name: String, lines: Vec<String> },
}

/// Splits raw text into one `RawSection` per detected heading.
/// Text with no headings at all produces an empty vec.
pub(crate) fn split_sections(text: &str) -> Vec<RawSection> {
    let mut sections = Vec::new();
    let mut state = ScanState::SeekingHeading;

    for line in text.lines() {
        match heading_split(line) {
            Some((name, rest)) => {
                if let ScanState::AccumulatingBody {
                    name: prev_name,
                    lines: prev_lines,
                } = state
                {
                    sections.push(finish_section(prev_name, prev_lines));
                }
                let mut lines = Vec::new();
                if !rest.trim().is_empty() {
                    lines.push(rest.to_string());
                }
                state = ScanState::AccumulatingBody {
                    name: name.to_string(),
                    lines,
                };
            }
            None => {
                if let ScanState::AccumulatingBody { lines, .. } = &mut state {
                    lines.push(line.to_string());
                }
            }
        }
    }

    if let ScanState::AccumulatingBody { name, lines } = state {
        sections.push(finish_section(name, lines));
    }

    sections
}

/// If `line` opens a section, returns (section name, remainder after the
/// colon). A heading line starts at column zero with an ASCII capital, and
/// everything before the first colon is purely alphabetic words. Connective
/// words may be lowercase ("Ability to Pay:").
fn heading_split(line: &str) -> Option<(&str, &str)> {
    if !line.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    let (prefix, rest) = line.split_once(':')?;
    let mut words = prefix.split_whitespace().peekable();
    words.peek()?;
    for word in words {
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
    }
    Some((prefix.trim(), rest))
}

fn finish_section(name: String, lines: Vec<String>) -> RawSection {
    RawSection {
        name,
        body: clean_body(&lines.join("\n")),
    }
}

/// Trims the body and strips leading dash run(s) the model uses as list
/// markers or separators under a heading.
fn clean_body(body: &str) -> String {
    let mut rest = body.trim();
    while rest.starts_with('-') {
        rest = rest.trim_start_matches('-').trim_start();
    }
    rest.trim_end().to_string()
}
