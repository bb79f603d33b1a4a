//! Free-text report segmenter
//!
//! The legacy response shape is an LLM-authored report with
//! loosely-conventioned markers. This module splits it into named
//! sections, extracts `Name: Score` lines into category scores, parses
//! the overall score line, and classifies the remaining lines for
//! display. Malformed text never errors; whatever does not match simply
//! does not extract.

use crate::score::{display_name_for, max_score_for};

pub const RESUME_STRENGTH_HEADER: &str = "RESUME STRENGTH CATEGORIES";
pub const JOB_MATCH_HEADER: &str = "JOB MATCH CATEGORIES";

const OVERALL_LABELS: [&str; 2] = ["OVERALL RESUME STRENGTH SCORE", "OVERALL MATCH SCORE"];

/// What a top-level report section holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    ResumeStrength,
    JobMatch,
    Other,
}

/// One top-level slice of the report, header line included
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub text: String,
}

/// A named category score with its maximum and percentage
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub name: String,
    pub display_name: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: f32,
}

impl CategoryScore {
    fn new(name: &str, score: u32) -> Self {
        let max_score = max_score_for(name);
        Self {
            name: name.to_string(),
            display_name: display_name_for(name).to_string(),
            score,
            max_score,
            percentage: score as f32 / max_score as f32 * 100.0,
        }
    }
}

/// Fully segmented report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentedReport {
    pub sections: Vec<ReportSection>,
    pub strength_scores: Vec<CategoryScore>,
    pub job_match_scores: Vec<CategoryScore>,
    pub overall_score: Option<u32>,
}

impl SegmentedReport {
    pub fn has_job_match(&self) -> bool {
        !self.job_match_scores.is_empty()
    }
}

/// Segment a free-text analysis report.
///
/// Sections split on the two known category headers (optionally prefixed
/// by `<digits>.`); scores come from the first section of each kind; the
/// overall score comes from whichever section carries its label.
pub fn segment(analysis: &str) -> SegmentedReport {
    let sections = split_sections(analysis);

    let strength_scores = sections
        .iter()
        .find(|s| s.kind == SectionKind::ResumeStrength)
        .map(|s| extract_scores(&s.text))
        .unwrap_or_default();

    let job_match_scores = sections
        .iter()
        .find(|s| s.kind == SectionKind::JobMatch)
        .map(|s| extract_scores(&s.text))
        .unwrap_or_default();

    let overall_score = sections.iter().find_map(|s| parse_overall(&s.text));

    SegmentedReport {
        sections,
        strength_scores,
        job_match_scores,
        overall_score,
    }
}

/// Split the report on category header lines, keeping each header at the
/// start of its section. Leading text before any header becomes `Other`.
fn split_sections(analysis: &str) -> Vec<ReportSection> {
    let mut sections = Vec::new();
    let mut kind = SectionKind::Other;
    let mut buffer: Vec<&str> = Vec::new();

    for line in analysis.lines() {
        if let Some(header_kind) = header_kind(line) {
            flush(&mut sections, kind, &mut buffer);
            kind = header_kind;
        }
        buffer.push(line);
    }
    flush(&mut sections, kind, &mut buffer);

    sections
}

fn flush(sections: &mut Vec<ReportSection>, kind: SectionKind, buffer: &mut Vec<&str>) {
    let text = buffer.join("\n");
    buffer.clear();
    if !text.trim().is_empty() {
        sections.push(ReportSection {
            kind,
            text: text.trim().to_string(),
        });
    }
}

fn header_kind(line: &str) -> Option<SectionKind> {
    if line.contains(RESUME_STRENGTH_HEADER) {
        Some(SectionKind::ResumeStrength)
    } else if line.contains(JOB_MATCH_HEADER) {
        Some(SectionKind::JobMatch)
    } else {
        None
    }
}

/// Extract `Name: Score` lines from a category section.
///
/// A flag turns on at the category header and off at the next top-level
/// `<digits>.` heading; while on, lines with a colon are tried and the
/// ones that do not parse are skipped.
pub fn extract_scores(section: &str) -> Vec<CategoryScore> {
    let mut scores = Vec::new();
    let mut in_scores = false;
    let mut found_scores = false;

    for line in section.lines() {
        let trimmed = line.trim();

        if header_kind(trimmed).is_some() {
            in_scores = true;
            continue;
        }
        if is_numbered_heading(trimmed) {
            in_scores = false;
            if found_scores {
                break;
            }
        }
        if !in_scores {
            continue;
        }

        if let Some((name_part, score_part)) = trimmed.split_once(':') {
            let name = name_part.trim();
            if name.is_empty() {
                continue;
            }
            if let Some(score) = parse_leading_u32(score_part.trim()) {
                found_scores = true;
                scores.push(CategoryScore::new(name, score));
            }
        }
    }

    scores
}

/// Parse the overall score out of a section, if its label is present.
/// The value may sit after the colon on the label line or on a later
/// line ("OVERALL MATCH SCORE (0-100):" followed by the number).
fn parse_overall(section: &str) -> Option<u32> {
    let after_label = OVERALL_LABELS
        .iter()
        .find_map(|label| section.find(label).map(|pos| &section[pos + label.len()..]))?;
    let after_colon = &after_label[after_label.find(':')? + 1..];
    parse_first_u32(after_colon)
}

/// `parseInt`-style prefix parse: leading digits of the string, if any
fn parse_leading_u32(text: &str) -> Option<u32> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// First run of digits anywhere in the string
fn parse_first_u32(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    parse_leading_u32(&text[start..])
}

fn is_numbered_heading(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with('.')
}

// ---------------------------------------------------------------------
// Line classification for the formatting pass
// ---------------------------------------------------------------------

/// How a single report line should render. Category headers, score lines
/// and score-listing bullets are suppressed because the score panels
/// already present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Spacer,
    Suppressed,
    Bullet(&'a str),
    Heading(&'a str),
    Original(&'a str),
    Improved(&'a str),
    Paragraph(&'a str),
}

/// Classify one line. First match wins, in this order: spacer, category
/// header, category score line, score-listing bullet, bullet, numbered
/// heading, Original/Improved pair, paragraph.
pub fn classify_line<'a>(
    line: &'a str,
    strength_scores: &[CategoryScore],
    job_match_scores: &[CategoryScore],
) -> LineKind<'a> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Spacer;
    }
    if header_kind(trimmed).is_some() {
        return LineKind::Suppressed;
    }
    if is_score_line(trimmed, strength_scores, job_match_scores) {
        return LineKind::Suppressed;
    }
    if trimmed.starts_with('•') || trimmed.starts_with('-') {
        if is_category_bullet(trimmed, strength_scores, job_match_scores) {
            return LineKind::Suppressed;
        }
        let content = trimmed.trim_start_matches(['•', '-']).trim_start();
        return LineKind::Bullet(content);
    }
    if is_numbered_heading(trimmed) {
        return LineKind::Heading(trimmed);
    }
    if let Some(pos) = trimmed.find("Original:") {
        return LineKind::Original(trimmed[pos + "Original:".len()..].trim());
    }
    if let Some(pos) = trimmed.find("→ Improved:") {
        return LineKind::Improved(trimmed[pos + "→ Improved:".len()..].trim());
    }

    LineKind::Paragraph(trimmed)
}

fn is_score_line(line: &str, strength: &[CategoryScore], job_match: &[CategoryScore]) -> bool {
    line.contains(':')
        && strength
            .iter()
            .chain(job_match.iter())
            .any(|category| line.contains(&category.name))
}

/// Bullets that merely restate category scores ("• Technical Skills: strong")
fn is_category_bullet(line: &str, strength: &[CategoryScore], job_match: &[CategoryScore]) -> bool {
    if !(line.starts_with("• ") || line.starts_with("- ")) {
        return false;
    }
    let lower = line.to_lowercase();

    strength.iter().any(|category| {
        lower.contains(&category.name.to_lowercase())
            || line.contains("skills")
            || line.contains("experience")
            || line.contains("education")
            || line.contains("format")
            || line.contains("presentation")
    }) || job_match
        .iter()
        .any(|category| lower.contains(&category.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REPORT: &str = "\
1. OVERALL RESUME STRENGTH SCORE (0-100):
78
The score reflects strong technical depth with formatting gaps.

RESUME STRENGTH CATEGORIES
Technical Skills: 15
Experience Quality: 17
Education: 14
Resume Format: 12
Overall Presentation: 13

2. KEY STRENGTHS:
- Strong ownership of production systems
- Clear quantified impact in most bullets

3. AREAS FOR IMPROVEMENT:
- Tighten the summary section
Original: Responsible for APIs.
→ Improved: Built and operated REST APIs serving 1M+ daily requests.
";

    // =============================================
    // segment
    // =============================================

    #[test]
    fn test_segment_extracts_strength_scores() {
        let report = segment(SAMPLE_REPORT);

        assert_eq!(report.strength_scores.len(), 5);
        let technical = &report.strength_scores[0];
        assert_eq!(technical.name, "Technical Skills");
        assert_eq!(technical.display_name, "Technical Skills");
        assert_eq!(technical.score, 15);
        assert_eq!(technical.max_score, 20);
        assert_eq!(technical.percentage, 75.0);

        let format = &report.strength_scores[3];
        assert_eq!(format.display_name, "Format");
    }

    #[test]
    fn test_segment_overall_score_on_following_line() {
        let report = segment(SAMPLE_REPORT);
        assert_eq!(report.overall_score, Some(78));
    }

    #[test]
    fn test_segment_overall_score_same_line() {
        let report = segment("OVERALL MATCH SCORE: 85\n");
        assert_eq!(report.overall_score, Some(85));
    }

    #[test]
    fn test_segment_no_headers_yields_nothing() {
        let report = segment("Just some prose.\nNo markers at all.\n");
        assert!(report.strength_scores.is_empty());
        assert!(report.job_match_scores.is_empty());
        assert_eq!(report.overall_score, None);
        // the whole text still renders, as one Other section
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].kind, SectionKind::Other);
    }

    #[test]
    fn test_segment_empty_input() {
        let report = segment("");
        assert!(report.sections.is_empty());
        assert_eq!(report.overall_score, None);
    }

    #[test]
    fn test_segment_job_match_section() {
        let text = "\
6. JOB MATCH CATEGORIES
Skills Match: 20
Experience Match: 18
Overall Fit: 7

7. RECOMMENDATIONS:
- Add the missing cloud certification
";
        let report = segment(text);
        assert!(report.has_job_match());
        assert_eq!(report.job_match_scores.len(), 3);

        let skills = &report.job_match_scores[0];
        assert_eq!(skills.max_score, 25);
        assert_eq!(skills.percentage, 80.0);

        let fit = &report.job_match_scores[2];
        assert_eq!(fit.max_score, 10);
        assert_eq!(fit.percentage, 70.0);
    }

    #[test]
    fn test_segment_numbered_header_recognized() {
        let text = "1. RESUME STRENGTH CATEGORIES:\nTechnical Skills: 10\n";
        let report = segment(text);
        assert_eq!(report.strength_scores.len(), 1);
        assert_eq!(report.sections[0].kind, SectionKind::ResumeStrength);
    }

    // =============================================
    // extract_scores
    // =============================================

    #[test]
    fn test_extract_scores_stops_at_next_heading() {
        let section = "\
RESUME STRENGTH CATEGORIES
Technical Skills: 15
2. KEY STRENGTHS:
Not A Category: 99
";
        let scores = extract_scores(section);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].name, "Technical Skills");
    }

    #[test]
    fn test_extract_scores_skips_unparseable_lines() {
        let section = "\
RESUME STRENGTH CATEGORIES
Technical Skills: strong
Education: 14
: 12
";
        let scores = extract_scores(section);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].name, "Education");
    }

    #[test]
    fn test_extract_scores_unknown_category_uses_default_max() {
        let section = "RESUME STRENGTH CATEGORIES\nVolunteering: 10\n";
        let scores = extract_scores(section);
        assert_eq!(scores[0].max_score, 20);
        assert_eq!(scores[0].percentage, 50.0);
    }

    #[test]
    fn test_extract_scores_leading_integer_parse() {
        // "15/20" parses as 15, parseInt-style
        let section = "RESUME STRENGTH CATEGORIES\nTechnical Skills: 15/20\n";
        let scores = extract_scores(section);
        assert_eq!(scores[0].score, 15);
    }

    // =============================================
    // classify_line
    // =============================================

    fn sample_scores() -> Vec<CategoryScore> {
        vec![CategoryScore::new("Technical Skills", 15)]
    }

    #[test]
    fn test_classify_spacer_and_header() {
        assert_eq!(classify_line("   ", &[], &[]), LineKind::Spacer);
        assert_eq!(
            classify_line("RESUME STRENGTH CATEGORIES", &[], &[]),
            LineKind::Suppressed
        );
        assert_eq!(
            classify_line("1. RESUME STRENGTH CATEGORIES:", &[], &[]),
            LineKind::Suppressed
        );
    }

    #[test]
    fn test_classify_score_line_suppressed() {
        let strength = sample_scores();
        assert_eq!(
            classify_line("Technical Skills: 15", &strength, &[]),
            LineKind::Suppressed
        );
        // without extracted categories the same line is a paragraph
        assert_eq!(
            classify_line("Technical Skills: 15", &[], &[]),
            LineKind::Paragraph("Technical Skills: 15")
        );
    }

    #[test]
    fn test_classify_category_bullet_suppressed_before_generic_bullet() {
        let strength = sample_scores();
        assert_eq!(
            classify_line("- education needs more detail", &strength, &[]),
            LineKind::Suppressed
        );
        assert_eq!(
            classify_line("- Shipped the billing migration", &strength, &[]),
            LineKind::Bullet("Shipped the billing migration")
        );
    }

    #[test]
    fn test_classify_heading_and_paragraph() {
        assert_eq!(
            classify_line("3. AREAS FOR IMPROVEMENT:", &[], &[]),
            LineKind::Heading("3. AREAS FOR IMPROVEMENT:")
        );
        assert_eq!(
            classify_line("The resume reads well overall.", &[], &[]),
            LineKind::Paragraph("The resume reads well overall.")
        );
    }

    #[test]
    fn test_classify_original_and_improved() {
        assert_eq!(
            classify_line("Original: Responsible for APIs.", &[], &[]),
            LineKind::Original("Responsible for APIs.")
        );
        assert_eq!(
            classify_line("→ Improved: Built REST APIs serving 1M+ requests.", &[], &[]),
            LineKind::Improved("Built REST APIs serving 1M+ requests.")
        );
    }
}
