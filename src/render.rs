//! Terminal rendering of analysis results
//!
//! Renders both wire shapes: structured responses as per-section cards,
//! free-text reports through the segmenter.

use resume_ai_common::report::{self, CategoryScore, LineKind};
use resume_ai_common::score::{reputation_band, ScoreBands};
use resume_ai_common::types::{
    AnalysisPayload, AnalysisResponse, JobMatchAnalysis, ResumePoint, StarAnalysis,
};

const BAR_WIDTH: usize = 20;

pub fn render_payload(payload: &AnalysisPayload) {
    match payload {
        AnalysisPayload::Structured(response) => render_structured(response),
        AnalysisPayload::Report(report) => render_report(&report.analysis),
    }
}

fn render_structured(response: &AnalysisResponse) {
    let bands = ScoreBands::default();

    for section in &response.resume_analysis.sections {
        println!("\n━━ {} ━━", section.section_type);

        for point in &section.points {
            match point {
                ResumePoint::Standard(standard) => {
                    println!("\n  {}", standard.text);
                    println!(
                        "    STAR {}   technical {}/5",
                        star_row(&standard.star),
                        standard.technical_score
                    );
                    if !standard.metrics.is_empty() {
                        println!("    metrics: {}", standard.metrics.join(", "));
                    }
                    if !standard.improvement.is_empty() {
                        println!("    → {}", standard.improvement);
                    }
                }
                ResumePoint::Education(education) => {
                    println!(
                        "\n  {} in {}, {}",
                        education.course, education.subject, education.school
                    );
                    let reputation = &education.subject_course_school_reputation;
                    println!(
                        "    domestic reputation      {}/10 ({})",
                        reputation.domestic_score,
                        reputation_band(reputation.domestic_score).label()
                    );
                    println!(
                        "    international reputation {}/10 ({})",
                        reputation.international_score,
                        reputation_band(reputation.international_score).label()
                    );
                    if !education.text.is_empty() {
                        println!("    {}", education.text);
                    }
                    if let Some(improvement) = &education.improvement {
                        println!("    → {}", improvement);
                    }
                }
            }
        }
    }

    if let Some(recommendations) = &response.resume_analysis.recommendations {
        if !recommendations.is_empty() {
            println!("\n━━ Recommendations ━━");
            for recommendation in recommendations {
                println!("  • {}", recommendation);
            }
        }
    }

    if let Some(job_match) = &response.job_match_analysis {
        render_job_match(job_match, &bands);
    }

    let usage = &response.token_usage;
    if usage.total_tokens > 0 {
        println!(
            "\n({} tokens, ${:.3})",
            usage.total_tokens, usage.total_cost
        );
    }
}

fn render_job_match(job_match: &JobMatchAnalysis, bands: &ScoreBands) {
    println!("\n━━ Job Match ━━");
    println!(
        "  match score: {}/100 ({})",
        job_match.match_score,
        bands.band(job_match.match_score as f32).label()
    );

    let technical = &job_match.technical_match;
    if !technical.matched_skills.is_empty() {
        println!("  matched skills: {}", technical.matched_skills.join(", "));
    }
    if !technical.missing_skills.is_empty() {
        println!("  missing skills: {}", technical.missing_skills.join(", "));
    }

    let experience = &job_match.experience_match;
    println!(
        "  experience: {} years of {} required (score {})",
        experience.actual_years, experience.required_years, experience.experience_score
    );

    let requirements = &job_match.key_requirements;
    for (label, items) in [
        ("met", &requirements.met),
        ("partially met", &requirements.partially_met),
        ("not met", &requirements.not_met),
    ] {
        for item in items {
            println!("    [{}] {}", label, item);
        }
    }

    for revision in &job_match.section_recommendations.experience_projects {
        println!("  Original: {}", revision.original_point);
        println!("  Improved: {}", revision.improved_version);
    }

    for recommendation in &job_match.recommendations {
        println!("  • {}", recommendation);
    }
}

fn render_report(analysis: &str) {
    let segmented = report::segment(analysis);
    let bands = ScoreBands::default();

    if let Some(overall) = segmented.overall_score {
        let label = if segmented.has_job_match() {
            "MATCH SCORE"
        } else {
            "RESUME STRENGTH"
        };
        println!(
            "\n{}: {}/100 ({})",
            label,
            overall,
            bands.band(overall as f32).label()
        );
    }

    if !segmented.strength_scores.is_empty() {
        println!("\n━━ Resume Strength ━━");
        render_score_table(&segmented.strength_scores);
    }
    if !segmented.job_match_scores.is_empty() {
        println!("\n━━ Job Match ━━");
        render_score_table(&segmented.job_match_scores);
    }

    for section in &segmented.sections {
        for line in section.text.lines() {
            match report::classify_line(
                line,
                &segmented.strength_scores,
                &segmented.job_match_scores,
            ) {
                LineKind::Spacer => println!(),
                LineKind::Suppressed => {}
                LineKind::Bullet(content) => println!("  • {}", content),
                LineKind::Heading(heading) => println!("\n{}", heading),
                LineKind::Original(content) => println!("  Original: {}", content),
                LineKind::Improved(content) => println!("  Improved: {}", content),
                LineKind::Paragraph(content) => println!("{}", content),
            }
        }
    }
}

fn render_score_table(scores: &[CategoryScore]) {
    for category in scores {
        println!(
            "  {:<16} {} {:>2}/{} ({:.0}%)",
            category.display_name,
            score_bar(category.percentage),
            category.score,
            category.max_score,
            category.percentage
        );
    }
}

fn star_row(star: &StarAnalysis) -> String {
    [
        ("S", star.situation),
        ("T", star.task),
        ("A", star.action),
        ("R", star.result),
    ]
    .iter()
    .map(|(letter, hit)| format!("{}{}", letter, if *hit { "✓" } else { "✗" }))
    .collect::<Vec<_>>()
    .join(" ")
}

fn score_bar(percentage: f32) -> String {
    let filled = ((percentage / 100.0 * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
