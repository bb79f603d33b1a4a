//! Category score tables and score bands
//!
//! Every score threshold in the project lives here; components must not
//! carry their own cut points.

/// Maximum score for a known category name. Unknown names use 20.
pub fn max_score_for(name: &str) -> u32 {
    match name {
        // resume strength categories (20 points each)
        "Technical Skills" => 20,
        "Experience Quality" => 20,
        "Education" => 20,
        "Resume Format" => 20,
        "Overall Presentation" => 20,
        // job match categories
        "Skills Match" => 25,
        "Experience Match" => 25,
        "Education Match" => 20,
        "Requirements Match" => 20,
        "Overall Fit" => 10,
        _ => 20,
    }
}

/// Shorter display name for a category. Falls back to the name itself.
pub fn display_name_for(name: &str) -> &str {
    match name {
        "Resume Format" => "Format",
        "Overall Presentation" => "Presentation",
        other => other,
    }
}

/// Qualitative band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }

    /// CSS class suffix used by the web components
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::NeedsImprovement => "needs-improvement",
        }
    }
}

/// Band cut points on the percentage scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBands {
    pub excellent_min: f32,
    pub good_min: f32,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            excellent_min: 80.0,
            good_min: 60.0,
        }
    }
}

impl ScoreBands {
    pub fn band(&self, percentage: f32) -> ScoreBand {
        if percentage >= self.excellent_min {
            ScoreBand::Excellent
        } else if percentage >= self.good_min {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }
}

/// Band for an institution reputation score on the 0-10 scale
pub fn reputation_band(score: u8) -> ScoreBand {
    if score >= 9 {
        ScoreBand::Excellent
    } else if score >= 6 {
        ScoreBand::Good
    } else {
        ScoreBand::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_score_known_categories() {
        assert_eq!(max_score_for("Technical Skills"), 20);
        assert_eq!(max_score_for("Skills Match"), 25);
        assert_eq!(max_score_for("Experience Match"), 25);
        assert_eq!(max_score_for("Overall Fit"), 10);
    }

    #[test]
    fn test_max_score_unknown_defaults_to_20() {
        assert_eq!(max_score_for("Volunteering"), 20);
    }

    #[test]
    fn test_display_name_substitution() {
        assert_eq!(display_name_for("Resume Format"), "Format");
        assert_eq!(display_name_for("Overall Presentation"), "Presentation");
        assert_eq!(display_name_for("Technical Skills"), "Technical Skills");
    }

    #[test]
    fn test_default_bands() {
        let bands = ScoreBands::default();
        assert_eq!(bands.band(92.0), ScoreBand::Excellent);
        assert_eq!(bands.band(80.0), ScoreBand::Excellent);
        assert_eq!(bands.band(79.9), ScoreBand::Good);
        assert_eq!(bands.band(60.0), ScoreBand::Good);
        assert_eq!(bands.band(59.9), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_custom_bands() {
        // the cut points observed in an older component revision
        let bands = ScoreBands {
            excellent_min: 90.0,
            good_min: 75.0,
        };
        assert_eq!(bands.band(85.0), ScoreBand::Good);
        assert_eq!(bands.band(75.5), ScoreBand::Good);
        assert_eq!(bands.band(74.0), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_reputation_band() {
        assert_eq!(reputation_band(10), ScoreBand::Excellent);
        assert_eq!(reputation_band(9), ScoreBand::Excellent);
        assert_eq!(reputation_band(6), ScoreBand::Good);
        assert_eq!(reputation_band(5), ScoreBand::NeedsImprovement);
    }
}
