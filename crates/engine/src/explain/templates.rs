//! Fixed wording for the explanation generator: the advisory notice, score
//! band labels, and the glyphs used in the per-skill detail lines.

/// Attached verbatim to every evaluation result.
pub const ADVISORY_NOTICE: &str = "This evaluation is advisory only. Scores reflect automated \
text matching against the job description and must not be used as the sole basis for any \
hiring decision.";

pub const GLYPH_MATCHED: &str = "✓";
pub const GLYPH_PARTIAL: &str = "◐";
pub const GLYPH_MISSING: &str = "✗";

/// Maximum length of an evidence snippet quoted in a detail line.
pub const EVIDENCE_SNIPPET_MAX: usize = 80;

/// Qualitative label for a 0-100 score.
pub fn score_label(score: u8) -> &'static str {
    match score {
        85..=100 => "Excellent Match",
        70..=84 => "Good Match",
        55..=69 => "Fair Match",
        _ => "Needs Work",
    }
}

/// Phrase describing overall alignment, used in the opening sentence.
pub fn alignment_phrase(score: u8) -> &'static str {
    match score {
        70..=100 => "aligns strongly with",
        55..=69 => "aligns moderately with",
        _ => "aligns weakly with",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label_band_edges() {
        assert_eq!(score_label(100), "Excellent Match");
        assert_eq!(score_label(85), "Excellent Match");
        assert_eq!(score_label(84), "Good Match");
        assert_eq!(score_label(70), "Good Match");
        assert_eq!(score_label(69), "Fair Match");
        assert_eq!(score_label(55), "Fair Match");
        assert_eq!(score_label(54), "Needs Work");
        assert_eq!(score_label(0), "Needs Work");
    }

    #[test]
    fn test_alignment_phrase_tracks_label_bands() {
        assert_eq!(alignment_phrase(72), "aligns strongly with");
        assert_eq!(alignment_phrase(60), "aligns moderately with");
        assert_eq!(alignment_phrase(30), "aligns weakly with");
    }
}
