//! Text formatting for transcript entries

use contracts::usecases::u102_chat::SourceCitation;

/// Relevance score with three decimals, or "N/A" when the backend sent none
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) if value.is_finite() => format!("{:.3}", value),
        _ => "N/A".to_string(),
    }
}

/// Heading of a source block, e.g. "geo.pdf (Score: 0.842)"
pub fn source_heading(source: &SourceCitation) -> String {
    format!("{} (Score: {})", source.filename, format_score(source.score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(0.842)), "0.842");
        assert_eq!(format_score(Some(0.12345)), "0.123");
        assert_eq!(format_score(Some(1.0)), "1.000");
        assert_eq!(format_score(Some(0.0)), "0.000");
        assert_eq!(format_score(None), "N/A");
        assert_eq!(format_score(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn test_source_heading() {
        let source = SourceCitation {
            filename: "geo.pdf".to_string(),
            score: Some(0.842),
            content: "...".to_string(),
        };
        assert_eq!(source_heading(&source), "geo.pdf (Score: 0.842)");

        let unscored = SourceCitation {
            score: None,
            ..source
        };
        assert_eq!(source_heading(&unscored), "geo.pdf (Score: N/A)");
    }
}
