//! T-score banding for the multiple intelligences survey

use crate::config::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    High,
    SlightlyHigh,
    Average,
    SlightlyLow,
    Low,
}

impl Band {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Band::High, Locale::En) => "High",
            (Band::SlightlyHigh, Locale::En) => "Slightly High",
            (Band::Average, Locale::En) => "Average",
            (Band::SlightlyLow, Locale::En) => "Slightly Low",
            (Band::Low, Locale::En) => "Low",
            (Band::High, Locale::ZhTw) => "高",
            (Band::SlightlyHigh, Locale::ZhTw) => "中高",
            (Band::Average, Locale::ZhTw) => "中等",
            (Band::SlightlyLow, Locale::ZhTw) => "中低",
            (Band::Low, Locale::ZhTw) => "低",
        }
    }
}

/// One row of the static threshold table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationBand {
    pub threshold: f64,
    pub band: Band,
    pub percentile: u8,
}

/// Evaluated top-down, first match wins. Anything below the last row is `Low`.
pub const BANDS: [ClassificationBand; 4] = [
    ClassificationBand { threshold: 60.0, band: Band::High, percentile: 91 },
    ClassificationBand { threshold: 55.0, band: Band::SlightlyHigh, percentile: 75 },
    ClassificationBand { threshold: 45.0, band: Band::Average, percentile: 50 },
    ClassificationBand { threshold: 40.0, band: Band::SlightlyLow, percentile: 25 },
];

const LOW_PERCENTILE: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub band: Band,
    pub percentile: u8,
}

/// Map a T-score to its band and percentile-rank proxy
pub fn classify(t_score: f64) -> Classification {
    BANDS
        .iter()
        .find(|row| t_score >= row.threshold)
        .map(|row| Classification {
            band: row.band,
            percentile: row.percentile,
        })
        .unwrap_or(Classification {
            band: Band::Low,
            percentile: LOW_PERCENTILE,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(t: f64) -> (&'static str, u8) {
        let c = classify(t);
        (c.band.label(Locale::En), c.percentile)
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(pair(59.9), ("Slightly High", 75));
        assert_eq!(pair(60.0), ("High", 91));
        assert_eq!(pair(44.9), ("Slightly Low", 25));
        assert_eq!(pair(45.0), ("Average", 50));
        assert_eq!(pair(39.9), ("Low", 9));
    }

    #[test]
    fn test_fractional_gaps_have_a_band() {
        assert_eq!(pair(54.5), ("Average", 50));
        assert_eq!(pair(55.0), ("Slightly High", 75));
        assert_eq!(pair(40.0), ("Slightly Low", 25));
    }

    #[test]
    fn test_extremes() {
        assert_eq!(pair(100.0), ("High", 91));
        assert_eq!(pair(0.0), ("Low", 9));
    }

    #[test]
    fn test_localized_labels() {
        assert_eq!(Band::SlightlyHigh.label(Locale::ZhTw), "中高");
        assert_eq!(Band::Low.label(Locale::ZhTw), "低");
    }
}
