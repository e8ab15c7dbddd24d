use super::{Messages, Survey, SurveyKind};
use crate::config::Locale;
use crate::core::classify::classify;
use crate::core::data::{Category, ScoreRange, SummaryRow};
use crate::utils::format::format_score_short;

pub const TITLE: &str = "Multiple Intelligences Chart";
pub const Y_AXIS_LABEL: &str = "Standard Scores (T-scores)";

const CATEGORIES_EN: [Category; 9] = [
    Category::new("Linguistic", "Linguistic Intelligence"),
    Category::new("Logical", "Logical-Mathematical Intelligence"),
    Category::new("Spatial", "Spatial Intelligence"),
    Category::new("Musical", "Musical Intelligence"),
    Category::new("Kinesthetic", "Bodily-Kinesthetic Intelligence"),
    Category::new("Intrapersonal", "Intrapersonal Intelligence"),
    Category::new("Interpersonal", "Interpersonal Intelligence"),
    Category::new("Naturalistic", "Naturalistic Intelligence"),
    Category::new("Existential", "Existential Intelligence"),
];

const CATEGORIES_ZH_TW: [Category; 9] = [
    Category::new("Linguistic", "語文智能"),
    Category::new("Logical", "邏輯數學智能"),
    Category::new("Spatial", "空間智能"),
    Category::new("Musical", "音樂智能"),
    Category::new("Kinesthetic", "肢體動覺智能"),
    Category::new("Intrapersonal", "內省智能"),
    Category::new("Interpersonal", "人際智能"),
    Category::new("Naturalistic", "自然觀察智能"),
    Category::new("Existential", "存在智能"),
];

const MESSAGES_EN: Messages = Messages {
    welcome: "Welcome to the Multiple Intelligences Test!",
    instructions: "Enter the standard scores (T-scores, 0 to 100) for each intelligence type:",
    invalid_number: "Please enter a valid number!",
    out_of_range: "Please enter a value between 0 and 100!",
    summary_header: "Your entered T-scores:",
};

const MESSAGES_ZH_TW: Messages = Messages {
    welcome: "歡迎使用多元智能量表！",
    instructions: "請輸入以下各項智能的標準分數 (T 分數，0 到 100)：",
    invalid_number: "請輸入有效的數字！",
    out_of_range: "請輸入範圍內的數值 (0 到 100)！",
    summary_header: "您輸入的 T 分數：",
};

pub fn survey(locale: Locale) -> Survey {
    let (categories, messages) = match locale {
        Locale::En => (CATEGORIES_EN, MESSAGES_EN),
        Locale::ZhTw => (CATEGORIES_ZH_TW, MESSAGES_ZH_TW),
    };
    Survey {
        kind: SurveyKind::Intelligences,
        locale,
        categories: categories.to_vec(),
        range: ScoreRange::T_SCORE,
        messages,
    }
}

pub fn summary_row(category: &Category, score: f64, locale: Locale) -> SummaryRow {
    let classification = classify(score);
    SummaryRow {
        key: category.key.to_string(),
        label: category.label.to_string(),
        score,
        band: Some(classification.band.label(locale).to_string()),
        percentile: Some(classification.percentile),
    }
}

pub fn summary_line(row: &SummaryRow, locale: Locale) -> String {
    let band = row.band.as_deref().unwrap_or_default();
    let percentile = row.percentile.unwrap_or_default();
    match locale {
        Locale::En => format!(
            "{}: T-score = {}, PR = {}, Range = {}",
            row.key,
            format_score_short(row.score),
            percentile,
            band
        ),
        Locale::ZhTw => format!(
            "{}：T 分數 = {}，PR = {}，範圍 = {}",
            row.key,
            format_score_short(row.score),
            percentile,
            band
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_fixed_keys() {
        let survey = survey(Locale::En);
        let keys: Vec<_> = survey.categories.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                "Linguistic",
                "Logical",
                "Spatial",
                "Musical",
                "Kinesthetic",
                "Intrapersonal",
                "Interpersonal",
                "Naturalistic",
                "Existential"
            ]
        );
        assert_eq!(survey.range, ScoreRange::T_SCORE);
    }

    #[test]
    fn test_locales_share_keys() {
        let en = survey(Locale::En);
        let zh = survey(Locale::ZhTw);
        for (a, b) in en.categories.iter().zip(zh.categories.iter()) {
            assert_eq!(a.key, b.key);
            assert_ne!(a.label, b.label);
        }
    }

    #[test]
    fn test_summary_line() {
        let row = summary_row(&CATEGORIES_EN[0], 57.0, Locale::En);
        assert_eq!(
            summary_line(&row, Locale::En),
            "Linguistic: T-score = 57.0, PR = 75, Range = Slightly High"
        );
    }
}
