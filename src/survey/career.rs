use super::{Messages, Survey, SurveyKind};
use crate::config::Locale;
use crate::core::data::{Category, ScoreRange, SummaryRow};

pub const TITLE: &str = "Career Interest Inventory Radar Chart";

const CATEGORIES_EN: [Category; 6] = [
    Category::new("R", "Realistic"),
    Category::new("I", "Investigative"),
    Category::new("A", "Artistic"),
    Category::new("S", "Social"),
    Category::new("E", "Enterprising"),
    Category::new("C", "Conventional"),
];

const CATEGORIES_ZH_TW: [Category; 6] = [
    Category::new("R", "實用型"),
    Category::new("I", "研究型"),
    Category::new("A", "藝術型"),
    Category::new("S", "社會型"),
    Category::new("E", "企業型"),
    Category::new("C", "事務型"),
];

const MESSAGES_EN: Messages = Messages {
    welcome: "Welcome to the Career Interest Inventory!",
    instructions: "Enter your interest score for each area (0.0 to 6.0):",
    invalid_number: "Please enter a valid number!",
    out_of_range: "Please enter a value in range (0.0 to 6.0)!",
    summary_header: "Your interest scores:",
};

const MESSAGES_ZH_TW: Messages = Messages {
    welcome: "歡迎使用職業興趣量表！",
    instructions: "請輸入以下領域的興趣分數 (0.0 到 6.0):",
    invalid_number: "請輸入有效的數字！",
    out_of_range: "請輸入範圍內的數值 (0.0 到 6.0)！",
    summary_header: "您輸入的興趣分數：",
};

pub fn survey(locale: Locale) -> Survey {
    let (categories, messages) = match locale {
        Locale::En => (CATEGORIES_EN, MESSAGES_EN),
        Locale::ZhTw => (CATEGORIES_ZH_TW, MESSAGES_ZH_TW),
    };
    Survey {
        kind: SurveyKind::Career,
        locale,
        categories: categories.to_vec(),
        range: ScoreRange::INTEREST,
        messages,
    }
}

pub fn summary_row(category: &Category, score: f64) -> SummaryRow {
    SummaryRow {
        key: category.key.to_string(),
        label: category.label.to_string(),
        score,
        band: None,
        percentile: None,
    }
}

pub fn summary_line(row: &SummaryRow, locale: Locale) -> String {
    match locale {
        Locale::En => format!("{}: {}", row.key, row.echoed_score()),
        Locale::ZhTw => format!("{}：{}", row.key, row.echoed_score()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_riasec_order() {
        let survey = survey(Locale::ZhTw);
        let keys: String = survey.categories.iter().map(|c| c.key).collect();
        assert_eq!(keys, "RIASEC");
        assert_eq!(survey.categories[0].label, "實用型");
        assert_eq!(survey.range, ScoreRange::INTEREST);
    }

    #[test]
    fn test_summary_line_echoes_value() {
        let row = summary_row(&CATEGORIES_EN[2], 4.25);
        assert_eq!(summary_line(&row, Locale::En), "A: 4.25");
        let row = summary_row(&CATEGORIES_EN[0], 3.0);
        assert_eq!(summary_line(&row, Locale::ZhTw), "R：3.0");
    }
}
