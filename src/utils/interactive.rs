use crate::config::Locale;
use crate::core::data::{Category, Rejection};
use crate::core::traits::ScoreSource;
use crate::survey::{Survey, SurveyKind};
use crate::utils::error::{AppError, AppResult};
use std::io::{BufRead, Write};

/// Print `prompt` and read one line. `None` means the input is closed.
pub fn prompt_input<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> AppResult<Option<String>> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

/// Ask which survey to take when none was named on the command line
pub fn select_survey<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    locale: Locale,
) -> AppResult<SurveyKind> {
    let (menu, prompt, retry) = match locale {
        Locale::En => (
            [
                "1) Multiple Intelligences (T-scores, bar chart)",
                "2) Career Interest Inventory (RIASEC, radar chart)",
            ],
            "Choose a survey [1/2]: ",
            "Please enter 1 or 2",
        ),
        Locale::ZhTw => (
            ["1) 多元智能量表 (T 分數，長條圖)", "2) 職業興趣量表 (RIASEC，雷達圖)"],
            "請選擇量表 [1/2]：",
            "請輸入 1 或 2",
        ),
    };

    for line in menu {
        writeln!(writer, "{}", line)?;
    }
    loop {
        let input = prompt_input(reader, writer, prompt)?.ok_or(AppError::InputClosed)?;
        match input.as_str() {
            "1" => return Ok(SurveyKind::Intelligences),
            "2" => return Ok(SurveyKind::Career),
            _ => writeln!(writer, "{}", retry)?,
        }
    }
}

/// Line-oriented prompter over any reader/writer pair (stdin/stdout in the binary)
pub struct ConsolePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> ScoreSource for ConsolePrompter<R, W> {
    fn request_score(&mut self, category: &Category, survey: &Survey) -> AppResult<f64> {
        let prompt = category.prompt();
        loop {
            let input = prompt_input(&mut self.reader, &mut self.writer, &prompt)?
                .ok_or(AppError::InputClosed)?;

            match survey.range.parse(&input) {
                Ok(score) => {
                    tracing::debug!(category = category.key, score, "score accepted");
                    return Ok(score);
                }
                Err(rejection) => {
                    tracing::debug!(category = category.key, %input, %rejection, "input rejected");
                    let message = match rejection {
                        Rejection::NotANumber => survey.messages.invalid_number,
                        Rejection::OutOfRange => survey.messages.out_of_range,
                    };
                    writeln!(self.writer, "{}", message)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn test_prompt_input_trims_and_detects_eof() {
        let mut reader = Cursor::new(b"  42 \n".to_vec());
        let mut writer = Vec::new();
        assert_eq!(
            prompt_input(&mut reader, &mut writer, "> ").unwrap(),
            Some("42".to_string())
        );
        assert_eq!(prompt_input(&mut reader, &mut writer, "> ").unwrap(), None);
        assert_eq!(String::from_utf8(writer).unwrap(), "> > ");
    }

    #[test]
    fn test_rejects_out_of_range_then_accepts() {
        let survey = Survey::build(SurveyKind::Intelligences, Locale::En);
        let mut p = prompter("150\n-1\n55\n");
        let score = p.request_score(&survey.categories[0], &survey).unwrap();
        assert_eq!(score, 55.0);

        let out = output(p);
        assert_eq!(out.matches("Linguistic Intelligence (Linguistic): ").count(), 3);
        assert_eq!(out.matches("Please enter a value between 0 and 100!").count(), 2);
        assert!(!out.contains("valid number"));
    }

    #[test]
    fn test_rejects_non_numeric_then_accepts() {
        let survey = Survey::build(SurveyKind::Career, Locale::En);
        let mut p = prompter("abc\n\nfour\n4\n");
        let score = p.request_score(&survey.categories[3], &survey).unwrap();
        assert_eq!(score, 4.0);

        let out = output(p);
        assert_eq!(out.matches("Please enter a valid number!").count(), 3);
    }

    #[test]
    fn test_career_range_is_zero_to_six() {
        let survey = Survey::build(SurveyKind::Career, Locale::ZhTw);
        let mut p = prompter("6.01\n6\n");
        assert_eq!(p.request_score(&survey.categories[0], &survey).unwrap(), 6.0);
        let out = output(p);
        assert!(out.contains("實用型 (R): "));
        assert!(out.contains("請輸入範圍內的數值 (0.0 到 6.0)！"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let survey = Survey::build(SurveyKind::Career, Locale::En);
        let mut p = prompter("nope\n");
        let err = p.request_score(&survey.categories[0], &survey).unwrap_err();
        assert!(matches!(err, AppError::InputClosed));
    }

    #[test]
    fn test_select_survey_retries() {
        let mut reader = Cursor::new(b"3\nx\n2\n".to_vec());
        let mut writer = Vec::new();
        let kind = select_survey(&mut reader, &mut writer, Locale::En).unwrap();
        assert_eq!(kind, SurveyKind::Career);
        let out = String::from_utf8(writer).unwrap();
        assert_eq!(out.matches("Please enter 1 or 2").count(), 2);
    }
}
