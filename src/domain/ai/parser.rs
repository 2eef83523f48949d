//! LLM 피드백 텍스트 파서
//!
//! 제공자가 구조화된 데이터가 아닌 산문을 돌려주므로, 줄 단위로 훑어서
//! 점수와 개선 제안을 최대한 뽑아냅니다. 실패해도 에러를 내지 않고
//! 기본값(점수 7, 제안 없음)으로 떨어집니다.

use std::sync::LazyLock;

use regex::Regex;

/// 점수 줄을 찾지 못했을 때의 기본 점수
pub const DEFAULT_SCORE: u8 = 7;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;
/// 응답에 포함하는 최대 제안 수
pub const MAX_SUGGESTIONS: usize = 3;

static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:/10)?").expect("score pattern is valid"));

/// 파싱된 피드백
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFeedback {
    /// 원본 응답 전체
    pub feedback: String,
    pub score: u8,
    /// 최대 3개
    pub suggestions: Vec<String>,
}

pub fn parse_feedback(response: &str) -> ParsedFeedback {
    let mut suggestions = extract_suggestions(response);
    suggestions.truncate(MAX_SUGGESTIONS);

    ParsedFeedback {
        feedback: response.to_string(),
        score: extract_score(response),
        suggestions,
    }
}

/// 처음 나오는 점수 줄에서 첫 정수를 읽어 [1, 10]으로 자릅니다.
///
/// 점수 줄은 "score:"(대소문자 무시) 또는 "/10"을 포함하는 줄입니다.
/// 첫 점수 줄에서 숫자를 못 읽으면 더 찾지 않고 기본값을 돌려줍니다.
pub fn extract_score(response: &str) -> u8 {
    let Some(line) = response.lines().find(|line| is_score_line(line)) else {
        return DEFAULT_SCORE;
    };

    match SCORE_PATTERN.captures(line).and_then(|caps| caps.get(1)) {
        // 자릿수가 u64를 넘으면 상한으로 본다
        Some(digits) => digits
            .as_str()
            .parse::<u64>()
            .map(|n| n.clamp(MIN_SCORE as u64, MAX_SCORE as u64) as u8)
            .unwrap_or(MAX_SCORE),
        None => DEFAULT_SCORE,
    }
}

fn is_score_line(line: &str) -> bool {
    line.to_lowercase().contains("score:") || line.contains("/10")
}

/// "improve:" 또는 "suggestions:" 줄 이후의 목록 항목을 모두 모읍니다.
///
/// 개수 제한은 호출하는 쪽에서 적용합니다.
pub fn extract_suggestions(response: &str) -> Vec<String> {
    let mut collecting = false;
    let mut suggestions = Vec::new();

    for line in response.lines().map(str::trim) {
        let lower = line.to_lowercase();
        if lower.contains("improve:") || lower.contains("suggestions:") {
            collecting = true;
            continue;
        }

        if collecting {
            if let Some(item) = strip_list_marker(line) {
                suggestions.push(item.to_string());
            }
        }
    }

    suggestions
}

/// `-`, `•`, `1.` 형태의 목록 표시를 떼어낸 본문을 돌려줍니다.
fn strip_list_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('•')) {
        return Some(rest.trim());
    }

    let digits_end = line
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(line.len(), |(i, _)| i);

    if digits_end == 0 {
        return None;
    }

    line[digits_end..].strip_prefix('.').map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPICAL_RESPONSE: &str = "**Score:** 8/10\n\
        **What worked:** You acknowledged the concern.\n\
        **Improve:**\n\
        - Quantify the value with a number\n\
        - Ask a follow-up question\n\
        - Offer a trial period";

    #[test]
    fn should_extract_score_from_bold_score_line() {
        assert_eq!(extract_score("**Score:** 8/10"), 8);
    }

    #[test]
    fn should_default_score_when_no_score_line() {
        assert_eq!(extract_score("Nice job overall.\nKeep practicing."), DEFAULT_SCORE);
        assert_eq!(extract_score(""), DEFAULT_SCORE);
    }

    #[test]
    fn should_match_score_line_case_insensitively() {
        assert_eq!(extract_score("SCORE: 6"), 6);
        assert_eq!(extract_score("final score: 9 out of 10"), 9);
    }

    #[test]
    fn should_match_line_containing_slash_ten() {
        assert_eq!(extract_score("Overall I'd rate this 5/10."), 5);
    }

    #[test]
    fn should_clamp_score_into_range() {
        assert_eq!(extract_score("Score: 0/10"), 1);
        assert_eq!(extract_score("Score: 15"), 10);
        assert_eq!(extract_score("Score: 99999999999999999999999"), 10);
    }

    #[test]
    fn should_stop_at_first_score_line_even_without_digits() {
        let response = "Score: N/A\nScore: 9/10";

        assert_eq!(extract_score(response), DEFAULT_SCORE);
    }

    #[test]
    fn should_use_first_integer_on_score_line() {
        assert_eq!(extract_score("Round 2 score: 4/10"), 2);
    }

    #[test]
    fn should_collect_dash_suggestions_after_improve_header() {
        let suggestions = extract_suggestions(TYPICAL_RESPONSE);

        assert_eq!(
            suggestions,
            vec![
                "Quantify the value with a number",
                "Ask a follow-up question",
                "Offer a trial period"
            ]
        );
    }

    #[test]
    fn should_collect_bullet_and_numbered_suggestions() {
        let response = "Suggestions:\n• Slow down\n1. Mention the SLA\n2.Share a case study\n10. Close with a question";

        let suggestions = extract_suggestions(response);

        assert_eq!(
            suggestions,
            vec![
                "Slow down",
                "Mention the SLA",
                "Share a case study",
                "Close with a question"
            ]
        );
    }

    #[test]
    fn should_ignore_list_items_before_header() {
        let response = "- strength one\n**What worked:** fine\nImprove:\n- only this";

        assert_eq!(extract_suggestions(response), vec!["only this"]);
    }

    #[test]
    fn should_skip_unrecognized_line_shapes() {
        let response = "Improve:\n* star bullet\nplain sentence\n1) paren\n- kept";

        assert_eq!(extract_suggestions(response), vec!["kept"]);
    }

    #[test]
    fn should_keep_collecting_past_other_sections() {
        let response = "Improve:\n- first\n**Closing:** good luck\n- second";

        assert_eq!(extract_suggestions(response), vec!["first", "second"]);
    }

    #[test]
    fn should_keep_inner_digits_of_suggestion() {
        let response = "Improve:\n- 10 minute follow-up call";

        assert_eq!(extract_suggestions(response), vec!["10 minute follow-up call"]);
    }

    #[test]
    fn parse_feedback_should_keep_raw_text_and_limit_suggestions() {
        let response = format!("{}\n- A fourth idea", TYPICAL_RESPONSE);

        let parsed = parse_feedback(&response);

        assert_eq!(parsed.feedback, response);
        assert_eq!(parsed.score, 8);
        assert_eq!(parsed.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(parsed.suggestions[2], "Offer a trial period");
    }

    #[test]
    fn parse_feedback_should_fall_back_to_defaults_for_unstructured_text() {
        let response = "Good effort, try to be more specific next time.";

        let parsed = parse_feedback(response);

        assert_eq!(parsed.feedback, response);
        assert_eq!(parsed.score, DEFAULT_SCORE);
        assert!(parsed.suggestions.is_empty());
    }
}
