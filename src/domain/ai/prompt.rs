//! LLM 프롬프트 구성
//!
//! 요청 종류별로 system instruction과 task prompt 두 문자열을 만듭니다.

pub mod feedback;
pub mod objection;

pub use feedback::build_feedback_prompt;
pub use objection::build_objection_prompt;

/// LLM에 전달할 프롬프트 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// 코칭 페르소나 + 응답 형식 계약
    pub system: String,
    /// 실제 작업 지시
    pub user: String,
}

/// 응답 언어 지시
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageDirective {
    /// 힌디어/힝글리시 혼용
    HindiMix,
    /// 지정된 인도 지역 언어
    Regional(&'static str),
    English,
}

const HINDI_MIX_LANGUAGES: [&str; 2] = ["Hindi", "Hinglish"];
const REGIONAL_LANGUAGES: [&str; 5] = ["Marathi", "Kannada", "Tamil", "Telugu", "Bangla"];

impl LanguageDirective {
    /// `language` 필드만으로 결정됩니다. 대소문자를 구분하며, 모르는 값은 영어입니다.
    pub fn from_language(language: Option<&str>) -> Self {
        let Some(language) = language else {
            return LanguageDirective::English;
        };

        if HINDI_MIX_LANGUAGES.contains(&language) {
            return LanguageDirective::HindiMix;
        }

        REGIONAL_LANGUAGES
            .iter()
            .find(|&&name| name == language)
            .map(|&name| LanguageDirective::Regional(name))
            .unwrap_or(LanguageDirective::English)
    }

    pub fn instruction(&self) -> String {
        match self {
            LanguageDirective::HindiMix => {
                "Respond in Hindi/Hinglish mixing as appropriate for the input language.".to_string()
            }
            LanguageDirective::Regional(name) => {
                format!("Respond in {} language to match the input.", name)
            }
            LanguageDirective::English => "Respond in English.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hindi_and_hinglish_should_map_to_mixed_directive() {
        assert_eq!(
            LanguageDirective::from_language(Some("Hindi")),
            LanguageDirective::HindiMix
        );
        assert_eq!(
            LanguageDirective::from_language(Some("Hinglish")),
            LanguageDirective::HindiMix
        );
    }

    #[test]
    fn regional_languages_should_map_to_named_directive() {
        for name in ["Marathi", "Kannada", "Tamil", "Telugu", "Bangla"] {
            let directive = LanguageDirective::from_language(Some(name));

            assert_eq!(directive, LanguageDirective::Regional(name));
            assert_eq!(
                directive.instruction(),
                format!("Respond in {} language to match the input.", name)
            );
        }
    }

    #[test]
    fn unknown_or_missing_language_should_fall_back_to_english() {
        for language in [None, Some("English"), Some("Gujarati"), Some(""), Some("French")] {
            assert_eq!(
                LanguageDirective::from_language(language),
                LanguageDirective::English
            );
        }
        assert_eq!(LanguageDirective::English.instruction(), "Respond in English.");
    }

    #[test]
    fn language_matching_should_be_case_sensitive() {
        assert_eq!(
            LanguageDirective::from_language(Some("hindi")),
            LanguageDirective::English
        );
        assert_eq!(
            LanguageDirective::from_language(Some("TAMIL")),
            LanguageDirective::English
        );
    }
}
