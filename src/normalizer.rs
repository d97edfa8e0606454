//! 이름 정규화
//!
//! 분할 전에 입력 문자열의 폭/호환 문자를 정리합니다.

use unicode_normalization::UnicodeNormalization;

/// 분할 전 입력 정규화기
pub trait NameNormalizer: Send + Sync + std::fmt::Debug {
    fn normalize(&self, name: &str) -> String;
}

/// NFKC 정규화 + 공백 제거
///
/// 반각 가타카나(ｻﾄｳ)는 전각(サトウ)으로, 전각 영숫자는 반각으로 바뀝니다.
/// 전각 공백(U+3000)을 포함한 모든 공백 문자를 제거합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct NfkcNormalizer;

impl NameNormalizer for NfkcNormalizer {
    fn normalize(&self, name: &str) -> String {
        name.nfkc().filter(|c| !c.is_whitespace()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_width_katakana() {
        assert_eq!(NfkcNormalizer.normalize("ｻﾄｳ"), "サトウ");
        // 탁점 결합
        assert_eq!(NfkcNormalizer.normalize("ﾀﾞｲｽｹ"), "ダイスケ");
    }

    #[test]
    fn test_full_width_latin() {
        assert_eq!(NfkcNormalizer.normalize("ＴＡＲＯ"), "TARO");
    }

    #[test]
    fn test_whitespace_removed() {
        assert_eq!(NfkcNormalizer.normalize(" 山田\u{3000}太郎 "), "山田太郎");
        assert_eq!(NfkcNormalizer.normalize("   "), "");
    }

    #[test]
    fn test_kanji_unchanged() {
        assert_eq!(NfkcNormalizer.normalize("山田太郎"), "山田太郎");
    }
}
