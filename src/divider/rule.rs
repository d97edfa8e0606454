//! 규칙 기반 분할
//!
//! 스코어링 없이 확정할 수 있는 입력을 먼저 처리합니다.
//! - 공백으로 이미 두 부분으로 나뉜 입력
//! - 두 글자 이름 (한 글자 성 + 한 글자 이름)
//! - 한자로 된 성 뒤에 가나 이름이 오는 입력 (예: 田中みゆき)

/// 규칙 기반 분할 결과의 알고리즘 이름
pub const RULE_ALGORITHM_NAME: &str = "rule";

/// 규칙으로 확정된 분할의 신뢰도
pub const RULE_SCORE: f64 = 1.0;

/// 문자가 한자인지 확인 (CJK 통합 한자, 확장 A, 호환 한자, 々〆〇)
pub fn is_kanji(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0xF900..=0xFAFF
            | 0x20000..=0x2FA1F
            | 0x3005..=0x3007
    )
}

/// 문자가 가나인지 확인 (히라가나, 가타카나, 장음 부호 포함)
pub fn is_kana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x30FF)
}

/// 공백으로 이미 나뉜 입력이면 (성, 이름) 반환
///
/// 공백 덩어리로 정확히 두 부분이 되는 경우만 인정합니다.
pub fn split_pre_divided(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(family), Some(given), None) => Some((family, given)),
        _ => None,
    }
}

/// 규칙으로 정할 수 있는 분할 위치 (성 글자 수)
///
/// 두 글자 이름은 1, 한자 접두부 + 가나 접미부면 경계 위치.
pub fn rule_position(name: &str) -> Option<usize> {
    let chars: Vec<char> = name.chars().collect();

    if chars.len() == 2 {
        return Some(1);
    }

    let boundary = chars.iter().position(|&c| !is_kanji(c))?;
    if boundary == 0 {
        return None;
    }
    // 경계 뒤는 전부 가나여야 함
    if !chars[boundary..].iter().all(|&c| is_kana(c)) {
        return None;
    }
    Some(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_kanji() {
        assert!(is_kanji('山'));
        assert!(is_kanji('々'));
        assert!(is_kanji('〆'));
        assert!(is_kanji('〇'));
        assert!(!is_kanji('み'));
        assert!(!is_kanji('カ'));
        assert!(!is_kanji('A'));
    }

    #[test]
    fn test_split_pre_divided() {
        assert_eq!(split_pre_divided("山田 太郎"), Some(("山田", "太郎")));
        assert_eq!(split_pre_divided(" 山田\u{3000}太郎 "), Some(("山田", "太郎")));
        assert_eq!(split_pre_divided("山田太郎"), None);
        assert_eq!(split_pre_divided("山田 太 郎"), None);
    }

    #[test]
    fn test_two_chars() {
        assert_eq!(rule_position("林檎"), Some(1));
        assert_eq!(rule_position("あい"), Some(1));
    }

    #[test]
    fn test_kanji_then_kana() {
        assert_eq!(rule_position("田中みゆき"), Some(2));
        assert_eq!(rule_position("佐々木さくら"), Some(3));
        assert_eq!(rule_position("林カオル"), Some(1));
    }

    #[test]
    fn test_no_rule() {
        // 전부 한자
        assert_eq!(rule_position("山田太郎"), None);
        // 가나로 시작
        assert_eq!(rule_position("さくら山"), None);
        // 한자 - 가나 - 한자
        assert_eq!(rule_position("山田さ太"), None);
        assert_eq!(rule_position("山"), None);
        // 가나가 아닌 접미부
        assert_eq!(rule_position("山田太郎2"), None);
        assert_eq!(rule_position("山田太郎A"), None);
        assert_eq!(rule_position("鈴木一郎)"), None);
        assert_eq!(rule_position("田中みゆき1"), None);
    }

    #[test]
    fn test_is_kana() {
        assert!(is_kana('み'));
        assert!(is_kana('カ'));
        assert!(is_kana('ー'));
        assert!(!is_kana('山'));
        assert!(!is_kana('A'));
        assert!(!is_kana('2'));
    }
}
