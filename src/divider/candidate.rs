//! 분할 후보 생성
//!
//! 길이 L인 이름에 대해 k = 1..L-1 위치(앞에서 k글자 뒤)마다
//! 성 후보(왼쪽)와 이름 후보(오른쪽)를 만듭니다.

/// 분할 후보: 입력 문자열을 빌려 씁니다
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSplit<'a> {
    /// 분할 위치 (성 글자 수, 1부터)
    pub position: usize,
    /// 성 후보
    pub family: &'a str,
    /// 이름 후보
    pub given: &'a str,
}

impl<'a> CandidateSplit<'a> {
    /// 성 글자 수
    pub fn family_len(&self) -> usize {
        self.position
    }

    /// 이름 글자 수
    pub fn given_len(&self) -> usize {
        self.given.chars().count()
    }

    /// 전체 이름 글자 수
    pub fn full_len(&self) -> usize {
        self.family_len() + self.given_len()
    }
}

/// 모든 분할 후보를 위치 오름차순으로 생성
///
/// 한 글자 이하 입력은 후보가 없습니다. 같은 입력으로 다시 호출하면
/// 같은 순서의 후보를 다시 얻습니다.
pub fn generate(name: &str) -> impl Iterator<Item = CandidateSplit<'_>> + '_ {
    name.char_indices()
        .enumerate()
        .skip(1)
        .map(move |(position, (byte_idx, _))| CandidateSplit {
            position,
            family: &name[..byte_idx],
            given: &name[byte_idx..],
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_all_positions() {
        let candidates: Vec<_> = generate("山田太郎").collect();
        assert_eq!(candidates.len(), 3);

        assert_eq!(candidates[0].position, 1);
        assert_eq!(candidates[0].family, "山");
        assert_eq!(candidates[0].given, "田太郎");

        assert_eq!(candidates[1].family, "山田");
        assert_eq!(candidates[1].given, "太郎");

        assert_eq!(candidates[2].position, 3);
        assert_eq!(candidates[2].family, "山田太");
        assert_eq!(candidates[2].given, "郎");
    }

    #[test]
    fn test_concat_invariant() {
        let name = "長谷川まゆみ";
        for candidate in generate(name) {
            assert!(!candidate.family.is_empty());
            assert!(!candidate.given.is_empty());
            assert_eq!(format!("{}{}", candidate.family, candidate.given), name);
            assert_eq!(candidate.full_len(), 6);
        }
    }

    #[test]
    fn test_short_input() {
        assert_eq!(generate("山").count(), 0);
        assert_eq!(generate("").count(), 0);
    }

    #[test]
    fn test_restartable() {
        let name = "佐藤花子";
        let first: Vec<_> = generate(name).collect();
        let second: Vec<_> = generate(name).collect();
        assert_eq!(first, second);
    }
}
