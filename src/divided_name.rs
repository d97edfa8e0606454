//! 분할 결과

use serde::{Deserialize, Serialize};

/// 성/이름으로 분할된 이름
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividedName {
    /// 성
    pub family: String,
    /// 이름 (한 글자 입력이면 빈 문자열)
    pub given: String,
    /// 출력 시 성과 이름 사이에 넣을 구분자
    pub separator: String,
    /// 신뢰도 (0.0 ~ 1.0)
    pub score: f64,
    /// 분할에 사용된 알고리즘 이름
    pub algorithm: String,
}

impl DividedName {
    /// 딕셔너리(JSON 객체) 형태로 변환
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "family": self.family,
            "given": self.given,
            "separator": self.separator,
            "score": self.score,
            "algorithm": self.algorithm,
        })
    }
}

impl std::fmt::Display for DividedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.family, self.separator, self.given)
    }
}
