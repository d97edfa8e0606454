//! 한자 특징 테이블 로드 및 조회
//!
//! JSON 형식의 문자별 사용 통계(성/이름 빈도, 위치별 빈도)를 로드합니다.
//! 테이블에 없는 문자는 0으로 채워진 기본 레코드를 반환합니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ResourceError;

/// 문자 하나의 사용 통계
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureRecord {
    /// 성(姓)에 사용된 빈도
    pub family_freq: f64,
    /// 이름에 사용된 빈도
    pub given_freq: f64,
    /// 성 안에서의 위치(0부터) -> 빈도
    #[serde(default)]
    pub family_position_freq: HashMap<usize, f64>,
    /// 이름 안에서의 위치(0부터) -> 빈도
    #[serde(default)]
    pub given_position_freq: HashMap<usize, f64>,
}

impl FeatureRecord {
    /// 성 + 이름 전체 빈도
    pub fn total_freq(&self) -> f64 {
        self.family_freq + self.given_freq
    }

    /// 성에 쓰이는 비율 (0.0 ~ 1.0)
    pub fn family_ratio(&self) -> f64 {
        ratio(self.family_freq, self.total_freq())
    }

    /// 이름에 쓰이는 비율 (0.0 ~ 1.0)
    pub fn given_ratio(&self) -> f64 {
        ratio(self.given_freq, self.total_freq())
    }

    /// 성의 `offset`번째 글자로 쓰이는 비율
    pub fn family_order(&self, offset: usize) -> f64 {
        let count = self.family_position_freq.get(&offset).copied().unwrap_or(0.0);
        ratio(count, self.total_freq())
    }

    /// 이름의 `offset`번째 글자로 쓰이는 비율
    pub fn given_order(&self, offset: usize) -> f64 {
        let count = self.given_position_freq.get(&offset).copied().unwrap_or(0.0);
        ratio(count, self.total_freq())
    }

    fn validate(&self, key: char) -> Result<(), ResourceError> {
        let values = [self.family_freq, self.given_freq]
            .into_iter()
            .chain(self.family_position_freq.values().copied())
            .chain(self.given_position_freq.values().copied());

        for v in values {
            if !v.is_finite() || v < 0.0 {
                return Err(ResourceError::FormatError(format!(
                    "유효하지 않은 빈도값: '{}' ({})",
                    key, v
                )));
            }
        }
        Ok(())
    }
}

fn ratio(count: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (count / total).clamp(0.0, 1.0)
}

/// 테이블에 없는 문자에 사용하는 기본 레코드
static EMPTY_RECORD: std::sync::LazyLock<FeatureRecord> =
    std::sync::LazyLock::new(FeatureRecord::default);

/// 문자 -> 사용 통계 테이블
///
/// 엔진 생성 시 한 번 로드되고 이후 변경되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    records: HashMap<char, FeatureRecord>,
}

impl FeatureTable {
    /// JSON 파일에서 테이블 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "山": {
    ///     "family_freq": 900, "given_freq": 100,
    ///     "family_position_freq": { "0": 700, "1": 200 },
    ///     "given_position_freq": { "0": 50 }
    ///   }
    /// }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let raw: HashMap<String, FeatureRecord> = serde_json::from_reader(reader)?;
        let table = Self::from_raw(raw)?;

        log::info!("특징 테이블 로드 완료: {} ({}자)", path.display(), table.len());
        Ok(table)
    }

    /// JSON 문자열에서 테이블 로드
    pub fn from_json(json_str: &str) -> Result<Self, ResourceError> {
        let raw: HashMap<String, FeatureRecord> = serde_json::from_str(json_str)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: HashMap<String, FeatureRecord>) -> Result<Self, ResourceError> {
        let mut records = HashMap::with_capacity(raw.len());

        for (key, record) in raw {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ResourceError::FormatError(format!(
                        "키는 한 글자여야 합니다: '{}'",
                        key
                    )))
                }
            };
            record.validate(c)?;
            records.insert(c, record);
        }

        Ok(Self { records })
    }

    /// 문자 통계 조회 (없으면 0 레코드)
    pub fn lookup(&self, c: char) -> &FeatureRecord {
        match self.records.get(&c) {
            Some(record) => record,
            None => &*EMPTY_RECORD,
        }
    }

    /// 테이블에 등록된 문자인지 확인
    pub fn contains(&self, c: char) -> bool {
        self.records.contains_key(&c)
    }

    /// 등록된 문자 수
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 테이블이 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
