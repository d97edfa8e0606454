//! 성씨 사전
//!
//! 한 줄에 성씨 하나, 선택적으로 탭 뒤에 가중치(0.0 ~ 1.0)를 둡니다.
//! 빈 줄과 `#`으로 시작하는 줄은 무시합니다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::ResourceError;

/// 가중치가 생략된 항목의 기본값
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// 알려진 성씨 -> 가중치
#[derive(Debug, Clone, Default)]
pub struct FamilyNameDictionary {
    names: HashMap<String, f64>,
}

impl FamilyNameDictionary {
    /// 텍스트 파일에서 사전 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let dictionary = Self::parse(&content)?;

        log::info!(
            "성씨 사전 로드 완료: {} ({}개)",
            path.display(),
            dictionary.len()
        );
        Ok(dictionary)
    }

    /// 텍스트 내용 파싱
    ///
    /// ```text
    /// # 성씨 목록
    /// 山田
    /// 佐藤	0.95
    /// ```
    pub fn parse(content: &str) -> Result<Self, ResourceError> {
        let mut names = HashMap::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, weight) = match line.split_once('\t') {
                Some((name, weight)) => {
                    let weight: f64 = weight.trim().parse().map_err(|_| {
                        ResourceError::FormatError(format!(
                            "{}행: 유효하지 않은 가중치: {}",
                            line_no + 1,
                            weight
                        ))
                    })?;
                    (name.trim(), weight)
                }
                None => (line, DEFAULT_WEIGHT),
            };

            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ResourceError::FormatError(format!(
                    "{}행: 가중치는 0.0 ~ 1.0 범위여야 합니다: {}",
                    line_no + 1,
                    weight
                )));
            }

            if names.insert(name.to_string(), weight).is_some() {
                log::warn!("성씨 사전 중복 항목: {} ({}행)", name, line_no + 1);
            }
        }

        Ok(Self { names })
    }

    /// 성씨 목록으로 직접 생성 (가중치 1.0)
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| (name.into(), DEFAULT_WEIGHT))
                .collect(),
        }
    }

    /// 정확히 일치하는 성씨가 있는지 확인
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// 성씨 가중치 (없으면 0.0)
    pub fn weight(&self, name: &str) -> f64 {
        self.names.get(name).copied().unwrap_or(0.0)
    }

    /// 등록된 성씨 수
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// 사전이 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_plain_and_weighted() {
        let content = "# 성씨 목록\n山田\n佐藤\t0.5\n\n  鈴木  \n";
        let dictionary = FamilyNameDictionary::parse(content).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("山田"));
        assert!(dictionary.contains("鈴木"));
        assert_eq!(dictionary.weight("山田"), 1.0);
        assert_eq!(dictionary.weight("佐藤"), 0.5);
    }

    #[test]
    fn test_exact_match_only() {
        let dictionary = FamilyNameDictionary::from_names(["山田"]);
        assert!(!dictionary.contains("山"));
        assert!(!dictionary.contains("山田太"));
        assert_eq!(dictionary.weight("山"), 0.0);
    }

    #[test]
    fn test_invalid_weight() {
        let result = FamilyNameDictionary::parse("山田\tabc\n");
        assert!(matches!(result, Err(ResourceError::FormatError(_))));

        let result = FamilyNameDictionary::parse("山田\t1.5\n");
        assert!(matches!(result, Err(ResourceError::FormatError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("山田\n田中\n".as_bytes()).unwrap();

        let dictionary = FamilyNameDictionary::load(file.path()).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("田中"));
    }

    #[test]
    fn test_missing_file() {
        let result = FamilyNameDictionary::load("/nonexistent/family_names.txt");
        assert!(matches!(result, Err(ResourceError::IoError(_))));
    }
}
