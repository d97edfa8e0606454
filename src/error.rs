//! 이름 분할기 에러 타입
//!
//! 리소스 로드 실패는 엔진 생성 시점에만 발생하며,
//! 분할 호출 중에는 빈 입력 외의 에러가 없습니다.

/// 리소스(특징 테이블, 성씨 사전, GBDT 모델) 로드/파싱 에러
#[derive(Debug)]
pub enum ResourceError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 리소스 형식 오류
    FormatError(String),
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceError::IoError(e) => write!(f, "리소스 파일 읽기 오류: {}", e),
            ResourceError::ParseError(s) => write!(f, "리소스 파싱 오류: {}", s),
            ResourceError::FormatError(s) => write!(f, "리소스 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResourceError {
    fn from(e: std::io::Error) -> Self {
        ResourceError::IoError(e)
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(e: serde_json::Error) -> Self {
        ResourceError::ParseError(e.to_string())
    }
}

/// 이름 분할기 에러
#[derive(Debug)]
pub enum DividerError {
    /// 리소스 로드 실패 (엔진 생성 불가)
    Resource(ResourceError),
    /// 잘못된 입력 (빈 이름)
    InvalidInput(String),
    /// 알 수 없는 버전 태그 또는 잘못된 설정
    Configuration(String),
}

impl std::fmt::Display for DividerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DividerError::Resource(e) => write!(f, "{}", e),
            DividerError::InvalidInput(s) => write!(f, "잘못된 입력: {}", s),
            DividerError::Configuration(s) => write!(f, "설정 오류: {}", s),
        }
    }
}

impl std::error::Error for DividerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DividerError::Resource(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ResourceError> for DividerError {
    fn from(e: ResourceError) -> Self {
        DividerError::Resource(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "kanji.json");
        let err: DividerError = ResourceError::from(io).into();
        assert!(matches!(err, DividerError::Resource(ResourceError::IoError(_))));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display() {
        let err = DividerError::InvalidInput("빈 이름".into());
        assert_eq!(err.to_string(), "잘못된 입력: 빈 이름");

        let err = DividerError::from(ResourceError::FormatError("키가 비어 있음".into()));
        assert_eq!(err.to_string(), "리소스 형식 오류: 키가 비어 있음");
    }
}
