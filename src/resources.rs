//! 리소스 파일 경로
//!
//! 기본 리소스 디렉토리: `NAMEDIVIDER_RESOURCE_DIR` 환경 변수, 없으면 크레이트의 `assets/`

use std::path::PathBuf;

/// 리소스 디렉토리를 지정하는 환경 변수
pub const RESOURCE_DIR_ENV: &str = "NAMEDIVIDER_RESOURCE_DIR";

const KANJI_TABLE_FILE: &str = "kanji.json";
const FAMILY_NAMES_FILE: &str = "family_names.txt";
const GBDT_MODEL_V1_FILE: &str = "gbdt_model_v1.json";

/// 리소스 디렉토리
pub fn resource_dir() -> PathBuf {
    std::env::var_os(RESOURCE_DIR_ENV)
        .map(PathBuf::from)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"))
}

/// 기본 한자 특징 테이블 경로
pub fn default_kanji_table_path() -> PathBuf {
    resource_dir().join(KANJI_TABLE_FILE)
}

/// 기본 성씨 사전 경로
pub fn default_family_names_path() -> PathBuf {
    resource_dir().join(FAMILY_NAMES_FILE)
}

/// 기본 GBDT 모델(v1) 경로
pub fn default_gbdt_model_v1_path() -> PathBuf {
    resource_dir().join(GBDT_MODEL_V1_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        assert!(default_kanji_table_path().ends_with("kanji.json"));
        assert!(default_family_names_path().ends_with("family_names.txt"));
        assert!(default_gbdt_model_v1_path().ends_with("gbdt_model_v1.json"));
    }
}
