//! 이름 분할기 설정 및 버전별 기본 설정 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::DividerError;
use crate::resources::{
    default_family_names_path, default_gbdt_model_v1_path, default_kanji_table_path,
};

/// 기본 분할기 알고리즘 이름
pub const BASIC_ALGORITHM_NAME: &str = "kanji_feature";
/// GBDT 분할기 알고리즘 이름
pub const GBDT_ALGORITHM_NAME: &str = "gbdt";

/// 엔진 실행 설정 (두 분할기 공통)
#[derive(Clone, Debug, PartialEq)]
pub struct DividerSettings {
    /// 성과 이름 사이 구분자
    pub separator: String,
    /// 분할 전 NFKC 정규화 여부
    pub normalize_name: bool,
    /// 결과에 기록할 알고리즘 이름
    pub algorithm_name: String,
    /// 스코어링 전 규칙 기반 분할(두 글자, 한자+가나, 공백 구분) 사용 여부
    pub rule_based: bool,
}

fn default_separator() -> String {
    " ".to_string()
}

fn default_true() -> bool {
    true
}

fn default_basic_algorithm_name() -> String {
    BASIC_ALGORITHM_NAME.to_string()
}

fn default_gbdt_algorithm_name() -> String {
    GBDT_ALGORITHM_NAME.to_string()
}

impl Default for DividerSettings {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            normalize_name: true,
            algorithm_name: "unknown_algorithm".to_string(),
            rule_based: true,
        }
    }
}

impl DividerSettings {
    /// 구분자 설정
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// 정규화 여부 설정
    pub fn with_normalize_name(mut self, normalize_name: bool) -> Self {
        self.normalize_name = normalize_name;
        self
    }

    /// 알고리즘 이름 설정
    pub fn with_algorithm_name(mut self, algorithm_name: impl Into<String>) -> Self {
        self.algorithm_name = algorithm_name.into();
        self
    }

    /// 규칙 기반 분할 사용 여부 설정
    pub fn with_rule_based(mut self, rule_based: bool) -> Self {
        self.rule_based = rule_based;
        self
    }
}

/// 기본(특징 기반) 분할기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BasicDividerConfig {
    /// 성과 이름 사이 구분자
    #[serde(default = "default_separator")]
    pub separator: String,
    /// 분할 전 정규화 여부
    #[serde(default = "default_true")]
    pub normalize_name: bool,
    #[serde(default = "default_basic_algorithm_name")]
    pub algorithm_name: String,
    #[serde(default = "default_true")]
    pub rule_based: bool,
    /// 한자 특징 테이블 경로
    #[serde(default = "default_kanji_table_path", alias = "path_csv")]
    pub path_kanji_table: PathBuf,
    /// 성씨 사전 경로
    #[serde(default = "default_family_names_path")]
    pub path_family_names: PathBuf,
    /// 네 글자 이름은 위치 빈도 점수만 사용
    #[serde(default)]
    pub only_order_score_when_4: bool,
}

impl Default for BasicDividerConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            normalize_name: true,
            algorithm_name: default_basic_algorithm_name(),
            rule_based: true,
            path_kanji_table: default_kanji_table_path(),
            path_family_names: default_family_names_path(),
            only_order_score_when_4: false,
        }
    }
}

impl BasicDividerConfig {
    /// 엔진 실행 설정
    pub fn settings(&self) -> DividerSettings {
        DividerSettings {
            separator: self.separator.clone(),
            normalize_name: self.normalize_name,
            algorithm_name: self.algorithm_name.clone(),
            rule_based: self.rule_based,
        }
    }

    /// 구분자 설정
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// 정규화 여부 설정
    pub fn with_normalize_name(mut self, normalize_name: bool) -> Self {
        self.normalize_name = normalize_name;
        self
    }

    /// 규칙 기반 분할 사용 여부 설정
    pub fn with_rule_based(mut self, rule_based: bool) -> Self {
        self.rule_based = rule_based;
        self
    }

    /// 특징 테이블 경로 설정
    pub fn with_kanji_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_kanji_table = path.into();
        self
    }

    /// 성씨 사전 경로 설정
    pub fn with_family_names_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_family_names = path.into();
        self
    }

    /// 네 글자 위치 점수 전용 모드 설정
    pub fn with_only_order_score_when_4(mut self, enabled: bool) -> Self {
        self.only_order_score_when_4 = enabled;
        self
    }
}

/// GBDT 분할기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GbdtDividerConfig {
    /// 성과 이름 사이 구분자
    #[serde(default = "default_separator")]
    pub separator: String,
    /// 분할 전 정규화 여부
    #[serde(default = "default_true")]
    pub normalize_name: bool,
    #[serde(default = "default_gbdt_algorithm_name")]
    pub algorithm_name: String,
    #[serde(default = "default_true")]
    pub rule_based: bool,
    /// 한자 특징 테이블 경로
    #[serde(default = "default_kanji_table_path", alias = "path_csv")]
    pub path_kanji_table: PathBuf,
    /// 성씨 사전 경로
    #[serde(default = "default_family_names_path")]
    pub path_family_names: PathBuf,
    /// 학습된 모델 경로
    #[serde(default = "default_gbdt_model_v1_path")]
    pub path_model: PathBuf,
}

impl Default for GbdtDividerConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            normalize_name: true,
            algorithm_name: default_gbdt_algorithm_name(),
            rule_based: true,
            path_kanji_table: default_kanji_table_path(),
            path_family_names: default_family_names_path(),
            path_model: default_gbdt_model_v1_path(),
        }
    }
}

impl GbdtDividerConfig {
    /// 엔진 실행 설정
    pub fn settings(&self) -> DividerSettings {
        DividerSettings {
            separator: self.separator.clone(),
            normalize_name: self.normalize_name,
            algorithm_name: self.algorithm_name.clone(),
            rule_based: self.rule_based,
        }
    }

    /// 구분자 설정
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// 정규화 여부 설정
    pub fn with_normalize_name(mut self, normalize_name: bool) -> Self {
        self.normalize_name = normalize_name;
        self
    }

    /// 규칙 기반 분할 사용 여부 설정
    pub fn with_rule_based(mut self, rule_based: bool) -> Self {
        self.rule_based = rule_based;
        self
    }

    /// 특징 테이블 경로 설정
    pub fn with_kanji_table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_kanji_table = path.into();
        self
    }

    /// 성씨 사전 경로 설정
    pub fn with_family_names_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_family_names = path.into();
        self
    }

    /// 모델 경로 설정
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_model = path.into();
        self
    }
}

/// 분할기 설정 (알고리즘별)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DividerConfig {
    Basic(BasicDividerConfig),
    Gbdt(GbdtDividerConfig),
}

impl DividerConfig {
    /// JSON 설정 파일 로드
    ///
    /// ```json
    /// { "kind": "basic", "separator": "・", "only_order_score_when_4": true }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DividerError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DividerError::Configuration(format!("설정 파일 읽기 실패: {} ({})", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// JSON 문자열에서 설정 생성
    pub fn from_json(json_str: &str) -> Result<Self, DividerError> {
        serde_json::from_str(json_str)
            .map_err(|e| DividerError::Configuration(format!("설정 파싱 실패: {}", e)))
    }

    /// 엔진 실행 설정
    pub fn settings(&self) -> DividerSettings {
        match self {
            DividerConfig::Basic(config) => config.settings(),
            DividerConfig::Gbdt(config) => config.settings(),
        }
    }
}

impl From<BasicDividerConfig> for DividerConfig {
    fn from(config: BasicDividerConfig) -> Self {
        DividerConfig::Basic(config)
    }
}

impl From<GbdtDividerConfig> for DividerConfig {
    fn from(config: GbdtDividerConfig) -> Self {
        DividerConfig::Gbdt(config)
    }
}

/// 분할기 버전
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameDividerVersion {
    BasicNameDividerV1,
    BasicNameDividerV2,
    BasicNameDividerLatest,
    GbdtNameDividerV1,
    GbdtNameDividerLatest,
}

impl NameDividerVersion {
    /// 모든 버전
    pub const ALL: [NameDividerVersion; 5] = [
        NameDividerVersion::BasicNameDividerV1,
        NameDividerVersion::BasicNameDividerV2,
        NameDividerVersion::BasicNameDividerLatest,
        NameDividerVersion::GbdtNameDividerV1,
        NameDividerVersion::GbdtNameDividerLatest,
    ];

    /// 버전 태그 (snake_case)
    pub fn as_str(&self) -> &'static str {
        match self {
            NameDividerVersion::BasicNameDividerV1 => "basic_name_divider_v1",
            NameDividerVersion::BasicNameDividerV2 => "basic_name_divider_v2",
            NameDividerVersion::BasicNameDividerLatest => "basic_name_divider_latest",
            NameDividerVersion::GbdtNameDividerV1 => "gbdt_name_divider_v1",
            NameDividerVersion::GbdtNameDividerLatest => "gbdt_name_divider_latest",
        }
    }

    /// 버전별 기본 설정
    pub fn config(&self) -> DividerConfig {
        match self {
            // v1: 정규화 없음, 네 글자는 위치 점수만
            NameDividerVersion::BasicNameDividerV1 => BasicDividerConfig::default()
                .with_normalize_name(false)
                .with_only_order_score_when_4(true)
                .into(),
            NameDividerVersion::BasicNameDividerV2 => BasicDividerConfig::default()
                .with_normalize_name(true)
                .with_only_order_score_when_4(false)
                .into(),
            NameDividerVersion::BasicNameDividerLatest => BasicDividerConfig::default().into(),
            NameDividerVersion::GbdtNameDividerV1 => GbdtDividerConfig::default()
                .with_normalize_name(true)
                .with_model_path(default_gbdt_model_v1_path())
                .into(),
            NameDividerVersion::GbdtNameDividerLatest => GbdtDividerConfig::default().into(),
        }
    }
}

impl std::fmt::Display for NameDividerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameDividerVersion {
    type Err = DividerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|version| version.as_str() == tag)
            .ok_or_else(|| DividerError::Configuration(format!("알 수 없는 분할기 버전: {}", s)))
    }
}
