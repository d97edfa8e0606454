//! 이름 분할 엔진
//!
//! 정규화 → 규칙 기반 분할 → 후보 생성 → 스코어링 → 최고 후보 선택.
//! 스코어러만 바꿔 끼우면 기본/GBDT 분할기가 됩니다.

use std::sync::Arc;

use crate::config::{
    BasicDividerConfig, DividerConfig, DividerSettings, GbdtDividerConfig, NameDividerVersion,
};
use crate::divided_name::DividedName;
use crate::error::DividerError;
use crate::normalizer::{NameNormalizer, NfkcNormalizer};
use crate::table::{FamilyNameDictionary, FeatureTable};

use super::basic::BasicScorer;
use super::candidate::{self, CandidateSplit};
use super::gbdt::{GbdtModel, GbdtScorer};
use super::rule::{self, RULE_ALGORITHM_NAME, RULE_SCORE};
use super::SplitScorer;

/// 한 글자 입력(분할 불가)의 신뢰도
pub const SINGLE_CHARACTER_SCORE: f64 = 0.0;

/// 점수가 매겨진 분할 후보
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// 성 글자 수 (분할 위치)
    pub position: usize,
    /// 후보 성
    pub family: String,
    /// 후보 이름
    pub given: String,
    /// 스코어러 점수
    pub score: f64,
}

/// 성/이름 분할기
///
/// 테이블과 모델은 생성 시 한 번 로드되고 이후 읽기 전용이므로
/// 여러 스레드에서 잠금 없이 동시에 `divide`를 호출할 수 있습니다.
#[derive(Debug)]
pub struct NameDivider {
    scorer: Box<dyn SplitScorer>,
    settings: DividerSettings,
    normalizer: Arc<dyn NameNormalizer>,
}

impl NameDivider {
    /// 스코어러와 설정으로 분할기 생성 (NFKC 정규화기 사용)
    pub fn new(scorer: impl SplitScorer + 'static, settings: DividerSettings) -> Self {
        Self {
            scorer: Box::new(scorer),
            settings,
            normalizer: Arc::new(NfkcNormalizer),
        }
    }

    /// 정규화기 교체
    pub fn with_normalizer(mut self, normalizer: impl NameNormalizer + 'static) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    /// 기본 분할기 생성 (리소스 파일 로드)
    pub fn from_basic_config(config: &BasicDividerConfig) -> Result<Self, DividerError> {
        let table = Arc::new(FeatureTable::load(&config.path_kanji_table)?);
        let dictionary = Arc::new(FamilyNameDictionary::load(&config.path_family_names)?);

        let scorer = BasicScorer::new(table, dictionary)
            .with_only_order_score_when_4(config.only_order_score_when_4);
        Ok(Self::new(scorer, config.settings()))
    }

    /// GBDT 분할기 생성 (리소스 파일 + 모델 로드)
    pub fn from_gbdt_config(config: &GbdtDividerConfig) -> Result<Self, DividerError> {
        let table = Arc::new(FeatureTable::load(&config.path_kanji_table)?);
        let dictionary = Arc::new(FamilyNameDictionary::load(&config.path_family_names)?);
        let model = Arc::new(GbdtModel::load(&config.path_model)?);

        let scorer = GbdtScorer::new(table, dictionary, model);
        Ok(Self::new(scorer, config.settings()))
    }

    /// 설정 종류에 맞는 분할기 생성
    pub fn from_config(config: &DividerConfig) -> Result<Self, DividerError> {
        match config {
            DividerConfig::Basic(config) => Self::from_basic_config(config),
            DividerConfig::Gbdt(config) => Self::from_gbdt_config(config),
        }
    }

    /// 버전별 기본 설정으로 분할기 생성
    pub fn from_version(version: NameDividerVersion) -> Result<Self, DividerError> {
        log::info!("분할기 생성: {}", version);
        Self::from_config(&version.config())
    }

    /// 실행 설정
    pub fn settings(&self) -> &DividerSettings {
        &self.settings
    }

    /// 이름을 성과 이름으로 분할
    ///
    /// 빈 입력은 `DividerError::InvalidInput`. 한 글자 입력은 전체를 성으로,
    /// 이름은 빈 문자열로, 신뢰도는 `SINGLE_CHARACTER_SCORE`로 반환합니다.
    pub fn divide(&self, name: &str) -> Result<DividedName, DividerError> {
        if name.is_empty() {
            return Err(DividerError::InvalidInput("빈 이름은 분할할 수 없습니다".into()));
        }

        // 이미 공백으로 나뉜 입력 (정규화로 공백이 지워질 때만 성+이름 = 입력)
        if self.settings.rule_based && self.settings.normalize_name {
            if let Some((family, given)) = rule::split_pre_divided(name) {
                let family = self.prepare(family);
                let given = self.prepare(given);
                if !family.is_empty() && !given.is_empty() {
                    return Ok(self.result(family, given, RULE_SCORE, RULE_ALGORITHM_NAME));
                }
            }
        }

        let normalized = self.prepare(name);
        if normalized.is_empty() {
            return Err(DividerError::InvalidInput(format!(
                "정규화 후 빈 이름: {:?}",
                name
            )));
        }

        if normalized.chars().count() < 2 {
            return Ok(self.undivided(normalized));
        }

        if self.settings.rule_based {
            if let Some(position) = rule::rule_position(&normalized) {
                if let Some(candidate) = candidate::generate(&normalized).nth(position - 1) {
                    return Ok(self.result(
                        candidate.family.to_string(),
                        candidate.given.to_string(),
                        RULE_SCORE,
                        RULE_ALGORITHM_NAME,
                    ));
                }
            }
        }

        let best = match self.select_best(&normalized) {
            Some(best) => best,
            None => return Ok(self.undivided(normalized)),
        };

        log::debug!(
            "분할 결과: {} -> {}|{} (위치 {}, 점수 {:.4})",
            normalized,
            best.0.family,
            best.0.given,
            best.0.position,
            best.1
        );

        let (family, given) = (best.0.family.to_string(), best.0.given.to_string());
        Ok(self.result(family, given, best.1, &self.settings.algorithm_name))
    }

    /// 모든 분할 후보와 점수 (위치 오름차순)
    ///
    /// 규칙 기반 분할은 적용하지 않고 스코어러 결과만 보여줍니다.
    pub fn score_candidates(&self, name: &str) -> Result<Vec<ScoredCandidate>, DividerError> {
        let normalized = self.prepare(name);
        if normalized.is_empty() {
            return Err(DividerError::InvalidInput("빈 이름은 분할할 수 없습니다".into()));
        }

        Ok(candidate::generate(&normalized)
            .map(|candidate| ScoredCandidate {
                position: candidate.position,
                family: candidate.family.to_string(),
                given: candidate.given.to_string(),
                score: self.scorer.score(&candidate),
            })
            .collect())
    }

    /// 최고 점수 후보 선택. 동점이면 앞쪽(작은 위치) 후보 유지
    fn select_best<'a>(&self, name: &'a str) -> Option<(CandidateSplit<'a>, f64)> {
        let mut best: Option<(CandidateSplit<'a>, f64)> = None;

        for candidate in candidate::generate(name) {
            let score = self.scorer.score(&candidate);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                Some(_) if score.is_nan() => {}
                _ => best = Some((candidate, score)),
            }
        }

        best
    }

    fn prepare(&self, name: &str) -> String {
        if self.settings.normalize_name {
            self.normalizer.normalize(name)
        } else {
            name.to_string()
        }
    }

    fn undivided(&self, name: String) -> DividedName {
        self.result(
            name,
            String::new(),
            SINGLE_CHARACTER_SCORE,
            &self.settings.algorithm_name,
        )
    }

    fn result(&self, family: String, given: String, score: f64, algorithm: &str) -> DividedName {
        DividedName {
            family,
            given,
            separator: self.settings.separator.clone(),
            score,
            algorithm: algorithm.to_string(),
        }
    }
}
