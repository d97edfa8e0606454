//! 기본(특징 기반) 스코어러
//!
//! 한자 특징 테이블과 성씨 사전 조회만으로 후보 점수를 계산합니다.
//!
//! score = 0.25 * 성 비율 평균 + 0.25 * 이름 비율 평균
//!       + 0.20 * 사전 가중치 + 0.30 * 위치 빈도 점수

use std::sync::Arc;

use crate::table::{FamilyNameDictionary, FeatureTable};

use super::candidate::CandidateSplit;
use super::features::CandidateFeatures;
use super::SplitScorer;

/// 성 비율 평균 가중치
pub const FAMILY_WEIGHT: f64 = 0.25;
/// 이름 비율 평균 가중치
pub const GIVEN_WEIGHT: f64 = 0.25;
/// 성씨 사전 가중치
pub const DICTIONARY_WEIGHT: f64 = 0.20;
/// 위치 빈도 점수 가중치
pub const ORDER_WEIGHT: f64 = 0.30;

/// 테이블 기반 휴리스틱 스코어러
#[derive(Debug, Clone)]
pub struct BasicScorer {
    table: Arc<FeatureTable>,
    dictionary: Arc<FamilyNameDictionary>,
    /// 네 글자 이름은 위치 빈도 점수만 사용
    only_order_score_when_4: bool,
}

impl BasicScorer {
    pub fn new(table: Arc<FeatureTable>, dictionary: Arc<FamilyNameDictionary>) -> Self {
        Self {
            table,
            dictionary,
            only_order_score_when_4: false,
        }
    }

    /// 네 글자 위치 점수 전용 모드 설정
    pub fn with_only_order_score_when_4(mut self, enabled: bool) -> Self {
        self.only_order_score_when_4 = enabled;
        self
    }

    /// 특징으로부터 점수 계산
    pub fn score_features(&self, features: &CandidateFeatures) -> f64 {
        // 네 글자 이름은 일반 공식에서 모호하므로 위치 점수만 본다
        if self.only_order_score_when_4 && features.full_len == 4 {
            return features.order_score;
        }

        let score = FAMILY_WEIGHT * features.family_avg
            + GIVEN_WEIGHT * features.given_avg
            + DICTIONARY_WEIGHT * features.family_dictionary_weight
            + ORDER_WEIGHT * features.order_score;

        score.clamp(0.0, 1.0)
    }
}

impl SplitScorer for BasicScorer {
    fn score(&self, candidate: &CandidateSplit<'_>) -> f64 {
        let features = CandidateFeatures::extract(candidate, &self.table, &self.dictionary);
        self.score_features(&features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divider::candidate::generate;

    fn sample_table() -> Arc<FeatureTable> {
        Arc::new(
            FeatureTable::from_json(
                r#"{
                    "山": { "family_freq": 900, "given_freq": 100,
                            "family_position_freq": { "0": 700, "1": 200 } },
                    "田": { "family_freq": 800, "given_freq": 200,
                            "family_position_freq": { "0": 100, "1": 700 } },
                    "太": { "family_freq": 100, "given_freq": 900,
                            "given_position_freq": { "0": 800 } },
                    "郎": { "family_freq": 0, "given_freq": 1000,
                            "given_position_freq": { "1": 900 } }
                }"#,
            )
            .unwrap(),
        )
    }

    fn scores(scorer: &BasicScorer, name: &str) -> Vec<f64> {
        generate(name).map(|c| scorer.score(&c)).collect()
    }

    #[test]
    fn test_score_in_unit_range() {
        let scorer = BasicScorer::new(
            sample_table(),
            Arc::new(FamilyNameDictionary::from_names(["山田"])),
        );
        for score in scores(&scorer, "山田太郎") {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_full_formula() {
        let scorer = BasicScorer::new(
            sample_table(),
            Arc::new(FamilyNameDictionary::from_names(["山田"])),
        );
        let candidate = generate("山田太").nth(1).unwrap();
        // family 0.85, given 0.9, dict 1.0, order (0.7 + 0.7 + 0.8) / 3
        let expected = 0.25 * 0.85 + 0.25 * 0.9 + 0.20 * 1.0 + 0.30 * (2.2 / 3.0);
        assert!((scorer.score(&candidate) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dictionary_bonus() {
        let table = sample_table();
        let with_dict = BasicScorer::new(
            Arc::clone(&table),
            Arc::new(FamilyNameDictionary::from_names(["山田"])),
        );
        let without_dict = BasicScorer::new(table, Arc::new(FamilyNameDictionary::default()));

        let candidate = generate("山田太郎").nth(1).unwrap();
        assert!(with_dict.score(&candidate) >= without_dict.score(&candidate));
        assert!(with_dict.score(&candidate) > without_dict.score(&candidate));
    }

    #[test]
    fn test_only_order_score_when_4() {
        let table = sample_table();
        let dictionary = Arc::new(FamilyNameDictionary::from_names(["山田"]));
        let order_only = BasicScorer::new(Arc::clone(&table), Arc::clone(&dictionary))
            .with_only_order_score_when_4(true);
        let full = BasicScorer::new(Arc::clone(&table), Arc::clone(&dictionary));

        let candidate = generate("山田太郎").nth(1).unwrap();
        let features = CandidateFeatures::extract(&candidate, &table, &dictionary);

        // 위치 점수: (0.7 + 0.7 + 0.8 + 0.9) / 4
        assert!((order_only.score(&candidate) - features.order_score).abs() < 1e-12);
        assert!((features.order_score - 0.775).abs() < 1e-12);
        assert!((order_only.score(&candidate) - full.score(&candidate)).abs() > 1e-6);
    }

    #[test]
    fn test_only_order_ignored_for_other_lengths() {
        let table = sample_table();
        let dictionary = Arc::new(FamilyNameDictionary::from_names(["山田"]));
        let order_only = BasicScorer::new(Arc::clone(&table), Arc::clone(&dictionary))
            .with_only_order_score_when_4(true);
        let full = BasicScorer::new(table, dictionary);

        assert_eq!(scores(&order_only, "山田太"), scores(&full, "山田太"));
    }

    #[test]
    fn test_deterministic() {
        let scorer = BasicScorer::new(sample_table(), Arc::new(FamilyNameDictionary::default()));
        let first = scores(&scorer, "山田太郎");
        let second = scores(&scorer, "山田太郎");
        assert_eq!(first, second);
    }
}
