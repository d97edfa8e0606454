//! 후보별 특징 추출
//!
//! 기본 스코어러와 GBDT 스코어러가 같은 특징을 사용합니다.

use crate::table::{FamilyNameDictionary, FeatureTable};

use super::candidate::CandidateSplit;

/// 분할 후보 하나에서 뽑은 수치 특징
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CandidateFeatures {
    /// 전체 글자 수
    pub full_len: usize,
    /// 성 글자 수 (= 분할 위치)
    pub family_len: usize,
    /// 이름 글자 수
    pub given_len: usize,
    /// 성 글자들의 성 사용 비율 평균
    pub family_avg: f64,
    /// 이름 글자들의 이름 사용 비율 평균
    pub given_avg: f64,
    /// 성 후보가 성씨 사전에 있는지
    pub family_in_dictionary: bool,
    /// 성 후보의 사전 가중치 (없으면 0.0)
    pub family_dictionary_weight: f64,
    /// 이름 후보 자체가 성씨 사전에 있는지
    pub given_in_dictionary: bool,
    /// 위치 빈도 점수 (각 글자가 성/이름 안의 자기 위치에 나타나는 비율 평균)
    pub order_score: f64,
    /// 성 마지막 글자의 성 사용 비율
    pub family_boundary_ratio: f64,
    /// 이름 첫 글자의 이름 사용 비율
    pub given_boundary_ratio: f64,
    /// 특징 테이블에 없는 글자 비율
    pub unknown_ratio: f64,
}

impl CandidateFeatures {
    /// 테이블 조회로 특징 계산
    pub fn extract(
        candidate: &CandidateSplit<'_>,
        table: &FeatureTable,
        dictionary: &FamilyNameDictionary,
    ) -> Self {
        let mut family_sum = 0.0;
        let mut given_sum = 0.0;
        let mut order_sum = 0.0;
        let mut unknown = 0usize;
        let mut family_boundary_ratio = 0.0;
        let mut given_boundary_ratio = 0.0;

        for (offset, c) in candidate.family.chars().enumerate() {
            let record = table.lookup(c);
            family_sum += record.family_ratio();
            order_sum += record.family_order(offset);
            family_boundary_ratio = record.family_ratio();
            if !table.contains(c) {
                unknown += 1;
            }
        }

        let mut given_len = 0usize;
        for (offset, c) in candidate.given.chars().enumerate() {
            let record = table.lookup(c);
            given_sum += record.given_ratio();
            order_sum += record.given_order(offset);
            if offset == 0 {
                given_boundary_ratio = record.given_ratio();
            }
            if !table.contains(c) {
                unknown += 1;
            }
            given_len += 1;
        }

        let family_len = candidate.family_len();
        let full_len = family_len + given_len;

        if unknown > 0 {
            log::debug!(
                "특징 테이블에 없는 글자 {}개: {}|{}",
                unknown,
                candidate.family,
                candidate.given
            );
        }

        Self {
            full_len,
            family_len,
            given_len,
            family_avg: mean(family_sum, family_len),
            given_avg: mean(given_sum, given_len),
            family_in_dictionary: dictionary.contains(candidate.family),
            family_dictionary_weight: dictionary.weight(candidate.family),
            given_in_dictionary: dictionary.contains(candidate.given),
            order_score: mean(order_sum, full_len),
            family_boundary_ratio,
            given_boundary_ratio,
            unknown_ratio: mean(unknown as f64, full_len),
        }
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divider::candidate::generate;

    fn sample_table() -> FeatureTable {
        FeatureTable::from_json(
            r#"{
                "山": { "family_freq": 900, "given_freq": 100,
                        "family_position_freq": { "0": 700, "1": 200 } },
                "田": { "family_freq": 800, "given_freq": 200,
                        "family_position_freq": { "0": 100, "1": 700 } },
                "太": { "family_freq": 100, "given_freq": 900,
                        "given_position_freq": { "0": 800 } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_extract() {
        let table = sample_table();
        let dictionary = FamilyNameDictionary::from_names(["山田"]);
        let candidate = generate("山田太").nth(1).unwrap();

        let features = CandidateFeatures::extract(&candidate, &table, &dictionary);
        assert_eq!(features.full_len, 3);
        assert_eq!(features.family_len, 2);
        assert_eq!(features.given_len, 1);
        assert!((features.family_avg - 0.85).abs() < 1e-12);
        assert!((features.given_avg - 0.9).abs() < 1e-12);
        assert!(features.family_in_dictionary);
        assert_eq!(features.family_dictionary_weight, 1.0);
        assert!(!features.given_in_dictionary);
        // (0.7 + 0.7 + 0.8) / 3
        assert!((features.order_score - 2.2 / 3.0).abs() < 1e-12);
        assert!((features.family_boundary_ratio - 0.8).abs() < 1e-12);
        assert!((features.given_boundary_ratio - 0.9).abs() < 1e-12);
        assert_eq!(features.unknown_ratio, 0.0);
    }

    #[test]
    fn test_unknown_chars_use_zero_record() {
        let table = sample_table();
        let dictionary = FamilyNameDictionary::default();
        let candidate = generate("山鬱").next().unwrap();

        let features = CandidateFeatures::extract(&candidate, &table, &dictionary);
        assert_eq!(features.given_avg, 0.0);
        assert_eq!(features.given_boundary_ratio, 0.0);
        assert!((features.unknown_ratio - 0.5).abs() < 1e-12);
    }
}
