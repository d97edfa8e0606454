//! 일본어 이름 성/이름 분할
//!
//! 띄어쓰기 없는 일본어 전체 이름을 성과 이름으로 나누고 신뢰도를 계산합니다.
//!
//! # 개요
//!
//! 1. **정규화**: NFKC + 공백 제거 (설정으로 끌 수 있음)
//! 2. **규칙 기반 분할**: 두 글자, 한자 성 + 가나 이름, 공백으로 이미 나뉜 입력
//! 3. **후보 생성**: 길이 L이면 L-1개의 분할 위치
//! 4. **스코어링**: 기본(특징 기반) 또는 GBDT 스코어러
//! 5. **선택**: 최고 점수, 동점이면 앞쪽 위치
//!
//! # 사용 예시
//!
//! ```no_run
//! use namedivider::divider::NameDivider;
//! use namedivider::NameDividerVersion;
//!
//! let divider = NameDivider::from_version(NameDividerVersion::BasicNameDividerLatest).unwrap();
//! let divided = divider.divide("菅義偉").unwrap();
//! println!("{} ({:.3})", divided, divided.score);
//! ```
//!
//! 테이블을 직접 구성할 수도 있습니다:
//!
//! ```
//! use std::sync::Arc;
//! use namedivider::divider::{BasicScorer, NameDivider};
//! use namedivider::table::{FamilyNameDictionary, FeatureTable};
//! use namedivider::DividerSettings;
//!
//! let table = FeatureTable::from_json(r#"{
//!     "山": { "family_freq": 900, "given_freq": 100 },
//!     "田": { "family_freq": 800, "given_freq": 200 },
//!     "太": { "family_freq": 50, "given_freq": 950 }
//! }"#).unwrap();
//! let dictionary = FamilyNameDictionary::from_names(["山田"]);
//!
//! let scorer = BasicScorer::new(Arc::new(table), Arc::new(dictionary));
//! let divider = NameDivider::new(scorer, DividerSettings::default().with_rule_based(false));
//!
//! let divided = divider.divide("山田太").unwrap();
//! assert_eq!(divided.family, "山田");
//! assert_eq!(divided.given, "太");
//! ```

mod basic;
mod candidate;
mod engine;
mod features;
mod gbdt;
mod rule;
mod shared;

// 공개 인터페이스
pub use basic::BasicScorer;
pub use candidate::{generate as generate_candidates, CandidateSplit};
pub use engine::{NameDivider, ScoredCandidate, SINGLE_CHARACTER_SCORE};
pub use features::CandidateFeatures;
pub use gbdt::{
    named_features, vectorize, FeatureVector, GbdtModel, GbdtScorer, FEATURE_COUNT, FEATURE_NAMES,
};
pub use rule::{is_kana, is_kanji, RULE_ALGORITHM_NAME, RULE_SCORE};
pub use shared::shared_divider;

/// 분할 후보 스코어러
///
/// 같은 스코어러의 점수끼리만 비교할 수 있습니다. 구현체는 순수 함수여야 하며
/// 여러 스레드에서 동시에 호출됩니다.
pub trait SplitScorer: Send + Sync + std::fmt::Debug {
    fn score(&self, candidate: &CandidateSplit<'_>) -> f64;
}
