//! 정적 참조 테이블
//!
//! 엔진 생성 시 한 번 로드되어 모든 분할 호출이 공유하는 읽기 전용 데이터입니다.

mod family_names;
mod feature_table;

pub use family_names::{FamilyNameDictionary, DEFAULT_WEIGHT};
pub use feature_table::{FeatureRecord, FeatureTable};
