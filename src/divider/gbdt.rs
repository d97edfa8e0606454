//! GBDT 스코어러
//!
//! 후보마다 고정 길이 특징 벡터를 만들고, 학습된 결정 트리 앙상블로
//! 분할 확률을 계산합니다. 모델은 JSON 파일에서 한 번 로드합니다.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::ResourceError;
use crate::table::{FamilyNameDictionary, FeatureTable};

use super::candidate::CandidateSplit;
use super::features::CandidateFeatures;
use super::SplitScorer;

/// 특징 벡터 길이
pub const FEATURE_COUNT: usize = 12;

/// 특징 벡터 각 칸의 이름
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "full_length",
    "family_length",
    "given_length",
    "family_avg",
    "given_avg",
    "family_in_dictionary",
    "family_dictionary_weight",
    "given_in_dictionary",
    "order_score",
    "family_boundary_ratio",
    "given_boundary_ratio",
    "unknown_ratio",
];

/// 고정 길이 특징 벡터
pub type FeatureVector = [f64; FEATURE_COUNT];

/// 후보 특징을 모델 입력 벡터로 변환
pub fn vectorize(features: &CandidateFeatures) -> FeatureVector {
    [
        features.full_len as f64,
        features.family_len as f64,
        features.given_len as f64,
        features.family_avg,
        features.given_avg,
        flag(features.family_in_dictionary),
        features.family_dictionary_weight,
        flag(features.given_in_dictionary),
        features.order_score,
        features.family_boundary_ratio,
        features.given_boundary_ratio,
        features.unknown_ratio,
    ]
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// 특징 이름과 값의 쌍 (디버그 출력용)
pub fn named_features(
    vector: &FeatureVector,
) -> impl Iterator<Item = (&'static str, f64)> + '_ {
    FEATURE_NAMES.iter().copied().zip(vector.iter().copied())
}

/// 모델 출력 변환 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Objective {
    /// 로지스틱 (raw -> sigmoid)
    Binary,
    /// 회귀 (raw를 0 ~ 1로 자름)
    Regression,
}

fn default_objective() -> Objective {
    Objective::Binary
}

/// 트리 노드
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
enum Node {
    /// `value <= threshold`이면 left, 아니면 right
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: f64,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn validate(&self, tree_idx: usize) -> Result<(), ResourceError> {
        if self.nodes.is_empty() {
            return Err(ResourceError::FormatError(format!(
                "{}번 트리에 노드가 없습니다",
                tree_idx
            )));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(ResourceError::FormatError(format!(
                            "{}번 트리 {}번 노드: 특징 인덱스 범위 초과 ({})",
                            tree_idx, idx, feature
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ResourceError::FormatError(format!(
                            "{}번 트리 {}번 노드: 유효하지 않은 임계값",
                            tree_idx, idx
                        )));
                    }
                    // 자식은 항상 뒤쪽 노드여야 순회가 끝난다
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(ResourceError::FormatError(format!(
                                "{}번 트리 {}번 노드: 잘못된 자식 인덱스 ({})",
                                tree_idx, idx, child
                            )));
                        }
                    }
                }
                Node::Leaf { leaf } => {
                    if !leaf.is_finite() {
                        return Err(ResourceError::FormatError(format!(
                            "{}번 트리 {}번 노드: 유효하지 않은 리프 값",
                            tree_idx, idx
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn predict(&self, features: &FeatureVector) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[feature] <= threshold { left } else { right };
                }
                Node::Leaf { leaf } => return leaf,
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    #[serde(default = "default_objective")]
    objective: Objective,
    num_features: usize,
    #[serde(default)]
    base_score: f64,
    trees: Vec<Tree>,
}

/// 학습된 결정 트리 앙상블
#[derive(Debug, Clone)]
pub struct GbdtModel {
    objective: Objective,
    base_score: f64,
    trees: Vec<Tree>,
}

impl GbdtModel {
    /// JSON 파일에서 모델 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "objective": "binary",
    ///   "num_features": 12,
    ///   "base_score": 0.0,
    ///   "trees": [
    ///     { "nodes": [
    ///         { "feature": 5, "threshold": 0.5, "left": 1, "right": 2 },
    ///         { "leaf": -1.0 },
    ///         { "leaf": 1.5 }
    ///     ] }
    ///   ]
    /// }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let raw: ModelFile = serde_json::from_reader(reader)?;
        let model = Self::from_raw(raw)?;

        log::info!(
            "GBDT 모델 로드 완료: {} (트리 {}개)",
            path.display(),
            model.tree_count()
        );
        Ok(model)
    }

    /// JSON 문자열에서 모델 로드
    pub fn from_json(json_str: &str) -> Result<Self, ResourceError> {
        let raw: ModelFile = serde_json::from_str(json_str)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: ModelFile) -> Result<Self, ResourceError> {
        if raw.num_features != FEATURE_COUNT {
            return Err(ResourceError::FormatError(format!(
                "특징 수 불일치: 모델 {} / 기대 {}",
                raw.num_features, FEATURE_COUNT
            )));
        }
        if raw.trees.is_empty() {
            return Err(ResourceError::FormatError("트리가 없습니다".into()));
        }
        if !raw.base_score.is_finite() {
            return Err(ResourceError::FormatError(
                "유효하지 않은 base_score".into(),
            ));
        }
        for (idx, tree) in raw.trees.iter().enumerate() {
            tree.validate(idx)?;
        }

        Ok(Self {
            objective: raw.objective,
            base_score: raw.base_score,
            trees: raw.trees,
        })
    }

    /// 트리 합 (변환 전 원시 값)
    pub fn raw_score(&self, features: &FeatureVector) -> f64 {
        self.base_score + self.trees.iter().map(|t| t.predict(features)).sum::<f64>()
    }

    /// 분할 확률 (0.0 ~ 1.0)
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let raw = self.raw_score(features);
        match self.objective {
            Objective::Binary => 1.0 / (1.0 + (-raw).exp()),
            Objective::Regression => raw.clamp(0.0, 1.0),
        }
    }

    /// 트리 수
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

/// 학습된 모델 기반 스코어러
#[derive(Debug, Clone)]
pub struct GbdtScorer {
    table: Arc<FeatureTable>,
    dictionary: Arc<FamilyNameDictionary>,
    model: Arc<GbdtModel>,
}

impl GbdtScorer {
    pub fn new(
        table: Arc<FeatureTable>,
        dictionary: Arc<FamilyNameDictionary>,
        model: Arc<GbdtModel>,
    ) -> Self {
        Self {
            table,
            dictionary,
            model,
        }
    }

    /// 후보의 특징 벡터
    pub fn vectorize(&self, candidate: &CandidateSplit<'_>) -> FeatureVector {
        let features = CandidateFeatures::extract(candidate, &self.table, &self.dictionary);
        vectorize(&features)
    }
}

impl SplitScorer for GbdtScorer {
    fn score(&self, candidate: &CandidateSplit<'_>) -> f64 {
        let vector = self.vectorize(candidate);
        let score = self.model.predict(&vector);

        if log::log_enabled!(log::Level::Trace) {
            let features: Vec<String> = named_features(&vector)
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            log::trace!(
                "GBDT 후보 {}|{}: {} -> {:.4}",
                candidate.family,
                candidate.given,
                features.join(", "),
                score
            );
        }
        score
    }
}
