//! 프로세스 공유 분할기
//!
//! 버전마다 최초 요청 시 한 번만 리소스를 로드하고, 이후에는 같은 분할기를 공유합니다.
//! 로드에 실패한 버전은 캐싱하지 않으므로 리소스를 고친 뒤 다시 시도할 수 있습니다.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use crate::config::NameDividerVersion;
use crate::error::DividerError;

use super::engine::NameDivider;

static SHARED_DIVIDERS: LazyLock<Mutex<HashMap<NameDividerVersion, Arc<NameDivider>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// 버전별 공유 분할기 (최초 호출 시 생성)
pub fn shared_divider(version: NameDividerVersion) -> Result<Arc<NameDivider>, DividerError> {
    // 로드 중에도 잠금을 유지해 같은 버전이 두 번 로드되지 않도록 함
    let mut dividers = SHARED_DIVIDERS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(divider) = dividers.get(&version) {
        return Ok(Arc::clone(divider));
    }

    let divider = Arc::new(NameDivider::from_version(version)?);
    dividers.insert(version, Arc::clone(&divider));
    Ok(divider)
}
