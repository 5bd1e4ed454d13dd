//! # 세션 저장소 계층
//!
//! 세션 상태를 메모리에 보관합니다. 서버가 재시작되면 모든 세션이 사라집니다.
//!
//! 하위 모듈:
//! - `sessions`: 세션 ID → 세션 상태 맵

pub mod sessions;

pub use sessions::*;
