//! # 요청 전처리(미들웨어) 모듈
//!
//! - `session`: `x-session-id` 헤더로 현재 세션을 찾는 추출기

pub mod session;

pub use session::CurrentSession;
