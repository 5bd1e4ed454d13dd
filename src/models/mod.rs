//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `content`: 정적 콘텐츠 카탈로그 레코드
//! - `profile`: 사용자 프로필과 분류값(enum)
//! - `session`: 세션 상태와 세션 API 요청/응답
//! - `trend`: 검색 트렌드 토픽
//!
//! `pub use X::*;`로 재공개하여 `crate::models::UserProfile`처럼 짧게 접근합니다.

pub mod content;
pub mod profile;
pub mod session;
pub mod trend;

pub use content::*;
pub use profile::*;
pub use session::*;
pub use trend::*;
