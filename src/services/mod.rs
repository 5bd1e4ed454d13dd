//! # 비즈니스 로직 계층
//!
//! HTTP와 무관한 핵심 기능들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)는 이 모듈의 함수를 조합해 응답을 만듭니다.
//!
//! 각 하위 모듈:
//! - `catalog`: 주차별 계획, 마일스톤, 일정 등 정적 콘텐츠 조회
//! - `export`: 생성된 아이디어를 HTML 문서로 내보내기
//! - `generation`: 외부 텍스트 생성 서비스 클라이언트
//! - `prompt`: 생성 요청용 프롬프트 작성
//! - `rate_limit`: 세션당 생성 호출 한도
//! - `sanitizer`: 자유 입력 텍스트 정제
//! - `trends`: 검색 트렌드 조회와 점수 계산

pub mod catalog;
pub mod export;
pub mod generation;
pub mod prompt;
pub mod rate_limit;
pub mod sanitizer;
pub mod trends;
