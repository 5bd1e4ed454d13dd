//! # 세션 단위 호출 한도(Rate Limiter)
//!
//! 한 세션이 외부 텍스트 생성 API를 몇 번 부를 수 있는지 제한합니다.
//!
//! 사용 규칙:
//! 1. 외부 호출 **전에** `allowed()`로 확인
//! 2. 실제로 호출을 보낸 **뒤에만** `record_call()` (거절된 요청은 세지 않음)
//!
//! 새 세션을 만드는 것 외에는 초기화 방법이 없습니다.
//! 세션 하나를 묶어 두는 소프트 상한일 뿐, 사용자 식별이나
//! 세션 간 제한이 없으므로 보안 경계가 아닙니다.

use serde::Serialize;

/// 기본 세션당 최대 생성 호출 수
pub const DEFAULT_MAX_CALLS: u32 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateLimiter {
    max: u32,
    count: u32,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CALLS)
    }
}

impl RateLimiter {
    pub fn new(max: u32) -> Self {
        Self { max, count: 0 }
    }

    /// 호출 횟수가 한도보다 작으면 `true`
    pub fn allowed(&self) -> bool {
        self.count < self.max
    }

    /// 호출 한 번을 기록합니다.
    ///
    /// 횟수는 줄어들지 않으며 한도를 넘지 않습니다.
    pub fn record_call(&mut self) {
        self.count = self.count.saturating_add(1).min(self.max);
    }

    /// `max(0, max - count)`
    pub fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.count)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_limiter_allows_calls() {
        let limiter = RateLimiter::default();
        assert!(limiter.allowed());
        assert_eq!(limiter.remaining(), 25);
        assert_eq!(limiter.count(), 0);
    }

    #[test]
    fn blocks_after_max_calls() {
        let mut limiter = RateLimiter::new(25);
        for _ in 0..25 {
            assert!(limiter.allowed());
            limiter.record_call();
        }
        assert!(!limiter.allowed());
        assert_eq!(limiter.remaining(), 0);
    }

    #[test]
    fn count_never_passes_max() {
        let mut limiter = RateLimiter::new(2);
        for _ in 0..10 {
            limiter.record_call();
        }
        assert_eq!(limiter.count(), 2);
        assert_eq!(limiter.remaining(), 0);
    }

    #[test]
    fn zero_max_rejects_everything() {
        let limiter = RateLimiter::new(0);
        assert!(!limiter.allowed());
        assert_eq!(limiter.remaining(), 0);
    }
}
