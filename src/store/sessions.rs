//! # 메모리 세션 저장소
//!
//! 세션마다 `Arc<Mutex<SessionState>>`를 하나씩 두고, 전체 맵은 `RwLock`으로 감쌉니다.
//!
//! - 맵 잠금은 조회/추가/삭제 순간에만 잡고 바로 놓습니다.
//! - 세션 잠금은 핸들러가 그 세션을 다루는 동안 잡습니다.
//!   생성 호출 중에도 잡고 있으므로 한 세션에서 동시에 진행되는 생성은 최대 하나입니다.
//!   다른 세션은 영향을 받지 않습니다.
//!
//! 탭을 닫고 `DELETE /session`을 보내지 않은 세션은 `idle_timeout` 동안 요청이 없으면 버려집니다.
//! 새 세션을 만들 때와 `main.rs`의 주기 작업에서 정리합니다.
//! 잠겨 있는(요청 처리 중인) 세션은 정리 대상에서 빠집니다.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{SessionState, UserProfile};

/// 핸들러가 잠가서 쓰는 세션 핸들
pub type SharedSession = Arc<Mutex<SessionState>>;

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SharedSession>>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            idle_timeout,
        }
    }

    /// 새 세션을 만들고 핸들을 돌려줍니다.
    ///
    /// 상한에 닿았으면 오래 쓰이지 않은 세션부터 정리하고, 그래도 가득 차 있으면 `Conflict`.
    pub async fn create(
        &self,
        profile: UserProfile,
        max_calls: u32,
    ) -> Result<SharedSession, AppError> {
        let mut sessions = self.sessions.write().await;

        if sessions.len() >= self.max_sessions {
            evict_idle_in(&mut sessions, self.idle_timeout, Utc::now());
        }
        if sessions.len() >= self.max_sessions {
            return Err(AppError::Conflict(format!(
                "Session limit of {} reached, end an existing session first",
                self.max_sessions
            )));
        }

        let id = Uuid::now_v7().to_string();
        let session = Arc::new(Mutex::new(SessionState::new(id.clone(), profile, max_calls)));
        sessions.insert(id.clone(), session.clone());

        tracing::info!("Session created: {} ({} active)", id, sessions.len());
        Ok(session)
    }

    pub async fn get(&self, id: &str) -> Option<SharedSession> {
        self.sessions.read().await.get(id).cloned()
    }

    /// 세션을 버립니다. 없던 세션이면 `false`.
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            tracing::info!("Session ended: {}", id);
        }
        removed
    }

    /// `now` 기준으로 `idle_timeout` 이상 요청이 없던 세션을 버리고 버린 개수를 돌려줍니다.
    pub async fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        evict_idle_in(&mut sessions, self.idle_timeout, now)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}

fn evict_idle_in(
    sessions: &mut HashMap<String, SharedSession>,
    idle_timeout: Duration,
    now: DateTime<Utc>,
) -> usize {
    let before = sessions.len();
    sessions.retain(|_, session| match session.try_lock() {
        Ok(state) => now - state.last_seen < idle_timeout,
        Err(_) => true,
    });

    let evicted = before - sessions.len();
    if evicted > 0 {
        tracing::info!("Evicted {} idle sessions ({} active)", evicted, sessions.len());
    }
    evicted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(max_sessions: usize) -> SessionStore {
        SessionStore::new(max_sessions, Duration::minutes(30))
    }

    async fn make_idle(session: &SharedSession) {
        session.lock().await.last_seen = Utc::now() - Duration::hours(2);
    }

    #[tokio::test]
    async fn create_get_remove() {
        let store = store(10);
        let session = store.create(UserProfile::default(), 25).await.unwrap();
        let id = session.lock().await.id.clone();

        assert!(store.get(&id).await.is_some());
        assert_eq!(store.len().await, 1);
        assert!(store.remove(&id).await);
        assert!(!store.remove(&id).await);
        assert!(store.get(&id).await.is_none());
    }

    #[tokio::test]
    async fn rejects_sessions_over_the_cap() {
        let store = store(1);
        store.create(UserProfile::default(), 25).await.unwrap();
        let err = store.create(UserProfile::default(), 25).await.err().unwrap();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn idle_sessions_free_their_slots() {
        let store = store(3);
        let mut abandoned = Vec::new();
        for _ in 0..3 {
            abandoned.push(store.create(UserProfile::default(), 25).await.unwrap());
        }
        for session in &abandoned {
            make_idle(session).await;
        }

        let fresh = store.create(UserProfile::default(), 25).await.unwrap();
        assert_eq!(store.len().await, 1);
        let id = fresh.lock().await.id.clone();
        assert!(store.get(&id).await.is_some());
    }

    #[tokio::test]
    async fn active_and_locked_sessions_are_kept() {
        let store = store(2);
        let active = store.create(UserProfile::default(), 25).await.unwrap();
        let busy = store.create(UserProfile::default(), 25).await.unwrap();
        make_idle(&busy).await;

        let guard = busy.lock().await;
        assert_eq!(store.evict_idle(Utc::now()).await, 0);
        let err = store.create(UserProfile::default(), 25).await.err().unwrap();
        assert!(matches!(err, AppError::Conflict(_)));
        drop(guard);

        assert_eq!(store.evict_idle(Utc::now()).await, 1);
        let id = active.lock().await.id.clone();
        assert!(store.get(&id).await.is_some());
    }

    #[tokio::test]
    async fn sessions_have_independent_limiters() {
        let store = store(10);
        let a = store.create(UserProfile::default(), 2).await.unwrap();
        let b = store.create(UserProfile::default(), 2).await.unwrap();

        {
            let mut a = a.lock().await;
            a.limiter.record_call();
            a.limiter.record_call();
            assert!(!a.limiter.allowed());
        }
        assert!(b.lock().await.limiter.allowed());
    }

    #[tokio::test]
    async fn concurrent_callers_never_overshoot_the_limit() {
        let store = store(10);
        let session = store.create(UserProfile::default(), 5).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..20 {
            let session = session.clone();
            tasks.push(tokio::spawn(async move {
                let mut state = session.lock().await;
                if state.limiter.allowed() {
                    tokio::task::yield_now().await;
                    state.limiter.record_call();
                    true
                } else {
                    false
                }
            }));
        }

        let mut admitted = 0;
        for task in tasks {
            if task.await.unwrap() {
                admitted += 1;
            }
        }
        assert_eq!(admitted, 5);
        assert_eq!(session.lock().await.limiter.count(), 5);
    }
}
