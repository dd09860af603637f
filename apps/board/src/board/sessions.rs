//! Open board sessions. Each session owns a `ListingController` over the shared,
//! immutable listing set; closing a session discards its filter state.
//!
//! Mutations for one session are serialized by the store lock and run to completion
//! before the next event is applied. A board untouched for longer than the idle
//! timeout counts as ended and is evicted.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::board::ListingController;
use crate::errors::AppError;
use crate::models::job::JobListing;

struct Board {
    controller: ListingController,
    last_touched: Instant,
}

pub struct SessionStore {
    listings: Arc<[JobListing]>,
    sessions: Mutex<HashMap<Uuid, Board>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(listings: Arc<[JobListing]>, max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            listings,
            sessions: Mutex::new(HashMap::new()),
            max_sessions,
            idle_timeout,
        }
    }

    /// The full, never-mutated listing set.
    pub fn listings(&self) -> &Arc<[JobListing]> {
        &self.listings
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Opens a new board with empty filters. Idle boards are evicted before the
    /// limit is checked.
    pub async fn open(&self) -> Result<Uuid, AppError> {
        let mut sessions = self.sessions.lock().await;
        self.evict_idle_locked(&mut sessions);
        if sessions.len() >= self.max_sessions {
            warn!("Session limit reached ({})", self.max_sessions);
            return Err(AppError::Conflict(format!(
                "Too many open boards (limit {})",
                self.max_sessions
            )));
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Board {
                controller: ListingController::new(Arc::clone(&self.listings)),
                last_touched: Instant::now(),
            },
        );
        info!("Opened board {id} ({} open)", sessions.len());
        Ok(id)
    }

    /// Runs `f` against the board's controller while holding the store lock.
    /// Touching a board keeps it alive.
    pub async fn with_board<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ListingController) -> R,
    ) -> Result<R, AppError> {
        let mut sessions = self.sessions.lock().await;
        self.evict_idle_locked(&mut sessions);
        match sessions.get_mut(&id) {
            Some(board) => {
                board.last_touched = Instant::now();
                Ok(f(&mut board.controller))
            }
            None => {
                warn!("Unknown board {id}");
                Err(AppError::NotFound(format!("Board {id} not found")))
            }
        }
    }

    pub async fn close(&self, id: Uuid) -> Result<(), AppError> {
        let mut sessions = self.sessions.lock().await;
        if sessions.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("Board {id} not found")));
        }
        info!("Closed board {id} ({} open)", sessions.len());
        Ok(())
    }

    /// Drops every board idle for longer than the timeout. Returns how many went.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.lock().await;
        self.evict_idle_locked(&mut sessions)
    }

    fn evict_idle_locked(&self, sessions: &mut HashMap<Uuid, Board>) -> usize {
        let before = sessions.len();
        let timeout = self.idle_timeout;
        sessions.retain(|_, board| board.last_touched.elapsed() <= timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle boards ({} open)", sessions.len());
        }
        evicted
    }

    pub async fn open_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

/// Periodically evicts idle boards for the lifetime of the process.
pub fn spawn_idle_sweeper(store: Arc<SessionStore>) -> tokio::task::JoinHandle<()> {
    let period = store.idle_timeout().min(Duration::from_secs(60));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            store.evict_idle().await;
        }
    })
}
