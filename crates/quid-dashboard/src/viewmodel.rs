//! Dashboard view model and state machine

use crate::source::DashboardSource;
use quid_core::DashboardSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Fixed user-facing message for any failed dashboard load
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load dashboard data. Please try again.";

/// Observable state of the creator dashboard
///
/// Exactly one variant holds at any time. `Ready` with empty quest and
/// response lists is a valid state, distinct from `Error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardState {
    /// A fetch is in progress and no data is displayable yet
    Loading,

    /// The last fetch failed
    Error {
        /// User-facing error message
        message: String,
    },

    /// Data is loaded and displayable
    Ready {
        /// The fetched snapshot
        #[serde(flatten)]
        snapshot: DashboardSnapshot,
    },
}

impl DashboardState {
    /// Check whether a fetch is in progress
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check whether the last fetch failed
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Check whether data is loaded
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Shared view model internals
struct Inner {
    /// Dashboard data provider
    source: Arc<dyn DashboardSource>,

    /// Current state, observed via watch receivers
    state: watch::Sender<DashboardState>,

    /// Generation counter for staleness detection
    generation: AtomicU64,

    /// Guard against overlapping fetches
    in_flight: AtomicBool,

    /// Fired on shutdown, discards in-flight results
    cancel: CancellationToken,
}

/// View model driving the creator dashboard
///
/// Owns the fetch lifecycle and the [`DashboardState`] machine:
///
/// ```text
/// Loading --fetch ok--> Ready
/// Loading --fetch err-> Error
/// Error   --retry-----> Loading
/// ```
///
/// Cloning is cheap and all clones observe the same state.
#[derive(Clone)]
pub struct DashboardViewModel {
    inner: Arc<Inner>,
}

impl DashboardViewModel {
    /// Create a view model over the given source
    ///
    /// The initial state is `Loading`. No fetch runs until
    /// [`initialize`](Self::initialize) is called.
    #[must_use]
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        let (state, _) = watch::channel(DashboardState::Loading);
        Self {
            inner: Arc::new(Inner {
                source,
                state,
                generation: AtomicU64::new(0),
                in_flight: AtomicBool::new(false),
                cancel: CancellationToken::new(),
            }),
        }
    }

    /// Snapshot the current state
    #[must_use]
    pub fn state(&self) -> DashboardState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state transitions
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.inner.state.subscribe()
    }

    /// Ensure a fetch is running
    ///
    /// Transitions to `Loading` and starts a background fetch. While a
    /// fetch is already in flight this is a no-op, so at most one fetch
    /// runs at a time.
    pub fn initialize(&self) {
        if self.start_fetch() {
            info!(source = self.inner.source.name(), "dashboard initializing");
        } else {
            debug!("initialize skipped, fetch already in flight");
        }
    }

    /// Retry a failed load
    ///
    /// Valid only from `Error`: transitions back to `Loading` and re-runs
    /// the fetch. From `Loading` or `Ready` nothing happens and `false`
    /// is returned.
    pub fn retry(&self) -> bool {
        if !self.state().is_error() {
            debug!("retry ignored, state is not Error");
            return false;
        }

        let accepted = self.start_fetch();
        if accepted {
            info!("dashboard retry accepted");
        }
        accepted
    }

    /// Record an intent to create a new quest
    ///
    /// Placeholder collaborator: no backend contract exists yet, so the
    /// intent is only recorded as a structured event.
    pub fn create_quest(&self) {
        info!("create quest requested");
    }

    /// Shut the view model down
    ///
    /// Any in-flight fetch result is discarded instead of committed.
    pub fn shutdown(&self) {
        info!("dashboard view model shutting down");
        self.inner.cancel.cancel();
    }

    /// Start a fetch unless one is already in flight
    fn start_fetch(&self) -> bool {
        if self.inner.in_flight.swap(true, Ordering::SeqCst) {
            return false;
        }

        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_replace(DashboardState::Loading);
        Self::spawn_fetch(Arc::clone(&self.inner), generation);
        true
    }

    /// Run the fetch on a background task and commit its outcome
    ///
    /// The outcome is committed only if this task's generation is still
    /// current and shutdown has not fired. Stale or cancelled results are
    /// dropped, never written to state.
    fn spawn_fetch(inner: Arc<Inner>, generation: u64) {
        tokio::spawn(async move {
            let result = tokio::select! {
                () = inner.cancel.cancelled() => {
                    debug!(generation, "fetch cancelled before completion");
                    inner.in_flight.store(false, Ordering::SeqCst);
                    return;
                }
                result = inner.source.fetch_dashboard_data() => result,
            };

            inner.in_flight.store(false, Ordering::SeqCst);

            if inner.cancel.is_cancelled()
                || inner.generation.load(Ordering::SeqCst) != generation
            {
                debug!(generation, "discarding stale fetch result");
                return;
            }

            let next = match result {
                Ok(snapshot) => {
                    info!(
                        quests = snapshot.quests.len(),
                        responses = snapshot.responses.len(),
                        "dashboard data loaded"
                    );
                    DashboardState::Ready { snapshot }
                }
                Err(error) => {
                    warn!(%error, "dashboard fetch failed");
                    DashboardState::Error {
                        message: LOAD_ERROR_MESSAGE.to_string(),
                    }
                }
            };

            inner.state.send_replace(next);
        });
    }
}

impl fmt::Debug for DashboardViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardViewModel")
            .field("source", &self.inner.source.name())
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::{DashboardError, DashboardResult};
    use crate::mock::MockDashboardSource;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::sync::atomic::AtomicUsize;
    use tokio::time::{Duration, sleep, timeout};

    /// Source that counts fetches and then delegates to the mock
    struct CountingSource {
        fetches: AtomicUsize,
        delegate: MockDashboardSource,
    }

    impl CountingSource {
        fn new(delay: Duration) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                delegate: MockDashboardSource::new().with_delay(delay),
            }
        }
    }

    #[async_trait]
    impl DashboardSource for CountingSource {
        async fn fetch_dashboard_data(&self) -> DashboardResult<DashboardSnapshot> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.delegate.fetch_dashboard_data().await
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    /// Source that fails a fixed number of times, then succeeds
    struct FlakySource {
        remaining_failures: AtomicUsize,
    }

    #[async_trait]
    impl DashboardSource for FlakySource {
        async fn fetch_dashboard_data(&self) -> DashboardResult<DashboardSnapshot> {
            let remaining = self.remaining_failures.load(Ordering::SeqCst);
            if remaining > 0 {
                self.remaining_failures.store(remaining - 1, Ordering::SeqCst);
                return Err(DashboardError::source_unavailable("flaky"));
            }
            MockDashboardSource::new()
                .with_delay(Duration::ZERO)
                .fetch_dashboard_data()
                .await
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    /// Wait until the state leaves `Loading`
    async fn wait_until_settled(viewmodel: &DashboardViewModel) -> DashboardState {
        let mut rx = viewmodel.subscribe();
        timeout(Duration::from_secs(2), async {
            loop {
                let current = rx.borrow().clone();
                if !current.is_loading() {
                    return current;
                }
                rx.changed().await.unwrap();
            }
        })
        .await
        .unwrap()
    }

    fn mock_viewmodel() -> DashboardViewModel {
        DashboardViewModel::new(Arc::new(
            MockDashboardSource::new().with_delay(Duration::ZERO),
        ))
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let viewmodel = mock_viewmodel();
        assert_eq!(viewmodel.state(), DashboardState::Loading);
    }

    #[tokio::test]
    async fn test_initialize_reaches_ready() {
        let viewmodel = mock_viewmodel();
        viewmodel.initialize();

        let state = wait_until_settled(&viewmodel).await;
        let DashboardState::Ready { snapshot } = state else {
            panic!("expected Ready, got {state:?}");
        };

        assert_eq!(snapshot.stats.active_quests, 12);
        assert_eq!(snapshot.stats.total_responses, 48);
        assert_eq!(snapshot.stats.total_rewards, Decimal::new(215_002, 2));
        assert!(!snapshot.quests.is_empty());
    }

    #[tokio::test]
    async fn test_failure_reaches_error_with_fixed_message() {
        let viewmodel = DashboardViewModel::new(Arc::new(
            MockDashboardSource::new()
                .with_delay(Duration::ZERO)
                .with_failure("backend exploded"),
        ));
        viewmodel.initialize();

        let state = wait_until_settled(&viewmodel).await;
        assert_eq!(
            state,
            DashboardState::Error {
                message: LOAD_ERROR_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_retry_from_error_recovers() {
        let viewmodel = DashboardViewModel::new(Arc::new(FlakySource {
            remaining_failures: AtomicUsize::new(1),
        }));
        viewmodel.initialize();

        let state = wait_until_settled(&viewmodel).await;
        assert!(state.is_error());

        assert!(viewmodel.retry());

        let state = wait_until_settled(&viewmodel).await;
        assert!(state.is_ready());
    }

    #[tokio::test]
    async fn test_retry_rejected_outside_error() {
        let viewmodel = DashboardViewModel::new(Arc::new(
            MockDashboardSource::new().with_delay(Duration::from_millis(200)),
        ));

        // Loading without a fetch yet
        assert!(!viewmodel.retry());

        viewmodel.initialize();
        assert!(!viewmodel.retry());

        let state = wait_until_settled(&viewmodel).await;
        assert!(state.is_ready());
        assert!(!viewmodel.retry());
    }

    #[tokio::test]
    async fn test_empty_snapshot_is_ready_not_error() {
        let viewmodel = DashboardViewModel::new(Arc::new(
            MockDashboardSource::new()
                .with_delay(Duration::ZERO)
                .with_empty_data(),
        ));
        viewmodel.initialize();

        let state = wait_until_settled(&viewmodel).await;
        let DashboardState::Ready { snapshot } = state else {
            panic!("expected Ready, got {state:?}");
        };
        assert!(snapshot.quests.is_empty());
        assert!(snapshot.responses.is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_discards_in_flight_fetch() {
        let viewmodel = DashboardViewModel::new(Arc::new(
            MockDashboardSource::new().with_delay(Duration::from_millis(100)),
        ));
        viewmodel.initialize();
        viewmodel.shutdown();

        sleep(Duration::from_millis(250)).await;
        assert_eq!(viewmodel.state(), DashboardState::Loading);
    }

    #[tokio::test]
    async fn test_concurrent_initialize_runs_single_fetch() {
        let source = Arc::new(CountingSource::new(Duration::from_millis(100)));
        let viewmodel = DashboardViewModel::new(Arc::clone(&source) as Arc<dyn DashboardSource>);

        viewmodel.initialize();
        viewmodel.initialize();
        viewmodel.initialize();

        let state = wait_until_settled(&viewmodel).await;
        assert!(state.is_ready());
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clones_observe_same_state() {
        let viewmodel = mock_viewmodel();
        let clone = viewmodel.clone();

        viewmodel.initialize();
        let state = wait_until_settled(&clone).await;
        assert!(state.is_ready());
        assert_eq!(clone.state(), viewmodel.state());
    }

    #[test]
    fn test_state_serialization_tags() {
        let loading = serde_json::to_value(DashboardState::Loading).unwrap();
        assert_eq!(loading["status"], "loading");

        let error = serde_json::to_value(DashboardState::Error {
            message: LOAD_ERROR_MESSAGE.to_string(),
        })
        .unwrap();
        assert_eq!(error["status"], "error");
        assert_eq!(error["message"], LOAD_ERROR_MESSAGE);

        let ready = serde_json::to_value(DashboardState::Ready {
            snapshot: DashboardSnapshot {
                quests: Vec::new(),
                responses: Vec::new(),
                stats: quid_core::DashboardStats::default(),
            },
        })
        .unwrap();
        assert_eq!(ready["status"], "ready");
        assert!(ready["quests"].as_array().unwrap().is_empty());
        assert!(ready["stats"].is_object());
    }

    #[test]
    fn test_state_roundtrip() {
        let state = DashboardState::Error {
            message: LOAD_ERROR_MESSAGE.to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: DashboardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
