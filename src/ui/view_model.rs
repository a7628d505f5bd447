//! Per-screen state container.
//!
//! A [`StateContainer`] owns the current [`ScreenState`] of one screen and
//! publishes it through a `tokio::sync::watch` channel: observers read the
//! latest value immediately and are woken when it changes.
//!
//! Each [`load`](StateContainer::load) applies `Loading`, then runs the
//! repository stream on a spawned task and applies exactly one terminal
//! state. A newer load supersedes older ones: the older task is aborted
//! and, should its outcome still arrive, a generation check drops it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::repository::OutcomeStream;
use crate::ui::load::{LoadIntent, ScreenReducer, ScreenState};
use crate::ui::mvi::Reducer;
use crate::ui::scope::ScreenScope;

pub struct StateContainer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    shared: Arc<Shared<T>>,
    scope: ScreenScope,
    task: Mutex<Option<JoinHandle<()>>>,
}

struct Shared<T> {
    state: watch::Sender<ScreenState<T>>,
    /// Id of the most recent load. Only that load may apply transitions.
    generation: AtomicU64,
}

impl<T> Shared<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Apply `intent` if `generation` is still current. Returns whether
    /// the state was written.
    fn apply(&self, generation: u64, intent: LoadIntent<T>) -> bool {
        // The check runs under the channel lock so it is atomic with the write.
        self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            let current = std::mem::take(state);
            *state = ScreenReducer::<T>::reduce(current, intent);
            true
        })
    }

    /// Retire the current generation so no pending outcome can land.
    fn invalidate(&self) {
        // Bumped under the channel lock: an `apply` already past its
        // generation check finishes first, any later one sees a stale id.
        self.state.send_if_modified(|_| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            false
        });
    }
}

impl<T> StateContainer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a container with its own scope. Starts in `Loading`.
    pub fn new() -> Self {
        Self::with_scope(ScreenScope::new())
    }

    /// Create a container bound to an existing screen scope.
    pub fn with_scope(scope: ScreenScope) -> Self {
        let (state, _) = watch::channel(ScreenState::Loading);
        Self {
            shared: Arc::new(Shared {
                state,
                generation: AtomicU64::new(0),
            }),
            scope,
            task: Mutex::new(None),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ScreenState<T> {
        self.shared.state.borrow().clone()
    }

    /// Observe this container. The observer sees the current state at once.
    pub fn subscribe(&self) -> StateObserver<T> {
        StateObserver {
            rx: self.shared.state.subscribe(),
        }
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// Current load generation. Bumped by every load and by `close`.
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::SeqCst)
    }

    /// Enter `Loading` and subscribe to `stream`, replacing any load in
    /// flight. Does nothing once the scope is closed.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn load(&self, stream: OutcomeStream<T>) {
        let mut task = self.task.lock();

        if self.scope.is_closed() {
            tracing::debug!("Load ignored, screen scope is closed");
            return;
        }

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = task.take() {
            if !previous.is_finished() {
                tracing::debug!(generation, "Superseding in-flight load");
            }
            previous.abort();
        }

        self.shared.apply(generation, LoadIntent::Started);
        tracing::debug!(generation, "Load started");

        let shared = Arc::clone(&self.shared);
        let scope = self.scope.clone();
        *task = Some(tokio::spawn(async move {
            let mut stream = stream;
            let outcome = tokio::select! {
                _ = scope.closed() => {
                    tracing::debug!(generation, "Load cancelled with its screen");
                    return;
                }
                outcome = stream.next_outcome() => outcome,
            };

            let Some(outcome) = outcome else {
                return;
            };
            if scope.is_closed() {
                tracing::debug!(generation, "Dropping outcome, screen scope is closed");
                return;
            }

            let success = outcome.is_success();
            if shared.apply(generation, LoadIntent::Finished(outcome)) {
                tracing::debug!(generation, success, "Load finished");
            } else {
                tracing::debug!(generation, "Dropping stale outcome");
            }
        }));
    }

    /// Close the scope and abort any load in flight. Once this returns
    /// no further transitions are applied.
    pub fn close(&self) {
        let mut task = self.task.lock();
        self.scope.close();
        self.shared.invalidate();
        if let Some(task) = task.take() {
            task.abort();
        }
    }
}

impl<T> Default for StateContainer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for StateContainer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.close();
    }
}

/// Read-only view of a [`StateContainer`].
pub struct StateObserver<T> {
    rx: watch::Receiver<ScreenState<T>>,
}

impl<T: Clone> StateObserver<T> {
    /// Latest published state.
    pub fn current(&self) -> ScreenState<T> {
        self.rx.borrow().clone()
    }

    /// Wait for the next transition. `None` once the container is gone.
    ///
    /// Only the latest value is kept: transitions published while the
    /// observer was not waiting collapse into the newest one, so a fast
    /// load may go straight from the previous state to its terminal state
    /// without this observer ever seeing `Loading`.
    pub async fn changed(&mut self) -> Option<ScreenState<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Wait until the state is `Success` or `Error`, returning it.
    pub async fn settled(&mut self) -> Option<ScreenState<T>> {
        self.rx
            .wait_for(|state| !matches!(state, ScreenState::Loading))
            .await
            .ok()
            .map(|state| (*state).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;
    use crate::repository::Outcome;
    use std::time::Duration;

    fn delayed(value: u32, delay_ms: u64) -> OutcomeStream<u32> {
        OutcomeStream::new(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            Ok::<_, DataError>(value)
        })
    }

    #[tokio::test]
    async fn starts_loading_with_no_loads() {
        let container = StateContainer::<u32>::new();
        assert_eq!(container.state(), ScreenState::Loading);
        assert_eq!(container.generation(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn load_emits_loading_then_success() {
        let container = StateContainer::new();
        let mut observer = container.subscribe();

        container.load(delayed(1, 10));
        assert_eq!(observer.changed().await, Some(ScreenState::Loading));
        assert_eq!(observer.changed().await, Some(ScreenState::Success(1)));
        assert_eq!(container.state(), ScreenState::Success(1));
    }

    #[tokio::test(start_paused = true)]
    async fn newer_load_wins_over_slower_older_one() {
        let container = StateContainer::new();
        let mut observer = container.subscribe();

        container.load(delayed(1, 100));
        container.load(delayed(2, 10));

        assert_eq!(observer.settled().await, Some(ScreenState::Success(2)));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(container.state(), ScreenState::Success(2));
    }

    #[tokio::test(start_paused = true)]
    async fn stale_generation_is_not_applied() {
        let container = StateContainer::<u32>::new();
        container.load(delayed(1, 10));
        container.load(delayed(2, 10));

        assert!(!container.shared.apply(1, LoadIntent::Started));
        assert!(container.shared.apply(2, LoadIntent::Started));
    }

    #[tokio::test(start_paused = true)]
    async fn outcome_ready_at_close_is_not_applied() {
        let container = StateContainer::<u32>::new();
        container.load(delayed(1, 10));
        let generation = container.generation();

        container.close();
        // A task that already passed its scope check still cannot write.
        assert!(!container
            .shared
            .apply(generation, LoadIntent::Finished(Outcome::Success(1))));
        assert_eq!(container.state(), ScreenState::Loading);
    }

    #[tokio::test(start_paused = true)]
    async fn observer_sees_only_latest_of_unobserved_transitions() {
        let container = StateContainer::new();
        let mut observer = container.subscribe();

        container.load(delayed(1, 10));
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Loading and Success were both published; only Success remains.
        assert_eq!(observer.changed().await, Some(ScreenState::Success(1)));
        let extra = tokio::time::timeout(Duration::from_secs(1), observer.changed()).await;
        assert!(extra.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn close_drops_pending_outcome() {
        let container = StateContainer::new();
        container.load(delayed(1, 50));
        container.close();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(container.state(), ScreenState::Loading);
    }

    #[tokio::test]
    async fn load_after_close_is_ignored() {
        let container = StateContainer::<u32>::new();
        container.close();
        let generation = container.generation();
        container.load(delayed(1, 0));
        assert_eq!(container.generation(), generation);
        assert_eq!(container.state(), ScreenState::Loading);
    }

    #[tokio::test]
    async fn observer_ends_when_container_dropped() {
        let container = StateContainer::<u32>::new();
        let mut observer = container.subscribe();
        drop(container);
        assert_eq!(observer.changed().await, None);
    }
}
