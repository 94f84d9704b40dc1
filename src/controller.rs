//! Controller that runs events through the handler and executes actions.
//!
//! The [`Controller`] plays the role the plugin shim plays for a UI host: it
//! owns the [`AppState`], feeds events into [`handle_event`], and performs the
//! returned [`Action`]s against its ports. Worker requests become futures held
//! in a [`FuturesUnordered`] set, so several requests can be in flight and
//! complete in any order while all state mutation stays on the caller's task.
//!
//! ```text
//! dispatch(event) → handle_event → actions ─┬→ NavigationPort::push_state
//!                                           ├→ Interaction (alert/confirm/scroll)
//!                                           └→ in-flight worker futures
//!                                                   │
//! settle()/next_completion() ←──────────────────────┘
//!   → dispatch(Event::WorkerResponse(..))
//! ```

use std::collections::VecDeque;

use futures_util::future::{BoxFuture, FutureExt};
use futures_util::stream::{FuturesUnordered, StreamExt};

use crate::api::ListingsBackend;
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::infrastructure::{HistoryState, Interaction, MemoryHistory, NavigationPort};
use crate::worker::{ApiWorker, WorkerResponse};

/// Owns application state and drives it with events.
pub struct Controller<B, N, I> {
    state: AppState,
    worker: ApiWorker<B>,
    navigation: N,
    interaction: I,
    in_flight: FuturesUnordered<BoxFuture<'static, WorkerResponse>>,
}

impl<B, N, I> Controller<B, N, I>
where
    B: ListingsBackend + 'static,
    N: NavigationPort,
    I: Interaction,
{
    /// Creates a controller around initial state and its ports.
    pub fn new(state: AppState, backend: B, navigation: N, interaction: I) -> Self {
        Self {
            state,
            worker: ApiWorker::new(backend),
            navigation,
            interaction,
            in_flight: FuturesUnordered::new(),
        }
    }

    /// Current application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn navigation(&self) -> &N {
        &self.navigation
    }

    #[must_use]
    pub const fn interaction(&self) -> &I {
        &self.interaction
    }

    /// Mutable access to the interaction port, e.g. to script answers.
    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.interaction
    }

    /// Shared handle to the backend the worker calls.
    #[must_use]
    pub fn backend(&self) -> &B {
        self.worker.backend().as_ref()
    }

    /// Number of worker requests that have not completed yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Handles an event and every follow-up event its actions produce.
    ///
    /// Follow-ups (currently only confirmed deletions) are processed in the
    /// same call, before it returns. Worker requests are only started here;
    /// their completions arrive through [`settle`](Self::settle) or
    /// [`next_completion`](Self::next_completion).
    ///
    /// Returns `true` if any handled event changed visible state.
    ///
    /// # Errors
    ///
    /// Propagates handler errors such as an invalid filter value. Events queued
    /// behind the failing one are dropped.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut queue = VecDeque::from([event]);
        let mut changed = false;

        while let Some(event) = queue.pop_front() {
            let (should_render, actions) = handle_event(&mut self.state, &event)?;
            tracing::debug!(
                action_count = actions.len(),
                should_render,
                "event handled"
            );
            changed |= should_render;

            for action in actions {
                if let Some(follow_up) = self.execute(action) {
                    queue.push_back(follow_up);
                }
            }
        }

        Ok(changed)
    }

    fn execute(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::PostToWorker(message) => {
                tracing::debug!(message = ?message, "posting to worker");
                let worker = self.worker.clone();
                self.in_flight.push(worker.handle_message(message).boxed());
                None
            }
            Action::PushHistory(entry) => {
                if let Err(e) = self.navigation.push_state(&entry) {
                    tracing::error!(url = %entry.url, error = %e, "failed to push history entry");
                }
                None
            }
            Action::Alert(message) => {
                self.interaction.alert(&message);
                None
            }
            Action::Confirm { message, on_confirm } => {
                if self.interaction.confirm(&message) {
                    Some(*on_confirm)
                } else {
                    tracing::debug!("confirmation declined");
                    None
                }
            }
            Action::ScrollToTop => {
                self.interaction.scroll_to_top();
                None
            }
        }
    }

    /// Waits for the next in-flight request and applies its completion.
    ///
    /// Returns `None` when nothing is in flight, otherwise whether the
    /// completion changed visible state.
    ///
    /// # Errors
    ///
    /// Propagates errors from handling the completion.
    pub async fn next_completion(&mut self) -> Option<Result<bool>> {
        let response = self.in_flight.next().await?;
        Some(self.dispatch(Event::WorkerResponse(response)))
    }

    /// Applies completions until no request is in flight, including requests
    /// started while handling earlier completions.
    ///
    /// # Errors
    ///
    /// Stops at the first completion whose handling fails.
    pub async fn settle(&mut self) -> Result<bool> {
        let mut changed = false;
        while let Some(result) = self.next_completion().await {
            changed |= result?;
        }
        Ok(changed)
    }

    /// Reports a back-navigation that made `state` the current entry.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn pop(&mut self, state: HistoryState) -> Result<bool> {
        self.dispatch(Event::HistoryPopped(state))
    }

    /// Sets the subscription email input and subscribes it to the current
    /// filters.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn subscribe(&mut self, email: impl Into<String>) -> Result<bool> {
        let edited = self.dispatch(Event::SetSubscriptionEmail(email.into()))?;
        Ok(self.dispatch(Event::Subscribe)? || edited)
    }
}

impl<B, I> Controller<B, MemoryHistory, I>
where
    B: ListingsBackend + 'static,
    I: Interaction,
{
    /// Steps the in-memory history back one entry and reports the pop.
    ///
    /// Returns `Ok(false)` when already at the oldest entry.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn back(&mut self) -> Result<bool> {
        match self.navigation.back() {
            Some(state) => self.pop(state),
            None => {
                tracing::debug!("no history entry to go back to");
                Ok(false)
            }
        }
    }
}
