use crate::search::traits::{HttpTransport, TransportError, HTTP_STATUS_OK};
use crate::search::types::{SearchError, SearchOutcome, SearchState};
use crate::Generation;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use store_catalog::{parse_search_results, Category, QueryBuilder};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Default)]
struct RequestSlot {
    generation: Generation,
    in_flight: Option<CancellationToken>,
}

// Completed requests have already left the slot, so dropping this is a no-op
// for them.
struct AbandonedRequestGuard<'a> {
    engine: &'a SearchEngine,
    generation: Generation,
}

impl Drop for AbandonedRequestGuard<'_> {
    fn drop(&mut self) {
        self.engine.abandon_request(self.generation);
    }
}

/// Runs catalog searches and owns the resulting [`SearchState`].
///
/// At most one request is tracked at a time. Every search mints a new
/// [`Generation`] and a completion is applied only while its generation is
/// still the active one, so a superseded request never overwrites the state
/// of a newer one.
pub struct SearchEngine {
    query_builder: QueryBuilder,
    transport: Arc<dyn HttpTransport + Send + Sync>,
    state: watch::Sender<SearchState>,
    slot: Mutex<RequestSlot>,
}

impl SearchEngine {
    pub fn new(
        query_builder: QueryBuilder,
        transport: Arc<dyn HttpTransport + Send + Sync>,
    ) -> Self {
        let (state, _) = watch::channel(SearchState::NotSearchedYet);

        Self {
            query_builder,
            transport,
            state,
            slot: Mutex::new(RequestSlot::default()),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub async fn search(
        &self,
        text: &str,
        category: Category,
    ) -> Result<SearchOutcome, SearchError> {
        if text.trim().is_empty() {
            debug!("Ignoring search with blank text");
            return Ok(SearchOutcome::Skipped);
        }

        let request = self.query_builder.build_request(text, category)?;
        let (generation, token) = self.begin_request();
        let _abandoned = AbandonedRequestGuard {
            engine: self,
            generation,
        };

        info!(%generation, %category, url = %request.url(), "Searching catalog");

        let response = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(%generation, "Search request was superseded");
                return Ok(SearchOutcome::Superseded);
            }
            response = self.transport.get(request.url()) => response,
        };

        let (next_state, outcome) = match response {
            Ok(response) if response.status == HTTP_STATUS_OK => {
                let results = parse_search_results(&response.body);
                debug!(%generation, count = results.len(), "Search request completed");
                (SearchState::from_results(results), SearchOutcome::Completed)
            }
            Ok(response) => {
                warn!(%generation, status = response.status, "Unexpected search response status");
                (SearchState::NotSearchedYet, SearchOutcome::Failed)
            }
            Err(TransportError::Cancelled) => {
                debug!(%generation, "Search request was cancelled by transport");
                return Ok(SearchOutcome::Superseded);
            }
            Err(error) => {
                warn!(%generation, ?error, "Search request failed");
                (SearchState::NotSearchedYet, SearchOutcome::Failed)
            }
        };

        if self.complete_request(generation, next_state) {
            Ok(outcome)
        } else {
            debug!(%generation, "Discarding completion of superseded search request");
            Ok(SearchOutcome::Superseded)
        }
    }

    /// Cancels the in-flight request, if any, and leaves the loading state.
    pub fn cancel(&self) {
        let mut slot = self.lock_slot();

        if let Some(token) = slot.in_flight.take() {
            debug!(generation = %slot.generation, "Cancelling search request");
            token.cancel();
            slot.generation = slot.generation.next();

            self.state.send_if_modified(|state| {
                if state.is_loading() {
                    *state = SearchState::NotSearchedYet;
                    true
                } else {
                    false
                }
            });
        }
    }

    pub(crate) fn begin_request(&self) -> (Generation, CancellationToken) {
        let mut slot = self.lock_slot();

        if let Some(previous) = slot.in_flight.take() {
            debug!(generation = %slot.generation, "Cancelling in-flight search request");
            previous.cancel();
        }

        let token = CancellationToken::new();
        slot.generation = slot.generation.next();
        slot.in_flight = Some(token.clone());

        self.state.send_replace(SearchState::Loading);

        (slot.generation, token)
    }

    pub(crate) fn complete_request(&self, generation: Generation, next_state: SearchState) -> bool {
        let mut slot = self.lock_slot();

        if slot.generation != generation {
            return false;
        }

        slot.in_flight = None;
        self.state.send_replace(next_state);

        true
    }

    /// Releases a request whose caller went away before it completed.
    pub(crate) fn abandon_request(&self, generation: Generation) {
        let mut slot = self.lock_slot();

        if slot.generation != generation {
            return;
        }

        if let Some(token) = slot.in_flight.take() {
            debug!(%generation, "Search request was abandoned");
            token.cancel();

            self.state.send_if_modified(|state| {
                if state.is_loading() {
                    *state = SearchState::NotSearchedYet;
                    true
                } else {
                    false
                }
            });
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, RequestSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
