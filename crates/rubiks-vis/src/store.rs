//! Holder of the current facelet state.
//!
//! Transformations are asynchronous, so a request is split in two: [`CubeStore::begin`]
//! snapshots the state and numbers the request, [`CubeStore::complete`] validates the
//! response and swaps it in. Responses that arrive after a newer one has been applied
//! are discarded.

use rubiks_topology::FaceletState;

use crate::client::TransformClient;
use crate::error::{Error, Result};

/// One transformation in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformRequest {
    /// Monotonic request number
    pub seq: u64,
    /// State the move applies to
    pub state: FaceletState,
    pub symbol: char,
}

/// What happened to a response handed to [`CubeStore::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response became the current state
    Applied,
    /// A newer response was already applied; this one was dropped
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct CubeStore {
    state: FaceletState,
    next_seq: u64,
    last_applied: Option<u64>,
}

impl CubeStore {
    /// A store holding the solved layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FaceletState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &FaceletState {
        &self.state
    }

    /// Sequence number of the latest applied response.
    pub fn last_applied(&self) -> Option<u64> {
        self.last_applied
    }

    /// Number the next request against the current state.
    pub fn begin(&mut self, symbol: char) -> TransformRequest {
        let seq = self.next_seq;
        self.next_seq += 1;
        TransformRequest {
            seq,
            state: self.state,
            symbol,
        }
    }

    /// Accept or reject the service's answer to request `seq`.
    ///
    /// On error the current state is kept and the error is returned, even when a
    /// newer response has already been applied. Layouts that are not 54 valid
    /// colour codes are rejected with [`Error::MalformedState`].
    pub fn complete(&mut self, seq: u64, response: Result<Vec<u8>>) -> Result<Completion> {
        let codes = response?;
        if self.last_applied.is_some_and(|last| seq <= last) {
            return Ok(Completion::Stale);
        }
        let state = FaceletState::try_from(codes)?;
        self.state = state;
        self.last_applied = Some(seq);
        Ok(Completion::Applied)
    }

    /// Send one move and wait for the answer.
    pub async fn apply_move<C: TransformClient>(&mut self, client: &C, symbol: char) -> Result<FaceletState> {
        let request = self.begin(symbol);
        let response = client.transform(&request.state, request.symbol).await;
        match self.complete(request.seq, response)? {
            Completion::Applied => Ok(self.state),
            Completion::Stale => Err(Error::Service(format!(
                "response to request {} superseded",
                request.seq
            ))),
        }
    }
}
