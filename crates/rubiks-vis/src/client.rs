//! Transformation clients.
//!
//! The visualiser only ever talks to the service through [`TransformClient`]: send
//! the current layout and one move symbol, get the new layout back. Symbols are
//! relayed verbatim; it is up to the service to skip ones it does not know.

use std::future::Future;

use rubiks_topology::engine;
use rubiks_topology::wire::{TransformRequest, TransformResponse};
use rubiks_topology::FaceletState;

use crate::error::{Error, Result};

/// Something that can apply a move symbol to a facelet state.
pub trait TransformClient: Send + Sync + 'static {
    /// Apply `symbol` to `state`, returning the raw codes of the new layout.
    fn transform(&self, state: &FaceletState, symbol: char) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Client for the HTTP transformation service (`POST /cube`).
#[derive(Debug, Clone)]
pub struct HttpTransformClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransformClient {
    /// Client for a service rooted at `base_url`, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/cube", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TransformClient for HttpTransformClient {
    fn transform(&self, state: &FaceletState, symbol: char) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let request = self
            .http
            .post(&self.endpoint)
            .json(&TransformRequest::new(*state, symbol));

        async move {
            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Service(format!("{symbol:?} rejected with {status}")));
            }
            let layout: TransformResponse = response.json().await?;
            Ok(layout)
        }
    }
}

/// Runs the permutation engine in-process, for use without a service.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTransformClient;

impl TransformClient for LocalTransformClient {
    fn transform(&self, state: &FaceletState, symbol: char) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let applied = engine::apply_sequence(state, symbol.encode_utf8(&mut [0; 4]));
        if !applied.ignored.is_empty() {
            tracing::warn!(?symbol, "skipping unknown move symbol");
        }
        std::future::ready(Ok(applied.state.to_vec()))
    }
}
