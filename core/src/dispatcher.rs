//! Single-attempt execution of endpoint calls.
//!
//! # Design
//! `Dispatcher` is constructed once at start-up and shared by reference
//! (`Arc`) with every repository. It owns no mutable state: concurrent
//! calls from different threads never coordinate, and there is no retry.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::client::StudingClient;
use crate::endpoint::Endpoint;
use crate::envelope::EnvelopeData;
use crate::error::NetworkError;
use crate::transport::Transport;

pub struct Dispatcher {
    client: StudingClient,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(client: StudingClient, transport: Arc<dyn Transport>) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &StudingClient {
        &self.client
    }

    /// Build, send and decode one call.
    pub fn execute<T, E>(&self, endpoint: &E) -> Result<T, NetworkError>
    where
        T: EnvelopeData,
        E: Endpoint + ?Sized,
    {
        let request = self.client.build_request(endpoint)?;
        let response = self.transport.send(&request).map_err(|e| {
            warn!(endpoint = endpoint.name(), error = %e, "transport failed");
            NetworkError::from(e)
        })?;
        debug!(endpoint = endpoint.name(), status = response.status, "received response");
        self.client.parse_response(response).inspect_err(|e| {
            warn!(endpoint = endpoint.name(), error = %e, "call failed");
        })
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
