//! End-to-end flow: credentials to token to warehouse body.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::authority::{AcquireToken, TokenAcquirer, TokenRequest};
use crate::config::HttpConfig;
use crate::error::Error;
use crate::types::WarehouseUrl;
use crate::warehouse::WarehouseClient;

/// Where a flow run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowState {
    Unauthenticated,
    TokenRequested,
    TokenAcquired,
    RequestSent,
    Completed,
    Failed,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowState::Unauthenticated => "unauthenticated",
            FlowState::TokenRequested => "token-requested",
            FlowState::TokenAcquired => "token-acquired",
            FlowState::RequestSent => "request-sent",
            FlowState::Completed => "completed",
            FlowState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Runs the token fetch and the warehouse read in strict sequence.
///
/// The warehouse request is only sent once a token was acquired. A run that
/// fails is not resumed; the next [`run`](WarehouseFlow::run) starts over
/// from [`FlowState::Unauthenticated`] with a new [`TokenRequest`].
///
/// # Example
///
/// ```no_run
/// use warehouse_auth::{
///     Credentials, HttpConfig, TokenEndpoint, TokenRequest, WarehouseFlow, WarehouseUrl,
///     DEFAULT_AUTHORITY,
/// };
///
/// # async fn example() -> Result<(), warehouse_auth::Error> {
/// let request = TokenRequest::new(
///     TokenEndpoint::for_tenant(DEFAULT_AUTHORITY, "contoso.com")?,
///     "https://api.manage.microsoft.com/",
///     Credentials::app("8d699e29-3b54-4c6a-91cc-e537b4680fed", "client-secret"),
/// );
/// let warehouse = WarehouseUrl::new("https://fef.msua01.manage.microsoft.com/ReportingService/DataWarehouseFEService?api-version=beta")?;
///
/// let mut flow = WarehouseFlow::new(&HttpConfig::default())?;
/// let body = flow.run(request, &warehouse, "dates").await?;
/// println!("{}", body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WarehouseFlow<A = TokenAcquirer> {
    acquirer: A,
    client: WarehouseClient,
    state: FlowState,
}

impl WarehouseFlow<TokenAcquirer> {
    /// Create a flow that talks HTTP to both endpoints.
    pub fn new(config: &HttpConfig) -> Result<Self, Error> {
        Ok(Self::with_acquirer(
            TokenAcquirer::new(config)?,
            WarehouseClient::new(config)?,
        ))
    }
}

impl<A: AcquireToken> WarehouseFlow<A> {
    /// Create a flow from an explicit token acquirer and warehouse client.
    pub fn with_acquirer(acquirer: A, client: WarehouseClient) -> Self {
        Self {
            acquirer,
            client,
            state: FlowState::Unauthenticated,
        }
    }

    /// Returns the state the last run reached.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Acquire a token and read `collection` from the warehouse.
    ///
    /// # Errors
    ///
    /// Returns the first error hit; the flow is left in
    /// [`FlowState::Failed`] if it happened at either endpoint. An invalid
    /// collection name is rejected before any request is made.
    #[instrument(skip(self, request, warehouse), fields(%warehouse, %collection))]
    pub async fn run(
        &mut self,
        request: TokenRequest,
        warehouse: &WarehouseUrl,
        collection: &str,
    ) -> Result<String, Error> {
        self.state = FlowState::Unauthenticated;
        let url = warehouse.collection_url(collection)?;

        self.transition(FlowState::TokenRequested);
        let token = match self.acquirer.fetch(request).await {
            Ok(token) => token,
            Err(err) => return Err(self.fail(err)),
        };
        self.transition(FlowState::TokenAcquired);

        self.transition(FlowState::RequestSent);
        match self.client.get(url, &token).await {
            Ok(body) => {
                self.transition(FlowState::Completed);
                info!(bytes = body.len(), "Flow completed");
                Ok(body)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn transition(&mut self, next: FlowState) {
        debug!(from = %self.state, to = %next, "Flow transition");
        self.state = next;
    }

    fn fail(&mut self, err: Error) -> Error {
        warn!(at = %self.state, kind = %err.kind(), error = %err, "Flow failed");
        self.state = FlowState::Failed;
        err
    }
}
