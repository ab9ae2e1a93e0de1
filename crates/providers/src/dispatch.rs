//! The fetch dispatcher.
//!
//! The UI loop never awaits a provider. It sends [`FetchRequest`]s into a
//! channel; [`spawn_fetcher`] answers each one on its own task and sends the
//! [`FetchOutcome`] back. Requests are independent and may settle in any
//! order, which is why every outcome carries the request's generation.

use std::sync::Arc;

use glance_protocol::{FetchFailure, FetchOutcome, FetchRequest};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::DashboardClient;
use crate::error::Error;

/// Spawns the dispatcher task.
///
/// The task stops once `requests` is closed; fetches still in flight finish
/// on their own tasks. Outcomes sent after the receiver is gone are dropped.
///
/// # Examples
///
/// ```no_run
/// use glance_config::Config;
/// use glance_protocol::FetchRequest;
/// use glance_providers::{DashboardClient, spawn_fetcher};
/// use tokio::sync::mpsc;
///
/// # async fn example() -> glance_providers::Result<()> {
/// let client = DashboardClient::new(&Config::default())?;
/// let (request_tx, request_rx) = mpsc::unbounded_channel();
/// let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
/// spawn_fetcher(client, request_rx, outcome_tx);
///
/// request_tx.send(FetchRequest::Intraday { generation: 1, symbol: "AAPL".into() }).ok();
/// let outcome = outcome_rx.recv().await;
/// # Ok(())
/// # }
/// ```
pub fn spawn_fetcher(
    client: DashboardClient,
    mut requests: UnboundedReceiver<FetchRequest>,
    outcomes: UnboundedSender<FetchOutcome>,
) -> JoinHandle<()> {
    let client = Arc::new(client);
    tokio::spawn(async move {
        while let Some(request) = requests.recv().await {
            debug!(widget = ?request.widget(), generation = request.generation(), "dispatching fetch");
            let client = Arc::clone(&client);
            let outcomes = outcomes.clone();
            tokio::spawn(async move {
                let outcome = fetch(&client, request).await;
                if outcomes.send(outcome).is_err() {
                    debug!("outcome receiver dropped");
                }
            });
        }
        debug!("request channel closed, dispatcher stopping");
    })
}

/// Performs one request and folds any error into a [`FetchFailure`].
pub async fn fetch(client: &DashboardClient, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::Forecast { generation, city } => {
            let result = client.fetch_forecast(&city).await.map_err(failure);
            FetchOutcome::Forecast {
                generation,
                city,
                result,
            }
        }
        FetchRequest::Headlines {
            generation,
            category,
            page,
        } => {
            let result = client.fetch_headlines(category, page).await.map_err(failure);
            FetchOutcome::Headlines {
                generation,
                category,
                page,
                result,
            }
        }
        FetchRequest::Intraday { generation, symbol } => {
            let result = client.fetch_intraday(&symbol).await.map_err(failure);
            FetchOutcome::Intraday {
                generation,
                symbol,
                result,
            }
        }
    }
}

fn failure(err: Error) -> FetchFailure {
    warn!(error = %err, "fetch failed");
    err.failure()
}
