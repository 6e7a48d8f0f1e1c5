//! Background thread performing search requests off the UI thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::client::{ClientError, SearchClient};
use crate::payload::SearchPayload;

/// Instructions accepted by the worker.
#[derive(Debug)]
pub enum SearchCommand {
	Query { id: u64, query: String },
	Shutdown,
}

/// Settled request, tagged with the id it was issued under.
#[derive(Debug)]
pub struct SearchResult {
	pub id: u64,
	pub query: String,
	pub outcome: Result<SearchPayload, ClientError>,
}

/// Launches the background search worker thread and returns communication channels.
///
/// The returned atomic holds the newest issued query id; queries older than
/// it are skipped without touching the network.
pub fn spawn<C>(client: C) -> (Sender<SearchCommand>, Receiver<SearchResult>, Arc<AtomicU64>)
where
	C: SearchClient,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(&client, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop<C: SearchClient>(
	client: &C,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(client, &result_tx, &latest_query_id, command) {
			break;
		}
	}
	debug!("search worker stopped");
}

fn handle_command<C: SearchClient>(
	client: &C,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			if id < latest_query_id.load(AtomicOrdering::Acquire) {
				debug!(id, "skipping superseded query");
				return true;
			}
			debug!(id, %query, "issuing search request");
			let outcome = client.search(&query);
			if let Err(err) = &outcome {
				warn!(id, error = %err, "search request failed");
			}
			result_tx.send(SearchResult { id, query, outcome }).is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}
