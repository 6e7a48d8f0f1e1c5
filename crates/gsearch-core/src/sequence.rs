//! Monotonic query ids used to discard responses for outdated queries.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Allocates query ids and remembers which one is current.
///
/// The latest id is mirrored into a shared atomic so the background worker
/// can skip queued queries that were superseded before it reached them.
#[derive(Debug, Clone)]
pub struct RequestSequence {
	next_id: u64,
	current: Option<u64>,
	latest: Arc<AtomicU64>,
}

impl Default for RequestSequence {
	fn default() -> Self {
		Self::new(Arc::new(AtomicU64::new(0)))
	}
}

impl RequestSequence {
	#[must_use]
	pub fn new(latest: Arc<AtomicU64>) -> Self {
		let next_id = latest.load(AtomicOrdering::Acquire);
		Self {
			next_id,
			current: None,
			latest,
		}
	}

	/// Allocate a fresh id and make it the current one.
	pub fn next(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		self.current = Some(self.next_id);
		self.latest.store(self.next_id, AtomicOrdering::Release);
		self.next_id
	}

	/// Make every outstanding id stale without allocating a new request.
	pub fn invalidate(&mut self) {
		self.next_id = self.next_id.saturating_add(1);
		self.current = None;
		self.latest.store(self.next_id, AtomicOrdering::Release);
	}

	/// Forget the current id once its response has been applied.
	pub fn settle(&mut self) {
		self.current = None;
	}

	#[must_use]
	pub fn is_current(&self, id: u64) -> bool {
		self.current == Some(id)
	}

}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_newest_id_is_current() {
		let mut sequence = RequestSequence::default();
		let first = sequence.next();
		let second = sequence.next();

		assert!(second > first);
		assert!(!sequence.is_current(first));
		assert!(sequence.is_current(second));
	}

	#[test]
	fn invalidate_makes_everything_stale() {
		let latest = Arc::new(AtomicU64::new(0));
		let mut sequence = RequestSequence::new(Arc::clone(&latest));
		let id = sequence.next();
		sequence.invalidate();

		assert!(!sequence.is_current(id));
		assert!(latest.load(AtomicOrdering::Acquire) > id);
	}

	#[test]
	fn settled_ids_are_no_longer_current() {
		let mut sequence = RequestSequence::default();
		let id = sequence.next();
		sequence.settle();
		assert!(!sequence.is_current(id));
	}

	#[test]
	fn shared_latest_tracks_issued_ids() {
		let latest = Arc::new(AtomicU64::new(0));
		let mut sequence = RequestSequence::new(Arc::clone(&latest));
		let id = sequence.next();
		assert_eq!(latest.load(AtomicOrdering::Acquire), id);
	}
}
