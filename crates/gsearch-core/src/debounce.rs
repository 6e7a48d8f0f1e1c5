//! Cancellable delayed task used to collapse bursts of keystrokes.
//!
//! The debouncer never reads the clock itself; callers pass the current
//! [`Instant`] so the event loop and tests share the same notion of time.

use std::time::{Duration, Instant};

/// Delay applied between the last keystroke and the search request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds at most one pending value together with the instant it becomes due.
#[derive(Debug, Clone)]
pub struct Debouncer<T = String> {
	delay: Duration,
	pending: Option<(T, Instant)>,
}

impl<T> Default for Debouncer<T> {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl<T> Debouncer<T> {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	/// Schedule `value`, replacing anything still pending.
	pub fn arm(&mut self, value: T, now: Instant) {
		self.pending = Some((value, now + self.delay));
	}

	/// Drop the pending value, if any.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Take the pending value once its deadline has passed.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
			_ => None,
		}
	}

	/// Remaining time before the pending value fires.
	#[must_use]
	pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
		self.pending
			.as_ref()
			.map(|(_, deadline)| deadline.saturating_duration_since(now))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fires_once_after_the_delay() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::from_millis(500));
		debouncer.arm("abc".to_string(), start);

		assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
		assert_eq!(
			debouncer.poll(start + Duration::from_millis(500)),
			Some("abc".to_string())
		);
		assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
		assert!(!debouncer.is_pending());
	}

	#[test]
	fn rearming_restarts_the_timer_and_replaces_the_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::from_millis(500));
		debouncer.arm("ab".to_string(), start);
		debouncer.arm("abc".to_string(), start + Duration::from_millis(300));

		assert_eq!(debouncer.poll(start + Duration::from_millis(600)), None);
		assert_eq!(
			debouncer.poll(start + Duration::from_millis(800)),
			Some("abc".to_string())
		);
	}

	#[test]
	fn cancel_discards_the_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::<String>::default();
		debouncer.arm("abc".to_string(), start);
		debouncer.cancel();

		assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
		assert_eq!(debouncer.time_until_ready(start), None);
	}

	#[test]
	fn reports_remaining_time() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::from_millis(500));
		debouncer.arm(1_u8, start);

		assert_eq!(
			debouncer.time_until_ready(start + Duration::from_millis(200)),
			Some(Duration::from_millis(300))
		);
		assert_eq!(
			debouncer.time_until_ready(start + Duration::from_secs(1)),
			Some(Duration::ZERO)
		);
	}
}
