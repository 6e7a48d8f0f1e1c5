//! Terminal setup and the event loop.

use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
	KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::debug;

use crate::App;
use crate::outcome::SearchOutcome;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Run `app` in the terminal until the user accepts a row or leaves.
pub fn run(mut app: App<'_>) -> Result<SearchOutcome> {
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = self.event_loop(&mut terminal, &event_rx);

		let cleanup = execute!(stdout(), DisableFocusChange, DisableMouseCapture);
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}
		cleanup?;

		let outcome = result?;
		debug!(accepted = outcome.accepted, query = %outcome.query, "search session finished");
		Ok(outcome)
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		events: &mpsc::Receiver<Event>,
	) -> Result<SearchOutcome> {
		loop {
			let now = Instant::now();
			loop {
				let event = match events.try_recv() {
					Ok(event) => event,
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				};
				if let Some(outcome) = self.handle_event(event, now)? {
					return Ok(outcome);
				}
			}

			self.tick(now);
			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(self.frame_pause(Instant::now()));
		}
	}

	/// Sleep until the next frame, or until a pending search is due.
	fn frame_pause(&self, now: Instant) -> Duration {
		self.widget
			.time_until_search(now)
			.map_or(FRAME_INTERVAL, |due| due.min(FRAME_INTERVAL))
	}

	fn handle_event(&mut self, event: Event, now: Instant) -> Result<Option<SearchOutcome>> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
			Event::Mouse(mouse) => Ok(self.handle_mouse(mouse)),
			Event::FocusGained => {
				self.handle_focus(true);
				Ok(None)
			}
			Event::FocusLost => {
				self.handle_focus(false);
				Ok(None)
			}
			Event::Resize(width, _) => {
				self.update_layout_mode(width);
				Ok(None)
			}
			_ => Ok(None),
		}
	}
}
