//! Completion signal for long-running canvas operations.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;

/// Sending half, held by whoever performs the work.
#[derive(Debug)]
pub struct CompletionHandle {
	tx: oneshot::Sender<()>,
}

impl CompletionHandle {
	pub fn finish(self) {
		let _ = self.tx.send(());
	}
}

/// Resolves once the matching handle is finished or dropped.
#[derive(Debug)]
pub struct Completion {
	rx: Option<oneshot::Receiver<()>>,
}

/// Create a linked handle/future pair.
pub fn completion() -> (CompletionHandle, Completion) {
	let (tx, rx) = oneshot::channel();
	(CompletionHandle { tx }, Completion { rx: Some(rx) })
}

impl Completion {
	/// An already-resolved completion.
	pub fn ready() -> Self {
		Self { rx: None }
	}

	/// Non-blocking check. Once this returns `true` it keeps returning `true`.
	pub fn is_finished(&mut self) -> bool {
		let Some(rx) = self.rx.as_mut() else {
			return true;
		};
		match rx.try_recv() {
			Ok(None) => false,
			Ok(Some(())) | Err(oneshot::Canceled) => {
				self.rx = None;
				true
			}
		}
	}
}

impl Future for Completion {
	type Output = ();

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
		let Some(rx) = self.rx.as_mut() else {
			return Poll::Ready(());
		};
		// A dropped sender counts as done.
		match rx.poll_unpin(cx) {
			Poll::Ready(_) => {
				self.rx = None;
				Poll::Ready(())
			}
			Poll::Pending => Poll::Pending,
		}
	}
}
