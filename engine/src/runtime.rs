//! Seams to the host event loop. Everything runs on one thread; futures are
//! not required to be `Send`.

use std::time::Duration;

use futures::future::LocalBoxFuture;

pub trait Spawner {
    /// Runs `task` on the host event loop. Tasks are dropped with the page.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
