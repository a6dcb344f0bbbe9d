//! Resolve-once handles for in-flight requests.
//!
//! A [`Pending`] is created when a request is issued and is resolved exactly
//! once by its [`Resolver`], usually from a task running on the tokio runtime.
//! The UI never blocks on it: it polls with [`Pending::try_take`] from its
//! single dispatch point.

use taiga_core::{TaigaError, TaigaResult};
use tokio::sync::oneshot::{self, error::TryRecvError};

#[derive(Debug)]
pub struct Pending<T> {
    rx: oneshot::Receiver<TaigaResult<T>>,
    consumed: bool,
}

#[derive(Debug)]
pub struct Resolver<T> {
    tx: oneshot::Sender<TaigaResult<T>>,
}

impl<T> Pending<T> {
    pub fn channel() -> (Resolver<T>, Pending<T>) {
        let (tx, rx) = oneshot::channel();
        (
            Resolver { tx },
            Pending {
                rx,
                consumed: false,
            },
        )
    }

    /// A handle that is already resolved.
    pub fn ready(result: TaigaResult<T>) -> Self {
        let (resolver, pending) = Self::channel();
        resolver.resolve(result);
        pending
    }

    pub fn ok(value: T) -> Self {
        Self::ready(Ok(value))
    }

    pub fn err(error: TaigaError) -> Self {
        Self::ready(Err(error))
    }

    /// Returns the result the first time it is available, `None` before that
    /// and on every call after it was taken.
    pub fn try_take(&mut self) -> Option<TaigaResult<T>> {
        if self.consumed {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.consumed = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.consumed = true;
                Some(Err(dropped()))
            }
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub async fn wait(self) -> TaigaResult<T> {
        if self.consumed {
            return Err(TaigaError::Internal(
                "request result was already consumed".to_string(),
            ));
        }
        self.rx.await.unwrap_or_else(|_| Err(dropped()))
    }
}

impl<T> Resolver<T> {
    /// Delivers the result. Returns `false` when nobody is waiting any more.
    pub fn resolve(self, result: TaigaResult<T>) -> bool {
        self.tx.send(result).is_ok()
    }
}

fn dropped() -> TaigaError {
    TaigaError::Internal("request was dropped before completing".to_string())
}
