//! Callbacks waiting on executor results.
//!
//! A controller registers a callback against a [`Pending`] handle when it
//! issues the request. [`dispatch`] runs every callback whose handle has
//! resolved, each exactly once, on the UI thread. Callbacks may register new
//! ones; those are kept for the next round.

use taiga_api::Pending;
use taiga_core::TaigaResult;

type Entry<C> = Box<dyn FnMut(&mut C) -> bool>;

pub struct Continuations<C> {
    entries: Vec<Entry<C>>,
}

impl<C> Default for Continuations<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C: 'static> Continuations<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_complete<T, F>(&mut self, mut pending: Pending<T>, callback: F)
    where
        T: 'static,
        F: FnOnce(&mut C, TaigaResult<T>) + 'static,
    {
        let mut callback = Some(callback);
        self.entries.push(Box::new(move |target: &mut C| {
            match pending.try_take() {
                Some(result) => {
                    if let Some(callback) = callback.take() {
                        callback(target, result);
                    }
                    true
                }
                None => false,
            }
        }));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Implemented by controllers that own a [`Continuations`] list for themselves.
pub trait Continuable: Sized + 'static {
    fn continuations(&mut self) -> &mut Continuations<Self>;
}

/// Runs every resolved callback of `target`. Returns how many ran.
pub fn dispatch<C: Continuable>(target: &mut C) -> usize {
    let mut entries = std::mem::take(&mut target.continuations().entries);
    let before = entries.len();
    entries.retain_mut(|entry| !entry(target));
    let fired = before - entries.len();

    let registered = std::mem::take(&mut target.continuations().entries);
    entries.extend(registered);
    target.continuations().entries = entries;
    fired
}
