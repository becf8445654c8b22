// SPDX-License-Identifier: MPL-2.0
//! Observable container around [`SliderState`].
//!
//! Every mutation goes through [`SliderStore::dispatch`]. When a message
//! actually changes the state, each subscriber is called once with the new
//! state, in subscription order. Messages that change nothing (navigation on
//! an empty list, a stale load result) notify nobody.

use super::state::{Effect, Message, SliderState};
use std::fmt;

/// Handle returned by [`SliderStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Box<dyn FnMut(&SliderState)>;

/// Slider state plus its change subscribers.
#[derive(Default)]
pub struct SliderStore {
    state: SliderState,
    listeners: Vec<(SubscriberId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for SliderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SliderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// Registers `listener` to be called after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&SliderState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Applies `msg` and notifies subscribers if the state changed.
    pub fn dispatch(&mut self, msg: Message) -> Effect {
        let before = self.state.revision();
        let effect = self.state.handle(msg);
        if self.state.revision() != before {
            self.notify();
        }
        effect
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in &mut self.listeners {
            listener(state);
        }
    }
}
