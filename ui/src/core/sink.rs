//! Where controllers publish their state after every change.

use dioxus::prelude::*;

pub trait StateSink<S> {
    fn publish(&mut self, state: &S);
}

impl<S: Clone + 'static> StateSink<S> for Signal<S> {
    fn publish(&mut self, state: &S) {
        self.set(state.clone());
    }
}

/// Keeps every snapshot; handy for asserting on intermediate states.
impl<S: Clone> StateSink<S> for Vec<S> {
    fn publish(&mut self, state: &S) {
        self.push(state.clone());
    }
}

impl<S> StateSink<S> for () {
    fn publish(&mut self, _state: &S) {}
}
