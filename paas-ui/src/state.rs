//! Reactive storage for controller state

use leptos::*;
use paas_common::{ControllerCell, ControllerState};

/// Controller state held in a signal owned by the page.
///
/// Once the page's reactive scope is disposed the signal is gone and every
/// write returns `None`, which stops in-flight controller operations.
#[derive(Clone, Copy)]
pub struct SignalState(RwSignal<ControllerState>);

impl SignalState {
    pub fn new() -> Self {
        Self(create_rw_signal(ControllerState::default()))
    }

    pub fn signal(&self) -> RwSignal<ControllerState> {
        self.0
    }
}

impl Default for SignalState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerCell for SignalState {
    fn update<R>(&self, f: impl FnOnce(&mut ControllerState) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn is_active(&self) -> bool {
        self.0.try_with_untracked(|_| ()).is_some()
    }
}
