//! Connection state management.
//!
//! One context, one signal, one owner: the [`ConnectionMachine`] lives in a
//! single `RwSignal` and is only ever mutated through the methods below, so
//! every transition flows through the machine's guards.

use leptos::prelude::*;
use lib_connection::{ConnectionMachine, ConnectionState};

/// Global connection context provided at the application root.
#[derive(Clone, Copy)]
pub struct ConnectionContext {
    machine: RwSignal<ConnectionMachine>,
}

impl ConnectionContext {
    pub fn new() -> Self {
        Self {
            machine: RwSignal::new(ConnectionMachine::new()),
        }
    }

    // --- reads ---

    pub fn state(&self) -> ConnectionState {
        self.machine.with(|m| m.state())
    }

    pub fn is_connected(&self) -> bool {
        self.machine.with(|m| m.is_connected())
    }

    pub fn control_enabled(&self) -> bool {
        self.machine.with(|m| m.control_enabled())
    }

    pub fn action_label(&self) -> &'static str {
        self.machine.with(|m| m.action_label())
    }

    pub fn address(&self) -> Option<String> {
        self.machine
            .with(|m| m.session().map(|s| s.address.clone()))
    }

    pub fn established_at(&self) -> Option<String> {
        self.machine
            .with(|m| m.session().map(|s| s.established_at.to_rfc3339()))
    }

    // --- transitions (single mutation point) ---

    pub fn adapter_ready(&self) {
        self.machine.update(|m| {
            m.adapter_ready();
        });
    }

    pub fn adapter_failed(&self) {
        self.machine.update(|m| m.adapter_failed());
    }

    pub fn begin_connect(&self) -> bool {
        let mut accepted = false;
        self.machine.update(|m| accepted = m.begin_connect());
        accepted
    }

    pub fn begin_disconnect(&self) -> bool {
        let mut accepted = false;
        self.machine.update(|m| accepted = m.begin_disconnect());
        accepted
    }

    pub fn request_failed(&self) {
        self.machine.update(|m| m.request_failed());
    }

    /// Returns whether the address must be reported to the backend.
    pub fn wallet_connected(&self, address: &str) -> bool {
        let mut report = false;
        self.machine
            .update(|m| report = m.wallet_connected(address));
        report
    }

    pub fn wallet_disconnected(&self) {
        self.machine.update(|m| m.wallet_disconnected());
    }

    pub fn wallet_error(&self) {
        self.machine.update(|m| m.wallet_error());
    }
}

pub fn provide_connection_context() -> ConnectionContext {
    let context = ConnectionContext::new();
    provide_context(context);
    context
}

pub fn use_connection_context() -> ConnectionContext {
    expect_context::<ConnectionContext>()
}
