//! Connection state and the in-memory wallet session.

use chrono::{DateTime, Utc};

/// Current position in the connection lifecycle. Exactly one value holds at
/// any time; transitions happen only through
/// [`ConnectionMachine`](crate::machine::ConnectionMachine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// Adapter not constructed yet (page still starting up).
    Uninitialized,
    /// Adapter ready, no wallet connected.
    Disconnected,
    /// A connect request is in flight; the control is disabled.
    Connecting,
    /// Wallet connected; a session exists.
    Connected,
    /// A disconnect request is in flight; the control is disabled.
    Disconnecting,
    /// Adapter construction failed. Terminal for this page load.
    Failed,
}

impl ConnectionState {
    /// Whether the user control accepts a click in this state.
    pub fn control_enabled(&self) -> bool {
        matches!(self, ConnectionState::Disconnected | ConnectionState::Connected)
    }

    /// Label for the single connect/disconnect control.
    pub fn action_label(&self) -> &'static str {
        match self {
            ConnectionState::Uninitialized => "Initializing...",
            ConnectionState::Disconnected => "Connect Wallet",
            ConnectionState::Connecting => "Connecting...",
            ConnectionState::Connected => "Disconnect Wallet",
            ConnectionState::Disconnecting => "Disconnecting...",
            ConnectionState::Failed => "Unavailable",
        }
    }

    /// Human-readable state name for the status page.
    pub fn name(&self) -> &'static str {
        match self {
            ConnectionState::Uninitialized => "Uninitialized",
            ConnectionState::Disconnected => "Disconnected",
            ConnectionState::Connecting => "Connecting",
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnecting => "Disconnecting",
            ConnectionState::Failed => "Failed",
        }
    }
}

/// Record of a currently connected wallet. Exists only while the machine is
/// [`ConnectionState::Connected`]; never persisted across reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletSession {
    /// The wallet's public address, opaque and immutable once obtained.
    pub address: String,
    /// When the connect event was observed.
    pub established_at: DateTime<Utc>,
}

impl WalletSession {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            established_at: Utc::now(),
        }
    }
}
