//! # Connection State Machine
//!
//! Single mutation point for the wallet connection lifecycle.
//!
//! The machine owns the current [`ConnectionState`] and the
//! [`WalletSession`], and exposes one method per transition. The adapter is
//! the sole source of truth for connection status: `begin_connect` and
//! `begin_disconnect` only mark a request as in flight, and the machine never
//! declares success until the corresponding adapter event
//! (`wallet_connected` / `wallet_disconnected`) arrives. A rejected request is
//! rolled back with `request_failed`.
//!
//! Transition methods that can be refused return `bool` so the caller knows
//! whether to issue the underlying provider request; a `false` return means
//! the click or event arrived in a state where it must be ignored.

use crate::state::{ConnectionState, WalletSession};

/// The wallet connection controller's state, owned by the page for its whole
/// lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionMachine {
    state: ConnectionState,
    session: Option<WalletSession>,
}

impl Default for ConnectionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionMachine {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Uninitialized,
            session: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The current session, present exactly while `Connected`.
    pub fn session(&self) -> Option<&WalletSession> {
        self.session.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Whether the user control accepts a click right now. Disabled while a
    /// request is in flight and permanently after initialization failure.
    pub fn control_enabled(&self) -> bool {
        self.state.control_enabled()
    }

    pub fn action_label(&self) -> &'static str {
        self.state.action_label()
    }

    // --- Initializer transitions ---

    /// Adapter constructed successfully. Only meaningful at startup.
    pub fn adapter_ready(&mut self) -> bool {
        if self.state != ConnectionState::Uninitialized {
            return false;
        }
        self.state = ConnectionState::Disconnected;
        true
    }

    /// Adapter construction failed. Terminal: every later transition is
    /// ignored until the page reloads.
    pub fn adapter_failed(&mut self) {
        log::warn!("adapter construction failed; control disabled for this page load");
        self.state = ConnectionState::Failed;
        self.session = None;
    }

    // --- Dispatcher transitions ---

    /// Accept a connect click. Refused unless currently `Disconnected`.
    pub fn begin_connect(&mut self) -> bool {
        if self.state != ConnectionState::Disconnected {
            return false;
        }
        self.state = ConnectionState::Connecting;
        true
    }

    /// Accept a disconnect click. Refused unless currently `Connected`.
    pub fn begin_disconnect(&mut self) -> bool {
        if self.state != ConnectionState::Connected {
            return false;
        }
        self.state = ConnectionState::Disconnecting;
        true
    }

    /// The in-flight provider request was rejected. A failed connect returns
    /// to `Disconnected`; a failed disconnect returns to `Connected`, since
    /// the underlying session was not relinquished.
    pub fn request_failed(&mut self) {
        match self.state {
            ConnectionState::Connecting => self.state = ConnectionState::Disconnected,
            ConnectionState::Disconnecting => self.state = ConnectionState::Connected,
            _ => {}
        }
    }

    // --- Adapter event transitions ---

    /// The adapter reported a connection. Creates a fresh session and returns
    /// `true` when the address must be reported to the backend; each connect
    /// event triggers its own independent report.
    pub fn wallet_connected(&mut self, address: impl Into<String>) -> bool {
        if self.state == ConnectionState::Failed {
            return false;
        }
        let session = WalletSession::new(address);
        log::info!("wallet connected: {}", session.address);
        self.state = ConnectionState::Connected;
        self.session = Some(session);
        true
    }

    /// The adapter reported a disconnect. Idempotent: receiving this while
    /// already `Disconnected` changes nothing but is not an error.
    pub fn wallet_disconnected(&mut self) {
        if self.state == ConnectionState::Failed {
            return;
        }
        self.state = ConnectionState::Disconnected;
        self.session = None;
    }

    /// The adapter reported an error. Recoverable: the machine falls back to
    /// `Disconnected` and the control is enabled again. Only initialization
    /// failure disables the control for good.
    pub fn wallet_error(&mut self) {
        if self.state == ConnectionState::Failed {
            return;
        }
        self.state = ConnectionState::Disconnected;
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_machine() -> ConnectionMachine {
        let mut machine = ConnectionMachine::new();
        assert!(machine.adapter_ready());
        machine
    }

    fn connected_machine(address: &str) -> ConnectionMachine {
        let mut machine = ready_machine();
        assert!(machine.begin_connect());
        assert!(machine.wallet_connected(address));
        machine
    }

    #[test]
    fn test_starts_uninitialized_with_no_session() {
        let machine = ConnectionMachine::new();
        assert_eq!(machine.state(), ConnectionState::Uninitialized);
        assert!(machine.session().is_none());
        assert!(!machine.control_enabled());
    }

    #[test]
    fn test_adapter_ready_enables_control() {
        let machine = ready_machine();
        assert_eq!(machine.state(), ConnectionState::Disconnected);
        assert!(machine.control_enabled());
        assert_eq!(machine.action_label(), "Connect Wallet");
    }

    // Scenario A: provider library absent at load.
    #[test]
    fn test_adapter_failure_is_terminal() {
        let mut machine = ConnectionMachine::new();
        machine.adapter_failed();
        assert_eq!(machine.state(), ConnectionState::Failed);
        assert!(!machine.control_enabled());

        // No further transition may leave Failed.
        assert!(!machine.begin_connect());
        assert!(!machine.begin_disconnect());
        assert!(!machine.wallet_connected("Addr123"));
        machine.wallet_disconnected();
        machine.wallet_error();
        machine.request_failed();
        assert!(!machine.adapter_ready());
        assert_eq!(machine.state(), ConnectionState::Failed);
        assert!(machine.session().is_none());
    }

    // Scenario B: connect resolves and the adapter emits the address.
    #[test]
    fn test_connect_flow_creates_session() {
        let mut machine = ready_machine();

        assert!(machine.begin_connect());
        assert_eq!(machine.state(), ConnectionState::Connecting);
        assert!(!machine.control_enabled());

        assert!(machine.wallet_connected("Addr123"));
        assert_eq!(machine.state(), ConnectionState::Connected);
        assert_eq!(machine.session().unwrap().address, "Addr123");
        assert!(machine.control_enabled());
        assert_eq!(machine.action_label(), "Disconnect Wallet");
    }

    #[test]
    fn test_rejected_connect_returns_to_disconnected() {
        let mut machine = ready_machine();
        assert!(machine.begin_connect());

        machine.request_failed();
        assert_eq!(machine.state(), ConnectionState::Disconnected);
        assert!(machine.session().is_none());
        assert!(machine.control_enabled());
    }

    #[test]
    fn test_rejected_disconnect_keeps_session() {
        let mut machine = connected_machine("Addr123");
        assert!(machine.begin_disconnect());
        assert!(!machine.control_enabled());

        // The provider refused; the wallet is still connected.
        machine.request_failed();
        assert_eq!(machine.state(), ConnectionState::Connected);
        assert_eq!(machine.session().unwrap().address, "Addr123");
    }

    #[test]
    fn test_disconnect_flow_destroys_session() {
        let mut machine = connected_machine("Addr123");
        assert!(machine.begin_disconnect());
        assert_eq!(machine.state(), ConnectionState::Disconnecting);

        machine.wallet_disconnected();
        assert_eq!(machine.state(), ConnectionState::Disconnected);
        assert!(machine.session().is_none());
        assert_eq!(machine.action_label(), "Connect Wallet");
    }

    #[test]
    fn test_redundant_disconnect_event_is_a_noop() {
        let mut machine = ready_machine();
        machine.wallet_disconnected();
        assert_eq!(machine.state(), ConnectionState::Disconnected);
        assert!(machine.session().is_none());
    }

    // Scenario E: a click while a request is in flight must be refused.
    #[test]
    fn test_no_reentry_while_request_in_flight() {
        let mut machine = ready_machine();
        assert!(machine.begin_connect());

        // Control is disabled; neither direction may start a new request.
        assert!(!machine.control_enabled());
        assert!(!machine.begin_connect());
        assert!(!machine.begin_disconnect());
        assert_eq!(machine.state(), ConnectionState::Connecting);

        let mut machine = connected_machine("Addr123");
        assert!(machine.begin_disconnect());
        assert!(!machine.begin_connect());
        assert!(!machine.begin_disconnect());
        assert_eq!(machine.state(), ConnectionState::Disconnecting);
    }

    #[test]
    fn test_adapter_error_recovers_to_disconnected() {
        // From in-flight connect.
        let mut machine = ready_machine();
        assert!(machine.begin_connect());
        machine.wallet_error();
        assert_eq!(machine.state(), ConnectionState::Disconnected);
        assert!(machine.control_enabled());

        // From an established connection.
        let mut machine = connected_machine("Addr123");
        machine.wallet_error();
        assert_eq!(machine.state(), ConnectionState::Disconnected);
        assert!(machine.session().is_none());
        assert!(machine.control_enabled());
    }

    #[test]
    fn test_repeated_connect_events_each_request_a_report() {
        let mut machine = connected_machine("Addr123");

        // A misbehaving provider re-emits connect; each event must trigger
        // its own independent report with a fresh session.
        assert!(machine.wallet_connected("Addr456"));
        assert_eq!(machine.session().unwrap().address, "Addr456");
        assert_eq!(machine.state(), ConnectionState::Connected);
    }

    #[test]
    fn test_unsolicited_connect_event_is_honored() {
        // The adapter may emit status changes independently of any in-flight
        // request; the machine follows the adapter.
        let mut machine = ready_machine();
        assert!(machine.wallet_connected("Addr789"));
        assert_eq!(machine.state(), ConnectionState::Connected);
        assert_eq!(machine.session().unwrap().address, "Addr789");
    }

    #[test]
    fn test_session_presence_matches_connected_state() {
        let mut machine = ready_machine();
        assert!(machine.session().is_none());

        machine.begin_connect();
        assert!(machine.session().is_none());

        machine.wallet_connected("Addr123");
        assert!(machine.session().is_some());

        machine.wallet_disconnected();
        assert!(machine.session().is_none());
    }
}
