//! Wallet Provider Integration via wasm-bindgen
//!
//! JavaScript interop for a Phantom-style injected provider
//! (`window.solana`). The adapter is constructed exactly once per page load
//! and kept in JS module scope; the Rust side only drives it through the
//! functions below and never assumes success from its own requests. The
//! provider's own `connect`/`disconnect`/`error` events are the source of
//! truth for status changes.

use lib_connection::ConnectorError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(inline_js = "
let adapter = null;

export function constructAdapter() {
    if (adapter) {
        return;
    }
    if (!window.solana || window.solana.isPhantom !== true) {
        throw new Error('Wallet provider not found. Install the extension and reload this page.');
    }
    adapter = window.solana;
}

export function adapterConnected() {
    return !!(adapter && adapter.isConnected === true);
}

export function registerAdapterEvents(onConnect, onDisconnect, onError) {
    if (!adapter) {
        throw new Error('Adapter not constructed');
    }
    adapter.on('connect', (publicKey) => {
        const key = publicKey || adapter.publicKey;
        onConnect(key ? key.toString() : '');
    });
    adapter.on('disconnect', () => onDisconnect());
    adapter.on('error', (err) => {
        onError(err && err.message ? err.message : String(err));
    });
}

export async function adapterConnect() {
    if (!adapter) {
        throw new Error('Adapter not constructed');
    }
    await adapter.connect();
}

export async function adapterDisconnect() {
    if (!adapter) {
        throw new Error('Adapter not constructed');
    }
    await adapter.disconnect();
}
")]
extern "C" {
    /// Construct the provider adapter; throws if the extension is absent.
    #[wasm_bindgen(catch)]
    fn constructAdapter() -> Result<(), JsValue>;

    /// Provider-side view of the current connection status.
    fn adapterConnected() -> bool;

    /// Bind the connect/disconnect/error event handlers.
    #[wasm_bindgen(catch)]
    fn registerAdapterEvents(
        on_connect: &js_sys::Function,
        on_disconnect: &js_sys::Function,
        on_error: &js_sys::Function,
    ) -> Result<(), JsValue>;

    /// Request a connection; resolves on success, rejects on refusal/error.
    #[wasm_bindgen(catch)]
    async fn adapterConnect() -> Result<JsValue, JsValue>;

    /// Request a disconnect.
    #[wasm_bindgen(catch)]
    async fn adapterDisconnect() -> Result<JsValue, JsValue>;
}

/// Construct the wallet adapter. Called exactly once at page startup; there
/// is no automatic retry because re-running provider construction blindly is
/// not known to be safe.
pub fn construct_adapter() -> Result<(), ConnectorError> {
    constructAdapter().map_err(|e| ConnectorError::Initialization(js_error_message(&e)))
}

/// Whether the provider currently considers itself connected.
pub fn provider_connected() -> bool {
    adapterConnected()
}

/// Subscribe the three adapter event handlers.
///
/// The closures live for the rest of the page (`Closure::forget`), matching
/// the adapter subscription's lifetime. Must be called after
/// [`construct_adapter`] succeeded.
pub fn subscribe_adapter_events(
    on_connect: impl Fn(String) + 'static,
    on_disconnect: impl Fn() + 'static,
    on_error: impl Fn(String) + 'static,
) -> Result<(), ConnectorError> {
    let on_connect = Closure::<dyn Fn(String)>::new(on_connect);
    let on_disconnect = Closure::<dyn Fn()>::new(on_disconnect);
    let on_error = Closure::<dyn Fn(String)>::new(on_error);

    let result = registerAdapterEvents(
        on_connect.as_ref().unchecked_ref(),
        on_disconnect.as_ref().unchecked_ref(),
        on_error.as_ref().unchecked_ref(),
    );

    match result {
        Ok(()) => {
            on_connect.forget();
            on_disconnect.forget();
            on_error.forget();
            Ok(())
        }
        Err(e) => Err(ConnectorError::Initialization(js_error_message(&e))),
    }
}

/// Request a wallet connection. Success is only ever declared by the
/// provider's own `connect` event, not by this future resolving.
pub async fn request_connect() -> Result<(), ConnectorError> {
    adapterConnect()
        .await
        .map(|_| ())
        .map_err(|e| ConnectorError::Provider(js_error_message(&e)))
}

/// Request a wallet disconnect. As with connect, the `disconnect` event is
/// the source of truth.
pub async fn request_disconnect() -> Result<(), ConnectorError> {
    adapterDisconnect()
        .await
        .map(|_| ())
        .map_err(|e| ConnectorError::Provider(js_error_message(&e)))
}

/// Extract a readable message from a thrown JS value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(value, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{:?}", value)
}
