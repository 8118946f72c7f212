//! Connect Wallet Page
//!
//! The single user-facing control of the bridge. The page initializes the
//! provider adapter once on mount, subscribes to its events, and wires both
//! to the connection machine:
//!
//! - clicks only mark a request as in flight; the adapter's own events decide
//!   the outcome,
//! - the control is disabled for the whole in-flight window, so a second
//!   click can never race the first,
//! - every connect event triggers exactly one address report, and a failed
//!   report leaves the connection untouched.

use leptos::prelude::*;
use lib_connection::report::ReportOutcome;
use shared::utils::truncate_address;

use crate::services::{provider, relay};
use crate::state::connection::{use_connection_context, ConnectionContext};
use crate::utils::constants::CLOSE_DELAY_MS;

/// One user-visible status line; every transition updates it.
#[derive(Clone, PartialEq, Eq)]
pub struct Status {
    kind: StatusKind,
    text: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Success,
    Error,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }

    fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }

    fn css_class(&self) -> &'static str {
        match self.kind {
            StatusKind::Info => "status info",
            StatusKind::Success => "status success",
            StatusKind::Error => "status error",
        }
    }
}

#[component]
pub fn ConnectPage() -> impl IntoView {
    let ctx = use_connection_context();
    let (status, set_status) = signal(Status::info("Initializing wallet adapter..."));

    // Adapter construction happens exactly once, on mount. A failure here is
    // terminal for this page load; the user has to reload.
    match provider::construct_adapter() {
        Ok(()) => {
            ctx.adapter_ready();
            if let Err(e) = provider::subscribe_adapter_events(
                move |address| handle_wallet_connected(ctx, set_status, address),
                move || {
                    ctx.wallet_disconnected();
                    set_status.set(Status::info("Wallet disconnected."));
                },
                move |message| {
                    log::warn!("adapter error: {message}");
                    ctx.wallet_error();
                    set_status.set(Status::error(format!("Wallet error: {message}")));
                },
            ) {
                ctx.adapter_failed();
                set_status.set(Status::error(e.to_string()));
            } else {
                if provider::provider_connected() {
                    // Trusted site: the provider will re-emit its connect
                    // event momentarily and the normal flow takes over.
                    log::info!("provider already connected at load, awaiting connect event");
                }
                set_status.set(Status::info("Wallet adapter ready."));
            }
        }
        Err(e) => {
            log::error!("{e}");
            ctx.adapter_failed();
            set_status.set(Status::error(e.to_string()));
        }
    }

    let on_toggle = move |_| {
        if !ctx.control_enabled() {
            return;
        }
        if ctx.is_connected() {
            // Disconnect direction.
            if !ctx.begin_disconnect() {
                return;
            }
            set_status.set(Status::info("Disconnecting..."));
            leptos::task::spawn_local(async move {
                if let Err(e) = provider::request_disconnect().await {
                    // The session was not relinquished; stay Connected.
                    log::warn!("{e}");
                    ctx.request_failed();
                    set_status.set(Status::error(e.to_string()));
                }
            });
        } else {
            // Connect direction.
            if !ctx.begin_connect() {
                return;
            }
            set_status.set(Status::info("Requesting wallet connection..."));
            leptos::task::spawn_local(async move {
                if let Err(e) = provider::request_connect().await {
                    log::warn!("{e}");
                    ctx.request_failed();
                    set_status.set(Status::error(e.to_string()));
                }
            });
        }
    };

    view! {
        <div class="container">
            <div class="card">
                <h1>"Connect Wallet"</h1>
                <p class="subtitle">
                    "Link your wallet to the host application. Only the public address is shared."
                </p>

                <div class=move || status.with(|s| s.css_class())>
                    <p>{move || status.with(|s| s.text.clone())}</p>
                </div>

                {move || ctx.address().map(|address| view! {
                    <div class="wallet-address">
                        <p class="wallet-address-short">{truncate_address(&address)}</p>
                        <p class="wallet-address-full">{address}</p>
                    </div>
                })}

                <button
                    class="btn"
                    disabled=move || !ctx.control_enabled()
                    on:click=on_toggle
                >
                    {move || ctx.action_label()}
                </button>
            </div>
        </div>
    }
}

/// Adapter `connect` event: the only place a connection is ever declared
/// established. Creates the session and fires exactly one report for this
/// event; repeated connect events each get their own report.
fn handle_wallet_connected(
    ctx: ConnectionContext,
    set_status: WriteSignal<Status>,
    address: String,
) {
    if address.is_empty() {
        log::warn!("connect event without a public key");
        ctx.wallet_error();
        set_status.set(Status::error("Wallet connected but no address was provided."));
        return;
    }
    if !ctx.wallet_connected(&address) {
        return;
    }
    set_status.set(Status::info(format!(
        "Wallet {} connected. Reporting address...",
        truncate_address(&address)
    )));

    leptos::task::spawn_local(async move {
        match relay::report_address(&address).await {
            ReportOutcome::Delivered => {
                set_status.set(Status::success(
                    "Address delivered. This window will close shortly.",
                ));
                gloo_timers::future::TimeoutFuture::new(CLOSE_DELAY_MS).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.close();
                }
            }
            outcome => {
                // The wallet stays connected; only the relay failed.
                if let Some(error) = outcome.into_error() {
                    log::warn!("{error}");
                    set_status.set(Status::error(error.to_string()));
                }
            }
        }
    });
}
