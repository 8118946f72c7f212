//! Wallet Status Page - current machine state and session info.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::connection::use_connection_context;

#[component]
pub fn StatusPage() -> impl IntoView {
    let ctx = use_connection_context();

    view! {
        <div class="container">
            <div class="card">
                <h1>"Connection Status"</h1>

                <p class="status-state">{move || ctx.state().name()}</p>

                {move || {
                    if let Some(address) = ctx.address() {
                        view! {
                            <div class="wallet-address">
                                <p class="label">"Wallet Address"</p>
                                <p class="wallet-address-full">{address}</p>
                                <p class="label">"Connected Since"</p>
                                <p>{ctx.established_at().unwrap_or_default()}</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <p class="subtitle">"No wallet connected"</p>
                        }.into_any()
                    }
                }}

                <A href="/">
                    <span class="btn">"Back to Connect"</span>
                </A>
            </div>
        </div>
    }
}
