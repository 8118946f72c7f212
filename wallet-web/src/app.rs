//! Application shell and routes.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::{ConnectPage, StatusPage};
use crate::state::connection::provide_connection_context;

#[component]
pub fn App() -> impl IntoView {
    provide_connection_context();

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=ConnectPage/>
                    <Route path=path!("/status") view=StatusPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container">
            <div class="card" style="text-align: center;">
                <h1>"404 - Page Not Found"</h1>
                <A href="/">
                    <span class="btn">"Back to Connect"</span>
                </A>
            </div>
        </div>
    }
}
