use gloo_console::error;
use gloo_utils::body;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::Route;

pub const THEME_CLASS: &str = "dark-mode";

#[function_component]
pub fn Header() -> Html {
    let toggle_theme = Callback::from(|_| {
        if let Err(err) = body().class_list().toggle(THEME_CLASS) {
            error!("Failed to toggle theme", err);
        }
    });

    html! {
        <header class="site-header">
            <div class="brand">
                <Link<Route> to={Route::Home} classes="brand-logo">
                    <img src="/frontend/dist/images/logo.png" alt="PocketTraveller Logo" />
                </Link<Route>>
                <Link<Route> to={Route::Home} classes="brand-title">
                    <h1>{"PocketTraveller"}</h1>
                </Link<Route>>
            </div>
            <button class="theme-toggle" onclick={toggle_theme}>{"Toggle Theme"}</button>
        </header>
    }
}
