use yew::prelude::*;
use yew_router::prelude::Link;

use crate::Route;

#[function_component]
pub fn ThankYou() -> Html {
    html! {
        <div class="thank-you component-container">
            <h1>{"Thank you!"}</h1>
            <p>{"We have received your trip details. Your travel plan will arrive in your inbox shortly."}</p>
            <Link<Route> to={Route::Home} classes="button button-primary">{"Back to Home"}</Link<Route>>
        </div>
    }
}
