use components::{
    footer::Footer, header::Header, hero::Hero, thank_you::ThankYou, trip_planner::TripPlanner,
};
use gloo_console::info;
use yew::prelude::*;
use yew_router::{BrowserRouter, Routable, Switch, prelude::Link};

mod api;
mod browser;
mod components;
mod speech;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/plan-a-trip")]
    PlanTrip,
    #[at("/thank-you")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    info!(format!("Route: {:?}", route));
    match route {
        Route::Home => html! { <Hero /> },
        Route::PlanTrip => html! { <TripPlanner /> },
        Route::ThankYou => html! { <ThankYou /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

#[function_component]
fn NotFound() -> Html {
    html! {
        <div class="not-found component-container">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to Home"}</Link<Route>>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
