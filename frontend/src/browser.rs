use futures::future::LocalBoxFuture;
use gloo_console::{error, info};
use gloo_utils::window;
use serde_json::Value;
use trip_planner_lib::submit::{Dispatcher, Page, SubmissionLog, SubmitError};
use wasm_bindgen_futures::spawn_local;
use yew_router::{Routable, navigator::Navigator};

use crate::Route;

/// The current browser tab. Paths the router knows are pushed onto the history,
/// anything else is a full page load.
pub struct BrowserPage {
    pub navigator: Option<Navigator>,
}

impl Page for BrowserPage {
    fn redirect(&self, path: &str) {
        let route = Route::recognize(path).filter(|route| *route != Route::NotFound);
        if let (Some(navigator), Some(route)) = (&self.navigator, route) {
            navigator.push(&route);
            return;
        }

        if let Err(err) = window().location().set_href(path) {
            error!(format!("Failed to redirect to {path}"), err);
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = window().alert_with_message(message) {
            error!(format!("Failed to show alert: {message}"), err);
        }
    }
}

pub struct SpawnLocal;

impl Dispatcher for SpawnLocal {
    fn dispatch(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}

pub struct ConsoleLog;

impl SubmissionLog for ConsoleLog {
    fn accepted(&self, body: &Value) {
        info!(format!("Response from backend: {body}"));
    }

    fn failed(&self, err: &SubmitError) {
        error!(format!("Trip submission failed: {err}"));
    }
}
