use std::{future::Future, rc::Rc};

use futures::future::LocalBoxFuture;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    trip_request::{TripForm, TripRequest, ValidationError},
    THANK_YOU_PATH,
};

pub const FALLBACK_FAILURE_REASON: &str = "Submission failed";

/// Anything that can go wrong after the user has already been sent on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{reason} (HTTP {status})")]
    Status { status: u16, reason: String },
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// Status and body of the backend's answer, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: String,
}

impl BackendReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The page the submit button lives on.
pub trait Page {
    fn redirect(&self, path: &str);
    /// Blocking notice, e.g. `window.alert`.
    fn alert(&self, message: &str);
}

/// Runs a task to completion in the background without the caller waiting on it.
pub trait Dispatcher {
    fn dispatch(&self, task: LocalBoxFuture<'static, ()>);
}

pub trait TripBackend {
    fn post_trip(&self, request: &TripRequest) -> impl Future<Output = Result<BackendReply, SubmitError>>;
}

/// Where the outcome of a background submission ends up. Nothing here reaches the user.
pub trait SubmissionLog {
    fn accepted(&self, body: &Value);
    fn failed(&self, error: &SubmitError);
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turns a raw reply into the parsed success body or the reason it failed.
pub fn interpret_reply(reply: BackendReply) -> Result<Value, SubmitError> {
    if !reply.is_success() {
        let reason = serde_json::from_str::<ErrorBody>(&reply.body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_FAILURE_REASON.to_owned());

        return Err(SubmitError::Status {
            status: reply.status,
            reason,
        });
    }

    serde_json::from_str(&reply.body).map_err(|err| SubmitError::MalformedBody(err.to_string()))
}

pub struct TripSubmitter<P, D, B, L> {
    page: P,
    dispatcher: D,
    backend: Rc<B>,
    log: Rc<L>,
}

impl<P, D, B, L> TripSubmitter<P, D, B, L>
where
    P: Page,
    D: Dispatcher,
    B: TripBackend + 'static,
    L: SubmissionLog + 'static,
{
    pub fn new(page: P, dispatcher: D, backend: B, log: L) -> Self {
        Self {
            page,
            dispatcher,
            backend: Rc::new(backend),
            log: Rc::new(log),
        }
    }

    /// Validates the snapshot, sends the user to the thank-you page and posts the
    /// request in the background.
    ///
    /// The redirect happens before the request is even dispatched, so the backend's
    /// answer never decides what the user sees. Repeated calls are not de-duplicated.
    pub fn submit(&self, form: TripForm) -> Result<(), ValidationError> {
        let request = match form.into_request() {
            Ok(request) => request,
            Err(err) => {
                self.page.alert(&err.to_string());
                return Err(err);
            }
        };

        self.page.redirect(THANK_YOU_PATH);
        self.post_in_background(request);

        Ok(())
    }

    fn post_in_background(&self, request: TripRequest) {
        let backend = Rc::clone(&self.backend);
        let log = Rc::clone(&self.log);

        self.dispatcher.dispatch(Box::pin(async move {
            let outcome = match backend.post_trip(&request).await {
                Ok(reply) => interpret_reply(reply),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(body) => log.accepted(&body),
                Err(err) => log.failed(&err),
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::{
        executor::{LocalPool, LocalSpawner},
        future::{self, Either},
        task::LocalSpawnExt,
    };
    use serde_json::json;

    use super::*;
    use crate::{date_selection::parse_iso_date, trip_request::REQUIRED_FIELDS_NOTICE};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Redirect(String),
        Alert(String),
        Post(Value),
        Accepted(Value),
        Failed(SubmitError),
    }

    type Events = Rc<RefCell<Vec<Event>>>;

    struct RecordingPage(Events);

    impl Page for RecordingPage {
        fn redirect(&self, path: &str) {
            self.0.borrow_mut().push(Event::Redirect(path.to_owned()));
        }

        fn alert(&self, message: &str) {
            self.0.borrow_mut().push(Event::Alert(message.to_owned()));
        }
    }

    struct PoolDispatcher(LocalSpawner);

    impl Dispatcher for PoolDispatcher {
        fn dispatch(&self, task: LocalBoxFuture<'static, ()>) {
            self.0.spawn_local(task).expect("pool is running");
        }
    }

    enum Answer {
        Reply(BackendReply),
        Unreachable,
        Never,
    }

    struct StubBackend {
        events: Events,
        answer: Answer,
    }

    impl TripBackend for StubBackend {
        fn post_trip(&self, request: &TripRequest) -> impl Future<Output = Result<BackendReply, SubmitError>> {
            self.events
                .borrow_mut()
                .push(Event::Post(serde_json::to_value(request).unwrap()));

            match &self.answer {
                Answer::Reply(reply) => Either::Left(future::ready(Ok(reply.clone()))),
                Answer::Unreachable => {
                    Either::Left(future::ready(Err(SubmitError::Network("connection refused".into()))))
                }
                Answer::Never => Either::Right(future::pending()),
            }
        }
    }

    struct RecordingLog(Events);

    impl SubmissionLog for RecordingLog {
        fn accepted(&self, body: &Value) {
            self.0.borrow_mut().push(Event::Accepted(body.clone()));
        }

        fn failed(&self, error: &SubmitError) {
            self.0.borrow_mut().push(Event::Failed(error.clone()));
        }
    }

    struct Harness {
        pool: LocalPool,
        events: Events,
        submitter: TripSubmitter<RecordingPage, PoolDispatcher, StubBackend, RecordingLog>,
    }

    impl Harness {
        fn new(answer: Answer) -> Self {
            let pool = LocalPool::new();
            let events = Events::default();
            let submitter = TripSubmitter::new(
                RecordingPage(events.clone()),
                PoolDispatcher(pool.spawner()),
                StubBackend {
                    events: events.clone(),
                    answer,
                },
                RecordingLog(events.clone()),
            );

            Self { pool, events, submitter }
        }

        fn replying(status: u16, body: &str) -> Self {
            Self::new(Answer::Reply(BackendReply {
                status,
                body: body.to_owned(),
            }))
        }

        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }
    }

    fn lagos_to_accra() -> TripForm {
        TripForm {
            origin: "Lagos".into(),
            destination: "Accra".into(),
            date_range_text: "2024-06-01 to 2024-06-05".into(),
            dates: vec![parse_iso_date("2024-06-01").unwrap(), parse_iso_date("2024-06-05").unwrap()],
            adults: "2".into(),
            children: "1".into(),
            email: "a@b.com".into(),
            voice_notes: "beach trip".into(),
        }
    }

    fn lagos_to_accra_body() -> Value {
        json!({
            "origin": "Lagos",
            "destination": "Accra",
            "dates": ["2024-06-01", "2024-06-05"],
            "adults": "2",
            "children": "1",
            "email": "a@b.com",
            "voiceNotes": "beach trip",
        })
    }

    #[test]
    fn posts_after_redirect_and_logs_reply() {
        let mut harness = Harness::replying(200, r#"{"message":"Trip details received."}"#);

        harness.submitter.submit(lagos_to_accra()).unwrap();
        harness.pool.run_until_stalled();

        assert_eq!(
            harness.events(),
            vec![
                Event::Redirect(THANK_YOU_PATH.into()),
                Event::Post(lagos_to_accra_body()),
                Event::Accepted(json!({"message": "Trip details received."})),
            ]
        );
    }

    #[test]
    fn redirect_does_not_wait_for_backend() {
        let mut harness = Harness::new(Answer::Never);

        harness.submitter.submit(lagos_to_accra()).unwrap();
        assert_eq!(harness.events(), vec![Event::Redirect(THANK_YOU_PATH.into())]);

        harness.pool.run_until_stalled();
        assert_eq!(
            harness.events(),
            vec![Event::Redirect(THANK_YOU_PATH.into()), Event::Post(lagos_to_accra_body())]
        );
    }

    #[test]
    fn invalid_form_alerts_once_and_sends_nothing() {
        let mut harness = Harness::replying(200, "{}");
        let form = TripForm {
            email: "   ".into(),
            ..lagos_to_accra()
        };

        assert!(harness.submitter.submit(form).is_err());
        harness.pool.run_until_stalled();

        assert_eq!(harness.events(), vec![Event::Alert(REQUIRED_FIELDS_NOTICE.into())]);
    }

    #[test]
    fn trimmed_values_and_defaults_are_posted() {
        let mut harness = Harness::replying(200, "{}");
        let form = TripForm {
            origin: " Lagos ".into(),
            children: String::new(),
            voice_notes: String::new(),
            ..lagos_to_accra()
        };

        harness.submitter.submit(form).unwrap();
        harness.pool.run_until_stalled();

        let mut expected = lagos_to_accra_body();
        expected["children"] = json!("0");
        expected["voiceNotes"] = json!("");
        assert!(harness.events().contains(&Event::Post(expected)));
    }

    #[test]
    fn server_error_is_logged_not_shown() {
        let mut harness = Harness::replying(500, r#"{"message":"server down"}"#);

        harness.submitter.submit(lagos_to_accra()).unwrap();
        harness.pool.run_until_stalled();

        let events = harness.events();
        assert_eq!(
            events.last(),
            Some(&Event::Failed(SubmitError::Status {
                status: 500,
                reason: "server down".into(),
            }))
        );
        assert!(!events.iter().any(|event| matches!(event, Event::Alert(_))));
    }

    // An error text equal to the validation notice must not trigger a second alert.
    #[test]
    fn error_matching_notice_text_stays_silent() {
        let body = json!({ "message": REQUIRED_FIELDS_NOTICE }).to_string();
        let mut harness = Harness::replying(400, &body);

        harness.submitter.submit(lagos_to_accra()).unwrap();
        harness.pool.run_until_stalled();

        assert!(!harness.events().iter().any(|event| matches!(event, Event::Alert(_))));
    }

    #[test]
    fn network_failure_is_logged() {
        let mut harness = Harness::new(Answer::Unreachable);

        harness.submitter.submit(lagos_to_accra()).unwrap();
        harness.pool.run_until_stalled();

        assert_eq!(
            harness.events().last(),
            Some(&Event::Failed(SubmitError::Network("connection refused".into())))
        );
    }

    #[test]
    fn repeated_submits_each_post() {
        let mut harness = Harness::replying(200, "{}");

        harness.submitter.submit(lagos_to_accra()).unwrap();
        harness.submitter.submit(lagos_to_accra()).unwrap();
        harness.pool.run_until_stalled();

        let posts = harness
            .events()
            .iter()
            .filter(|event| matches!(event, Event::Post(_)))
            .count();
        assert_eq!(posts, 2);
    }

    #[test]
    fn error_reply_without_message_uses_fallback() {
        for body in ["", "not json", "{}", r#"{"error":"boom"}"#, r#"{"message":""}"#] {
            let err = interpret_reply(BackendReply {
                status: 502,
                body: body.to_owned(),
            })
            .unwrap_err();

            assert_eq!(
                err,
                SubmitError::Status {
                    status: 502,
                    reason: FALLBACK_FAILURE_REASON.into(),
                }
            );
        }
    }

    #[test]
    fn success_with_unparsable_body_is_malformed() {
        let err = interpret_reply(BackendReply {
            status: 200,
            body: "<html>".into(),
        })
        .unwrap_err();

        assert!(matches!(err, SubmitError::MalformedBody(_)));
    }
}
