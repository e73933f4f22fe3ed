use gloo_net::http::Request;
use trip_planner_lib::{
    SUBMIT_TRIP_PATH,
    submit::{BackendReply, SubmitError, TripBackend},
    trip_request::TripRequest,
};

/// Talks to the server the page was loaded from.
pub struct HttpBackend;

impl TripBackend for HttpBackend {
    async fn post_trip(&self, request: &TripRequest) -> Result<BackendReply, SubmitError> {
        // `json` sets the application/json content type
        let http_request = Request::post(SUBMIT_TRIP_PATH)
            .json(request)
            .map_err(|err| SubmitError::Network(err.to_string()))?;

        let response = http_request
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| SubmitError::MalformedBody(err.to_string()))?;

        Ok(BackendReply { status, body })
    }
}
