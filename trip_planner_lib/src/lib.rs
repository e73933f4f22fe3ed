pub mod date_selection;
pub mod submit;
pub mod trip_request;

pub const PLAN_TRIP_PATH: &str = "/plan-a-trip";
pub const THANK_YOU_PATH: &str = "/thank-you";
pub const SUBMIT_TRIP_PATH: &str = "/submit-trip";
