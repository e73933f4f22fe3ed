pub mod date_range_picker;
pub mod footer;
pub mod header;
pub mod hero;
pub mod marquee;
pub mod thank_you;
pub mod trip_planner;
pub mod voice_input;
