use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date_selection::ISO_DATE_FORMAT;

pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields before submitting.";
pub const DEFAULT_CHILDREN: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Origin,
    Destination,
    DateRange,
    Adults,
    Email,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Origin => "origin",
            Field::Destination => "destination",
            Field::DateRange => "travel dates",
            Field::Adults => "adults",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The form failed presence validation. Displays as the notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", REQUIRED_FIELDS_NOTICE)]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

/// Raw values of the trip planner controls, read in one go when the user presses send.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub origin: String,
    pub destination: String,
    pub date_range_text: String,
    pub dates: Vec<NaiveDate>,
    pub adults: String,
    pub children: String,
    pub email: String,
    pub voice_notes: String,
}

impl TripForm {
    /// Trims every text field and checks that the required ones are present.
    ///
    /// Only presence is checked. Email format, numeric ranges and whether `dates`
    /// agrees with `date_range_text` are left alone.
    pub fn into_request(self) -> Result<TripRequest, ValidationError> {
        let mut missing = Vec::new();
        let mut required = |field: Field, value: &str| -> String {
            let value = value.trim();
            if value.is_empty() {
                missing.push(field);
            }
            value.to_owned()
        };

        let origin = required(Field::Origin, &self.origin);
        let destination = required(Field::Destination, &self.destination);
        required(Field::DateRange, &self.date_range_text);
        let adults = required(Field::Adults, &self.adults);
        let email = required(Field::Email, &self.email);

        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let children = match self.children.trim() {
            "" => DEFAULT_CHILDREN.to_owned(),
            children => children.to_owned(),
        };

        Ok(TripRequest {
            origin,
            destination,
            dates: self.dates,
            adults,
            children,
            email,
            voice_notes: self.voice_notes.trim().to_owned(),
        })
    }
}

/// The body of `POST /submit-trip`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
    pub adults: String,
    #[serde(default = "default_children")]
    pub children: String,
    pub email: String,
    #[serde(default)]
    pub voice_notes: String,
}

fn default_children() -> String {
    DEFAULT_CHILDREN.to_owned()
}

impl TripRequest {
    /// Required fields that are blank. The date range text never reaches the wire,
    /// so it is not checked here.
    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::Origin, &self.origin),
            (Field::Destination, &self.destination),
            (Field::Adults, &self.adults),
            (Field::Email, &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Plain-language description of the request, as handed to the trip planner.
    pub fn summary(&self) -> String {
        let dates = self
            .dates
            .iter()
            .map(|date| date.format(ISO_DATE_FORMAT).to_string())
            .collect::<Vec<String>>()
            .join(", ");

        format!(
            "I am looking to travel from {} to {}. \
             I plan to travel on the following dates: {}. \
             There will be {} adult(s) and {} child(ren) traveling with me. \
             My email address is {}, and I have left the following extra information: {}.",
            self.origin, self.destination, dates, self.adults, self.children, self.email, self.voice_notes
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::date_selection::parse_iso_date;

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

    #[test]
    fn serializes_to_wire_body() {
        let request = lagos_to_accra().into_request().unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "origin": "Lagos",
                "destination": "Accra",
                "dates": ["2024-06-01", "2024-06-05"],
                "adults": "2",
                "children": "1",
                "email": "a@b.com",
                "voiceNotes": "beach trip",
            })
        );
    }

    #[test]
    fn trims_every_text_field() {
        let form = TripForm {
            origin: " Lagos ".into(),
            destination: "\tAccra\n".into(),
            adults: " 2".into(),
            children: "1 ".into(),
            email: "  a@b.com ".into(),
            voice_notes: " beach trip  ".into(),
            ..lagos_to_accra()
        };

        assert_eq!(form.into_request().unwrap(), lagos_to_accra().into_request().unwrap());
    }

    #[test]
    fn each_blank_required_field_is_reported() {
        let blank: [(Field, fn(&mut TripForm)); 5] = [
            (Field::Origin, |form| form.origin = "   ".into()),
            (Field::Destination, |form| form.destination.clear()),
            (Field::DateRange, |form| form.date_range_text = " \t".into()),
            (Field::Adults, |form| form.adults.clear()),
            (Field::Email, |form| form.email = "\n".into()),
        ];

        for (field, clear) in blank {
            let mut form = lagos_to_accra();
            clear(&mut form);

            let err = form.into_request().unwrap_err();
            assert_eq!(err.missing, vec![field]);
            assert_eq!(err.to_string(), REQUIRED_FIELDS_NOTICE);
        }
    }

    #[test]
    fn all_missing_fields_are_collected() {
        let err = TripForm::default().into_request().unwrap_err();

        assert_eq!(
            err.missing,
            vec![Field::Origin, Field::Destination, Field::DateRange, Field::Adults, Field::Email]
        );
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let form = TripForm {
            children: " ".into(),
            voice_notes: String::new(),
            ..lagos_to_accra()
        };

        let request = form.into_request().unwrap();
        assert_eq!(request.children, "0");
        assert_eq!(request.voice_notes, "");
    }

    // No format checks: these pass as long as they are non-empty.
    #[test]
    fn validation_is_presence_only() {
        let form = TripForm {
            dates: Vec::new(),
            adults: "many".into(),
            children: "-3".into(),
            email: "not an email".into(),
            ..lagos_to_accra()
        };

        let request = form.into_request().unwrap();
        assert!(request.dates.is_empty());
        assert_eq!(request.adults, "many");
        assert_eq!(request.email, "not an email");
    }

    #[test]
    fn deserializes_with_defaults() {
        let request: TripRequest = serde_json::from_value(json!({
            "origin": "Lagos",
            "destination": "Accra",
            "adults": "2",
            "email": "a@b.com",
        }))
        .unwrap();

        assert!(request.dates.is_empty());
        assert_eq!(request.children, "0");
        assert_eq!(request.voice_notes, "");
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn summary_mentions_everything() {
        let summary = lagos_to_accra().into_request().unwrap().summary();

        assert_eq!(
            summary,
            "I am looking to travel from Lagos to Accra. \
             I plan to travel on the following dates: 2024-06-01, 2024-06-05. \
             There will be 2 adult(s) and 1 child(ren) traveling with me. \
             My email address is a@b.com, and I have left the following extra information: beach trip."
        );
    }
}
