use chrono::NaiveDate;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
pub const RANGE_SEPARATOR: &str = " to ";

/// What the date-range picker currently holds. Either end may be missing while the
/// user is still picking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateSelection {
    /// An end before the start is clamped to the start.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let end = match (start, end) {
            (Some(start), Some(end)) if end < start => Some(start),
            _ => end,
        };

        Self { start, end }
    }

    /// Builds a selection from the raw values of two `<input type="date">` controls.
    /// Empty or unparsable values count as "not picked".
    pub fn from_input_values(start: &str, end: &str) -> Self {
        Self::new(parse_iso_date(start), parse_iso_date(end))
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Selected dates in order. A range whose ends coincide yields a single date,
    /// not the `[d, d]` pair a range picker would report, so the posted `dates`
    /// never repeat a day.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end > start => vec![start, end],
            (Some(date), _) | (None, Some(date)) => vec![date],
            (None, None) => Vec::new(),
        }
    }

    /// The text shown in the picker's display field, e.g. `2024-06-01 to 2024-06-05`.
    pub fn display(&self) -> String {
        self.dates()
            .iter()
            .map(|date| date.format(ISO_DATE_FORMAT).to_string())
            .collect::<Vec<String>>()
            .join(RANGE_SEPARATOR)
    }
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}
