use chrono::{Local, NaiveDate};
use trip_planner_lib::date_selection::{DateSelection, ISO_DATE_FORMAT, parse_iso_date};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct DateRangePickerProps {
    pub on_change: Callback<DateSelection>,
}

fn iso(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(ISO_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn picked_date(e: Event) -> Option<NaiveDate> {
    let input: HtmlInputElement = e.target_unchecked_into();
    parse_iso_date(&input.value())
}

/// Range picker made of two native date inputs. Dates before today cannot be picked.
#[function_component]
pub fn DateRangePicker(props: &DateRangePickerProps) -> Html {
    let selection = use_state(DateSelection::default);
    let today = Local::now().date_naive();

    let update = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        move |next: DateSelection| {
            on_change.emit(next);
            selection.set(next);
        }
    };

    let on_start = {
        let update = update.clone();
        let end = selection.end();
        Callback::from(move |e: Event| update(DateSelection::new(picked_date(e), end)))
    };

    let on_end = {
        let start = selection.start();
        Callback::from(move |e: Event| update(DateSelection::new(start, picked_date(e))))
    };

    let earliest_end = selection.start().unwrap_or(today);

    html! {
        <div class="date-range-picker">
            <label for="date-range">{"Travel Dates"}</label>
            <input
                id="date-range"
                type="text"
                readonly={true}
                placeholder="Select date range..."
                value={selection.display()}
            />
            <div class="date-range-inputs">
                <input
                    type="date"
                    aria-label="Start date"
                    min={iso(Some(today))}
                    value={iso(selection.start())}
                    onchange={on_start}
                />
                <input
                    type="date"
                    aria-label="End date"
                    min={iso(Some(earliest_end))}
                    value={iso(selection.end())}
                    onchange={on_end}
                />
            </div>
        </div>
    }
}
