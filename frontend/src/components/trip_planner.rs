use gloo_console::info;
use trip_planner_lib::{date_selection::DateSelection, submit::TripSubmitter, trip_request::TripForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::{
    api::HttpBackend,
    browser::{BrowserPage, ConsoleLog, SpawnLocal},
    components::{date_range_picker::DateRangePicker, voice_input::VoiceInput},
};

pub enum Msg {
    DatesChanged(DateSelection),
    TranscriptChanged(String),
    Submit,
}

pub struct TripPlanner {
    origin: NodeRef,
    destination: NodeRef,
    adults: NodeRef,
    children: NodeRef,
    email: NodeRef,
    dates: DateSelection,
    voice_notes: String,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

impl TripPlanner {
    /// Everything the user entered, read once at the moment of submitting.
    fn snapshot(&self) -> TripForm {
        TripForm {
            origin: input_value(&self.origin),
            destination: input_value(&self.destination),
            date_range_text: self.dates.display(),
            dates: self.dates.dates(),
            adults: input_value(&self.adults),
            children: input_value(&self.children),
            email: input_value(&self.email),
            voice_notes: self.voice_notes.clone(),
        }
    }
}

impl Component for TripPlanner {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            origin: NodeRef::default(),
            destination: NodeRef::default(),
            adults: NodeRef::default(),
            children: NodeRef::default(),
            email: NodeRef::default(),
            dates: DateSelection::default(),
            voice_notes: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DatesChanged(dates) => {
                self.dates = dates;
            }
            Msg::TranscriptChanged(transcript) => {
                self.voice_notes = transcript;
            }
            Msg::Submit => {
                let page = BrowserPage {
                    navigator: ctx.link().navigator(),
                };
                let submitter = TripSubmitter::new(page, SpawnLocal, HttpBackend, ConsoleLog);

                if let Err(err) = submitter.submit(self.snapshot()) {
                    info!(format!("Trip form incomplete, missing: {:?}", err.missing));
                }
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_dates = link.callback(Msg::DatesChanged);
        let on_transcript = link.callback(Msg::TranscriptChanged);
        let on_submit = link.callback(|_: MouseEvent| Msg::Submit);

        html! {
            <div class="trip-planner component-container">
                <h1>{"Plan Your Trip with an AI Agent"}</h1>
                <form class="trip-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <div class="input-grid">
                        <div class="input-group">
                            <label for="origin">{"Where from?"}</label>
                            <input id="origin" type="text" ref={self.origin.clone()} />
                        </div>
                        <div class="input-group">
                            <label for="destination">{"Where to?"}</label>
                            <input id="destination" type="text" ref={self.destination.clone()} />
                        </div>
                        <DateRangePicker on_change={on_dates} />
                        <div class="input-group">
                            <label>{"Adults / Children"}</label>
                            <div class="travelers">
                                <input id="adults" type="number" min="1" value="1" placeholder="Adults" ref={self.adults.clone()} />
                                <input id="children" type="number" min="0" value="0" placeholder="Children" ref={self.children.clone()} />
                            </div>
                        </div>
                    </div>
                    <div class="input-group">
                        <label for="email">{"Enter your Email"}</label>
                        <input id="email" type="email" placeholder="example@mail.com" ref={self.email.clone()} />
                    </div>
                    <button type="button" class="send-button" onclick={on_submit}>{"Send"}</button>
                </form>
                <VoiceInput on_transcript={on_transcript} />
            </div>
        }
    }
}
