use gloo_console::{error, info};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::speech::{SpeechCapture, SpeechHandlers};

pub enum Msg {
    Toggle,
    Started,
    Heard(String),
    Failed(String),
    Ended,
    Edited(String),
    ClosePopup,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub on_transcript: Callback<String>,
}

/// Microphone button plus the popup showing what was heard. The transcript stays
/// editable and every change is reported through `on_transcript`.
pub struct VoiceInput {
    capture: Option<SpeechCapture>,
    listening: bool,
    transcript: String,
    popup_open: bool,
}

impl VoiceInput {
    fn set_transcript(&mut self, ctx: &Context<Self>, transcript: String) {
        ctx.props().on_transcript.emit(transcript.clone());
        self.transcript = transcript;
    }
}

impl Component for VoiceInput {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link();
        let handlers = SpeechHandlers {
            on_start: link.callback(|()| Msg::Started),
            on_transcript: link.callback(Msg::Heard),
            on_error: link.callback(Msg::Failed),
            on_end: link.callback(|()| Msg::Ended),
        };

        let capture = match SpeechCapture::new(handlers) {
            Ok(capture) => Some(capture),
            Err(err) => {
                error!(format!("Voice input disabled: {err}"));
                None
            }
        };

        Self {
            capture,
            listening: false,
            transcript: String::new(),
            popup_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                let Some(capture) = &self.capture else {
                    return false;
                };

                if self.listening {
                    capture.stop();
                } else if let Err(err) = capture.start() {
                    error!(format!("{err}"));
                }
                return false;
            }
            Msg::Started => {
                info!("Listening for voice input");
                self.listening = true;
                self.popup_open = false;
                self.set_transcript(ctx, String::new());
            }
            Msg::Heard(transcript) => {
                self.set_transcript(ctx, transcript);
            }
            // The browser follows up with an end event
            Msg::Failed(reason) => {
                error!(format!("Speech recognition error: {reason}"));
                return false;
            }
            Msg::Ended => {
                self.listening = false;
                self.popup_open = !self.transcript.trim().is_empty();
            }
            Msg::Edited(transcript) => {
                self.set_transcript(ctx, transcript);
            }
            Msg::ClosePopup => {
                self.popup_open = false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_toggle = link.callback(|e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            Msg::Toggle
        });
        let on_edit = link.callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::Edited(textarea.value())
        });
        let on_close = link.callback(|_| Msg::ClosePopup);

        let icon = if self.listening { "fas fa-stop-circle" } else { "fas fa-microphone" };

        html! {
            <div class="voice-input">
                <span class="voice-label">{"Tell us more about your trip"}</span>
                <button
                    type="button"
                    class={classes!("mic-button", self.listening.then_some("listening"))}
                    disabled={self.capture.is_none()}
                    onclick={on_toggle}
                >
                    <i class={icon}></i>
                </button>
                if self.popup_open {
                    <div class="transcript-popup">
                        <textarea
                            placeholder="Your voice input will appear here..."
                            value={self.transcript.clone()}
                            oninput={on_edit}
                        />
                        <button type="button" onclick={on_close}>{"Close"}</button>
                    </div>
                }
            </div>
        }
    }
}
