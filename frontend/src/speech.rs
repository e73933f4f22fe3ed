use gloo_utils::window;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Event, SpeechRecognition, SpeechRecognitionEvent,
    js_sys::{Array, Function, Reflect},
};
use yew::Callback;

// Chromium still only ships the prefixed constructor
const RECOGNITION_CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeechError {
    #[error("speech recognition is not supported in this browser")]
    Unsupported,
    #[error("speech recognition failed: {0}")]
    Failed(String),
}

fn js_failure(err: JsValue) -> SpeechError {
    SpeechError::Failed(format!("{err:?}"))
}

pub struct SpeechHandlers {
    pub on_start: Callback<()>,
    pub on_transcript: Callback<String>,
    pub on_error: Callback<String>,
    pub on_end: Callback<()>,
}

/// One-shot English speech capture on top of the Web Speech API.
///
/// The browser calls `on_transcript` with the final text of an utterance and
/// `on_end` once capture stops, whether it was stopped, timed out or failed.
pub struct SpeechCapture {
    recognition: SpeechRecognition,
    _handlers: Vec<Closure<dyn FnMut(Event)>>,
}

impl SpeechCapture {
    pub fn new(handlers: SpeechHandlers) -> Result<Self, SpeechError> {
        let recognition = construct_recognition()?;
        recognition.set_lang("en-US");
        recognition.set_continuous(false).map_err(js_failure)?;
        recognition.set_interim_results(false);

        let SpeechHandlers {
            on_start,
            on_transcript,
            on_error,
            on_end,
        } = handlers;

        let on_start = Closure::<dyn FnMut(Event)>::new(move |_| on_start.emit(()));
        let on_result = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let event: SpeechRecognitionEvent = event.unchecked_into();
            on_transcript.emit(final_transcript(&event));
        });
        let on_error = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let reason = Reflect::get(&event, &JsValue::from_str("error"))
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_else(|| "unknown".to_owned());
            on_error.emit(reason);
        });
        let on_end = Closure::<dyn FnMut(Event)>::new(move |_| on_end.emit(()));

        recognition.set_onstart(Some(on_start.as_ref().unchecked_ref()));
        recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
        recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));

        Ok(Self {
            recognition,
            _handlers: vec![on_start, on_result, on_error, on_end],
        })
    }

    pub fn start(&self) -> Result<(), SpeechError> {
        self.recognition.start().map_err(js_failure)
    }

    pub fn stop(&self) {
        self.recognition.stop();
    }
}

impl Drop for SpeechCapture {
    fn drop(&mut self) {
        // The closures die with us, so the browser must not call them afterwards
        self.recognition.set_onstart(None);
        self.recognition.set_onresult(None);
        self.recognition.set_onerror(None);
        self.recognition.set_onend(None);
        self.recognition.abort();
    }
}

fn construct_recognition() -> Result<SpeechRecognition, SpeechError> {
    let window = window();
    let constructor = RECOGNITION_CONSTRUCTORS
        .iter()
        .filter_map(|name| Reflect::get(&window, &JsValue::from_str(name)).ok())
        .find(|value| value.is_function())
        .ok_or(SpeechError::Unsupported)?;

    let constructor: &Function = constructor.unchecked_ref();
    Reflect::construct(constructor, &Array::new())
        .map(|recognition| recognition.unchecked_into::<SpeechRecognition>())
        .map_err(js_failure)
}

fn final_transcript(event: &SpeechRecognitionEvent) -> String {
    let Some(results) = event.results() else {
        return String::new();
    };

    (event.result_index()..results.length())
        .filter_map(|index| results.get(index))
        .filter(|result| result.is_final())
        .filter_map(|result| result.get(0))
        .map(|alternative| alternative.transcript())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_as_log_lines() {
        assert_eq!(
            SpeechError::Unsupported.to_string(),
            "speech recognition is not supported in this browser"
        );
        assert_eq!(
            SpeechError::Failed("not-allowed".into()).to_string(),
            "speech recognition failed: not-allowed"
        );
    }

    #[test]
    fn failure_is_usable_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(SpeechError::Failed("aborted".into()));

        assert!(err.to_string().ends_with("aborted"));
    }
}
