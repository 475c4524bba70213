use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use hangul_session::{key, ClientEvent, EventBuffer, HostEvent, InputController};

use crate::script::{parse_script, Step};

/// Client operation as emitted in `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepEvent {
    SetMarkedText { text: String, caret: usize },
    InsertText { text: String },
}

impl From<ClientEvent> for StepEvent {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::SetMarkedText { text, caret } => StepEvent::SetMarkedText { text, caret },
            ClientEvent::InsertText { text } => StepEvent::InsertText { text },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub key: String,
    /// `None` for lifecycle steps, which have no handled/not-handled answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed: Option<bool>,
    pub events: Vec<StepEvent>,
    pub marked: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Replay {
    pub steps: Vec<ReplayStep>,
    pub text: String,
}

/// The host's text field: committed text plus the marked range.
#[derive(Debug, Default)]
struct HostDocument {
    text: String,
    marked: String,
}

impl HostDocument {
    fn apply(&mut self, event: &ClientEvent) {
        match event {
            ClientEvent::SetMarkedText { text, .. } => self.marked = text.clone(),
            ClientEvent::InsertText { text } => {
                self.marked.clear();
                self.text.push_str(text);
            }
        }
    }

    /// What the host does with a key the controller passed on.
    fn apply_native(&mut self, event: &HostEvent) {
        match event.key_code {
            key::BACKSPACE => {
                self.text.pop();
            }
            key::RETURN | key::KEYPAD_ENTER => self.text.push('\n'),
            key::TAB => self.text.push('\t'),
            _ => self
                .text
                .extend(event.text.chars().filter(|c| !c.is_control())),
        }
    }
}

/// Run `steps` against a fresh controller. The session starts active and
/// is deactivated at the end so pending composition reaches the document.
pub fn replay(steps: &[Step]) -> Replay {
    let mut controller: InputController<EventBuffer> = InputController::new();
    let mut doc = HostDocument::default();
    let mut out = Vec::with_capacity(steps.len() + 1);
    controller.activate(EventBuffer::new());

    for step in steps {
        let (consumed, events) = match step {
            Step::Key { event, .. } => {
                let consumed = controller.handle_event(event);
                let events = controller
                    .client_mut()
                    .map(EventBuffer::take_events)
                    .unwrap_or_default();
                for e in &events {
                    doc.apply(e);
                }
                if !consumed {
                    doc.apply_native(event);
                }
                (Some(consumed), events)
            }
            Step::Activate => {
                let released = controller.activate(EventBuffer::new());
                (None, drain(released, &mut doc))
            }
            Step::Deactivate => {
                let released = controller.deactivate();
                (None, drain(released, &mut doc))
            }
        };
        out.push(ReplayStep {
            key: step.label().to_string(),
            consumed,
            events: events.into_iter().map(StepEvent::from).collect(),
            marked: doc.marked.clone(),
            text: doc.text.clone(),
        });
    }

    if controller.is_active() {
        let events = drain(controller.deactivate(), &mut doc);
        if !events.is_empty() {
            out.push(ReplayStep {
                key: "<eof>".to_string(),
                consumed: None,
                events: events.into_iter().map(StepEvent::from).collect(),
                marked: doc.marked.clone(),
                text: doc.text.clone(),
            });
        }
    }

    Replay {
        steps: out,
        text: doc.text,
    }
}

fn drain(client: Option<EventBuffer>, doc: &mut HostDocument) -> Vec<ClientEvent> {
    let events = client.map(|mut c| c.take_events()).unwrap_or_default();
    for e in &events {
        doc.apply(e);
    }
    events
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{}{}", s, " ".repeat(width - w))
    } else {
        s.to_string()
    }
}

pub fn format_trace(replay: &Replay) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}{}{}{}\n",
        pad("key", 14),
        pad("handled", 9),
        pad("marked", 8),
        "document"
    ));
    for step in &replay.steps {
        let handled = match step.consumed {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        out.push_str(&format!(
            "{}{}{}{:?}\n",
            pad(&step.key, 14),
            pad(handled, 9),
            pad(&step.marked, 8),
            step.text
        ));
    }
    out
}

pub fn type_cmd(script: &str, trace: bool, json: bool) {
    let steps = die!(parse_script(script), "Error: {}");
    let result = replay(&steps);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).expect("JSON serialization failed")
        );
        return;
    }
    if trace {
        print!("{}", format_trace(&result));
    }
    println!("{}", result.text);
}
