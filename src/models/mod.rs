pub mod dev_event;
pub mod dev_event_speaker;
mod timestamp;

pub use dev_event::{DevEvent, DevEventInput, DevEventView};
pub use dev_event_speaker::{DevEventSpeaker, DevEventSpeakerInput, DevEventSpeakerView};
