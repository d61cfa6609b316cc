use serde_json::json;

use crate::usecase::event::{AppEvent, EventSink};

pub fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::TiersAssigned {
            listed,
            defaulted,
            default_tier,
        } => {
            json!({"type":"tiers_assigned","listed":listed,"defaulted":defaulted,"default_tier":default_tier})
        }
        AppEvent::UnknownCity { city, records } => {
            json!({"type":"unknown_city","city":city,"records":records})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

// NDJSON to stdout, one object per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NdjsonPrinter;

impl EventSink for NdjsonPrinter {
    fn send(&self, ev: AppEvent) {
        println!("{}", app_event_to_json(&ev));
    }
}
