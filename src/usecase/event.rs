use crate::usecase::stats::SortStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    TiersAssigned {
        listed: usize,
        defaulted: usize,
        default_tier: u32,
    },

    UnknownCity {
        city: String,
        records: usize,
    },

    Finished {
        stats: SortStats,
    },
}

pub trait EventSink {
    fn send(&self, ev: AppEvent);
}

pub(crate) fn emit(sink: Option<&dyn EventSink>, ev: AppEvent) {
    if let Some(sink) = sink {
        sink.send(ev);
    }
}
