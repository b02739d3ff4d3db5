use rootwalk_domain::{DnsQuery, RecordValue, ResolveError};
use std::fmt;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

/// One step of a walk, as shown to a human.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Querying {
        depth: u8,
        server: IpAddr,
        query: DnsQuery,
    },
    Alias {
        depth: u8,
        target: Arc<str>,
    },
    Answer {
        depth: u8,
        value: RecordValue,
    },
    Referral {
        depth: u8,
        next_server: IpAddr,
    },
    ResolvingNameServer {
        depth: u8,
        name_server: Arc<str>,
    },
    Failed {
        depth: u8,
        server: IpAddr,
        error: ResolveError,
    },
}

impl TraceEvent {
    pub fn depth(&self) -> u8 {
        match self {
            TraceEvent::Querying { depth, .. }
            | TraceEvent::Alias { depth, .. }
            | TraceEvent::Answer { depth, .. }
            | TraceEvent::Referral { depth, .. }
            | TraceEvent::ResolvingNameServer { depth, .. }
            | TraceEvent::Failed { depth, .. } => *depth,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Querying { server, query, .. } => {
                write!(f, "Querying {} for {}", server, query)
            }
            TraceEvent::Alias { target, .. } => write!(f, "CNAME → {}", target),
            TraceEvent::Answer { value, .. } => write!(f, "ANSWER: {}", value),
            TraceEvent::Referral { next_server, .. } => {
                write!(f, "Referral → glue {}", next_server)
            }
            TraceEvent::ResolvingNameServer { name_server, .. } => {
                write!(f, "Need to resolve NS {}", name_server)
            }
            TraceEvent::Failed { server, error, .. } => match error {
                ResolveError::DepthExceeded { .. } => {
                    write!(f, "[!] {} before querying {}", error, server)
                }
                _ => write!(f, "[!] {}", error),
            },
        }
    }
}

/// Sink for trace events. Purely diagnostic: nothing recorded here may feed
/// back into resolution.
pub trait ResolutionTrace: Send + Sync {
    fn record(&self, event: &TraceEvent);
}

pub struct NoopTrace;

impl ResolutionTrace for NoopTrace {
    fn record(&self, _event: &TraceEvent) {}
}

/// Keeps every event in order; used by tests and by callers that render the
/// trace after the walk finishes.
#[derive(Default)]
pub struct RecordingTrace {
    events: Mutex<Vec<TraceEvent>>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl ResolutionTrace for RecordingTrace {
    fn record(&self, event: &TraceEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
