use super::customer::Customer;
use super::types::SimTime;

/// What happens when an event fires. Service events carry the customer they
/// act on, so a customer lives either in the pending queue or in exactly one
/// scheduled event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Arrival,
    ServiceStart(Customer),
    ServiceComplete(Customer),
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Arrival => "Arrival",
            EventKind::ServiceStart(_) => "ServiceStart",
            EventKind::ServiceComplete(_) => "ServiceComplete",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub timestamp: SimTime,
    pub kind: EventKind,
}

impl Event {
    pub fn new(timestamp: SimTime, kind: EventKind) -> Self {
        Self { timestamp, kind }
    }
}
