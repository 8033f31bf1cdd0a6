use super::error::{SimError, SimResult};
use super::event::{Event, EventKind};
use super::types::SimTime;
use log::trace;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
pub struct ScheduledEvent {
    pub sequence_num: u64,
    pub event: Event,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.event.timestamp == other.event.timestamp && self.sequence_num == other.sequence_num
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .event
            .timestamp
            .cmp(&self.event.timestamp)
            .then_with(|| other.sequence_num.cmp(&self.sequence_num))
    }
}

/// Owns the simulation clock and the set of pending events.
///
/// Events pop in timestamp order; simultaneous events pop in the order they
/// were scheduled.
#[derive(Debug, Default)]
pub struct EventScheduler {
    event_queue: BinaryHeap<ScheduledEvent>,
    sequence_counter: u64,
    now: SimTime,
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule an event, rejecting anything that would fire in the past
    pub fn schedule(&mut self, event: Event) -> SimResult<()> {
        if !event.timestamp.as_f64().is_finite() || event.timestamp < self.now {
            return Err(SimError::InvalidEvent {
                timestamp: event.timestamp,
                now: self.now,
            });
        }

        self.event_queue.push(ScheduledEvent {
            sequence_num: self.sequence_counter,
            event,
        });
        self.sequence_counter += 1;
        Ok(())
    }

    /// Schedule `kind` to fire `delay` time units from now
    pub fn schedule_in(&mut self, delay: f64, kind: EventKind) -> SimResult<()> {
        let timestamp = self.now + delay;
        self.schedule(Event::new(timestamp, kind))
    }

    /// Remove the earliest event and advance the clock to its timestamp
    pub fn pop_next(&mut self) -> Option<Event> {
        let scheduled = self.event_queue.pop()?;
        self.now = scheduled.event.timestamp;
        Some(scheduled.event)
    }

    pub fn peek_next_time(&self) -> Option<SimTime> {
        self.event_queue.peek().map(|scheduled| scheduled.event.timestamp)
    }

    pub fn is_empty(&self) -> bool {
        self.event_queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.event_queue.len()
    }

    /// Pop and dispatch events until none remain, returns the number dispatched
    pub fn run_to_completion<F>(&mut self, mut dispatch: F) -> SimResult<u64>
    where
        F: FnMut(&mut EventScheduler, Event) -> SimResult<()>,
    {
        let mut dispatched = 0;
        while let Some(event) = self.pop_next() {
            trace!("t={} dispatching {}", event.timestamp, event.kind.name());
            dispatch(self, event)?;
            dispatched += 1;
        }
        Ok(dispatched)
    }
}
