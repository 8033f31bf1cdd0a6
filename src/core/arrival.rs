use super::error::SimResult;
use super::event::EventKind;
use super::event_scheduler::EventScheduler;
use super::random::RandomStreams;
use super::types::CustomerId;

/// Poisson source of a fixed number of customers.
///
/// Only one arrival is pending at a time: each arrival schedules the next
/// until `total` have been scheduled.
#[derive(Debug, Clone)]
pub struct ArrivalProcess {
    total: u64,
    scheduled: u64,
    next_id: u64,
}

impl ArrivalProcess {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            scheduled: 0,
            next_id: 0,
        }
    }

    /// Schedule the first arrival one exponential gap after the current time
    pub fn start(
        &mut self,
        scheduler: &mut EventScheduler,
        rng: &mut RandomStreams,
    ) -> SimResult<()> {
        self.schedule_next(scheduler, rng)
    }

    /// Handle a fired arrival: schedules the following arrival if any remain
    /// and returns the id of the customer that just arrived.
    pub fn on_arrival(
        &mut self,
        scheduler: &mut EventScheduler,
        rng: &mut RandomStreams,
    ) -> SimResult<CustomerId> {
        self.schedule_next(scheduler, rng)?;
        let id = CustomerId(self.next_id);
        self.next_id += 1;
        Ok(id)
    }

    fn schedule_next(
        &mut self,
        scheduler: &mut EventScheduler,
        rng: &mut RandomStreams,
    ) -> SimResult<()> {
        if self.is_exhausted() {
            return Ok(());
        }
        let gap = rng.next_interarrival();
        scheduler.schedule_in(gap, EventKind::Arrival)?;
        self.scheduled += 1;
        Ok(())
    }

    pub fn is_exhausted(&self) -> bool {
        self.scheduled >= self.total
    }

    pub fn scheduled(&self) -> u64 {
        self.scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_exactly_total_arrivals() {
        let mut scheduler = EventScheduler::new();
        let mut rng = RandomStreams::new(1.0, Some(4)).unwrap();
        let mut arrivals = ArrivalProcess::new(5);
        arrivals.start(&mut scheduler, &mut rng).unwrap();

        let mut fired = 0;
        let mut last = scheduler.now();
        while let Some(event) = scheduler.pop_next() {
            assert_eq!(event.kind, EventKind::Arrival);
            assert!(event.timestamp >= last);
            last = event.timestamp;
            let id = arrivals.on_arrival(&mut scheduler, &mut rng).unwrap();
            assert_eq!(id, CustomerId(fired));
            fired += 1;
        }

        assert_eq!(fired, 5);
        assert_eq!(arrivals.scheduled(), 5);
        assert!(arrivals.is_exhausted());
    }

    #[test]
    fn test_only_one_arrival_pending() {
        let mut scheduler = EventScheduler::new();
        let mut rng = RandomStreams::new(1.0, Some(4)).unwrap();
        let mut arrivals = ArrivalProcess::new(3);
        arrivals.start(&mut scheduler, &mut rng).unwrap();
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.peek_next_time().unwrap().as_f64() > 0.0);
    }
}
