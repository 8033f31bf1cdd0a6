use super::error::{SimError, SimResult};
use super::types::{CustomerId, SimTime};

/// Lifecycle of a customer inside the station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerState {
    Arrived,
    Queued,
    InService,
    Departed,
}

impl CustomerState {
    /// Whether `next` is reachable from this state in one step
    pub fn can_move_to(self, next: CustomerState) -> bool {
        matches!(
            (self, next),
            (CustomerState::Arrived, CustomerState::Queued)
                | (CustomerState::Arrived, CustomerState::InService)
                | (CustomerState::Queued, CustomerState::InService)
                | (CustomerState::InService, CustomerState::Departed)
        )
    }
}

/// A single customer passing through the station.
///
/// The service time is drawn once on arrival and doubles as the priority key
/// for shortest-service-first queues.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub arrival_time: SimTime,
    pub service_time: f64,
    pub priority_key: f64,
    state: CustomerState,
}

impl Customer {
    pub fn new(id: CustomerId, arrival_time: SimTime, service_time: f64) -> Self {
        Self {
            id,
            arrival_time,
            service_time,
            priority_key: service_time,
            state: CustomerState::Arrived,
        }
    }

    pub fn state(&self) -> CustomerState {
        self.state
    }

    pub fn transition(&mut self, next: CustomerState) -> SimResult<()> {
        if !self.state.can_move_to(next) {
            return Err(SimError::InvalidTransition {
                customer: self.id,
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }

    /// Time spent between arrival and `service_start`
    pub fn waiting_time(&self, service_start: SimTime) -> f64 {
        service_start.since(self.arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer::new(CustomerId(7), SimTime::new(1.0), 0.5)
    }

    #[test]
    fn test_direct_service_lifecycle() {
        let mut c = customer();
        assert_eq!(c.state(), CustomerState::Arrived);
        c.transition(CustomerState::InService).unwrap();
        c.transition(CustomerState::Departed).unwrap();
        assert_eq!(c.state(), CustomerState::Departed);
    }

    #[test]
    fn test_queued_lifecycle() {
        let mut c = customer();
        c.transition(CustomerState::Queued).unwrap();
        c.transition(CustomerState::InService).unwrap();
        c.transition(CustomerState::Departed).unwrap();
    }

    #[test]
    fn test_skipping_service_is_rejected() {
        let mut c = customer();
        let err = c.transition(CustomerState::Departed).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidTransition {
                customer: CustomerId(7),
                from: CustomerState::Arrived,
                to: CustomerState::Departed,
            }
        );
        assert_eq!(c.state(), CustomerState::Arrived);
    }

    #[test]
    fn test_departed_is_terminal() {
        let mut c = customer();
        c.transition(CustomerState::InService).unwrap();
        c.transition(CustomerState::Departed).unwrap();
        assert!(c.transition(CustomerState::Queued).is_err());
        assert!(c.transition(CustomerState::InService).is_err());
    }

    #[test]
    fn test_waiting_time() {
        let c = customer();
        assert_eq!(c.waiting_time(SimTime::new(3.5)), 2.5);
        assert_eq!(c.priority_key, c.service_time);
    }
}
