use super::arrival::ArrivalProcess;
use super::config::{Discipline, ServiceModel, SimulationParams};
use super::customer::{Customer, CustomerState};
use super::error::SimResult;
use super::event::{Event, EventKind};
use super::event_scheduler::EventScheduler;
use super::random::RandomStreams;
use super::resource_pool::{Admission, ResourcePool};
use super::service::ServiceTimeModel;
use super::types::SimTime;
use super::waiting_log::WaitingTimeLog;
use log::{debug, info};

/// Server occupancy at the moment an observer is notified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationSnapshot {
    pub busy: usize,
    pub queued: usize,
    pub capacity: usize,
}

/// Observer trait for simulation events
pub trait SimulationObserver {
    /// Called when the simulation clock moves forward
    fn on_clock_advance(&mut self, _old: SimTime, _new: SimTime) {}

    /// Called once the customer has requested a server
    fn on_arrival(&mut self, _customer: &Customer, _station: StationSnapshot) {}

    /// Called when the customer starts service and its wait is recorded
    fn on_service_start(
        &mut self,
        _customer: &Customer,
        _now: SimTime,
        _station: StationSnapshot,
    ) {
    }

    /// Called after the customer's server has been released
    fn on_departure(&mut self, _customer: &Customer, _now: SimTime, _station: StationSnapshot) {}
}

/// Everything a run mutates besides the scheduler
struct Station {
    pool: ResourcePool,
    rng: RandomStreams,
    service: ServiceTimeModel,
    arrivals: ArrivalProcess,
    waits: WaitingTimeLog,
    last_time: SimTime,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl Station {
    fn snapshot(&self) -> StationSnapshot {
        StationSnapshot {
            busy: self.pool.busy_count(),
            queued: self.pool.queue_len(),
            capacity: self.pool.capacity(),
        }
    }

    fn dispatch(&mut self, scheduler: &mut EventScheduler, event: Event) -> SimResult<()> {
        if event.timestamp != self.last_time {
            for observer in &mut self.observers {
                observer.on_clock_advance(self.last_time, event.timestamp);
            }
            self.last_time = event.timestamp;
        }

        match event.kind {
            EventKind::Arrival => self.arrive(scheduler),
            EventKind::ServiceStart(customer) => self.start_service(scheduler, customer),
            EventKind::ServiceComplete(customer) => self.depart(scheduler, customer),
        }
    }

    fn arrive(&mut self, scheduler: &mut EventScheduler) -> SimResult<()> {
        let now = scheduler.now();
        let id = self.arrivals.on_arrival(scheduler, &mut self.rng)?;
        let service_time = self.rng.service_time(&self.service);
        let customer = Customer::new(id, now, service_time);

        let arrived = customer.clone();
        let admission = self.pool.request(customer)?;
        let station = self.snapshot();
        for observer in &mut self.observers {
            observer.on_arrival(&arrived, station);
        }

        if let Admission::Granted(customer) = admission {
            scheduler.schedule(Event::new(now, EventKind::ServiceStart(customer)))?;
        }
        Ok(())
    }

    fn start_service(
        &mut self,
        scheduler: &mut EventScheduler,
        mut customer: Customer,
    ) -> SimResult<()> {
        let now = scheduler.now();
        customer.transition(CustomerState::InService)?;
        let wait = customer.waiting_time(now);
        self.waits.record(wait);
        debug!(
            "t={} customer {} starts service after waiting {:.6}",
            now, customer.id, wait
        );

        let station = self.snapshot();
        for observer in &mut self.observers {
            observer.on_service_start(&customer, now, station);
        }

        scheduler.schedule_in(customer.service_time, EventKind::ServiceComplete(customer))
    }

    fn depart(&mut self, scheduler: &mut EventScheduler, mut customer: Customer) -> SimResult<()> {
        let now = scheduler.now();
        customer.transition(CustomerState::Departed)?;
        let next = self.pool.release()?;
        debug!("t={} customer {} departs", now, customer.id);

        let station = self.snapshot();
        for observer in &mut self.observers {
            observer.on_departure(&customer, now, station);
        }

        if let Some(next) = next {
            scheduler.schedule(Event::new(now, EventKind::ServiceStart(next)))?;
        }
        Ok(())
    }
}

/// One parameterised run of a queueing station.
///
/// Construction validates the parameters, so an invalid set fails before any
/// event exists. `run` consumes the instance and returns the waiting times.
pub struct SimulationRun {
    params: SimulationParams,
    scheduler: EventScheduler,
    station: Station,
}

impl SimulationRun {
    pub fn new(params: SimulationParams) -> SimResult<Self> {
        params.validate()?;

        let service = ServiceTimeModel::from_config(&params.service_model, params.service_rate)?;
        let rng = RandomStreams::new(params.arrival_rate(), params.seed)?;
        let pool = ResourcePool::new(params.servers, params.discipline)?;

        let station = Station {
            pool,
            rng,
            service,
            arrivals: ArrivalProcess::new(params.customer_count),
            waits: WaitingTimeLog::new(),
            last_time: SimTime::ZERO,
            observers: Vec::new(),
        };

        Ok(Self {
            params,
            scheduler: EventScheduler::new(),
            station,
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.station.observers.push(observer);
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Drive the station until every customer has departed
    pub fn run(self) -> SimResult<WaitingTimeLog> {
        let SimulationRun {
            params,
            mut scheduler,
            mut station,
        } = self;

        info!(
            "Starting run: {} customers, rho={}, mu={}, n={}, {:?}, {:?}, lambda={:.6}",
            params.customer_count,
            params.load,
            params.service_rate,
            params.servers,
            params.discipline,
            params.service_model,
            params.arrival_rate()
        );

        station.arrivals.start(&mut scheduler, &mut station.rng)?;
        let dispatched =
            scheduler.run_to_completion(|sched, event| station.dispatch(sched, event))?;

        info!(
            "Run finished at t={} after {} events, {} waits recorded",
            scheduler.now(),
            dispatched,
            station.waits.len()
        );
        Ok(station.waits)
    }
}

/// Simulate one queueing station and return each customer's wait, in the
/// order servers were granted.
pub fn run_queue_simulation(
    customer_count: u64,
    load: f64,
    service_rate: f64,
    servers: usize,
    discipline: Discipline,
    service_model: ServiceModel,
    seed: Option<u64>,
) -> SimResult<WaitingTimeLog> {
    let params = SimulationParams {
        customer_count,
        load,
        service_rate,
        servers,
        discipline,
        service_model,
        seed,
    };
    SimulationRun::new(params)?.run()
}
