//! Configuration for queueing station runs
//!
//! `SimulationParams` describes one station and one run of it; `SimulationConfig`
//! controls how batches of independent replications are executed.

use super::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Order in which waiting customers are granted a server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discipline {
    /// First come, first served
    #[default]
    Fifo,
    /// Smallest drawn service time first, ties by arrival order
    ShortestServiceFirst,
}

/// Service time distribution of every server in the station
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ServiceModel {
    /// Exponential with the station's service rate (M/M/n)
    #[default]
    Exponential,
    /// Constant `1 / service_rate` (M/D/n)
    Deterministic,
    /// Rate `rates[0]` with probability `p`, otherwise `rates[1]` (M/H2/n)
    HyperExponential { rates: [f64; 2], p: f64 },
}

/// Parameters of a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of customers generated by the arrival process
    pub customer_count: u64,
    /// Utilisation per server, rho
    pub load: f64,
    /// Service rate of one server, mu
    pub service_rate: f64,
    /// Number of identical servers, n
    pub servers: usize,
    pub discipline: Discipline,
    pub service_model: ServiceModel,
    /// Seed for the run's random stream; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl SimulationParams {
    /// FIFO, exponential service, unseeded
    pub fn new(customer_count: u64, load: f64, service_rate: f64, servers: usize) -> Self {
        Self {
            customer_count,
            load,
            service_rate,
            servers,
            discipline: Discipline::default(),
            service_model: ServiceModel::default(),
            seed: None,
        }
    }

    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn with_service_model(mut self, service_model: ServiceModel) -> Self {
        self.service_model = service_model;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rate at which one busy server completes work: `service_rate`, or the
    /// reciprocal of the mean service time for a hyper-exponential mixture,
    /// whose branches carry their own rates.
    pub fn effective_service_rate(&self) -> f64 {
        match self.service_model {
            ServiceModel::HyperExponential { rates, p } => {
                1.0 / (p / rates[0] + (1.0 - p) / rates[1])
            }
            ServiceModel::Exponential | ServiceModel::Deterministic => self.service_rate,
        }
    }

    /// Arrival rate lambda = rho * n * mu, so `load` is the utilisation of
    /// each server for every service model
    pub fn arrival_rate(&self) -> f64 {
        self.load * self.servers as f64 * self.effective_service_rate()
    }

    /// Reject parameter sets that cannot describe a station.
    ///
    /// Loads of one or more are accepted: finite runs of unstable
    /// stations are legitimate.
    pub fn validate(&self) -> SimResult<()> {
        if self.customer_count == 0 {
            return Err(SimError::InvalidParameter(
                "customer count must be positive".to_string(),
            ));
        }
        if self.servers == 0 {
            return Err(SimError::InvalidParameter(
                "server count must be positive".to_string(),
            ));
        }
        if !(self.load.is_finite() && self.load > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "load must be positive, got {}",
                self.load
            )));
        }
        if !(self.service_rate.is_finite() && self.service_rate > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "service rate must be positive, got {}",
                self.service_rate
            )));
        }
        if let ServiceModel::HyperExponential { rates, p } = self.service_model {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimError::InvalidParameter(format!(
                    "mixture probability must lie in [0, 1], got {}",
                    p
                )));
            }
            if rates.iter().any(|rate| !(rate.is_finite() && *rate > 0.0)) {
                return Err(SimError::InvalidParameter(format!(
                    "mixture rates must be positive, got {:?}",
                    rates
                )));
            }
        }
        Ok(())
    }
}

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConcurrencyMode {
    /// Replications run one after another on the calling thread
    #[default]
    Sequential,
    /// Replications are spread over a Rayon thread pool
    Rayon,
}

/// Execution settings for batches of replications
#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    pub concurrency_mode: ConcurrencyMode,
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }
}
