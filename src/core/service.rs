use super::config::ServiceModel;
use super::error::{SimError, SimResult};
use rand::Rng;
use rand_distr::{Distribution, Exp};

/// Exponential branch that remembers its rate
#[derive(Debug, Clone, Copy)]
pub struct RatedExp {
    rate: f64,
    dist: Exp<f64>,
}

impl RatedExp {
    pub fn new(rate: f64) -> SimResult<Self> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "service rate must be positive, got {}",
                rate
            )));
        }
        let dist = Exp::new(rate)
            .map_err(|e| SimError::InvalidParameter(format!("service rate {}: {}", rate, e)))?;
        Ok(Self { rate, dist })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }
}

/// Service time sampler for the M/M/n, M/D/n and M/H2/n stations
#[derive(Debug, Clone, Copy)]
pub enum ServiceTimeModel {
    Exponential(RatedExp),
    /// Always serves for `1 / mu`
    Deterministic { mu: f64 },
    /// Two exponential branches, the first taken with probability `p`
    HyperExponential {
        p: f64,
        first: RatedExp,
        second: RatedExp,
    },
}

impl ServiceTimeModel {
    pub fn exponential(mu: f64) -> SimResult<Self> {
        Ok(ServiceTimeModel::Exponential(RatedExp::new(mu)?))
    }

    pub fn deterministic(mu: f64) -> SimResult<Self> {
        if !(mu.is_finite() && mu > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "service rate must be positive, got {}",
                mu
            )));
        }
        Ok(ServiceTimeModel::Deterministic { mu })
    }

    pub fn hyper_exponential(rates: [f64; 2], p: f64) -> SimResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(SimError::InvalidParameter(format!(
                "mixture probability must lie in [0, 1], got {}",
                p
            )));
        }
        Ok(ServiceTimeModel::HyperExponential {
            p,
            first: RatedExp::new(rates[0])?,
            second: RatedExp::new(rates[1])?,
        })
    }

    /// Build the sampler described by `model`. `service_rate` feeds the
    /// single-rate variants; the mixture carries its own rates.
    pub fn from_config(model: &ServiceModel, service_rate: f64) -> SimResult<Self> {
        match model {
            ServiceModel::Exponential => Self::exponential(service_rate),
            ServiceModel::Deterministic => Self::deterministic(service_rate),
            ServiceModel::HyperExponential { rates, p } => Self::hyper_exponential(*rates, *p),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            ServiceTimeModel::Exponential(exp) => exp.sample(rng),
            ServiceTimeModel::Deterministic { mu } => 1.0 / mu,
            ServiceTimeModel::HyperExponential { p, first, second } => {
                let u: f64 = rng.gen();
                if u < *p {
                    first.sample(rng)
                } else {
                    second.sample(rng)
                }
            }
        }
    }

    /// Expected service duration
    pub fn mean(&self) -> f64 {
        match self {
            ServiceTimeModel::Exponential(exp) => 1.0 / exp.rate(),
            ServiceTimeModel::Deterministic { mu } => 1.0 / mu,
            ServiceTimeModel::HyperExponential { p, first, second } => {
                p / first.rate() + (1.0 - p) / second.rate()
            }
        }
    }
}
