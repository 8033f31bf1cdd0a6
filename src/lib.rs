pub mod core;

// Re-export commonly used types
pub use crate::core::analytic::{erlang_c, expected_wait_mmn};
pub use crate::core::config::{
    ConcurrencyMode, Discipline, ServiceModel, SimulationConfig, SimulationParams,
};
pub use crate::core::customer::{Customer, CustomerState};
pub use crate::core::error::{SimError, SimResult};
pub use crate::core::replication::run_replications;
pub use crate::core::simulation::{
    run_queue_simulation, SimulationObserver, SimulationRun, StationSnapshot,
};
pub use crate::core::types::{CustomerId, SimTime};
pub use crate::core::waiting_log::WaitingTimeLog;
