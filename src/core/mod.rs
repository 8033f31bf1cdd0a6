pub mod analytic;
pub mod arrival;
pub mod config;
pub mod customer;
pub mod error;
pub mod event;
pub mod event_scheduler;
pub mod random;
pub mod replication;
pub mod resource_pool;
pub mod service;
pub mod simulation;
pub mod types;
pub mod waiting_log;
