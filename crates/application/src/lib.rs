//! Mesos-DNS Client Application Layer
pub mod errors;
pub mod ports;
pub mod use_cases;

pub use errors::MesosDnsError;
