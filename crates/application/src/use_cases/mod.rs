pub mod mesos_dns_client;

pub use mesos_dns_client::MesosDnsClient;
