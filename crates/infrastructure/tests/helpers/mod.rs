pub mod dns_server_mock;
pub mod scripted_client;

pub use dns_server_mock::*;
pub use scripted_client::*;
