pub mod mock_dns_client;

pub use mock_dns_client::*;
