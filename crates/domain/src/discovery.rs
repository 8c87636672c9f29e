//! Mesos-DNS naming scheme.
//!
//! Pure string templates; callers validate their arguments first.

use crate::Protocol;

pub const DEFAULT_DOMAIN: &str = "mesos";

pub struct DiscoveryName;

impl DiscoveryName {
    /// `leader.<domain>`
    pub fn leader(domain: &str) -> String {
        format!("leader.{}", domain)
    }

    /// `_leader._<protocol>.<domain>`
    pub fn leader_service(domain: &str, protocol: Protocol) -> String {
        format!("_leader._{}.{}", protocol, domain)
    }

    /// `<framework>.<domain>`
    pub fn framework(domain: &str, framework: &str) -> String {
        format!("{}.{}", framework, domain)
    }

    /// `_framework._<protocol>.<framework>.<domain>`
    pub fn framework_service(domain: &str, framework: &str, protocol: Protocol) -> String {
        format!("_framework._{}.{}.{}", protocol, framework, domain)
    }

    /// `master.<domain>`
    pub fn masters(domain: &str) -> String {
        format!("master.{}", domain)
    }

    /// `_master._<protocol>.<domain>`
    pub fn masters_service(domain: &str, protocol: Protocol) -> String {
        format!("_master._{}.{}", protocol, domain)
    }

    /// `slave.<domain>`
    pub fn agents(domain: &str) -> String {
        format!("slave.{}", domain)
    }

    /// `_slave._<protocol>.<domain>`
    pub fn agents_service(domain: &str, protocol: Protocol) -> String {
        format!("_slave._{}.{}", protocol, domain)
    }

    /// `<task>.<framework>.slave.<domain>`
    pub fn task_agents(domain: &str, framework: &str, task: &str) -> String {
        format!("{}.{}.slave.{}", task, framework, domain)
    }

    /// `<task>.<framework>.<domain>`
    pub fn task(domain: &str, framework: &str, task: &str) -> String {
        format!("{}.{}.{}", task, framework, domain)
    }

    /// `_<task>._<protocol>.<framework>.<domain>`
    pub fn task_service(domain: &str, framework: &str, task: &str, protocol: Protocol) -> String {
        format!("_{}._{}.{}.{}", task, protocol, framework, domain)
    }

    /// `_<service>._<task>._<protocol>.<framework>.<domain>`
    pub fn task_named_service(
        domain: &str,
        framework: &str,
        task: &str,
        service: &str,
        protocol: Protocol,
    ) -> String {
        format!(
            "_{}._{}._{}.{}.{}",
            service, task, protocol, framework, domain
        )
    }
}
