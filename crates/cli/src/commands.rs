use crate::output::{print_records, print_service_records};
use clap::{Args, Subcommand};
use mesos_dns_application::use_cases::MesosDnsClient;
use mesos_dns_domain::{DiscoveryName, Protocol, RecordType};
use tracing::warn;

#[derive(Args, Debug, Clone, Copy)]
pub struct SrvArgs {
    /// Ask for SRV records instead of addresses
    #[arg(long)]
    pub srv: bool,

    /// Protocol label of the SRV name (tcp, udp)
    #[arg(long, default_value = "tcp")]
    pub protocol: Protocol,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Leading master
    Leader(SrvArgs),

    /// Every master
    Masters(SrvArgs),

    /// Every agent
    Agents(SrvArgs),

    /// Schedulers of a framework
    Framework {
        framework: String,

        #[command(flatten)]
        srv: SrvArgs,
    },

    /// Records of a task
    Task {
        framework: String,

        task: String,

        #[command(flatten)]
        srv: SrvArgs,

        /// Named service of the task (implies --srv)
        #[arg(long)]
        service: Option<String>,

        /// Record types to ask for; all types when omitted
        #[arg(short = 't', long = "type")]
        types: Vec<RecordType>,
    },

    /// Agents a task runs on
    AgentsFor { framework: String, task: String },

    /// Arbitrary name
    Lookup {
        name: String,

        #[arg(short = 't', long = "type")]
        types: Vec<RecordType>,

        /// Print only the first record (needs exactly one --type)
        #[arg(long)]
        first: bool,
    },

    /// SRV records of an arbitrary name, most preferred first
    Srv { name: String },

    /// Survey of every discovery name of the domain
    All {
        #[arg(long)]
        framework: Option<String>,

        #[arg(long, default_value = "tcp")]
        protocol: Protocol,
    },
}

pub async fn run(client: &MesosDnsClient, domain: &str, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Leader(args) if args.srv => print_service_records(
            &client
                .lookup_leading_cluster_service_records(domain, args.protocol)
                .await?,
        ),
        Command::Leader(_) => print_records(&client.lookup_leading_cluster(domain).await?),

        Command::Masters(args) if args.srv => print_service_records(
            &client
                .lookup_clusters_service_records(domain, args.protocol)
                .await?,
        ),
        Command::Masters(_) => print_records(&client.lookup_clusters(domain).await?),

        Command::Agents(args) if args.srv => print_service_records(
            &client
                .lookup_agents_service_records(domain, args.protocol)
                .await?,
        ),
        Command::Agents(_) => print_records(&client.lookup_agents(domain).await?),

        Command::Framework { framework, srv } if srv.srv => print_service_records(
            &client
                .lookup_framework_schedulers_service_records(domain, &framework, srv.protocol)
                .await?,
        ),
        Command::Framework { framework, .. } => {
            print_records(&client.lookup_framework_schedulers(domain, &framework).await?)
        }

        Command::Task {
            framework,
            task,
            srv,
            service,
            types,
        } => match service {
            Some(service) => print_service_records(
                &client
                    .lookup_service_records_for_task_service(
                        domain,
                        &framework,
                        &task,
                        &service,
                        srv.protocol,
                    )
                    .await?,
            ),
            None if srv.srv => print_service_records(
                &client
                    .lookup_task_service_records(domain, &framework, &task, srv.protocol)
                    .await?,
            ),
            None => print_records(&client.lookup_task(domain, &framework, &task, &types).await?),
        },

        Command::AgentsFor { framework, task } => {
            print_records(&client.lookup_agents_for(domain, &framework, &task).await?)
        }

        Command::Lookup { name, types, first } if first => {
            let [record_type] = types.as_slice() else {
                anyhow::bail!("--first needs exactly one --type");
            };
            if let Some(record) = client.lookup_first(&name, *record_type).await? {
                print_records(std::slice::from_ref(&record));
            }
        }
        Command::Lookup { name, types, .. } => print_records(&client.lookup(&name, &types).await?),

        Command::Srv { name } => print_service_records(&client.lookup_service_records(&name).await?),

        Command::All {
            framework,
            protocol,
        } => survey(client, domain, framework.as_deref(), protocol).await?,
    }

    Ok(())
}

/// Prints every discovery name of `domain`. Keeps going past failures and
/// reports how many there were.
async fn survey(
    client: &MesosDnsClient,
    domain: &str,
    framework: Option<&str>,
    protocol: Protocol,
) -> anyhow::Result<()> {
    let mut failures = 0usize;

    macro_rules! section {
        ($title:expr, $lookup:expr, $print:ident) => {{
            let title = $title;
            println!("# {}", title);
            match $lookup.await {
                Ok(records) => $print(&records),
                Err(e) => {
                    warn!(name = %title, error = %e, "Survey lookup failed");
                    println!("! {:#}", anyhow::Error::new(e));
                    failures += 1;
                }
            }
        }};
    }

    section!(DiscoveryName::leader(domain), client.lookup_leading_cluster(domain), print_records);
    section!(
        DiscoveryName::leader_service(domain, protocol),
        client.lookup_leading_cluster_service_records(domain, protocol),
        print_service_records
    );
    section!(DiscoveryName::masters(domain), client.lookup_clusters(domain), print_records);
    section!(
        DiscoveryName::masters_service(domain, protocol),
        client.lookup_clusters_service_records(domain, protocol),
        print_service_records
    );
    section!(DiscoveryName::agents(domain), client.lookup_agents(domain), print_records);
    section!(
        DiscoveryName::agents_service(domain, protocol),
        client.lookup_agents_service_records(domain, protocol),
        print_service_records
    );

    if let Some(framework) = framework {
        section!(
            DiscoveryName::framework(domain, framework),
            client.lookup_framework_schedulers(domain, framework),
            print_records
        );
        section!(
            DiscoveryName::framework_service(domain, framework, protocol),
            client.lookup_framework_schedulers_service_records(domain, framework, protocol),
            print_service_records
        );
    }

    if failures > 0 {
        anyhow::bail!("survey of '{}': {} lookup(s) failed", domain, failures);
    }
    Ok(())
}
