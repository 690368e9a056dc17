use clap::{Parser, Subcommand};
use split_horizon_application::services::SplitHorizonModule;
use split_horizon_application::use_cases::{BuildViewTableUseCase, RenderRedirectsUseCase};
use split_horizon_domain::{CliOverrides, Config, ModuleEvent, ModuleId, ModuleState};
use split_horizon_infrastructure::dns::{MessageBuilder, MessageQueryContext, UdpTransport};
use split_horizon_infrastructure::system::IfconfigAddressSource;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

mod bootstrap;

const MODULE_ID: ModuleId = ModuleId(0);

#[derive(Parser)]
#[command(name = "split-horizon")]
#[command(version)]
#[command(about = "Split horizon DNS rewriter for NAT'd networks")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Program used to list interface addresses
    #[arg(long, value_name = "PATH", global = true)]
    ifconfig: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration and exit
    Check,
    /// Print the active view table
    Table,
    /// Print one redirect rule per configured address pair
    Redirects,
    /// Resolve a name upstream and print the rewritten answer
    Lookup {
        name: String,

        /// Upstream resolver
        #[arg(short, long, default_value = "127.0.0.1:53")]
        server: SocketAddr,

        /// Query timeout in milliseconds
        #[arg(short, long, default_value_t = 2000)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        ifconfig_path: cli.ifconfig.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    match bootstrap::config_source(cli.config.as_deref()) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    match cli.command {
        Command::Check => {
            let pairs = config.network_pairs()?;
            println!("configuration ok: {} network pair(s)", pairs.len());
        }
        Command::Table => {
            let source = Arc::new(IfconfigAddressSource::new(
                config.discovery.ifconfig_path.clone(),
            ));
            let views = BuildViewTableUseCase::new(source).execute(&config).await?;
            for (wan, lan) in views.sorted_entries() {
                println!("{} -> {}", wan, lan);
            }
        }
        Command::Redirects => {
            for line in RenderRedirectsUseCase::new().execute(&config)? {
                println!("{}", line);
            }
        }
        Command::Lookup {
            name,
            server,
            timeout,
        } => lookup(&config, &name, server, Duration::from_millis(timeout)).await?,
    }

    Ok(())
}

async fn lookup(
    config: &Config,
    name: &str,
    server: SocketAddr,
    timeout: Duration,
) -> anyhow::Result<()> {
    let source = Arc::new(IfconfigAddressSource::new(
        config.discovery.ifconfig_path.clone(),
    ));
    let module = SplitHorizonModule::init(MODULE_ID, config, source).await?;

    let mut ctx = MessageQueryContext::for_name(name)?;
    module.operate(MODULE_ID, ModuleEvent::New, &mut ctx);

    let (query_id, query_bytes) = MessageBuilder::build_query_with_id(ctx.query())?;
    debug!(name = %name, id = query_id, upstream = %server, "Querying upstream");
    let reply = UdpTransport::new(server)
        .exchange(&query_bytes, timeout)
        .await?;
    ctx.set_response(MessageBuilder::parse(&reply)?);

    let state = module.operate(MODULE_ID, ModuleEvent::ModDone, &mut ctx);
    module.deinit(MODULE_ID);

    if state == ModuleState::Errored {
        error!(name = %name, "Lookup failed");
        anyhow::bail!("lookup of {} failed", name);
    }

    info!(name = %name, security = ?ctx.security(), "Lookup complete");
    if let Some(response) = ctx.into_response() {
        for record in response.answers() {
            println!("{}", record);
        }
    }
    Ok(())
}
