use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::Write;
use std::time::Instant;
use subnet_planner::cli::{Cli, Commands};
use subnet_planner::config::Config;
use subnet_planner::input::{parse_host_list, parse_network};
use subnet_planner::logging::init_logging;
use subnet_planner::models::to_binary;
use subnet_planner::output::{
    cidr_rows, disable_color_unless_terminal, print_plan, vlsm_rows, OutputFormat, PlanRow,
};
use subnet_planner::processing::{allocate_cidr, allocate_vlsm, describe, prefix_mask};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env();
    init_logging(&config, cli.log_level)?;
    log::info!("#Start main()");
    log::debug!("{config:?} format={:?} timing={}", cli.format, cli.timing);

    disable_color_unless_terminal();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let started = Instant::now();
    let rows: Vec<PlanRow> = match &cli.command {
        Commands::Cidr { network, count } => {
            cidr_rows(&allocate_cidr(&parse_network(network)?, *count)?)
        }
        Commands::Vlsm { network, hosts } => {
            let hosts = parse_host_list(&hosts.join(" "))?;
            vlsm_rows(&allocate_vlsm(&parse_network(network)?, &hosts)?)
        }
        Commands::Info { network } => {
            let net = parse_network(network)?;
            let details = describe(net.addr, net.mask)?;
            if cli.format == OutputFormat::Table {
                let mut out = std::io::stdout().lock();
                writeln!(out, "address  {}", to_binary(net.addr))?;
                writeln!(out, "netmask  {:032b}", prefix_mask(net.mask)?)?;
            }
            cidr_rows(&[details])
        }
    };
    let elapsed = started.elapsed();

    print_plan(&rows, cli.format)?;
    if cli.timing {
        eprintln!("{} {:.6} seconds", "elapsed".yellow(), elapsed.as_secs_f64());
    }
    log::info!("#End main() {} subnets in {:?}", rows.len(), elapsed);
    Ok(())
}
