/// eqsolve main: subcommands, interactive shell by default.
use clap::Parser; // trait import enables EqsolveCli::parse()
use env_logger::Env;
use log::debug;

use eqsolve::cli::{Command, EqsolveCli};
use eqsolve::commands;
use eqsolve::config::{resolve_config_path, SolverConfig};
use eqsolve::core::dispatch::Solvers;
use eqsolve::shell;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::new().filter_or("EQSOLVE_LOG", default))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = EqsolveCli::parse();
    init_logging(args.verbose);

    // `config --init` creates the file, so there is nothing to load yet.
    let config = match args.cmd {
        Some(Command::Config { init: true }) => SolverConfig::default(),
        _ => SolverConfig::load(args.config.as_deref())?,
    };
    debug!("effective config: {:?}", config);
    let solvers = Solvers::from_config(&config);

    let code = match args.cmd {
        None | Some(Command::Repl) => {
            shell::start(config)?;
            0
        }
        Some(Command::Solve { kind, equation, json }) => {
            commands::solve::main(&solvers, kind, &equation, json)?
        }
        Some(Command::Batch { input, out }) => commands::batch::main(&solvers, &input, out)?,
        Some(Command::Kinds) => {
            commands::kinds::main()?;
            0
        }
        Some(Command::Config { init }) => {
            let path = resolve_config_path(&args.config);
            commands::config::main(&config, path.as_deref(), init)?;
            0
        }
    };
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
