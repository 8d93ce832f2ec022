mod args;
mod rcv;

use clap::Parser;
use log::{debug, error};

use crate::args::Args;

fn main() {
    let args = Args::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
    debug!("args: {:?}", args);

    match rcv::run_election(&args) {
        Ok(winner) => debug!("main: {} won", winner),
        Err(e) => {
            error!("{:?}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
