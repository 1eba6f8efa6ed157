mod argsets;
mod command;

use anyhow::{anyhow, Result};
use env_logger::Env;

use osnapi::constants::{defaults, envvars};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    let subcommand = args.subcommand()?;
    let conn = argsets::ConnArgs::from_args(&mut args)?;
    let cmd = argsets::Cmd::from_args(subcommand.as_deref(), &mut args)?;

    let unused = args.finish();
    if !unused.is_empty() {
        return Err(anyhow!("Unexpected arguments: {:?}", unused));
    }

    let client = command::connect(conn)?;
    let payload = command::execute(&client, cmd)?;
    command::print_payload(&payload)
}
