use clap::Parser;
use fpmath_cli::{
    cli::Cli,
    dispatch::evaluate,
};
use std::io::Write;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // NOTE: The verbosity flag takes precedence over the environment variable
    // for log control. For example, `FPMATH_LOG=warn fpmath -vvv ...` will
    // still log at the trace level. The environment variable can only set the
    // log level per crate, not override the verbosity flag.
    let env_filter = EnvFilter::builder()
        .with_env_var("FPMATH_LOG")
        .from_env()?
        .add_directive(cli.verbosity.log_level_filter().as_str().parse()?);

    let layer = tracing_subscriber::fmt::layer()
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .init();

    let result = evaluate(cli.function, cli.bits);
    debug!(function = ?cli.function, input = %cli.bits, output = %result);

    writeln!(std::io::stdout(), "{result}")?;
    Ok(())
}
