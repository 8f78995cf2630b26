use clap::{CommandFactory, Parser};
use std::{ffi::OsString, io::Write, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "submit",
    about = "Submit a C++ solution to an ACMOJ problem",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct SubmitArgs {
    #[arg(value_name("problem_id"))]
    pub problem_id: String,
    #[arg(value_name("code_file"))]
    pub code_file: PathBuf,
    #[arg(value_name("token"))]
    pub token: String,
}

#[derive(Parser, Debug)]
#[command(
    name = "status",
    about = "Check the status of an ACMOJ submission",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct StatusArgs {
    #[arg(value_name("submission_id"))]
    pub submission_id: String,
    #[arg(value_name("token"))]
    pub token: String,
}

pub fn usage<A: CommandFactory>() -> String {
    A::command().render_usage().to_string()
}

/// Every argument after the program name is taken as a positional value,
/// including ones that look like flags or `--`.
pub fn parse_from<A, I>(args: I) -> Result<A, clap::Error>
where
    A: Parser,
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let bin = args.next().unwrap_or_default();
    A::try_parse_from([bin, OsString::from("--")].into_iter().chain(args))
}

/// Parses the process arguments, printing the usage line and exiting with
/// status 1 when they don't match.
pub fn parse<A: Parser>() -> A {
    match parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(_) => {
            println!("{}", usage::<A>());
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr, stdout is kept for the result.
#[culpa::try_fn]
pub fn install() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;
    color_eyre::install()?;
}

/// Prints the outcome of a call and returns whether it succeeded.
#[culpa::try_fn]
pub fn report(
    out: &mut impl Write,
    outcome: eyre::Result<serde_json::Value>,
    failed: &str,
) -> eyre::Result<bool> {
    match outcome {
        Ok(value) => {
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
            true
        }
        Err(error) => {
            tracing::debug!(?error, "call failed");
            writeln!(out, "{error:#}")?;
            writeln!(out, "{failed}")?;
            false
        }
    }
}
