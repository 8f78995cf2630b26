use acmoj::{
    cli::{self, StatusArgs},
    client::Caller,
    endpoint::Endpoints,
    status,
};
use std::process::ExitCode;

#[culpa::try_fn]
fn main() -> eyre::Result<ExitCode> {
    let args: StatusArgs = cli::parse();

    cli::install()?;

    let outcome = status::run(|| Caller::new(), &Endpoints::default(), &args);

    if cli::report(&mut std::io::stdout().lock(), outcome, status::FAILED)? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
