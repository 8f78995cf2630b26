use acmoj::{
    cli::{self, SubmitArgs},
    client::Caller,
    endpoint::Endpoints,
    submit,
};
use std::process::ExitCode;

#[culpa::try_fn]
fn main() -> eyre::Result<ExitCode> {
    let args: SubmitArgs = cli::parse();

    cli::install()?;

    let outcome = submit::run(|| Caller::new(), &Endpoints::default(), &args);

    if cli::report(&mut std::io::stdout().lock(), outcome, submit::FAILED)? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
