use crate::{
    cli::SubmitArgs,
    client::{Call, Caller, Transport},
    config,
    endpoint::Endpoints,
};
use eyre::WrapErr;
use std::path::Path;

pub const FAILED: &str = "Submission failed";

/// Reads `code_file` and submits it as a C++ solution to `problem_id`.
///
/// A file that cannot be read is reported before anything is sent.
#[culpa::try_fn]
#[tracing::instrument(skip(caller, endpoints, code_file, token), fields(code_file = %code_file.display()))]
pub fn submit<T: Transport>(
    caller: &Caller<T>,
    endpoints: &Endpoints,
    problem_id: &str,
    code_file: &Path,
    token: &str,
) -> eyre::Result<serde_json::Value> {
    let code = read_code(code_file).wrap_err("Error reading file")?;
    tracing::debug!(code_len = code.len(), "read solution");
    let url = endpoints.submit(problem_id).wrap_err("Error submitting")?;
    let call = Call::post_form(
        url,
        vec![
            ("language".to_owned(), config::LANGUAGE.to_owned()),
            ("code".to_owned(), code),
        ],
    );
    caller.call(&call, token).wrap_err("Error submitting")?
}

#[culpa::try_fn]
fn read_code(path: &Path) -> eyre::Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("{}", path.display()))?
}

/// Entry point of the `submit` tool; a client that can't be set up is
/// reported like any other submission error.
#[culpa::try_fn]
pub fn run<T: Transport>(
    connect: impl FnOnce() -> eyre::Result<Caller<T>>,
    endpoints: &Endpoints,
    args: &SubmitArgs,
) -> eyre::Result<serde_json::Value> {
    let caller = connect().wrap_err("Error submitting")?;
    submit(
        &caller,
        endpoints,
        &args.problem_id,
        &args.code_file,
        &args.token,
    )?
}
