use crate::{
    cli::StatusArgs,
    client::{Call, Caller, Transport},
    endpoint::Endpoints,
};
use eyre::WrapErr;

pub const FAILED: &str = "Status check failed";

#[culpa::try_fn]
#[tracing::instrument(skip(caller, endpoints, token))]
pub fn check_status<T: Transport>(
    caller: &Caller<T>,
    endpoints: &Endpoints,
    submission_id: &str,
    token: &str,
) -> eyre::Result<serde_json::Value> {
    let url = endpoints
        .submission(submission_id)
        .wrap_err("Error checking status")?;
    caller
        .call(&Call::get(url), token)
        .wrap_err("Error checking status")?
}

#[culpa::try_fn]
pub fn run<T: Transport>(
    connect: impl FnOnce() -> eyre::Result<Caller<T>>,
    endpoints: &Endpoints,
    args: &StatusArgs,
) -> eyre::Result<serde_json::Value> {
    let caller = connect().wrap_err("Error checking status")?;
    check_status(&caller, endpoints, &args.submission_id, &args.token)?
}
