use std::time::Duration;

pub const BASE_URL: &str = "https://acm.sjtu.edu.cn/OnlineJudge/api/v1";

/// Applies to the whole request, connect through reading the body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Only C++ submissions are supported.
pub const LANGUAGE: &str = "cpp";
