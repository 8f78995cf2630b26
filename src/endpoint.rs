use eyre::WrapErr;
use url::Url;

/// Identifiers are interpolated as given, the judge decides whether they exist.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(crate::config::BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    #[culpa::try_fn]
    pub fn submit(&self, problem_id: &str) -> eyre::Result<Url> {
        Url::parse(&format!("{}/problem/{problem_id}/submit", self.base))
            .wrap_err_with(|| format!("invalid submit url for problem {problem_id:?}"))?
    }

    #[culpa::try_fn]
    pub fn submission(&self, submission_id: &str) -> eyre::Result<Url> {
        Url::parse(&format!("{}/submission/{submission_id}", self.base))
            .wrap_err_with(|| format!("invalid status url for submission {submission_id:?}"))?
    }
}

#[cfg(test)]
mod tests {
    use super::Endpoints;

    #[test]
    fn templates_default_base() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.submit("1000").unwrap().as_str(),
            "https://acm.sjtu.edu.cn/OnlineJudge/api/v1/problem/1000/submit",
        );
        assert_eq!(
            endpoints.submission("42").unwrap().as_str(),
            "https://acm.sjtu.edu.cn/OnlineJudge/api/v1/submission/42",
        );
    }

    #[test]
    fn trailing_slash_on_base() {
        let endpoints = Endpoints::new("http://judge.test/api/");
        assert_eq!(
            endpoints.submission("7").unwrap().as_str(),
            "http://judge.test/api/submission/7",
        );
    }

    #[test]
    fn identifiers_are_not_validated() {
        let endpoints = Endpoints::new("http://judge.test");
        assert_eq!(
            endpoints.submit("abc-1").unwrap().as_str(),
            "http://judge.test/problem/abc-1/submit",
        );
    }

    #[test]
    fn unusable_base_is_an_error() {
        let error = Endpoints::new("not a url").submission("1").unwrap_err();
        assert!(format!("{error:#}").contains("invalid status url for submission \"1\""));
    }
}
