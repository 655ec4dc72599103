use std::env;
use std::time::Duration;

/// Query shape of the portfolio aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioQueryConfig {
    pub skills_limit: u32,
    pub projects_limit: u32,
    /// One level is enough to inline each skill's category title.
    pub skills_depth: u8,
    /// Two levels expand project skills and their categories.
    pub projects_depth: u8,
    pub fetch_timeout: Option<Duration>,
}

impl Default for PortfolioQueryConfig {
    fn default() -> Self {
        Self {
            skills_limit: 100,
            projects_limit: 100,
            skills_depth: 1,
            projects_depth: 2,
            fetch_timeout: None,
        }
    }
}

impl PortfolioQueryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            skills_limit: parse_or(&lookup, "PORTFOLIO_SKILLS_LIMIT", defaults.skills_limit),
            projects_limit: parse_or(&lookup, "PORTFOLIO_PROJECTS_LIMIT", defaults.projects_limit),
            skills_depth: parse_or(&lookup, "PORTFOLIO_SKILLS_DEPTH", defaults.skills_depth),
            projects_depth: parse_or(&lookup, "PORTFOLIO_PROJECTS_DEPTH", defaults.projects_depth),
            fetch_timeout: lookup("PORTFOLIO_FETCH_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid value, using default");
            default
        }),
        None => default,
    }
}
