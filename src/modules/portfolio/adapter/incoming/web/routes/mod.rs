mod get_portfolio;
mod get_portfolio_metadata;

pub use get_portfolio::*;
pub use get_portfolio_metadata::*;
