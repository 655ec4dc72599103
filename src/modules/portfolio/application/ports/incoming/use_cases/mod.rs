mod get_portfolio_data;

pub use get_portfolio_data::{GetPortfolioDataError, GetPortfolioDataUseCase};
