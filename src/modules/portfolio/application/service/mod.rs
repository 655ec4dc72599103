mod get_portfolio_data_service;

pub use get_portfolio_data_service::GetPortfolioDataService;
