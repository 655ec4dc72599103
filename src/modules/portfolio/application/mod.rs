pub mod domain;
pub mod mappers;
pub mod portfolio_query_config;
pub mod ports;
pub mod service;
