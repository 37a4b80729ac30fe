pub mod capture;
pub mod output;
pub mod provider;
pub mod settle;
