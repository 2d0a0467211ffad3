pub mod client;

pub use client::{PortfolioApi, PortfolioClient};
