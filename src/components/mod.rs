pub mod footer;
pub mod hero;
pub mod navbar;
pub mod portfolio_grid;
pub mod services;
pub mod skills;
