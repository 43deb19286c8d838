pub mod finance_service;
pub mod money;
pub mod roster_service;
pub mod season_service;
