pub mod agent;
pub mod config;
pub mod game_repr;
