pub mod client;
pub mod config;
pub mod openweather;
pub mod state;
pub mod weather;
