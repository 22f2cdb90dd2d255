pub mod status;
pub mod weather;
