pub mod envelope;
pub mod weather;
