pub mod phase;
pub mod weather;
