pub mod resolve;
pub mod set;
