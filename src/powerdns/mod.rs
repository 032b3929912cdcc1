pub mod change;
pub mod client;
pub mod flatten;
pub mod transport;
pub mod types;
