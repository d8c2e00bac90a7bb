// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;

// differentiators
pub mod coefficients;
pub mod holoborodko;

pub use algorithms::Boundary;
pub use config::Abscissa;
pub use errors::DifferentiationError;
pub use holoborodko::{derivative, differentiate, HoloborodkoCfg};
