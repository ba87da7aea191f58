pub mod currency;
pub mod provider_sarafi;
mod rate;

pub use rate::*;
pub use provider_sarafi as sarafi;
