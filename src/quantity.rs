#[macro_use]
pub mod macros;

pub mod cost;
pub mod emissions;
pub mod energy;
pub mod power;
pub mod proportions;
pub mod rate;
pub mod time;
