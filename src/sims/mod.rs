//! Shipped simulation kits: a life story and a multiplication chain.

pub mod life;
pub mod multiplication;

pub use life::LifeSim;
pub use multiplication::MultiplicationSim;
