pub mod generator;
pub mod state;
