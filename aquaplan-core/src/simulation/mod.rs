pub mod engine;

pub use engine::{simulate_catalogue, simulate_species};
