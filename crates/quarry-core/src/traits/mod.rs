//! Interfaces to external collaborators.

mod generator;

pub use generator::IGenerator;
