//! # Core Module
//!
//! Fundamental building blocks of the simulation: particle and bond storage, the
//! interaction potentials, neighbor enumeration, box geometry, initial chain generation and
//! trajectory output.
//!
//! - **Particle Representation** ([`models`]) - Particles, bonds, ids and snapshots
//! - **Interactions** ([`forcefield`]) - WCA pair and FENE bond forces and energies
//! - **Pair Enumeration** ([`neighbor`]) - Candidate interacting pairs
//! - **Geometry** ([`geometry`]) - Open and periodic simulation boxes
//! - **Initial Structures** ([`polymer`]) - Seeded self-avoiding chain generation
//! - **Output** ([`io`]) - VTF trajectories and observable tables

pub mod forcefield;
pub mod geometry;
pub mod io;
pub mod models;
pub mod neighbor;
pub mod polymer;
