//! Solver implementations.

pub mod spg;
