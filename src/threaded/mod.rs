//! Multi-threaded concordance.
//!
//! Wraps the sequential kernel with parallel execution across outer
//! indices. Thread count adapts to matrix size - small matrices use fewer
//! threads to avoid overhead.

pub mod concordance_mt;
