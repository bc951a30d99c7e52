//! Document access checks.

pub mod checker;

pub use checker::DocumentAccessChecker;
