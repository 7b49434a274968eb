#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Core domain models for the booking service.
///
/// The models are plain data with the minimum of logic needed to keep them
/// consistent: most notably, [`models::Stay`] owns the derivation of a
/// booking's checkout date.
pub mod models;

/// The availability engine.
///
/// Decides whether a candidate booking or extension may be committed, given
/// the bookings that already exist.
pub mod engine;

/// Interface traits for the booking service.
///
/// These are the "ports" in the hexagonal architecture pattern: they define
/// the contract between the domain logic and the storage adapters without
/// specifying implementation details.
pub mod ports;

/// High-level booking operations that combine the engine with a repository.
pub mod service;
