//! Test utilities and helpers for the simple-vector crates.
//!
//! This crate provides:
//! - An instrumented element type that counts constructions, clones and drops
//! - Random operation generation for differential testing against `Vec`
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency only.

pub mod op_gen;
pub mod tracked;
