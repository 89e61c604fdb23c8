//! Trait implementations

mod decompose;
mod frames;
