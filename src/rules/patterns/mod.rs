//! Detection patterns

pub mod bias;
