//! Binary-level test modules
