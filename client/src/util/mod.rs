//! Browser utilities.

pub mod storage;
