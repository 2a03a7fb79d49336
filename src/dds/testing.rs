//! Shared fixtures for parser tests
//!
//! Sample DDS documents as served by real OPeNDAP endpoints, paired with
//! builders for the trees they parse into. Integration tests compare
//! parser output against these instead of re-declaring expectations
//! inline.

pub mod samples;
