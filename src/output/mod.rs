//! Output file writing and verification module

pub mod verifier;
pub mod writer;

pub use verifier::ClipVerifier;
pub use writer::StagedOutput;
