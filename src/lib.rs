// lib.rs
pub mod challenge;
pub mod config;
pub mod digest;
pub mod signature;
pub mod token;
pub mod verify;

pub use token::TokenPayload;
pub use verify::{SignatureVerifier, VerifyError};
