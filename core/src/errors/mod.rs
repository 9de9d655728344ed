//! Domain-specific error types and error handling.

use thiserror::Error;

/// Key generation and encoding errors
///
/// A failure here means the cryptographic backend could not produce or
/// encode key material. During process startup (initial key generation)
/// this is fatal; during request handling it fails only that request.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Key generation failed: {message}")]
    GenerationFailed { message: String },

    #[error("Key encoding failed: {message}")]
    EncodingFailed { message: String },
}

/// Token issuance errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signing failed: {message}")]
    SigningFailed { message: String },
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;
