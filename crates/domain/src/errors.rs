use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),
}

/// Why a single resolution step produced no value.
///
/// The resolver treats every variant the same way (the step failed); the
/// variants exist for the trace and for callers that want to tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Timeout querying {server}")]
    Timeout { server: IpAddr },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: IpAddr, reason: String },

    #[error("Resolution failed at {server}: no answer, glue or resolvable delegation")]
    EmptyResult { server: IpAddr },

    #[error("Depth limit reached ({depth} >= {limit})")]
    DepthExceeded { depth: u8, limit: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorKind {
    Timeout,
    Transport,
    EmptyResult,
    DepthExceeded,
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::Timeout { .. } => ResolveErrorKind::Timeout,
            ResolveError::Transport { .. } => ResolveErrorKind::Transport,
            ResolveError::EmptyResult { .. } => ResolveErrorKind::EmptyResult,
            ResolveError::DepthExceeded { .. } => ResolveErrorKind::DepthExceeded,
        }
    }

    pub fn transport(server: IpAddr, reason: impl std::fmt::Display) -> Self {
        ResolveError::Transport {
            server,
            reason: reason.to_string(),
        }
    }
}
