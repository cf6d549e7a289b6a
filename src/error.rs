use std::result;

use quick_xml::errors::serialize::{DeError, SeError};
use thiserror::Error;

use crate::envelope::Fault;

#[derive(Debug, Error)]
pub enum Error {
    /// The request payload could not be written as XML. No I/O was attempted.
    #[error("Cannot serialize request: {0}")]
    Serialization(#[from] SeError),

    /// DNS, connect, TLS, timeout or I/O failure in either phase of a call.
    #[error("Transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body is not a usable SOAP envelope.
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The service answered with a SOAP Fault; displays the fault message only.
    #[error("{0}")]
    Fault(Fault),

    /// The service answered with a message list instead of the expected result.
    #[error("error: {title} - {description}")]
    Rejected { title: String, description: String },

    /// A response lacked a field required to continue.
    #[error("Missing \"{0}\" in service response")]
    MissingData(&'static str),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// The fault carried by this error, if the service produced one
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Error::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    pub fn is_fault(&self) -> bool {
        self.fault().is_some()
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::MalformedEnvelope(e.to_string())
    }
}

impl From<DeError> for Error {
    fn from(e: DeError) -> Self {
        Error::MalformedEnvelope(e.to_string())
    }
}

impl From<quick_xml::escape::EscapeError> for Error {
    fn from(e: quick_xml::escape::EscapeError) -> Self {
        Error::MalformedEnvelope(e.to_string())
    }
}

impl From<Fault> for Error {
    fn from(fault: Fault) -> Self {
        Error::Fault(fault)
    }
}
