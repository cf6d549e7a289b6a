//! Two-phase SOAP call: an unauthenticated probe harvests the Digest
//! challenge, then the envelope is posted with the computed credentials.

use crate::config::TransportConfig;
use crate::digest::{AuthContext, Challenge, Credentials};
use crate::enums::HttpMethod;
use crate::{envelope, Error, Result};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use ureq::tls::TlsConfig;
use ureq::Agent;

const PROBE_CONTENT_TYPE: &str = "application/json";
const SOAP_CONTENT_TYPE: &str = r#"text/xml; charset="utf-8""#;

/// SOAP client transport bound to one endpoint and one set of credentials.
///
/// Holds no per-call state: every [`call`](#method.call) opens fresh
/// connections and answers a fresh challenge, so a `Transport` can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct Transport {
    config: TransportConfig,
    credentials: Credentials,
}

impl Transport {
    pub fn new(config: TransportConfig, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Agent for one call: no pooling, no status-code errors (a 401 probe
    /// and a 500 fault are both normal answers here).
    fn agent(&self) -> Agent {
        let tls = TlsConfig::builder()
            .disable_verification(self.config.skip_certificate_verification)
            .build();

        Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(self.config.dial_timeout_duration()))
            .max_idle_connections(0)
            .max_idle_connections_per_host(0)
            .tls_config(tls)
            .build()
            .into()
    }

    /// Perform one remote call.
    ///
    /// `operation` is sent as the `SOAPAction` header unless empty. On
    /// success `response` holds the decoded payload, or is unchanged if the
    /// service answered with an empty body.
    ///
    /// # Errors
    /// - `Serialization` if `request` cannot be encoded (nothing is sent)
    /// - `Transport` on any network failure in either phase
    /// - `MalformedEnvelope` if the response cannot be decoded
    /// - `Fault` if the service answered with a SOAP Fault
    pub fn call<Req, Resp>(
        &self,
        operation: &str,
        request: &Req,
        response: &mut Resp,
    ) -> Result<()>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = envelope::encode(request)?;
        let agent = self.agent();
        let url = self.config.url.as_str();

        debug!("{}: probing {} for a digest challenge", operation, url);
        let probe = agent
            .post(url)
            .header("Content-Type", PROBE_CONTENT_TYPE)
            .header("User-Agent", self.config.user_agent.as_str())
            .send_empty()?;

        let challenge = Challenge::from_headers(probe.headers());
        if challenge.is_empty() {
            warn!(
                "{}: probe answered {} without a digest challenge",
                operation,
                probe.status()
            );
        } else {
            debug!(
                "{}: probe answered {}, realm={:?} qop={:?}",
                operation,
                probe.status(),
                challenge.realm,
                challenge.qop
            );
        }
        drop(probe);

        let mut context = AuthContext::new_with_method(&self.credentials, "", HttpMethod::POST);
        context.set_nonce_count(self.config.nonce_count);
        let authorization = challenge.respond(&context).to_header_string();

        let mut soap_request = agent
            .post(url)
            .header("Content-Type", SOAP_CONTENT_TYPE)
            .header("Authorization", authorization.as_str())
            .header("User-Agent", self.config.user_agent.as_str())
            .header("Connection", "close");
        if !operation.is_empty() {
            soap_request = soap_request.header("SOAPAction", operation);
        }

        debug!("{}: sending {} byte envelope", operation, body.len());
        let mut res = soap_request.send(&body[..])?;
        let status = res.status();

        let raw = res
            .body_mut()
            .with_config()
            .limit(self.config.response_limit)
            .read_to_vec()?;
        debug!("{}: answered {} with {} bytes", operation, status, raw.len());

        if raw.is_empty() {
            warn!("{}: empty response", operation);
        }

        let decoded = envelope::decode(&raw, response);
        if let Err(Error::Fault(fault)) = &decoded {
            debug!("{}: service fault {:?}: {}", operation, fault.code, fault);
        }
        decoded
    }
}
