use crate::enums::HttpMethod;
use crate::utils::{random_cnonce, QuoteForDigest};
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use digest::Digest;
use http::header::{HeaderMap, WWW_AUTHENTICATE};
use md5::Md5;

/// Nonce count used when none is configured
pub const DEFAULT_NONCE_COUNT: u32 = 1;

/// MD5 of a string, lowercase hex
fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

//region Challenge

/// The parameters of a `WWW-Authenticate: Digest ...` prompt needed to answer it.
///
/// Fields the server did not send are left empty; the calculator does not
/// check completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Challenge {
    /// Server nonce
    pub nonce: String,
    /// Authorization realm
    pub realm: String,
    /// Quality of protection, copied verbatim (normally `auth`)
    pub qop: String,
}

impl Challenge {
    const KEYS: [&'static str; 3] = ["nonce", "realm", "qop"];

    /// Extract the challenge from response headers.
    ///
    /// A missing `WWW-Authenticate` header yields an all-empty challenge.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match headers.get(WWW_AUTHENTICATE) {
            Some(value) => Self::parse(&String::from_utf8_lossy(value.as_bytes())),
            None => Self::default(),
        }
    }

    /// Parse a `WWW-Authenticate` header value.
    ///
    /// The value is split on commas; a piece that contains a key name anywhere
    /// provides that key's value, taken from between its first pair of double
    /// quotes. Later pieces win. Unquoted pieces are ignored.
    ///
    /// This is substring matching, not a header grammar: a quoted value that
    /// contains another key's name is attributed to that key as well.
    pub fn parse(value: &str) -> Self {
        let mut challenge = Self::default();

        for piece in value.split(',') {
            for key in Self::KEYS {
                if !piece.contains(key) {
                    continue;
                }
                if let Some(quoted) = piece.split('"').nth(1) {
                    let slot = match key {
                        "nonce" => &mut challenge.nonce,
                        "realm" => &mut challenge.realm,
                        _ => &mut challenge.qop,
                    };
                    *slot = quoted.to_string();
                }
            }
        }

        challenge
    }

    /// True if the server sent none of the wanted fields
    pub fn is_empty(&self) -> bool {
        self.nonce.is_empty() && self.realm.is_empty() && self.qop.is_empty()
    }

    /// Generate an [`AuthorizationHeader`](struct.AuthorizationHeader.html) answering this challenge.
    pub fn respond<'re, 'a: 're, 'c: 're>(
        &'a self,
        context: &'c AuthContext,
    ) -> AuthorizationHeader<'re> {
        AuthorizationHeader::from_challenge(self, context)
    }
}

impl FromStr for Challenge {
    type Err = std::convert::Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(input))
    }
}

//endregion

//region Credentials

/// Login pair presented to the service; fixed for the lifetime of a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

//endregion

//region AuthContext

/// Login attempt context
///
/// All fields are borrowed; the struct is meant to live for one request.
#[derive(Debug)]
pub struct AuthContext<'a> {
    /// Login username
    pub username: &'a str,
    /// Login password (plain)
    pub password: &'a str,
    /// Requested URI. The portal does not bind credentials to the path, so
    /// the transport always passes an empty string here.
    pub uri: &'a str,
    /// HTTP method used (defaults to POST)
    pub method: HttpMethod<'a>,
    /// Nonce count, sent as eight hex digits
    pub nc: u32,
    /// Spoofed client nonce (use only for tests; a random nonce is generated otherwise)
    pub cnonce: Option<&'a str>,
}

impl<'a> AuthContext<'a> {
    /// Construct a context for a POST to `uri` with the default nonce count
    pub fn new(credentials: &'a Credentials, uri: &'a str) -> Self {
        Self::new_with_method(credentials, uri, HttpMethod::POST)
    }

    /// Construct a context with an arbitrary verb
    pub fn new_with_method(
        credentials: &'a Credentials,
        uri: &'a str,
        method: HttpMethod<'a>,
    ) -> Self {
        Self {
            username: credentials.login(),
            password: credentials.password(),
            uri,
            method,
            nc: DEFAULT_NONCE_COUNT,
            cnonce: None,
        }
    }

    pub fn set_custom_cnonce<'x: 'a>(&mut self, cnonce: &'x str) {
        self.cnonce = Some(cnonce);
    }

    pub fn set_nonce_count(&mut self, nc: u32) {
        self.nc = nc;
    }
}

//endregion

//region AuthorizationHeader

/// Header sent back to the server, including the password hash.
///
/// Obtained with [`AuthorizationHeader::from_challenge()`](#method.from_challenge)
/// or [`Challenge::respond()`](struct.Challenge.html#method.respond).
#[derive(Debug)]
pub struct AuthorizationHeader<'ctx> {
    /// The prompt being answered; supplies realm, nonce and qop
    pub challenge: &'ctx Challenge,
    /// Login name
    pub username: String,
    /// Requested URI
    pub uri: &'ctx str,
    /// Client nonce
    pub cnonce: String,
    /// Nonce count
    pub nc: u32,
    /// Computed digest
    pub response: String,
}

impl<'a> AuthorizationHeader<'a> {
    /// Compute the RFC 2617 `qop=auth` answer:
    ///
    /// ```text
    /// HA1 = MD5(login:realm:password)
    /// HA2 = MD5(method:uri)
    /// response = MD5(HA1:nonce:nc:cnonce:qop:HA2)
    /// ```
    pub fn from_challenge<'p: 'a, 's: 'a>(
        challenge: &'p Challenge,
        context: &'s AuthContext,
    ) -> AuthorizationHeader<'a> {
        let cnonce = match context.cnonce {
            Some(cnonce) => cnonce.to_owned(),
            None => random_cnonce(),
        };

        let ha1 = md5_hex(&format!(
            "{name}:{realm}:{pw}",
            name = context.username,
            realm = challenge.realm,
            pw = context.password
        ));
        let ha2 = md5_hex(&format!(
            "{method}:{uri}",
            method = context.method,
            uri = context.uri
        ));

        let response = md5_hex(&format!(
            "{ha1}:{nonce}:{nc:08x}:{cnonce}:{qop}:{ha2}",
            ha1 = ha1,
            nonce = challenge.nonce,
            nc = context.nc,
            cnonce = cnonce,
            qop = challenge.qop,
            ha2 = ha2
        ));

        AuthorizationHeader {
            challenge,
            username: context.username.to_owned(),
            uri: context.uri,
            cnonce,
            nc: context.nc,
            response,
        }
    }

    /// Produce a header string (also accessible through the Display trait)
    pub fn to_header_string(&self) -> String {
        self.to_string()
    }
}

impl<'a> Display for AuthorizationHeader<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Digest username=\"{}\", realm=\"{}\", nonce=\"{}\", uri=\"{}\"",
            self.username.quote_for_digest(),
            self.challenge.realm.quote_for_digest(),
            self.challenge.nonce.quote_for_digest(),
            self.uri.quote_for_digest()
        )?;
        write!(
            f,
            ", cnonce=\"{cnonce}\", nc={nc:08x}, qop={qop}, response=\"{response}\"",
            cnonce = self.cnonce.quote_for_digest(),
            nc = self.nc,
            qop = self.challenge.qop,
            response = self.response
        )
    }
}

//endregion

/// Value for the `Authorization` header answering `challenge`, with a fresh
/// random client nonce and the default nonce count.
pub fn compute_authorization_header(
    challenge: &Challenge,
    credentials: &Credentials,
    method: HttpMethod,
    uri: &str,
) -> String {
    let context = AuthContext::new_with_method(credentials, uri, method);
    challenge.respond(&context).to_header_string()
}

//region TESTS


//endregion
