//! SOAP 1.1 envelope codec.
//!
//! Requests are written with quick-xml's serde serializer; responses are
//! scanned with a namespace-aware reader so the Body's single element can be
//! classified (payload or Fault) before anything is deserialized.

use crate::{Error, Result};
use std::fmt::{self, Display, Formatter};
use std::ops::Range;

use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::{NsReader, Reader};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

/// Namespace of the Envelope, Body and Fault elements
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

//region Fault

/// Protocol-level error returned by the service in place of a result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fault {
    /// `faultcode`
    pub code: Option<String>,
    /// `faultstring`
    pub message: Option<String>,
    /// `faultactor`
    pub actor: Option<String>,
    /// `detail`, as the raw inner markup
    pub detail: Option<String>,
}

impl Display for Fault {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.code) {
            (Some(message), _) => f.write_str(message),
            (None, Some(code)) => write!(f, "SOAP fault {}", code),
            (None, None) => f.write_str("SOAP fault"),
        }
    }
}

impl std::error::Error for Fault {}

//endregion

/// What a response Body carried
#[derive(Debug, PartialEq)]
pub enum Outcome<T> {
    /// The service returned a Fault
    Fault(Fault),
    /// The service returned a result element
    Payload(T),
    /// Nothing to decode: zero-length response or an empty Body
    Empty,
}

//region encoding

#[derive(Serialize)]
#[serde(rename = "soap:Envelope")]
struct RequestEnvelope<'a, T> {
    #[serde(rename = "@xmlns:soap")]
    xmlns: &'static str,
    #[serde(rename = "soap:Body")]
    body: RequestBody<'a, T>,
}

#[derive(Serialize)]
struct RequestBody<'a, T> {
    // element named after the payload type
    #[serde(rename = "$value")]
    content: &'a T,
}

/// Wrap `request` in a SOAP envelope and serialize it.
///
/// The payload's element name and namespace come from its own serde
/// definition (`#[serde(rename = "...")]` and an `@xmlns` field).
pub fn encode<T: Serialize>(request: &T) -> Result<Vec<u8>> {
    let envelope = RequestEnvelope {
        xmlns: SOAP_ENV_NS,
        body: RequestBody { content: request },
    };

    Ok(quick_xml::se::to_string(&envelope)?.into_bytes())
}

//endregion

//region decoding

/// Result of scanning the Body children, as byte ranges into the document
#[derive(Debug, PartialEq)]
enum BodyContent {
    Empty,
    Fault(Range<usize>),
    Payload(Range<usize>),
}

fn malformed(what: &str) -> Error {
    Error::MalformedEnvelope(what.to_string())
}

fn is_soap(ns: &ResolveResult<'_>) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == SOAP_ENV_NS.as_bytes())
}

/// Locate the element carried by the Body without decoding it.
///
/// A Fault ends the scan immediately. Two or more non-Fault elements are
/// rejected once the Body is closed and no Fault turned up; otherwise the
/// rest of the document is checked by [`finish_envelope`].
fn scan_body(xml: &str) -> Result<BodyContent> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        let soap = is_soap(&ns);
        match event {
            Event::Start(e) if soap && e.local_name().as_ref() == b"Envelope" => break,
            Event::Start(_) | Event::Empty(_) => {
                return Err(malformed("root element is not a SOAP Envelope"))
            }
            Event::Eof => return Err(malformed("missing SOAP Envelope")),
            _ => {}
        }
    }

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        let soap = is_soap(&ns);
        match event {
            Event::Start(e) if soap && e.local_name().as_ref() == b"Body" => break,
            Event::Empty(e) if soap && e.local_name().as_ref() == b"Body" => {
                finish_envelope(&mut reader)?;
                return Ok(BodyContent::Empty);
            }
            // Header, or anything else preceding the Body
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
            }
            Event::End(_) | Event::Eof => return Err(malformed("missing SOAP Body")),
            _ => {}
        }
    }

    let mut payload: Option<Range<usize>> = None;
    let mut elements = 0usize;

    loop {
        let start = reader.buffer_position() as usize;
        let (ns, event) = reader.read_resolved_event()?;
        let soap = is_soap(&ns);
        let is_fault = match event {
            Event::Start(ref e) => {
                let is_fault = soap && e.local_name().as_ref() == b"Fault";
                reader.read_to_end(e.name())?;
                is_fault
            }
            Event::Empty(ref e) => soap && e.local_name().as_ref() == b"Fault",
            Event::End(_) => break,
            Event::Eof => return Err(malformed("unexpected end of document inside SOAP Body")),
            _ => continue,
        };
        let span = start..reader.buffer_position() as usize;

        if is_fault {
            return Ok(BodyContent::Fault(span));
        }

        elements += 1;
        if payload.is_none() {
            payload = Some(span);
        }
    }

    match payload {
        None => {
            finish_envelope(&mut reader)?;
            Ok(BodyContent::Empty)
        }
        Some(_) if elements > 1 => Err(malformed("body is not single-payload compliant")),
        Some(span) => {
            finish_envelope(&mut reader)?;
            Ok(BodyContent::Payload(span))
        }
    }
}

/// Read past the closed Body to the end of the document.
///
/// The Envelope may carry further elements after the Body but not a second
/// Body, and nothing but comments or processing instructions may follow it.
fn finish_envelope(reader: &mut NsReader<&[u8]>) -> Result<()> {
    loop {
        let (ns, event) = reader.read_resolved_event()?;
        let soap = is_soap(&ns);
        match event {
            Event::Start(e) | Event::Empty(e) if soap && e.local_name().as_ref() == b"Body" => {
                return Err(malformed("more than one SOAP Body"))
            }
            Event::Start(e) => {
                reader.read_to_end(e.name())?;
            }
            Event::End(_) => break,
            Event::Eof => return Err(malformed("unexpected end of document inside SOAP Envelope")),
            _ => {}
        }
    }

    loop {
        match reader.read_event()? {
            Event::Start(_) | Event::Empty(_) | Event::Text(_) | Event::CData(_) => {
                return Err(malformed("content after SOAP Envelope"))
            }
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

/// Read the fields of a `<Fault>` element
fn parse_fault(xml: &str) -> Result<Fault> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut fault = Fault::default();

    loop {
        match reader.read_event()? {
            Event::Start(_) => break,
            Event::Empty(_) | Event::Eof => return Ok(fault),
            _ => {}
        }
    }

    loop {
        let (name, raw) = match reader.read_event()? {
            Event::Start(e) => {
                let raw = reader.read_text(e.name())?;
                (e.local_name().as_ref().to_vec(), raw.trim().to_string())
            }
            Event::Empty(e) => (e.local_name().as_ref().to_vec(), String::new()),
            Event::End(_) | Event::Eof => break,
            _ => continue,
        };

        match name.as_slice() {
            b"faultcode" => fault.code = Some(character_data(&raw)?),
            b"faultstring" => fault.message = Some(character_data(&raw)?),
            b"faultactor" => fault.actor = Some(character_data(&raw)?),
            b"detail" => fault.detail = Some(raw),
            _ => {}
        }
    }

    Ok(fault)
}

/// Text of a simple element: escaped text is unescaped, CDATA sections are
/// taken as written
fn character_data(raw: &str) -> Result<String> {
    const CDATA_OPEN: &str = "<![CDATA[";
    const CDATA_CLOSE: &str = "]]>";

    let mut text = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find(CDATA_OPEN) {
        text.push_str(&unescape(&rest[..open])?);
        let section = &rest[open + CDATA_OPEN.len()..];
        let close = section
            .find(CDATA_CLOSE)
            .ok_or_else(|| malformed("unterminated CDATA section"))?;
        text.push_str(&section[..close]);
        rest = &section[close + CDATA_CLOSE.len()..];
    }
    text.push_str(&unescape(rest)?);

    Ok(text)
}

/// Decode a response envelope into an explicit outcome.
///
/// # Errors
/// `MalformedEnvelope` if the document is not well-formed, has no SOAP
/// Envelope/Body, carries more than one payload element, or the payload does
/// not fit `T`.
pub fn decode_outcome<T: DeserializeOwned>(bytes: &[u8]) -> Result<Outcome<T>> {
    if bytes.is_empty() {
        return Ok(Outcome::Empty);
    }

    let xml = std::str::from_utf8(bytes).map_err(|e| Error::MalformedEnvelope(e.to_string()))?;
    // spans are offsets into the text the reader saw, which excludes the BOM
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);

    let outcome = match scan_body(xml)? {
        BodyContent::Empty => Outcome::Empty,
        BodyContent::Fault(span) => Outcome::Fault(parse_fault(&xml[span])?),
        BodyContent::Payload(span) => {
            Outcome::Payload(quick_xml::de::from_str(xml[span].trim_start())?)
        }
    };

    trace!(
        "decoded envelope: {}",
        match outcome {
            Outcome::Fault(_) => "fault",
            Outcome::Payload(_) => "payload",
            Outcome::Empty => "empty",
        }
    );

    Ok(outcome)
}

/// Decode a response envelope into `response`.
///
/// A payload replaces `response`; an empty response leaves it untouched; a
/// Fault is returned as [`Error::Fault`](../enum.Error.html#variant.Fault)
/// and leaves it untouched.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], response: &mut T) -> Result<()> {
    match decode_outcome(bytes)? {
        Outcome::Payload(value) => {
            *response = value;
            Ok(())
        }
        Outcome::Empty => Ok(()),
        Outcome::Fault(fault) => Err(Error::Fault(fault)),
    }
}

//endregion

//region TESTS

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename = "lookup", default)]
    struct Lookup {
        name: String,
        ids: Vec<i64>,
        active: bool,
    }

    fn sample() -> Lookup {
        Lookup {
            name: "Fish & Chips <ltd>".to_string(),
            ids: vec![4, 8, 15],
            active: true,
        }
    }

    fn wrap(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>{}</soapenv:Body>
</soapenv:Envelope>"#,
            body
        )
    }

    #[test]
    fn test_encode_shape() {
        let bytes = encode(&sample()).unwrap();
        let xml = String::from_utf8(bytes).unwrap();

        assert!(xml.starts_with(
            r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><lookup>"#
        ));
        assert!(xml.ends_with("</lookup></soap:Body></soap:Envelope>"));
        assert!(xml.contains("<name>Fish &amp; Chips &lt;ltd"));
        assert!(xml.contains("<ids>4</ids><ids>8</ids><ids>15</ids>"));
    }

    #[test]
    fn test_round_trip() {
        let bytes = encode(&sample()).unwrap();
        let mut slot = Lookup::default();
        decode(&bytes, &mut slot).unwrap();
        assert_eq!(slot, sample());
    }

    #[test]
    fn test_payload_with_header_and_whitespace() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Header><session>1</session></soapenv:Header>
  <soapenv:Body>
    <!-- result -->
    <lookup xmlns="urn:test">
      <name>x</name>
      <ids>1</ids>
      <active>false</active>
    </lookup>
  </soapenv:Body>
</soapenv:Envelope>"#;

        let outcome: Outcome<Lookup> = decode_outcome(xml.as_bytes()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Payload(Lookup {
                name: "x".to_string(),
                ids: vec![1],
                active: false,
            })
        );
    }

    #[test]
    fn test_fault() {
        let xml = wrap(
            r#"<soapenv:Fault>
      <faultcode>soapenv:Server</faultcode>
      <faultstring>bad &amp; expired session</faultstring>
      <faultactor>portal</faultactor>
      <detail><code>42</code></detail>
    </soapenv:Fault>"#,
        );

        let mut slot = sample();
        let err = decode(xml.as_bytes(), &mut slot).unwrap_err();

        assert_eq!(slot, sample());
        assert_eq!(err.to_string(), "bad & expired session");
        assert_eq!(
            err.fault(),
            Some(&Fault {
                code: Some("soapenv:Server".to_string()),
                message: Some("bad & expired session".to_string()),
                actor: Some("portal".to_string()),
                detail: Some("<code>42</code>".to_string()),
            })
        );
    }

    #[test]
    fn test_fault_cdata() {
        let xml = wrap(
            r#"<soapenv:Fault>
      <faultcode><![CDATA[soapenv:Server]]></faultcode>
      <faultstring>login &amp; <![CDATA[bad <session> & ticket]]> expired</faultstring>
      <detail><![CDATA[<raw/>]]></detail>
    </soapenv:Fault>"#,
        );

        let err = decode(xml.as_bytes(), &mut Lookup::default()).unwrap_err();
        let fault = err.fault().unwrap();

        assert_eq!(fault.code.as_deref(), Some("soapenv:Server"));
        assert_eq!(
            fault.message.as_deref(),
            Some("login & bad <session> & ticket expired")
        );
        assert_eq!(fault.detail.as_deref(), Some("<![CDATA[<raw/>]]>"));
        assert_eq!(err.to_string(), "login & bad <session> & ticket expired");
    }

    #[test]
    fn test_fault_wins_over_siblings() {
        let first = wrap(
            r#"<soapenv:Fault><faultstring>first</faultstring></soapenv:Fault><lookup><name>x</name></lookup>"#,
        );
        let outcome: Outcome<Lookup> = decode_outcome(first.as_bytes()).unwrap();
        assert!(matches!(outcome, Outcome::Fault(ref f) if f.message.as_deref() == Some("first")));

        let last = wrap(
            r#"<lookup><name>x</name></lookup><lookup><name>y</name></lookup><soapenv:Fault><faultcode>Client</faultcode></soapenv:Fault>"#,
        );
        let mut slot = Lookup::default();
        let err = decode(last.as_bytes(), &mut slot).unwrap_err();
        assert!(err.is_fault());
        assert_eq!(err.to_string(), "SOAP fault Client");
        assert_eq!(slot, Lookup::default());
    }

    #[test]
    fn test_unqualified_fault_is_payload() {
        #[derive(Debug, Default, PartialEq, Deserialize)]
        #[serde(default)]
        struct Anything {
            faultstring: String,
        }

        let xml = wrap("<Fault><faultstring>not soap</faultstring></Fault>");
        let outcome: Outcome<Anything> = decode_outcome(xml.as_bytes()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Payload(Anything {
                faultstring: "not soap".to_string()
            })
        );
    }

    #[test]
    fn test_two_payloads_rejected() {
        let xml = wrap("<lookup><name>x</name></lookup><lookup><name>y</name></lookup>");
        let mut slot = Lookup::default();
        let err = decode(xml.as_bytes(), &mut slot).unwrap_err();

        assert!(matches!(err, Error::MalformedEnvelope(ref m) if m.contains("single-payload")));
        assert_eq!(slot, Lookup::default());
    }

    #[test]
    fn test_leading_bom() {
        let xml = "\u{feff}<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\"><s:Body><lookup><name>x</name></lookup></s:Body></s:Envelope>";

        let outcome: Outcome<Lookup> = decode_outcome(xml.as_bytes()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Payload(Lookup {
                name: "x".to_string(),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_trailing_content_rejected() {
        let envelope_ns = r#"xmlns:s="http://schemas.xmlsoap.org/soap/envelope/""#;
        let mut slot = Lookup::default();

        for xml in [
            format!(
                "<s:Envelope {}><s:Body><lookup/></s:Body></s:Envelope><lookup/>",
                envelope_ns
            ),
            format!(
                "<s:Envelope {}><s:Body><lookup/></s:Body><s:Body><lookup/><lookup/></s:Body></s:Envelope>",
                envelope_ns
            ),
            format!(
                "<s:Envelope {}><s:Body/><s:Body><lookup/></s:Body></s:Envelope>",
                envelope_ns
            ),
        ] {
            let err = decode(xml.as_bytes(), &mut slot).unwrap_err();
            assert!(
                matches!(err, Error::MalformedEnvelope(_)),
                "{} -> {:?}",
                xml,
                err
            );
        }

        // trailing elements inside the Envelope and comments after it are fine
        let xml = format!(
            "<s:Envelope {}><s:Body><lookup><name>x</name></lookup></s:Body><trailer/></s:Envelope>\n<!-- served -->\n",
            envelope_ns
        );
        decode(xml.as_bytes(), &mut slot).unwrap();
        assert_eq!(slot.name, "x");
    }

    #[test]
    fn test_empty_response_keeps_slot() {
        let mut slot = sample();
        decode(b"", &mut slot).unwrap();
        assert_eq!(slot, sample());

        let xml = wrap("");
        decode(xml.as_bytes(), &mut slot).unwrap();
        assert_eq!(slot, sample());

        let xml = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"><s:Body/></s:Envelope>"#;
        decode(xml.as_bytes(), &mut slot).unwrap();
        assert_eq!(slot, sample());
    }

    #[test]
    fn test_malformed() {
        let mut slot = Lookup::default();

        for xml in [
            "this is not xml",
            "<html><body>gateway timeout</body></html>",
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"></soapenv:Envelope>"#,
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"><soapenv:Body><lookup>"#,
            r#"<Envelope><Body><lookup/></Body></Envelope>"#,
        ] {
            let err = decode(xml.as_bytes(), &mut slot).unwrap_err();
            assert!(
                matches!(err, Error::MalformedEnvelope(_)),
                "{} -> {:?}",
                xml,
                err
            );
        }
    }
}

//endregion
