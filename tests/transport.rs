use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::thread;
use std::time::Duration;

use serde::Serialize;

use powerschool::models::{
    GetStudentData, GetStudentDataResponse, GetStudentPhoto, GetStudentPhotoResponse,
    QueryIncludeListVO,
};
use powerschool::{
    AuthContext, Challenge, Credentials, Error, Operation, PortalService, Transport,
    TransportConfig, SERVICE_PATH,
};

const CHALLENGE: &str = r#"Digest realm="PublicPortal", qop="auth", nonce="abc""#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//region stub server

/// One request as received by the stub
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    target: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Canned answer, served in order, one per connection
struct Canned {
    status: u16,
    headers: Vec<(&'static str, String)>,
    body: String,
}

impl Canned {
    fn challenge() -> Self {
        Self {
            status: 401,
            headers: vec![("WWW-Authenticate", CHALLENGE.to_string())],
            body: String::new(),
        }
    }

    fn status(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    fn xml(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type", "text/xml;charset=UTF-8".to_string())],
            body: body.into(),
        }
    }
}

struct StubPortal {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl StubPortal {
    fn url(&self) -> String {
        format!("{}{}", self.base_url, SERVICE_PATH)
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for StubPortal {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn start_stub(responses: Vec<Canned>) -> StubPortal {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    listener
        .set_nonblocking(true)
        .expect("stub listener nonblocking");
    let addr = listener.local_addr().expect("stub listener addr");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_t = Arc::clone(&shutdown);
    let requests_t = Arc::clone(&requests);

    let handle = thread::spawn(move || {
        let mut pending = responses.into_iter();
        while !shutdown_t.load(Ordering::SeqCst) {
            match listener.accept() {
                Ok((mut stream, _)) => {
                    let canned = pending.next().unwrap_or_else(|| Canned::status(503));
                    // record before answering
                    if let Some(recorded) = read_request(&mut stream) {
                        requests_t.lock().expect("requests lock").push(recorded);
                        write_response(&mut stream, &canned);
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    StubPortal {
        base_url: format!("http://{}", addr),
        requests,
        shutdown,
        handle: Some(handle),
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn read_request(stream: &mut TcpStream) -> Option<Recorded> {
    stream.set_nonblocking(false).ok()?;
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .ok()?;

    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];
    let header_end = loop {
        match stream.read(&mut tmp) {
            Ok(0) | Err(_) => return None,
            Ok(n) => {
                buf.extend_from_slice(&tmp[..n]);
                if let Some(pos) = find_header_end(&buf) {
                    break pos;
                }
            }
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut req = lines.next().unwrap_or("").split_whitespace();
    let method = req.next().unwrap_or("").to_string();
    let target = req.next().unwrap_or("").to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();
    let content_len = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[(header_end + 4)..].to_vec();
    while body.len() < content_len {
        match stream.read(&mut tmp) {
            Ok(0) | Err(_) => break,
            Ok(n) => body.extend_from_slice(&tmp[..n]),
        }
    }
    body.truncate(content_len);

    Some(Recorded {
        method,
        target,
        headers,
        body,
    })
}

fn write_response(stream: &mut TcpStream, canned: &Canned) {
    let mut response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Length: {}\r\nConnection: close\r\n",
        canned.status,
        canned.body.len()
    );
    for (name, value) in &canned.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    response.push_str(&canned.body);
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

//endregion

fn envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"><soapenv:Body>{}</soapenv:Body></soapenv:Envelope>"#,
        body
    )
}

fn transport_for(stub: &StubPortal) -> Transport {
    Transport::new(
        TransportConfig::new(stub.url()).dial_timeout(Duration::from_secs(5)),
        Credentials::new("pearson", "m0bApP5"),
    )
}

/// Value of `key="..."` in a Digest header
fn digest_param<'a>(header: &'a str, key: &str) -> Option<&'a str> {
    let start = header.find(&format!("{}=\"", key))? + key.len() + 2;
    let len = header[start..].find('"')?;
    Some(&header[start..start + len])
}

#[test]
fn fault_after_digest_challenge() {
    init_tracing();
    let stub = start_stub(vec![
        Canned::challenge(),
        Canned::xml(
            500,
            envelope(
                "<soapenv:Fault><faultcode>soapenv:Server</faultcode><faultstring>bad session</faultstring></soapenv:Fault>",
            ),
        ),
    ]);
    let transport = transport_for(&stub);

    let request = GetStudentData {
        student_ids: vec![1001],
        qil: Some(QueryIncludeListVO::new([1])),
        ..Default::default()
    };
    let mut response = GetStudentDataResponse::default();
    let err = transport
        .call(
            &Operation::GetStudentData.to_string(),
            &request,
            &mut response,
        )
        .unwrap_err();

    assert!(err.is_fault(), "{:?}", err);
    assert_eq!(err.to_string(), "bad session");
    assert_eq!(response, GetStudentDataResponse::default());

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);

    let probe = &requests[0];
    assert_eq!(probe.method, "POST");
    assert_eq!(probe.target, SERVICE_PATH);
    assert_eq!(probe.header("content-type"), Some("application/json"));
    assert!(probe.header("authorization").is_none());
    assert!(probe.body.is_empty());

    let call = &requests[1];
    assert_eq!(call.method, "POST");
    assert_eq!(call.target, SERVICE_PATH);
    let content_type = r#"text/xml; charset="utf-8""#;
    assert_eq!(call.header("content-type"), Some(content_type));
    assert_eq!(call.header("soapaction"), Some("urn:getStudentData"));
    let user_agent = call.header("user-agent").unwrap_or("");
    assert!(user_agent.starts_with("powerschool/"));
    let payload = r#"<getStudentData xmlns="http://publicportal.rest.powerschool.pearson.com/xsd"><studentIDs>1001</studentIDs>"#;
    assert!(call.body_text().contains(payload));

    let authorization = call.header("authorization").expect("authorization");
    let prefix = r#"Digest username="pearson", realm="PublicPortal", nonce="abc", uri="", cnonce=""#;
    assert!(authorization.starts_with(prefix));
    assert!(authorization.contains(", nc=00000001, qop=auth, response=\""));

    // the response must match the challenge and the client nonce that was sent
    let cnonce = digest_param(authorization, "cnonce").expect("cnonce");
    let credentials = Credentials::new("pearson", "m0bApP5");
    let mut context = AuthContext::new(&credentials, "");
    context.set_custom_cnonce(cnonce);
    let expected = Challenge::parse(CHALLENGE).respond(&context).to_string();
    assert_eq!(authorization, expected);
}

#[test]
fn no_challenge_still_authenticates() {
    init_tracing();
    let stub = start_stub(vec![
        Canned::status(200),
        Canned::xml(
            200,
            envelope(
                r#"<ns:getStudentPhotoResponse xmlns:ns="http://publicportal.rest.powerschool.pearson.com/xsd"><ns:return>aGVsbG8=</ns:return></ns:getStudentPhotoResponse>"#,
            ),
        ),
    ]);
    let transport = transport_for(&stub);

    let request = GetStudentPhoto {
        student_id: Some(1001),
        ..Default::default()
    };
    let mut response = GetStudentPhotoResponse::default();
    transport.call("", &request, &mut response).unwrap();

    assert_eq!(response.result.as_deref(), Some("aGVsbG8="));

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);

    let call = &requests[1];
    assert!(call.header("soapaction").is_none());
    let authorization = call.header("authorization").expect("authorization");
    let prefix = r#"Digest username="pearson", realm="", nonce="", uri="""#;
    assert!(authorization.starts_with(prefix));
    assert!(authorization.contains(", qop=, response=\""));
}

#[test]
fn empty_response_keeps_slot() {
    init_tracing();
    let stub = start_stub(vec![Canned::challenge(), Canned::status(200)]);
    let transport = transport_for(&stub);

    let mut response = GetStudentPhotoResponse {
        result: Some("unchanged".to_string()),
    };
    transport
        .call(
            &Operation::GetStudentPhoto.to_string(),
            &GetStudentPhoto::default(),
            &mut response,
        )
        .unwrap();

    assert_eq!(response.result.as_deref(), Some("unchanged"));
    assert_eq!(stub.requests().len(), 2);
}

#[test]
fn configured_nonce_count_is_sent() {
    init_tracing();
    let stub = start_stub(vec![Canned::challenge(), Canned::status(200)]);
    let transport = Transport::new(
        TransportConfig::new(stub.url()).nonce_count(2),
        Credentials::new("pearson", "m0bApP5"),
    );

    let mut response = GetStudentPhotoResponse::default();
    transport
        .call(
            "urn:getStudentPhoto",
            &GetStudentPhoto::default(),
            &mut response,
        )
        .unwrap();

    let requests = stub.requests();
    let authorization = requests[1]
        .header("authorization")
        .expect("authorization header");
    assert!(authorization.contains(", nc=00000002, "));
}

#[test]
fn html_error_page_is_malformed() {
    init_tracing();
    let stub = start_stub(vec![
        Canned::challenge(),
        Canned::xml(502, "<html><body>Bad Gateway</body></html>"),
    ]);
    let transport = transport_for(&stub);

    let mut response = GetStudentPhotoResponse::default();
    let err = transport
        .call(
            "urn:getStudentPhoto",
            &GetStudentPhoto::default(),
            &mut response,
        )
        .unwrap_err();

    assert!(matches!(err, Error::MalformedEnvelope(_)), "{:?}", err);
}

#[test]
fn connection_refused_is_transport_error() {
    init_tracing();
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let transport = Transport::new(
        TransportConfig::new(format!("http://127.0.0.1:{}{}", port, SERVICE_PATH))
            .dial_timeout(Duration::from_secs(2)),
        Credentials::new("pearson", "m0bApP5"),
    );

    let mut response = GetStudentPhotoResponse::default();
    let err = transport
        .call(
            "urn:getStudentPhoto",
            &GetStudentPhoto::default(),
            &mut response,
        )
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "{:?}", err);
}

/// Request whose field name is not a valid XML name
#[derive(Serialize)]
#[serde(rename = "getStudentPhoto")]
struct UnencodableRequest {
    #[serde(rename = "student id")]
    student_id: i64,
}

#[test]
fn unencodable_request_sends_nothing() {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.set_nonblocking(true).expect("listener nonblocking");
    let addr = listener.local_addr().expect("addr");
    let transport = Transport::new(
        TransportConfig::new(format!("http://{}{}", addr, SERVICE_PATH)),
        Credentials::new("pearson", "m0bApP5"),
    );

    let mut response = GetStudentPhotoResponse {
        result: Some("unchanged".to_string()),
    };
    let err = transport
        .call(
            "urn:getStudentPhoto",
            &UnencodableRequest { student_id: 1001 },
            &mut response,
        )
        .unwrap_err();

    assert!(matches!(err, Error::Serialization(_)), "{:?}", err);
    assert_eq!(response.result.as_deref(), Some("unchanged"));
    match listener.accept() {
        Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {}
        Err(e) => panic!("accept failed: {}", e),
        Ok((_, peer)) => panic!("unexpected connection from {}", peer),
    }
}

const LOGIN_OK: &str = r#"<ns:loginToPublicPortalResponse xmlns:ns="http://publicportal.rest.powerschool.pearson.com/xsd"><ns:return>
<userSessionVO>
  <serverCurrentTime>2019-08-30T10:15:00.000-07:00</serverCurrentTime>
  <serverInfo><apiVersion>2.1.1</apiVersion><timeZoneName>America/Denver</timeZoneName></serverInfo>
  <serviceTicket>ST-abc</serviceTicket>
  <studentIDs>1001</studentIDs>
  <userId>55</userId>
  <userType>2</userType>
</userSessionVO>
</ns:return></ns:loginToPublicPortalResponse>"#;

#[test]
fn portal_get_student() {
    init_tracing();
    let stub = start_stub(vec![
        Canned::challenge(),
        Canned::xml(200, envelope(LOGIN_OK)),
        Canned::challenge(),
        Canned::xml(
            200,
            envelope(
                r#"<ns:getStudentDataResponse xmlns:ns="http://publicportal.rest.powerschool.pearson.com/xsd"><ns:return><studentDataVOs>
<student><firstName>Ada</firstName><lastName>Lovelace</lastName><id>1001</id></student>
<studentId>1001</studentId>
</studentDataVOs></ns:return></ns:getStudentDataResponse>"#,
            ),
        ),
    ]);

    let portal = PortalService::for_server(&format!("{}/", stub.base_url));
    let student = portal.get_student("parent", "secret").unwrap();

    let record = student.student.expect("student record");
    assert_eq!(record.first_name.as_deref(), Some("Ada"));
    assert_eq!(student.student_id, Some(1001));

    let requests = stub.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests.iter().all(|r| r.target == SERVICE_PATH));

    let login = &requests[1];
    assert_eq!(login.header("soapaction"), Some("urn:loginToPublicPortal"));
    assert!(login
        .body_text()
        .contains("<username>parent</username><password>secret</password>"));

    let data = &requests[3];
    assert_eq!(data.header("soapaction"), Some("urn:getStudentData"));
    let body = data.body_text();
    assert!(body.contains("<serviceTicket>ST-abc</serviceTicket>"));
    assert!(body.contains("<userId>55</userId>"));
    assert!(body.contains("<apiVersion>2.1.1</apiVersion>"));
    assert!(!body.contains("timeZoneName"));
    let tail = "</userSessionVO><studentIDs>1001</studentIDs><qil><includes>1</includes></qil>";
    assert!(body.contains(tail));
}

#[test]
fn portal_login_rejected() {
    init_tracing();
    let stub = start_stub(vec![
        Canned::challenge(),
        Canned::xml(
            200,
            envelope(
                r#"<ns:loginToPublicPortalResponse xmlns:ns="http://publicportal.rest.powerschool.pearson.com/xsd"><ns:return>
<messageVOs><description>Invalid username or password</description><msgCode>1</msgCode><title>Login failed</title></messageVOs>
</ns:return></ns:loginToPublicPortalResponse>"#,
            ),
        ),
    ]);

    let portal = PortalService::for_server(&stub.base_url);
    let err = portal
        .create_user_session_and_student("parent", "wrong")
        .unwrap_err();

    assert!(matches!(err, Error::Rejected { .. }), "{:?}", err);
    assert_eq!(
        err.to_string(),
        "error: Login failed - Invalid username or password"
    );
    assert_eq!(stub.requests().len(), 2);
}
