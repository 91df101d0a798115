#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

const READ_TIMEOUT: Duration = Duration::from_millis(500);
const MAX_READ_DURATION: Duration = Duration::from_secs(6);
const MAX_HEADER_BYTES: usize = 64 * 1024;
const MAX_BODY_BYTES: usize = 64 * 1024;

pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub query: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("json body")
    }
}

pub struct Server {
    pub base_url: String,
    rx: mpsc::Receiver<CapturedRequest>,
    handle: thread::JoinHandle<()>,
}

impl Server {
    /// Waits for the captured request and the server thread.
    pub fn finish(self) -> CapturedRequest {
        let req = self
            .rx
            .recv_timeout(MAX_READ_DURATION)
            .expect("request captured");
        self.handle.join().expect("server thread");
        req
    }
}

/// Accepts one connection, records the request and writes `response`.
pub fn serve_once(response: impl AsRef<[u8]>) -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = mpsc::channel();
    let response = response.as_ref().to_vec();

    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let req = read_request(&mut stream);
            let _ = tx.send(req);
            let _ = stream.write_all(&response);
        }
    });

    Server {
        base_url: format!("http://{}/api", addr),
        rx,
        handle,
    }
}

pub fn response_with_body(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {status}\r\n");
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str(&format!("Content-Length: {}\r\n\r\n{}", body.len(), body));
    response
}

pub fn json_response(status: &str, body: &str) -> String {
    response_with_body(status, &[("Content-Type", "application/json")], body)
}

pub fn empty_response(status: &str) -> String {
    format!("HTTP/1.1 {status}\r\nContent-Length: 0\r\n\r\n")
}

fn read_chunk(stream: &mut TcpStream, chunk: &mut [u8], deadline: Instant) -> Option<usize> {
    loop {
        if Instant::now() >= deadline {
            return None;
        }
        match stream.read(chunk) {
            Ok(read) => return Some(read),
            Err(err)
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                ) =>
            {
                continue
            }
            Err(err) => panic!("read_request I/O error: {err}"),
        }
    }
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    stream
        .set_read_timeout(Some(READ_TIMEOUT))
        .expect("read timeout");
    let deadline = Instant::now() + MAX_READ_DURATION;
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        if buf.len() >= MAX_HEADER_BYTES {
            panic!("request headers too large");
        }
        let read = match read_chunk(stream, &mut chunk, deadline) {
            Some(0) | None => break None,
            Some(read) => read,
        };
        buf.extend_from_slice(&chunk[..read]);
        if let Some(pos) = find_header_end(&buf) {
            break Some(pos);
        }
    };

    let Some(header_end) = header_end else {
        return CapturedRequest {
            method: "<incomplete>".to_string(),
            path: String::new(),
            headers: Vec::new(),
            query: HashMap::new(),
            body: Vec::new(),
        };
    };
    let header_str = String::from_utf8_lossy(&buf[..header_end]);
    let mut lines = header_str.split("\r\n");
    let request_line = lines.next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let full_path = parts.next().unwrap_or("");

    let mut path_parts = full_path.splitn(2, '?');
    let path = path_parts.next().unwrap_or("").to_string();
    let query_str = path_parts.next().unwrap_or("");
    let mut query = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query_str.as_bytes()) {
        query.insert(key.to_string(), value.to_string());
    }

    let mut headers = Vec::new();
    let mut content_length: usize = 0;
    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("Content-Length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name.to_string(), value.to_string()));
        }
    }
    if content_length > MAX_BODY_BYTES {
        panic!("request body too large: {content_length} > {MAX_BODY_BYTES} bytes");
    }

    let mut body = buf[header_end..].to_vec();
    body.truncate(content_length);
    while body.len() < content_length {
        let read = match read_chunk(stream, &mut chunk, deadline) {
            Some(0) | None => break,
            Some(read) => read,
        };
        let take = read.min(content_length - body.len());
        body.extend_from_slice(&chunk[..take]);
    }
    if body.len() < content_length {
        panic!(
            "read_request body incomplete: expected {content_length} bytes, got {} bytes",
            body.len()
        );
    }

    CapturedRequest {
        method,
        path,
        headers,
        query,
        body,
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
}
