//! A throwaway HTTP backend for driving the binary end to end.
//!
//! Serves a fixed roster on `GET /api/alunos` and `GET /api/turmas`, answers
//! every other request with `201 {}`, and records each request line plus body.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub const STUDENTS: &str = r#"[
  {"id": 1, "nome": "Bruno Lima", "data_nascimento": "2015-03-10", "email": "bruno@school.test", "status": "ativo", "turma_id": 10},
  {"id": 2, "nome": "ana souza", "data_nascimento": "2016-08-22", "email": "ana@school.test", "status": "ativo", "turma_id": 10},
  {"id": 3, "nome": "Carla Dias", "data_nascimento": "2014-12-01", "email": "carla@school.test", "status": "inativo", "turma_id": 11},
  {"id": 4, "nome": "Davi Rocha", "data_nascimento": "not a date", "email": "davi@school.test", "status": "ativo", "turma_id": null}
]"#;

pub const CLASSES: &str = r#"[
  {"id": 10, "nome": "Year 1 A", "capacidade": 2},
  {"id": 11, "nome": "Year 1 B", "capacidade": null}
]"#;

pub struct FakeBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle(stream, &log);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/api", port),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(stream: TcpStream, log: &Arc<Mutex<Vec<String>>>) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let request_line = request_line.trim().to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).is_err() || header.trim().is_empty() {
            break;
        }
        let lower = header.to_ascii_lowercase();
        if let Some(value) = lower.strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut body = vec![0u8; content_length];
    let _ = reader.read_exact(&mut body);
    let body = String::from_utf8_lossy(&body).to_string();

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();
    log.lock()
        .unwrap()
        .push(format!("{} {} {}", method, path, body).trim_end().to_string());

    let (status, payload) = match (method.as_str(), path.as_str()) {
        ("GET", "/api/alunos") => ("200 OK", STUDENTS),
        ("GET", "/api/turmas") => ("200 OK", CLASSES),
        ("GET", _) => ("404 Not Found", "{}"),
        _ => ("201 Created", "{}"),
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
