#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

pub const TODAY: &str = "2026-10-18";

pub const SAMPLE_README: &str = "# Hi there\n\
\n\
## Streak\n\
<!--START_SECTION:streak-->\n\
stale streak\n\
<!--END_SECTION:streak-->\n\
\n\
## Languages\n\
<!--START_SECTION:languages-->\n\
| Language | Usage |\n\
|----------|-------|\n\
| COBOL | 100.0% |\n\
<!--END_SECTION:languages-->\n\
\n\
<sub>Last updated: never</sub>\n";

pub fn repo(name: &str, languages: &[(&str, u64)]) -> Value {
    let edges: Vec<Value> = languages
        .iter()
        .map(|(language, size)| json!({ "size": size, "node": { "name": language, "color": null } }))
        .collect();
    json!({ "name": name, "languages": { "edges": edges } })
}

pub fn payload(days: &[(&str, u32)], total: u64, repositories: Vec<Value>) -> Value {
    let weeks: Vec<Value> = days
        .chunks(7)
        .map(|week| {
            let contribution_days: Vec<Value> = week
                .iter()
                .map(|(date, count)| json!({ "contributionCount": count, "date": date }))
                .collect();
            json!({ "contributionDays": contribution_days })
        })
        .collect();

    json!({
        "data": {
            "user": {
                "contributionsCollection": {
                    "contributionCalendar": {
                        "totalContributions": total,
                        "weeks": weeks
                    }
                },
                "repositories": { "nodes": repositories }
            }
        }
    })
}

/// Streak of 2 (today idle, two active days before a zero day) and
/// Rust 80% / Python 20% / Shell 0%.
pub fn sample_payload() -> Value {
    payload(
        &[
            ("2026-10-14", 7),
            ("2026-10-15", 0),
            ("2026-10-16", 5),
            ("2026-10-17", 3),
            ("2026-10-18", 0),
        ],
        15,
        vec![
            repo("alpha", &[("Rust", 300), ("Python", 100)]),
            repo("beta", &[]),
            json!({ "name": "gamma", "languages": null }),
            repo("delta", &[("Rust", 100), ("Shell", 0)]),
        ],
    )
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    write_file(dir, name, &serde_json::to_string_pretty(value).unwrap())
}

/// Answer a single HTTP request with `status_line` and `body`. The join
/// handle yields the raw request text.
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{addr}/graphql"), handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
