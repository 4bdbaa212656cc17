//! Test doubles and common utilities for contract tests
//!
//! This module provides minimal test doubles that record what the action
//! layer asks of the outside world.

#![allow(dead_code)]

use ddns_admin_core::actions::RequestPlan;
use ddns_admin_core::logout::LogoutPlan;
use ddns_admin_core::traits::{AdminBackend, BackendResponse};
use ddns_admin_core::{Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// How the recording backend answers
#[derive(Debug, Clone)]
pub enum Reply {
    /// Accept every request
    Accept,
    /// Reject every request with this status and message
    Reject(u16, String),
}

/// An AdminBackend that records every call
pub struct RecordingBackend {
    reply: Reply,
    logout_status: u16,
    plans: Arc<Mutex<Vec<RequestPlan>>>,
    forms: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    logout_call_count: Arc<AtomicUsize>,
}

impl RecordingBackend {
    pub fn accepting() -> Self {
        Self::new(Reply::Accept, 401)
    }

    pub fn rejecting(status: u16, message: &str) -> Self {
        Self::new(Reply::Reject(status, message.to_string()), 401)
    }

    pub fn new(reply: Reply, logout_status: u16) -> Self {
        Self {
            reply,
            logout_status,
            plans: Arc::new(Mutex::new(Vec::new())),
            forms: Arc::new(Mutex::new(Vec::new())),
            logout_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Requests received so far
    pub fn plans(&self) -> Vec<RequestPlan> {
        self.plans.lock().unwrap().clone()
    }

    /// Form bodies received so far
    pub fn forms(&self) -> Vec<Vec<(String, String)>> {
        self.forms.lock().unwrap().clone()
    }

    /// Number of logout() calls
    pub fn logout_call_count(&self) -> usize {
        self.logout_call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AdminBackend for RecordingBackend {
    async fn execute(
        &self,
        plan: &RequestPlan,
        form: &[(String, String)],
    ) -> Result<BackendResponse> {
        self.plans.lock().unwrap().push(plan.clone());
        if plan.sends_form {
            self.forms.lock().unwrap().push(form.to_vec());
        }

        match &self.reply {
            Reply::Accept => Ok(BackendResponse {
                status: 200,
                redirect_to: plan.redirect_to.clone(),
            }),
            Reply::Reject(status, message) => Err(Error::backend(*status, message.clone())),
        }
    }

    async fn logout(&self, plan: &LogoutPlan) -> Result<()> {
        self.logout_call_count.fetch_add(1, Ordering::SeqCst);
        if plan.is_complete(self.logout_status) {
            Ok(())
        } else {
            Err(Error::auth(format!("got {}", self.logout_status)))
        }
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }
}

/// A request captured by the loopback server
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Serve exactly one HTTP request on a loopback port
///
/// Returns the base URL and a handle resolving to the captured request.
pub async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();

        let content_length = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let body_bytes = &buf[header_end..(header_end + content_length).min(buf.len())];

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        CapturedRequest {
            request_line,
            headers,
            body: String::from_utf8_lossy(body_bytes).to_string(),
        }
    });

    (format!("http://{}", addr), handle)
}
