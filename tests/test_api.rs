use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use nutridb::api::{ApiClient, Disposition, classify};
use nutridb::error::ApiError;
use nutridb::models::Role;
use nutridb::session::{Session, SessionEvent, SessionStore};

#[test]
fn test_classify_success() {
    assert_eq!(classify(200, "{\"message\": \"ok\"}"), Disposition::Success);
    assert_eq!(classify(201, "{}"), Disposition::Success);
}

#[test]
fn test_classify_unauthorized_without_server_message() {
    assert_eq!(
        classify(401, "{\"msg\": \"Token has expired\"}"),
        Disposition::AuthExpired("session expired".to_string())
    );
}

#[test]
fn test_classify_unauthorized_keeps_server_message() {
    assert_eq!(
        classify(401, "{\"error\": \"Invalid email or password\"}"),
        Disposition::AuthExpired("Invalid email or password".to_string())
    );
}

#[test]
fn test_classify_forbidden_with_server_message() {
    assert_eq!(
        classify(403, "{\"error\": \"Admins only\"}"),
        Disposition::Forbidden("Admins only".to_string())
    );
}

#[test]
fn test_classify_forbidden_without_body() {
    assert_eq!(classify(403, ""), Disposition::Forbidden("forbidden".to_string()));
}

#[test]
fn test_classify_rejected_with_message() {
    assert_eq!(
        classify(409, "{\"error\": \"Email already registered\"}"),
        Disposition::Rejected("Email already registered".to_string())
    );
    assert_eq!(
        classify(404, "{\"message\": \"Recipe not found\"}"),
        Disposition::Rejected("Recipe not found".to_string())
    );
}

#[test]
fn test_classify_rejected_without_message_is_unexpected() {
    assert_eq!(classify(400, "not json"), Disposition::Unexpected);
}

#[test]
fn test_classify_server_error() {
    assert_eq!(classify(500, "{\"error\": \"boom\"}"), Disposition::Unexpected);
    assert_eq!(classify(502, ""), Disposition::Unexpected);
}

/// One-shot HTTP server on a loopback port. Serves the canned responses in
/// order and hands back the raw request heads it saw.
fn serve(responses: Vec<String>) -> (String, thread::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for response in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 8192];
            let mut raw = String::new();
            loop {
                let n = stream.read(&mut buf).unwrap();
                raw.push_str(&String::from_utf8_lossy(&buf[..n]));
                if n == 0 {
                    break;
                }
                if let Some(head_end) = raw.find("\r\n\r\n") {
                    let declared = raw
                        .to_ascii_lowercase()
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:").map(str::to_owned))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if raw.len() >= head_end + 4 + declared {
                        break;
                    }
                }
            }
            requests.push(raw);
            stream.write_all(response.as_bytes()).unwrap();
        }
        requests
    });
    (format!("http://{addr}/api"), handle)
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

#[test]
fn test_bearer_header_attached_when_signed_in() {
    let temp = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::load(temp.path().join("session.json")));
    store
        .set(Session { token: "tok-abc".into(), user_id: 1, role: Role::User })
        .unwrap();

    let (base, server) = serve(vec![http_response("200 OK", "[]")]);
    let api = ApiClient::new(&base, store);
    api.recipes().unwrap();

    let requests = server.join().unwrap();
    assert!(requests[0].starts_with("GET /api/recipes"));
    assert!(
        requests[0].to_ascii_lowercase().contains("authorization: bearer tok-abc"),
        "missing bearer header in: {}",
        requests[0]
    );
}

#[test]
fn test_no_bearer_header_when_signed_out() {
    let temp = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::load(temp.path().join("session.json")));

    let (base, server) = serve(vec![http_response("200 OK", "[]")]);
    let api = ApiClient::new(&base, store);
    api.recipes().unwrap();

    let requests = server.join().unwrap();
    assert!(
        !requests[0].to_ascii_lowercase().contains("authorization"),
        "unexpected auth header in: {}",
        requests[0]
    );
}

#[test]
fn test_success_parses_typed_body() {
    let temp = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::load(temp.path().join("session.json")));

    let body = r#"{"access_token": "jwt-xyz", "user_id": 5, "role": "admin"}"#;
    let (base, server) = serve(vec![http_response("200 OK", body)]);
    let api = ApiClient::new(&base, store);
    let resp = api.login("a@b.c", "pw").unwrap();
    server.join().unwrap();

    assert_eq!(resp.access_token, "jwt-xyz");
    assert_eq!(resp.user_id, 5);
    assert_eq!(resp.role, Role::Admin);
}

#[test]
fn test_unauthorized_clears_session_and_propagates() {
    let temp = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::load(temp.path().join("session.json")));
    store
        .set(Session { token: "stale".into(), user_id: 1, role: Role::User })
        .unwrap();

    let signouts = Arc::new(AtomicUsize::new(0));
    let sink = signouts.clone();
    store.subscribe(move |event| {
        if *event == SessionEvent::SignedOut {
            sink.fetch_add(1, Ordering::SeqCst);
        }
    });

    let body = r#"{"msg": "Token has expired"}"#;
    let (base, server) = serve(vec![
        http_response("401 UNAUTHORIZED", body),
        http_response("401 UNAUTHORIZED", body),
    ]);
    let api = ApiClient::new(&base, store.clone());

    let err = api.recipes().unwrap_err();
    assert!(matches!(err, ApiError::AuthExpired(_)));
    assert!(store.current().is_none());

    // Second 401 on the already-torn-down session must not broadcast again.
    let err = api.recipes().unwrap_err();
    assert!(matches!(err, ApiError::AuthExpired(_)));
    server.join().unwrap();

    assert_eq!(signouts.load(Ordering::SeqCst), 1);
}

#[test]
fn test_rejected_login_reports_server_message() {
    let temp = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::load(temp.path().join("session.json")));

    let body = r#"{"error": "Invalid email or password"}"#;
    let (base, server) = serve(vec![http_response("401 UNAUTHORIZED", body)]);
    let api = ApiClient::new(&base, store);

    let err = api.login("a@b.c", "wrong").unwrap_err();
    server.join().unwrap();
    match err {
        ApiError::AuthExpired(msg) => assert_eq!(msg, "Invalid email or password"),
        other => panic!("expected AuthExpired, got {other:?}"),
    }
}

#[test]
fn test_forbidden_leaves_session_intact() {
    let temp = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::load(temp.path().join("session.json")));
    store
        .set(Session { token: "tok".into(), user_id: 1, role: Role::User })
        .unwrap();

    let body = r#"{"error": "Admins only"}"#;
    let (base, server) = serve(vec![http_response("403 FORBIDDEN", body)]);
    let api = ApiClient::new(&base, store.clone());

    let err = api.admin_users().unwrap_err();
    server.join().unwrap();
    match err {
        ApiError::Forbidden(msg) => assert_eq!(msg, "Admins only"),
        other => panic!("expected Forbidden, got {other:?}"),
    }
    assert!(store.current().is_some());
}

#[test]
fn test_rejected_carries_server_message() {
    let temp = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::load(temp.path().join("session.json")));

    let body = r#"{"error": "Email already registered"}"#;
    let (base, server) = serve(vec![http_response("409 CONFLICT", body)]);
    let api = ApiClient::new(&base, store);

    let err = api.login("a@b.c", "pw").unwrap_err();
    server.join().unwrap();
    match err {
        ApiError::Rejected(msg) => assert_eq!(msg, "Email already registered"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn test_server_error_reports_status_and_body() {
    let temp = tempfile::tempdir().unwrap();
    let store = Arc::new(SessionStore::load(temp.path().join("session.json")));

    let (base, server) = serve(vec![http_response("500 INTERNAL SERVER ERROR", "boom")]);
    let api = ApiClient::new(&base, store);

    let err = api.recipes().unwrap_err();
    server.join().unwrap();
    match err {
        ApiError::Unexpected { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Unexpected, got {other:?}"),
    }
}
