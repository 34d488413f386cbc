use std::net::SocketAddr;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};
use valetdesk_core::{
    ClientConfig, CreateItem, HttpItemService, ItemId, ItemService, ItemStatus, ValetError,
};

/// One request as the responder saw it.
#[derive(Debug)]
struct Recorded {
    method: String,
    path: String,
    body: String,
}

/// Serve `responses` in order, one connection each, then hand back what was
/// requested.
async fn respond_with(
    responses: Vec<(u16, &'static str)>,
) -> (HttpItemService, JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind responder");
    let addr = listener.local_addr().expect("Failed to read local address");

    let handle = tokio::spawn(async move {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.expect("Failed to accept");
            seen.push(read_request(&mut socket).await);

            let reason = match status {
                200 => "OK",
                201 => "Created",
                400 => "Bad Request",
                404 => "Not Found",
                _ => "Internal Server Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("Failed to write response");
            let _ = socket.shutdown().await;
        }
        seen
    });

    (service_for(addr), handle)
}

fn service_for(addr: SocketAddr) -> HttpItemService {
    let config = ClientConfig::new(&format!("http://{addr}")).expect("Failed to build config");
    HttpItemService::new(&config).expect("Failed to build service")
}

async fn read_request(socket: &mut TcpStream) -> Recorded {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = socket.read(&mut chunk).await.expect("Failed to read request");
        assert!(n > 0, "Connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.expect("Failed to read body");
        assert!(n > 0, "Connection closed before body was complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    Recorded {
        method: request_line.next().unwrap_or_default().to_string(),
        path: request_line.next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string(),
    }
}

const LIST_BODY: &str = r#"{
    "success": true,
    "data": [
        {"id": "1", "title": "Ticket #001 - Blue Honda Civic", "description": "Parked at Slot A1, Level 1", "vehicle_number": "MH12AB1234", "slot": "A1", "level": "1", "entry_time": "2026-01-31T09:00:00", "status": "active"},
        {"id": "3", "title": "Ticket #003 - Red Maruti Swift", "description": "", "vehicle_number": "MH01EF9012", "slot": "C5", "level": "3", "entry_time": "2026-01-31T09:15:00.250000", "status": "completed"}
    ],
    "count": 2
}"#;

const CREATED_BODY: &str = r#"{
    "success": true,
    "data": {"id": "a1b2c3d4", "title": "Blue Ford Mustang", "description": "", "vehicle_number": "KA01XY0001", "slot": "B2", "level": "", "entry_time": "2026-02-01T18:42:07.123456", "status": "active"},
    "message": "Item created successfully"
}"#;

#[tokio::test]
async fn test_list_decodes_envelope() {
    let (service, handle) = respond_with(vec![(200, LIST_BODY)]).await;

    let items = service.list().await.expect("List should succeed");
    let requests = handle.await.expect("Responder panicked");

    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].vehicle_number, "MH12AB1234");
    assert_eq!(items[1].status, ItemStatus::Completed);
    assert_eq!(items[1].description, None);
}

#[tokio::test]
async fn test_get_maps_404_envelope_to_not_found() {
    let (service, handle) =
        respond_with(vec![(404, r#"{"success": false, "error": "Item not found"}"#)]).await;

    let result = service.get(&ItemId::from("999")).await;
    let requests = handle.await.expect("Responder panicked");

    assert_eq!(requests[0].path, "/items/999");
    assert!(matches!(result, Err(ValetError::NotFound { ref id }) if id.as_str() == "999"));
}

#[tokio::test]
async fn test_create_posts_form_fields() {
    let (service, handle) = respond_with(vec![(201, CREATED_BODY)]).await;

    let form = CreateItem {
        title: "Blue Ford Mustang".to_string(),
        vehicle_number: "KA01XY0001".to_string(),
        slot: "B2".to_string(),
        ..Default::default()
    };
    let created = service.create(&form).await.expect("Create should succeed");
    let requests = handle.await.expect("Responder panicked");

    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/items");
    let sent: serde_json::Value =
        serde_json::from_str(&requests[0].body).expect("Request body should be JSON");
    assert_eq!(sent["title"], "Blue Ford Mustang");
    assert_eq!(sent["vehicle_number"], "KA01XY0001");
    assert_eq!(sent["slot"], "B2");
    assert_eq!(sent["description"], "");
    assert!(sent.get("due_date").is_none());

    assert_eq!(created.id, ItemId::from("a1b2c3d4"));
    assert_eq!(created.slot.as_deref(), Some("B2"));
    assert_eq!(created.level, None);
}

#[tokio::test]
async fn test_create_surfaces_service_error_message() {
    let (service, handle) = respond_with(vec![(
        400,
        r#"{"success": false, "error": "Title is required"}"#,
    )])
    .await;

    let form = CreateItem {
        title: "x".to_string(),
        vehicle_number: "y".to_string(),
        ..Default::default()
    };
    let result = service.create(&form).await;
    handle.await.expect("Responder panicked");

    match result {
        Err(ValetError::Service { message }) => assert_eq!(message, "Title is required"),
        other => panic!("Expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_status_sends_patch_body() {
    let (service, handle) = respond_with(vec![(
        200,
        r#"{"success": true, "message": "Status updated"}"#,
    )])
    .await;

    let echoed = service
        .update_status(&ItemId::from("2"), ItemStatus::Completed)
        .await
        .expect("Update should succeed");
    let requests = handle.await.expect("Responder panicked");

    assert_eq!(echoed, None);
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/items/2");
    let sent: serde_json::Value =
        serde_json::from_str(&requests[0].body).expect("Request body should be JSON");
    assert_eq!(sent, serde_json::json!({"status": "completed"}));
}

#[tokio::test]
async fn test_delete_then_missing_delete() {
    let (service, handle) = respond_with(vec![
        (200, r#"{"success": true, "message": "Item deleted"}"#),
        (404, r#"{"success": false, "error": "Item not found"}"#),
    ])
    .await;

    let id = ItemId::from("4");
    service.delete(&id).await.expect("Delete should succeed");
    let second = service.delete(&id).await;
    let requests = handle.await.expect("Responder panicked");

    assert!(matches!(second, Err(ValetError::NotFound { .. })));
    assert_eq!(requests.len(), 2);
    assert!(requests
        .iter()
        .all(|r| r.method == "DELETE" && r.path == "/items/4"));
}

#[tokio::test]
async fn test_health_reads_bare_body() {
    let (service, handle) =
        respond_with(vec![(200, r#"{"status": "healthy", "service": "ParkEase API"}"#)]).await;

    let health = service.health().await.expect("Health should succeed");
    let requests = handle.await.expect("Responder panicked");

    assert_eq!(requests[0].path, "/health");
    assert!(health.is_healthy());
    assert_eq!(health.service, "ParkEase API");
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let (service, handle) = respond_with(vec![(500, "<html>Internal Server Error</html>")]).await;

    let result = service.list().await;
    handle.await.expect("Responder panicked");

    assert!(matches!(
        result,
        Err(ValetError::InvalidResponse { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        listener.local_addr().expect("Failed to read local address")
    };
    let service = service_for(addr);

    let result = service.list().await;

    match result {
        Err(err @ ValetError::Transport { .. }) => {
            assert!(err.to_string().starts_with("Could not connect to server"));
            assert!(!err.is_client_side());
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}
