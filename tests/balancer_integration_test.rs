use greet_server::{Balancer, GreeterServer, RoundRobin, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn spawn_greeter() -> u16 {
    let port = {
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        probe.local_addr().unwrap().port()
    };

    let server = GreeterServer::new(ServerConfig::new(port));
    let bound = server.bind().await.unwrap();
    tokio::spawn(async move {
        bound.serve().await.unwrap();
    });

    port
}

async fn spawn_balancer(backends: Vec<String>) -> u16 {
    let balancer = Balancer::new(0, RoundRobin::new(backends));
    let bound = balancer.bind().await.unwrap();
    let port = bound.local_addr().unwrap().port();
    tokio::spawn(async move {
        bound.serve().await.unwrap();
    });

    port
}

/// One raw HTTP exchange through the balancer. `Connection: close` makes
/// the backend close its side, which is what ends the relay.
async fn ask(port: u16) -> String {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).into_owned()
}

#[tokio::test]
async fn test_requests_alternate_between_backends() {
    let port_a = spawn_greeter().await;
    let port_b = spawn_greeter().await;

    let balancer_port = spawn_balancer(vec![
        format!("127.0.0.1:{port_a}"),
        format!("127.0.0.1:{port_b}"),
    ])
    .await;

    let first = ask(balancer_port).await;
    let second = ask(balancer_port).await;
    let third = ask(balancer_port).await;

    assert!(first.contains("200 OK"), "unexpected response: {first}");
    assert!(first.contains(&format!("Hello from http://localhost:{port_a}/")));
    assert!(second.contains(&format!("Hello from http://localhost:{port_b}/")));
    assert!(third.contains(&format!("Hello from http://localhost:{port_a}/")));
}

#[tokio::test]
async fn test_single_backend_serves_every_request() {
    let backend_port = spawn_greeter().await;
    let balancer_port = spawn_balancer(vec![format!("127.0.0.1:{backend_port}")]).await;

    for _ in 0..3 {
        let response = ask(balancer_port).await;
        assert!(response.contains(&format!("Hello from http://localhost:{backend_port}/")));
    }
}

#[tokio::test]
async fn test_empty_pool_drops_the_connection() {
    let balancer_port = spawn_balancer(Vec::new()).await;

    let response = ask(balancer_port).await;
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_dead_backend_does_not_take_the_balancer_down() {
    let alive = spawn_greeter().await;
    let dead = {
        // Reserved and released, so nothing is listening there.
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        probe.local_addr().unwrap().port()
    };

    let balancer_port = spawn_balancer(vec![
        format!("127.0.0.1:{dead}"),
        format!("127.0.0.1:{alive}"),
    ])
    .await;

    // First connection hits the dead backend and is dropped.
    let failed = ask(balancer_port).await;
    assert!(failed.is_empty());

    // The accept loop is still alive and the rotation has moved on.
    let served = ask(balancer_port).await;
    assert!(served.contains(&format!("Hello from http://localhost:{alive}/")));
}
