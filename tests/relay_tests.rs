//! Relay and End-to-End Tests
//!
//! Loopback tests covering byte preservation through the relay host and the
//! full client -> relay -> server -> relay -> client round trip.

use std::net::UdpSocket;
use std::thread;

use filereq::protocol::{encode_request, Request};
use filereq::{Client, Config, FileReqError, RelayHost, Server};

/// Bind a relay on an ephemeral port forwarding to `server_addr` and run it
/// on a background thread. Returns the client-facing address.
fn spawn_relay(server_addr: String) -> String {
    let config = Config::builder()
        .relay_addr("127.0.0.1:0")
        .server_addr(server_addr)
        .build();

    let relay = RelayHost::bind(&config).expect("bind relay");
    let client_addr = relay.client_addr().expect("relay addr").to_string();
    thread::spawn(move || {
        let _ = relay.run();
    });

    client_addr
}

/// Bind a server on an ephemeral port and run it on a background thread.
/// Returns its address.
fn spawn_server() -> String {
    let config = Config::builder()
        .server_addr("127.0.0.1:0")
        .recv_timeout_ms(0)
        .build();

    let server = Server::bind(&config).expect("bind server");
    let addr = server.local_addr().expect("server addr").to_string();
    thread::spawn(move || {
        let _ = server.run();
    });

    addr
}

/// A client config pointing at `relay_addr` with a bounded receive.
fn client_config(relay_addr: String) -> Config {
    Config::builder()
        .relay_addr(relay_addr)
        .recv_timeout_ms(1000)
        .build()
}

// =============================================================================
// Byte Preservation
// =============================================================================

#[test]
fn test_relay_preserves_bytes_both_ways() {
    // Stand-in "server": a raw socket we control, so arbitrary payloads can
    // be checked on both legs without codec involvement.
    let fake_server = UdpSocket::bind("127.0.0.1:0").expect("bind fake server");
    let relay_addr = spawn_relay(fake_server.local_addr().unwrap().to_string());

    let sender = UdpSocket::bind("127.0.0.1:0").expect("bind sender");

    // Bounded receives so a broken relay fails the test instead of hanging it
    let deadline = Some(std::time::Duration::from_secs(2));
    fake_server.set_read_timeout(deadline).unwrap();
    sender.set_read_timeout(deadline).unwrap();

    for len in [1usize, 4, 63, 512, 1024] {
        let payload: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        sender.send_to(&payload, &relay_addr).expect("send");

        // Client leg: the relay must hand the server the exact bytes
        let mut buf = [0u8; 2048];
        let (n, relay_src) = fake_server.recv_from(&mut buf).expect("server recv");
        assert_eq!(n, len, "length preserved client -> server");
        assert_eq!(&buf[..n], &payload[..], "content preserved client -> server");

        // Server leg: reply with a distinct payload, expect it back verbatim
        let reply: Vec<u8> = payload.iter().rev().copied().collect();
        fake_server.send_to(&reply, relay_src).expect("server send");

        let (m, _) = sender.recv_from(&mut buf).expect("sender recv");
        assert_eq!(m, len, "length preserved server -> client");
        assert_eq!(&buf[..m], &reply[..], "content preserved server -> client");
    }
}

// =============================================================================
// End-to-End Round Trips
// =============================================================================

#[test]
fn test_end_to_end_read_request_acknowledged() {
    let server_addr = spawn_server();
    let relay_addr = spawn_relay(server_addr);
    let client = Client::connect(&client_config(relay_addr)).expect("client");

    let reply = client
        .exchange(&encode_request(&Request::read("test0.txt", "netascii")))
        .expect("exchange");

    assert_eq!(reply, [0x00, 0x03, 0x00, 0x01]);
}

#[test]
fn test_end_to_end_write_request_acknowledged() {
    let server_addr = spawn_server();
    let relay_addr = spawn_relay(server_addr);
    let client = Client::connect(&client_config(relay_addr)).expect("client");

    let reply = client
        .exchange(&encode_request(&Request::write("test1.txt", "octet")))
        .expect("exchange");

    assert_eq!(reply, [0x00, 0x04, 0x00, 0x00]);
}

#[test]
fn test_end_to_end_invalid_request_gets_no_reply() {
    let server_addr = spawn_server();
    let relay_addr = spawn_relay(server_addr);

    let config = Config::builder()
        .relay_addr(relay_addr)
        .recv_timeout_ms(300)
        .build();
    let client = Client::connect(&config).expect("client");

    // Leading byte non-zero: the server drops it without an error reply, so
    // the client's bounded receive must time out.
    let result = client.exchange(&[0x01, 0x01, 0x41, 0x00, 0x6E, 0x00]);
    assert!(matches!(result, Err(FileReqError::Timeout(_))));
}

#[test]
fn test_end_to_end_full_script_completes() {
    let server_addr = spawn_server();
    let relay_addr = spawn_relay(server_addr);

    let config = Config::builder()
        .relay_addr(relay_addr)
        .recv_timeout_ms(500)
        .build();
    let client = Client::connect(&config).expect("client");

    // Ten valid requests acknowledged; the malformed eleventh times out and
    // is tolerated, so the whole script still completes cleanly.
    client.run_script().expect("script run");
}

#[test]
fn test_sequential_transactions_reuse_relay() {
    let server_addr = spawn_server();
    let relay_addr = spawn_relay(server_addr);
    let client = Client::connect(&client_config(relay_addr)).expect("client");

    // The single-slot relay must come back to idle after each round trip.
    for i in 0..5 {
        let request = if i % 2 == 0 {
            Request::read(format!("test{i}.txt"), "netascii")
        } else {
            Request::write(format!("test{i}.txt"), "octet")
        };
        let expected = if i % 2 == 0 {
            [0x00, 0x03, 0x00, 0x01]
        } else {
            [0x00, 0x04, 0x00, 0x00]
        };

        let reply = client.exchange(&encode_request(&request)).expect("exchange");
        assert_eq!(reply, expected, "transaction {i}");
    }
}
