use static_dns_domain::{
    parse_transport_spec, AddressFamily, DomainError, Endpoint, SocketKind, Transport,
};

#[test]
fn test_single_endpoint_with_address() {
    let endpoints = parse_transport_spec("udp:127.0.0.1:8053");

    assert_eq!(endpoints, vec![Endpoint::new("udp", "127.0.0.1:8053")]);
}

#[test]
fn test_protocol_without_colon_binds_all_interfaces() {
    let endpoints = parse_transport_spec("udp");

    assert_eq!(endpoints, vec![Endpoint::new("udp", "0.0.0.0")]);
}

#[test]
fn test_last_occurrence_of_protocol_wins() {
    let endpoints = parse_transport_spec("udp:1.2.3.4:53,udp:5.6.7.8:53");

    assert_eq!(endpoints.len(), 1);
    assert_eq!(endpoints[0].protocol, "udp");
    assert_eq!(endpoints[0].bind_address, "5.6.7.8:53");
}

#[test]
fn test_multiple_protocols_are_kept() {
    let endpoints = parse_transport_spec("udp:127.0.0.1:8053,tcp");

    assert_eq!(
        endpoints,
        vec![
            Endpoint::new("tcp", "0.0.0.0"),
            Endpoint::new("udp", "127.0.0.1:8053"),
        ]
    );
}

#[test]
fn test_only_first_colon_separates_protocol() {
    let endpoints = parse_transport_spec("udp6:[::1]:8053");

    assert_eq!(endpoints, vec![Endpoint::new("udp6", "[::1]:8053")]);
}

#[test]
fn test_whitespace_is_trimmed_around_spec_and_tokens() {
    let endpoints = parse_transport_spec(" \t udp:127.0.0.1:53 ,\r\n tcp4:10.0.0.1:53 \n");

    assert_eq!(
        endpoints,
        vec![
            Endpoint::new("tcp4", "10.0.0.1:53"),
            Endpoint::new("udp", "127.0.0.1:53"),
        ]
    );
}

#[test]
fn test_garbage_still_parses() {
    let endpoints = parse_transport_spec("carrier-pigeon:somewhere");

    assert_eq!(endpoints, vec![Endpoint::new("carrier-pigeon", "somewhere")]);
    assert!(matches!(
        endpoints[0].transport(),
        Err(DomainError::UnsupportedTransport(name)) if name == "carrier-pigeon"
    ));
}

#[test]
fn test_empty_spec_yields_empty_protocol() {
    let endpoints = parse_transport_spec("");

    assert_eq!(endpoints, vec![Endpoint::new("", "0.0.0.0")]);
    assert!(endpoints[0].transport().is_err());
}

#[test]
fn test_empty_address_after_colon_is_kept() {
    let endpoints = parse_transport_spec("tcp:");

    assert_eq!(endpoints, vec![Endpoint::new("tcp", "")]);
}

#[test]
fn test_transport_names() {
    for name in ["tcp", "tcp4", "tcp6", "udp", "udp4", "udp6"] {
        let transport: Transport = name.parse().unwrap();
        assert_eq!(transport.as_str(), name);
        assert_eq!(transport.to_string(), name);
    }

    assert!("UDP".parse::<Transport>().is_err());
}

#[test]
fn test_transport_kind_and_family() {
    assert_eq!(Transport::Tcp.kind(), SocketKind::Stream);
    assert_eq!(Transport::Udp6.kind(), SocketKind::Datagram);

    assert_eq!(Transport::Udp.family(), AddressFamily::Any);
    assert_eq!(Transport::Tcp4.family(), AddressFamily::V4);
    assert_eq!(Transport::Udp6.family(), AddressFamily::V6);
}

#[test]
fn test_endpoint_display() {
    let endpoint = Endpoint::new("udp", "127.0.0.1:8053");

    assert_eq!(endpoint.to_string(), "udp:127.0.0.1:8053");
}

#[test]
fn test_address_family_matches() {
    let v4: std::net::IpAddr = "127.0.0.1".parse().unwrap();
    let v6: std::net::IpAddr = "::1".parse().unwrap();

    assert!(AddressFamily::Any.matches(&v4));
    assert!(AddressFamily::Any.matches(&v6));
    assert!(AddressFamily::V4.matches(&v4));
    assert!(!AddressFamily::V4.matches(&v6));
    assert!(AddressFamily::V6.matches(&v6));
    assert!(!AddressFamily::V6.matches(&v4));
}
