//! Network address validators
//!
//! Addresses are resolved with the standard library resolver. Literal IPs
//! never touch the network, but host names go through the system resolver
//! and can block for as long as a lookup takes. Callers that need a bound
//! on that must impose it around the validation call.
//!
//! Every failure is [`ERR_ADDRESS`].

use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use crate::error::ERR_ADDRESS;

/// Which IP versions an address may resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Any,
    V4,
    V6,
}

impl Family {
    fn admits(self, ip: IpAddr) -> bool {
        match self {
            Self::Any => true,
            Self::V4 => ip.is_ipv4(),
            Self::V6 => ip.is_ipv6(),
        }
    }
}

/// Splits `host:port` or `[host]:port`.
///
/// A host containing `:` must be bracketed. The port must be numeric.
fn split_host_port(input: &str) -> Option<(&str, u16)> {
    let (host, port) = input.rsplit_once(':')?;
    let port = port.parse::<u16>().ok()?;
    let host = match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        Some(inner) => inner,
        None if host.contains([':', '[', ']']) => return None,
        None => host,
    };
    Some((host, port))
}

/// Resolves `host` and reports whether any result has the wanted family.
fn resolves_to(host: &str, port: u16, family: Family) -> bool {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return family.admits(ip);
    }
    (host, port)
        .to_socket_addrs()
        .is_ok_and(|mut addrs| addrs.any(|addr| family.admits(addr.ip())))
}

/// A transport endpoint: a host and a port.
///
/// An empty host (`:8080`) stands for every local address and is accepted
/// for each family.
fn is_transport_address(input: &str, family: Family) -> bool {
    if let Ok(addr) = input.parse::<SocketAddr>() {
        return family.admits(addr.ip());
    }
    match split_host_port(input) {
        Some(("", _)) => true,
        Some((host, port)) => resolves_to(host, port, family),
        None => false,
    }
}

/// A single IP: a literal, a bracketed literal with a port, or a host name.
fn is_ip_address(input: &str, family: Family) -> bool {
    if let Ok(ip) = input.parse::<IpAddr>() {
        return family.admits(ip);
    }
    if input.starts_with('[') {
        return match split_host_port(input) {
            Some((host, _)) => host.parse::<IpAddr>().is_ok_and(|ip| family.admits(ip)),
            None => false,
        };
    }
    // Dotted digits that failed to parse are a malformed literal, not a name.
    if input.is_empty()
        || input.contains(':')
        || input.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    {
        return false;
    }
    resolves_to(input, 0, family)
}

// ============================================================================
// TCP / UDP
// ============================================================================

crate::validator! {
    /// A resolvable TCP endpoint, `host:port` or `[ipv6]:port`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tavern_validator::prelude::*;
    ///
    /// assert!(validate(&rule!("192.168.1.123:1234"; tcp_address())).is_ok());
    /// assert!(validate(&rule!("[::1]:1234"; tcp_address())).is_ok());
    /// assert!(validate(&rule!("192.168.1.123"; tcp_address())).unwrap_err().is(&ERR_ADDRESS));
    /// ```
    pub TcpAddress for str;
    rule(input) { is_transport_address(input, Family::Any) }
    error { ERR_ADDRESS }
    fn tcp_address();
}

crate::validator! {
    /// A TCP endpoint resolving to an IPv4 address.
    pub Tcp4Address for str;
    rule(input) { is_transport_address(input, Family::V4) }
    error { ERR_ADDRESS }
    fn tcp4_address();
}

crate::validator! {
    /// A TCP endpoint resolving to an IPv6 address.
    pub Tcp6Address for str;
    rule(input) { is_transport_address(input, Family::V6) }
    error { ERR_ADDRESS }
    fn tcp6_address();
}

crate::validator! {
    /// A resolvable UDP endpoint. Same syntax as [`TcpAddress`].
    pub UdpAddress for str;
    rule(input) { is_transport_address(input, Family::Any) }
    error { ERR_ADDRESS }
    fn udp_address();
}

crate::validator! {
    /// A UDP endpoint resolving to an IPv4 address.
    pub Udp4Address for str;
    rule(input) { is_transport_address(input, Family::V4) }
    error { ERR_ADDRESS }
    fn udp4_address();
}

crate::validator! {
    /// A UDP endpoint resolving to an IPv6 address.
    pub Udp6Address for str;
    rule(input) { is_transport_address(input, Family::V6) }
    error { ERR_ADDRESS }
    fn udp6_address();
}

// ============================================================================
// IP
// ============================================================================

crate::validator! {
    /// An IP literal or a host name that resolves.
    ///
    /// `[ip]:port` is accepted as well; the port is ignored.
    pub IpAddress for str;
    rule(input) { is_ip_address(input, Family::Any) }
    error { ERR_ADDRESS }
    fn ip_address();
}

crate::validator! {
    /// An IPv4 literal or a host name with an IPv4 address.
    pub Ip4Address for str;
    rule(input) { is_ip_address(input, Family::V4) }
    error { ERR_ADDRESS }
    fn ip4_address();
}

crate::validator! {
    /// An IPv6 literal or a host name with an IPv6 address.
    pub Ip6Address for str;
    rule(input) { is_ip_address(input, Family::V6) }
    error { ERR_ADDRESS }
    fn ip6_address();
}

// ============================================================================
// UNIX
// ============================================================================

crate::validator! {
    /// A Unix socket path. Any non-empty string names one.
    pub UnixAddress for str;
    rule(input) { !input.is_empty() }
    error { ERR_ADDRESS }
    fn unix_address();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::foundation::{ChainState, Validate};
    use crate::value::Value;
    use rstest::rstest;

    const V6: &str = "2001:db8:85a3::8a2e:370:7334";
    const V6_PORT: &str = "[2001:db8:85a3::8a2e:370:7334]:1234";

    fn run(validator: &impl Validate, value: impl Into<Value>) -> Result<()> {
        validator.validate(&mut ChainState::new(), &value.into())
    }

    #[rstest]
    #[case("host:80", Some(("host", 80)))]
    #[case("[::1]:443", Some(("::1", 443)))]
    #[case(":8080", Some(("", 8080)))]
    #[case("::1", None)]
    #[case("host", None)]
    #[case("host:http", None)]
    #[case("host:70000", None)]
    #[case("[::1:80", None)]
    fn test_split_host_port(#[case] input: &str, #[case] expected: Option<(&str, u16)>) {
        assert_eq!(split_host_port(input), expected);
    }

    #[rstest]
    #[case("localhost", true)]
    #[case(V6_PORT, true)]
    #[case("192.168.1.123", true)]
    #[case("::0", true)]
    #[case(V6, true)]
    #[case("127.0.0.1", true)]
    #[case("0", false)]
    #[case("1.2.3", false)]
    #[case("192.168.1.123:1234", false)]
    fn test_ip_address(#[case] input: &str, #[case] ok: bool) {
        let result = run(&ip_address(), input);
        assert_eq!(result.is_ok(), ok, "{input}");
        if !ok {
            assert!(result.unwrap_err().is(&ERR_ADDRESS));
        }
    }

    #[rstest]
    #[case("192.168.1.123", true)]
    #[case("127.0.0.1", true)]
    #[case(V6, false)]
    #[case("0", false)]
    #[case("192.168.1.123:1234", false)]
    fn test_ip4_address(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(run(&ip4_address(), input).is_ok(), ok, "{input}");
    }

    #[rstest]
    #[case(V6_PORT, true)]
    #[case(V6, true)]
    #[case("::0", true)]
    #[case("192.168.1.123", false)]
    #[case("127.0.0.1", false)]
    #[case("0", false)]
    fn test_ip6_address(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(run(&ip6_address(), input).is_ok(), ok, "{input}");
    }

    #[rstest]
    #[case("192.168.1.123:1234", true)]
    #[case("[::0]:1234", true)]
    #[case(V6_PORT, true)]
    #[case(":1234", true)]
    #[case("localhost:1234", true)]
    #[case("0", false)]
    #[case("localhost", false)]
    #[case("192.168.1.123", false)]
    #[case("::0", false)]
    #[case(V6, false)]
    fn test_transport_address(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(run(&tcp_address(), input).is_ok(), ok, "tcp {input}");
        assert_eq!(run(&udp_address(), input).is_ok(), ok, "udp {input}");
    }

    #[rstest]
    #[case("127.0.0.1:1234", true, false)]
    #[case(V6_PORT, false, true)]
    #[case("[::0]:1234", false, true)]
    #[case("127.0.0.1", false, false)]
    #[case(V6, false, false)]
    #[case("0", false, false)]
    fn test_transport_families(#[case] input: &str, #[case] v4: bool, #[case] v6: bool) {
        assert_eq!(run(&tcp4_address(), input).is_ok(), v4, "tcp4 {input}");
        assert_eq!(run(&udp4_address(), input).is_ok(), v4, "udp4 {input}");
        assert_eq!(run(&tcp6_address(), input).is_ok(), v6, "tcp6 {input}");
        assert_eq!(run(&udp6_address(), input).is_ok(), v6, "udp6 {input}");
    }

    #[test]
    fn test_unix_address() {
        assert!(run(&unix_address(), "helloworld").is_ok());
        assert!(run(&unix_address(), "192.168.1.123").is_ok());
        assert!(run(&unix_address(), "/var/run/app.sock").is_ok());
    }

    #[test]
    fn test_required_empty_address() {
        let mut state = ChainState::new();
        state.mark_required();
        let err = ip_address()
            .validate(&mut state, &Value::from(""))
            .unwrap_err();
        assert!(err.is(&ERR_ADDRESS));
        assert!(run(&tcp_address(), 1234).unwrap_err().is_usage());
    }
}
