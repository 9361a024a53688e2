use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointError {
    Empty,
    Whitespace,
    UnsupportedScheme,
    MissingHost,
    InvalidHost,
    InvalidPort,
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EndpointError::Empty => "endpoint is empty",
            EndpointError::Whitespace => "endpoint contains whitespace",
            EndpointError::UnsupportedScheme => "endpoint scheme must be http or https",
            EndpointError::MissingHost => "endpoint has no host",
            EndpointError::InvalidHost => "endpoint host is malformed",
            EndpointError::InvalidPort => "endpoint port is malformed",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub const fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// Absolute HTTP(S) URL of the home control server, split into the parts an
/// HTTP client needs to open a connection and write the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub scheme: Scheme,
    pub host: &'a str,
    pub port: u16,
    /// Path including any query, `/` when the URL has none.
    pub path: &'a str,
}

impl<'a> Endpoint<'a> {
    pub fn parse(url: &'a str) -> Result<Self, EndpointError> {
        if url.is_empty() {
            return Err(EndpointError::Empty);
        }
        if url.chars().any(char::is_whitespace) {
            return Err(EndpointError::Whitespace);
        }

        let (scheme, rest) = url
            .split_once("://")
            .ok_or(EndpointError::UnsupportedScheme)?;
        let scheme = if scheme.eq_ignore_ascii_case("http") {
            Scheme::Http
        } else if scheme.eq_ignore_ascii_case("https") {
            Scheme::Https
        } else {
            return Err(EndpointError::UnsupportedScheme);
        };

        // Authority ends at the first path, query or fragment delimiter
        let split = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (authority, path) = rest.split_at(split);
        let path = if path.is_empty() { "/" } else { path };

        if authority.contains('@') {
            return Err(EndpointError::InvalidHost);
        }

        let (host, port) = split_host_port(authority)?;
        let port = match port {
            Some(port) => parse_port(port)?,
            None => scheme.default_port(),
        };

        if host.is_empty() {
            return Err(EndpointError::MissingHost);
        }
        if !is_valid_host(host) {
            return Err(EndpointError::InvalidHost);
        }

        Ok(Endpoint {
            scheme,
            host,
            port,
            path,
        })
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme.as_str(), self.host)?;
        if self.port != self.scheme.default_port() {
            write!(f, ":{}", self.port)?;
        }
        f.write_str(self.path)
    }
}

// IPv6 literals keep their brackets, as required in the Host header
fn split_host_port(authority: &str) -> Result<(&str, Option<&str>), EndpointError> {
    if authority.starts_with('[') {
        let close = authority.find(']').ok_or(EndpointError::InvalidHost)?;
        let (host, rest) = authority.split_at(close + 1);
        return match rest {
            "" => Ok((host, None)),
            _ => rest
                .strip_prefix(':')
                .map(|port| (host, Some(port)))
                .ok_or(EndpointError::InvalidHost),
        };
    }

    Ok(match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    })
}

fn parse_port(port: &str) -> Result<u16, EndpointError> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EndpointError::InvalidPort);
    }
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(EndpointError::InvalidPort),
        Ok(n) => Ok(n),
    }
}

fn is_valid_host(host: &str) -> bool {
    if let Some(literal) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return literal.contains(':')
            && literal
                .bytes()
                .all(|b| b.is_ascii_hexdigit() || matches!(b, b':' | b'.'));
    }

    // A single trailing dot (fully qualified name) is allowed
    let host = host.strip_suffix('.').unwrap_or(host);
    !host.is_empty()
        && host.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_server_endpoint() {
        let ep = Endpoint::parse("http://home.iot.loc:1880/api/kb").unwrap();
        assert_eq!(ep.scheme, Scheme::Http);
        assert_eq!(ep.host, "home.iot.loc");
        assert_eq!(ep.port, 1880);
        assert_eq!(ep.path, "/api/kb");
    }

    #[test]
    fn test_default_ports_and_path() {
        let ep = Endpoint::parse("https://example.org").unwrap();
        assert_eq!(ep.scheme, Scheme::Https);
        assert_eq!(ep.port, 443);
        assert_eq!(ep.path, "/");

        let ep = Endpoint::parse("HTTP://192.168.1.10?key=1").unwrap();
        assert_eq!(ep.scheme, Scheme::Http);
        assert_eq!(ep.host, "192.168.1.10");
        assert_eq!(ep.port, 80);
        assert_eq!(ep.path, "?key=1");
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(Endpoint::parse(""), Err(EndpointError::Empty));
        assert_eq!(
            Endpoint::parse("home.iot.loc/api"),
            Err(EndpointError::UnsupportedScheme)
        );
        assert_eq!(
            Endpoint::parse("ftp://home.iot.loc/"),
            Err(EndpointError::UnsupportedScheme)
        );
        assert_eq!(Endpoint::parse("http:///api"), Err(EndpointError::MissingHost));
        assert_eq!(Endpoint::parse("http://:80/"), Err(EndpointError::MissingHost));
        assert_eq!(
            Endpoint::parse("http://home.iot.loc:/"),
            Err(EndpointError::InvalidPort)
        );
        assert_eq!(
            Endpoint::parse("http://home.iot.loc:70000/"),
            Err(EndpointError::InvalidPort)
        );
        assert_eq!(
            Endpoint::parse("http://home.iot.loc:0/"),
            Err(EndpointError::InvalidPort)
        );
        assert_eq!(
            Endpoint::parse("http://user@home.iot.loc/"),
            Err(EndpointError::InvalidHost)
        );
        assert_eq!(
            Endpoint::parse("http://home iot/"),
            Err(EndpointError::Whitespace)
        );
    }

    #[test]
    fn test_ipv6_literal_host() {
        let ep = Endpoint::parse("http://[::1]:1880/api/kb").unwrap();
        assert_eq!(ep.host, "[::1]");
        assert_eq!(ep.port, 1880);
        assert_eq!(ep.path, "/api/kb");

        let ep = Endpoint::parse("https://[fe80::1]").unwrap();
        assert_eq!(ep.host, "[fe80::1]");
        assert_eq!(ep.port, 443);

        assert_eq!(
            Endpoint::parse("http://[::1/api"),
            Err(EndpointError::InvalidHost)
        );
        assert_eq!(
            Endpoint::parse("http://[::1]1880/"),
            Err(EndpointError::InvalidHost)
        );
        assert_eq!(
            Endpoint::parse("http://[home]/"),
            Err(EndpointError::InvalidHost)
        );
        assert_eq!(
            Endpoint::parse("http://[::1]:abc/"),
            Err(EndpointError::InvalidPort)
        );
    }

    #[test]
    fn test_empty_labels_rejected() {
        assert_eq!(Endpoint::parse("http://a..b/"), Err(EndpointError::InvalidHost));
        assert_eq!(Endpoint::parse("http://.home/"), Err(EndpointError::InvalidHost));
        assert_eq!(Endpoint::parse("http://..:80/"), Err(EndpointError::InvalidHost));
        assert_eq!(
            Endpoint::parse("http://home.-iot.loc/"),
            Err(EndpointError::InvalidHost)
        );
        assert_eq!(Endpoint::parse("http://home.loc./").unwrap().host, "home.loc.");
    }

    #[test]
    fn test_display_round_trips_home_server() {
        let url = "http://home.iot.loc:1880/api/kb";
        assert_eq!(Endpoint::parse(url).unwrap().to_string(), url);
        assert_eq!(
            Endpoint::parse("https://example.org:443").unwrap().to_string(),
            "https://example.org/"
        );
    }
}
