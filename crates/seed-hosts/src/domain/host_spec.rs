//! Host entry parsing.
//!
//! A host entry is `host`, `host:port`, `host:low-high`, or the bracketed
//! forms `[v6]`, `[v6]:port`, `[v6]:low-high`. Parsing is pure: no lookup
//! happens here, and every failure comes back as a [`HostSpecError`].

use std::fmt;
use std::str::FromStr;

use super::errors::HostSpecError;

/// Inclusive port range. A single port is a range with `low == high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    low: u16,
    high: u16,
}

impl PortRange {
    /// Create a range, rejecting port 0 and inverted bounds.
    pub fn new(low: u16, high: u16) -> Result<Self, HostSpecError> {
        let text = || format!("{low}-{high}");
        if low == 0 {
            return Err(HostSpecError::InvalidPort {
                value: text(),
                reason: "port must be between 1 and 65535",
            });
        }
        if low > high {
            return Err(HostSpecError::InvalidPort {
                value: text(),
                reason: "lower bound is greater than upper bound",
            });
        }
        Ok(Self { low, high })
    }

    /// A range holding exactly one port.
    pub fn single(port: u16) -> Result<Self, HostSpecError> {
        Self::new(port, port)
    }

    /// First port.
    pub fn low(&self) -> u16 {
        self.low
    }

    /// Last port, inclusive.
    pub fn high(&self) -> u16 {
        self.high
    }

    /// Number of ports in the range.
    pub fn len(&self) -> usize {
        usize::from(self.high - self.low) + 1
    }

    /// Always false; a range holds at least one port.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Ports in ascending order.
    pub fn ports(&self) -> impl Iterator<Item = u16> {
        self.low..=self.high
    }
}

impl FromStr for PortRange {
    type Err = HostSpecError;

    /// Parses `9300` or `9300-9400`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| HostSpecError::InvalidPort {
            value: s.to_string(),
            reason,
        };

        match s.split_once('-') {
            None => {
                let port = parse_port(s).ok_or_else(|| invalid("not a port number"))?;
                Self::single(port).map_err(|_| invalid("port must be between 1 and 65535"))
            }
            Some((low, high)) => {
                if low.is_empty() || high.is_empty() {
                    return Err(invalid("port range needs both bounds"));
                }
                let low = parse_port(low).ok_or_else(|| invalid("lower bound is not a port number"))?;
                let high =
                    parse_port(high).ok_or_else(|| invalid("upper bound is not a port number"))?;
                Self::new(low, high).map_err(|_| {
                    if low == 0 {
                        invalid("port must be between 1 and 65535")
                    } else {
                        invalid("lower bound is greater than upper bound")
                    }
                })
            }
        }
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// Digits only; `+9300` and ` 9300` are rejected.
fn parse_port(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A parsed host entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostSpec {
    host: String,
    ports: Option<PortRange>,
}

impl HostSpec {
    /// Parse a raw entry.
    pub fn parse(entry: &str) -> Result<Self, HostSpecError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(HostSpecError::Empty);
        }

        let (host, port) = if let Some(rest) = entry.strip_prefix('[') {
            split_bracketed(entry, rest)?
        } else {
            split_plain(entry)?
        };

        if host.is_empty() {
            return Err(HostSpecError::MissingHost(entry.to_string()));
        }

        let ports = match port {
            Some(p) if !p.is_empty() => Some(p.parse::<PortRange>()?),
            _ => None,
        };

        Ok(Self {
            host: host.to_string(),
            ports,
        })
    }

    /// Host part without brackets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port part, if one was written.
    pub fn ports(&self) -> Option<PortRange> {
        self.ports
    }

    /// Explicit ports, or `default_port` alone.
    ///
    /// The default is validated like a written port, so `0` is rejected.
    pub fn ports_or(&self, default_port: u16) -> Result<PortRange, HostSpecError> {
        match self.ports {
            Some(ports) => Ok(ports),
            None => PortRange::single(default_port),
        }
    }
}

impl FromStr for HostSpec {
    type Err = HostSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HostSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            write!(f, "{}", self.host)?;
        }
        match self.ports {
            Some(ports) => write!(f, ":{ports}"),
            None => Ok(()),
        }
    }
}

/// `[host]` or `[host]:port`. `rest` is the entry after the opening bracket.
fn split_bracketed<'a>(
    entry: &'a str,
    rest: &'a str,
) -> Result<(&'a str, Option<&'a str>), HostSpecError> {
    let invalid = || HostSpecError::InvalidBracketedHost(entry.to_string());

    let (host, after) = rest.split_once(']').ok_or_else(invalid)?;
    if !host.contains(':') {
        return Err(invalid());
    }
    if after.is_empty() {
        return Ok((host, None));
    }
    let port = after.strip_prefix(':').ok_or_else(invalid)?;
    Ok((host, Some(port)))
}

/// `host` or `host:port`. A bare IPv6 literal is accepted as a host.
fn split_plain(entry: &str) -> Result<(&str, Option<&str>), HostSpecError> {
    match entry.split_once(':') {
        None => Ok((entry, None)),
        Some((host, port)) if !port.contains(':') => Ok((host, Some(port))),
        Some(_) if entry.parse::<std::net::Ipv6Addr>().is_ok() => Ok((entry, None)),
        Some(_) => Err(HostSpecError::UnbracketedIpv6(entry.to_string())),
    }
}
