//! Port extraction from launch profile URLs.
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

const HTTPS_PREFIX: &str = "https://";
const HTTP_PREFIX: &str = "http://";

/// Port number as reported in the result line. Wide enough for the digit
/// runs read by [`PortExtraction::FirstDigits`].
pub type Port = u64;

// Digit runs saturate here, the largest value a signed 64-bit parse keeps
const FIRST_DIGITS_MAX: Port = i64::MAX as Port;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// How a port number is read out of a URL.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PortExtraction {
    /// Parse the URL and use the authority's port, falling back to the
    /// scheme default when none is written.
    #[default]
    Authority,
    /// Use the first run of decimal digits anywhere in the URL. The value
    /// is not range checked against valid port numbers.
    FirstDigits,
}

/// URL scheme a port was declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

/// Classify `url` by its scheme prefix and extract its port.
///
/// Returns `None` for URLs that are neither `http://` nor `https://`, and
/// for URLs whose port cannot be extracted.
pub fn parse_port(url: &str, mode: PortExtraction) -> Option<(Scheme, Port)> {
    let candidate = match mode {
        PortExtraction::Authority => url.trim(),
        PortExtraction::FirstDigits => url,
    };

    let scheme = if candidate.starts_with(HTTPS_PREFIX) {
        Scheme::Https
    } else if candidate.starts_with(HTTP_PREFIX) {
        Scheme::Http
    } else {
        return None;
    };

    let port = match mode {
        PortExtraction::Authority => authority_port(candidate)?,
        PortExtraction::FirstDigits => first_digits(candidate)?,
    };

    Some((scheme, port))
}

fn authority_port(url: &str) -> Option<Port> {
    Url::parse(url).ok()?.port_or_known_default().map(Port::from)
}

fn first_digits(url: &str) -> Option<Port> {
    let digits = DIGITS.find(url)?;
    let port = digits
        .as_str()
        .parse::<Port>()
        .map_or(FIRST_DIGITS_MAX, |port| port.min(FIRST_DIGITS_MAX));
    Some(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_port() {
        assert_eq!(
            parse_port("https://localhost:5001", PortExtraction::Authority),
            Some((Scheme::Https, 5001))
        );
        assert_eq!(
            parse_port("http://localhost:5000/", PortExtraction::Authority),
            Some((Scheme::Http, 5000))
        );
        assert_eq!(
            parse_port("http://MyApp:5000", PortExtraction::Authority),
            Some((Scheme::Http, 5000))
        );
    }

    #[test]
    fn test_authority_ignores_digits_in_host() {
        assert_eq!(
            parse_port("http://10.0.0.12:8080", PortExtraction::Authority),
            Some((Scheme::Http, 8080))
        );
        assert_eq!(
            parse_port("http://app2:7000", PortExtraction::Authority),
            Some((Scheme::Http, 7000))
        );
    }

    #[test]
    fn test_authority_uses_scheme_default() {
        assert_eq!(
            parse_port("http://localhost", PortExtraction::Authority),
            Some((Scheme::Http, 80))
        );
        assert_eq!(
            parse_port("https://localhost/", PortExtraction::Authority),
            Some((Scheme::Https, 443))
        );
    }

    #[test]
    fn test_authority_trims_whitespace() {
        assert_eq!(
            parse_port(" http://localhost:5000 ", PortExtraction::Authority),
            Some((Scheme::Http, 5000))
        );
    }

    #[test]
    fn test_authority_rejects_unparseable_urls() {
        assert_eq!(
            parse_port("http://local host:5000", PortExtraction::Authority),
            None
        );
        assert_eq!(
            parse_port("http://localhost:99999", PortExtraction::Authority),
            None
        );
    }

    #[test]
    fn test_first_digits_takes_first_numeric_run() {
        assert_eq!(
            parse_port("https://MyApp:5001", PortExtraction::FirstDigits),
            Some((Scheme::Https, 5001))
        );
        assert_eq!(
            parse_port("http://10.0.0.12:8080", PortExtraction::FirstDigits),
            Some((Scheme::Http, 10))
        );
    }

    #[test]
    fn test_first_digits_without_digits() {
        assert_eq!(
            parse_port("http://localhost", PortExtraction::FirstDigits),
            None
        );
    }

    #[test]
    fn test_first_digits_keeps_values_beyond_port_range() {
        assert_eq!(
            parse_port("http://localhost:70000", PortExtraction::FirstDigits),
            Some((Scheme::Http, 70000))
        );
        assert_eq!(
            parse_port("http://localhost:123456", PortExtraction::FirstDigits),
            Some((Scheme::Http, 123456))
        );
    }

    #[test]
    fn test_first_digits_saturates_huge_runs() {
        assert_eq!(
            parse_port(
                "http://localhost:99999999999999999999999",
                PortExtraction::FirstDigits
            ),
            Some((Scheme::Http, i64::MAX as Port))
        );
    }

    #[test]
    fn test_first_digits_does_not_trim() {
        assert_eq!(
            parse_port(" http://localhost:5000", PortExtraction::FirstDigits),
            None
        );
    }

    #[test]
    fn test_other_schemes_are_ignored() {
        for mode in [PortExtraction::Authority, PortExtraction::FirstDigits] {
            assert_eq!(parse_port("ftp://localhost:21", mode), None);
            assert_eq!(parse_port("localhost:5000", mode), None);
            assert_eq!(parse_port("HTTP://localhost:5000", mode), None);
            assert_eq!(parse_port("", mode), None);
        }
    }
}
