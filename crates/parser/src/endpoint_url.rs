//! Absolute URL parsing for endpoint derivation

use percent_encoding::percent_decode_str;
use specscout_common::PortResolver;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub(crate) enum UrlError {
    #[error("server definition cannot have an empty url")]
    Empty,

    #[error("could not parse url {url}: {source}")]
    Invalid {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("could not parse url {0}: no host")]
    MissingHost(String),
}

/// The parts of an absolute URL an endpoint is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EndpointUrl {
    pub scheme: String,
    pub host: String,
    /// Port written in the URL, including a scheme's default port
    pub port: Option<u16>,
    /// Percent-decoded path
    pub path: String,
}

impl EndpointUrl {
    /// Parse an absolute URL; a missing scheme or host is an error
    pub(crate) fn parse(raw: &str) -> Result<Self, UrlError> {
        if raw.trim().is_empty() {
            return Err(UrlError::Empty);
        }

        let url = Url::parse(raw).map_err(|source| UrlError::Invalid {
            url: raw.to_string(),
            source,
        })?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .map(|h| h.trim_start_matches('[').trim_end_matches(']').to_string())
            .ok_or_else(|| UrlError::MissingHost(raw.to_string()))?;

        // `Url` drops a port equal to the scheme default, so look at the raw
        // authority to tell "https://a:443" apart from "https://a".
        let port = url.port().or_else(|| {
            if authority_has_port(raw) {
                url.port_or_known_default()
            } else {
                None
            }
        });

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port,
            path: percent_decode_str(url.path())
                .decode_utf8_lossy()
                .into_owned(),
        })
    }

    /// Port from the URL, else the resolver's default for the scheme
    pub(crate) fn resolve_port(&self, ports: &dyn PortResolver) -> Option<u16> {
        self.port.or_else(|| ports.lookup(&self.scheme))
    }
}

fn authority_has_port(raw: &str) -> bool {
    let Some((_, rest)) = raw.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map(|(_, host)| host)
        .unwrap_or(authority);

    match host_port.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}
