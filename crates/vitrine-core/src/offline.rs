//! Offline asset cache policy.
//!
//! Images are served cache-first; everything else goes to the network first
//! and falls back to the cache when the network is unreachable. Successful
//! (200) responses are written back to the cache on either path.

use std::collections::HashMap;

use tracing::{debug, info};

/// Name of the current cache generation. Any other cache is stale.
pub const CACHE_NAME: &str = "corbo-digital-v1";

/// Assets stored when the worker installs.
pub const PRECACHE_ASSETS: [&str; 10] = [
    "/",
    "/index.html",
    "/app.css",
    "/app.js",
    "/project1.jpg",
    "/project2.jpg",
    "/project3.jpg",
    "/project4.jpg",
    "/fullImage.jpg",
    "/Corbo_Digital-1.png",
];

/// Errors raised by the offline cache.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    /// The network could not be reached.
    #[error("network unavailable: {0}")]
    Network(String),

    /// Network failed and nothing was cached for this path.
    #[error("offline and {path} is not cached")]
    Offline { path: String },

    /// A precache asset could not be fetched during install.
    #[error("failed to precache {path}: status {status}")]
    Install { path: String, status: u16 },
}

/// What kind of resource a request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    Image,
    Document,
    Script,
    Style,
    #[default]
    Other,
}

/// An outgoing fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: String,
    pub destination: Destination,
}

impl Request {
    #[must_use]
    pub fn new(url: impl Into<String>, destination: Destination) -> Self {
        Self {
            url: url.into(),
            destination,
        }
    }

    /// A request with no declared destination.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url, Destination::Other)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// URL path without scheme, host, query, or fragment.
    #[must_use]
    pub fn path(&self) -> &str {
        let rest = match self.url.find("://") {
            Some(i) => {
                let after = &self.url[i + 3..];
                after.find('/').map_or("/", |j| &after[j..])
            }
            None => self.url.as_str(),
        };
        let end = rest.find(['?', '#']).unwrap_or(rest.len());
        &rest[..end]
    }
}

/// A fetched or cached response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    #[must_use]
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Only 200 responses are cached.
    #[must_use]
    pub fn is_cacheable(&self) -> bool {
        self.status == 200
    }
}

/// How a request is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStrategy {
    CacheFirst,
    NetworkFirst,
}

/// Pick the strategy for `request`.
#[must_use]
pub fn strategy_for(request: &Request) -> CacheStrategy {
    let path = request.path();
    if request.destination == Destination::Image
        || path.ends_with(".jpg")
        || path.ends_with(".png")
    {
        CacheStrategy::CacheFirst
    } else {
        CacheStrategy::NetworkFirst
    }
}

/// Cache names to delete on activation: everything but [`CACHE_NAME`].
#[must_use]
pub fn stale_caches<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| *name != CACHE_NAME)
        .collect()
}

/// Where a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Network,
}

/// Transport used by [`OfflineCache`].
pub trait Network {
    /// Fetch `request`. An `Err` means the network was unreachable.
    fn fetch(&mut self, request: &Request) -> Result<Response, CacheError>;
}

/// In-memory cache generation with its fetch policy.
#[derive(Debug)]
pub struct OfflineCache<N> {
    entries: HashMap<String, Response>,
    network: N,
}

impl<N: Network> OfflineCache<N> {
    #[must_use]
    pub fn new(network: N) -> Self {
        Self {
            entries: HashMap::new(),
            network,
        }
    }

    /// Store every precache asset. Fails on the first asset that cannot be
    /// fetched with a 200, leaving earlier assets cached.
    pub fn install(&mut self) -> Result<usize, CacheError> {
        for path in PRECACHE_ASSETS {
            let response = self.network.fetch(&Request::get(path))?;
            if !response.is_cacheable() {
                return Err(CacheError::Install {
                    path: path.to_string(),
                    status: response.status,
                });
            }
            self.entries.insert(path.to_string(), response);
        }
        info!(cache = CACHE_NAME, assets = PRECACHE_ASSETS.len(), "Assets precached");
        Ok(PRECACHE_ASSETS.len())
    }

    /// Serve `request` according to [`strategy_for`].
    pub fn respond(&mut self, request: &Request) -> Result<(Response, Source), CacheError> {
        let strategy = strategy_for(request);
        debug!(path = request.path(), ?strategy, "Offline cache request");
        match strategy {
            CacheStrategy::CacheFirst => {
                if let Some(hit) = self.entries.get(request.path()) {
                    return Ok((hit.clone(), Source::Cache));
                }
                let response = self.network.fetch(request)?;
                self.store(request, &response);
                Ok((response, Source::Network))
            }
            CacheStrategy::NetworkFirst => match self.network.fetch(request) {
                Ok(response) => {
                    self.store(request, &response);
                    Ok((response, Source::Network))
                }
                Err(err) => {
                    debug!(%err, path = request.path(), "Falling back to cache");
                    self.entries
                        .get(request.path())
                        .map(|hit| (hit.clone(), Source::Cache))
                        .ok_or_else(|| CacheError::Offline {
                            path: request.path().to_string(),
                        })
                }
            },
        }
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn network_mut(&mut self) -> &mut N {
        &mut self.network
    }

    fn store(&mut self, request: &Request, response: &Response) {
        if response.is_cacheable() {
            self.entries
                .insert(request.path().to_string(), response.clone());
        }
    }
}
