//! HTTP server configuration loaded from the environment.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use tracing::warn;
use url::Url;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store_base: Url,
    pub(crate) store_api_key: Option<String>,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
        store_base: Url,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            store_base,
            store_api_key: None,
        }
    }

    /// Attach the bearer key sent to the remote store.
    #[must_use]
    pub fn with_store_api_key(mut self, api_key: Option<String>) -> Self {
        self.store_api_key = api_key;
        self
    }

    /// Assemble the configuration from the process environment.
    ///
    /// - `PRESSROOM_BIND_ADDR` — listen address (default `0.0.0.0:8080`).
    /// - `STORE_BASE_URL` — base URL of the remote article store (required).
    /// - `STORE_API_KEY` — optional bearer key for store calls.
    /// - `SESSION_KEY_FILE` — session signing key material; without it the
    ///   process refuses to start unless `SESSION_ALLOW_EPHEMERAL=1` (or a
    ///   debug build) permits a generated throwaway key.
    /// - `SESSION_COOKIE_SECURE` — set to `0` to allow plain-HTTP cookies.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when a required variable is missing or
    /// malformed.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr: SocketAddr = env::var("PRESSROOM_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_owned())
            .parse()
            .map_err(|error| {
                std::io::Error::other(format!("invalid PRESSROOM_BIND_ADDR: {error}"))
            })?;

        let store_base = env::var("STORE_BASE_URL")
            .map_err(|_| std::io::Error::other("STORE_BASE_URL is required"))?;
        let store_base = Url::parse(&store_base)
            .map_err(|error| std::io::Error::other(format!("invalid STORE_BASE_URL: {error}")))?;

        let key = load_session_key()?;
        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|value| value != "0")
            .unwrap_or(true);

        Ok(
            Self::new(key, cookie_secure, SameSite::Lax, bind_addr, store_base)
                .with_store_api_key(env::var("STORE_API_KEY").ok()),
        )
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        // Key::derive_from panics below 32 bytes of input material.
        Ok(bytes) if bytes.len() >= 32 => Ok(Key::derive_from(&bytes)),
        Ok(bytes) => Err(std::io::Error::other(format!(
            "session key at {key_path} too short: {} bytes, need at least 32",
            bytes.len()
        ))),
        Err(error) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, %error, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {error}"
                )))
            }
        }
    }
}
