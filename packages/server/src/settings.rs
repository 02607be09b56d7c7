//! Server settings read from the environment at startup.

use std::path::PathBuf;

use klima_dataset::paths;

/// Address to bind when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Port to bind when `PORT` is unset or not a number.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime settings of the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interface to bind (`BIND_ADDR`).
    pub bind_addr: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Directory holding the `GeoJSON` files (`KLIMA_DATA_DIR`).
    pub data_dir: PathBuf,
    /// Map tile token handed to the frontend (`MAPBOX_TOKEN`).
    pub mapbox_token: Option<String>,
}

impl Settings {
    /// Reads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for
    /// anything unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT '{raw}', using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
            data_dir: lookup(paths::DATA_DIR_ENV)
                .filter(|dir| !dir.is_empty())
                .map_or_else(paths::default_data_dir, PathBuf::from),
            mapbox_token: lookup("MAPBOX_TOKEN").filter(|t| !t.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]);
        assert_eq!(s.bind_addr, "127.0.0.1");
        assert_eq!(s.port, 8080);
        assert!(s.data_dir.ends_with("data"));
        assert_eq!(s.mapbox_token, None);
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("BIND_ADDR", "0.0.0.0"),
            ("PORT", "9000"),
            ("KLIMA_DATA_DIR", "/srv/klima"),
            ("MAPBOX_TOKEN", "pk.test"),
        ]);
        assert_eq!(s.bind_addr, "0.0.0.0");
        assert_eq!(s.port, 9000);
        assert_eq!(s.data_dir, PathBuf::from("/srv/klima"));
        assert_eq!(s.mapbox_token.as_deref(), Some("pk.test"));
    }

    #[test]
    fn invalid_port_falls_back() {
        assert_eq!(settings(&[("PORT", "http")]).port, 8080);
    }

    #[test]
    fn empty_token_is_unset() {
        assert_eq!(settings(&[("MAPBOX_TOKEN", "")]).mapbox_token, None);
    }
}
