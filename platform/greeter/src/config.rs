use crate::error::Error;
use std::env::VarError;

pub const DEFAULT_MESSAGE: &str = "Hello, DevopsCardmarket Interview!";
pub const DEFAULT_PORT: u16 = 8080;

const MESSAGE_VAR: &str = "APP_MESSAGE";
const PORT_VAR: &str = "APP_PORT";

/// Settings read once at startup and shared read-only with every handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub message: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Builds the config from `lookup`, which follows the `std::env::var` contract.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let message = read(&lookup, MESSAGE_VAR)?.unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        let port = match read(&lookup, PORT_VAR)? {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| Error::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { message, port })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn read<F>(lookup: &F, name: &'static str) -> Result<Option<String>, Error>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(Error::NotUnicode { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.message, "Hello, DevopsCardmarket Interview!");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_MESSAGE", "Custom Test Message"),
            ("APP_PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.message, "Custom Test Message");
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn test_empty_message_is_kept() {
        let config = Config::from_lookup(lookup_from(&[("APP_MESSAGE", "")])).unwrap();

        assert_eq!(config.message, "");
    }

    #[test]
    fn test_port_whitespace_is_trimmed() {
        let config = Config::from_lookup(lookup_from(&[("APP_PORT", " 3000\n")])).unwrap();

        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        for value in ["notanumber", "", "70000", "-1", "80.5", "8_080"] {
            let result = Config::from_lookup(lookup_from(&[("APP_PORT", value)]));

            match result {
                Err(Error::InvalidPort { value: got, .. }) => assert_eq!(got, value),
                other => panic!("expected InvalidPort for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_non_unicode_is_rejected() {
        let result = Config::from_lookup(|name| match name {
            "APP_MESSAGE" => Err(VarError::NotUnicode(OsString::from("x"))),
            _ => Err(VarError::NotPresent),
        });

        assert!(matches!(
            result,
            Err(Error::NotUnicode {
                name: "APP_MESSAGE"
            })
        ));
    }
}
