//! Connection configuration and its resolution against the defaults.
//!
//! Callers describe their connection as a set of per-field overrides which
//! are overlaid onto [`ClientOptions::default`] once, at client construction.
//! An override is tri-state: a field can inherit the default, replace it, or
//! explicitly erase it. An erased field is never backfilled by the default.

/// Tri-state override for one connection setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Override<T> {
    /// Keep the default value.
    #[default]
    Inherit,
    /// Erase the setting. The default is not backfilled.
    Unset,
    /// Replace the default.
    Set(T),
}

impl<T> Override<T> {
    fn apply(self, default: Option<T>) -> Option<T> {
        match self {
            Override::Inherit => default,
            Override::Unset => None,
            Override::Set(value) => Some(value),
        }
    }
}

/// Partial connection configuration supplied at client construction.
///
/// Every field starts as [`Override::Inherit`]. Builder-style setters replace
/// a field; the `clear_*` variants erase it.
///
/// # Example
///
/// ```
/// use webhdfs_client::options::{ClientOptions, OptionOverrides};
///
/// let options = ClientOptions::resolve(
///     OptionOverrides::new().host("namenode.example.com").port(9870),
/// );
/// assert_eq!(options.host.as_deref(), Some("namenode.example.com"));
/// assert_eq!(options.user.as_deref(), Some("webuser"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub host: Override<String>,
    pub path: Override<String>,
    pub port: Override<u16>,
    pub protocol: Override<String>,
    pub user: Override<String>,
}

impl OptionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Override::Set(host.into());
        self
    }

    pub fn clear_host(mut self) -> Self {
        self.host = Override::Unset;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Override::Set(path.into());
        self
    }

    pub fn clear_path(mut self) -> Self {
        self.path = Override::Unset;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Override::Set(port);
        self
    }

    pub fn clear_port(mut self) -> Self {
        self.port = Override::Unset;
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Override::Set(protocol.into());
        self
    }

    pub fn clear_protocol(mut self) -> Self {
        self.protocol = Override::Unset;
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Override::Set(user.into());
        self
    }

    pub fn clear_user(mut self) -> Self {
        self.user = Override::Unset;
        self
    }
}

/// Fully-resolved connection configuration.
///
/// Immutable after construction, except for the one-time path normalization
/// performed when the request factory derives its base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub host: Option<String>,
    pub path: Option<String>,
    pub port: Option<u16>,
    pub protocol: Option<String>,
    pub user: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: Some("localhost".to_string()),
            path: Some("webhdfs/v1/".to_string()),
            port: Some(50070),
            protocol: Some("http".to_string()),
            user: Some("webuser".to_string()),
        }
    }
}

impl ClientOptions {
    /// Overlay `overrides` onto the defaults, field by field.
    ///
    /// A non-inherited override always wins, including [`Override::Unset`].
    pub fn resolve(overrides: OptionOverrides) -> Self {
        let defaults = Self::default();
        Self {
            host: overrides.host.apply(defaults.host),
            path: overrides.path.apply(defaults.path),
            port: overrides.port.apply(defaults.port),
            protocol: overrides.protocol.apply(defaults.protocol),
            user: overrides.user.apply(defaults.user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_yields_defaults() {
        let options = ClientOptions::resolve(OptionOverrides::new());
        assert_eq!(options, ClientOptions::default());
    }

    #[test]
    fn supplied_value_merges_with_defaults() {
        let options = ClientOptions::resolve(OptionOverrides::new().port(1234));
        let defaults = ClientOptions::default();
        assert_eq!(options.host, defaults.host);
        assert_eq!(options.path, defaults.path);
        assert_eq!(options.port, Some(1234));
        assert_eq!(options.protocol, defaults.protocol);
        assert_eq!(options.user, defaults.user);
    }

    #[test]
    fn supplied_values_win_over_defaults() {
        let options = ClientOptions::resolve(
            OptionOverrides::new()
                .host("unittest.com")
                .path("I/changed/this/Path/")
                .port(1234)
                .protocol("https")
                .user("unit tester"),
        );
        assert_eq!(options.host.as_deref(), Some("unittest.com"));
        assert_eq!(options.path.as_deref(), Some("I/changed/this/Path/"));
        assert_eq!(options.port, Some(1234));
        assert_eq!(options.protocol.as_deref(), Some("https"));
        assert_eq!(options.user.as_deref(), Some("unit tester"));
    }

    #[test]
    fn explicit_erase_is_not_backfilled() {
        let options = ClientOptions::resolve(
            OptionOverrides::new()
                .clear_host()
                .clear_path()
                .clear_port()
                .clear_protocol()
                .clear_user(),
        );
        assert_eq!(options.host, None);
        assert_eq!(options.path, None);
        assert_eq!(options.port, None);
        assert_eq!(options.protocol, None);
        assert_eq!(options.user, None);
    }

    #[test]
    fn single_field_overrides() {
        let options = ClientOptions::resolve(OptionOverrides::new().host("unit-test.org"));
        assert_eq!(options.host.as_deref(), Some("unit-test.org"));

        let options = ClientOptions::resolve(OptionOverrides::new().path("unit/test/path/"));
        assert_eq!(options.path.as_deref(), Some("unit/test/path/"));

        let options = ClientOptions::resolve(OptionOverrides::new().user("SuperAdminUser"));
        assert_eq!(options.user.as_deref(), Some("SuperAdminUser"));

        let options = ClientOptions::resolve(OptionOverrides::new().protocol("webhdfs"));
        assert_eq!(options.protocol.as_deref(), Some("webhdfs"));
    }

    #[test]
    fn erase_mixed_with_set() {
        let options =
            ClientOptions::resolve(OptionOverrides::new().clear_user().host("nn.example.com"));
        assert_eq!(options.user, None);
        assert_eq!(options.host.as_deref(), Some("nn.example.com"));
        assert_eq!(options.port, Some(50070));
    }
}
