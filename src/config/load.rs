use std::{env, path::PathBuf};

use super::schema::Settings;

/// Loading and sanity checks for the `[library]`, `[audio]`, `[playback]`
/// and `[logging]` sections.
///
/// A `TROUBADOUR__AUDIO__SAMPLE_MS=2000` style variable beats the same key in
/// `config.toml`; keys missing from both keep their struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TROUBADOUR")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject a zero-length sample preview and volumes rodio would clip.
    pub fn validate(&self) -> Result<(), String> {
        if self.audio.sample_ms == 0 {
            return Err("audio.sample_ms must be >= 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err("audio.volume must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `TROUBADOUR_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TROUBADOUR_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/troubadour/config.toml`
/// or `~/.config/troubadour/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("troubadour").join("config.toml"))
}
