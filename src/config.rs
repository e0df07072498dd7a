//! Configuration for the M-Bus ASCII codec
//!
//! Centralized configuration with sensible defaults.

/// Main configuration shared by the library and the `mbus-ascii` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Decoding Configuration
    // -------------------------------------------------------------------------
    /// How TID/PID/ADR digit bytes are checked when parsing a frame
    pub digit_policy: DigitPolicy,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Text printed before every hex byte (e.g. "0x")
    pub byte_prefix: String,

    /// Text printed after every hex byte (e.g. ",")
    pub byte_suffix: String,
}

/// Digit decoding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitPolicy {
    /// Reject any digit byte outside '0'..='9' with `MalformedDigits`
    #[default]
    Strict,

    /// Decode digit bytes arithmetically without checking them.
    /// Malformed bytes yield meaningless field values instead of an error.
    Lenient,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            digit_policy: DigitPolicy::Strict,
            byte_prefix: String::new(),
            byte_suffix: String::new(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the digit decoding policy
    pub fn digit_policy(mut self, policy: DigitPolicy) -> Self {
        self.config.digit_policy = policy;
        self
    }

    /// Set the text printed before each byte
    pub fn byte_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.byte_prefix = prefix.into();
        self
    }

    /// Set the text printed after each byte
    pub fn byte_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.byte_suffix = suffix.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
