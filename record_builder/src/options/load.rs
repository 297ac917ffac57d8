//! Layered loading of [`RecordBuilderOptions`].

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::debug;

use super::RecordBuilderOptions;
use crate::error::{RecordBuilderError, RecordBuilderResult};

/// File consulted by [`RecordBuilderOptions::load`].
pub const DEFAULT_CONFIG_FILE: &str = "record-builder.toml";

/// Prefix of environment variables overriding options, e.g.
/// `RECORD_BUILDER_USE_IMMUTABLE_COLLECTIONS=true`.
pub const ENV_PREFIX: &str = "RECORD_BUILDER_";

impl RecordBuilderOptions {
    /// Builds the provider stack: defaults, then `path` (if it exists), then
    /// the environment.
    #[must_use]
    pub fn figment(path: &Utf8Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_std_path()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads options from [`DEFAULT_CONFIG_FILE`] in the working directory
    /// and the environment.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use record_builder::RecordBuilderOptions;
    ///
    /// # fn run() -> record_builder::RecordBuilderResult<()> {
    /// let options = RecordBuilderOptions::load()?;
    /// if options.use_immutable_collections {
    ///     // shims will be generated
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RecordBuilderError::Gathering`] when a layer cannot be read
    /// or holds values of the wrong type, and
    /// [`RecordBuilderError::Validation`] when a value is unusable.
    pub fn load() -> RecordBuilderResult<Self> {
        Self::load_from(Utf8Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads options from the TOML file at `path` and the environment.
    ///
    /// A missing file contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBuilderError::Gathering`] when a layer cannot be read
    /// or holds values of the wrong type, and
    /// [`RecordBuilderError::Validation`] when a value is unusable.
    pub fn load_from(path: &Utf8Path) -> RecordBuilderResult<Self> {
        let options: Self = Self::figment(path)
            .extract()
            .map_err(RecordBuilderError::gathering)?;
        options.validate()?;
        debug!(
            %path,
            use_immutable_collections = options.use_immutable_collections,
            add_single_item_collection_builders = options.add_single_item_collection_builders,
            "loaded record builder options"
        );
        Ok(options)
    }
}
