//! Helpers for loading options inside a `figment::Jail`.
//!
//! The jail gives every test its own working directory and environment, so
//! `record-builder.toml` files and `RECORD_BUILDER_*` variables set here never
//! leak between tests.

use anyhow::{Result, anyhow};
use record_builder::RecordBuilderOptions;
use record_builder::options::DEFAULT_CONFIG_FILE;

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Loads [`RecordBuilderOptions`] in a fresh jail holding `toml` as the
/// default config file (skipped when `None`) and the given environment.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or loading fails; the
/// loader's message is preserved.
pub fn load_options_in_jail(
    toml: Option<&str>,
    env: &[(&str, &str)],
) -> Result<RecordBuilderOptions> {
    with_jail(|jail| {
        if let Some(contents) = toml {
            jail.create_file(DEFAULT_CONFIG_FILE, contents)?;
        }
        for (key, value) in env {
            jail.set_env(key, value);
        }
        RecordBuilderOptions::load().map_err(figment_error)
    })
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a map_err adapter, which hands over ownership"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
