//! Tests for option defaults, layering and validation.

use super::*;
use rstest::rstest;

// The jail switches into its own directory, so the default file is the one
// the test created.
fn load_in_jail(_jail: &figment::Jail) -> RecordBuilderResult<RecordBuilderOptions> {
    RecordBuilderOptions::load()
}

#[rstest]
fn defaults_match_the_annotation() {
    let options = RecordBuilderOptions::default();
    assert_eq!(options.suffix, "Builder");
    assert_eq!(options.single_item_builder_prefix, "add");
    assert_eq!(options.file_indent, "    ");
    assert!(!options.use_immutable_collections);
    assert!(!options.add_single_item_collection_builders);
    assert!(options.enable_getters);
    assert!(options.validate().is_ok());
}

#[rstest]
fn file_overrides_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            DEFAULT_CONFIG_FILE,
            "use_immutable_collections = true\nsingle_item_builder_prefix = \"with\"\n",
        )?;
        let options = load_in_jail(jail).map_err(|err| err.to_string())?;
        assert!(options.use_immutable_collections);
        assert_eq!(options.single_item_builder_prefix, "with");
        assert_eq!(options.suffix, "Builder");
        Ok(())
    });
}

#[rstest]
fn environment_overrides_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILE, "use_immutable_collections = true\n")?;
        jail.set_env("RECORD_BUILDER_USE_IMMUTABLE_COLLECTIONS", "false");
        jail.set_env("RECORD_BUILDER_ADD_SINGLE_ITEM_COLLECTION_BUILDERS", "true");
        let options = load_in_jail(jail).map_err(|err| err.to_string())?;
        assert!(!options.use_immutable_collections);
        assert!(options.add_single_item_collection_builders);
        Ok(())
    });
}

#[rstest]
fn wrong_value_types_are_gathering_errors() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILE, "use_immutable_collections = \"often\"\n")?;
        let err = load_in_jail(jail).expect_err("a string is not a bool");
        assert!(matches!(err, RecordBuilderError::Gathering(_)), "{err:?}");
        Ok(())
    });
}

#[rstest]
#[case("suffix", "Not Valid")]
#[case("single_item_builder_prefix", "")]
#[case("build_method_name", "class")]
#[case("setter_prefix", "1set")]
fn invalid_names_fail_validation(#[case] key: &str, #[case] value: &str) {
    figment::Jail::expect_with(|jail| {
        jail.create_file(DEFAULT_CONFIG_FILE, &format!("{key} = \"{value}\"\n"))?;
        let err = load_in_jail(jail).expect_err("invalid name must be rejected");
        assert!(
            matches!(err, RecordBuilderError::Validation { key: ref found, .. } if found == key),
            "{err:?}"
        );
        Ok(())
    });
}

#[rstest]
fn empty_optional_prefixes_are_accepted() {
    let options = RecordBuilderOptions {
        setter_prefix: String::new(),
        getter_prefix: "get".to_owned(),
        ..RecordBuilderOptions::default()
    };
    assert!(options.validate().is_ok());
}

#[rstest]
fn non_whitespace_indent_is_rejected() {
    let options = RecordBuilderOptions {
        file_indent: "--".to_owned(),
        ..RecordBuilderOptions::default()
    };
    let err = options.validate().expect_err("indent must be whitespace");
    assert!(matches!(err, RecordBuilderError::Validation { ref key, .. } if key == "file_indent"));
}
