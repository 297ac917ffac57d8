//! Step definitions for the collection helper scenarios.
#![expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd step macros require owned capture values"
)]

use crate::fixtures::UnitState;
use anyhow::{Context, Result, anyhow, ensure};
use record_builder::java::MethodSpec;
use record_builder::{CollectionHelpers, CollectionKind, RecordBuilderError, SingleItemMode};
use rstest_bdd_macros::{given, then, when};
use test_helpers::fields::field;
use test_helpers::text::unquote;

fn component(unit: &UnitState, name: &str) -> Result<record_builder::FieldDescriptor> {
    unit.field(unquote(name))
        .ok_or_else(|| anyhow!("no component named {name} was declared"))
}

#[given("immutable collections are enabled")]
fn enable_immutable(unit: &UnitState) {
    unit.immutable.set(true);
}

#[given("single-item adders are enabled")]
fn enable_adders(unit: &UnitState) {
    unit.adders.set(true);
}

#[given("a component {name} of type {type_expr}")]
fn declare_component(unit: &UnitState, name: String, type_expr: String) -> Result<()> {
    ensure!(
        unit.helpers.is_empty(),
        "components must be declared before helpers are used"
    );
    let declared = field(unquote(&name), unquote(&type_expr))?;
    let mut fields = unit.fields.take().unwrap_or_default();
    fields.push(declared);
    unit.fields.set(fields);
    Ok(())
}

#[when("the build arguments are generated")]
fn generate_arguments(unit: &UnitState) {
    let mut helpers = unit.take_helpers();
    let arguments = unit
        .fields
        .get()
        .unwrap_or_default()
        .iter()
        .map(|declared| {
            let argument = helpers.build_argument(declared).to_inline_string();
            (declared.name().to_owned(), argument)
        })
        .collect();
    unit.arguments.set(arguments);
    unit.helpers.set(helpers);
}

#[when("the helpers are flushed")]
fn flush_helpers(unit: &UnitState) {
    let mut helpers = unit.take_helpers();
    let mut methods: Vec<MethodSpec> = Vec::new();
    helpers.flush_shims(&mut methods);
    helpers.flush_makers(&mut methods);
    let mut emitted = unit.emitted.take().unwrap_or_default();
    emitted.extend(methods.iter().map(|method| method.name().to_owned()));
    unit.emitted.set(emitted);
    unit.helpers.set(helpers);
}

#[then("the component {name} is classified as {kind}")]
fn classified_as(unit: &UnitState, name: String, kind: String) -> Result<()> {
    let expected = match kind.as_str() {
        "list" => Some(CollectionKind::Sequence),
        "set" => Some(CollectionKind::Set),
        "map" => Some(CollectionKind::AssociativeMap),
        "collection" => Some(CollectionKind::GenericCollection),
        "nothing" => None,
        other => return Err(anyhow!("unknown collection kind '{other}'")),
    };
    let declared = component(unit, &name)?;
    let actual = CollectionHelpers::classify(&declared);
    ensure!(actual == expected, "expected {expected:?}, got {actual:?}");
    Ok(())
}

#[then("the build argument for {name} is {expected}")]
fn build_argument_is(unit: &UnitState, name: String, expected: String) -> Result<()> {
    let wanted_name = unquote(&name);
    let argument = unit
        .arguments
        .with_ref(|arguments| {
            arguments
                .iter()
                .find(|(component_name, _)| component_name == wanted_name)
                .map(|(_, argument)| argument.clone())
        })
        .flatten()
        .with_context(|| format!("no build argument recorded for {name}"))?;
    ensure!(
        argument == unquote(&expected),
        "expected {expected}, got {argument}"
    );
    Ok(())
}

fn adder_wild_type(unit: &UnitState, name: &str, mode: SingleItemMode) -> Result<Option<String>> {
    let declared = component(unit, name)?;
    let helpers = unit.take_helpers();
    let wild = helpers
        .single_item_metadata(&declared, mode)
        .map(|metadata| metadata.wild_type().to_string());
    unit.helpers.set(helpers);
    Ok(wild)
}

#[then("the adder for {name} accepts {expected}")]
fn adder_accepts(unit: &UnitState, name: String, expected: String) -> Result<()> {
    let wild = adder_wild_type(unit, &name, SingleItemMode::Standard)?
        .with_context(|| format!("{name} should have an adder"))?;
    ensure!(wild == unquote(&expected), "expected {expected}, got {wild}");
    Ok(())
}

#[then("the setter adder for {name} accepts {expected}")]
fn setter_adder_accepts(unit: &UnitState, name: String, expected: String) -> Result<()> {
    let wild = adder_wild_type(unit, &name, SingleItemMode::StandardForSetter)?
        .with_context(|| format!("{name} should have a setter adder"))?;
    ensure!(wild == unquote(&expected), "expected {expected}, got {wild}");
    Ok(())
}

#[then("the component {name} has no adder when wildcards are excluded")]
fn no_adder_for_wildcards(unit: &UnitState, name: String) -> Result<()> {
    let wild = adder_wild_type(unit, &name, SingleItemMode::ExcludeWildcardTypes)?;
    ensure!(wild.is_none(), "unexpected adder type {wild:?}");
    Ok(())
}

#[then("the adder for {name} grows a {implementation}")]
fn adder_grows(unit: &UnitState, name: String, implementation: String) -> Result<()> {
    let declared = component(unit, &name)?;
    let helpers = unit.take_helpers();
    let metadata = helpers.single_item_metadata(&declared, SingleItemMode::Standard);
    unit.helpers.set(helpers);
    let actual = metadata
        .with_context(|| format!("{name} should have an adder"))?
        .implementation()
        .canonical_name();
    ensure!(
        actual == unquote(&implementation),
        "expected {implementation}, got {actual}"
    );
    Ok(())
}

#[then("the emitted helpers are {names}")]
fn emitted_helpers_are(unit: &UnitState, names: String) -> Result<()> {
    let expected: Vec<&str> = unquote(&names).split(", ").collect();
    let emitted = unit.emitted.get().unwrap_or_default();
    ensure!(emitted == expected, "expected {expected:?}, got {emitted:?}");
    Ok(())
}

#[then("no helpers are emitted")]
fn no_helpers_emitted(unit: &UnitState) -> Result<()> {
    let emitted = unit.emitted.get().unwrap_or_default();
    ensure!(emitted.is_empty(), "unexpected helpers {emitted:?}");
    Ok(())
}

#[then("asking for the mutable maker of {name} fails")]
fn maker_lookup_fails(unit: &UnitState, name: String) -> Result<()> {
    let declared = component(unit, &name)?;
    let helpers = unit.take_helpers();
    let outcome = helpers
        .mutable_maker_name(&declared)
        .map(str::to_owned);
    unit.helpers.set(helpers);
    match outcome {
        Err(RecordBuilderError::UnsupportedCollection { field, .. }) => {
            ensure!(field == declared.name(), "error names {field}");
            Ok(())
        }
        other => Err(anyhow!("expected an unsupported collection error, got {other:?}")),
    }
}
