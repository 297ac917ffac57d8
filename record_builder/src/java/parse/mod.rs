//! Parser for Java type expressions.
//!
//! This module uses nom to read declarations such as:
//! - `String`
//! - `java.util.List<String>`
//! - `Map<String, ? extends Number>`
//! - `List<int[]>[]`
//!
//! Parsing happens in two passes. The nom grammar produces class names with
//! an empty package for unqualified names, then `resolve` maps well-known
//! simple names onto `java.lang` and `java.util` and turns declared type
//! variables into [`TypeName::Variable`].

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{opt, recognize};
use nom::error::{Error as NomError, ErrorKind};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, pair, preceded};
use nom::{IResult, Parser};

use super::type_name::{ClassName, Primitive, TypeName, Wildcard};
use crate::error::{RecordBuilderError, RecordBuilderResult};

/// Simple names implicitly visible from `java.lang`.
const JAVA_LANG: &[&str] = &[
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Comparable",
    "Double",
    "Enum",
    "Float",
    "Integer",
    "Iterable",
    "Long",
    "Number",
    "Object",
    "Record",
    "Short",
    "String",
    "Void",
];

/// `java.util` names a record component commonly uses without qualification.
const JAVA_UTIL: &[&str] = &[
    "ArrayList",
    "Collection",
    "Deque",
    "HashMap",
    "HashSet",
    "LinkedHashMap",
    "LinkedHashSet",
    "LinkedList",
    "List",
    "Map",
    "NavigableMap",
    "NavigableSet",
    "Optional",
    "Queue",
    "Set",
    "SortedMap",
    "SortedSet",
    "TreeMap",
    "TreeSet",
];

/// Parses a Java type expression with no type variables in scope.
///
/// # Examples
///
/// ```
/// use record_builder::java::{ClassName, parse_type};
///
/// let ty = parse_type("Map<String, ? extends Number>")?;
/// assert_eq!(ty.raw_class(), Some(&ClassName::MAP));
/// assert!(ty.type_arguments()[1].is_wildcard());
/// # Ok::<(), record_builder::RecordBuilderError>(())
/// ```
///
/// # Errors
///
/// Returns [`RecordBuilderError::TypeSyntax`] when the input is not a type
/// expression or has trailing text.
pub fn parse_type(input: &str) -> RecordBuilderResult<TypeName> {
    parse_type_with_variables(input, &[])
}

/// Parses a Java type expression, treating `variables` as type variables.
///
/// # Errors
///
/// Returns [`RecordBuilderError::TypeSyntax`] when the input is not a type
/// expression or has trailing text.
pub fn parse_type_with_variables(
    input: &str,
    variables: &[&str],
) -> RecordBuilderResult<TypeName> {
    let trimmed = input.trim();
    let (rest, parsed) = type_expr(trimmed).map_err(|err| syntax_error(input, &err.to_string()))?;
    if !rest.trim().is_empty() {
        return Err(syntax_error(
            input,
            &format!("unexpected trailing input '{}'", rest.trim()),
        ));
    }
    Ok(resolve(parsed, variables))
}

fn syntax_error(input: &str, message: &str) -> RecordBuilderError {
    RecordBuilderError::TypeSyntax {
        input: input.to_owned(),
        message: message.to_owned(),
    }
}

/// Parse a Java identifier (letters, digits, `_` and `$`, not starting with a
/// digit).
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_' || c == '$'),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '$'),
    ))
    .parse(input)
}

/// Parse a dotted name such as `java.util.Map.Entry`.
fn qualified_name(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('.'), identifier).parse(input)
}

/// Parse `<A, B, ...>`.
fn type_arguments(input: &str) -> IResult<&str, Vec<TypeName>> {
    delimited(
        pair(char('<'), multispace0),
        separated_list1(delimited(multispace0, char(','), multispace0), type_expr),
        pair(multispace0, char('>')),
    )
    .parse(input)
}

/// Parse `?`, `? extends T` or `? super T`.
fn wildcard(input: &str) -> IResult<&str, TypeName> {
    let (after_mark, _) = char('?').parse(input)?;
    let (rest, bound) = opt(pair(
        delimited(multispace1, alt((tag("extends"), tag("super"))), multispace1),
        type_expr,
    ))
    .parse(after_mark)?;
    let parsed = match bound {
        None => Wildcard::Unbounded,
        Some(("extends", bound_type)) => Wildcard::Extends(Box::new(bound_type)),
        Some((_, bound_type)) => Wildcard::Super(Box::new(bound_type)),
    };
    Ok((rest, TypeName::Wildcard(parsed)))
}

/// Parse a class, primitive or array type.
fn reference(input: &str) -> IResult<&str, TypeName> {
    let (after_name, segments) = qualified_name(input)?;
    let (after_args, arguments) = opt(preceded(multispace0, type_arguments)).parse(after_name)?;
    let (rest, dimensions) = many0(preceded(multispace0, tag("[]"))).parse(after_args)?;

    let primitive = match segments.as_slice() {
        [single] => Primitive::from_keyword(single),
        _ => None,
    };
    let base = match (primitive, arguments) {
        (Some(keyword), None) => TypeName::Primitive(keyword),
        // primitives never take type arguments
        (Some(_), Some(_)) => {
            return Err(nom::Err::Failure(NomError::new(input, ErrorKind::Verify)));
        }
        (None, None) => TypeName::Class(class_from_segments(&segments)),
        (None, Some(type_args)) => {
            TypeName::parameterized(class_from_segments(&segments), type_args)
        }
    };

    let array = dimensions
        .iter()
        .fold(base, |component, _| TypeName::Array(Box::new(component)));
    Ok((rest, array))
}

fn type_expr(input: &str) -> IResult<&str, TypeName> {
    alt((wildcard, reference)).parse(input)
}

/// Splits `java.util.Map.Entry` into package `java.util` and simple name
/// `Map.Entry`: the package ends before the first capitalised segment.
fn class_from_segments(segments: &[&str]) -> ClassName {
    let split = segments
        .iter()
        .position(|segment| segment.starts_with(|c: char| c.is_uppercase()))
        .unwrap_or(segments.len().saturating_sub(1));
    let (package, simple) = segments.split_at(split);
    ClassName::new(package.join("."), simple.join("."))
}

/// Resolves unqualified names against type variables, `java.lang` and the
/// well-known `java.util` types.
fn resolve(ty: TypeName, variables: &[&str]) -> TypeName {
    match ty {
        TypeName::Class(class) => resolve_class(class, variables),
        TypeName::Parameterized { raw, arguments } => {
            let resolved_raw = match resolve_class(raw, &[]) {
                TypeName::Class(class) => class,
                other => return other,
            };
            TypeName::parameterized(
                resolved_raw,
                arguments
                    .into_iter()
                    .map(|argument| resolve(argument, variables))
                    .collect(),
            )
        }
        TypeName::Wildcard(Wildcard::Extends(bound)) => {
            TypeName::subtype_of(resolve(*bound, variables))
        }
        TypeName::Wildcard(Wildcard::Super(bound)) => {
            TypeName::supertype_of(resolve(*bound, variables))
        }
        TypeName::Array(component) => TypeName::Array(Box::new(resolve(*component, variables))),
        TypeName::Primitive(_) | TypeName::Variable(_) | TypeName::Wildcard(Wildcard::Unbounded) => {
            ty
        }
    }
}

fn resolve_class(class: ClassName, variables: &[&str]) -> TypeName {
    if !class.package().is_empty() {
        return TypeName::Class(class);
    }
    let simple = class.simple_name();
    if variables.contains(&simple) {
        return TypeName::variable(simple);
    }
    let outer = class.top_level_name();
    if JAVA_LANG.contains(&outer) {
        return TypeName::Class(ClassName::new("java.lang", simple));
    }
    if JAVA_UTIL.contains(&outer) {
        return TypeName::Class(ClassName::new("java.util", simple));
    }
    TypeName::Class(class)
}
