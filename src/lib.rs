//! Parser and comparator for release tag versions.
//!
//! ## Motivation
//!
//! Release tags found in the wild rarely follow the semantic version specification.
//! This crate parses them into a value that can be compared, sorted, and printed in a canonical form.
//!
//! Two grammars are available:
//!
//! - [`parse`] is permissive. It accepts a leading `v`, any number of numeric segments,
//!   pre-release text glued to the last number (e.g. "1.7rc2") or introduced by a `.`
//!   (e.g. "2.29.0.rc0.261.g7178c9af9c").
//! - [`parse_strict`] accepts only the semantic version shape, with minor and patch being optional.
//!
//! ## Examples
//!
//! ```rust
//! let version = tagver::parse("v1.7rc2").unwrap();
//! assert_eq!(version.segments(), &[1, 7, 0]);
//! assert_eq!(version.pre_release(), "rc2");
//! assert_eq!(version.to_string(), "1.7.0-rc2");
//!
//! // pre-releases come before the release
//! assert!(version < tagver::parse("1.7").unwrap());
//!
//! // missing numbers are zero and metadata is ignored
//! assert_eq!(
//!     tagver::parse("1.7").unwrap(),
//!     tagver::parse("1.7.0.0+build.42").unwrap()
//! );
//!
//! // the strict grammar rejects what the permissive one allows
//! assert!(tagver::parse_strict("1.7rc2").is_err());
//! assert!(tagver::parse_strict("1.7.0-rc2").is_ok());
//! ```
//!
//! ## Errors
//!
//! ```rust
//! use tagver::ErrorKind;
//!
//! let error = tagver::parse("1.2.3 final").unwrap_err();
//! assert_eq!(error.error_kind(), ErrorKind::Malformed);
//! assert_eq!(error.to_string(), "Unexpected ` `");
//! assert_eq!(
//!     format!("{:#}", error),
//!     "Unexpected ` `\n|    1.2.3 final\n|    ~~~~~^\n"
//! );
//!
//! let error = tagver::parse_strict("1.2.3.4").unwrap_err();
//! assert_eq!(error.error_kind(), ErrorKind::NotStrict);
//! ```
//!
//! ## Custom versions
//!
//! Any type implementing [`VersionBuilder`] can be the target of a parse.
//!
//! ```rust
//! use tagver::VersionBuilder;
//!
//! /// newtype around bool, so we can implement the VersionBuilder trait for it
//! #[derive(Debug, Default)]
//! struct IsPreRelease(bool);
//!
//! impl VersionBuilder<'_> for IsPreRelease {
//!     type Out = bool;
//!
//!     fn new() -> Self {
//!         Self::default()
//!     }
//!
//!     fn build(self) -> Self::Out {
//!         self.0
//!     }
//!
//!     fn add_pre_release(&mut self, _pre_release: &str) {
//!         self.0 = true;
//!     }
//! }
//!
//! fn is_pre_release(v: &str) -> bool {
//!     tagver::parse_into::<IsPreRelease>(v).unwrap_or_default()
//! }
//!
//! assert!(is_pre_release("1.2.3-pre"));
//! assert!(is_pre_release("1.2.3pre"));
//! assert!(!is_pre_release("1.2.3"));
//! assert!(!is_pre_release("1.2.3+build"));
//! ```

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

pub use tagver_parser::{Error, ErrorKind, Grammar, OwnedError, VersionBuilder};
pub use tagver_version::{compare, Metadata, PreRelease, Version};

/// Parse a string slice into a [`Version`] with the permissive grammar.
///
/// ## Examples
///
/// ```rust
/// let version = tagver::parse("2.29.0.rc0.261.g7178c9af9c").unwrap();
/// assert_eq!(version.segments(), &[2, 29, 0]);
/// assert_eq!(version.pre_release(), "rc0.261.g7178c9af9c");
/// ```
pub fn parse(input: &str) -> Result<Version<'_>, Error<'_>> {
    Version::parse(input)
}

/// Parse a string slice into a [`Version`] with the strict grammar.
///
/// ## Examples
///
/// ```rust
/// let version = tagver::parse_strict("1.2-beta").unwrap();
/// assert_eq!(version.to_string(), "1.2.0-beta");
///
/// assert!(tagver::parse_strict("1.2.beta").is_err());
/// ```
pub fn parse_strict(input: &str) -> Result<Version<'_>, Error<'_>> {
    Version::parse_strict(input)
}

/// Parse a string slice into any [`VersionBuilder`] with the permissive grammar.
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    tagver_parser::parse::<V>(input)
}

/// Parse a string slice into any [`VersionBuilder`] with the strict grammar.
pub fn parse_strict_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    tagver_parser::parse_strict::<V>(input)
}
