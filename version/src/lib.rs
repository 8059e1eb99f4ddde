//! Comparable release tag version.
//!
//! Companion version struct for the tagver_parser parser.
//! Compared to [`semver::Version`], this version:
//!  - Supports any number of numeric segments (e.g. 1.2.3.4.5)
//!  - Accepts pre-release text glued to the numbers (e.g. 1.7rc2)
//!  - Does not allocate Strings for the pre-release or the metadata
//!
//! [`semver::Version`]: https://docs.rs/semver/1/semver/struct.Version.html
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

use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt::{self, Display, Write},
    hash,
};
use tagver_parser::{Error, Grammar, VersionBuilder};

#[cfg(feature = "serde")]
use serde::{
    de::{self, Deserialize, Deserializer, Visitor},
    ser::{Serialize, Serializer},
};

mod metadata;
use metadata::Segments;
pub use metadata::{Metadata, PreRelease};

/// Every version has at least major, minor, and patch.
const MIN_SEGMENTS: usize = 3;

/// Represents a parsed release tag version.
///
/// The version is bound to the lifetime of the input string.
/// It can only be created by parsing and cannot be changed afterwards.
///
/// Equality, ordering, and hashing consider only the numeric segments
/// and the pre-release. Two versions that differ in their metadata, their
/// original text, or the grammar that parsed them are equal.
#[derive(Debug, Clone)]
pub struct Version<'input> {
    original: &'input str,
    segments: Segments,
    pre: PreRelease<'input>,
    metadata: Metadata<'input>,
    strict: bool,
}

impl<'input> Version<'input> {
    /// Parse a string slice into a Version with the permissive grammar.
    ///
    /// For more information, see [`tagver_parser::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use tagver_version::Version;
    /// let version = Version::parse("v1.7rc2").unwrap();
    /// assert_eq!(version.segments(), &[1, 7, 0]);
    /// assert_eq!(version.pre_release(), "rc2");
    /// ```
    pub fn parse(input: &'input str) -> Result<Self, Error<'input>> {
        Self::parse_with(input, Grammar::permissive())
    }

    /// Parse a string slice into a Version with the strict grammar.
    ///
    /// For more information, see [`tagver_parser::parse_strict`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use tagver_version::Version;
    /// let version = Version::parse_strict("1.2.3-beta.1+build").unwrap();
    /// assert!(version.is_strict());
    ///
    /// assert!(Version::parse_strict("1.2.3.4").is_err());
    /// ```
    pub fn parse_strict(input: &'input str) -> Result<Self, Error<'input>> {
        Self::parse_with(input, Grammar::strict())
    }

    /// Parse a string slice into a Version with the given grammar.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use tagver_version::Version;
    /// # use tagver_parser::Grammar;
    /// const GRAMMAR: Grammar = Grammar::strict();
    ///
    /// let tags = ["1.0.0", "1.1.0-rc.1", "1.1.0"];
    /// let versions = tags
    ///     .iter()
    ///     .map(|tag| Version::parse_with(tag, GRAMMAR))
    ///     .collect::<Result<Vec<_>, _>>()
    ///     .unwrap();
    /// assert!(versions.windows(2).all(|w| w[0] < w[1]));
    /// ```
    pub fn parse_with(input: &'input str, grammar: Grammar) -> Result<Self, Error<'input>> {
        grammar.parse::<Builder<'input>>(input)
    }

    /// Returns the input this version was parsed from, unchanged.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use tagver_version::Version;
    /// let version = Version::parse("v1.2-beta").unwrap();
    /// assert_eq!(version.original(), "v1.2-beta");
    /// assert_eq!(version.to_string(), "1.2.0-beta");
    /// ```
    pub fn original(&self) -> &'input str {
        self.original
    }

    /// Returns the numeric segments, at least three.
    ///
    /// Missing minor and patch numbers are filled in with zeroes.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use tagver_version::Version;
    /// assert_eq!(Version::parse("1.2-beta").unwrap().segments(), &[1, 2, 0]);
    /// assert_eq!(Version::parse("1.2.3.4").unwrap().segments(), &[1, 2, 3, 4]);
    /// ```
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Returns a copy of the numeric segments.
    ///
    /// The returned vector is independent of this version, changing it does not change the version.
    pub fn segments64(&self) -> Vec<u64> {
        self.segments.to_vec()
    }

    /// Returns the pre-release.
    pub fn pre(&self) -> PreRelease<'input> {
        self.pre
    }

    /// Returns the pre-release text, or an empty string for releases.
    pub fn pre_release(&self) -> &'input str {
        self.pre.as_str()
    }

    /// Returns the build metadata.
    pub fn build_metadata(&self) -> Metadata<'input> {
        self.metadata
    }

    /// Returns the build metadata text, or an empty string if there is none.
    pub fn metadata(&self) -> &'input str {
        self.metadata.as_str()
    }

    /// Returns true if this version was parsed with the strict grammar.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns true if this version has a pre-release.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use tagver_version::Version;
    /// assert!(Version::parse("1.7rc2").unwrap().is_pre_release());
    /// assert!(!Version::parse("1.7+rc2").unwrap().is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        !self.pre.is_empty()
    }
}

/// Compares two versions by their precedence.
///
/// This is the same as [`Ord::cmp`].
///
/// ## Examples
///
/// ```rust
/// # use std::cmp::Ordering;
/// # use tagver_version::{compare, Version};
/// let a = Version::parse("1.0-rc1").unwrap();
/// let b = Version::parse("1.0.0").unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Less);
/// ```
pub fn compare(a: &Version<'_>, b: &Version<'_>) -> Ordering {
    a.segments
        .cmp(&b.segments)
        .then_with(|| a.pre.cmp(&b.pre))
}

impl<'input> TryFrom<&'input str> for Version<'input> {
    type Error = Error<'input>;

    fn try_from(value: &'input str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Version<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(self.original.len() + 4);
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            write!(result, "{}", first)?;
        }
        for segment in segments {
            write!(result, ".{}", segment)?;
        }

        if !self.pre.is_empty() {
            result.push('-');
            result.push_str(self.pre.as_str());
        }
        if !self.metadata.is_empty() {
            result.push('+');
            result.push_str(self.metadata.as_str());
        }

        f.pad(result.as_ref())
    }
}

impl PartialEq for Version<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version<'_> {}

impl PartialOrd for Version<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl hash::Hash for Version<'_> {
    fn hash<H: hash::Hasher>(&self, into: &mut H) {
        hash::Hash::hash(&self.segments, into);
        hash::Hash::hash(&self.pre, into);
    }
}

/// Collects the parts reported by the parser.
/// Kept private so that a [`Version`] can only come out of a successful parse.
#[derive(Debug, Default)]
struct Builder<'input> {
    original: &'input str,
    strict: bool,
    segments: Segments,
    pre: PreRelease<'input>,
    metadata: Metadata<'input>,
}

impl<'input> VersionBuilder<'input> for Builder<'input> {
    type Out = Version<'input>;

    fn new() -> Self {
        Builder::default()
    }

    fn set_original(&mut self, original: &'input str) {
        self.original = original;
    }

    fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    fn add_segment(&mut self, segment: u64) {
        self.segments.push(segment);
    }

    fn add_pre_release(&mut self, pre_release: &'input str) {
        self.pre = PreRelease::from(pre_release);
    }

    fn add_metadata(&mut self, metadata: &'input str) {
        self.metadata = Metadata::from(metadata);
    }

    fn build(self) -> Self::Out {
        let mut segments = self.segments;
        segments.pad_to(MIN_SEGMENTS);
        Version {
            original: self.original,
            segments,
            pre: self.pre,
            metadata: self.metadata,
            strict: self.strict,
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for Version<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de: 'input, 'input> Deserialize<'de> for Version<'input> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor<'input>(std::marker::PhantomData<&'input ()>);

        impl<'de: 'input, 'input> Visitor<'de> for VersionVisitor<'input> {
            type Value = Version<'input>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version string")
            }

            fn visit_borrowed_str<E>(self, v: &'input str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor(std::marker::PhantomData))
    }
}

/// Converts into a [`semver::Version`].
///
/// Segments after the patch number are prepended to the build metadata.
/// Fails if the pre-release or the metadata are not valid semver identifiers.
#[cfg(feature = "semver")]
impl TryFrom<&Version<'_>> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: &Version<'_>) -> Result<Self, Self::Error> {
        let mut build = v.segments[MIN_SEGMENTS..]
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>();
        if !v.metadata.is_empty() {
            build.push(String::from(v.metadata.as_str()));
        }

        Ok(semver::Version {
            major: v.segments[0],
            minor: v.segments[1],
            patch: v.segments[2],
            pre: semver::Prerelease::new(v.pre.as_str())?,
            build: semver::BuildMetadata::new(&build.join("."))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{compare, Version};
    use std::{
        cmp::Ordering,
        collections::{hash_map::DefaultHasher, HashSet},
        convert::TryFrom,
        hash::{Hash, Hasher},
    };
    use tagver_parser::ErrorKind;
    use test_case::test_case;

    fn v(input: &str) -> Version<'_> {
        Version::parse(input).unwrap()
    }

    fn hash_of(version: &Version<'_>) -> u64 {
        let mut hasher = DefaultHasher::new();
        version.hash(&mut hasher);
        hasher.finish()
    }

    #[test_case("1.2.3" => vec![1, 2, 3])]
    #[test_case("1.0" => vec![1, 0, 0])]
    #[test_case("1" => vec![1, 0, 0])]
    #[test_case("1.2-beta" => vec![1, 2, 0])]
    #[test_case("1.2.3.4" => vec![1, 2, 3, 4])]
    #[test_case("v1.2.3" => vec![1, 2, 3])]
    #[test_case("1.7rc2" => vec![1, 7, 0])]
    #[test_case("2.29.0.rc0.261.g7178c9af9c" => vec![2, 29, 0])]
    #[test_case("2.28.0.618.gf4bc123cb7" => vec![2, 28, 0, 618])]
    #[test_case("17.03.0-ce" => vec![17, 3, 0])]
    fn test_segments(input: &str) -> Vec<u64> {
        v(input).segments().to_vec()
    }

    #[test]
    fn test_segments64_is_a_copy() {
        let version = v("1.2.3");
        let mut segments = version.segments64();
        segments[0] = 42;
        assert_eq!(version.segments(), &[1, 2, 3]);
        assert_eq!(version.segments64(), vec![1, 2, 3]);
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test_case("1.2.3-alpha+build.5" => ("alpha", "build.5"))]
    #[test_case("1.7rc2" => ("rc2", ""))]
    #[test_case("1.2.beta.1" => ("beta.1", ""))]
    #[test_case("2.29.0.rc0.261.g7178c9af9c" => ("rc0.261.g7178c9af9c", ""))]
    #[test_case("1.13.0+dev-545-gb3b1c081b" => ("", "dev-545-gb3b1c081b"))]
    #[test_case("v1.0-" => ("-", ""))]
    fn test_parts(input: &str) -> (&str, &str) {
        let version = v(input);
        (version.pre_release(), version.metadata())
    }

    #[test_case("v1.2.3")]
    #[test_case("1.2-beta")]
    #[test_case("17.03.0-ce")]
    #[test_case("1.7rc2+001")]
    fn test_original(input: &str) {
        assert_eq!(v(input).original(), input);
    }

    #[test_case("1")]
    #[test_case("1.2")]
    #[test_case("1.2.3")]
    #[test_case("1.2.3.4")]
    #[test_case("1.2.3.4.5")]
    #[test_case("1.2.3.4.5+build")]
    fn test_is_not_pre_release(input: &str) {
        assert!(!v(input).is_pre_release());
    }

    #[test_case("1-2")]
    #[test_case("1-a")]
    #[test_case("1.2-3")]
    #[test_case("1.2.3-a")]
    #[test_case("1.2.3.4-5")]
    #[test_case("1.7rc2")]
    #[test_case("1.2.beta")]
    #[test_case("v1.0-")]
    fn test_is_pre_release(input: &str) {
        assert!(v(input).is_pre_release());
    }

    #[test_case("1" => "1.0.0")]
    #[test_case("1.2" => "1.2.0")]
    #[test_case("1.2.3" => "1.2.3")]
    #[test_case("1.2.3.4" => "1.2.3.4")]
    #[test_case("1.2.3.4.5" => "1.2.3.4.5")]
    #[test_case("v1.2.3" => "1.2.3")]
    #[test_case("1.2-beta" => "1.2.0-beta")]
    #[test_case("17.03.0-ce" => "17.3.0-ce")]
    #[test_case("1.7rc2" => "1.7.0-rc2")]
    #[test_case("1.2.3.pre2" => "1.2.3-pre2")]
    #[test_case("1.2.3+build" => "1.2.3+build")]
    #[test_case("1.2.3.4-pre-42+r-1337" => "1.2.3.4-pre-42+r-1337")]
    #[test_case("2.29.0.rc0.261.g7178c9af9c" => "2.29.0-rc0.261.g7178c9af9c")]
    #[test_case("1.2.3-01" => "1.2.3-01"; "pre-release text is verbatim")]
    #[test_case("v1.0-" => "1.0.0--"; "trailing hyphen")]
    #[test_case("v1.0-+b" => "1.0.0--+b"; "trailing hyphen with metadata")]
    #[test_case("1.2.3--" => "1.2.3--"; "hyphen pre-release")]
    #[test_case("1.2--x" => "1.2.0--x"; "hyphen leading pre-release")]
    fn test_to_string(input: &str) -> String {
        v(input).to_string()
    }

    #[test_case("1.2-beta")]
    #[test_case("v1.0-")]
    #[test_case("1.2.3--")]
    #[test_case("1.7rc2+build.1")]
    #[test_case("2.29.0.rc0.261.g7178c9af9c")]
    fn test_to_string_reparses_equal(input: &str) {
        let version = v(input);
        let text = version.to_string();
        assert_eq!(v(&text), version);
        assert_eq!(v(&text).metadata(), version.metadata());
    }

    #[test]
    fn test_display() {
        let version = v("1.2.3.4.5-pre+build");
        assert_eq!(
            format!("{:42}", version),
            "1.2.3.4.5-pre+build                       "
        );
        assert_eq!(
            format!("{:>42}", version),
            "                       1.2.3.4.5-pre+build"
        );
        assert_eq!(
            format!("{:*^42}", version),
            "***********1.2.3.4.5-pre+build************"
        );
        assert_eq!(format!("{:.7}", version), "1.2.3.4");
    }

    #[test_case("1.2.3", "1.2.3")]
    #[test_case("1", "1.0.0")]
    #[test_case("1.2", "1.2.0")]
    #[test_case("1.2.3", "1.2.3.0.0")]
    #[test_case("v1.2.3", "1.2.3")]
    #[test_case("01.002.0003", "1.2.3")]
    #[test_case("1.2.3+42", "1.2.3+1337")]
    #[test_case("1.2.3-pre", "1.2.3-pre+build")]
    #[test_case("1.2.3-rc.01", "1.2.3-rc.1")]
    #[test_case("1.2.3.beta", "1.2.3-beta")]
    #[test_case("1.2.3beta", "1.2.3-beta")]
    #[test_case("1.0-", "1.0.0--")]
    fn test_eq(lhs: &str, rhs: &str) {
        assert_eq!(v(lhs), v(rhs));
        assert_eq!(compare(&v(lhs), &v(rhs)), Ordering::Equal);
        assert_eq!(hash_of(&v(lhs)), hash_of(&v(rhs)));
    }

    #[test]
    fn test_strict_flag_does_not_affect_equality() {
        let strict = Version::parse_strict("1.2.3-rc.1").unwrap();
        let permissive = v("1.2.3-rc.1");
        assert!(strict.is_strict());
        assert!(!permissive.is_strict());
        assert_eq!(strict, permissive);
    }

    #[test]
    fn test_option_equality() {
        let none: Option<Version<'_>> = None;
        assert_eq!(none, None);
        assert_ne!(Some(v("1.2.3")), none);
        assert_ne!(none, Some(v("1.2.3")));
        assert_eq!(Some(v("1.2.3")), Some(v("1.2.3+b")));
    }

    #[test_case("1", "2")]
    #[test_case("1.2", "1.3")]
    #[test_case("1.2.3", "1.2.4")]
    #[test_case("1.2.3-pre", "1.2.3")]
    #[test_case("1.2.3.4", "1.2.3")]
    #[test_case("1.2.3.4", "1.2.3.5")]
    #[test_case("1.2.3.4", "1.2.3.4.5")]
    #[test_case("1.2.3-pre", "1.2.3-pre2")]
    #[test_case("1.0-", "1.0")]
    fn test_ne(lhs: &str, rhs: &str) {
        assert_ne!(v(lhs), v(rhs));
    }

    #[test_case("0.0.0", "0.0.1")]
    #[test_case("0.0.0", "0.1.0")]
    #[test_case("0.0.0", "1.0.0")]
    #[test_case("1.0.0", "1.0.1")]
    #[test_case("1.1.0", "2.0.0")]
    #[test_case("1.2.3", "1.2.3.4")]
    #[test_case("1.2.3.4", "1.2.3.4.5")]
    #[test_case("1.2.3-pre", "1.2.3")]
    #[test_case("1.2.3.4-pre", "1.2.3.4")]
    #[test_case("1.2.3", "1.2.3.4-pre")]
    #[test_case("1.2.2", "1.2.3-pre")]
    #[test_case("1.2.3-42", "1.2.3-84")]
    #[test_case("1.2.3-42", "1.2.3-123")]
    #[test_case("1.2.3-42", "1.2.3-42foo")]
    #[test_case("1.2.3-42", "1.2.3-foo")]
    #[test_case("1.0.0-alpha", "1.0.0-alpha.1")]
    #[test_case("1.0.0-alpha.1", "1.0.0-alpha.beta")]
    #[test_case("1.0.0-alpha.beta", "1.0.0-beta")]
    #[test_case("1.0.0-beta.2", "1.0.0-beta.11")]
    #[test_case("1.0.0-rc.1", "1.0.0")]
    #[test_case("1.0.0-rc.99999999999999999999", "1.0.0-rc.100000000000000000000")]
    #[test_case("5.4-alpha", "5.4-alpha.beta")]
    #[test_case("1.7rc2", "1.7rc3")]
    #[test_case("1.7rc2", "1.7")]
    #[test_case("v1.0-", "v1.0")]
    #[test_case("v1.0.3-", "v1.0.3")]
    #[test_case("1.2.0", "1.2.3.4-rc1")]
    #[test_case("2.28.0.618.gf4bc123cb7", "2.29.0.rc0.261.g7178c9af9c")]
    #[test_case("18446744073709551614", "18446744073709551615")]
    fn test_lt(lhs: &str, rhs: &str) {
        assert!(v(lhs) < v(rhs), "{} < {}", lhs, rhs);
        assert!(v(rhs) > v(lhs), "{} > {}", rhs, lhs);
        assert_eq!(compare(&v(lhs), &v(rhs)), Ordering::Less);
        assert_eq!(compare(&v(rhs), &v(lhs)), Ordering::Greater);
    }

    #[test_case("1.2.3", "1.2.3")]
    #[test_case("1.2.3", "1.2.3.0.0")]
    #[test_case("1.2.3-pre", "1.2.3-pre")]
    #[test_case("1.2.3+build2", "1.2.3+build3")]
    #[test_case("1.2.3+84", "1.2.3+42")]
    fn test_not_lt(lhs: &str, rhs: &str) {
        assert!(!(v(lhs) < v(rhs)));
        assert!(v(lhs) <= v(rhs));
        assert!(v(lhs) >= v(rhs));
    }

    #[test]
    fn test_order_of_precedence() {
        let versions = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ]
        .iter()
        .map(|v| Version::parse(v))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

        let left = versions.iter();
        let right = versions.iter().skip(1);

        for (left, right) in left.zip(right) {
            assert!(left < right, "{} < {} was violated", left, right);
        }
    }

    #[test]
    fn test_sort() {
        let mut versions = [
            "1.1.1", "1.0", "1.2", "2.0", "0.7.1", "1.1-beta", "1.1.0-alpha", "1.0.0.1",
        ]
        .iter()
        .map(|v| Version::parse(v))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
        versions.sort();

        let sorted = versions
            .iter()
            .map(|v| v.original())
            .collect::<Vec<_>>();
        assert_eq!(
            sorted,
            vec!["0.7.1", "1.0", "1.0.0.1", "1.1.0-alpha", "1.1-beta", "1.1.1", "1.2", "2.0"]
        );
    }

    #[test]
    fn test_hash_set() {
        let set = ["1.2", "1.2.0", "1.2.0.0+b", "v1.2.0", "1.2.1"]
            .iter()
            .map(|v| Version::parse(v))
            .collect::<Result<HashSet<_>, _>>()
            .unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test_case("1.2.3" => true)]
    #[test_case("1.2-beta" => true)]
    #[test_case("1.2.3.4" => false)]
    #[test_case("1.7rc2" => false)]
    #[test_case("1.2.beta" => false)]
    fn test_parse_strict(input: &str) -> bool {
        Version::parse_strict(input).is_ok()
    }

    #[test]
    fn test_parse_strict_error_kind() {
        let error = Version::parse_strict("1.2.3.4").unwrap_err();
        assert_eq!(error.error_kind(), ErrorKind::NotStrict);
        let error = Version::parse_strict("").unwrap_err();
        assert_eq!(error.error_kind(), ErrorKind::EmptyInput);
        let error = Version::parse_strict("foo").unwrap_err();
        assert_eq!(error.error_kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_try_from() {
        let version = Version::try_from("1.7rc2").unwrap();
        assert_eq!(version, v("1.7.0-rc2"));
        assert!(Version::try_from("rc2").is_err());
    }

    #[cfg(feature = "serde")]
    #[cfg_attr(feature = "serde", test)]
    fn test_ser() {
        let version = v("v1.2-beta+b1");
        assert_eq!(
            r#""1.2.0-beta+b1""#,
            serde_json::to_string(&version).unwrap()
        );
    }

    #[cfg(feature = "serde")]
    #[cfg_attr(feature = "serde", test)]
    fn test_deser() {
        let input = r#""v1.7rc2""#;
        let version: Version<'_> = serde_json::from_str(input).unwrap();
        assert_eq!(version, v("1.7.0-rc2"));
        assert_eq!(version.original(), "v1.7rc2");
        assert!(serde_json::from_str::<Version<'_>>(r#""foo""#).is_err());
    }

    #[cfg(feature = "semver")]
    #[cfg_attr(feature = "semver", test)]
    fn test_into_semver() {
        let version = v("1.2.3-rc.1+build.5");
        assert_eq!(
            semver::Version::try_from(&version).unwrap(),
            semver::Version::parse("1.2.3-rc.1+build.5").unwrap()
        );

        let version = v("2.28.0.618.42");
        assert_eq!(
            semver::Version::try_from(&version).unwrap(),
            semver::Version::parse("2.28.0+618.42").unwrap()
        );

        let version = v("1.2.3.4+b");
        assert_eq!(
            semver::Version::try_from(&version).unwrap(),
            semver::Version::parse("1.2.3+4.b").unwrap()
        );

        assert!(semver::Version::try_from(&v("1.2.3-01")).is_err());
    }
}
