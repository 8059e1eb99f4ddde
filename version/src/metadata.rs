use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::Deref,
};

/// The numeric segments of a version, from most to least significant.
#[derive(Debug, Clone, Default)]
pub(crate) struct Segments {
    numbers: Vec<u64>,
}

impl Segments {
    pub(crate) fn push(&mut self, num: u64) {
        self.numbers.push(num);
    }

    /// Fills missing trailing segments with zero.
    pub(crate) fn pad_to(&mut self, len: usize) {
        if self.numbers.len() < len {
            self.numbers.resize(len, 0);
        }
    }

    /// Significant part for hashing, trailing zeroes compare equal to absent segments.
    fn significant(&self) -> &[u64] {
        let len = self
            .numbers
            .iter()
            .rposition(|&n| n != 0)
            .map_or(0, |last| last + 1);
        &self.numbers[..len]
    }
}

impl Deref for Segments {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.numbers[..]
    }
}

impl PartialEq for Segments {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Segments {}

impl PartialOrd for Segments {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segments {
    fn cmp(&self, other: &Self) -> Ordering {
        SegmentsCmp {
            lhs: self.numbers.iter(),
            rhs: other.numbers.iter(),
        }
        .find(|c| *c != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
    }
}

impl Hash for Segments {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

/// Compares two segment lists as if the shorter one was padded with zeroes.
struct SegmentsCmp<I, J> {
    lhs: I,
    rhs: J,
}

impl<'a, I, J> Iterator for SegmentsCmp<I, J>
where
    I: Iterator<Item = &'a u64>,
    J: Iterator<Item = &'a u64>,
{
    type Item = Ordering;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.lhs.next(), self.rhs.next()) {
            (None, None) => None,
            (Some(a), None) => Some(a.cmp(&0)),
            (None, Some(b)) => Some(0.cmp(b)),
            (Some(a), Some(b)) => Some(a.cmp(b)),
        }
    }
}

/// The pre-release part of a version.
///
/// Two pre-releases are equal if all their identifiers compare equal,
/// which means that numeric identifiers ignore leading zeroes.
///
/// ## Examples
///
/// ```rust
/// # use tagver_version::PreRelease;
/// assert!(PreRelease::from("alpha") < PreRelease::from("alpha.1"));
/// assert!(PreRelease::from("alpha.1") < PreRelease::from("alpha.beta"));
/// assert!(PreRelease::from("beta.2") < PreRelease::from("beta.11"));
/// assert!(PreRelease::from("rc.1") < PreRelease::empty());
/// assert_eq!(PreRelease::from("rc.01"), PreRelease::from("rc.1"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PreRelease<'input> {
    identifier: Option<&'input str>,
}

impl<'input> PreRelease<'input> {
    /// Constructs an empty pre-release, as found on release versions
    pub const fn empty() -> Self {
        Self { identifier: None }
    }

    /// Returns true if there is no pre-release
    pub const fn is_empty(&self) -> bool {
        self.identifier.is_none()
    }

    /// Returns the pre-release text, or an empty string for releases
    pub fn as_str(&self) -> &'input str {
        self.identifier.unwrap_or_default()
    }

    /// Returns an iterator over the `.` separated identifiers
    pub fn identifiers(&self) -> impl Iterator<Item = &'input str> {
        self.identifier.into_iter().flat_map(|s| s.split('.'))
    }
}

impl AsRef<str> for PreRelease<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'input> From<&'input str> for PreRelease<'input> {
    fn from(identifier: &'input str) -> Self {
        Self {
            identifier: Some(identifier).filter(|s| !s.is_empty()),
        }
    }
}

impl PartialEq for PreRelease<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PreRelease<'_> {}

impl PartialOrd for PreRelease<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.identifier, other.identifier) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(lhs), Some(rhs)) => PreReleaseCmp {
                lhs: lhs.split('.'),
                rhs: rhs.split('.'),
            }
            .find(|c| *c != Ordering::Equal)
            .unwrap_or(Ordering::Equal),
        }
    }
}

impl Hash for PreRelease<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_empty().hash(state);
        for identifier in self.identifiers() {
            match numeric(identifier) {
                Some(digits) => digits.hash(state),
                None => identifier.hash(state),
            }
        }
    }
}

struct PreReleaseCmp<I, J> {
    lhs: I,
    rhs: J,
}

impl<'input, I, J> Iterator for PreReleaseCmp<I, J>
where
    I: Iterator<Item = &'input str>,
    J: Iterator<Item = &'input str>,
{
    type Item = Ordering;

    /// Identifiers consisting of only digits are compared numerically, regardless of their size.
    /// Other identifiers are compared lexically in ASCII sort order.
    /// Numeric identifiers always have lower precedence than non-numeric identifiers.
    /// A larger set of identifiers has a higher precedence than a smaller set, if all of the preceding identifiers are equal.
    fn next(&mut self) -> Option<Self::Item> {
        match (self.lhs.next(), self.rhs.next()) {
            (None, None) => None,
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(a), Some(b)) => Some(match (numeric(a), numeric(b)) {
                (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.cmp(b),
            }),
        }
    }
}

/// Returns the significant digits of a numeric identifier.
fn numeric(identifier: &str) -> Option<&str> {
    if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
        Some(identifier.trim_start_matches('0'))
    } else {
        None
    }
}

/// The build metadata of a version.
///
/// Metadata is kept verbatim and never takes part in comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Metadata<'input> {
    identifier: Option<&'input str>,
}

impl<'input> Metadata<'input> {
    /// Constructs empty metadata
    pub const fn empty() -> Self {
        Self { identifier: None }
    }

    /// Returns true if there is no metadata
    pub const fn is_empty(&self) -> bool {
        self.identifier.is_none()
    }

    /// Returns the metadata text, or an empty string if there is none
    pub fn as_str(&self) -> &'input str {
        self.identifier.unwrap_or_default()
    }
}

impl AsRef<str> for Metadata<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'input> From<&'input str> for Metadata<'input> {
    fn from(identifier: &'input str) -> Self {
        Self {
            identifier: Some(identifier).filter(|s| !s.is_empty()),
        }
    }
}
