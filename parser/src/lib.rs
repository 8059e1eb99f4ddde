//! Permissive and strict parser for release tag version identifiers.
//!
//! The parser splits an input like `v1.7rc2+build.5` into numeric segments,
//! a pre-release text and a metadata text, and hands them to a [`VersionBuilder`].
//! Which inputs are accepted is decided by a [`Grammar`].
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
    fmt::Display,
    iter::Peekable,
    ops::Range,
    str::CharIndices,
};

/// Parse a string slice with the permissive grammar.
///
/// This is a shortcut for `Grammar::permissive().parse::<V>(input)`.
/// The permissive grammar accepts, on top of `MAJOR.MINOR.PATCH`:
///
/// - a leading `v` or `V` (e.g. "v1.2.3")
/// - any number of numeric segments (e.g. "1.2.3.4.5")
/// - pre-release text glued to the last number (e.g. "1.7rc2" has the pre-release "rc2")
/// - pre-release text introduced by a `.` (e.g. "1.2.beta.1" has the pre-release "beta.1")
///
/// ## Examples
///
/// ```rust
/// # use tagver_parser::VersionBuilder;
/// #[derive(Default)]
/// struct Numbers(Vec<u64>);
///
/// impl VersionBuilder<'_> for Numbers {
///     type Out = Vec<u64>;
///
///     fn new() -> Self {
///         Numbers::default()
///     }
///
///     fn add_segment(&mut self, segment: u64) {
///         self.0.push(segment);
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// assert_eq!(tagver_parser::parse::<Numbers>("v1.2.3.4rc1"), Ok(vec![1, 2, 3, 4]));
/// assert!(tagver_parser::parse::<Numbers>("rc1").is_err());
/// ```
pub fn parse<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    Grammar::permissive().parse::<V>(input)
}

/// Parse a string slice with the strict grammar.
///
/// This is a shortcut for `Grammar::strict().parse::<V>(input)`.
///
/// ## Examples
///
/// ```rust
/// # use tagver_parser::{ErrorKind, VersionBuilder};
/// struct Valid;
///
/// impl VersionBuilder<'_> for Valid {
///     type Out = ();
///
///     fn new() -> Self {
///         Valid
///     }
///
///     fn build(self) -> Self::Out {}
/// }
///
/// assert!(tagver_parser::parse_strict::<Valid>("v1.2.3-rc.1+build").is_ok());
///
/// let error = tagver_parser::parse_strict::<Valid>("1.2.3.4").unwrap_err();
/// assert_eq!(error.error_kind(), ErrorKind::NotStrict);
/// ```
pub fn parse_strict<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    Grammar::strict().parse::<V>(input)
}

/// The set of rules an input has to follow.
///
/// A grammar holds no state besides its mode, so it can be constructed once
/// and passed around by value.
///
/// ## Examples
///
/// ```rust
/// # use tagver_parser::{Grammar, VersionBuilder};
/// struct IsPreRelease(bool);
///
/// impl<'input> VersionBuilder<'input> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///         IsPreRelease(false)
///     }
///
///     fn add_pre_release(&mut self, _pre_release: &'input str) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// const GRAMMAR: Grammar = Grammar::permissive();
///
/// assert_eq!(GRAMMAR.parse::<IsPreRelease>("1.7rc2"), Ok(true));
/// assert_eq!(GRAMMAR.parse::<IsPreRelease>("1.7+rc2"), Ok(false));
/// assert!(Grammar::strict().parse::<IsPreRelease>("1.7rc2").is_err());
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grammar {
    strict: bool,
}

impl Grammar {
    /// The lenient grammar for real-world release tags.
    pub const fn permissive() -> Self {
        Grammar { strict: false }
    }

    /// The semantic version compatible subset of the permissive grammar.
    ///
    /// At most three numeric segments are allowed and a pre-release must be
    /// introduced by a `-` and consist of valid semver identifiers.
    pub const fn strict() -> Self {
        Grammar { strict: true }
    }

    /// Returns true for the strict grammar.
    pub const fn is_strict(self) -> bool {
        self.strict
    }

    /// Parse a string slice into any [`VersionBuilder`] according to this grammar.
    pub fn parse<'input, V>(self, input: &'input str) -> Result<V::Out, Error<'input>>
    where
        V: VersionBuilder<'input>,
    {
        self.layout(input)
            .map(|layout| layout.build::<V>(input, self))
            .map_err(|ErrorSpan { error, span }| Error { input, span, error })
    }

    fn layout(self, input: &str) -> Result<Layout, ErrorSpan> {
        let layout = scan(input, lex(input))?;
        if self.strict {
            layout.check_strict(input)?;
        }
        Ok(layout)
    }
}

/// Trait to abstract over version building.
///
/// The parser calls these methods in order: [`VersionBuilder::set_original`],
/// [`VersionBuilder::set_strict`], [`VersionBuilder::add_segment`] once per numeric segment,
/// then [`VersionBuilder::add_pre_release`] and [`VersionBuilder::add_metadata`] at most once each,
/// and finally [`VersionBuilder::build`].
///
/// The trait is generic over the lifetime of the input string, so that one could
/// parse into a version without having to allocate.
///
/// Most methods have a default implementation that does nothing and ignores the input.
/// This can be used to implement some form of validation without needing to keep the result.
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail.
    fn new() -> Self;

    /// The complete input, exactly as it was given to the parser.
    #[allow(unused)]
    fn set_original(&mut self, original: &'input str) {}

    /// Whether the input was parsed with the strict grammar.
    #[allow(unused)]
    fn set_strict(&mut self, strict: bool) {}

    /// Add the next numeric segment, from most to least significant.
    ///
    /// This method is called at least once before [`VersionBuilder::build`].
    /// In strict mode it is called at most three times.
    #[allow(unused)]
    fn add_segment(&mut self, segment: u64) {}

    /// The pre-release text, without the `-` that introduced it.
    ///
    /// The text contains all `.` separated identifiers as they appeared in the input,
    /// including numbers with leading zeroes.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    #[allow(unused)]
    fn add_pre_release(&mut self, pre_release: &'input str) {}

    /// The build metadata text, without the `+` that introduced it.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    #[allow(unused)]
    fn add_metadata(&mut self, metadata: &'input str) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

/// Possible errors that happen during parsing
/// and the location of the token where the error occurred.
#[derive(Debug, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    error: ErrorType,
}

impl<'input> Error<'input> {
    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        match self.error {
            ErrorType::Empty => ErrorKind::EmptyInput,
            ErrorType::Missing(_)
            | ErrorType::NotANumber
            | ErrorType::NumberTooLarge
            | ErrorType::Unexpected => ErrorKind::Malformed,
            ErrorType::NotStrict(_) => ErrorKind::NotStrict,
        }
    }

    /// Returns a slice from the original input line that triggered the error.
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        &self.input[self.error_span()]
    }

    /// Returns a text representation of the error.
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    pub fn error_line(&self) -> String {
        match self.error {
            ErrorType::Empty => String::from("Could not parse the version: No input"),
            ErrorType::Missing(segment) => {
                format!("Could not parse the {} identifier: No input", segment)
            }
            ErrorType::NotANumber => format!(
                "Could not parse the version number: `{}` is not a number",
                self.erroneous_input()
            ),
            ErrorType::NumberTooLarge => format!(
                "Could not parse the version number: `{}` is too large",
                self.erroneous_input()
            ),
            ErrorType::Unexpected => format!("Unexpected `{}`", self.erroneous_input()),
            ErrorType::NotStrict(restriction) => match restriction {
                Restriction::TooManySegments => format!(
                    "Strict versions allow at most three numbers, found `{}`",
                    self.erroneous_input()
                ),
                Restriction::LenientPreRelease => format!(
                    "Strict versions require a `-` before the pre-release `{}`",
                    self.erroneous_input()
                ),
                Restriction::EmptyPreRelease => {
                    String::from("Strict versions require a pre-release identifier after `-`")
                }
                Restriction::LeadingZero => format!(
                    "Numeric pre-release identifier `{}` must not have leading zeroes",
                    self.erroneous_input()
                ),
                Restriction::InvalidCharacter => format!(
                    "Pre-release identifier `{}` may only contain ASCII alphanumerics and hyphens",
                    self.erroneous_input()
                ),
            },
        }
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = self.span.end - self.span.start
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorType,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.borrowed().error_kind()
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

/// The categories of parse failures callers can branch on.
/// These don't include any details as those are covered by various
/// error methods like [`Error::erroneous_input`] and [`Error::error_line`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was empty or consisted only of whitespace
    EmptyInput,
    /// The input could not be decomposed into numbers, pre-release, and metadata
    Malformed,
    /// The input is accepted by the permissive grammar, but not by the strict one
    NotStrict,
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

impl From<Error<'_>> for OwnedError {
    fn from(error: Error<'_>) -> Self {
        error.owned()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ErrorSpan {
    error: ErrorType,
    span: Span,
}

impl ErrorSpan {
    fn new(error: ErrorType, span: Span) -> Self {
        Self { error, span }
    }

    fn missing(segment: Segment, span: Span) -> Self {
        Self::new(ErrorType::Missing(segment), span)
    }

    fn unexpected(span: Span) -> Self {
        Self::new(ErrorType::Unexpected, span)
    }

    fn not_strict(restriction: Restriction, span: Span) -> Self {
        Self::new(ErrorType::NotStrict(restriction), span)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ErrorType {
    Empty,
    Missing(Segment),
    NotANumber,
    NumberTooLarge,
    Unexpected,
    NotStrict(Restriction),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Segment {
    Number,
    PreRelease,
    Metadata,
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Number => f.pad("number"),
            Segment::PreRelease => f.pad("pre-release"),
            Segment::Metadata => f.pad("metadata"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Restriction {
    TooManySegments,
    LenientPreRelease,
    EmptyPreRelease,
    LeadingZero,
    InvalidCharacter,
}

/// Where the pre-release text came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Introducer {
    /// `1.2-beta`
    Hyphen,
    /// `1.2-`, the hyphen itself is the pre-release
    BareHyphen,
    /// `1.2.beta`
    Dot,
    /// `1.2beta`
    Glued,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Number {
    value: u64,
    span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PreReleaseSpan {
    introducer: Introducer,
    span: Span,
}

/// Result of the scan: where every component of a version is located in the input.
#[derive(Debug, Default, PartialEq, Eq)]
struct Layout {
    segments: Vec<Number>,
    pre: Option<PreReleaseSpan>,
    metadata: Option<Span>,
}

impl Layout {
    fn check_strict(&self, input: &str) -> Result<(), ErrorSpan> {
        if let Some(extra) = self.segments.get(3) {
            return Err(ErrorSpan::not_strict(
                Restriction::TooManySegments,
                extra.span,
            ));
        }
        if let Some(pre) = self.pre {
            match pre.introducer {
                Introducer::Hyphen => {}
                Introducer::BareHyphen => {
                    return Err(ErrorSpan::not_strict(
                        Restriction::EmptyPreRelease,
                        pre.span,
                    ))
                }
                Introducer::Dot | Introducer::Glued => {
                    return Err(ErrorSpan::not_strict(
                        Restriction::LenientPreRelease,
                        pre.span,
                    ))
                }
            }
            let mut start = pre.span.start;
            for identifier in pre.span.at(input).split('.') {
                let span = Span::new(start, start + identifier.len());
                start = span.end + 1;
                check_strict_identifier(identifier)
                    .map_err(|restriction| ErrorSpan::not_strict(restriction, span))?;
            }
        }
        Ok(())
    }

    fn build<'input, V>(self, input: &'input str, grammar: Grammar) -> V::Out
    where
        V: VersionBuilder<'input>,
    {
        let mut version = V::new();
        version.set_original(input);
        version.set_strict(grammar.strict);
        for number in self.segments {
            version.add_segment(number.value);
        }
        if let Some(pre) = self.pre {
            version.add_pre_release(pre.span.at(input));
        }
        if let Some(metadata) = self.metadata {
            version.add_metadata(metadata.at(input));
        }
        version.build()
    }
}

fn check_strict_identifier(identifier: &str) -> Result<(), Restriction> {
    let bytes = identifier.as_bytes();
    if !bytes.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(Restriction::InvalidCharacter);
    }
    if bytes.len() > 1 && bytes[0] == b'0' && bytes.iter().all(u8::is_ascii_digit) {
        return Err(Restriction::LeadingZero);
    }
    Ok(())
}

/// First phase: the leading number and every following `.` separated number.
/// The first token that is not part of the numeric core hands over to the second phase.
fn scan<I>(input: &str, tokens: I) -> Result<Layout, ErrorSpan>
where
    I: IntoIterator<Item = TokenSpan>,
{
    if input.trim().is_empty() {
        return Err(ErrorSpan::new(ErrorType::Empty, Span::new(0, input.len())));
    }

    let mut tokens = tokens.into_iter();
    let mut layout = Layout::default();

    let token_span = match tokens.next() {
        Some(token_span) => token_span,
        None => return Err(ErrorSpan::new(ErrorType::Empty, Span::default())),
    };
    layout.segments.push(parse_leading_number(token_span, input)?);

    loop {
        let token_span = match tokens.next() {
            None => return Ok(layout),
            Some(token_span) => token_span,
        };
        match token_span.token {
            Token::Dot => match tokens.next() {
                Some(next) if next.token == Token::Numeric => {
                    layout.segments.push(parse_number(next.span.at(input), next.span)?);
                }
                // 1.2.beta, the dot is swallowed
                Some(next) if next.token.is_identifier() => {
                    return scan_pre_release(layout, Introducer::Dot, next, tokens);
                }
                Some(next) => return Err(ErrorSpan::unexpected(next.span)),
                None => return Err(ErrorSpan::missing(Segment::Number, token_span.span)),
            },
            // 1.7rc2, text directly after the last number
            Token::Alpha | Token::VNumeric => {
                return scan_pre_release(layout, Introducer::Glued, token_span, tokens);
            }
            Token::Hyphen => {
                return match tokens.next() {
                    None => {
                        layout.pre = Some(PreReleaseSpan {
                            introducer: Introducer::BareHyphen,
                            span: token_span.span,
                        });
                        Ok(layout)
                    }
                    Some(next) if next.token == Token::Plus => {
                        layout.pre = Some(PreReleaseSpan {
                            introducer: Introducer::BareHyphen,
                            span: token_span.span,
                        });
                        scan_metadata(layout, next, tokens)
                    }
                    Some(next) => scan_pre_release(layout, Introducer::Hyphen, next, tokens),
                };
            }
            Token::Plus => return scan_metadata(layout, token_span, tokens),
            _ => return Err(ErrorSpan::unexpected(token_span.span)),
        }
    }
}

/// Second phase: everything up to a `+` is pre-release text.
fn scan_pre_release<I>(
    mut layout: Layout,
    introducer: Introducer,
    first: TokenSpan,
    mut tokens: I,
) -> Result<Layout, ErrorSpan>
where
    I: Iterator<Item = TokenSpan>,
{
    let start = first.span.start;
    let mut end;
    let mut token_span = first;
    loop {
        if !token_span.token.is_identifier_part() {
            return Err(ErrorSpan::unexpected(token_span.span));
        }
        end = token_span.span.end;

        token_span = match tokens.next() {
            Some(token_span) => token_span,
            None => break,
        };
        match token_span.token {
            Token::Dot => {
                token_span = match tokens.next() {
                    Some(next) => next,
                    None => return Err(ErrorSpan::missing(Segment::PreRelease, token_span.span)),
                };
            }
            Token::Plus => {
                layout.pre = Some(PreReleaseSpan {
                    introducer,
                    span: Span::new(start, end),
                });
                return scan_metadata(layout, token_span, tokens);
            }
            // any other token continues the current identifier, or is rejected at the top
            _ => {}
        }
    }

    layout.pre = Some(PreReleaseSpan {
        introducer,
        span: Span::new(start, end),
    });
    Ok(layout)
}

/// Everything after the `+` is metadata, as long as it is printable.
fn scan_metadata<I>(mut layout: Layout, plus: TokenSpan, mut tokens: I) -> Result<Layout, ErrorSpan>
where
    I: Iterator<Item = TokenSpan>,
{
    let first = match tokens.next() {
        Some(token_span) => token_span,
        None => return Err(ErrorSpan::missing(Segment::Metadata, plus.span)),
    };
    let start = first.span.start;
    let mut end = check_metadata_token(first)?;
    for token_span in tokens {
        end = check_metadata_token(token_span)?;
    }
    layout.metadata = Some(Span::new(start, end));
    Ok(layout)
}

fn check_metadata_token(token_span: TokenSpan) -> Result<usize, ErrorSpan> {
    match token_span.token {
        Token::Whitespace | Token::Control => Err(ErrorSpan::unexpected(token_span.span)),
        _ => Ok(token_span.span.end),
    }
}

#[inline]
fn parse_leading_number(token_span: TokenSpan, input: &str) -> Result<Number, ErrorSpan> {
    let digits = match token_span.token {
        Token::Numeric => token_span.span.at(input),
        Token::VNumeric => token_span.span.at1(input),
        Token::Whitespace | Token::Control => {
            return Err(ErrorSpan::unexpected(token_span.span));
        }
        _ => return Err(ErrorSpan::new(ErrorType::NotANumber, token_span.span)),
    };
    parse_number(digits, token_span.span)
}

#[inline]
fn parse_number(digits: &str, span: Span) -> Result<Number, ErrorSpan> {
    match digits.parse::<u64>() {
        Ok(value) => Ok(Number { value, span }),
        Err(_) => Err(ErrorSpan::new(ErrorType::NumberTooLarge, span)),
    }
}

fn lex(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

#[derive(Debug)]
struct Lexer<'input> {
    end: usize,
    chars: Peekable<CharIndices<'input>>,
}

impl<'input> Lexer<'input> {
    fn new(input: &'input str) -> Lexer<'input> {
        Lexer {
            end: input.len(),
            chars: input.char_indices().peekable(),
        }
    }

    fn skip_while(&mut self, accept: impl Fn(char) -> bool) {
        while self.chars.next_if(|&(_, c)| accept(c)).is_some() {}
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Token {
    /// Any unicode whitespace
    Whitespace,
    /// Any other control character
    Control,
    /// numeric component
    Numeric,
    /// numeric component that begins with a leading v
    VNumeric,
    /// alphanumeric component that does not start with a digit
    Alpha,
    /// `.`
    Dot,
    /// `+`
    Plus,
    /// `-`
    Hyphen,
    /// Any other printable character
    Symbol,
}

impl Token {
    /// Tokens that may stand in for a number, but are not one.
    fn is_identifier(self) -> bool {
        matches!(self, Token::Alpha | Token::VNumeric)
    }

    /// Tokens that may appear within a pre-release identifier.
    fn is_identifier_part(self) -> bool {
        matches!(
            self,
            Token::Numeric | Token::VNumeric | Token::Alpha | Token::Hyphen
        )
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = TokenSpan;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, c) = self.chars.next()?;
        let next_is_digit = self
            .chars
            .peek()
            .map_or(false, |&(_, next)| next.is_ascii_digit());

        let token = match c {
            '0'..='9' => {
                self.skip_while(|c| c.is_ascii_digit());
                Token::Numeric
            }
            'v' | 'V' if next_is_digit => {
                self.skip_while(|c| c.is_ascii_digit());
                Token::VNumeric
            }
            'A'..='Z' | 'a'..='z' | '~' => {
                self.skip_while(|c| c.is_ascii_alphanumeric() || c == '~');
                Token::Alpha
            }
            '.' => Token::Dot,
            '-' => Token::Hyphen,
            '+' => Token::Plus,
            c if c.is_whitespace() => {
                self.skip_while(char::is_whitespace);
                Token::Whitespace
            }
            c if c.is_control() => Token::Control,
            _ => Token::Symbol,
        };

        let end = self.chars.peek().map_or(self.end, |&(j, _)| j);
        Some(TokenSpan::new(token, start, end))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct TokenSpan {
    token: Token,
    span: Span,
}

impl TokenSpan {
    fn new(token: Token, start: usize, end: usize) -> Self {
        Self {
            token,
            span: Span::new(start, end),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn at<'input>(&self, input: &'input str) -> &'input str {
        &input[self.start..self.end]
    }

    fn at1<'input>(&self, input: &'input str) -> &'input str {
        &input[self.start + 1..self.end]
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}
