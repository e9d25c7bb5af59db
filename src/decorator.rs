//! Decorator pattern: wrapping a data source with chained text
//! transformations.
//!
//! A [`DataSource`] produces a block of text; decorators wrap another
//! `DataSource` and rework its output. Every wrapper owns the source it
//! wraps, so chains are built inside-out and cannot be cyclic.
//!
//! Run with: `cargo run --bin decorator_demo`

use regex::Regex;
use std::sync::OnceLock;

/// The capability altered by decorators: produce a block of text.
///
/// `get_data` cannot fail; its result depends only on the structure of the
/// chain it is called on.
pub trait DataSource {
    fn get_data(&self) -> String;
}

/// Concrete producer returning a fixed paragraph of inline-markup text.
pub struct TextDataSource;

impl DataSource for TextDataSource {
    fn get_data(&self) -> String {
        SAMPLE_TEXT.to_string()
    }
}

const SAMPLE_TEXT: &str = "<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit. Donec\
    purus massa, imperdiet in libero quis, semper pulvinar risus. In hac\
    habitasse platea dictumst. <b>Nullam</b> nec suscipit leo, id faucibus odio.\
    Sed consectetur tempor pulvinar. Pellentesque vulputate accumsan enim\
    sit amet viverra. Cras nisl elit, tempor quis elementum nec, maximus at\
    dui. Proin eget tellus eget ante aliquam ultricies et nec tellus. Ut\
    id finibus felis.</p>";

/// Neutral wrapper: delegates to the wrapped source unchanged.
///
/// Concrete decorators below have the same shape and transform the result
/// instead of passing it through.
pub struct Decorator {
    wrapped: Box<dyn DataSource>,
}

impl Decorator {
    pub fn new(wrapped: Box<dyn DataSource>) -> Self {
        Self { wrapped }
    }
}

impl DataSource for Decorator {
    fn get_data(&self) -> String {
        self.wrapped.get_data()
    }
}

/// Strips minimal single-letter tags (`<p>`, `</b>`, ...) from the wrapped
/// result. Longer tags such as `<div>` are left alone.
pub struct SanitizeDecorator {
    wrapped: Box<dyn DataSource>,
}

impl SanitizeDecorator {
    pub fn new(wrapped: Box<dyn DataSource>) -> Self {
        Self { wrapped }
    }
}

impl DataSource for SanitizeDecorator {
    fn get_data(&self) -> String {
        tag_pattern()
            .replace_all(&self.wrapped.get_data(), "")
            .into_owned()
    }
}

// A `<`, an optional `/`, exactly one word character, a `>`.
fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"</?\w>").expect("tag pattern is valid"))
}

/// Shifts every character of the wrapped result up by one code point.
///
/// A toy cipher, not cryptography: there is no decrypt operation and no
/// wraparound. A character whose successor is not a valid scalar value
/// passes through unshifted.
pub struct CryptoDecorator {
    wrapped: Box<dyn DataSource>,
}

impl CryptoDecorator {
    pub fn new(wrapped: Box<dyn DataSource>) -> Self {
        Self { wrapped }
    }
}

impl DataSource for CryptoDecorator {
    fn get_data(&self) -> String {
        self.wrapped.get_data().chars().map(shift_up).collect()
    }
}

fn shift_up(c: char) -> char {
    char::from_u32(c as u32 + 1).unwrap_or(c)
}
