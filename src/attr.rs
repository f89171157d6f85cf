//! Attribute descriptors and formatting.
//!
//! Attributes come in the two shapes HTML syntax has: boolean attributes
//! (`autoplay`) rendered as the bare name, and value attributes
//! (`width="640"`) rendered as a quoted name/value pair. Values may be
//! supplied as text or as integers, which render as plain decimal digits.

use compact_str::{CompactString, ToCompactString};

use crate::builder::MarkupError;

/// A value attribute's value: text, or an integer coerced to decimal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrValue(CompactString);

impl AttrValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue(CompactString::from(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue(CompactString::from(value))
    }
}

impl From<CompactString> for AttrValue {
    fn from(value: CompactString) -> Self {
        AttrValue(value)
    }
}

macro_rules! attr_value_from_int {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for AttrValue {
            fn from(value: $ty) -> Self {
                AttrValue(value.to_compact_string())
            }
        })*
    };
}

attr_value_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// One attribute descriptor.
///
/// ```rust
/// use pressml::Attr;
///
/// let autoplay = Attr::flag("autoplay");
/// let width = Attr::value("width", 800);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// Boolean attribute, rendered as the bare name.
    Flag(CompactString),
    /// Value attribute, rendered as `name="value"`.
    Value(CompactString, AttrValue),
}

impl Attr {
    /// Boolean attribute.
    pub fn flag(name: impl Into<CompactString>) -> Self {
        Attr::Flag(name.into())
    }

    /// Value attribute. The value may be text or any integer type.
    pub fn value(name: impl Into<CompactString>, value: impl Into<AttrValue>) -> Self {
        Attr::Value(name.into(), value.into())
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        match self {
            Attr::Flag(name) => name.as_str(),
            Attr::Value(name, _) => name.as_str(),
        }
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Attr::Flag(name) => out.push_str(name),
            Attr::Value(name, value) => {
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(value.as_str());
                out.push('"');
            }
        }
    }
}

impl From<&str> for Attr {
    fn from(name: &str) -> Self {
        Attr::flag(name)
    }
}

impl<V: Into<AttrValue>> From<(&str, V)> for Attr {
    fn from((name, value): (&str, V)) -> Self {
        Attr::value(name, value)
    }
}

/// Whether `name` can appear as a serialized element or attribute name.
fn name_is_valid(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_ascii_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '=' | '/'))
}

pub(crate) fn check_element_name(name: &str) -> Result<(), MarkupError> {
    if name_is_valid(name) {
        Ok(())
    } else {
        Err(MarkupError::InvalidContent(name.to_string()))
    }
}

/// Render an attribute list as the string inserted after a tag name.
///
/// An empty list renders as the empty string; otherwise the result carries a
/// leading space, then each attribute joined by single spaces, in input
/// order. Pure: no builder state is read or touched.
///
/// ```rust
/// use pressml::{Attr, format_attrs};
///
/// let attrs = format_attrs(&[
///     Attr::value("src", "videofile.webm"),
///     Attr::flag("autoplay"),
///     Attr::value("width", 800),
/// ])?;
/// assert_eq!(attrs, r#" src="videofile.webm" autoplay width="800""#);
/// # Ok::<(), pressml::MarkupError>(())
/// ```
pub fn format_attrs(attrs: &[Attr]) -> Result<String, MarkupError> {
    for attr in attrs {
        if !name_is_valid(attr.name()) {
            return Err(MarkupError::InvalidAttribute(attr.name().to_string()));
        }
    }
    let mut out = String::new();
    for attr in attrs {
        out.push(' ');
        attr.render_into(&mut out);
    }
    Ok(out)
}
