//! The markup builder: depth tracking, spacing modes, and scoped tags.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::{Attr, check_element_name, format_attrs};
use crate::buffer::Fragments;
use crate::doctype::Doctype;
use crate::tracing_macros::trace;

/// HTML void elements: they never have children and never get an end tag.
///
/// <http://w3c.github.io/html/syntax.html#void-elements>
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check if a tag is a void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Errors raised by builder operations.
///
/// All of these are programmer errors detected synchronously, before any
/// state is touched: a failed call leaves the output, depth and spacing mode
/// exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// An element name that cannot be emitted as markup (empty, or contains
    /// whitespace or markup-significant characters).
    #[error("invalid element name: {0:?}")]
    InvalidContent(String),

    /// An attribute whose name cannot be serialized.
    #[error("bad attribute: {0:?}")]
    InvalidAttribute(String),

    /// A void element was given where a container element is required.
    #[error("use `void` for void elements like <{0}>")]
    IsVoidElement(String),

    /// A non-void element was given to `void`.
    #[error("use `block` or `inline` for non-void elements like <{0}>")]
    NotVoidElement(String),

    /// `close` was called with no element open.
    #[error("no open element to close")]
    UnbalancedScope,
}

/// Whitespace handling for emitted fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spacing {
    /// Indent to the current depth before, and newline after, every
    /// emitted fragment.
    #[default]
    Auto,
    /// The caller places all whitespace via
    /// [`indent`](Markup::indent)/[`newline`](Markup::newline).
    Manual,
}

/// Construction options for [`Markup`].
#[derive(Debug, Clone)]
pub struct MarkupOptions {
    /// Spaces per indentation level (default: 4).
    pub spaces: usize,
    /// Initial spacing mode (default: automatic).
    pub spacing: Spacing,
    /// Doctype declaration emitted before anything else (default: none).
    pub doctype: Option<Doctype>,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            spaces: 4,
            spacing: Spacing::Auto,
            doctype: None,
        }
    }
}

impl MarkupOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per indentation level.
    pub fn spaces(mut self, spaces: usize) -> Self {
        self.spaces = spaces;
        self
    }

    /// Start in manual spacing mode.
    pub fn manual_spacing(mut self) -> Self {
        self.spacing = Spacing::Manual;
        self
    }

    /// Emit a doctype declaration before any other content.
    pub fn doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = Some(doctype);
        self
    }
}

/// Programmatic markup writer.
///
/// A `Markup` accumulates text fragments in memory; [`render`](Self::render)
/// concatenates them into the final document. One instance is exclusively
/// owned by one caller; build independent instances for parallel work and
/// concatenate the results.
///
/// See the [crate docs](crate) for a worked example.
#[derive(Debug, Clone)]
pub struct Markup {
    frags: Fragments,
    depth: usize,
    spaces: usize,
    spacing: Spacing,
    /// Modes saved by enclosing `manual` scopes, innermost last.
    saved_modes: SmallVec<[Spacing; 4]>,
    /// One-liner state: tags and content concatenate with no whitespace.
    oneline: bool,
    /// Elements opened via `open` and not yet closed, innermost last.
    open_elements: SmallVec<[CompactString; 8]>,
}

impl Default for Markup {
    fn default() -> Self {
        Self::new()
    }
}

impl Markup {
    /// New builder with default options: 4-space indent, automatic spacing.
    pub fn new() -> Self {
        Self::with_options(MarkupOptions::default())
    }

    /// New builder with the given options.
    pub fn with_options(options: MarkupOptions) -> Self {
        let mut markup = Self {
            frags: Fragments::new(),
            depth: 0,
            spaces: options.spaces,
            spacing: options.spacing,
            saved_modes: SmallVec::new(),
            oneline: false,
            open_elements: SmallVec::new(),
        };
        if let Some(doctype) = options.doctype {
            markup.append(doctype.declaration());
        }
        markup
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Current spacing mode.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Rendered length in bytes.
    pub fn len(&self) -> usize {
        self.frags.byte_len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.frags.is_empty()
    }

    /// Concatenate everything emitted so far.
    pub fn render(&self) -> String {
        self.frags.concat()
    }

    fn auto_spacing(&self) -> bool {
        !self.oneline && self.spacing == Spacing::Auto
    }

    /// Emit text through the spacing engine: in automatic mode the text is
    /// indented to the current depth and newline-terminated, otherwise it is
    /// appended exactly as given.
    pub fn append(&mut self, text: &str) -> &mut Self {
        if self.auto_spacing() {
            self.indent();
        }
        self.frags.push(text);
        if self.auto_spacing() {
            self.newline();
        }
        self
    }

    /// Emit the indentation for the current depth. Never changes depth.
    pub fn indent(&mut self) -> &mut Self {
        self.frags.push(" ".repeat(self.spaces * self.depth));
        self
    }

    /// Emit a newline.
    pub fn newline(&mut self) -> &mut Self {
        self.frags.push("\n");
        self
    }

    /// Emit a self-closing element: `<name attrs />`.
    ///
    /// Fails with [`MarkupError::NotVoidElement`] unless `name` is one of
    /// the [`VOID_ELEMENTS`].
    pub fn void(&mut self, name: &str, attrs: &[Attr]) -> Result<&mut Self, MarkupError> {
        check_element_name(name)?;
        if !is_void_element(name) {
            return Err(MarkupError::NotVoidElement(name.to_string()));
        }
        let attrs = format_attrs(attrs)?;
        trace!("void <{name} />");
        Ok(self.append(&format!("<{name}{attrs} />")))
    }

    /// Open a container element; pair positionally with
    /// [`close`](Self::close).
    ///
    /// Prefer [`block`](Self::block) where the element's extent is lexical:
    /// the scoped form cannot be left unbalanced. Fails with
    /// [`MarkupError::IsVoidElement`] for void elements.
    pub fn open(&mut self, name: &str, attrs: &[Attr]) -> Result<&mut Self, MarkupError> {
        check_element_name(name)?;
        if is_void_element(name) {
            return Err(MarkupError::IsVoidElement(name.to_string()));
        }
        let attrs = format_attrs(attrs)?;
        if self.oneline {
            // terminate a dangling one-liner before starting a block
            self.oneline = false;
            self.newline();
        }
        trace!("open <{name}> at depth {}", self.depth);
        self.append(&format!("<{name}{attrs}>"));
        self.open_elements.push(CompactString::from(name));
        self.depth += 1;
        Ok(self)
    }

    /// Close the innermost element opened by [`open`](Self::open).
    ///
    /// Fails with [`MarkupError::UnbalancedScope`] when nothing is open.
    pub fn close(&mut self) -> Result<&mut Self, MarkupError> {
        let Some(name) = self.open_elements.pop() else {
            return Err(MarkupError::UnbalancedScope);
        };
        if self.oneline {
            self.oneline = false;
            self.newline();
        }
        self.depth -= 1;
        trace!("close </{name}> back to depth {}", self.depth);
        self.append(&format!("</{name}>"));
        Ok(self)
    }

    /// Add an element whose children sit one indentation level deeper.
    ///
    /// The closing tag is written on every exit path: if `body` returns an
    /// error, the element is closed first and the error propagated after.
    pub fn block<F>(&mut self, name: &str, attrs: &[Attr], body: F) -> Result<&mut Self, MarkupError>
    where
        F: FnOnce(&mut Self) -> Result<(), MarkupError>,
    {
        self.open(name, attrs)?;
        let result = body(self);
        self.close()?;
        result?;
        Ok(self)
    }

    fn inline_scope<F>(
        &mut self,
        name: &str,
        attrs: &[Attr],
        terminate_line: bool,
        body: F,
    ) -> Result<&mut Self, MarkupError>
    where
        F: FnOnce(&mut Self) -> Result<(), MarkupError>,
    {
        check_element_name(name)?;
        if is_void_element(name) {
            return Err(MarkupError::IsVoidElement(name.to_string()));
        }
        let attrs = format_attrs(attrs)?;
        if !self.oneline {
            self.oneline = true;
            // the one-liner as a whole still sits at the ambient depth
            if self.spacing == Spacing::Auto {
                self.indent();
            }
        }
        trace!("inline <{name}>");
        self.append(&format!("<{name}{attrs}>"));
        let result = body(self);
        self.append(&format!("</{name}>"));
        if terminate_line {
            self.newline();
            self.oneline = false;
        }
        result?;
        Ok(self)
    }

    /// Add a one-liner element: `<name>content</name>` with zero injected
    /// whitespace, regardless of nesting depth.
    ///
    /// Nested `inline` scopes concatenate directly. The builder stays in
    /// one-liner state afterwards, so siblings keep extending the same line;
    /// use [`line`](Self::line) to finish the line instead. The closing tag
    /// is guaranteed even when `body` errors.
    pub fn inline<F>(
        &mut self,
        name: &str,
        attrs: &[Attr],
        body: F,
    ) -> Result<&mut Self, MarkupError>
    where
        F: FnOnce(&mut Self) -> Result<(), MarkupError>,
    {
        self.inline_scope(name, attrs, false, body)
    }

    /// Add a one-liner element that ends its output line.
    ///
    /// Like [`inline`](Self::inline), but a newline follows the closing tag
    /// and the next sibling goes back to block-style emission. Intended for
    /// the outermost element of a one-liner.
    pub fn line<F>(&mut self, name: &str, attrs: &[Attr], body: F) -> Result<&mut Self, MarkupError>
    where
        F: FnOnce(&mut Self) -> Result<(), MarkupError>,
    {
        self.inline_scope(name, attrs, true, body)
    }

    /// Run `body` with manual spacing, restoring the previous mode on every
    /// exit path.
    ///
    /// Regions nest: leaving an inner region restores whatever mode was
    /// active immediately before it was entered.
    pub fn manual<F>(&mut self, body: F) -> Result<&mut Self, MarkupError>
    where
        F: FnOnce(&mut Self) -> Result<(), MarkupError>,
    {
        self.saved_modes.push(self.spacing);
        self.spacing = Spacing::Manual;
        trace!("manual spacing on");
        let result = body(self);
        if let Some(saved) = self.saved_modes.pop() {
            self.spacing = saved;
        }
        trace!("manual spacing off");
        result?;
        Ok(self)
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
