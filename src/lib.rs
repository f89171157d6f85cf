//! Programmatic XML/HTML generation.
//!
//! `pressml` builds tag-structured text incrementally while tracking
//! indentation, line breaks and tag nesting for you:
//!
//! - **Block elements** put their children on their own lines, one
//!   indentation level deeper.
//! - **One-liner elements** keep tags and content on a single line with no
//!   injected whitespace.
//! - **Void elements** (`<br />`, `<img />`, ...) are emitted self-closing
//!   and can never be opened as containers.
//! - **Manual spacing regions** hand all whitespace back to the caller and
//!   restore the previous mode when they end.
//!
//! Scoped operations take a closure and guarantee the closing tag is written
//! on every exit path, including when the closure returns an error.
//!
//! # Example
//!
//! ```rust
//! use pressml::{Attr, Markup};
//!
//! let mut html = Markup::new();
//! html.block("article", &[], |m| {
//!     m.line("h1", &[], |m| {
//!         m.append("Hello!");
//!         Ok(())
//!     })?;
//!     m.void("img", &[Attr::value("src", "/hello.png"), Attr::value("width", 640)])?;
//!     Ok(())
//! })?;
//!
//! assert_eq!(
//!     html.render(),
//!     "<article>\n    <h1>Hello!</h1>\n    <img src=\"/hello.png\" width=\"640\" />\n</article>\n"
//! );
//! # Ok::<(), pressml::MarkupError>(())
//! ```

mod tracing_macros;

pub mod attr;
mod buffer;
pub mod builder;
pub mod doctype;

// Re-export the core types at the crate root for convenience
pub use attr::{Attr, AttrValue, format_attrs};
pub use builder::{Markup, MarkupError, MarkupOptions, Spacing, VOID_ELEMENTS, is_void_element};
pub use doctype::Doctype;
