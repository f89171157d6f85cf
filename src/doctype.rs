//! Document type declarations.
//!
//! The W3C-recommended doctype list: <https://www.w3.org/QA/2002/04/valid-dtd-list.html>

/// A document type declaration, emitted before any other content when set
/// on [`MarkupOptions`](crate::MarkupOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Doctype {
    /// `<!DOCTYPE html>`
    Html5,
    /// HTML 4.01 Strict
    Html401Strict,
    /// HTML 4.01 Transitional
    Html401Transitional,
    /// HTML 4.01 Frameset
    Html401Frameset,
    /// XHTML 1.1
    Xhtml11,
    /// XHTML 1.0 Strict
    Xhtml10Strict,
    /// XHTML 1.0 Transitional
    Xhtml10Transitional,
    /// XHTML 1.0 Frameset
    Xhtml10Frameset,
}

impl Doctype {
    /// The exact declaration string.
    pub fn declaration(&self) -> &'static str {
        match self {
            Doctype::Html5 => "<!DOCTYPE html>",
            Doctype::Html401Strict => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">"
            }
            Doctype::Html401Transitional => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\" \"http://www.w3.org/TR/html4/loose.dtd\">"
            }
            Doctype::Html401Frameset => {
                "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Frameset//EN\" \"http://www.w3.org/TR/html4/frameset.dtd\">"
            }
            Doctype::Xhtml11 => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">"
            }
            Doctype::Xhtml10Strict => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Strict//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd\">"
            }
            Doctype::Xhtml10Transitional => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">"
            }
            Doctype::Xhtml10Frameset => {
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Frameset//EN\" \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd\">"
            }
        }
    }
}
