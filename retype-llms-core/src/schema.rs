//! Declarative description of the Retype project config (`retype.yml`).
//!
//! The schema is plain data walked by [`crate::validate`]. Every field is
//! optional; only the shape of a present value is checked.

/// Expected shape of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    String,
    Bool,
    Number,
    /// A string restricted to one of the listed literals.
    Enum(&'static [&'static str]),
    /// Any one of the listed shapes.
    Union(&'static [Shape]),
    /// A mapping with optional, known fields. Unknown keys are ignored.
    Object(&'static [Field]),
    /// A sequence whose elements all share one shape.
    Array(&'static Shape),
}

/// A named, optional entry of an [`Shape::Object`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

macro_rules! field {
    ($name:literal, $shape:expr $(,)?) => {
        Field {
            name: $name,
            shape: $shape,
        }
    };
}

impl Shape {
    /// Short human name used in validation messages.
    pub fn describe(&self) -> String {
        match self {
            Shape::String | Shape::Enum(_) => "string".to_string(),
            Shape::Bool => "boolean".to_string(),
            Shape::Number => "number".to_string(),
            Shape::Object(_) => "object".to_string(),
            Shape::Array(_) => "array".to_string(),
            Shape::Union(options) => options
                .iter()
                .map(Shape::describe)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

pub const ICON_ALIGN: &[&str] = &["left", "right"];
pub const GENERATOR_PATHS: &[&str] = &["source", "relative", "root"];
pub const GENERATOR_RECASE: &[&str] = &["all", "none"];
pub const LINE_BREAKS: &[&str] = &["soft", "hard"];
pub const NAV_MODE: &[&str] = &["default", "stack"];
pub const NAV_ICONS_MODE: &[&str] = &["all", "none", "folders", "pages", "top"];

/// Entry of `links` and `footer.links`.
const LINK: Shape = Shape::Object(&[
    field!("text", Shape::String),
    field!("link", Shape::String),
    field!("icon", Shape::String),
    field!("iconAlign", Shape::Enum(ICON_ALIGN)),
    field!("target", Shape::String),
]);

/// Root shape of a Retype config document.
pub const RETYPE_SCHEMA: Shape = Shape::Object(&[
    field!("input", Shape::String),
    field!("output", Shape::String),
    field!("url", Shape::String),
    field!(
        "branding",
        Shape::Object(&[field!("title", Shape::String)]),
    ),
    field!("cname", Shape::Union(&[Shape::Bool, Shape::String])),
    field!(
        "edit",
        Shape::Object(&[
            field!("repo", Shape::String),
            field!("base", Shape::String),
            field!("branch", Shape::String),
            field!("label", Shape::String),
        ]),
    ),
    field!("exclude", Shape::Array(&Shape::String)),
    field!(
        "footer",
        Shape::Object(&[
            field!("copyright", Shape::String),
            field!("links", Shape::Array(&LINK)),
        ]),
    ),
    field!(
        "generator",
        Shape::Object(&[
            field!(
                "directoryIndex",
                Shape::Object(&[
                    field!("altNames", Shape::Array(&Shape::String)),
                    field!("append", Shape::Bool),
                    field!("name", Shape::String),
                ]),
            ),
            field!("paths", Shape::Enum(GENERATOR_PATHS)),
            field!("recase", Shape::Enum(GENERATOR_RECASE)),
            field!("trailingSlash", Shape::Bool),
        ]),
    ),
    field!(
        "hub",
        Shape::Object(&[
            field!("link", Shape::String),
            field!("alt", Shape::String),
            field!("target", Shape::String),
        ]),
    ),
    field!("include", Shape::Array(&Shape::String)),
    field!("links", Shape::Array(&LINK)),
    field!("locale", Shape::String),
    field!(
        "markdown",
        Shape::Object(&[field!("lineBreaks", Shape::Enum(LINE_BREAKS))]),
    ),
    field!("meta", Shape::Object(&[field!("title", Shape::String)])),
    field!(
        "nav",
        Shape::Object(&[
            field!("mode", Shape::Enum(NAV_MODE)),
            field!(
                "icons",
                Shape::Object(&[field!("mode", Shape::Enum(NAV_ICONS_MODE))]),
            ),
        ]),
    ),
    field!(
        "toc",
        Shape::Object(&[
            field!("depth", Shape::Union(&[Shape::String, Shape::Number])),
            field!("label", Shape::String),
        ]),
    ),
]);
