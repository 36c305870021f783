//! The builder handle passed to every DSL closure.
//!
//! A [`Selector`] is a mutable view onto one node of a [`StyleSheet`]. It is
//! always passed as an explicit closure parameter, never held as ambient
//! state, so nesting reads the way the generated CSS nests:
//!
//! ```rust
//! use scopesheet::StyleSheet;
//!
//! let sheet = StyleSheet::build(".menu", |menu| {
//!     menu.assign([("display", "flex")])?;
//!     menu.select_child("li", |item| {
//!         item.assign([("padding", "4px 8px")])?;
//!         item.hover(|hovered| hovered.assign([("background", "#eee")]))
//!     })
//! })?;
//! # Ok::<(), scopesheet::StyleError>(())
//! ```
//!
//! Operations split into three groups: selection (`select`, `descend`, the
//! combinator primitives, and the shortcut catalog in [`crate::catalog`]),
//! rule text (`write`, `assign`, `assign_serialized`), and custom-property
//! scoping (`define`, `is_defined`, `var`).

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::combinator::Combinator;
use crate::error::{Result, StyleError};
use crate::sheet::{NodeId, StyleSheet};

/// Types that carry a stable CSS class name.
///
/// Implemented by component types so selectors can be derived from the type
/// rather than a repeated string literal:
///
/// ```rust
/// use scopesheet::{CssClass, StyleSheet};
///
/// struct Badge;
///
/// impl CssClass for Badge {
///     const NAME: &'static str = "badge";
/// }
///
/// let sheet = StyleSheet::build(":host", |host| {
///     host.select_class::<Badge, _>(|badge| badge.write("font-size: .75rem;\n"))
/// })?;
/// assert_eq!(sheet.to_css(), ":host.badge {\nfont-size: .75rem;\n}\n");
/// # Ok::<(), scopesheet::StyleError>(())
/// ```
pub trait CssClass {
    /// The class-selector name, without the leading dot.
    const NAME: &'static str;
}

/// Mutable handle onto one node of a [`StyleSheet`].
#[derive(Debug)]
pub struct Selector<'a> {
    sheet: &'a mut StyleSheet,
    node: NodeId,
}

impl<'a> Selector<'a> {
    pub(crate) fn new(sheet: &'a mut StyleSheet, node: NodeId) -> Self {
        Selector { sheet, node }
    }

    /// The fully-qualified selector path from the root to this node.
    pub fn path(&self) -> &str {
        &self.sheet.nodes[self.node.0].path
    }

    /// Creates a child node whose path is this node's path plus `fragment`,
    /// taken verbatim, and runs `f` against it.
    ///
    /// This is the primitive every other selection operation reduces to.
    pub fn select<F>(&mut self, fragment: impl AsRef<str>, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.child(fragment.as_ref(), false, f)
    }

    /// Creates a child for the bare descendant combinator (a trailing space
    /// with no target yet). Only further selection is legal on the child;
    /// writing rule text to it fails with
    /// [`StyleError::IncompleteSelector`].
    ///
    /// ```rust
    /// use scopesheet::StyleSheet;
    ///
    /// let sheet = StyleSheet::build(".toolbar", |toolbar| {
    ///     toolbar.descend(|any| {
    ///         any.select("button", |button| button.write("margin: 2px;\n"))
    ///     })
    /// })?;
    /// assert_eq!(sheet.to_css(), ".toolbar button {\nmargin: 2px;\n}\n");
    /// # Ok::<(), scopesheet::StyleError>(())
    /// ```
    pub fn descend<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.child(Combinator::Descendant.token(), true, f)
    }

    /// Selects `.name`.
    pub fn select_class_name<F>(&mut self, name: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(Combinator::Class.fragment(name), f)
    }

    /// Selects `.C::NAME` for a type with a registered class name.
    pub fn select_class<C, F>(&mut self, f: F) -> Result<()>
    where
        C: CssClass,
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select_class_name(C::NAME, f)
    }

    /// Selects `#name`.
    pub fn select_id<F>(&mut self, name: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(Combinator::Id.fragment(name), f)
    }

    /// Selects a direct child: ` > fragment`.
    pub fn select_child<F>(&mut self, fragment: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(Combinator::Child.fragment(fragment), f)
    }

    /// Selects an immediately following sibling: ` + fragment`.
    pub fn select_adjacent<F>(&mut self, fragment: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(Combinator::AdjacentSibling.fragment(fragment), f)
    }

    /// Selects any following sibling: ` ~ fragment`.
    pub fn select_sibling<F>(&mut self, fragment: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(Combinator::GeneralSibling.fragment(fragment), f)
    }

    /// Appends `text` verbatim to this node's rule body.
    ///
    /// Fails with [`StyleError::IncompleteSelector`] if the node was created
    /// by a bare descendant combinator and has no concrete target yet.
    pub fn write(&mut self, text: &str) -> Result<()> {
        let node = &mut self.sheet.nodes[self.node.0];
        if node.incomplete {
            return Err(StyleError::IncompleteSelector {
                path: node.path.clone(),
            });
        }
        node.body.push_str(text);
        Ok(())
    }

    /// Writes a sequence of property/value declarations.
    ///
    /// Property names are converted to kebab-case (`backgroundColor` and
    /// `background_color` both become `background-color`); values are taken
    /// through their `Display` form. Emission preserves iteration order.
    ///
    /// ```rust
    /// use scopesheet::StyleSheet;
    ///
    /// let sheet = StyleSheet::build(".pill", |pill| {
    ///     pill.assign([("backgroundColor", "blue"), ("borderRadius", "9999px")])
    /// })?;
    /// assert_eq!(
    ///     sheet.to_css(),
    ///     ".pill {\nbackground-color: blue;\nborder-radius: 9999px;\n}\n",
    /// );
    /// # Ok::<(), scopesheet::StyleError>(())
    /// ```
    pub fn assign<I, K, V>(&mut self, declarations: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        for (property, value) in declarations {
            let line = format!("{}: {};\n", kebab_case(property.as_ref()), value);
            self.write(&line)?;
        }
        Ok(())
    }

    /// Writes the fields of a serializable struct as declarations.
    ///
    /// The value must serialize to an object; field order is preserved.
    /// `None` fields are skipped, string values are emitted unquoted, and
    /// anything else uses its JSON rendering.
    ///
    /// ```rust
    /// use scopesheet::StyleSheet;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Spacing {
    ///     margin_top: String,
    ///     z_index: u32,
    /// }
    ///
    /// let sheet = StyleSheet::build(".modal", |modal| {
    ///     modal.assign_serialized(&Spacing {
    ///         margin_top: "2rem".into(),
    ///         z_index: 40,
    ///     })
    /// })?;
    /// assert_eq!(sheet.to_css(), ".modal {\nmargin-top: 2rem;\nz-index: 40;\n}\n");
    /// # Ok::<(), scopesheet::StyleError>(())
    /// ```
    pub fn assign_serialized<T: Serialize>(&mut self, declarations: &T) -> Result<()> {
        let map = match serde_json::to_value(declarations)? {
            Value::Object(map) => map,
            other => {
                return Err(StyleError::InvalidDeclarations {
                    kind: json_kind(&other),
                })
            }
        };
        for (property, value) in &map {
            let rendered = match value {
                Value::Null => continue,
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            self.assign([(property.as_str(), rendered)])?;
        }
        Ok(())
    }

    /// Defines a custom property on this node.
    ///
    /// The stringified value is stored in this node's private scope (last
    /// write wins) and the declaration `--name: value;` is written to the
    /// rule body so the property reaches the generated CSS. The definition
    /// is visible to this node and its descendants via [`var`](Self::var),
    /// never to ancestors or siblings.
    pub fn define(&mut self, name: impl AsRef<str>, value: impl fmt::Display) -> Result<()> {
        let name = name.as_ref();
        let value = value.to_string();
        self.write(&format!("--{}: {};\n", name, value))?;
        self.sheet.nodes[self.node.0]
            .scope
            .insert(name.to_string(), value);
        Ok(())
    }

    /// Returns `true` iff `name` is defined on this node or any ancestor,
    /// walking strictly upward to the root.
    pub fn is_defined(&self, name: &str) -> bool {
        let mut current = Some(self.node);
        while let Some(id) = current {
            let node = &self.sheet.nodes[id.0];
            if node.scope.contains_key(name) {
                return true;
            }
            current = node.parent;
        }
        false
    }

    /// Returns the textual reference `var(--name)` if `name` is visible in
    /// this node's scope chain, or [`StyleError::UndefinedReference`]
    /// otherwise.
    ///
    /// This is a static check at build time, not a guarantee about the
    /// cascade at the point the generated rule applies: a sibling subtree
    /// defining the same name does not count.
    pub fn var(&self, name: &str) -> Result<String> {
        if !self.is_defined(name) {
            return Err(StyleError::UndefinedReference {
                name: name.to_string(),
            });
        }
        Ok(format!("var(--{})", name))
    }

    fn child<F>(&mut self, fragment: &str, incomplete: bool, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        let id = self.sheet.push_child(self.node, fragment, incomplete);
        let mut selector = Selector::new(&mut *self.sheet, id);
        f(&mut selector)
    }
}

/// Converts a camelCase or snake_case property name to kebab-case. A hyphen
/// is inserted before each internal uppercase letter, which is lowercased;
/// underscores become hyphens.
fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for (i, ch) in property.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
