//! Scopesheet - scoped CSS stylesheet builder with a nested selector DSL.
//!
//! Scopesheet lets a caller describe a hierarchy of CSS selectors and their
//! rule bodies through nested closures, then renders that hierarchy into a
//! single CSS text blob attachable to a style-hosting element. It supports:
//!
//! - Selector composition: each nested closure receives a handle whose
//!   selector path extends its parent's, so the code nests the way the
//!   generated selectors nest
//! - A full catalog of pseudo-class and pseudo-element shortcuts
//!   (`hover`, `focus_visible`, `nth_child`, `slotted`, `not`, ...)
//! - Scoped custom properties: `define` on an outer selector, `var` from any
//!   nested selector, with a build-time visibility check
//! - Declaration maps: camelCase or snake_case property names converted to
//!   kebab-case, including a serde adapter for plain structs
//! - A host-keyed registry for reusing the sheet built for a component
//!
//! Scopesheet does not parse or validate CSS. It assembles syntactically
//! well-formed selector strings and passes rule text and declaration values
//! through untouched.
//!
//! # Quick Start
//!
//! ```rust
//! use scopesheet::StyleSheet;
//!
//! let sheet = StyleSheet::build(".card", |card| {
//!     card.define("card-pad", "16px")?;
//!     let pad = card.var("card-pad")?;
//!     card.assign([("padding", pad), ("borderRadius", "8px".into())])?;
//!
//!     card.hover(|hovered| {
//!         hovered.assign([("boxShadow", "0 2px 8px rgba(0, 0, 0, .2)")])
//!     })?;
//!
//!     card.select_child("h2", |title| {
//!         title.assign([("margin", "0 0 8px")])
//!     })
//! })?;
//!
//! assert_eq!(
//!     sheet.to_css(),
//!     ".card {\n--card-pad: 16px;\npadding: var(--card-pad);\nborder-radius: 8px;\n}\n\
//!      .card:hover {\nbox-shadow: 0 2px 8px rgba(0, 0, 0, .2);\n}\n\
//!      .card > h2 {\nmargin: 0 0 8px;\n}\n",
//! );
//! # Ok::<(), scopesheet::StyleError>(())
//! ```
//!
//! # Selector Composition
//!
//! Every selection operation appends one combinator-prefixed fragment to the
//! parent's path. The primitives are [`Selector::select`] (verbatim
//! fragment) and [`Selector::descend`] (bare descendant combinator); the
//! shortcut catalog and the `select_*` helpers are one-line aliases over
//! them. A node created by `descend` has no concrete target yet and rejects
//! rule text until something is selected beneath it.
//!
//! # Custom Property Scoping
//!
//! [`Selector::define`] stores a custom property on the current node and
//! emits its `--name: value;` declaration. [`Selector::var`] checks that the
//! name is defined on the current node or an ancestor — never a sibling or a
//! descendant — and returns `var(--name)`. The check runs at build time; it
//! is a linter for typos and ordering mistakes, not a guarantee about the
//! cascade at the point the rule finally applies.
//!
//! # Rebuild Semantics
//!
//! [`StyleSheet::rebuild`] re-runs a closure against the existing root
//! without clearing anything, so rule text and children accumulate unless
//! the closure is idempotent. The host-keyed [`SheetRegistry`] exposes the
//! same semantics through [`SheetRegistry::attach`].

mod catalog;
mod combinator;
mod error;
mod registry;
mod selector;
mod serialize;
mod sheet;

pub use combinator::{pseudo_class, pseudo_element, Combinator};
pub use error::{Result, StyleError};
pub use registry::SheetRegistry;
pub use selector::{CssClass, Selector};
pub use serialize::Rules;
pub use sheet::StyleSheet;
