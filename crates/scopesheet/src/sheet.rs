//! The selector tree and its entry points.
//!
//! A [`StyleSheet`] owns the full selector tree for one style host. The tree
//! is built root-first by nested builder closures: [`StyleSheet::build`]
//! creates the root node and hands a [`Selector`] for it to the caller's
//! closure, which populates it — writing rule text, defining custom
//! properties, or selecting child nodes, each of which recursively repeats
//! the same step. Construction happens within one unbroken call stack; once
//! the outermost closure returns, the sheet is complete.
//!
//! Nodes are kept in a flat arena (`Vec<Node>` indexed by [`NodeId`]) with
//! parent back-references used only for scope lookups, never for ownership.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::selector::Selector;
use crate::serialize::Rules;

/// Index of a node within a [`StyleSheet`]'s arena. The root is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// One node of the selector tree.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Fully-qualified selector path from the root to this node.
    /// Built once at construction, immutable afterwards.
    pub(crate) path: String,
    /// Accumulated literal rule text for exactly this path. Append-only.
    pub(crate) body: String,
    /// Custom properties defined on this node. Private to the node;
    /// visibility for descendants goes through the parent chain.
    pub(crate) scope: HashMap<String, String>,
    /// Back-reference for scope resolution. `None` for the root.
    pub(crate) parent: Option<NodeId>,
    /// Insertion order is serialization order.
    pub(crate) children: Vec<NodeId>,
    /// Set iff the node was created by a bare descendant combinator and has
    /// no concrete target yet. Such a node rejects rule text.
    pub(crate) incomplete: bool,
}

/// A finished (or in-progress) selector tree for one style host.
///
/// # Example
///
/// ```rust
/// use scopesheet::StyleSheet;
///
/// let sheet = StyleSheet::build("button", |button| {
///     button.write("color: red;\n")?;
///     button.hover(|hovered| hovered.write("opacity: .5;\n"))?;
///     Ok(())
/// })?;
///
/// assert_eq!(
///     sheet.to_css(),
///     "button {\ncolor: red;\n}\nbutton:hover {\nopacity: .5;\n}\n",
/// );
/// # Ok::<(), scopesheet::StyleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub(crate) nodes: Vec<Node>,
}

impl StyleSheet {
    /// Builds a fresh selector tree rooted at `root_fragment`.
    ///
    /// The closure runs synchronously against the root node before `build`
    /// returns; it is the sole means of populating the sheet. Errors from the
    /// closure abort construction and propagate to the caller.
    pub fn build<F>(root_fragment: impl Into<String>, f: F) -> Result<Self>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        let mut sheet = StyleSheet {
            nodes: vec![Node {
                path: root_fragment.into(),
                body: String::new(),
                scope: HashMap::new(),
                parent: None,
                children: Vec::new(),
                incomplete: false,
            }],
        };
        let mut root = Selector::new(&mut sheet, NodeId(0));
        f(&mut root)?;
        Ok(sheet)
    }

    /// Re-runs a builder closure against the existing root node.
    ///
    /// Prior rule text and children are left in place: rules and child
    /// selectors accumulate across rebuilds unless the closure's own logic
    /// is idempotent. This is a sharp edge carried intentionally — callers
    /// that want a clean slate should [`build`](StyleSheet::build) a new
    /// sheet instead.
    pub fn rebuild<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        let mut root = Selector::new(self, NodeId(0));
        f(&mut root)
    }

    /// The root node's selector path.
    pub fn root_path(&self) -> &str {
        &self.nodes[0].path
    }

    /// Returns a lazy iterator over the sheet's rule blocks in depth-first
    /// pre-order. Nodes with empty rule bodies are skipped.
    pub fn rules(&self) -> Rules<'_> {
        Rules::new(self)
    }

    /// Renders the whole tree to CSS text. Pure function of the tree:
    /// repeated calls on an unmodified sheet yield identical strings.
    pub fn to_css(&self) -> String {
        self.rules().collect()
    }

    /// Number of selector nodes in the tree, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. A built sheet always contains at
    /// least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a child node to `parent` and returns its id.
    pub(crate) fn push_child(
        &mut self,
        parent: NodeId,
        fragment: &str,
        incomplete: bool,
    ) -> NodeId {
        let path = format!("{}{}", self.nodes[parent.0].path, fragment);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            path,
            body: String::new(),
            scope: HashMap::new(),
            parent: Some(parent),
            children: Vec::new(),
            incomplete,
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self.rules() {
            f.write_str(&block)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_runs_closure_against_root() {
        let sheet = StyleSheet::build(".panel", |panel| {
            assert_eq!(panel.path(), ".panel");
            panel.write("margin: 0;\n")
        })
        .unwrap();
        assert_eq!(sheet.root_path(), ".panel");
        assert_eq!(sheet.to_css(), ".panel {\nmargin: 0;\n}\n");
    }

    #[test]
    fn build_propagates_closure_errors() {
        let result = StyleSheet::build("nav", |nav| {
            nav.var("missing")?;
            Ok(())
        });
        assert!(result.is_err());
    }

    #[test]
    fn child_paths_concatenate() {
        let sheet = StyleSheet::build("ul", |ul| {
            ul.select_child("li", |li| {
                assert_eq!(li.path(), "ul > li");
                li.select(":first-child", |first| {
                    assert_eq!(first.path(), "ul > li:first-child");
                    Ok(())
                })
            })
        })
        .unwrap();
        // Empty bodies everywhere, so nothing serializes.
        assert_eq!(sheet.to_css(), "");
    }

    #[test]
    fn sibling_paths_concatenate() {
        let sheet = StyleSheet::build("h2", |h2| {
            h2.select_adjacent("p", |lede| {
                assert_eq!(lede.path(), "h2 + p");
                lede.write("font-size: 1.1em;\n")
            })?;
            h2.select_sibling("p", |rest| {
                assert_eq!(rest.path(), "h2 ~ p");
                rest.write("margin-top: 1em;\n")
            })
        })
        .unwrap();
        assert_eq!(
            sheet.to_css(),
            "h2 + p {\nfont-size: 1.1em;\n}\nh2 ~ p {\nmargin-top: 1em;\n}\n",
        );
    }

    #[test]
    fn len_counts_nodes() {
        let sheet = StyleSheet::build("ol", |ol| {
            ol.select_child("li", |li| li.marker(|m| m.write("color: gray;\n")))
        })
        .unwrap();
        // Root, li, and its marker.
        assert_eq!(sheet.len(), 3);
        assert!(!sheet.is_empty());
    }

    #[test]
    fn rebuild_accumulates() {
        let mut sheet = StyleSheet::build("a", |a| a.write("color: blue;\n")).unwrap();
        sheet.rebuild(|a| a.write("color: blue;\n")).unwrap();
        assert_eq!(sheet.to_css(), "a {\ncolor: blue;\ncolor: blue;\n}\n");
    }

    #[test]
    fn rebuild_appends_children_again() {
        let mut sheet = StyleSheet::build("a", |a| {
            a.visited(|v| v.write("color: purple;\n"))
        })
        .unwrap();
        sheet
            .rebuild(|a| a.visited(|v| v.write("color: purple;\n")))
            .unwrap();
        assert_eq!(
            sheet.to_css(),
            "a:visited {\ncolor: purple;\n}\na:visited {\ncolor: purple;\n}\n",
        );
    }

    #[test]
    fn display_matches_to_css() {
        let sheet = StyleSheet::build("p", |p| p.write("line-height: 1.5;\n")).unwrap();
        assert_eq!(sheet.to_string(), sheet.to_css());
    }
}
