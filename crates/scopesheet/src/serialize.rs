//! Rendering a selector tree to CSS text.

use crate::sheet::{NodeId, StyleSheet};

/// Lazy depth-first pre-order iterator over a sheet's rule blocks.
///
/// Each item is one `"<selector> {\n<body>}\n"` block; nodes with empty rule
/// bodies are skipped, so no empty blocks are ever emitted. The walk is a
/// pure function of the tree and yields the same sequence on every fresh
/// iterator as long as the sheet is not mutated in between.
#[derive(Debug)]
pub struct Rules<'a> {
    sheet: &'a StyleSheet,
    stack: Vec<NodeId>,
}

impl<'a> Rules<'a> {
    pub(crate) fn new(sheet: &'a StyleSheet) -> Self {
        Rules {
            sheet,
            stack: vec![NodeId(0)],
        }
    }
}

impl Iterator for Rules<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(id) = self.stack.pop() {
            let node = &self.sheet.nodes[id.0];
            // Children are pushed reversed so the first child pops next.
            self.stack.extend(node.children.iter().rev().copied());
            if !node.body.is_empty() {
                return Some(format!("{} {{\n{}}}\n", node.path, node.body));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::sheet::StyleSheet;

    fn sample() -> StyleSheet {
        StyleSheet::build("nav", |nav| {
            nav.write("display: flex;\n")?;
            nav.select_child("a", |a| {
                a.write("color: inherit;\n")?;
                a.hover(|h| h.write("text-decoration: underline;\n"))
            })?;
            nav.select_class_name("brand", |brand| brand.write("font-weight: 700;\n"))
        })
        .unwrap()
    }

    #[test]
    fn preorder_with_insertion_ordered_children() {
        let blocks: Vec<String> = sample().rules().collect();
        assert_eq!(
            blocks,
            vec![
                "nav {\ndisplay: flex;\n}\n".to_string(),
                "nav > a {\ncolor: inherit;\n}\n".to_string(),
                "nav > a:hover {\ntext-decoration: underline;\n}\n".to_string(),
                "nav.brand {\nfont-weight: 700;\n}\n".to_string(),
            ],
        );
    }

    #[test]
    fn empty_bodies_contribute_nothing() {
        let sheet = StyleSheet::build("section", |section| {
            section.select_child("header", |header| {
                header.select_child("h1", |h1| h1.write("margin: 0;\n"))
            })
        })
        .unwrap();
        // Neither `section` nor `section > header` wrote anything.
        assert_eq!(sheet.to_css(), "section > header > h1 {\nmargin: 0;\n}\n");
    }

    #[test]
    fn serialization_is_idempotent() {
        let sheet = sample();
        assert_eq!(sheet.to_css(), sheet.to_css());
    }

    #[test]
    fn iterator_is_restartable() {
        let sheet = sample();
        let first: Vec<String> = sheet.rules().collect();
        let second: Vec<String> = sheet.rules().collect();
        assert_eq!(first, second);
    }
}
