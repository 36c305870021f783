//! Selector combinators and fragment composition.
//!
//! Every selection operation in the DSL reduces to "apply combinator `C`
//! with payload `P`", producing the fragment `C.token() + P` which is
//! appended to the parent's selector path.

use std::fmt;

/// The closed set of tokens that join selector fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `+` — immediately following sibling.
    AdjacentSibling,
    /// `>` — direct child.
    Child,
    /// `.` — class selector.
    Class,
    /// ` ` — any descendant.
    Descendant,
    /// `#` — id selector.
    Id,
    /// No joiner; used for the stylesheet root.
    None,
    /// `::` — pseudo-element.
    PseudoElement,
    /// `:` — pseudo-class.
    PseudoClass,
    /// `~` — any following sibling.
    GeneralSibling,
}

impl Combinator {
    /// Returns the literal token for this combinator, including the
    /// surrounding whitespace CSS conventionally uses.
    pub fn token(self) -> &'static str {
        match self {
            Combinator::AdjacentSibling => " + ",
            Combinator::Child => " > ",
            Combinator::Class => ".",
            Combinator::Descendant => " ",
            Combinator::Id => "#",
            Combinator::None => "",
            Combinator::PseudoElement => "::",
            Combinator::PseudoClass => ":",
            Combinator::GeneralSibling => " ~ ",
        }
    }

    /// Composes a selector fragment from this combinator and a payload.
    ///
    /// ```rust
    /// use scopesheet::Combinator;
    ///
    /// assert_eq!(Combinator::Class.fragment("card"), ".card");
    /// assert_eq!(Combinator::Child.fragment("li"), " > li");
    /// ```
    pub fn fragment(self, payload: &str) -> String {
        format!("{}{}", self.token(), payload)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Composes a pseudo-class fragment (`:token`) for embedding in other
/// fragments, e.g. inside `:not(...)`. No selector node is created.
pub fn pseudo_class(token: &str) -> String {
    Combinator::PseudoClass.fragment(token)
}

/// Composes a pseudo-element fragment (`::token`). No selector node is
/// created.
pub fn pseudo_element(token: &str) -> String {
    Combinator::PseudoElement.fragment(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        assert_eq!(Combinator::AdjacentSibling.token(), " + ");
        assert_eq!(Combinator::Child.token(), " > ");
        assert_eq!(Combinator::Class.token(), ".");
        assert_eq!(Combinator::Descendant.token(), " ");
        assert_eq!(Combinator::Id.token(), "#");
        assert_eq!(Combinator::None.token(), "");
        assert_eq!(Combinator::PseudoElement.token(), "::");
        assert_eq!(Combinator::PseudoClass.token(), ":");
        assert_eq!(Combinator::GeneralSibling.token(), " ~ ");
    }

    #[test]
    fn fragment_is_token_plus_payload() {
        assert_eq!(Combinator::Id.fragment("app"), "#app");
        assert_eq!(Combinator::PseudoClass.fragment("hover"), ":hover");
        assert_eq!(Combinator::GeneralSibling.fragment("p"), " ~ p");
    }

    #[test]
    fn free_helpers() {
        assert_eq!(pseudo_class("focus"), ":focus");
        assert_eq!(pseudo_element("before"), "::before");
    }

    #[test]
    fn display_matches_token() {
        assert_eq!(Combinator::Child.to_string(), " > ");
    }
}
