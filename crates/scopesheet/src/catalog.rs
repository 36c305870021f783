//! The named selector shortcut catalog.
//!
//! Every method here is a one-line alias over [`Selector::select`]: plain
//! shortcuts come from the token tables below, parametrized ones interpolate
//! their argument into the token. None of them carry semantics of their own.

use std::fmt;

use crate::error::Result;
use crate::selector::Selector;

macro_rules! pseudo_class_shortcuts {
    ($($method:ident => $token:literal,)*) => {
        /// Pseudo-class shortcuts. Each selects `:token` on the current node.
        impl Selector<'_> {
            $(
                #[doc = concat!("Selects `:", $token, "`.")]
                pub fn $method<F>(&mut self, f: F) -> Result<()>
                where
                    F: FnOnce(&mut Selector<'_>) -> Result<()>,
                {
                    self.select(concat!(":", $token), f)
                }
            )*
        }
    };
}

macro_rules! pseudo_element_shortcuts {
    ($($method:ident => $token:literal,)*) => {
        /// Pseudo-element shortcuts. Each selects `::token` on the current node.
        impl Selector<'_> {
            $(
                #[doc = concat!("Selects `::", $token, "`.")]
                pub fn $method<F>(&mut self, f: F) -> Result<()>
                where
                    F: FnOnce(&mut Selector<'_>) -> Result<()>,
                {
                    self.select(concat!("::", $token), f)
                }
            )*
        }
    };
}

pseudo_class_shortcuts! {
    active => "active",
    any_link => "any-link",
    autofill => "autofill",
    blank => "blank",
    checked => "checked",
    current => "current",
    default => "default",
    defined => "defined",
    disabled => "disabled",
    empty => "empty",
    enabled => "enabled",
    first => "first",
    first_child => "first-child",
    first_of_type => "first-of-type",
    focus => "focus",
    focus_visible => "focus-visible",
    focus_within => "focus-within",
    fullscreen => "fullscreen",
    future => "future",
    host => "host",
    hover => "hover",
    in_range => "in-range",
    indeterminate => "indeterminate",
    invalid => "invalid",
    last_child => "last-child",
    last_of_type => "last-of-type",
    link => "link",
    local_link => "local-link",
    modal => "modal",
    only_child => "only-child",
    only_of_type => "only-of-type",
    optional => "optional",
    out_of_range => "out-of-range",
    past => "past",
    paused => "paused",
    picture_in_picture => "picture-in-picture",
    placeholder_shown => "placeholder-shown",
    playing => "playing",
    popover_open => "popover-open",
    read_only => "read-only",
    read_write => "read-write",
    required => "required",
    root => "root",
    target => "target",
    target_within => "target-within",
    user_invalid => "user-invalid",
    user_valid => "user-valid",
    valid => "valid",
    visited => "visited",
}

pseudo_element_shortcuts! {
    after => "after",
    backdrop => "backdrop",
    before => "before",
    cue => "cue",
    cue_region => "cue-region",
    details_content => "details-content",
    file_selector_button => "file-selector-button",
    first_letter => "first-letter",
    first_line => "first-line",
    grammar_error => "grammar-error",
    marker => "marker",
    placeholder => "placeholder",
    selection => "selection",
    spelling_error => "spelling-error",
    target_text => "target-text",
}

/// Parametrized shortcuts.
impl Selector<'_> {
    /// Selects `:nth-child(formula)`, e.g. `nth_child("2n+1", ..)`.
    pub fn nth_child<F>(&mut self, formula: impl fmt::Display, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":nth-child({})", formula), f)
    }

    /// Selects `:nth-last-child(formula)`.
    pub fn nth_last_child<F>(&mut self, formula: impl fmt::Display, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":nth-last-child({})", formula), f)
    }

    /// Selects `:nth-of-type(formula)`.
    pub fn nth_of_type<F>(&mut self, formula: impl fmt::Display, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":nth-of-type({})", formula), f)
    }

    /// Selects `:nth-last-of-type(formula)`.
    pub fn nth_last_of_type<F>(&mut self, formula: impl fmt::Display, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":nth-last-of-type({})", formula), f)
    }

    /// Selects `:lang(code)`.
    pub fn lang<F>(&mut self, code: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":lang({})", code), f)
    }

    /// Selects `:dir(direction)`.
    pub fn dir<F>(&mut self, direction: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":dir({})", direction), f)
    }

    /// Selects `:host(selector)`.
    pub fn host_is<F>(&mut self, selector: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":host({})", selector), f)
    }

    /// Selects `:host-context(selector)`.
    pub fn host_context<F>(&mut self, selector: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":host-context({})", selector), f)
    }

    /// Selects `::slotted(selector)`.
    pub fn slotted<F>(&mut self, selector: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!("::slotted({})", selector), f)
    }

    /// Selects `::part(name)`.
    pub fn part_named<F>(&mut self, name: &str, f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!("::part({})", name), f)
    }

    /// Selects `:not(a, b, ...)`.
    pub fn not<F>(&mut self, selectors: &[&str], f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":not({})", selectors.join(", ")), f)
    }

    /// Selects `:is(a, b, ...)`.
    pub fn is<F>(&mut self, selectors: &[&str], f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":is({})", selectors.join(", ")), f)
    }

    /// Selects `:where(a, b, ...)`.
    pub fn where_<F>(&mut self, selectors: &[&str], f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":where({})", selectors.join(", ")), f)
    }

    /// Selects `:has(a, b, ...)`.
    pub fn has<F>(&mut self, selectors: &[&str], f: F) -> Result<()>
    where
        F: FnOnce(&mut Selector<'_>) -> Result<()>,
    {
        self.select(format!(":has({})", selectors.join(", ")), f)
    }
}
