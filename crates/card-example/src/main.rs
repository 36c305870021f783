//! Builds the stylesheet for a small card component and prints the CSS.
//!
//! Demonstrates the main DSL surface: nested selection, the shortcut
//! catalog, scoped custom properties, declaration maps, and the host-keyed
//! registry.

use anyhow::Result;
use scopesheet::{CssClass, Selector, SheetRegistry};

struct Card;

impl CssClass for Card {
    const NAME: &'static str = "card";
}

fn card_styles(host: &mut Selector<'_>) -> scopesheet::Result<()> {
    host.define("card-gap", "12px")?;
    host.define("card-accent", "#4063d8")?;
    host.assign([("display", "block")])?;

    host.select_class::<Card, _>(|card| {
        let gap = card.var("card-gap")?;
        card.assign([
            ("display", "flex".to_string()),
            ("flexDirection", "column".to_string()),
            ("gap", gap),
        ])?;

        card.hover(|hovered| {
            hovered.assign([("boxShadow", "0 2px 8px rgba(0, 0, 0, .2)")])
        })?;

        card.not(&[":last-child"], |stacked| {
            let gap = stacked.var("card-gap")?;
            stacked.assign([("marginBottom", gap)])
        })?;

        card.descend(|inner| {
            inner.select_class_name("title", |title| {
                let accent = title.var("card-accent")?;
                title.assign([
                    ("fontWeight", "600".to_string()),
                    ("color", accent),
                ])
            })
        })
    })
}

fn main() -> Result<()> {
    let mut registry: SheetRegistry<&str> = SheetRegistry::new();
    let sheet = registry.attach("card-host", ":host", card_styles)?;
    print!("{}", sheet);
    Ok(())
}
