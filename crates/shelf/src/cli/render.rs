//! Text rendering for the terminal.
//!
//! Every function returns a `String` so output can be checked without a
//! terminal. `use_color` forces styling on or off.

use console::style;
use shelfapp::attributes::{Attribute, AttributeCatalog};
use shelfapp::filter::{ComparisonValue, FilterClause};
use shelfapp::listing::ProductListing;
use shelfapp::operators::Operator;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub const NO_MATCHES: &str = "No products match the current filter.";

/// Human-readable form of a clause: `price greater_than 10`.
pub fn describe_filter(clause: &FilterClause, catalog: &AttributeCatalog<'_>) -> String {
    let property = catalog.name_of(clause.property_id);
    match &clause.value {
        ComparisonValue::None => format!("{} {}", property, clause.operator),
        ComparisonValue::Single(value) => format!("{} {} {}", property, clause.operator, value),
        ComparisonValue::Many(values) => {
            format!("{} {} [{}]", property, clause.operator, values.join(", "))
        }
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", count)
    }
}

pub fn render_listing(listing: &ProductListing, filter: Option<&str>, use_color: bool) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{} ({})",
        style("Products").bold().force_styling(use_color),
        count_label(listing.count)
    );
    if let Some(filter) = filter {
        let _ = write!(
            out,
            "  {}",
            style(format!("filter: {}", filter)).dim().force_styling(use_color)
        );
    }
    out.push('\n');

    if listing.is_empty() {
        out.push('\n');
        out.push_str(NO_MATCHES);
        out.push('\n');
        return out;
    }

    for card in &listing.products {
        out.push('\n');
        let _ = writeln!(
            out,
            "{} {}",
            style(format!("#{}", card.id)).dim().force_styling(use_color),
            style(&card.name).bold().force_styling(use_color)
        );
        let width = card
            .fields
            .iter()
            .map(|f| f.label.width() + 1)
            .max()
            .unwrap_or(0);
        for field in &card.fields {
            let label = pad(&format!("{}:", field.label), width);
            let _ = writeln!(
                out,
                "    {} {}",
                style(label).cyan().force_styling(use_color),
                field.value
            );
        }
    }
    out
}

pub fn render_properties(properties: &[Attribute], use_color: bool) -> String {
    let mut out = String::new();
    if properties.is_empty() {
        out.push_str("No properties defined.\n");
        return out;
    }
    let width = properties.iter().map(|p| p.name.width()).max().unwrap_or(0);
    for property in properties {
        let _ = write!(
            out,
            "{:>3}  {}  {}",
            property.id,
            style(pad(&property.name, width)).bold().force_styling(use_color),
            property.value_type
        );
        if !property.allowed_values().is_empty() {
            let _ = write!(out, " ({})", property.allowed_values().join(", "));
        }
        out.push('\n');
    }
    out
}

pub fn render_operators(operators: &[&Operator], use_color: bool) -> String {
    let mut out = String::new();
    if operators.is_empty() {
        out.push_str("No operators available.\n");
        return out;
    }
    let width = operators.iter().map(|op| op.id.width()).max().unwrap_or(0);
    for op in operators {
        let _ = writeln!(
            out,
            "{}  {}",
            style(pad(&op.id, width)).bold().force_styling(use_color),
            op.text
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfapp::attributes::ValueType;
    use shelfapp::listing::{Field, ProductCard};
    use shelfapp::operators::OperatorId;

    fn listing() -> ProductListing {
        ProductListing {
            count: 2,
            products: vec![
                ProductCard {
                    id: 1,
                    name: "Widget".into(),
                    fields: vec![
                        Field { label: "Product Name".into(), value: "Widget".into() },
                        Field { label: "price".into(), value: "5".into() },
                    ],
                },
                ProductCard {
                    id: 2,
                    name: "Product 2".into(),
                    fields: vec![],
                },
            ],
        }
    }

    #[test]
    fn listing_aligns_labels() {
        let out = render_listing(&listing(), None, false);
        let expected = "Products (2 products)\n\
                        \n\
                        #1 Widget\n    Product Name: Widget\n    price:        5\n\
                        \n\
                        #2 Product 2\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn listing_shows_filter() {
        let out = render_listing(&listing(), Some("price greater_than 1"), false);
        assert!(out.starts_with("Products (2 products)  filter: price greater_than 1\n"));
    }

    #[test]
    fn empty_listing_says_so() {
        let empty = ProductListing {
            count: 0,
            products: vec![],
        };
        let out = render_listing(&empty, Some("price less_than 0"), false);
        assert!(out.contains("(0 products)"));
        assert!(out.ends_with(&format!("{}\n", NO_MATCHES)));
    }

    #[test]
    fn singular_count() {
        assert_eq!(count_label(1), "1 product");
        assert_eq!(count_label(0), "0 products");
    }

    #[test]
    fn describe_filter_shapes() {
        let attrs = vec![
            Attribute::new(1, "price", ValueType::Number),
            Attribute::enumerated(2, "category", ["tools", "toys"]),
        ];
        let catalog = AttributeCatalog::new(&attrs);
        assert_eq!(
            describe_filter(&FilterClause::new(1, OperatorId::GreaterThan, "10"), &catalog),
            "price greater_than 10"
        );
        assert_eq!(
            describe_filter(&FilterClause::any_of(2, ["tools", "toys"]), &catalog),
            "category in [tools, toys]"
        );
        assert_eq!(
            describe_filter(&FilterClause::presence(9, OperatorId::None), &catalog),
            "Property 9 none"
        );
    }

    #[test]
    fn properties_table() {
        let attrs = vec![
            Attribute::new(0, "name", ValueType::Text),
            Attribute::enumerated(2, "category", ["tools", "toys"]),
        ];
        let out = render_properties(&attrs, false);
        assert_eq!(
            out,
            "  0  name      string\n  2  category  enumerated (tools, toys)\n"
        );
    }

    #[test]
    fn operators_table() {
        let ops = [Operator::new("equals", "Is equal to"), Operator::new("in", "Is any of")];
        let refs: Vec<&Operator> = ops.iter().collect();
        assert_eq!(
            render_operators(&refs, false),
            "equals  Is equal to\nin      Is any of\n"
        );
    }
}
