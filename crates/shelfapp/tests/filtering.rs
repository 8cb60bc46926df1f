use shelfapp::api::ShelfApi;
use shelfapp::attributes::{Attribute, ValueType};
use shelfapp::editor::FilterForm;
use shelfapp::error::ShelfError;
use shelfapp::filter::{evaluate, FilterClause};
use shelfapp::matcher::filter_products;
use shelfapp::model::Product;
use shelfapp::operators::{compat, OperatorId, OPERATORS};
use shelfapp::store::memory::InMemoryStore;
use shelfapp::store::DataSource;

fn products() -> Vec<Product> {
    vec![
        Product::new(1).with(0, "iPhone 14").with(1, 999).with(2, "Electronics"),
        Product::new(2).with(0, "Rust in Action").with(1, 10).with(2, "Books"),
        Product::new(3).with(0, "T-Shirt").with(1, "N/A").with(2, "Clothing"),
        Product::new(4).with(0, "").with(2, "Books"),
        Product::new(5).with(1, 10.0),
    ]
}

fn setup() -> ShelfApi<InMemoryStore> {
    let store = [
        Attribute::new(0, "name", ValueType::Text),
        Attribute::new(1, "price", ValueType::Number),
        Attribute::enumerated(2, "category", ["Books", "Electronics", "Clothing"]),
    ]
    .into_iter()
    .fold(InMemoryStore::new(), InMemoryStore::with_property);
    let store = products()
        .into_iter()
        .fold(store, InMemoryStore::with_product);
    ShelfApi::new(store)
}

fn ids(products: &[&Product]) -> Vec<u32> {
    products.iter().map(|p| p.id).collect()
}

/// A clause for `operator` with a value of the right shape.
fn clause_for(property_id: u32, operator: OperatorId) -> FilterClause {
    match operator {
        OperatorId::Any | OperatorId::None => FilterClause::presence(property_id, operator),
        OperatorId::In => FilterClause::any_of(property_id, ["Books", "10"]),
        _ => FilterClause::new(property_id, operator, "10"),
    }
}

#[test]
fn none_is_the_negation_of_any_for_every_product() {
    for product in products() {
        for property_id in 0..4 {
            assert_eq!(
                evaluate(&FilterClause::presence(property_id, OperatorId::None), &product),
                !evaluate(&FilterClause::presence(property_id, OperatorId::Any), &product),
                "product {} property {}",
                product.id,
                property_id
            );
        }
    }
}

#[test]
fn every_result_is_an_ordered_subsequence() {
    let forward = products();
    let reversed: Vec<Product> = forward.iter().rev().cloned().collect();
    for products in [&forward, &reversed] {
        for spec in OPERATORS {
            for property_id in 0..3 {
                let clause = clause_for(property_id, spec.id);
                let positions: Vec<usize> = filter_products(products, Some(&clause))
                    .into_iter()
                    .map(|m| {
                        products
                            .iter()
                            .position(|p| std::ptr::eq(p, m))
                            .expect("result should borrow from the input")
                    })
                    .collect();
                assert!(
                    positions.windows(2).all(|w| w[0] < w[1]),
                    "{clause:?} gave positions {positions:?}"
                );
            }
        }
    }
}

#[test]
fn filtering_twice_changes_nothing() {
    let products = products();
    for spec in OPERATORS {
        let clause = clause_for(1, spec.id);
        let once: Vec<Product> = filter_products(&products, Some(&clause))
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_products(&once, Some(&clause));
        assert_eq!(ids(&twice), once.iter().map(|p| p.id).collect::<Vec<_>>());
    }
}

#[test]
fn equals_on_numbers_is_numeric() {
    let api = setup();
    let product = &api.store().products()[1];
    assert!(evaluate(&FilterClause::new(1, OperatorId::Equals, "10"), product));
    assert!(evaluate(&FilterClause::new(1, OperatorId::Equals, "10.0"), product));
}

#[test]
fn in_and_contains_scenarios() {
    let mut api = setup();

    api.set_filter(FilterClause::any_of(2, ["Books", "Electronics"]));
    assert_eq!(ids(&api.filtered_products()), vec![1, 2, 4]);

    api.set_filter(FilterClause::new(0, OperatorId::Contains, "PH"));
    assert_eq!(ids(&api.filtered_products()), vec![1]);
}

#[test]
fn greater_than_skips_non_numeric_values() {
    let mut api = setup();
    api.set_filter(FilterClause::new(1, OperatorId::GreaterThan, "5"));
    assert_eq!(ids(&api.filtered_products()), vec![1, 2, 5]);

    api.set_filter(FilterClause::new(1, OperatorId::LessThan, "1000000"));
    assert_eq!(ids(&api.filtered_products()), vec![1, 2, 5]);
}

#[test]
fn empty_name_counts_as_no_value() {
    let mut api = setup();
    api.set_filter(FilterClause::presence(0, OperatorId::None));
    assert_eq!(ids(&api.filtered_products()), vec![4, 5]);
}

#[test]
fn form_workflow_through_the_api() {
    let mut api = setup();

    let offered: Vec<&str> = api
        .operators_for("category")
        .unwrap()
        .iter()
        .map(|op| op.id.as_str())
        .collect();
    let legal: Vec<&str> = compat::legal_operators(ValueType::Enumerated)
        .iter()
        .map(|id| id.as_str())
        .collect();
    assert_eq!(offered, legal);

    api.apply(&FilterForm::new("category", "in").with_value("Books, Clothing"))
        .unwrap();
    let listing = api.listing();
    assert_eq!(listing.count, 3);
    let names: Vec<&str> = listing.products.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Rust in Action", "T-Shirt", ""]);

    let err = api
        .apply(&FilterForm::new("category", "contains").with_value("Bo"))
        .unwrap_err();
    assert!(matches!(err, ShelfError::OperatorNotAllowed { .. }));
    assert_eq!(api.listing().count, 3);

    api.clear_filter();
    assert_eq!(api.listing().count, 5);
    assert_eq!(api.listing().products[4].name, "Product 5");
}
