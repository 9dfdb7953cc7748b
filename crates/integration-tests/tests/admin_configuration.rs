//! Integration tests from admin-authored price levels to checkout discounts.
//!
//! The admin app turns the merchant's price-level rows into a metafield on
//! the discount record; the host later hands that metafield's value to the
//! function with every cart.

use volume_discount_core::configuration::{METAFIELD_KEY, METAFIELD_NAMESPACE};
use volume_discount_core::{TierConfiguration, TierDraft};
use volume_discount_function::{ConfigurationPolicy, run_json};
use volume_discount_integration_tests::{discounted_lines, input_document, line_gid};

const PRICE_LEVELS: &str = r#"
- quantity: "1"
  percentage: "0"
  message: ""
- quantity: "3"
  percentage: "5"
  message: Buy 3, save 5%
- quantity: "10"
  percentage: "12.5%"
  message: Bulk pricing
"#;

fn metafield_value(drafts: &[TierDraft]) -> String {
    TierConfiguration::from_drafts(drafts)
        .expect("price levels should be valid")
        .to_metafield()
        .expect("metafield encoding failed")
        .value
}

#[test]
fn test_price_levels_drive_checkout_discounts() {
    let drafts: Vec<TierDraft> = serde_yaml::from_str(PRICE_LEVELS).expect("invalid YAML");
    let value = metafield_value(&drafts);
    assert_eq!(
        value,
        r#"[{"quantity":1,"percentage":0},{"quantity":3,"percentage":5},{"quantity":10,"percentage":12.5}]"#
    );

    let (one, three, ten) = (line_gid(1), line_gid(2), line_gid(3));
    let output = run_json(
        &input_document(Some(&value), &[(one.as_str(), 1), (three.as_str(), 4), (ten.as_str(), 10)]),
        ConfigurationPolicy::Strict,
    )
    .expect("function run failed");

    assert_eq!(
        discounted_lines(&output),
        [
            (one, "0".to_owned()),
            (three, "5".to_owned()),
            (ten, "12.5".to_owned()),
        ]
    );
}

#[test]
fn test_default_row_discounts_every_line_by_zero() {
    let value = metafield_value(&[TierDraft::default()]);
    let line = line_gid(1);
    let output = run_json(
        &input_document(Some(&value), &[(line.as_str(), 1)]),
        ConfigurationPolicy::Strict,
    )
    .expect("function run failed");

    assert_eq!(discounted_lines(&output), [(line, "0".to_owned())]);
}

#[test]
fn test_removing_every_row_disables_the_discount() {
    let value = metafield_value(&[]);
    assert_eq!(value, "[]");

    let output = run_json(
        &input_document(Some(&value), &[("a", 50)]),
        ConfigurationPolicy::Strict,
    )
    .expect("function run failed");
    assert!(discounted_lines(&output).is_empty());
}

#[test]
fn test_metafield_location() {
    let metafield = TierConfiguration::from_drafts(&[TierDraft::new("2", "5", "")])
        .expect("valid draft")
        .to_metafield()
        .expect("encoding failed");

    assert_eq!(metafield.namespace, METAFIELD_NAMESPACE);
    assert_eq!(metafield.key, METAFIELD_KEY);
    assert_eq!(metafield.kind, "json");
}

#[test]
fn test_invalid_row_is_reported_before_saving() {
    let drafts = vec![
        TierDraft::new("5", "10", ""),
        TierDraft::new("10", "abc", ""),
    ];
    let err = TierConfiguration::from_drafts(&drafts).expect_err("invalid row accepted");
    assert!(err.to_string().contains("tier 1"), "got: {err}");
}
