//! Round-trip: parse, serialize, re-parse
//!
//! Canonical serialization need not reproduce the source bytes, but
//! re-parsing a rendered tree must give back a structurally equal tree, in
//! both the compact and the pretty form. Checked for the fixed samples and
//! for arbitrary generated trees.

use proptest::prelude::*;
use rstest::rstest;

use dds::dds::ast::{
    ArrayDimension, BaseType, CompositeDeclaration, Dataset, Declaration, GridDeclaration,
    StructureKind, VariableDeclaration,
};
use dds::dds::formats::{DdsText, FormatOptions};
use dds::dds::parsing::parse_dataset;
use dds::dds::testing::samples;

#[rstest]
#[case::cmip6_tas(samples::CMIP6_TAS)]
#[case::station(samples::STATION)]
#[case::xbt_station(samples::XBT_STATION)]
fn samples_roundtrip_in_both_forms(#[case] text: &str) {
    let parsed = parse_dataset(text).unwrap();

    let compact = parsed.text();
    assert_eq!(parse_dataset(&compact).unwrap(), parsed);

    let pretty = parsed.text_formatted(&FormatOptions::pretty());
    assert_eq!(parse_dataset(&pretty).unwrap(), parsed);
}

#[rstest]
#[case::cmip6_tas(samples::CMIP6_TAS)]
#[case::station(samples::STATION)]
fn canonicalization_is_idempotent(#[case] text: &str) {
    let first = parse_dataset(text).unwrap();
    let second = parse_dataset(&first.text()).unwrap();
    assert_eq!(parse_dataset(&second.text()).unwrap(), second);
    assert_eq!(second, first);
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn base_type() -> impl Strategy<Value = BaseType> {
    proptest::sample::select(&BaseType::ALL[..])
}

fn dimension() -> impl Strategy<Value = ArrayDimension> {
    prop_oneof![
        (ident(), 0u64..100_000).prop_map(|(name, size)| ArrayDimension::new(name, size)),
        (0u64..100_000).prop_map(ArrayDimension::anonymous),
    ]
}

fn variable() -> impl Strategy<Value = VariableDeclaration> {
    (ident(), base_type(), proptest::collection::vec(dimension(), 0..3))
        .prop_map(|(name, base_type, dims)| VariableDeclaration::new(name, base_type, dims))
}

fn grid() -> impl Strategy<Value = GridDeclaration> {
    (ident(), variable(), proptest::collection::vec(variable(), 1..4))
        .prop_map(|(name, array, maps)| GridDeclaration::new(name, array, maps))
}

fn declaration() -> impl Strategy<Value = Declaration> {
    let leaf = prop_oneof![
        variable().prop_map(Declaration::Variable),
        grid().prop_map(Declaration::Grid),
    ];
    leaf.prop_recursive(3, 12, 3, |inner| {
        (
            ident(),
            prop_oneof![
                Just(StructureKind::Structure),
                Just(StructureKind::Sequence),
            ],
            proptest::collection::vec(inner, 0..3),
        )
            .prop_map(|(name, kind, children)| {
                Declaration::Composite(CompositeDeclaration::new(name, kind, children))
            })
    })
}

fn dataset() -> impl Strategy<Value = Dataset> {
    ("[a-z][a-z0-9_.]{0,12}", proptest::collection::vec(declaration(), 0..4))
        .prop_map(|(name, children)| Dataset::new(name, children))
}

proptest! {
    #[test]
    fn generated_trees_roundtrip_compact(ds in dataset()) {
        let text = ds.text();
        let reparsed = parse_dataset(&text).expect("rendered tree should parse");
        prop_assert_eq!(reparsed, ds);
    }

    #[test]
    fn generated_trees_roundtrip_pretty(ds in dataset()) {
        let text = ds.text_formatted(&FormatOptions::pretty());
        let reparsed = parse_dataset(&text).expect("rendered tree should parse");
        prop_assert_eq!(reparsed, ds);
    }
}
