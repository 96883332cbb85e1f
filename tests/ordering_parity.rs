use clsort::{ClOrder, pair_indices, sort_cls, triangle_size};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ordering_cases.json")
}

fn load_fixtures() -> OrderingFixtures {
    let source = fs::read_to_string(fixture_path()).expect("fixture file should be readable");
    serde_json::from_str(&source).expect("fixture file should parse")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderingFixtures {
    sort_cases: Vec<SortCase>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SortCase {
    id: String,
    pairs: Vec<String>,
    #[serde(default)]
    cls: Option<Vec<String>>,
    order: FixtureOrder,
    expected: Vec<Option<String>>,
}

impl SortCase {
    fn cls(&self) -> Vec<String> {
        self.cls.clone().unwrap_or_else(|| self.pairs.clone())
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum FixtureOrder {
    Diagonal,
    Row,
}

impl FixtureOrder {
    fn as_cl_order(self) -> ClOrder {
        match self {
            Self::Diagonal => ClOrder::Diagonal,
            Self::Row => ClOrder::Row,
        }
    }
}

#[test]
fn sort_fixtures_match_reference_outputs() {
    for case in load_fixtures().sort_cases {
        let sorted = sort_cls(&case.cls(), &case.pairs, case.order.as_cl_order())
            .unwrap_or_else(|error| panic!("{}: {error}", case.id));
        assert_eq!(sorted, case.expected, "{}", case.id);
    }
}

#[test]
fn output_length_is_the_triangle_number_of_the_label_count() {
    for case in load_fixtures().sort_cases {
        let labels: HashSet<char> = case.pairs.iter().flat_map(|pair| pair.chars()).collect();
        let sorted = sort_cls(&case.cls(), &case.pairs, case.order.as_cl_order()).unwrap();
        assert_eq!(sorted.len(), triangle_size(labels.len()), "{}", case.id);
    }
}

#[test]
fn missing_slots_account_for_every_unsupplied_pair() {
    for case in load_fixtures().sort_cases {
        let supplied: HashSet<_> = pair_indices(&case.pairs).unwrap().into_iter().collect();
        let sorted = sort_cls(&case.cls(), &case.pairs, case.order.as_cl_order()).unwrap();
        let filled = sorted.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(filled, supplied.len(), "{}", case.id);
    }
}

#[test]
fn swapping_labels_within_every_pair_is_a_no_op() {
    for case in load_fixtures().sort_cases {
        let swapped: Vec<String> = case
            .pairs
            .iter()
            .map(|pair| pair.chars().rev().collect())
            .collect();
        let order = case.order.as_cl_order();
        assert_eq!(
            sort_cls(&case.cls(), &case.pairs, order).unwrap(),
            sort_cls(&case.cls(), &swapped, order).unwrap(),
            "{}",
            case.id
        );
    }
}

#[test]
fn complete_inputs_round_trip_through_their_own_positions() {
    let pairs = ["TT", "TE", "TB", "EE", "EB", "BB"];
    for order in [ClOrder::Diagonal, ClOrder::Row] {
        let sorted = sort_cls(&pairs, &pairs, order).unwrap();
        let slot_indices = pair_indices(&sorted.iter().map(|slot| slot.unwrap()).collect::<Vec<_>>());
        // A complete pair set leaves no holes, and every slot holds the pair
        // the layout assigns to it.
        assert_eq!(
            slot_indices.unwrap(),
            clsort::cl_positions(3, order),
            "{order}"
        );
    }
}
