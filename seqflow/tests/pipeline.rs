use std::cell::Cell;

use insta::assert_debug_snapshot;
use ordered_float::OrderedFloat;

use seqflow::{error, Enumeration, FnComparer, KeyComparer};

#[derive(Debug, Clone)]
struct Reading {
    sensor: &'static str,
    value: f64,
}

fn reading(sensor: &'static str, value: f64) -> Reading {
    Reading { sensor, value }
}

fn readings() -> Enumeration<'static, Reading> {
    Enumeration::from_vec(vec![
        reading("north", 12.5),
        reading("south", 9.0),
        reading("north", 14.0),
        reading("east", 9.0),
        reading("south", 11.5),
    ])
}

#[test]
fn test_pipeline_over_borrowed_slice() {
    let words = ["delta", "alpha", "charlie", "alpha", "bravo", "echo"];
    let result = Enumeration::from_slice(&words)
        .filter(|w| w.len() == 5)
        .distinct()
        .order_by(|w| **w)
        .into_enumeration()
        .map(|w| w.to_uppercase())
        .to_vec();
    assert_debug_snapshot!(result, @r#"
    [
        "ALPHA",
        "BRAVO",
        "DELTA",
    ]
    "#);
}

#[test]
fn test_records_without_eq() {
    let sensors = readings().distinct_by(Some(KeyComparer::new(|r: &Reading| r.sensor)));
    assert_eq!(
        sensors.map(|r| r.sensor).to_vec(),
        vec!["north", "south", "east"]
    );

    let same_value = FnComparer::new(
        |a: &Reading, b: &Reading| a.value == b.value,
        |r: &Reading| r.value.to_bits(),
    );
    let first_of_each_value = readings().distinct_by(Some(&same_value)).count();
    assert_eq!(first_of_each_value, 4);

    let quiet = Enumeration::from_vec(vec![reading("west", 9.0)]);
    let loud = readings().except_by(&quiet, Some(&same_value));
    assert_eq!(
        loud.map(|r| r.value).to_vec(),
        vec![12.5, 14.0, 11.5]
    );
}

#[test]
fn test_ordering_with_float_keys() {
    let hottest = readings()
        .order_by_descending(|r| OrderedFloat(r.value))
        .then_by(|r| r.sensor);
    assert_eq!(hottest.first().map(|r| r.sensor), Ok("north"));
    let coolest = hottest.into_enumeration().last().map(|r| r.sensor);
    // ties on 9.0 are broken by name
    assert_eq!(coolest, Ok("south"));
}

#[test]
fn test_average_per_sensor() {
    let north = readings().filter(|r| r.sensor == "north");
    assert_eq!(north.average_float64(Some(|r: &Reading| r.value)), Some(13.25));
    let west = readings().filter(|r| r.sensor == "west");
    assert_eq!(west.average_float64(Some(|r: &Reading| r.value)), None);
}

#[test]
fn test_take_then_union_is_lazy() {
    let produced = Cell::new(0);
    let naturals = Enumeration::from_fn(|| 0..).map(|i: i64| {
        produced.set(produced.get() + 1);
        i
    });
    let mixed = naturals.take(3).union(&Enumeration::range(2, 3));
    assert_eq!(produced.get(), 0);
    assert_eq!(mixed.to_vec(), vec![0, 1, 2, 3, 4]);
    assert_eq!(produced.get(), 3);
}

#[test]
fn test_single_after_filter() {
    let south_max = readings()
        .filter(|r| r.sensor == "south")
        .single_with(|r| r.value > 10.0)
        .map(|r| r.value);
    assert_eq!(south_max, Ok(11.5));
    assert_eq!(
        readings().filter(|r| r.sensor == "south").single().map(|r| r.value),
        Err(error::Error::MultipleElementsFound)
    );
}

#[test]
fn test_error_reporting() {
    let error = Enumeration::<i32>::empty().single().unwrap_err();
    assert_eq!(error.code(), "EmptySource");
    assert_eq!(error.to_string(), "source contains no elements");
}
