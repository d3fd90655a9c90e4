//! Integration tests for the cleaning run
//!
//! Each test builds gzip fixtures in a temporary working directory and runs
//! the library pipeline against them.

mod common;

use common::{column, Workspace};
use recprep::config::PipelineConfig;
use recprep::pipeline::{self, clean};
use recprep::RecprepError;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::path::PathBuf;

fn config_for(ws: &Workspace) -> PipelineConfig {
    PipelineConfig::default().resolve_paths(ws.path())
}

fn product(asin: &str, title: &str) -> Value {
    json!({"asin": asin, "title": title, "description": format!("About {title}.")})
}

fn review(asin: &str, reviewer: &str, overall: Value) -> Value {
    json!({"reviewerID": reviewer, "asin": asin, "overall": overall, "reviewText": "ok"})
}

#[test]
fn test_end_to_end_drops_orphan_reviews() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz(
        "meta_Electronics.json.gz",
        &[
            product("A1", "USB-C Hub"),
            product("A2", "HDMI Cable"),
            product("A3", "Wireless Mouse"),
        ],
    )
    .unwrap();
    ws.write_jsonl_gz(
        "Electronics_5.json.gz",
        &[
            review("A1", "u1", json!(5.0)),
            review("A1", "u2", json!(4.0)),
            review("A4", "u3", json!(3.0)),
            review("A2", "u4", json!(2.0)),
            review("A5", "u5", json!(1.0)),
        ],
    )
    .unwrap();

    let report = pipeline::run(&config_for(&ws)).unwrap();
    assert_eq!(report.products, 3);
    assert_eq!(report.review_lines_read, 5);
    assert_eq!(report.reviews_valid_rating, 5);
    assert_eq!(report.reviews_kept, 3);
    assert_eq!(report.orphans_dropped, 2);
    assert_eq!(report.distinct_reviewers, 3);

    let (headers, rows) = ws.read_csv("cleaned_reviews.csv").unwrap();
    assert_eq!(column(&headers, &rows, "asin"), vec!["A1", "A1", "A2"]);
    assert_eq!(column(&headers, &rows, "reviewerID"), vec!["u1", "u2", "u4"]);

    let (headers, rows) = ws.read_csv("cleaned_products.csv").unwrap();
    assert_eq!(
        headers,
        vec!["asin", "title", "description", "title_clean", "description_clean"]
    );
    assert_eq!(column(&headers, &rows, "asin"), vec!["A1", "A2", "A3"]);
    assert_eq!(
        column(&headers, &rows, "title_clean"),
        vec!["usbc hub", "hdmi cable", "wireless mouse"]
    );
}

#[test]
fn test_every_kept_review_references_an_output_product() {
    let ws = Workspace::new().unwrap();
    let products: Vec<Value> = (0..20)
        .step_by(2)
        .map(|i| product(&format!("P{i}"), "Item"))
        .collect();
    let reviews: Vec<Value> = (0..60)
        .map(|i| review(&format!("P{}", i % 20), &format!("u{i}"), json!(1 + i % 5)))
        .collect();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &products).unwrap();
    ws.write_jsonl_gz("Electronics_5.json.gz", &reviews).unwrap();

    pipeline::run(&config_for(&ws)).unwrap();

    let (p_headers, p_rows) = ws.read_csv("cleaned_products.csv").unwrap();
    let product_ids: HashSet<&str> = column(&p_headers, &p_rows, "asin").into_iter().collect();
    let (r_headers, r_rows) = ws.read_csv("cleaned_reviews.csv").unwrap();
    let review_ids = column(&r_headers, &r_rows, "asin");

    assert_eq!(review_ids.len(), 30);
    assert!(review_ids.iter().all(|asin| product_ids.contains(asin)));
}

#[test]
fn test_metadata_prefix_cutoff() {
    let ws = Workspace::new().unwrap();
    let products: Vec<Value> = (0..7000)
        .map(|i| json!({"asin": format!("B{i:05}")}))
        .collect();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &products).unwrap();
    ws.write_jsonl_gz("Electronics_5.json.gz", &[]).unwrap();

    let tables = clean(&config_for(&ws)).unwrap();
    assert_eq!(tables.catalog.len(), 5000);
    assert!(tables.catalog.contains("B04999"));
    assert!(!tables.catalog.contains("B05000"));

    let first = &tables.catalog.table().records()[0];
    assert_eq!(first["asin"], "B00000");
}

#[test]
fn test_review_prefix_cutoff() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &[product("A1", "Hub")])
        .unwrap();
    let reviews: Vec<Value> = (0..12000)
        .map(|i| review("A1", &format!("u{i}"), json!(5)))
        .collect();
    ws.write_jsonl_gz("Electronics_5.json.gz", &reviews).unwrap();

    let tables = clean(&config_for(&ws)).unwrap();
    assert_eq!(tables.review_lines_read, 10000);
    assert_eq!(tables.reviews.len(), 10000);
    let last = tables.reviews.records().last().unwrap();
    assert_eq!(last["reviewerID"], "u9999");
}

#[test]
fn test_cutoff_applies_before_rating_filter() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &[product("A1", "Hub")])
        .unwrap();
    ws.write_jsonl_gz(
        "Electronics_5.json.gz",
        &[
            review("A1", "u1", json!(0)),
            review("A1", "u2", json!(0)),
            review("A1", "u3", json!(5)),
        ],
    )
    .unwrap();

    let config = PipelineConfig {
        max_reviews: 2,
        ..config_for(&ws)
    };
    let tables = clean(&config).unwrap();
    assert_eq!(tables.review_lines_read, 2);
    assert!(tables.reviews.is_empty());
}

#[test]
fn test_rating_boundaries() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &[product("A1", "Hub")])
        .unwrap();
    ws.write_jsonl_gz(
        "Electronics_5.json.gz",
        &[
            review("A1", "one", json!(1)),
            review("A1", "five", json!(5)),
            review("A1", "zero", json!(0)),
            review("A1", "over", json!(5.1)),
            review("A1", "negative", json!(-1)),
            review("A1", "text", json!("5")),
            json!({"reviewerID": "missing", "asin": "A1"}),
        ],
    )
    .unwrap();

    let tables = clean(&config_for(&ws)).unwrap();
    let kept: Vec<&str> = tables.reviews.string_column("reviewerID").collect();
    assert_eq!(kept, vec!["one", "five"]);
    assert_eq!(tables.reviews_valid_rating, 2);
}

#[test]
fn test_derived_fields_follow_source_keys() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz(
        "meta_Electronics.json.gz",
        &[
            json!({"asin": "A1", "title": "Dock"}),
            json!({"asin": "A2", "title": "Stand", "description": ["Sturdy", "Aluminium"]}),
            json!({"asin": "A3", "description": "Fits 13\" laptops"}),
        ],
    )
    .unwrap();
    ws.write_jsonl_gz("Electronics_5.json.gz", &[]).unwrap();

    let tables = clean(&config_for(&ws)).unwrap();
    let records = tables.catalog.table().records();
    assert!(!records[0].contains_key("description_clean"));
    assert_eq!(records[1]["description_clean"], "");
    assert_eq!(records[2]["description_clean"], "fits 13 laptops");
    assert!(!records[2].contains_key("title_clean"));

    pipeline::run(&config_for(&ws)).unwrap();
    let (headers, rows) = ws.read_csv("cleaned_products.csv").unwrap();
    assert_eq!(
        column(&headers, &rows, "description_clean"),
        vec!["", "", "fits 13 laptops"]
    );
}

#[test]
fn test_malformed_line_aborts_before_writing() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &[product("A1", "Hub")])
        .unwrap();
    ws.write_raw_lines_gz(
        "Electronics_5.json.gz",
        &[
            review("A1", "u1", json!(5)).to_string(),
            "{\"asin\": \"A1\", \"overall\": ".to_string(),
        ],
    )
    .unwrap();

    let err = pipeline::run(&config_for(&ws)).unwrap_err();
    assert!(matches!(err, RecprepError::MalformedRecord { line: 2, .. }));
    assert!(!ws.path().join("cleaned_products.csv").exists());
    assert!(!ws.path().join("cleaned_reviews.csv").exists());
}

#[test]
fn test_missing_input_is_reported() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &[product("A1", "Hub")])
        .unwrap();

    let err = pipeline::run(&config_for(&ws)).unwrap_err();
    match err {
        RecprepError::InputNotFound { path } => {
            assert!(path.ends_with("Electronics_5.json.gz"));
        }
        other => panic!("expected InputNotFound, got {other:?}"),
    }
    assert!(!ws.path().join("cleaned_products.csv").exists());
}

#[test]
fn test_review_write_failure_leaves_products_file() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &[product("A1", "Hub")])
        .unwrap();
    ws.write_jsonl_gz("Electronics_5.json.gz", &[review("A1", "u1", json!(4))])
        .unwrap();

    let config = PipelineConfig {
        reviews_output: ws.path().join("no_such_dir").join("reviews.csv"),
        ..config_for(&ws)
    };
    let err = pipeline::run(&config).unwrap_err();
    assert_eq!(err.exit_code(), 5);
    assert!(ws.path().join("cleaned_products.csv").exists());
}

#[test]
fn test_json_export() {
    let ws = Workspace::new().unwrap();
    ws.write_jsonl_gz("meta_Electronics.json.gz", &[product("A1", "Hub")])
        .unwrap();
    ws.write_jsonl_gz(
        "Electronics_5.json.gz",
        &[review("A1", "u1", json!(4)), review("A9", "u2", json!(4))],
    )
    .unwrap();

    let config = PipelineConfig {
        json_export_dir: Some(PathBuf::from("data")),
        ..PipelineConfig::default()
    }
    .resolve_paths(ws.path());
    let report = pipeline::run(&config).unwrap();
    assert_eq!(report.json_exports.len(), 2);

    let products: Value = serde_json::from_str(&ws.read("data/products.json").unwrap()).unwrap();
    assert_eq!(products[0]["title_clean"], "hub");
    let reviews: Value = serde_json::from_str(&ws.read("data/reviews.json").unwrap()).unwrap();
    assert_eq!(reviews.as_array().map(Vec::len), Some(1));
}
