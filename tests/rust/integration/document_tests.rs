// Pattern documents compiled from files, as the binary does
use std::io::Write;

use cypher_pattern::config::EnvironmentConfig;
use cypher_pattern::document::{DocumentError, PatternDocument};
use cypher_pattern::PatternError;
use serde_json::json;
use tempfile::NamedTempFile;

fn compile_file(contents: &str) -> anyhow::Result<serde_json::Value> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    let input = std::fs::read_to_string(file.path())?;
    let result = PatternDocument::from_json(&input)?.compile(EnvironmentConfig::default())?;
    Ok(serde_json::to_value(result)?)
}

#[test]
fn test_create_document() -> anyhow::Result<()> {
    let output = compile_file(
        r#"{
            "clause": "CREATE",
            "paths": [{ "elements": [
                { "node": { "labels": ["Movie"], "properties": { "title": "The Matrix", "released": 1999 } } }
            ] }]
        }"#,
    )?;
    assert_eq!(
        output,
        json!({
            "cypher": "CREATE (this0:Movie { title: $param0, released: $param1 })",
            "params": { "param0": "The Matrix", "param1": 1999 }
        })
    );
    Ok(())
}

#[test]
fn test_optional_match_union_document() -> anyhow::Result<()> {
    let output = compile_file(
        r#"{
            "clause": "OPTIONAL MATCH",
            "join": "union",
            "paths": [
                { "elements": [ { "node": { "name": "a" } } ] },
                { "quantifier": { "min": 1 }, "elements": [
                    { "node": { "name": "x" } },
                    { "relationship": { "type": "LINK", "direction": "undirected", "without_variable": true } },
                    { "node": { "name": "y" } }
                ] }
            ]
        }"#,
    )?;
    assert_eq!(output["cypher"], json!("OPTIONAL MATCH (a)((x)-[:LINK]-(y)){1,}"));
    Ok(())
}

#[test]
fn test_relationship_quantifier_document() -> anyhow::Result<()> {
    let output = compile_file(
        r#"{ "paths": [{ "elements": [
            { "node": { "name": "a" } },
            { "relationship": { "type": "NEXT", "quantifier": 3, "without_variable": true } },
            { "node": { "name": "b" } }
        ] }] }"#,
    )?;
    assert_eq!(output["cypher"], json!("(a)-[:NEXT]->{3}(b)"));
    Ok(())
}

#[test]
fn test_conflicting_repetition_document() {
    let err = PatternDocument::from_json(
        r#"{ "paths": [{ "elements": [
            { "node": {} },
            { "relationship": { "length": 2, "quantifier": "+" } },
            { "node": {} }
        ] }] }"#,
    )
    .and_then(|doc| doc.compile(EnvironmentConfig::default()))
    .unwrap_err();
    assert!(matches!(
        err,
        DocumentError::Pattern(PatternError::QuantifierOnVariableLengthRelationship)
    ));
}

#[test]
fn test_bad_quantifier_document() {
    let err = PatternDocument::from_json(
        r#"{ "paths": [{ "quantifier": "?", "elements": [] }] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
}
