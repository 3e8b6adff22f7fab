//! Specification loader and validator.
//!
//! Parses a JSON specification document into a fully linked `EventGraph`.
//! Loading is all-or-nothing: any unreadable source, malformed document,
//! unknown suffix reference, bad weight, duplicate name, or missing `root`
//! entry fails the whole load and no graph is returned.
//!
//! Construction takes two passes because suffix names may be forward
//! references or cycles: the first pass creates one node per declared entry,
//! the second resolves every suffix name against the completed name index
//! and attaches the weighted links.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::events::{EventGraph, EventType, NodeId, TOTAL_WEIGHT};

/// Top-level shape of a specification document.
#[derive(Debug, Deserialize)]
struct SpecFile {
    event_types: Vec<EventTypeSpec>,
}

/// One declared event type.
///
/// Suffix weights deserialize into a `BTreeMap` so successor lists are
/// built in sorted-name order: JSON parsers do not guarantee object key
/// order, and two loads of the same document must produce structurally
/// identical graphs.
#[derive(Debug, Deserialize)]
struct EventTypeSpec {
    name: String,
    description: String,
    #[serde(default)]
    suffixes: BTreeMap<String, i64>,
}

/// Errors that can occur while loading a specification.
#[derive(Debug)]
pub enum LoadError {
    /// The specification source could not be opened or read.
    Unreadable(std::io::Error),
    /// The source does not parse into the expected document structure.
    Malformed(serde_json::Error),
    /// Two declared entries share the same name.
    DuplicateName(String),
    /// A suffix name does not match any declared entry.
    UnknownSuffix {
        owner: String,
        suffix: String,
    },
    /// A suffix weight is negative.
    NegativeWeight {
        owner: String,
        suffix: String,
        weight: i64,
    },
    /// A non-empty suffix set's weights do not sum to exactly 100.
    InvalidWeights {
        owner: String,
        total: i64,
    },
    /// No entry named `root` exists in the document.
    MissingRoot,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Unreadable(e) => write!(f, "can't read specification: {}", e),
            LoadError::Malformed(e) => write!(f, "malformed specification: {}", e),
            LoadError::DuplicateName(name) => {
                write!(f, "event type \"{}\" is declared more than once", name)
            }
            LoadError::UnknownSuffix { owner, suffix } => {
                write!(f, "\"{}\" references unknown suffix \"{}\"", owner, suffix)
            }
            LoadError::NegativeWeight { owner, suffix, weight } => {
                write!(
                    f,
                    "\"{}\" gives suffix \"{}\" a negative weight ({})",
                    owner, suffix, weight,
                )
            }
            LoadError::InvalidWeights { owner, total } => {
                write!(
                    f,
                    "chances for \"{}\"'s suffixes sum to {}%, expected {}%",
                    owner, total, TOTAL_WEIGHT,
                )
            }
            LoadError::MissingRoot => write!(f, "specification has no \"root\" event type"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Unreadable(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Malformed(e)
    }
}

/// Load and validate a specification file.
pub fn load_graph(path: &Path) -> Result<EventGraph, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_graph(&text)
}

/// Parse and validate a specification document from a string.
pub fn parse_graph(source: &str) -> Result<EventGraph, LoadError> {
    let spec: SpecFile = serde_json::from_str(source)?;

    // First pass: one node per declared entry, suffix lists still empty.
    let mut nodes: Vec<EventType> = Vec::with_capacity(spec.event_types.len());
    let mut by_name: HashMap<String, NodeId> = HashMap::with_capacity(spec.event_types.len());
    for entry in &spec.event_types {
        let id = NodeId(nodes.len());
        if by_name.insert(entry.name.clone(), id).is_some() {
            return Err(LoadError::DuplicateName(entry.name.clone()));
        }
        nodes.push(EventType::new(entry.name.clone(), entry.description.clone()));
    }

    // Second pass: resolve suffix names and attach weighted links, then
    // validate the weight sum per node.
    for entry in &spec.event_types {
        let owner = by_name[&entry.name];
        let mut total: i64 = 0;
        for (suffix_name, &weight) in &entry.suffixes {
            let target = *by_name.get(suffix_name).ok_or_else(|| LoadError::UnknownSuffix {
                owner: entry.name.clone(),
                suffix: suffix_name.clone(),
            })?;
            if weight < 0 {
                return Err(LoadError::NegativeWeight {
                    owner: entry.name.clone(),
                    suffix: suffix_name.clone(),
                    weight,
                });
            }
            nodes[owner.0].push_suffix(target, weight as u32);
            total += weight;
        }
        // An empty suffix set marks a terminal node and is valid.
        if !entry.suffixes.is_empty() && total != i64::from(TOTAL_WEIGHT) {
            return Err(LoadError::InvalidWeights {
                owner: entry.name.clone(),
                total,
            });
        }
    }

    let root = by_name.get("root").copied().ok_or(LoadError::MissingRoot)?;
    Ok(EventGraph::new(nodes, by_name, root))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SPEC: &str = r#"{
        "event_types": [
            { "name": "root", "description": "It begins.",
              "suffixes": { "middle": 60, "end": 40 } },
            { "name": "middle", "description": "It continues.",
              "suffixes": { "root": 100 } },
            { "name": "end", "description": "It ends.", "suffixes": {} }
        ]
    }"#;

    #[test]
    fn test_valid_spec_links_fully() {
        let graph = parse_graph(VALID_SPEC).expect("spec should load");

        assert_eq!(graph.len(), 3);
        let root = graph.get(graph.root());
        assert_eq!(root.name, "root");
        assert_eq!(root.description, "It begins.");
        assert_eq!(root.suffixes().len(), 2);
        assert_eq!(root.total_weight(), 100);

        // "middle" cycles back to root; "end" is terminal.
        let middle = graph.get(graph.lookup("middle").unwrap());
        assert_eq!(middle.suffixes(), &[(graph.root(), 100)]);
        assert!(graph.get(graph.lookup("end").unwrap()).is_terminal());
    }

    #[test]
    fn test_suffixes_key_may_be_omitted() {
        let graph = parse_graph(
            r#"{ "event_types": [ { "name": "root", "description": "Alone." } ] }"#,
        )
        .expect("spec should load");

        assert!(graph.get(graph.root()).is_terminal());
    }

    #[test]
    fn test_unknown_suffix_rejected() {
        let source = r#"{
            "event_types": [
                { "name": "root", "description": "",
                  "suffixes": { "ghost": 100 } }
            ]
        }"#;

        match parse_graph(source) {
            Err(LoadError::UnknownSuffix { owner, suffix }) => {
                assert_eq!(owner, "root");
                assert_eq!(suffix, "ghost");
            }
            other => panic!("expected UnknownSuffix, got {:?}", other.map(|g| g.len())),
        }
    }

    #[test]
    fn test_bad_weight_sum_rejected() {
        let source = r#"{
            "event_types": [
                { "name": "root", "description": "",
                  "suffixes": { "a": 60, "b": 30 } },
                { "name": "a", "description": "", "suffixes": {} },
                { "name": "b", "description": "", "suffixes": {} }
            ]
        }"#;

        match parse_graph(source) {
            Err(LoadError::InvalidWeights { owner, total }) => {
                assert_eq!(owner, "root");
                assert_eq!(total, 90);
            }
            other => panic!("expected InvalidWeights, got {:?}", other.map(|g| g.len())),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        // 60 + 60 - 20 sums to 100, but negative weights are meaningless.
        let source = r#"{
            "event_types": [
                { "name": "root", "description": "",
                  "suffixes": { "a": 60, "b": 60, "c": -20 } },
                { "name": "a", "description": "", "suffixes": {} },
                { "name": "b", "description": "", "suffixes": {} },
                { "name": "c", "description": "", "suffixes": {} }
            ]
        }"#;

        match parse_graph(source) {
            Err(LoadError::NegativeWeight { owner, suffix, weight }) => {
                assert_eq!(owner, "root");
                assert_eq!(suffix, "c");
                assert_eq!(weight, -20);
            }
            other => panic!("expected NegativeWeight, got {:?}", other.map(|g| g.len())),
        }
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let source = r#"{
            "event_types": [
                { "name": "root", "description": "first", "suffixes": {} },
                { "name": "root", "description": "second", "suffixes": {} }
            ]
        }"#;

        assert!(matches!(
            parse_graph(source),
            Err(LoadError::DuplicateName(name)) if name == "root"
        ));
    }

    #[test]
    fn test_missing_root_rejected() {
        let source = r#"{
            "event_types": [
                { "name": "start", "description": "", "suffixes": {} }
            ]
        }"#;

        assert!(matches!(parse_graph(source), Err(LoadError::MissingRoot)));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(matches!(
            parse_graph(r#"{ "event_types": [ { "description": "no name" } ] }"#),
            Err(LoadError::Malformed(_)),
        ));
        assert!(matches!(parse_graph("not json"), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_unreadable_source_rejected() {
        let missing = std::env::temp_dir().join("chain_sim_no_such_spec.json");
        assert!(matches!(load_graph(&missing), Err(LoadError::Unreadable(_))));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = std::env::temp_dir().join("chain_sim_test_spec.json");
        fs::write(&tmp, VALID_SPEC).expect("write failed");

        let graph = load_graph(&tmp).expect("load failed");
        assert_eq!(graph.len(), 3);

        let _ = fs::remove_file(&tmp);
    }

    #[test]
    fn test_two_loads_are_independent_and_identical() {
        let a = parse_graph(VALID_SPEC).expect("first load failed");
        let b = parse_graph(VALID_SPEC).expect("second load failed");

        assert_eq!(a.len(), b.len());
        for (node_a, node_b) in a.iter().zip(b.iter()) {
            assert_eq!(node_a.name, node_b.name);
            assert_eq!(node_a.description, node_b.description);
            assert_eq!(node_a.suffixes(), node_b.suffixes());
        }
    }
}
