//! End-to-end pipeline over the three JSON sources: card list, adjacency
//! graph, and synergy weights.

use synergy_graph::{
    build_named_matrix, loader, normalize, similar_names, NameMap, SimilarityConfig, VertexId,
};

const CARDS_JSON: &str = r#"{
    "items": [
        {"name": "Goblin Barrel", "id": 26000010},
        {"name": "Knight", "id": 26000000},
        {"name": "Princess", "id": 26000026},
        {"name": "Ice Spirit", "id": 26000030}
    ]
}"#;

const ADJACENCY_JSON: &str = r#"{
    "goblin_barrel": ["knight", "princess", "ice_spirit"],
    "knight": ["goblin_barrel", "princess"],
    "princess": ["goblin_barrel", "knight"],
    "ice_spirit": ["goblin_barrel"],
    "golem": ["lightning"]
}"#;

const WEIGHTS_JSON: &str = r#"{
    "wgt": {
        "goblin_barrel:princess": 2.5,
        "goblin_barrel:knight": 1.0,
        "knight:goblin_barrel": 0.5,
        "princess:goblin_barrel": 1.5
    }
}"#;

#[test]
fn test_similar_ego_expansion_from_sources() {
    let graph = loader::parse_adjacency(ADJACENCY_JSON).unwrap();
    let cards = loader::parse_card_list(CARDS_JSON).unwrap();
    let names = NameMap::build(cards);

    let egos = vec![normalize("Goblin Barrel")];
    let similar = similar_names(&graph, &names, &egos, &SimilarityConfig::default());

    // main neighborhood = {knight, princess, ice_spirit}. goblin_barrel's
    // own neighborhood is exactly that set (ratio 1.0, egos are not
    // excluded by default); knight and princess each have one of their two
    // neighbors in it (0.5, at the threshold); ice_spirit's only neighbor
    // is goblin_barrel itself, which is not in the set (0.0); golem is
    // disjoint.
    assert_eq!(
        similar,
        vec![
            "Goblin Barrel".to_string(),
            "Knight".to_string(),
            "Princess".to_string()
        ]
    );

    let excluding = SimilarityConfig {
        exclude_ego: true,
        ..Default::default()
    };
    let similar = similar_names(&graph, &names, &egos, &excluding);
    assert_eq!(similar, vec!["Knight".to_string(), "Princess".to_string()]);
}

#[test]
fn test_dense_matrix_from_sources() {
    let weights = loader::parse_weights(WEIGHTS_JSON).unwrap();
    let cards = loader::parse_card_list(CARDS_JSON).unwrap();
    let names = NameMap::build(cards);

    let matrix = build_named_matrix(&weights, &names);

    // axis = sorted distinct first key components
    assert_eq!(
        matrix.labels,
        vec!["Goblin Barrel", "Knight", "Princess"]
    );
    assert_eq!(matrix.cells.len(), 9);
    assert_eq!(matrix.max_weight, 2.5);

    let cell = |row: &str, col: &str| {
        matrix
            .cells
            .iter()
            .find(|c| c.row == row && c.col == col)
            .map(|c| c.weight)
            .unwrap()
    };
    assert_eq!(cell("Goblin Barrel", "Princess"), 2.5);
    assert_eq!(cell("Princess", "Goblin Barrel"), 1.5);
    // stored only one direction; the reverse is an explicit zero
    assert_eq!(cell("Knight", "Princess"), 0.0);
    assert_eq!(cell("Goblin Barrel", "Goblin Barrel"), 0.0);
}

#[test]
fn test_name_list_validation_against_graph() {
    let graph = loader::parse_adjacency(ADJACENCY_JSON).unwrap();
    let cards = loader::parse_card_list(CARDS_JSON).unwrap();

    // upstream filter-by-membership pattern: keep only names whose
    // normalized id is a graph vertex
    let known: Vec<String> = cards
        .into_iter()
        .filter(|card| graph.contains(&normalize(card)))
        .collect();
    assert_eq!(
        known,
        vec!["Goblin Barrel", "Knight", "Princess", "Ice Spirit"]
    );
    assert!(!graph.contains(&VertexId::new("lava_hound")));
}
