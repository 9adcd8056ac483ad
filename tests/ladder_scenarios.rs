use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordladder::error::LadderError;
use wordladder::ladder::{LadderOutcome, PathFinder, PathFinderConfig, answer};
use wordladder::lexicon::{Category, LexicalGraph, SynsetRecord, build, merge_all};

fn temperature_graph() -> LexicalGraph {
    build(
        vec![
            SynsetRecord::new(["hot", "warm"]),
            SynsetRecord::new(["warm", "mild", "cool"]),
        ],
        Category::Adjective,
    )
}

#[test]
fn test_hot_to_cool_goes_through_warm() -> Result<(), Box<dyn std::error::Error>> {
    let graph = temperature_graph();
    assert_eq!(
        graph.neighbors("hot").into_iter().collect::<Vec<_>>(),
        vec!["warm"]
    );
    assert_eq!(
        graph.neighbors("warm").into_iter().collect::<Vec<_>>(),
        vec!["cool", "hot", "mild"]
    );

    let outcome = answer(&graph, "hot", "cool", &PathFinderConfig::default())?;
    let path = outcome.path().ok_or("expected a path")?;
    assert_eq!(path.words(), ["hot", "warm", "cool"]);
    assert_eq!(path.hops(), 2);
    Ok(())
}

#[test]
fn test_same_word_and_unknown_word() -> Result<(), Box<dyn std::error::Error>> {
    let graph = temperature_graph();
    let config = PathFinderConfig::default();

    assert!(matches!(
        answer(&graph, "hot", "hot", &config),
        Err(LadderError::InvalidQuery(_))
    ));
    assert_eq!(
        answer(&graph, "hot", "glacial", &config)?,
        LadderOutcome::UnknownWord {
            word: "glacial".to_string()
        }
    );
    Ok(())
}

#[test]
fn test_disconnected_components() -> Result<(), Box<dyn std::error::Error>> {
    let graph = build(
        vec![SynsetRecord::new(["a", "b"]), SynsetRecord::new(["c", "d"])],
        Category::Noun,
    );

    let outcome = answer(&graph, "a", "c", &PathFinderConfig::default())?;
    assert_eq!(
        outcome,
        LadderOutcome::NoPath {
            start: "a".to_string(),
            end: "c".to_string()
        }
    );
    Ok(())
}

#[test]
fn test_ladder_crosses_categories() -> Result<(), Box<dyn std::error::Error>> {
    let graph = merge_all(vec![
        build(vec![SynsetRecord::new(["quick", "fast"])], Category::Adjective),
        build(vec![SynsetRecord::new(["fast", "abstain"])], Category::Verb),
    ]);

    let outcome = answer(&graph, "quick", "abstain", &PathFinderConfig::default())?;
    assert_eq!(
        outcome.to_string(),
        "quick -> fast -> abstain (2 hops)"
    );
    Ok(())
}

/// Shortest distance by depth-limited DFS with an increasing limit.
fn shortest_by_dfs(graph: &LexicalGraph, start: &str, end: &str, words: usize) -> Option<usize> {
    fn reaches(graph: &LexicalGraph, word: &str, end: &str, depth: usize, seen: &mut BTreeSet<String>) -> bool {
        if word == end {
            return true;
        }
        if depth == 0 {
            return false;
        }
        for next in graph.neighbors(word) {
            if seen.insert(next.to_string()) {
                let found = reaches(graph, next, end, depth - 1, seen);
                seen.remove(next);
                if found {
                    return true;
                }
            }
        }
        false
    }

    (0..words).find(|&depth| {
        let mut seen = BTreeSet::from([start.to_string()]);
        reaches(graph, start, end, depth, &mut seen)
    })
}

#[test]
fn test_paths_are_minimal_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..30 {
        let vocabulary: Vec<String> = (0..8).map(|i| format!("w{i}")).collect();
        let mut records = Vec::new();
        for _ in 0..rng.random_range(1..6) {
            let terms: Vec<&String> = vocabulary.iter().filter(|_| rng.random_bool(0.3)).collect();
            records.push(SynsetRecord::new(terms.into_iter().cloned()));
        }
        let graph = build(records, Category::Noun);
        let finder = PathFinder::new(&graph);

        let words: Vec<&str> = graph.iter().map(|(word, _)| word).collect();
        for &start in &words {
            for &end in &words {
                let expected = shortest_by_dfs(&graph, start, end, words.len());
                match finder.find_path(start, end) {
                    Ok(path) => {
                        assert_eq!(Some(path.hops()), expected, "{start} -> {end}");
                        assert_eq!(path.start(), start);
                        assert_eq!(path.end(), end);
                        for pair in path.words().windows(2) {
                            assert!(graph.neighbors(&pair[0]).contains(pair[1].as_str()));
                        }
                    }
                    Err(LadderError::NoPathFound { .. }) => assert_eq!(expected, None),
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
        }
    }
}
