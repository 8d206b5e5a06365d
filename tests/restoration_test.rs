// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the keyword store and text restoration.
//! Exercises the public API end to end: a keyword file is loaded into a
//! trie, edited, saved again, and used to restore damaged text.

use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use olelo_lib::config::restore::RestoreConfig;
use olelo_lib::data_structures::kilo_ranker::{self, RankingError};
use olelo_lib::data_structures::{LanaiTrie, LanaiTrieConfig, SharedLanaiTrie, WordEntry};
use olelo_lib::error::keywords::KeywordStoreError;
use olelo_lib::keywords;
use olelo_lib::restore::{RestoreMode, TextRestorer};
use tempfile::tempdir;

const KEYWORDS: &str = "the,120\ncat,30\ncot,45\ncar\n\nnews,12\nnow,8\n";

fn load_dictionary() -> LanaiTrie {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keywords.txt");
    fs::write(&path, KEYWORDS).unwrap();

    let mut trie = LanaiTrie::new();
    assert_eq!(keywords::load_keywords(&path, &mut trie).unwrap(), 6);
    trie
}

#[test]
fn test_load_edit_save_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keywords.txt");
    fs::write(&path, KEYWORDS).unwrap();

    let mut trie = LanaiTrie::new();
    keywords::load_keywords(&path, &mut trie).unwrap();

    assert!(!trie.insert("Cat", 5));
    assert_eq!(trie.frequency("cat"), Some(35));
    assert!(trie.delete("news"));
    assert_eq!(trie.set_frequency("car", 50), Some(1));
    assert_eq!(keywords::save_keywords(&path, &trie).unwrap(), 5);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "the,120\ncar,50\ncot,45\ncat,35\nnow,8\n"
    );

    let mut reloaded = LanaiTrie::new();
    keywords::load_keywords(&path, &mut reloaded).unwrap();
    assert_eq!(reloaded.export_entries(), trie.export_entries());
}

#[test]
fn test_failed_load_keeps_dictionary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(&path, "dog,4\nbird,many\n").unwrap();

    let mut trie = load_dictionary();
    let before = trie.export_entries();

    match keywords::load_keywords(&path, &mut trie) {
        Err(KeywordStoreError::Malformed { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a malformed entry error, got {other:?}"),
    }
    assert_eq!(trie.export_entries(), before);

    assert!(matches!(
        keywords::load_keywords(dir.path().join("absent.txt"), &mut trie),
        Err(KeywordStoreError::FileNotFound(_))
    ));
    assert_eq!(trie.size(), before.len());
}

#[test]
fn test_pattern_matching_and_ranking() {
    let trie = load_dictionary();

    let matches = trie.find_all_matches_with_frequency("C*T");
    assert_eq!(
        matches,
        vec![WordEntry::new("cot", 45), WordEntry::new("cat", 30)]
    );
    assert_eq!(kilo_ranker::best_match(&matches), Some("cot"));
    assert_eq!(trie.find_best_match("n**"), Some("now".to_string()));
    assert_eq!(trie.find_best_match("n***"), Some("news".to_string()));
    assert_eq!(trie.find_best_match("x*"), None);

    let scored = kilo_ranker::confidence_scored(&matches).unwrap();
    let total: f64 = scored.iter().map(|entry| entry.confidence).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(
        kilo_ranker::confidence_scored(&[]),
        Err(RankingError::EmptyMatches)
    );
}

#[test]
fn test_restore_damaged_file() {
    let trie = load_dictionary();
    let dir = tempdir().unwrap();
    let input = dir.path().join("damaged.txt");
    fs::write(&input, "T*e C*t is  on the N*ws\nn*w what\n").unwrap();

    let restorer = TextRestorer::new();
    assert_eq!(
        restorer.restore_file(&input, &trie, RestoreMode::Best).unwrap(),
        "<The> <Cot> is on the <News>\n<now> what\n"
    );
    assert_eq!(
        restorer.restore_file(&input, &trie, RestoreMode::All).unwrap(),
        "[The] [Cot, Cat] is on the [News]\n[now] what\n"
    );
}

#[test]
fn test_restore_with_configured_markers_and_wildcard() {
    let mut trie = LanaiTrie::with_config(LanaiTrieConfig::new().wildcard('?'));
    trie.load_entries(vec![WordEntry::new("hale", 3), WordEntry::new("hula", 9)]);

    let config = RestoreConfig {
        best_match_open: "{".to_string(),
        best_match_close: "}".to_string(),
        ..RestoreConfig::default()
    };
    let restorer = TextRestorer::from_config(&config);

    assert_eq!(
        restorer.restore_line("H??a h*le", &trie, RestoreMode::Best),
        "{Hula} h*le"
    );
}

#[test]
fn test_tree_dump_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trie.txt");
    let mut trie = LanaiTrie::new();
    trie.insert("at", 2);
    trie.insert("a", 1);

    keywords::save_tree_dump(&path, &trie).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Trie Structure:\n    └── a* (1)\n        └── at* (2)\n\nTotal words: 2\n"
    );
}

#[test]
fn test_shared_dictionary_across_threads() {
    let shared = SharedLanaiTrie::from_trie(load_dictionary());
    let barrier = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..4)
        .map(|id| {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for round in 0..50 {
                    shared.insert(format!("w{id}x{round}"), 1);
                    assert_eq!(shared.find_best_match("c*t"), Some("cot".to_string()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.size(), 6 + 4 * 50);
}
