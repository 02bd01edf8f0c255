// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

mod common;

use std::collections::BTreeMap;
use std::collections::HashSet;

use common::PASSAGE;
use common::init_logger;
use common::render;
use googletest::prelude::*;
use keyfreq::error::ErrorKind;
use keyfreq::htable::Probing;
use keyfreq::htable::ProbingHashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[googletest::test]
fn test_linear_probing_scenario() {
    init_logger();
    let mut table = ProbingHashTable::new(7, Probing::Linear);
    for key in ["a", "b", "a", "c"] {
        table.insert(key).unwrap();
    }
    expect_that!(table.search("a"), eq(2));
    expect_that!(table.search("b"), eq(1));
    expect_that!(table.search("c"), eq(1));
    expect_that!(table.search("z"), eq(0));
    expect_that!(table.num_keys(), eq(3));
}

#[test]
fn test_insert_returns_new_frequency() {
    let mut table = ProbingHashTable::new(7, Probing::Linear);
    assert_eq!(table.insert("a").unwrap(), 1);
    assert_eq!(table.insert("a").unwrap(), 2);
    assert_eq!(table.insert("b").unwrap(), 1);
    assert_eq!(table.insert("a").unwrap(), 3);
}

#[googletest::test]
fn test_double_hashing_separates_colliding_keys() {
    init_logger();
    let mut table = ProbingHashTable::new(7, Probing::Double);
    // "e" folds to 101 and "l" to 108: both start at slot 3 and step by 4
    assert_that!(table.home_slot("e"), eq(table.home_slot("l")));
    assert_that!(table.probe_step("l"), gt(1));

    table.insert("e").unwrap();
    table.insert("l").unwrap();
    expect_that!(table.slot_of("e"), some(eq(3)));
    expect_that!(table.slot_of("l"), some(eq(0)));
    expect_that!(table.search("e"), eq(1));
    expect_that!(table.search("l"), eq(1));
    expect_that!(table.probe_distance(0), some(eq(1)));

    let mut linear = ProbingHashTable::new(7, Probing::Linear);
    linear.insert("e").unwrap();
    linear.insert("l").unwrap();
    expect_that!(linear.slot_of("l"), some(eq(4)));
}

#[test]
fn test_full_table_rejects_new_keys() {
    init_logger();
    let mut table = ProbingHashTable::new(3, Probing::Linear);
    for key in ["a", "b", "c"] {
        assert_eq!(table.insert(key).unwrap(), 1);
    }
    assert!(table.is_full());

    let err = table.insert("d").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TableFull);
    assert_eq!(err.context_value("key"), Some("d"));
    // a rejected key is never counted, however often it is retried
    assert!(table.insert("d").is_err());
    assert_eq!(table.search("d"), 0);
    assert_eq!(table.num_keys(), 3);

    // existing keys still count on a full table
    assert_eq!(table.insert("c").unwrap(), 2);
    assert_eq!(table.search("c"), 2);
}

#[test]
fn test_double_hashing_short_cycle_reports_full() {
    // with 4 slots, a key homed at 1 steps by 2 and only ever visits slots 1 and 3
    let mut table = ProbingHashTable::new(4, Probing::Double);
    table.insert("a").unwrap();
    table.insert("c").unwrap();
    assert_eq!(table.slot_of("a"), Some(1));
    assert_eq!(table.slot_of("c"), Some(3));

    let err = table.insert("e").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TableFull);
    assert!(!table.is_full());
    assert_eq!(table.search("e"), 0);
    assert_eq!(table.num_keys(), 2);
}

#[test]
fn test_search_on_empty_table() {
    for probing in [Probing::Linear, Probing::Double] {
        let table = ProbingHashTable::new(5, probing);
        for key in ["", "a", "anything"] {
            assert_eq!(table.search(key), 0);
        }
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}

#[test]
fn test_search_terminates_on_full_table() {
    let mut table = ProbingHashTable::new(2, Probing::Double);
    table.insert("a").unwrap();
    table.insert("b").unwrap();
    assert!(table.is_full());
    assert_eq!(table.search("zz"), 0);
}

#[test]
fn test_counts_match_model() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for (capacity, probing) in [
        (11, Probing::Linear),
        (11, Probing::Double),
        (97, Probing::Linear),
        (97, Probing::Double),
        (64, Probing::Double),
    ] {
        let mut table = ProbingHashTable::new(capacity, probing);
        let mut model: BTreeMap<String, u64> = BTreeMap::new();
        for _ in 0..500 {
            let key = format!("w{}", rng.random_range(0..40));
            match table.insert(&key) {
                Ok(frequency) => {
                    let count = model.entry(key).or_default();
                    *count += 1;
                    assert_eq!(frequency, *count);
                }
                Err(err) => {
                    assert_eq!(err.kind(), ErrorKind::TableFull);
                    assert!(!model.contains_key(&key));
                }
            }
        }
        for i in 0..40 {
            let key = format!("w{i}");
            assert_eq!(
                table.search(&key),
                model.get(&key).copied().unwrap_or(0),
                "{key} with {probing} probing and capacity {capacity}"
            );
        }
        assert_eq!(table.num_keys(), model.len());

        let stored: Vec<&str> = table.iter().map(|(key, _)| key).collect();
        let distinct: HashSet<&str> = stored.iter().copied().collect();
        assert_eq!(stored.len(), distinct.len(), "a key occupies two slots");
        assert_eq!(stored.len(), table.num_keys());
    }
}

#[test]
fn test_num_keys_counts_distinct_insertions() {
    let mut table = ProbingHashTable::new(113, Probing::Double);
    let mut distinct = HashSet::new();
    for word in PASSAGE.split_whitespace() {
        table.insert(word).unwrap();
        distinct.insert(word);
        assert_eq!(table.num_keys(), distinct.len());
    }
    assert_eq!(table.search("it"), 6);
    assert_eq!(table.search("of"), 6);
    assert_eq!(table.search("wisdom"), 1);
}

#[test]
fn test_write_entries() {
    let mut table = ProbingHashTable::new(7, Probing::Linear);
    for key in ["a", "b", "a", "c"] {
        table.insert(key).unwrap();
    }
    let output = render(|out| table.write_entries(out));
    insta::assert_snapshot!(output, @r"
1 of b
1 of c
2 of a
");
}

#[test]
fn test_write_table() {
    let mut table = ProbingHashTable::new(7, Probing::Linear);
    for key in ["a", "b", "a", "c"] {
        table.insert(key).unwrap();
    }
    let output = render(|out| table.write_table(out));
    insta::assert_snapshot!(output, @r"
  Ind  Freq Stats   Key
-----------------------------------------------------
    0     1     0   b
    1     1     0   c
    2     0    -1   NULL
    3     0    -1   NULL
    4     0    -1   NULL
    5     0    -1   NULL
    6     2     0   a
");
}

fn clustered_table() -> ProbingHashTable {
    // "a", "k" and "u" all start at slot 7; "b" at 8 and "c" at 9
    let mut table = ProbingHashTable::new(10, Probing::Linear);
    for key in ["a", "k", "u", "b", "c"] {
        table.insert(key).unwrap();
    }
    table
}

#[test]
fn test_probe_distances() {
    let table = clustered_table();
    let distances: Vec<Option<usize>> = (0..10).map(|i| table.probe_distance(i)).collect();
    assert_eq!(
        distances,
        [
            Some(2),
            Some(2),
            None,
            None,
            None,
            None,
            None,
            Some(0),
            Some(1),
            Some(2)
        ]
    );
    assert_eq!(table.probe_distance(10), None);
}

#[test]
fn test_checkpoints() {
    let table = clustered_table();
    let half = table.checkpoint(50).unwrap();
    assert_eq!(half.entries, 5);
    assert_eq!(half.percent_at_home, 20.0);
    assert!((half.average_probes - 1.4).abs() < 1e-9);
    assert_eq!(half.max_probes, 2);

    let early = table.checkpoint(20).unwrap();
    assert_eq!(early.entries, 2);
    assert_eq!(early.percent_at_home, 50.0);
    assert_eq!(early.average_probes, 0.5);
    assert_eq!(early.max_probes, 1);

    // never reached, or nothing to describe
    assert_eq!(table.checkpoint(60), None);
    assert_eq!(table.checkpoint(5), None);
}

#[test]
fn test_write_stats() {
    let table = clustered_table();
    let output = render(|out| table.write_stats(out, 10));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "",
            "Using Linear Probing. ",
            "",
            "Percent   Current   Percent    Average      Maximum",
            " Full     Entries   At Home   Collisions   Collisions",
            "-----------------------------------------------------",
            "  10          1      100.0       0.00           0",
            "  20          2       50.0       0.50           1",
            "  30          3       33.3       1.00           2",
            "  40          4       25.0       1.25           2",
            "  50          5       20.0       1.40           2",
            "-----------------------------------------------------",
            "",
        ]
    );
    assert!(output.ends_with("-\n\n"));
}

#[test]
fn test_write_stats_double_hashing_header() {
    let table = ProbingHashTable::new(7, Probing::Double);
    let output = render(|out| table.write_stats(out, 4));
    assert!(output.starts_with("\nUsing Double Hashing.\n\n"));
    // an empty table has no checkpoint rows
    assert_eq!(output.lines().count(), 8);
}
