// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use jsontree::parse_value;
use jsontree::Arena;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pair {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

/// Builds a `{"pairs": [...]}` document the way the coordinate generator
/// writes it, six decimals per coordinate. Returns the text and the values
/// it encodes.
fn generate(seed: u64, count: usize, clustered: bool) -> (String, Vec<Pair>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let (cx, cy, r) = if clustered {
        (
            rng.random_range(-150.0..150.0),
            rng.random_range(-60.0..60.0),
            30.0,
        )
    } else {
        (0.0, 0.0, 180.0)
    };

    let mut text = String::from(r#"{"pairs": [ "#);
    let mut pairs = Vec::with_capacity(count);
    for i in 0..count {
        let coords = [
            format!("{:.6}", cx + rng.random_range(-r..r)),
            format!("{:.6}", cy + rng.random_range(-r..r)),
            format!("{:.6}", cx + rng.random_range(-r..r)),
            format!("{:.6}", cy + rng.random_range(-r..r)),
        ];
        text.push_str(&format!(
            r#"{{"x0": {}, "y0": {}, "x1": {}, "y1": {}}}"#,
            coords[0], coords[1], coords[2], coords[3]
        ));
        if i + 1 < count {
            text.push_str(",\n");
        }
        pairs.push(Pair {
            x0: coords[0].parse().unwrap(),
            y0: coords[1].parse().unwrap(),
            x1: coords[2].parse().unwrap(),
            y1: coords[3].parse().unwrap(),
        });
    }
    text.push_str("]\n}");
    (text, pairs)
}

fn read_pairs(text: &str) -> Vec<Pair> {
    let doc = parse_value(text.as_bytes()).unwrap();
    let pairs = doc.root().get_by_key("pairs").unwrap();

    let mut result = Vec::with_capacity(pairs.len());
    for pair in pairs.children() {
        let field = |name: &str| pair.get_by_key(name).unwrap().as_f64().unwrap();
        result.push(Pair {
            x0: field("x0"),
            y0: field("y0"),
            x1: field("x1"),
            y1: field("y1"),
        });
    }
    result
}

#[test]
fn test_uniform_pairs() {
    let (text, expected) = generate(1234, 1000, false);
    let actual = read_pairs(&text);
    assert_eq!(actual.len(), 1000);
    assert_eq!(actual, expected);
}

#[test]
fn test_clustered_pairs() {
    let (text, expected) = generate(42, 257, true);
    assert_eq!(read_pairs(&text), expected);
}

#[test]
fn test_empty_pairs() {
    let doc = parse_value(br#"{"pairs": []}"#).unwrap();
    let pairs = doc.root().get_by_key("pairs").unwrap();
    assert_eq!(pairs.len(), 0);
    assert_eq!(pairs.children().count(), 0);
}

#[test]
fn test_pairs_by_key_path() {
    let (text, expected) = generate(7, 20, false);
    let doc = parse_value(text.as_bytes()).unwrap();

    let last = doc.root().select(b"{pairs,-1,y1}").unwrap().unwrap();
    assert_eq!(last.as_f64(), Some(expected[19].y1));

    let node = doc.root().select(b"{pairs,3,x0}").unwrap().unwrap();
    assert_eq!(node.as_f64(), Some(expected[3].x0));
    assert!(doc.root().select(b"{pairs,20,x0}").unwrap().is_none());
}

#[test]
fn test_pairs_into_shared_arena() {
    let (first, expected_first) = generate(1, 10, false);
    let (second, expected_second) = generate(2, 10, true);

    // one root, one array, five nodes per pair
    let mut arena = Arena::with_capacity(2 * (2 + 10 * 5));
    let r1 = arena.parse(first.as_bytes()).unwrap();
    let r2 = arena.parse(second.as_bytes()).unwrap();
    assert_eq!(arena.len(), 2 * (2 + 10 * 5));

    for (root, expected) in [(r1, &expected_first), (r2, &expected_second)] {
        let pairs = arena.node_ref(root).get_by_key("pairs").unwrap();
        assert_eq!(pairs.len(), expected.len());
        let x0 = pairs
            .children()
            .map(|p| p.get_by_key("x0").unwrap().as_f64().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(x0, expected.iter().map(|p| p.x0).collect::<Vec<_>>());
    }
}
