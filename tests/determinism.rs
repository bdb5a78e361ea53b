use std::sync::Arc;
use std::thread;

use blake3::Hasher;
use itercomb::{combinations, Source};

fn fingerprint<S>(engine: &itercomb::Combinator<S>) -> blake3::Hash
where
    S: Source<Item = u32>,
{
    let mut hasher = Hasher::new();
    for selection in engine {
        for value in selection {
            hasher.update(&value.to_le_bytes());
        }
        hasher.update(b"|");
    }
    hasher.finalize()
}

#[test]
fn repeated_traversals_are_identical() {
    let source: Vec<u32> = (0..14).map(|x| x * 7 % 5).collect();
    let engine = combinations(&source, 5);

    let first = fingerprint(&engine);
    for _ in 0..4 {
        assert_eq!(fingerprint(&engine), first, "traversal output diverged");
    }
}

#[test]
fn owned_and_borrowed_sources_fingerprint_alike() {
    let source: Vec<u32> = (0..12).collect();
    let borrowed = combinations(&source, 4);
    let owned = combinations(source.clone(), 4);
    assert_eq!(fingerprint(&borrowed), fingerprint(&owned));
}

#[test]
fn shared_source_traversed_from_many_threads() {
    let source: Arc<[u32]> = (0..16).collect::<Vec<_>>().into();
    let expected = fingerprint(&combinations(Arc::clone(&source), 6));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let source = Arc::clone(&source);
            thread::spawn(move || fingerprint(&combinations(source, 6)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), expected);
    }
}
