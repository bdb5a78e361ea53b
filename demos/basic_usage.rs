use anyhow::Result;
use itercomb::{combinations, IntoCombinations, ZeroSizePolicy};

fn main() -> Result<()> {
    // Borrowed source: the engine only holds a reference.
    let toppings = vec!["basil", "garlic", "olive", "pepper"];
    let engine = combinations(&toppings, 2);
    println!("{} pairs of {} toppings:", engine.try_count()?, toppings.len());
    for pair in &engine {
        println!("  {}", pair.join(" + "));
    }

    // Owned literal source with the explicit protocol.
    let mut traversal = [1, 2, 2].combinations(2).into_iter();
    while let Some(positions) = traversal.positions().map(<[usize]>::to_vec) {
        let values = traversal.try_current()?;
        println!("positions {positions:?} -> {values:?}");
        traversal.advance();
    }

    // Resume from a saved position vector.
    let resumed: Vec<_> = engine.traverse_from(&[1, 2])?.collect();
    println!("from [1, 2]: {resumed:?}");

    let empty = combinations(&toppings, 0).with_zero_size_policy(ZeroSizePolicy::SingleEmpty);
    println!("size 0 with single-empty policy: {} selection", empty.try_count()?);

    Ok(())
}
