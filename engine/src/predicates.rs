//! Structural predicates over the characteristic function
//!
//! Both checks walk unordered coalition pairs and stop at the first
//! violation. The empty coalition is valued 0 where an intersection is empty.

use crate::game::CooperativeGame;

/// Supermodularity: v(C ∪ D) + v(C ∩ D) ≥ v(C) + v(D) for all C, D.
pub fn is_convex<G: CooperativeGame + ?Sized>(game: &G) -> bool {
    let coalitions = game.coalitions().as_slice();
    coalitions.iter().enumerate().all(|(i, &c)| {
        coalitions[i..].iter().all(|&d| {
            game.value(c.union(d)) + game.value(c.intersection(d)) >= game.value(c) + game.value(d)
        })
    })
}

/// v(C ∪ D) = v(C) + v(D) for all disjoint C, D.
pub fn is_additive<G: CooperativeGame + ?Sized>(game: &G) -> bool {
    let coalitions = game.coalitions().as_slice();
    coalitions.iter().enumerate().all(|(i, &c)| {
        coalitions[i..]
            .iter()
            .filter(|&&d| c.is_disjoint(d))
            .all(|&d| game.value(c.union(d)) == game.value(c) + game.value(d))
    })
}
