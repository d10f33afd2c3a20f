//! Coalitions and the canonical coalition universe
//!
//! A coalition is stored as a bitset over the players `1..=n`: bit `p - 1` is
//! set iff player `p` is a member. The representation is canonical by
//! construction, so equality and hashing are plain structural comparisons and
//! iteration always yields players in ascending order.
//!
//! The coalition universe lists every non-empty coalition ordered by size, and
//! lexicographically by player tuple within a size class. Every other
//! component indexes into it positionally: the first `n` entries are the
//! singletons and the last entry is the grand coalition.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use crate::combinatorics::binomial;
use crate::error::{GameError, Result};

/// Player identifier, 1-based.
pub type Player = usize;

/// Largest supported player count. A game stores 2^n - 1 coalition values.
pub const MAX_PLAYERS: usize = 24;

/// A set of players.
///
/// Ordering follows the canonical universe order: smaller coalitions first,
/// then lexicographic order of the ascending player tuples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coalition(u32);

impl Coalition {
    /// The empty coalition. Never part of a universe, valued 0 by convention.
    pub const EMPTY: Coalition = Coalition(0);

    /// Coalition of a single player.
    pub fn singleton(player: Player) -> Self {
        assert!(
            (1..=MAX_PLAYERS).contains(&player),
            "player must be in 1..={MAX_PLAYERS}"
        );
        Coalition(1 << (player - 1))
    }

    /// Coalition of all players `1..=players`.
    pub fn grand(players: usize) -> Self {
        assert!(players <= MAX_PLAYERS, "at most {MAX_PLAYERS} players");
        Coalition(((1u64 << players) - 1) as u32)
    }

    /// Build a coalition from player ids in any order. Duplicates collapse.
    pub fn from_players<I: IntoIterator<Item = Player>>(players: I) -> Result<Self> {
        let mut bits = 0u32;
        for player in players {
            if player == 0 || player > MAX_PLAYERS {
                return Err(GameError::InvalidPlayer { player });
            }
            bits |= 1 << (player - 1);
        }
        Ok(Coalition(bits))
    }

    /// Offset of this coalition in a table indexed by bitset.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Number of members.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, player: Player) -> bool {
        (1..=MAX_PLAYERS).contains(&player) && self.0 & (1 << (player - 1)) != 0
    }

    /// This coalition with `player` added.
    pub fn with(self, player: Player) -> Self {
        self.union(Coalition::singleton(player))
    }

    /// This coalition with `player` removed.
    pub fn without(self, player: Player) -> Self {
        Coalition(self.0 & !Coalition::singleton(player).0)
    }

    pub fn union(self, other: Coalition) -> Self {
        Coalition(self.0 | other.0)
    }

    pub fn intersection(self, other: Coalition) -> Self {
        Coalition(self.0 & other.0)
    }

    pub fn is_disjoint(self, other: Coalition) -> bool {
        self.0 & other.0 == 0
    }

    pub fn is_subset_of(self, other: Coalition) -> bool {
        self.0 & !other.0 == 0
    }

    /// Highest member id, if any.
    pub fn max_player(self) -> Option<Player> {
        if self.is_empty() {
            None
        } else {
            Some((u32::BITS - self.0.leading_zeros()) as Player)
        }
    }

    /// Members in ascending order.
    pub fn players(self) -> Players {
        Players(self.0)
    }

    /// Every subset of this coalition, itself and the empty coalition included.
    pub fn subsets(self) -> Subsets {
        Subsets { mask: self.0, next: Some(self.0) }
    }
}

impl Ord for Coalition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| {
            let diff = self.0 ^ other.0;
            if diff == 0 {
                Ordering::Equal
            } else if self.0 & diff & diff.wrapping_neg() != 0 {
                // The lowest differing player belongs to self
                Ordering::Less
            } else {
                Ordering::Greater
            }
        })
    }
}

impl PartialOrd for Coalition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coalition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, player) in self.players().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{player}")?;
        }
        write!(f, ")")
    }
}

impl FromIterator<Player> for Coalition {
    /// Panics on ids outside `1..=MAX_PLAYERS`; use [`Coalition::from_players`]
    /// for unchecked input.
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Coalition::EMPTY, |acc, player| acc.with(player))
    }
}

/// Ascending iterator over the members of a coalition.
#[derive(Debug, Clone)]
pub struct Players(u32);

impl Iterator for Players {
    type Item = Player;

    fn next(&mut self) -> Option<Player> {
        if self.0 == 0 {
            return None;
        }
        let player = self.0.trailing_zeros() as Player + 1;
        self.0 &= self.0 - 1;
        Some(player)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Players {}

/// Submask enumeration, from the full set down to the empty set.
#[derive(Debug, Clone)]
pub struct Subsets {
    mask: u32,
    next: Option<u32>,
}

impl Iterator for Subsets {
    type Item = Coalition;

    fn next(&mut self) -> Option<Coalition> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            Some((current - 1) & self.mask)
        };
        Some(Coalition(current))
    }
}

/// Lexicographic k-subsets of `1..=n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Coalition;

    fn next(&mut self) -> Option<Coalition> {
        if self.done {
            return None;
        }
        let current = Coalition(self.indices.iter().fold(0u32, |bits, &i| bits | 1 << i));

        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}

/// The ordered list of all non-empty coalitions of `n` players.
#[derive(Debug, Clone, PartialEq)]
pub struct CoalitionUniverse {
    players: usize,
    coalitions: Vec<Coalition>,
}

impl CoalitionUniverse {
    /// Enumerate the 2^n - 1 coalitions of `players` players in canonical order.
    pub fn new(players: usize) -> Result<Self> {
        if players == 0 {
            return Err(GameError::NoPlayers);
        }
        if players > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers { players, max: MAX_PLAYERS });
        }
        let mut coalitions = Vec::with_capacity((1usize << players) - 1);
        for size in 1..=players {
            coalitions.extend(Combinations::new(players, size));
        }
        Ok(CoalitionUniverse { players, coalitions })
    }

    pub fn player_count(&self) -> usize {
        self.players
    }

    /// Number of coalitions, 2^n - 1.
    pub fn len(&self) -> usize {
        self.coalitions.len()
    }

    /// Always false: a universe has at least the grand coalition.
    pub fn is_empty(&self) -> bool {
        self.coalitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coalition> {
        self.coalitions.iter()
    }

    pub fn as_slice(&self) -> &[Coalition] {
        &self.coalitions
    }

    pub fn get(&self, position: usize) -> Option<Coalition> {
        self.coalitions.get(position).copied()
    }

    /// The `n` one-player coalitions, in player order.
    pub fn singletons(&self) -> &[Coalition] {
        &self.coalitions[..self.players]
    }

    /// The coalition of all players, always the last entry.
    pub fn grand(&self) -> Coalition {
        Coalition::grand(self.players)
    }

    /// Coalitions strictly between the singletons and the grand coalition.
    pub fn intermediate(&self) -> &[Coalition] {
        let len = self.coalitions.len();
        if len > self.players + 1 {
            &self.coalitions[self.players..len - 1]
        } else {
            &[]
        }
    }

    /// Positions of the coalitions with `size` members.
    pub fn size_class_range(&self, size: usize) -> Range<usize> {
        if size == 0 || size > self.players {
            return 0..0;
        }
        let start: u64 = (1..size).map(|k| binomial(self.players, k)).sum();
        let start = start as usize;
        start..start + binomial(self.players, size) as usize
    }

    /// The coalitions with `size` members.
    pub fn size_class(&self, size: usize) -> &[Coalition] {
        &self.coalitions[self.size_class_range(size)]
    }
}

impl<'a> IntoIterator for &'a CoalitionUniverse {
    type Item = &'a Coalition;
    type IntoIter = std::slice::Iter<'a, Coalition>;

    fn into_iter(self) -> Self::IntoIter {
        self.coalitions.iter()
    }
}
