use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::card::{Card, Rank, Suit};
use crate::error::DeckError;

/// How `Deck::shuffle_with` picks swap targets.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ShuffleMode {
    /// Every position swaps with an index drawn from `[0, len - 2]`.
    /// The last index is never a draw target, so the result is biased;
    /// this matches decks shuffled by earlier versions of the tool.
    #[default]
    Compat,
    /// Fisher-Yates, uniform over all permutations.
    Uniform,
}

/// Time-seeded unless a seed is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });
    StdRng::seed_from_u64(seed)
}

/// Ordered cards, top of the deck first.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fresh deck: for each suit, for each rank.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(Suit::ALL.len() * Rank::ALL.len());
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R, mode: ShuffleMode) {
        let len = self.cards.len();
        if len < 2 {
            return;
        }
        match mode {
            ShuffleMode::Compat => {
                for i in 0..len {
                    let j = rng.gen_range(0..len - 1);
                    self.cards.swap(i, j);
                }
            }
            ShuffleMode::Uniform => {
                for i in (1..len).rev() {
                    let j = rng.gen_range(0..=i);
                    self.cards.swap(i, j);
                }
            }
        }
    }

    /// Splits off the top `hand_size` cards. Returns `(hand, remainder)`.
    pub fn deal(mut self, hand_size: i64) -> Result<(Deck, Deck), DeckError> {
        if hand_size <= 0 {
            return Err(DeckError::InvalidHandSize(hand_size));
        }
        let n = usize::try_from(hand_size).unwrap_or(usize::MAX);
        if n > self.cards.len() {
            return Err(DeckError::HandSizeExceedsDeck { hand: hand_size, deck: self.cards.len() });
        }
        let rest = self.cards.split_off(n);
        Ok((self, Deck { cards: rest }))
    }

    pub fn into_labels(self) -> Vec<String> {
        self.cards.into_iter().map(Card::into_label).collect()
    }
}
