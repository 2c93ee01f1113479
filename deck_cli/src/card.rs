use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Suit { Spades, Diamonds, Hearts, Clubs }

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades", Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts", Suit::Clubs => "Clubs",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rank { Ace, Two, Three, Four }

impl Rank {
    pub const ALL: [Rank; 4] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four];

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace", Rank::Two => "Two", Rank::Three => "Three", Rank::Four => "Four",
        }
    }
}

/// A card is identified only by its label, e.g. `Ace of Spades`.
/// Labels read back from a deck file are kept verbatim, known or not.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Card {
    label: String,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { label: format!("{} of {}", rank.name(), suit.name()) }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn into_label(self) -> String {
        self.label
    }
}

impl From<String> for Card {
    fn from(label: String) -> Self {
        Self { label }
    }
}

impl From<&str> for Card {
    fn from(label: &str) -> Self {
        Self { label: label.to_string() }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
