use std::path::Path;

use crate::deck::{seeded_rng, Deck, ShuffleMode};
use crate::error::DeckError;
use crate::logger::SessionLog;
use crate::store::{load_deck, save_deck};

pub const DEFAULT_DECK_PATH: &str = "assets/my_cards.txt";
pub const DEFAULT_HAND_SIZE: i64 = 5;

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub shuffle: ShuffleMode,
    pub seed: Option<u64>,
    pub verbose: bool,
}

/// One CLI invocation: settings plus the events it produced.
pub struct Session {
    pub settings: Settings,
    pub log: SessionLog,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self { settings, log: SessionLog::new() }
    }

    pub fn create_new_deck_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DeckError> {
        let deck = Deck::new();
        self.log.log("new", &format!("{} cards", deck.len()));
        self.save(&deck, path.as_ref())
    }

    /// `out` may be the same path as `input`. Nothing is written if loading fails.
    pub fn shuffle_deck_file<P, Q>(&mut self, input: P, out: Q) -> Result<(), DeckError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let mut deck = self.load(input.as_ref())?;
        let mut rng = seeded_rng(self.settings.seed);
        deck.shuffle_with(&mut rng, self.settings.shuffle);
        self.log.log("shuffle", &format!("{:?} mode, {} cards", self.settings.shuffle, deck.len()));
        self.save(&deck, out.as_ref())
    }

    /// Returns `(hand, remainder)` as card labels. Does not write the file.
    pub fn deal_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        hand_size: i64,
    ) -> Result<(Vec<String>, Vec<String>), DeckError> {
        let deck = self.load(path.as_ref())?;
        let (hand, rest) = deck.deal(hand_size)?;
        self.log.log("deal", &format!("hand {}, remainder {}", hand.len(), rest.len()));
        Ok((hand.into_labels(), rest.into_labels()))
    }

    fn load(&mut self, path: &Path) -> Result<Deck, DeckError> {
        let deck = load_deck(path)?;
        self.log.log("load", &format!("{} ({} cards)", path.display(), deck.len()));
        Ok(deck)
    }

    fn save(&mut self, deck: &Deck, path: &Path) -> Result<(), DeckError> {
        save_deck(deck, path)?;
        self.log.log("save", &format!("{} ({} cards)", path.display(), deck.len()));
        Ok(())
    }
}
