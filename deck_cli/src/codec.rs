use crate::card::Card;
use crate::deck::Deck;

pub const DELIMITER: &str = ",";

pub fn encode(deck: &Deck) -> String {
    deck.cards()
        .iter()
        .map(Card::label)
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

// No escaping: `""` decodes to one empty card.
pub fn decode(text: &str) -> Deck {
    Deck::from_cards(text.split(DELIMITER).map(Card::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_new_deck() {
        let s = encode(&Deck::new());
        assert!(s.starts_with("Ace of Spades,Two of Spades,"));
        assert!(s.ends_with(",Four of Clubs"));
        assert_eq!(s.split(',').count(), 16);
        assert!(!s.ends_with(','));
    }

    #[test]
    fn decode_reverses_encode() {
        let d = Deck::new();
        assert_eq!(decode(&encode(&d)), d);
    }

    #[test]
    fn decode_accepts_unknown_labels() {
        let d = decode("Joker,Nine of Cups,Joker");
        assert_eq!(d.len(), 3);
        assert_eq!(d.cards()[1].label(), "Nine of Cups");
    }

    #[test]
    fn decode_empty_is_one_empty_card() {
        let d = decode("");
        assert_eq!(d.len(), 1);
        assert_eq!(d.cards()[0].label(), "");
    }

    #[test]
    fn delimiter_inside_label_splits_it() {
        let d = Deck::from_cards(vec![Card::from("a,b")]);
        assert_eq!(decode(&encode(&d)).len(), 2);
    }
}
