use crate::domain::card::Rank::*;
use crate::domain::card::Suit::*;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub fn as_index(&self) -> usize {
        match self {
            Clubs => 0,
            Diamonds => 1,
            Hearts => 2,
            Spades => 3,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Clubs => '♣',
            Diamonds => '♢',
            Hearts => '♡',
            Spades => '♠',
        }
    }

    pub fn all() -> [Suit; 4] {
        [Clubs, Diamonds, Hearts, Spades]
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            '♣' | '♧' | 'C' | 'c' => Some(Clubs),
            '♢' | '♦' | 'D' | 'd' => Some(Diamonds),
            '♡' | '♥' | 'H' | 'h' => Some(Hearts),
            '♠' | '♤' | 'S' | 's' => Some(Spades),
            _ => None,
        }
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn as_index(&self) -> usize {
        match self {
            Two => 0,
            Three => 1,
            Four => 2,
            Five => 3,
            Six => 4,
            Seven => 5,
            Eight => 6,
            Nine => 7,
            Ten => 8,
            Jack => 9,
            Queen => 10,
            King => 11,
            Ace => 12,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Two => "2",
            Three => "3",
            Four => "4",
            Five => "5",
            Six => "6",
            Seven => "7",
            Eight => "8",
            Nine => "9",
            Ten => "10",
            Jack => "J",
            Queen => "Q",
            King => "K",
            Ace => "A",
        }
    }

    pub fn all() -> [Rank; 13] {
        [Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace]
    }

    fn from_symbol(symbol: &str) -> Option<Rank> {
        match symbol.to_uppercase().as_str() {
            "2" => Some(Two),
            "3" => Some(Three),
            "4" => Some(Four),
            "5" => Some(Five),
            "6" => Some(Six),
            "7" => Some(Seven),
            "8" => Some(Eight),
            "9" => Some(Nine),
            "10" | "T" => Some(Ten),
            "J" => Some(Jack),
            "Q" => Some(Queen),
            "K" => Some(King),
            "A" => Some(Ace),
            _ => None,
        }
    }
}

/// An immutable playing card. Cards order by [`Card::sort_index`], so rank first and suit second.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn sort_index(&self) -> usize {
        self.rank.as_index() * Suit::all().len() + self.suit.as_index()
    }

    /// Returns a new card of the same suit with the given rank.
    pub fn with_rank(&self, rank: Rank) -> Card {
        Card { rank, suit: self.suit }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_index().cmp(&other.sort_index())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.symbol())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(CardParseError::Empty)?;
        let suit = Suit::from_char(suit_char).ok_or(CardParseError::UnknownSuit(suit_char))?;
        let rank_symbol = &s[..s.len() - suit_char.len_utf8()];
        let rank = Rank::from_symbol(rank_symbol).ok_or_else(|| CardParseError::UnknownRank(rank_symbol.to_string()))?;
        Ok(Card { rank, suit })
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum CardParseError {
    #[error("empty card")]
    Empty,
    #[error("unknown rank '{0}'")]
    UnknownRank(String),
    #[error("unknown suit '{0}'")]
    UnknownSuit(char),
}

/// A collection of cards, in the order they were added.
#[derive(Clone, PartialEq, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Returns all 52 cards, grouped by suit.
    pub fn full() -> Self {
        let cards = Suit::all()
            .into_iter()
            .flat_map(|suit| Rank::all().into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    pub fn sorted(&self) -> Deck {
        let mut cards = self.cards.clone();
        cards.sort();
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self.cards.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(", "))
    }
}
