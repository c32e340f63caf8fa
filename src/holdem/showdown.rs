use std::cmp::Ordering;

use rand::Rng;
use tracing::{event, trace_span};

use crate::core::{Card, Deck, EvalError, EvaluatedHand, KickerRule, SevenCards};
use crate::utils::PlayerBitSet;

/// The end of a holdem hand: every seat still in shows two hole cards
/// and the best hand using the five community cards wins.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    board: [Card; 5],
    holes: Vec<[Card; 2]>,
    kicker_rule: KickerRule,
}

impl Showdown {
    /// 23 seats take 46 hole cards, leaving just enough for the board.
    pub const MAX_PLAYERS: usize = 23;

    /// Create a showdown from the community cards and each seat's hole
    /// cards. No card can show up twice.
    ///
    /// ```
    /// use rs_showdown::core::{Card, EvalError};
    /// use rs_showdown::holdem::Showdown;
    ///
    /// let c = |s: &str| s.parse::<Card>().unwrap();
    /// let board = [c("3H"), c("9H"), c("6D"), c("2D"), c("7D")];
    ///
    /// let dup = Showdown::new(&board, vec![[c("AD"), c("9H")]]);
    /// assert_eq!(Err(EvalError::DuplicateCard(c("9H"))), dup);
    /// ```
    pub fn new(board: &[Card], holes: Vec<[Card; 2]>) -> Result<Self, EvalError> {
        let board: [Card; 5] = board
            .try_into()
            .map_err(|_| EvalError::InvalidBoardSize(board.len()))?;
        if holes.is_empty() {
            return Err(EvalError::NoHands);
        }
        if holes.len() > Self::MAX_PLAYERS {
            return Err(EvalError::TooManyPlayers(holes.len()));
        }

        // Every card has to come out of the same deck exactly once.
        let mut deck = Deck::new();
        for card in board.iter().chain(holes.iter().flatten()) {
            deck.take(*card)
                .map_err(|_| EvalError::DuplicateCard(*card))?;
        }

        Ok(Self {
            board,
            holes,
            kicker_rule: KickerRule::default(),
        })
    }

    /// Shuffle a deck and deal a whole hand: one card to each seat,
    /// then a second one, then the five community cards.
    pub fn deal<R: Rng>(num_players: usize, rng: &mut R) -> Result<Self, EvalError> {
        if num_players == 0 {
            return Err(EvalError::NoHands);
        }
        if num_players > Self::MAX_PLAYERS {
            return Err(EvalError::TooManyPlayers(num_players));
        }

        let mut deck = Deck::shuffled(rng);
        let mut next = || deck.deal().ok_or(EvalError::TooManyPlayers(num_players));

        let mut first = Vec::with_capacity(num_players);
        for _ in 0..num_players {
            first.push(next()?);
        }
        let mut holes = Vec::with_capacity(num_players);
        for card in first {
            holes.push([card, next()?]);
        }
        let board = [next()?, next()?, next()?, next()?, next()?];

        Self::new(&board, holes)
    }

    /// Use a different tie break between hands of the same category.
    pub fn with_kicker_rule(mut self, kicker_rule: KickerRule) -> Self {
        self.kicker_rule = kicker_rule;
        self
    }

    pub fn board(&self) -> &[Card; 5] {
        &self.board
    }

    /// Hole cards in seat order.
    pub fn holes(&self) -> &[[Card; 2]] {
        &self.holes
    }

    pub fn kicker_rule(&self) -> KickerRule {
        self.kicker_rule
    }

    /// Evaluate every seat and find who wins. Seats tied with the best
    /// hand all win and split.
    pub fn evaluate(&self) -> ShowdownResult {
        let span = trace_span!("showdown", players = self.holes.len());
        let _enter = span.enter();

        let hands: Vec<EvaluatedHand> = self
            .holes
            .iter()
            .map(|hole| {
                let [a, b] = *hole;
                let [c, d, e, f, g] = self.board;
                SevenCards::from([a, b, c, d, e, f, g]).evaluate()
            })
            .collect();

        let (winners, _) = hands.iter().enumerate().fold(
            (PlayerBitSet::default(), None::<&EvaluatedHand>),
            |(mut found, best), (idx, hand)| {
                let ord = best.map_or(Ordering::Greater, |b| hand.cmp_by(b, self.kicker_rule));
                match ord {
                    Ordering::Equal => {
                        found.enable(idx);
                        (found, best)
                    }
                    Ordering::Greater => {
                        // A new best hand, forget the others.
                        found = PlayerBitSet::default();
                        found.enable(idx);
                        (found, Some(hand))
                    }
                    Ordering::Less => (found, best),
                }
            },
        );

        event!(
            tracing::Level::DEBUG,
            winners = %winners,
            kicker_rule = ?self.kicker_rule,
            "showdown finished"
        );

        ShowdownResult { hands, winners }
    }
}

/// Every seat's hand and the seats that won.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    hands: Vec<EvaluatedHand>,
    winners: PlayerBitSet,
}

impl ShowdownResult {
    /// Evaluated hands in seat order.
    pub fn hands(&self) -> &[EvaluatedHand] {
        &self.hands
    }

    /// Seats splitting the pot. Never empty.
    pub fn winners(&self) -> PlayerBitSet {
        self.winners
    }

    /// The winning hand. With a split it's the one in the lowest seat.
    pub fn best(&self) -> Option<&EvaluatedHand> {
        self.winners.ones().next().and_then(|idx| self.hands.get(idx))
    }
}
