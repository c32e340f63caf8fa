//! One detector per hand category.
//!
//! Every detector takes the seven cards sorted strongest first (as
//! `SevenCards` keeps them) and returns the five cards that make the
//! category, or `None` when the hand doesn't qualify. Detectors don't
//! look at each other's answers except where a category is defined in
//! terms of another one (straight flush, royal flush).
//!
//! Made cards come first in the returned array, biggest group first,
//! followed by the kickers from high to low.
use super::card::{Card, Suit, Value};

/// Five card windows that make a straight, best first.
/// The last one is the wheel where the ace plays low.
pub const STRAIGHTS: [[Value; 5]; 10] = [
    // Royal straight
    [Value::Ace, Value::King, Value::Queen, Value::Jack, Value::Ten],
    // King to nine
    [Value::King, Value::Queen, Value::Jack, Value::Ten, Value::Nine],
    // Queen to eight
    [Value::Queen, Value::Jack, Value::Ten, Value::Nine, Value::Eight],
    // Jack to seven
    [Value::Jack, Value::Ten, Value::Nine, Value::Eight, Value::Seven],
    // Ten to six
    [Value::Ten, Value::Nine, Value::Eight, Value::Seven, Value::Six],
    // Nine to five
    [Value::Nine, Value::Eight, Value::Seven, Value::Six, Value::Five],
    // Eight to four
    [Value::Eight, Value::Seven, Value::Six, Value::Five, Value::Four],
    // Seven to three
    [Value::Seven, Value::Six, Value::Five, Value::Four, Value::Three],
    // Six to two
    [Value::Six, Value::Five, Value::Four, Value::Three, Value::Two],
    // Wheel.
    [Value::Five, Value::Four, Value::Three, Value::Two, Value::Ace],
];

/// The five highest cards. Can't fail on seven cards.
pub fn top_five(cards: &[Card; 7]) -> [Card; 5] {
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

/// Always qualifies.
pub fn high_card(cards: &[Card; 7]) -> Option<[Card; 5]> {
    Some(top_five(cards))
}

/// Exactly one value showing twice.
pub fn pair(cards: &[Card; 7]) -> Option<[Card; 5]> {
    let counts = value_counts(cards);
    let mut pairs = values_with_count(&counts, |n| n == 2);
    let value = pairs.next()?;
    if pairs.next().is_some() {
        return None;
    }
    with_kickers(cards, &[value])
}

/// The two highest values seen at least twice must both be exact pairs.
/// With three pairs on the table the lowest one is ignored.
pub fn two_pair(cards: &[Card; 7]) -> Option<[Card; 5]> {
    let counts = value_counts(cards);
    let mut groups = values_with_count(&counts, |n| n >= 2);
    let high = groups.next()?;
    let low = groups.next()?;
    if counts[high as usize] != 2 || counts[low as usize] != 2 {
        return None;
    }
    with_kickers(cards, &[high, low])
}

/// Exactly one value showing three times and no quads.
pub fn three_of_a_kind(cards: &[Card; 7]) -> Option<[Card; 5]> {
    let counts = value_counts(cards);
    if counts.iter().any(|&n| n >= 4) {
        return None;
    }
    let mut trips = values_with_count(&counts, |n| n == 3);
    let value = trips.next()?;
    if trips.next().is_some() {
        return None;
    }
    with_kickers(cards, &[value])
}

/// Five distinct consecutive values, the highest run wins.
pub fn straight(cards: &[Card; 7]) -> Option<[Card; 5]> {
    straight_in(cards)
}

/// Five or more cards of one suit. Takes the five highest of them.
pub fn flush(cards: &[Card; 7]) -> Option<[Card; 5]> {
    let suit = flush_suit(cards)?;
    five(cards.iter().filter(|c| c.suit == suit))
}

/// The two most common values show three and two times. Two sets of
/// trips don't count. With a second pair the higher one is used.
pub fn full_house(cards: &[Card; 7]) -> Option<[Card; 5]> {
    let counts = value_counts(cards);
    if counts.iter().any(|&n| n >= 4) {
        return None;
    }
    let mut trips = values_with_count(&counts, |n| n == 3);
    let three = trips.next()?;
    if trips.next().is_some() {
        return None;
    }
    let two = values_with_count(&counts, |n| n == 2).next()?;
    let trips_cards = cards.iter().filter(|c| c.value == three);
    let pair_cards = cards.iter().filter(|c| c.value == two);
    five(trips_cards.chain(pair_cards))
}

/// All four cards of a value plus the best kicker.
pub fn four_of_a_kind(cards: &[Card; 7]) -> Option<[Card; 5]> {
    let counts = value_counts(cards);
    let value = values_with_count(&counts, |n| n == 4).next()?;
    with_kickers(cards, &[value])
}

/// A straight made only out of the flush suit, so the straight and the
/// flush are the same five cards.
pub fn straight_flush(cards: &[Card; 7]) -> Option<[Card; 5]> {
    let suit = flush_suit(cards)?;
    let suited: Vec<Card> = cards.iter().filter(|c| c.suit == suit).copied().collect();
    straight_in(&suited)
}

/// Ace high straight flush.
pub fn royal_flush(cards: &[Card; 7]) -> Option<[Card; 5]> {
    let best = straight_flush(cards)?;
    (best[0].value == Value::Ace).then_some(best)
}

/// Look for the best straight in any number of cards sorted high to low.
/// When a value shows up more than once the first card of it is used.
fn straight_in(cards: &[Card]) -> Option<[Card; 5]> {
    STRAIGHTS.iter().find_map(|window| {
        let found: Option<Vec<Card>> = window
            .iter()
            .map(|v| cards.iter().find(|c| c.value == *v).copied())
            .collect();
        found.and_then(|f| f.try_into().ok())
    })
}

/// The suit with five or more cards, if any. With seven cards there
/// can only be one.
fn flush_suit(cards: &[Card; 7]) -> Option<Suit> {
    let mut counts = [0u8; 4];
    for c in cards {
        counts[c.suit as usize] += 1;
    }
    Suit::suits()
        .into_iter()
        .find(|s| counts[*s as usize] >= 5)
}

/// How many cards of each value, indexed by internal rank.
fn value_counts(cards: &[Card; 7]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for c in cards {
        counts[c.value as usize] += 1;
    }
    counts
}

/// Values whose count passes `keep`, highest value first.
fn values_with_count<F>(counts: &[u8; 13], keep: F) -> impl Iterator<Item = Value> + '_
where
    F: Fn(u8) -> bool + 'static,
{
    Value::values()
        .into_iter()
        .rev()
        .filter(move |v| keep(counts[*v as usize]))
}

/// Every card of the made values, in the order given, then the best
/// of the rest until there are five.
fn with_kickers(cards: &[Card; 7], made: &[Value]) -> Option<[Card; 5]> {
    let made_cards = made
        .iter()
        .flat_map(|v| cards.iter().filter(move |c| c.value == *v));
    let kickers = cards.iter().filter(|c| !made.contains(&c.value));
    five(made_cards.chain(kickers))
}

fn five<'a, I: Iterator<Item = &'a Card>>(cards: I) -> Option<[Card; 5]> {
    let cards: Vec<Card> = cards.take(5).copied().collect();
    cards.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SevenCards;

    fn hand(s: &str) -> [Card; 7] {
        *s.parse::<SevenCards>().unwrap().cards()
    }

    fn cards(s: &str) -> [Card; 5] {
        let v: Vec<Card> = s.split(' ').map(|c| c.parse().unwrap()).collect();
        v.try_into().unwrap()
    }

    #[test]
    fn test_straight_constants() {
        for (i, window) in STRAIGHTS.iter().enumerate() {
            // Every window is five distinct values
            for (j, v) in window.iter().enumerate() {
                assert!(!window[j + 1..].contains(v));
            }
            // and the windows go from best to worst.
            if i + 1 < STRAIGHTS.len() {
                assert!(window[0] > STRAIGHTS[i + 1][0]);
            }
        }
    }

    #[test]
    fn test_high_card() {
        let h = hand("AD KS 3H 9H 6D 2D 7D");
        assert_eq!(Some(cards("AD KS 9H 7D 6D")), high_card(&h));
        assert_eq!(None, pair(&h));
        assert_eq!(None, straight(&h));
        assert_eq!(None, flush(&h));
    }

    #[test]
    fn test_pair() {
        let h = hand("AD AS 3H 9H 6D 2D 7D");
        assert_eq!(Some(cards("AS AD 9H 7D 6D")), pair(&h));
        assert_eq!(None, two_pair(&h));
        assert_eq!(None, three_of_a_kind(&h));
    }

    #[test]
    fn test_pair_needs_exactly_one() {
        let h = hand("4D 4S JH 9H QD QH 7D");
        assert_eq!(None, pair(&h));
    }

    #[test]
    fn test_two_pair() {
        let h = hand("4D 4S JH 9H QD QH 7D");
        assert_eq!(Some(cards("QH QD 4S 4D JH")), two_pair(&h));
    }

    #[test]
    fn test_three_pairs_keep_highest() {
        let h = hand("4D 4S JH 9H QD QH 9D");
        assert_eq!(Some(cards("QH QD 9D 9H JH")), two_pair(&h));
    }

    #[test]
    fn test_three_pairs_low_pair_as_kicker() {
        // The best remaining card is from the dropped pair.
        let h = hand("KD KS 9H 9C 5D 5H 3D");
        assert_eq!(Some(cards("KS KD 9C 9H 5H")), two_pair(&h));
        let h = hand("2D 2S JH JC QD QH 8D");
        assert_eq!(Some(cards("QH QD JC JH 8D")), two_pair(&h));
    }

    #[test]
    fn test_two_pair_not_with_trips_on_top() {
        let h = hand("9D 9S 9H KD KH 4C 4D");
        assert_eq!(None, two_pair(&h));
    }

    #[test]
    fn test_three_of_a_kind() {
        let h = hand("AD AS AH 9H 6D 2D 7D");
        assert_eq!(Some(cards("AH AS AD 9H 7D")), three_of_a_kind(&h));
        assert_eq!(None, full_house(&h));
    }

    #[test]
    fn test_three_of_a_kind_not_with_quads() {
        let h = hand("AD AS AH AC 6D 6S 6H");
        assert_eq!(None, three_of_a_kind(&h));
        assert_eq!(None, full_house(&h));
        assert_eq!(Some(cards("AC AH AS AD 6H")), four_of_a_kind(&h));
    }

    #[test]
    fn test_straight() {
        let h = hand("3D 4S 5H 6H 7D JD QD");
        assert_eq!(Some(cards("7D 6H 5H 4S 3D")), straight(&h));
    }

    #[test]
    fn test_long_straight_takes_highest() {
        let h = hand("3D 4S 5H 6H 7D 8D 9D");
        assert_eq!(Some(cards("9D 8D 7D 6H 5H")), straight(&h));
    }

    #[test]
    fn test_straight_with_duplicate_value() {
        let h = hand("3D 4S 5H 5C 6H 7D KD");
        let best = straight(&h).unwrap();
        // One of the fives, the other one is left out.
        assert_eq!(cards("7D 6H 5C 4S 3D"), best);
    }

    #[test]
    fn test_wheel() {
        let h = hand("AD 2S 3H 4C 5D 9S JH");
        assert_eq!(Some(cards("5D 4C 3H 2S AD")), straight(&h));
    }

    #[test]
    fn test_six_high_beats_wheel() {
        let h = hand("AD 2S 3H 4C 5D 6S JH");
        assert_eq!(Some(cards("6S 5D 4C 3H 2S")), straight(&h));
    }

    #[test]
    fn test_no_wrap_around() {
        let h = hand("QD KS AH 2C 3D 8S 8H");
        assert_eq!(None, straight(&h));
    }

    #[test]
    fn test_flush() {
        let h = hand("AS KS 3S 9S 6S 2D 7D");
        assert_eq!(Some(cards("AS KS 9S 6S 3S")), flush(&h));
    }

    #[test]
    fn test_flush_takes_top_five_of_suit() {
        let h = hand("AS KS 3S 9S 6S 2S 7D");
        assert_eq!(Some(cards("AS KS 9S 6S 3S")), flush(&h));
    }

    #[test]
    fn test_full_house() {
        let h = hand("AD AS 3H 3C 3D 2D 7D");
        assert_eq!(Some(cards("3D 3C 3H AS AD")), full_house(&h));
        assert_eq!(None, four_of_a_kind(&h));
    }

    #[test]
    fn test_two_trips_not_full_house() {
        // Counts of three and three, not three and two.
        let h = hand("9D 9S 9H 8D 8H 8C KD");
        assert_eq!(None, full_house(&h));
        assert_eq!(None, three_of_a_kind(&h));
        assert_eq!(None, two_pair(&h));
        assert_eq!(Some(cards("KD 9H 9S 9D 8C")), high_card(&h));
    }

    #[test]
    fn test_full_house_with_two_pairs() {
        let h = hand("9D 9S 9H 4D 4H 6C 6D");
        assert_eq!(Some(cards("9H 9S 9D 6D 6C")), full_house(&h));
    }

    #[test]
    fn test_full_house_takes_best_pair() {
        let h = hand("9D 9S 9H KD KH 4C 4D");
        assert_eq!(Some(cards("9H 9S 9D KH KD")), full_house(&h));
    }

    #[test]
    fn test_four_of_a_kind() {
        let h = hand("AD AS AH AC 6D 2D 7D");
        assert_eq!(Some(cards("AC AH AS AD 7D")), four_of_a_kind(&h));
    }

    #[test]
    fn test_straight_flush() {
        let h = hand("2S 3S 4S 5S 6S 10D 7S");
        assert_eq!(Some(cards("7S 6S 5S 4S 3S")), straight_flush(&h));
        assert_eq!(straight(&h), straight_flush(&h));
        assert_eq!(flush(&h), straight_flush(&h));
        assert_eq!(None, royal_flush(&h));
    }

    #[test]
    fn test_straight_flush_under_offsuit_straight() {
        // 7D makes a higher plain straight, the straight flush is still
        // the spades.
        let h = hand("2S 3S 4S 5S 6S 7D KS");
        assert_eq!(Some(cards("7D 6S 5S 4S 3S")), straight(&h));
        assert_eq!(Some(cards("6S 5S 4S 3S 2S")), straight_flush(&h));
    }

    #[test]
    fn test_straight_and_flush_apart() {
        // A straight and a flush, but not from the same cards.
        let h = hand("5H 6H 7H 8H 9C KH 2S");
        assert!(straight(&h).is_some());
        assert!(flush(&h).is_some());
        assert_eq!(None, straight_flush(&h));
    }

    #[test]
    fn test_steel_wheel() {
        let h = hand("AC 2C 3C 4C 5C KD KH");
        assert_eq!(Some(cards("5C 4C 3C 2C AC")), straight_flush(&h));
        assert_eq!(None, royal_flush(&h));
    }

    #[test]
    fn test_royal_flush() {
        let h = hand("AD KD QD JD 10D 2S 7S");
        assert_eq!(Some(cards("AD KD QD JD 10D")), royal_flush(&h));
        assert_eq!(royal_flush(&h), straight_flush(&h));
    }
}
