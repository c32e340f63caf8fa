#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate rs_showdown;
use rs_showdown::core::{Card, Category, Rankable, SevenCards};

fuzz_target!(|cards: [Card; 7]| {
    // A real deck never deals the same card twice.
    for (i, c) in cards.iter().enumerate() {
        if cards[i + 1..].contains(c) {
            return;
        }
    }
    let hand = SevenCards::from(cards);
    let best = hand.evaluate();

    for c in best.five_best() {
        assert!(hand.contains(c));
    }
    let qualifying = hand.qualifying();
    assert_eq!(Category::HighCard, qualifying[0].0);
    assert_eq!(Some(best.category()), qualifying.iter().map(|(c, _)| *c).max());
    assert_eq!(best, hand.evaluate());
});
