#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate rs_showdown;
use rs_showdown::core::SevenCards;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(hand) = s.parse::<SevenCards>() {
            // Whatever parses has to render and parse back to the same cards.
            let again: SevenCards = hand.to_string().parse().unwrap();
            assert!(hand.iter().all(|c| again.contains(c)));

            let best = hand.evaluate();
            assert!(best.five_best().iter().all(|c| hand.contains(c)));
        }
    }
});
