//! Card, deck, hand, and round integration tests.

use std::collections::HashSet;

use bjtable::{
    BACK_IMAGE_KEY, Card, DEALER_STANDS_ON, DECK_SIZE, Deck, DeckError, Hand, Rank, Round,
    RoundError, RoundOutcome, RoundState, Suit, TieLogging, present::image_keys,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(cards: &[Card]) -> Hand {
    cards.iter().copied().collect()
}

/// Deals `draws` in order, then the rest of the deck low ranks first.
fn round_from(draws: &[Card]) -> Round {
    let mut cards = draws.to_vec();
    cards.extend(
        Deck::build()
            .cards()
            .iter()
            .copied()
            .filter(|filler| !draws.contains(filler)),
    );
    Round::with_deck(Deck::stacked(cards).unwrap()).unwrap()
}

#[test]
fn card_values_and_image_keys() {
    assert_eq!(card(Rank::Two, Suit::Hearts).value(), 2);
    assert_eq!(card(Rank::Ten, Suit::Spades).value(), 10);
    assert_eq!(card(Rank::Jack, Suit::Clubs).value(), 10);
    assert_eq!(card(Rank::Queen, Suit::Diamonds).value(), 10);
    assert_eq!(card(Rank::King, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::Ace, Suit::Hearts).value(), 11);
    assert!(card(Rank::Ace, Suit::Spades).is_ace());
    assert!(!card(Rank::King, Suit::Spades).is_ace());

    assert_eq!(card(Rank::Ace, Suit::Hearts).image_key(), "A-H.png");
    assert_eq!(card(Rank::Ten, Suit::Clubs).image_key(), "10-C.png");
    assert_eq!(
        card(Rank::Queen, Suit::Diamonds).image_path(),
        "/cards/Q-D.png"
    );
    assert_eq!(BACK_IMAGE_KEY, "BACK.png");
}

#[test]
fn image_keys_hide_only_the_second_card() {
    let cards = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Five, Suit::Diamonds),
    ];
    assert_eq!(
        image_keys(&cards, true),
        ["A-H.png", "BACK.png", "5-D.png"]
    );
    assert_eq!(image_keys(&cards, false), ["A-H.png", "9-S.png", "5-D.png"]);
}

#[test]
fn built_deck_is_complete_and_in_base_order() {
    let deck = Deck::build();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(
        &deck.cards()[..4],
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Two, Suit::Diamonds),
            card(Rank::Two, Suit::Spades),
            card(Rank::Two, Suit::Clubs),
        ]
    );
    assert_eq!(deck.cards()[DECK_SIZE - 1], card(Rank::Ace, Suit::Clubs));
}

#[test]
fn shuffled_deck_deals_every_card_once_then_fails() {
    for seed in [1, 7, 42, 1234] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::build();
        deck.shuffle(&mut rng).unwrap();

        let mut seen = HashSet::new();
        for _ in 0..DECK_SIZE {
            assert!(seen.insert(deck.draw().unwrap()));
        }

        assert_eq!(seen.len(), DECK_SIZE);
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.draw().unwrap_err(), DeckError::Exhausted);
        assert_eq!(deck.dealt(), DECK_SIZE);
    }
}

#[test]
fn shuffle_after_draw_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::build();
    deck.shuffle(&mut rng).unwrap();
    let before = deck.cards().to_vec();

    deck.draw().unwrap();
    assert_eq!(
        deck.shuffle(&mut rng).unwrap_err(),
        DeckError::ShuffleAfterDraw
    );
    assert_eq!(deck.cards(), before.as_slice());
}

#[test]
fn same_seed_gives_same_shuffle() {
    let mut a = Deck::build();
    let mut b = Deck::build();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn stacked_deck_rejects_repeats_and_overflow() {
    let repeated = vec![card(Rank::Two, Suit::Clubs); 60];
    assert_eq!(
        Deck::stacked(repeated).unwrap_err(),
        DeckError::Oversized(60)
    );

    assert_eq!(
        Deck::stacked(vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
        ])
        .unwrap_err(),
        DeckError::DuplicateCard(card(Rank::Ace, Suit::Hearts))
    );

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut shuffled = Deck::build();
    shuffled.shuffle(&mut rng).unwrap();
    let mut full = Deck::stacked(shuffled.cards().to_vec()).unwrap();
    for _ in 0..DECK_SIZE {
        full.draw().unwrap();
    }
    assert_eq!(full.draw().unwrap_err(), DeckError::Exhausted);
    assert_eq!(full.dealt(), DECK_SIZE);
}

#[test]
fn deck_misuse_is_not_a_round_state_error() {
    assert_eq!(
        RoundError::from(DeckError::Exhausted),
        RoundError::DeckExhausted
    );
    assert_eq!(
        RoundError::from(DeckError::ShuffleAfterDraw),
        RoundError::Deck(DeckError::ShuffleAfterDraw)
    );
}

#[test]
fn hand_totals_with_aces() {
    let aces = hand_of(&[card(Rank::Ace, Suit::Hearts), card(Rank::Ace, Suit::Spades)]);
    assert_eq!(aces.total(), 12);
    assert!(aces.is_soft());
    assert!(!aces.is_blackjack());

    let natural = hand_of(&[card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Clubs)]);
    assert_eq!(natural.total(), 21);
    assert!(natural.is_blackjack());
    assert!(!natural.is_busted());

    let busted = hand_of(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
    ]);
    assert_eq!(busted.total(), 24);
    assert!(busted.is_busted());

    let three_card_21 = hand_of(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
    ]);
    assert_eq!(three_card_21.total(), 21);
    assert!(!three_card_21.is_blackjack());

    let hard = hand_of(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
    ]);
    assert_eq!(hard.total(), 15);
    assert!(!hard.is_soft());

    let all_aces_bust = hand_of(&[
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Diamonds),
    ]);
    assert_eq!(all_aces_bust.total(), 22);
    assert!(all_aces_bust.is_busted());

    assert_eq!(Hand::new().total(), 0);
    assert!(Hand::new().is_empty());
}

#[test]
fn hand_total_ignores_card_order() {
    let cards = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
    ];
    let expected = hand_of(&cards).total();
    assert_eq!(expected, 17);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..24 {
        let mut shuffled = cards;
        rand::seq::SliceRandom::shuffle(&mut shuffled[..], &mut rng);
        assert_eq!(hand_of(&shuffled).total(), expected);
    }
}

#[test]
fn hand_keeps_deal_order() {
    let mut hand = Hand::new();
    hand.add(card(Rank::Nine, Suit::Clubs));
    hand.add(card(Rank::Two, Suit::Hearts));
    assert_eq!(
        hand.cards(),
        &[card(Rank::Nine, Suit::Clubs), card(Rank::Two, Suit::Hearts)]
    );
    assert_eq!(hand.len(), 2);
}

#[test]
fn opening_deal_alternates_player_first() {
    let deck = Deck::stacked(vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
    ])
    .unwrap();
    let round = Round::with_deck(deck).unwrap();

    assert_eq!(
        round.player().cards(),
        &[card(Rank::Two, Suit::Hearts), card(Rank::Four, Suit::Hearts)]
    );
    assert_eq!(
        round.dealer().cards(),
        &[card(Rank::Three, Suit::Hearts), card(Rank::Five, Suit::Hearts)]
    );
    assert_eq!(round.state(), RoundState::InProgress);
    assert_eq!(round.cards_remaining(), 1);
    assert!(round.outcome().is_none());
}

#[test]
fn shuffled_round_starts_in_progress() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let round = Round::start(&mut rng).unwrap();
    assert_eq!(round.state(), RoundState::InProgress);
    assert_eq!(round.player().len(), 2);
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn natural_on_the_deal_is_not_resolved_early() {
    let round = round_from(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Ace, Suit::Clubs),
    ]);
    assert!(round.player().is_blackjack());
    assert!(round.dealer().is_blackjack());
    assert_eq!(round.state(), RoundState::InProgress);
}

#[test]
fn player_hit_draws_and_busts() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Spades),  // player
        card(Rank::Ten, Suit::Hearts),  // dealer up
        card(Rank::Nine, Suit::Diamonds), // player
        card(Rank::Six, Suit::Clubs),   // dealer hole
        card(Rank::King, Suit::Hearts), // player hit
    ]);

    let drawn = round.player_hit().unwrap();
    assert_eq!(drawn, card(Rank::King, Suit::Hearts));
    assert_eq!(round.state(), RoundState::PlayerBusted);
    assert_eq!(round.player_total(), 29);

    let outcome = round.outcome().unwrap();
    assert_eq!(outcome.state, RoundState::PlayerBusted);
    assert_eq!(outcome.dealer_total, 16);
}

#[test]
fn player_hit_below_21_keeps_playing() {
    let mut round = round_from(&[
        card(Rank::Five, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Ace, Suit::Hearts),
    ]);

    round.player_hit().unwrap();
    assert_eq!(round.player_total(), 20);
    assert_eq!(round.state(), RoundState::InProgress);
}

#[test]
fn actions_on_resolved_round_are_rejected() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
        card(Rank::King, Suit::Hearts),
    ]);
    round.player_hit().unwrap();
    let remaining = round.cards_remaining();

    assert_eq!(
        round.player_hit().unwrap_err(),
        RoundError::InvalidStateTransition
    );
    assert_eq!(
        round.player_stay().unwrap_err(),
        RoundError::InvalidStateTransition
    );
    assert_eq!(round.state(), RoundState::PlayerBusted);
    assert_eq!(round.cards_remaining(), remaining);
    assert_eq!(round.player().len(), 3);
}

#[test]
fn dealer_draws_on_16_and_wins_with_20() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Spades),    // player
        card(Rank::Ten, Suit::Hearts),    // dealer up
        card(Rank::Nine, Suit::Diamonds), // player
        card(Rank::Six, Suit::Clubs),     // dealer hole
        card(Rank::Four, Suit::Diamonds), // dealer draw
    ]);

    let drawn = round.player_stay().unwrap();
    assert_eq!(drawn, vec![card(Rank::Four, Suit::Diamonds)]);
    assert_eq!(round.dealer_total(), 20);
    assert_eq!(round.state(), RoundState::DealerWins);
}

#[test]
fn dealer_stands_on_hard_and_soft_17() {
    let mut hard = round_from(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
    ]);
    assert!(hard.player_stay().unwrap().is_empty());
    assert_eq!(hard.state(), RoundState::PlayerWins);

    let mut soft = round_from(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
    ]);
    assert!(soft.player_stay().unwrap().is_empty());
    assert_eq!(soft.dealer_total(), 17);
    assert_eq!(soft.state(), RoundState::PlayerWins);
}

#[test]
fn dealer_draw_policy_holds_for_every_opening_pair() {
    for first in Rank::ALL {
        for second in Rank::ALL {
            let mut round = round_from(&[
                card(Rank::Ten, Suit::Spades),
                card(first, Suit::Hearts),
                card(Rank::Nine, Suit::Diamonds),
                card(second, Suit::Clubs),
            ]);
            let opening = round.dealer_total();

            let drawn = round.player_stay().unwrap();
            assert_eq!(drawn.is_empty(), opening >= DEALER_STANDS_ON);
            assert!(round.dealer_total() >= DEALER_STANDS_ON);
            assert!(round.is_over());
        }
    }
}

#[test]
fn dealer_bust_wins_for_player_regardless_of_total() {
    let mut round = round_from(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Six, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
    ]);

    round.player_stay().unwrap();
    assert_eq!(round.dealer_total(), 26);
    assert_eq!(round.state(), RoundState::DealerBusted);
}

#[test]
fn dealer_natural_is_checked_after_the_player_stays() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::King, Suit::Clubs),
    ]);

    assert_eq!(round.state(), RoundState::InProgress);
    assert!(round.player_stay().unwrap().is_empty());
    assert_eq!(round.state(), RoundState::DealerBlackjack);
}

#[test]
fn equal_totals_tie() {
    let mut round = round_from(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Eight, Suit::Clubs),
    ]);

    round.player_stay().unwrap();
    assert_eq!(round.state(), RoundState::Tie);
    assert_eq!(round.state().status_text(), "It's a Tie!");
}

#[test]
fn short_deck_fails_explicitly() {
    let short = Deck::stacked(vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
    ])
    .unwrap();
    assert_eq!(
        Round::with_deck(short).unwrap_err(),
        RoundError::DeckExhausted
    );

    let mut round = Round::with_deck(Deck::stacked(vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
    ])
    .unwrap())
    .unwrap();
    assert_eq!(round.player_hit().unwrap_err(), RoundError::DeckExhausted);
    assert_eq!(round.state(), RoundState::InProgress);
    assert_eq!(round.player().len(), 2);
    assert_eq!(round.player_stay().unwrap_err(), RoundError::DeckExhausted);
}

#[test]
fn result_lines() {
    let busted = RoundOutcome {
        state: RoundState::PlayerBusted,
        player_total: 22,
        dealer_total: 18,
    };
    assert_eq!(
        busted.result_line(TieLogging::Legacy),
        "Player Score: 22, Dealer Score: 18, Result: Player Busted"
    );

    let dealer_busted = RoundOutcome {
        state: RoundState::DealerBusted,
        player_total: 19,
        dealer_total: 25,
    };
    assert_eq!(
        dealer_busted.result_line(TieLogging::Legacy),
        "Player Score: 19, Dealer Score: 25, Result: Dealer Busted"
    );

    let player_wins = RoundOutcome {
        state: RoundState::PlayerWins,
        player_total: 20,
        dealer_total: 18,
    };
    assert_eq!(
        player_wins.result_line(TieLogging::Legacy),
        "Player Score: 20, Dealer Score: 18, Result: Player Wins"
    );

    let dealer_wins = RoundOutcome {
        state: RoundState::DealerWins,
        player_total: 19,
        dealer_total: 20,
    };
    assert_eq!(
        dealer_wins.result_line(TieLogging::Legacy),
        "Player Score: 19, Dealer Score: 20, Result: Dealer Wins"
    );
}

#[test]
fn tie_logging_policy() {
    let tie = RoundOutcome {
        state: RoundState::Tie,
        player_total: 18,
        dealer_total: 18,
    };
    assert_eq!(
        tie.result_line(TieLogging::Legacy),
        "Player Score: 18, Dealer Score: 18, Result: Dealer Wins"
    );
    assert_eq!(
        tie.result_line(TieLogging::Tie),
        "Player Score: 18, Dealer Score: 18, Result: Tie"
    );
}
