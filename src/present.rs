//! Outbound display boundary.

use crate::card::{BACK_IMAGE_KEY, Card};

/// Receives what the table should show. Implemented by front ends.
pub trait Presenter {
    /// Shows both hands. When `hide_dealer_second` is set the dealer's second
    /// card must be drawn face down.
    fn render_hands(&mut self, player: &[Card], dealer: &[Card], hide_dealer_second: bool);

    /// Shows a status line.
    fn render_status(&mut self, text: &str);
}

/// Presenter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_hands(&mut self, _player: &[Card], _dealer: &[Card], _hide_dealer_second: bool) {}

    fn render_status(&mut self, _text: &str) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render_hands(&mut self, player: &[Card], dealer: &[Card], hide_dealer_second: bool) {
        (**self).render_hands(player, dealer, hide_dealer_second);
    }

    fn render_status(&mut self, text: &str) {
        (**self).render_status(text);
    }
}

/// Maps cards to image keys, replacing the second card with
/// [`BACK_IMAGE_KEY`] when `hide_second` is set.
///
/// # Example
///
/// ```
/// use bjtable::{Card, Rank, Suit, present::image_keys};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ten, Suit::Spades),
/// ];
/// assert_eq!(image_keys(&cards, true), ["A-H.png", "BACK.png"]);
/// ```
#[must_use]
pub fn image_keys(cards: &[Card], hide_second: bool) -> Vec<String> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if index == 1 && hide_second {
                BACK_IMAGE_KEY.to_owned()
            } else {
                card.image_key()
            }
        })
        .collect()
}
