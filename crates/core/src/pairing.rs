use crate::{Card, Hand, PairMatch, Player};

/// The next pair to discard from this player's hand, if any.
pub fn resolve_one_pair(player: &Player) -> Option<PairMatch> {
    player.hand.find_pairs().into_iter().next()
}

/// Splices a pair out of the hand, higher index first so the lower one stays valid.
/// Returns `None` without touching the hand when the indices are stale.
pub fn remove_pair(hand: &mut Hand, pair: PairMatch) -> Option<(Card, Card)> {
    let (low, high) = if pair.first < pair.second {
        (pair.first, pair.second)
    } else {
        (pair.second, pair.first)
    };
    if low == high {
        return None;
    }
    let matches = match (hand.get(low), hand.get(high)) {
        (Some(a), Some(b)) => a.pairs_with(b),
        _ => false,
    };
    if !matches {
        return None;
    }
    let second = hand.remove(high)?;
    let first = hand.remove(low)?;
    Some((first, second))
}

/// Removes every pair at once. Used for the opening deal, which is not animated.
pub fn remove_all_pairs(hand: &mut Hand) -> Vec<(Card, Card)> {
    let pairs = hand.find_pairs();
    if pairs.is_empty() {
        return Vec::new();
    }
    let mut doomed = vec![false; hand.len()];
    let mut removed = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        doomed[pair.first] = true;
        doomed[pair.second] = true;
        if let (Some(a), Some(b)) = (hand.get(pair.first), hand.get(pair.second)) {
            removed.push((*a, *b));
        }
    }
    let kept = hand
        .take_all()
        .into_iter()
        .zip(doomed)
        .filter_map(|(card, doomed)| (!doomed).then_some(card))
        .collect();
    *hand = Hand::new(kept);
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::standard(Suit::Diamonds, rank)
    }

    #[test]
    fn resolve_one_pair_returns_only_the_first() {
        let mut player = Player::new(1, false);
        player.hand = Hand::new(vec![
            card(Rank::Two),
            card(Rank::Nine),
            card(Rank::Nine),
            card(Rank::Two),
        ]);
        assert_eq!(
            resolve_one_pair(&player),
            Some(PairMatch { first: 0, second: 3 })
        );
    }

    #[test]
    fn remove_pair_rejects_stale_indices() {
        let mut hand = Hand::new(vec![card(Rank::Two), card(Rank::Three)]);
        assert_eq!(remove_pair(&mut hand, PairMatch { first: 0, second: 1 }), None);
        assert_eq!(remove_pair(&mut hand, PairMatch { first: 0, second: 5 }), None);
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn remove_pair_keeps_remaining_order() {
        let mut hand = Hand::new(vec![
            card(Rank::Ace),
            card(Rank::Jack),
            card(Rank::King),
            card(Rank::Jack),
        ]);
        let removed = remove_pair(&mut hand, PairMatch { first: 1, second: 3 });
        assert_eq!(removed, Some((card(Rank::Jack), card(Rank::Jack))));
        assert_eq!(hand.cards(), &[card(Rank::Ace), card(Rank::King)]);
    }

    #[test]
    fn remove_all_pairs_leaves_no_pair_behind() {
        let mut hand = Hand::new(vec![
            card(Rank::Four),
            card(Rank::Four),
            card(Rank::Four),
            Card::joker(),
            card(Rank::Six),
            card(Rank::Six),
        ]);
        let removed = remove_all_pairs(&mut hand);
        assert_eq!(removed.len(), 2);
        assert_eq!(hand.cards(), &[card(Rank::Four), Card::joker()]);
        assert!(hand.find_pairs().is_empty());
    }
}
