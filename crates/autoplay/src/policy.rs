use jokerdraw_core::RandomSource;
use serde::{Deserialize, Serialize};

/// How the driver picks a card from the draw pool on the human seat's behalf.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PickPolicy {
    First,
    Last,
    Middle,
    Random,
}

impl PickPolicy {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            "middle" | "mid" => Some(Self::Middle),
            "random" | "rand" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::Middle => "middle",
            Self::Random => "random",
        }
    }

    pub fn choose(self, len: usize, rng: &mut dyn RandomSource) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Self::First => 0,
            Self::Last => len - 1,
            Self::Middle => len / 2,
            Self::Random => rng.pick_index(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokerdraw_core::RngState;

    #[test]
    fn fixed_policies_pick_predictable_slots() {
        let mut rng = RngState::from_seed(1);
        assert_eq!(PickPolicy::First.choose(5, &mut rng), 0);
        assert_eq!(PickPolicy::Last.choose(5, &mut rng), 4);
        assert_eq!(PickPolicy::Middle.choose(5, &mut rng), 2);
        assert_eq!(PickPolicy::Last.choose(0, &mut rng), 0);
    }

    #[test]
    fn random_policy_stays_in_range() {
        let mut rng = RngState::from_seed(42);
        for len in 1..30 {
            assert!(PickPolicy::Random.choose(len, &mut rng) < len);
        }
    }

    #[test]
    fn random_policy_repeats_for_a_seed() {
        let picks = |seed| {
            let mut rng = RngState::from_seed(seed);
            (0..8)
                .map(|_| PickPolicy::Random.choose(13, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(5), picks(5));
    }

    #[test]
    fn parse_accepts_labels() {
        for policy in [
            PickPolicy::First,
            PickPolicy::Last,
            PickPolicy::Middle,
            PickPolicy::Random,
        ] {
            assert_eq!(PickPolicy::parse(policy.label()), Some(policy));
        }
        assert_eq!(PickPolicy::parse(" RAND "), Some(PickPolicy::Random));
        assert_eq!(PickPolicy::parse("best"), None);
    }
}
