use super::*;
use crate::{remove_all_pairs, Deck, Event, Hand, RngState, SEAT_COUNT};
use tracing::info;

impl GameSession {
    /// Shuffles a fresh deck, deals it and starts the first turn.
    pub fn create(config: TableConfig, rng: Box<dyn RandomSource>) -> Result<Self, SessionError> {
        let mut session = Self::blank(config, rng)?;
        session.start_new_game();
        Ok(session)
    }

    pub fn with_seed(config: TableConfig, seed: u64) -> Result<Self, SessionError> {
        Self::create(config, Box::new(RngState::from_seed(seed)))
    }

    /// Starts from a prepared deal instead of shuffling. Opening pairs are still removed.
    pub fn from_hands(
        config: TableConfig,
        rng: Box<dyn RandomSource>,
        hands: [Vec<Card>; SEAT_COUNT],
    ) -> Result<Self, SessionError> {
        let mut session = Self::blank(config, rng)?;
        session.begin_setup(hands);
        Ok(session)
    }

    /// Throws the current game away and deals a new one with the same config.
    pub fn reset(&mut self) {
        self.start_new_game();
    }

    fn blank(config: TableConfig, rng: Box<dyn RandomSource>) -> Result<Self, SessionError> {
        config.validate()?;
        let layout = TableLayout::new(config.canvas.clone());
        Ok(Self {
            layout,
            players: Vec::new(),
            current_seat: config.first_seat,
            ranking: Ranking::default(),
            phase: Phase::Setup,
            step: TurnStep::TurnStart,
            discard: Vec::new(),
            message: String::new(),
            events: EventBus::default(),
            pool: None,
            scheduler: Scheduler::new(),
            pointer: None,
            rng,
            config,
        })
    }

    fn start_new_game(&mut self) {
        let mut deck = Deck::standard53();
        deck.shuffle(self.rng.as_mut());
        self.begin_setup(deck.deal());
    }

    fn begin_setup(&mut self, hands: [Vec<Card>; SEAT_COUNT]) {
        self.phase = Phase::Setup;
        self.step = TurnStep::TurnStart;
        self.ranking = Ranking::default();
        self.discard.clear();
        self.message.clear();
        self.events = EventBus::default();
        self.pool = None;
        self.scheduler = Scheduler::new();
        self.pointer = None;
        self.players.clear();
        for (seat, cards) in hands.into_iter().enumerate() {
            self.events.push(Event::CardsDealt {
                seat,
                count: cards.len(),
            });
            self.players.push(Player {
                seat,
                is_human: self.config.is_human(seat),
                hand: Hand::new(cards),
            });
        }
        self.remove_initial_pairs();
        self.record_finishers();
        self.phase = Phase::Playing;
        self.current_seat = self.config.first_seat;
        info!(
            human_seat = ?self.config.human_seat,
            first_seat = self.current_seat,
            "game dealt"
        );
        self.begin_turn();
    }

    fn remove_initial_pairs(&mut self) {
        for player in &mut self.players {
            let removed = remove_all_pairs(&mut player.hand);
            if removed.is_empty() {
                continue;
            }
            self.events.push(Event::InitialPairsRemoved {
                seat: player.seat,
                pairs: removed.len(),
            });
            for (first, second) in removed {
                self.discard.push(first);
                self.discard.push(second);
            }
        }
    }
}
