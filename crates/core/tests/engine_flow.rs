use jokerdraw_core::{
    Card, DrawOrigin, Event, FollowUp, GameSession, Phase, Rank, RngState, ScriptedRng,
    SkipReason, Suit, TableConfig, TurnStep, SEAT_COUNT,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::standard(suit, rank)
}

fn watch_from(first_seat: usize) -> TableConfig {
    TableConfig {
        first_seat,
        ..TableConfig::watch()
    }
}

fn drain(session: &mut GameSession) -> Vec<Event> {
    session.events.drain().collect()
}

/// Jumps straight to the next scheduled continuation, or nudges the clock while idle.
fn step(session: &mut GameSession) {
    let dt = session.time_to_next().unwrap_or(16).max(1);
    session.update(dt);
}

fn run_until(session: &mut GameSession, done: impl Fn(&GameSession) -> bool) {
    for _ in 0..100_000 {
        if done(session) {
            return;
        }
        step(session);
    }
    panic!("condition never reached: {session:?}");
}

#[test]
fn empty_upstream_skips_straight_to_next_seat() {
    let mut session = GameSession::from_hands(
        watch_from(2),
        Box::new(ScriptedRng::new([])),
        [
            vec![card(Rank::Three, Suit::Spades), Card::joker()],
            vec![],
            vec![card(Rank::Five, Suit::Spades)],
            vec![card(Rank::Seven, Suit::Spades)],
        ],
    )
    .expect("session");
    let events = drain(&mut session);
    assert!(events.contains(&Event::TurnSkipped {
        seat: 2,
        reason: SkipReason::UpstreamEmpty
    }));
    assert_eq!(session.current_seat, 3);
    assert_eq!(session.motion_count(), 0);
    assert_eq!(
        session.pending_follow_ups(),
        vec![FollowUp::ComputerDraw { seat: 3, source: 2 }]
    );
}

#[test]
fn computer_draw_changes_ownership_only_on_arrival() {
    let mut session = GameSession::from_hands(
        watch_from(1),
        Box::new(ScriptedRng::new([1])),
        [
            vec![card(Rank::Three, Suit::Spades), card(Rank::Five, Suit::Diamonds)],
            vec![card(Rank::Five, Suit::Clubs)],
            vec![card(Rank::Eight, Suit::Spades), Card::joker()],
            vec![card(Rank::Ten, Suit::Hearts)],
        ],
    )
    .expect("session");
    let timing = session.config.timing.clone();

    session.update(timing.think_ms);
    assert_eq!(session.step, TurnStep::DrawAnimating);
    assert_eq!(session.motion_count(), 1);
    assert_eq!(
        session.pending_follow_ups(),
        vec![FollowUp::AppendToHand {
            seat: 1,
            origin: DrawOrigin::Hand { source: 0, index: 1 }
        }]
    );

    session.update(timing.draw_ms - 1);
    assert_eq!(session.players[0].hand.len(), 2);
    assert_eq!(session.players[1].hand.len(), 1);

    session.update(1);
    assert_eq!(session.players[0].hand.cards(), &[card(Rank::Three, Suit::Spades)]);
    assert_eq!(session.players[1].hand.len(), 2);
    assert_eq!(session.step, TurnStep::PairResolving);
    // The pair is still in hand until both cards reach the centre.
    session.update(timing.settle_ms);
    assert_eq!(session.motion_count(), 2);
    assert_eq!(session.players[1].hand.len(), 2);
    session.update(timing.pair_ms);
    assert!(session.players[1].hand.is_empty());
    assert_eq!(session.ranking.order(), &[1]);
    assert_eq!(session.card_count().discarded, 2);

    let events = drain(&mut session);
    assert!(events.contains(&Event::PairDiscarded {
        seat: 1,
        rank: Rank::Five
    }));
    assert!(events.contains(&Event::PlayerFinished { seat: 1, place: 1 }));

    run_until(&mut session, |s| s.current_seat == 3 && s.step == TurnStep::AwaitingDraw);
    let events = drain(&mut session);
    assert!(events.contains(&Event::TurnSkipped {
        seat: 2,
        reason: SkipReason::UpstreamEmpty
    }));
}

fn human_table() -> GameSession {
    GameSession::from_hands(
        TableConfig::default(),
        Box::new(ScriptedRng::new([])),
        [
            vec![card(Rank::Two, Suit::Spades), card(Rank::Nine, Suit::Hearts)],
            vec![card(Rank::Four, Suit::Spades)],
            vec![card(Rank::Six, Suit::Spades)],
            vec![
                card(Rank::Two, Suit::Hearts),
                card(Rank::Seven, Suit::Clubs),
                Card::joker(),
                card(Rank::Eight, Suit::Diamonds),
            ],
        ],
    )
    .expect("session")
}

#[test]
fn human_turn_exposes_the_upstream_hand_as_a_pool() {
    let session = human_table();
    assert!(session.is_awaiting_pick());
    assert!(session.players[3].hand.is_empty());
    assert!(session.ranking.is_empty());
    let pool = session.draw_pool().expect("pool");
    assert_eq!(pool.source, 3);
    assert_eq!(pool.entries.len(), 4);
    let count = session.card_count();
    assert_eq!(count.in_flight, 4);
    assert_eq!(count.total(), 8);
}

#[test]
fn human_pick_returns_the_rest_upstream() {
    let mut session = human_table();
    session.pick_pool_card(0).expect("pick");
    assert!(!session.is_awaiting_pick());
    assert!(session.pick_pool_card(0).is_err());

    run_until(&mut session, |s| s.draw_pool().is_none());
    assert_eq!(
        session.players[0].hand.cards(),
        &[card(Rank::Nine, Suit::Hearts)]
    );
    assert_eq!(
        session.players[3].hand.cards(),
        &[
            card(Rank::Seven, Suit::Clubs),
            Card::joker(),
            card(Rank::Eight, Suit::Diamonds)
        ]
    );
    assert_eq!(session.discard.len(), 2);
    assert!(session.ranking.is_empty());
    let events = drain(&mut session);
    assert!(events.contains(&Event::PoolReturned { seat: 3, cards: 3 }));
    assert!(events.contains(&Event::CardDrawn {
        seat: 0,
        source: 3,
        card: card(Rank::Two, Suit::Hearts)
    }));
}

#[test]
fn stalemate_pool_opens_over_the_nearest_holder() {
    let mut session = GameSession::from_hands(
        TableConfig::default(),
        Box::new(ScriptedRng::new([])),
        [
            vec![card(Rank::Three, Suit::Spades), card(Rank::Five, Suit::Diamonds)],
            vec![],
            vec![
                card(Rank::Four, Suit::Spades),
                Card::joker(),
                card(Rank::Nine, Suit::Hearts),
            ],
            vec![],
        ],
    )
    .expect("session");
    assert!(session.ranking.contains(1) && session.ranking.contains(3));
    assert!(session.is_awaiting_pick());
    let pool = session.draw_pool().expect("pool");
    assert_eq!(pool.source, 2);
    assert_eq!(pool.entries.len(), 3);
    assert!(session.players[2].hand.is_empty());
    assert!(drain(&mut session).contains(&Event::TurnStarted { seat: 0, source: 2 }));

    session.pick_pool_card(0).expect("pick");
    run_until(&mut session, |s| s.draw_pool().is_none());
    assert_eq!(
        session.players[0].hand.cards(),
        &[
            card(Rank::Three, Suit::Spades),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Four, Suit::Spades)
        ]
    );
    assert_eq!(
        session.players[2].hand.cards(),
        &[Card::joker(), card(Rank::Nine, Suit::Hearts)]
    );
    assert!(session.players[3].hand.is_empty());
    assert_eq!(session.card_count().total(), 5);
    assert!(drain(&mut session).contains(&Event::PoolReturned { seat: 2, cards: 2 }));
}

#[test]
fn pointer_click_picks_the_card_under_it() {
    let mut session = human_table();
    let spread = session.config.timing.pool_spread_ms;
    session.update(spread);
    let at = session
        .draw_pool()
        .and_then(|pool| pool.position(2, session.now_ms(), spread))
        .expect("pool slot");
    assert_eq!(session.pool_card_at(at.x + 5.0, at.y + 5.0), Some(2));
    assert!(!session.on_pointer_click(1.0, 1.0));
    assert!(session.on_pointer_click(at.x + 5.0, at.y + 5.0));
    assert_eq!(
        session.draw_pool().and_then(|pool| pool.picked),
        Some(Card::joker())
    );
    assert!(!session.on_pointer_click(at.x + 5.0, at.y + 5.0));

    run_until(&mut session, |s| s.draw_pool().is_none());
    assert_eq!(session.players[0].hand.len(), 3);
    assert_eq!(session.players[3].hand.len(), 3);
}

#[test]
fn hovering_lifts_the_pool_card() {
    let mut session = human_table();
    let spread = session.config.timing.pool_spread_ms;
    session.update(spread);
    let at = session
        .draw_pool()
        .and_then(|pool| pool.position(1, session.now_ms(), spread))
        .expect("pool slot");
    session.on_pointer_move(at.x + 10.0, at.y + 50.0);
    for _ in 0..30 {
        session.update(16);
    }
    let pool = session.draw_pool().expect("pool");
    assert!(pool.entries[1].hover < -15.0);
    assert_eq!(pool.entries[0].hover, 0.0);
}

#[test]
fn clicks_are_ignored_without_a_human_turn() {
    let mut session = GameSession::with_seed(TableConfig::watch(), 3).expect("session");
    assert!(!session.on_pointer_click(400.0, 350.0));
    assert!(session.pick_pool_card(0).is_err());
}

fn assert_game_invariants(seed: u64, config: TableConfig) {
    let mut session = GameSession::create(config, Box::new(RngState::from_seed(seed)))
        .expect("session");
    let total = session.card_count().total();
    assert_eq!(total, 53);
    let mut seen_ranking: Vec<usize> = session.ranking.order().to_vec();
    for _ in 0..200_000 {
        if session.phase == Phase::Ended {
            break;
        }
        if session.is_awaiting_pick() {
            let len = session.draw_pool().map(|pool| pool.entries.len()).unwrap_or(0);
            session.pick_pool_card(len / 2).expect("pick");
        }
        step(&mut session);
        assert_eq!(session.card_count().total(), total, "seed {seed}");
        let ranking = session.ranking.order();
        assert!(ranking.starts_with(&seen_ranking), "seed {seed}");
        seen_ranking = ranking.to_vec();
    }
    assert_eq!(session.phase, Phase::Ended, "seed {seed}");
    let holders: Vec<usize> = (0..SEAT_COUNT).filter(|seat| session.holds_cards(*seat)).collect();
    assert_eq!(holders.len(), 1, "seed {seed}");
    assert_eq!(session.ranking.last(), Some(holders[0]));
    let mut sorted = session.ranking.order().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3]);
    let loser = holders[0];
    assert!(session.players[loser]
        .hand
        .cards()
        .iter()
        .all(Card::is_joker));
}

macro_rules! full_game_case {
    ($name:ident, $seed:expr, $config:expr) => {
        #[test]
        fn $name() {
            assert_game_invariants($seed, $config);
        }
    };
}

full_game_case!(watch_game_seed_1, 1, TableConfig::watch());
full_game_case!(watch_game_seed_2, 2, TableConfig::watch());
full_game_case!(watch_game_seed_99, 99, TableConfig::watch());
full_game_case!(watch_game_seed_4096, 4096, TableConfig::watch());
full_game_case!(human_game_seed_1, 1, TableConfig::default());
full_game_case!(human_game_seed_7, 7, TableConfig::default());
full_game_case!(human_game_seed_31337, 31337, TableConfig::default());
full_game_case!(
    human_game_hidden_pool,
    5,
    TableConfig {
        reveal_draw_pool: false,
        ..TableConfig::default()
    }
);
full_game_case!(
    human_at_seat_two,
    11,
    TableConfig {
        human_seat: Some(2),
        first_seat: 1,
        ..TableConfig::default()
    }
);

#[derive(Default)]
struct RecordingView {
    hands: Vec<(usize, usize, bool)>,
    faces: usize,
    backs: usize,
    message: String,
}

impl jokerdraw_core::TableView for RecordingView {
    fn display_card(&mut self, _card: &Card, _at: jokerdraw_core::Point, _face_up: bool) {
        self.faces += 1;
    }

    fn display_card_back(&mut self, _at: jokerdraw_core::Point, _rotation: f32) {
        self.backs += 1;
    }

    fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    fn display_hand(
        &mut self,
        _layout: &jokerdraw_core::TableLayout,
        seat: usize,
        cards: &[Card],
        face_up: bool,
    ) {
        self.hands.push((seat, cards.len(), face_up));
    }
}

#[test]
fn render_visits_every_seat_then_the_pool() {
    let session = human_table();
    let mut view = RecordingView::default();
    session.render(&mut view);
    assert_eq!(
        view.hands,
        vec![(0, 2, true), (1, 1, false), (2, 1, false), (3, 0, false)]
    );
    assert_eq!(view.faces, 4);
    assert_eq!(view.backs, 0);
    assert_eq!(view.message, "Pick a card from AI-3");
}
