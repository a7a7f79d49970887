//! End-to-end session scenarios

use obstacle_course::Tuning;
use obstacle_course::sim::{
    Collectible, GameEvent, GamePhase, GemColor, ObstacleKind, Session, TickInput,
};

fn idle() -> TickInput {
    TickInput::default()
}

fn press(f: impl FnOnce(&mut TickInput)) -> TickInput {
    let mut input = TickInput::default();
    f(&mut input);
    input
}

/// Tuning where obstacles are exactly as wide as the player
fn wide_obstacles() -> Tuning {
    let mut tuning = Tuning::default();
    tuning.obstacles.width = tuning.player_width;
    tuning
}

#[test]
fn lethal_collision_ends_run_once() {
    let tuning = wide_obstacles();
    let mut session = Session::new(tuning.clone(), 7).unwrap();
    let (x, h) = (session.player().x, session.player().height);
    session.world_mut().obstacles.push(x, h, ObstacleKind::Triple);

    let obstacle = &session.world().obstacles.obstacles()[0];
    assert_eq!(obstacle.y, session.player().y());
    assert_eq!(obstacle.width, session.player().width);

    let mut events = Vec::new();
    assert!(session.resolve_collisions(&mut events));
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(events, vec![GameEvent::Death { score: 0 }]);

    // No second report once the run is over
    assert!(!session.resolve_collisions(&mut events));
    let outcome = session.tick(&idle());
    assert!(outcome.events.is_empty());
    assert_eq!(events.len(), 1);
}

#[test]
fn lethal_tick_through_run_loop() {
    let mut session = Session::new(Tuning::default(), 7).unwrap();
    for _ in 0..5 {
        session.tick(&idle());
    }
    let (x, h) = (session.player().x, session.player().height);
    let speed = session.speed();
    // Lands on the player after this tick's scroll
    session.world_mut().obstacles.push(x + speed, h, ObstacleKind::Simple);

    let outcome = session.tick(&idle());
    let deaths: Vec<_> = outcome
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::Death { .. }))
        .collect();
    // The fatal tick still counts as survived
    assert_eq!(deaths, vec![&GameEvent::Death { score: 6 }]);
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.score(), 6);
    assert_eq!(session.high_scores().top_score(), Some(6));
}

#[test]
fn multi_pickup_in_one_tick() {
    let tuning = Tuning::default();
    let mut session = Session::new(tuning.clone(), 3).unwrap();
    let (x, y) = (session.player().x, session.player().y());
    let items = &tuning.collectibles;
    session
        .world_mut()
        .collectibles
        .push(Collectible::coin(x + 5.0, y + 5.0, items));
    session
        .world_mut()
        .collectibles
        .push(Collectible::gem(x + 10.0, y + 20.0, GemColor::Green, items));

    let mut events = Vec::new();
    assert!(!session.resolve_collisions(&mut events));
    assert_eq!(session.bonus(), 60);
    assert_eq!(session.world().collected_count, 2);
    assert_eq!(
        events,
        vec![
            GameEvent::CoinCollected { value: 10 },
            GameEvent::GemCollected {
                color: GemColor::Green,
                value: 50
            },
        ]
    );
    assert!(session
        .world()
        .collectibles
        .collectibles()
        .iter()
        .all(|c| c.collected));

    // Collected items vanish from the render snapshot immediately
    assert!(session.snapshot().collectibles.is_empty());
    assert_eq!(session.phase(), GamePhase::Playing);
}

#[test]
fn pause_freezes_simulation() {
    let mut paused = Session::new(Tuning::default(), 99).unwrap();
    let mut control = Session::new(Tuning::default(), 99).unwrap();
    for i in 0..50 {
        let input = press(|t| t.jump = i % 20 == 0);
        paused.tick(&input);
        control.tick(&input);
    }

    let outcome = paused.tick(&press(|t| t.pause = true));
    assert_eq!(outcome.events, vec![GameEvent::Paused]);
    let frozen = paused.snapshot();
    for _ in 0..10 {
        let outcome = paused.tick(&press(|t| t.jump = true));
        assert!(outcome.events.is_empty());
        assert_eq!(paused.snapshot(), frozen);
    }
    assert_eq!(paused.score(), 50);

    let outcome = paused.tick(&press(|t| t.resume = true));
    assert_eq!(outcome.events, vec![GameEvent::Resumed]);
    control.tick(&idle());
    assert_eq!(paused.snapshot(), control.snapshot());
}

#[test]
fn pause_and_resume_outside_their_phases_are_noops() {
    let mut session = Session::new(Tuning::default(), 1).unwrap();
    let outcome = session.tick(&press(|t| t.resume = true));
    assert!(outcome.events.is_empty());
    assert_eq!(session.phase(), GamePhase::Playing);

    session.tick(&press(|t| t.pause = true));
    let outcome = session.tick(&press(|t| t.pause = true));
    assert!(outcome.events.is_empty());
    assert_eq!(session.phase(), GamePhase::Paused);
}

#[test]
fn restart_rebuilds_world() {
    let tuning = wide_obstacles();
    let mut session = Session::new(tuning, 5).unwrap();
    for _ in 0..80 {
        session.tick(&idle());
    }
    // Restart is ignored mid-run
    let outcome = session.tick(&press(|t| t.restart = true));
    assert!(!outcome.events.contains(&GameEvent::RunStarted));

    let (x, h) = (session.player().x, session.player().height);
    session.world_mut().obstacles.push(x, h, ObstacleKind::Double);
    session.resolve_collisions(&mut Vec::new());
    assert_eq!(session.phase(), GamePhase::GameOver);

    let outcome = session.tick(&press(|t| t.restart = true));
    assert_eq!(outcome.events, vec![GameEvent::RunStarted]);
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.state_machine().previous(), Some(GamePhase::GameOver));
    assert_eq!(session.score(), 1);
    assert_eq!(session.bonus(), 0);
    assert!(session.world().obstacles.obstacles().is_empty());
    assert!(session.player().on_ground());
    assert_eq!(session.high_scores().entries.len(), 1);
}

#[test]
fn menu_then_start_begins_fresh_run() {
    let mut session = Session::new(Tuning::default(), 8).unwrap();
    for _ in 0..30 {
        session.tick(&idle());
    }
    let outcome = session.tick(&press(|t| t.menu = true));
    assert_eq!(outcome.events, vec![GameEvent::EnteredMenu]);
    assert_eq!(session.score(), 30);

    session.tick(&press(|t| t.start = true));
    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.score(), 1);
}

#[test]
fn same_seed_same_run() {
    let mut a = Session::new(Tuning::default(), 2024).unwrap();
    let mut b = Session::new(Tuning::default(), 2024).unwrap();
    for i in 0..1500 {
        let input = press(|t| t.jump = i % 37 == 0);
        let ea = a.tick(&input);
        let eb = b.tick(&input);
        assert_eq!(ea, eb);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn entities_scroll_and_eventually_spawn() {
    let mut session = Session::new(Tuning::default(), 77).unwrap();
    let mut saw_obstacle = false;
    let mut saw_collectible = false;
    for _ in 0..200 {
        session.tick(&press(|t| t.jump = true));
        if session.phase() != GamePhase::Playing {
            break;
        }
        let snap = session.snapshot();
        saw_obstacle |= !snap.obstacles.is_empty();
        saw_collectible |= !snap.collectibles.is_empty();
        for o in &snap.obstacles {
            assert!(o.x + o.width >= 0.0);
        }
    }
    assert!(saw_obstacle);
    assert!(saw_collectible);
}
