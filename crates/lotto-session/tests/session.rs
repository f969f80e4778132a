use std::time::Duration;

use lotto_engine::{DrawingEngine, EngineState};
use lotto_session::{PlaySession, SessionConfig, StopHandle, StopReason};

fn instant_config() -> SessionConfig {
    SessionConfig {
        pace_ms: 0,
        ..SessionConfig::default()
    }
}

/// Engine whose picks equal the winners of its very next drawing
fn engine_winning_next(seed: u64) -> DrawingEngine {
    let mut twin = DrawingEngine::seeded(seed);
    let winners = twin.generate_unique_picks();

    let mut engine = DrawingEngine::seeded(seed);
    engine.set_picks(winners.as_slice()).unwrap();
    engine
}

#[tokio::test]
async fn test_stops_on_jackpot() {
    let session = PlaySession::new(engine_winning_next(99), instant_config());
    let report = session.run(&StopHandle::new(), |_| {}).await;

    assert_eq!(report.reason, StopReason::Jackpot);
    assert_eq!(report.engine.total_drawings(), 1);
    assert_eq!(report.engine.state(), EngineState::Won);
    let last = report.last.unwrap();
    assert!(last.jackpot);
    assert_eq!(last.matches, 6);
}

#[tokio::test]
async fn test_keeps_playing_after_jackpot_when_asked() {
    let config = SessionConfig {
        stop_on_jackpot: false,
        max_drawings: Some(3),
        ..instant_config()
    };
    let session = PlaySession::new(engine_winning_next(99), config);
    let report = session.run(&StopHandle::new(), |_| {}).await;

    assert_eq!(report.reason, StopReason::DrawLimit);
    assert_eq!(report.engine.total_drawings(), 3);
    assert!(report.engine.is_jackpot());
}

#[tokio::test]
async fn test_stops_at_draw_limit() {
    let mut engine = DrawingEngine::seeded(7);
    engine.set_picks(&[7, 14, 21, 28, 35, 42]).unwrap();
    let config = SessionConfig {
        stop_on_jackpot: false,
        max_drawings: Some(25),
        ..instant_config()
    };

    let mut seen = Vec::new();
    let report = PlaySession::new(engine, config)
        .run(&StopHandle::new(), |snapshot| seen.push(snapshot.tally.drawings))
        .await;

    assert_eq!(report.reason, StopReason::DrawLimit);
    assert_eq!(report.engine.total_drawings(), 25);
    assert_eq!(seen, (1..=25).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_stop_before_run() {
    let stop = StopHandle::new();
    stop.stop();

    let report = PlaySession::new(DrawingEngine::seeded(1), instant_config())
        .run(&stop, |_| {})
        .await;

    assert_eq!(report.reason, StopReason::Cancelled);
    assert!(report.last.is_none());
    assert_eq!(report.engine.total_drawings(), 0);
}

#[tokio::test]
async fn test_stop_from_callback() {
    let stop = StopHandle::new();
    let mut engine = DrawingEngine::seeded(5);
    engine.generate_quick_pick();
    let config = SessionConfig {
        stop_on_jackpot: false,
        ..instant_config()
    };

    let report = PlaySession::new(engine, config)
        .run(&stop, |snapshot| {
            if snapshot.tally.drawings == 3 {
                stop.stop();
            }
        })
        .await;

    assert_eq!(report.reason, StopReason::Cancelled);
    assert_eq!(report.engine.total_drawings(), 3);
}

#[tokio::test]
async fn test_stop_interrupts_pacing() {
    let stop = StopHandle::new();
    let mut engine = DrawingEngine::seeded(11);
    engine.generate_quick_pick();
    let config = SessionConfig {
        pace_ms: 60_000,
        stop_on_jackpot: false,
        max_drawings: None,
    };

    let remote = stop.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        remote.stop();
    });

    let report = tokio::time::timeout(
        Duration::from_secs(5),
        PlaySession::new(engine, config).run(&stop, |_| {}),
    )
    .await
    .expect("stop should interrupt the pacing sleep");

    assert_eq!(report.reason, StopReason::Cancelled);
    assert_eq!(report.engine.total_drawings(), 1);
}

#[tokio::test]
async fn test_unpaced_run_sees_remote_stop() {
    let stop = StopHandle::new();
    let mut engine = DrawingEngine::seeded(13);
    engine.set_picks(&[1, 2, 3, 4, 5, 6]).unwrap();
    let config = SessionConfig {
        stop_on_jackpot: false,
        max_drawings: Some(200_000),
        ..instant_config()
    };

    let remote = stop.clone();
    tokio::spawn(async move {
        remote.stop();
    });

    let report = PlaySession::new(engine, config).run(&stop, |_| {}).await;

    assert_eq!(report.reason, StopReason::Cancelled);
    assert!(report.engine.total_drawings() < 200_000);
}

#[tokio::test]
async fn test_subscribers_see_every_drawing() {
    let mut engine = DrawingEngine::seeded(3);
    engine.generate_quick_pick();
    let config = SessionConfig {
        stop_on_jackpot: false,
        max_drawings: Some(5),
        ..instant_config()
    };

    let session = PlaySession::new(engine, config);
    let mut rx = session.subscribe();
    let report = session.run(&StopHandle::new(), |_| {}).await;

    let mut drawings = Vec::new();
    while let Ok(snapshot) = rx.try_recv() {
        assert_eq!(snapshot.winners.len(), 6);
        drawings.push(snapshot.tally.drawings);
    }
    assert_eq!(drawings, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.last.unwrap().tally.drawings, 5);
}

#[tokio::test]
async fn test_engine_reusable_after_session() {
    let session = PlaySession::new(engine_winning_next(99), instant_config());
    let mut report = session.run(&StopHandle::new(), |_| {}).await;

    report.engine.reset();
    assert_eq!(report.engine.state(), EngineState::Idle);
    assert_eq!(report.engine.total_drawings(), 0);
}
