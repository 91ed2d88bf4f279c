//! HUD and overlay text
//!
//! Pure string building from a snapshot; the presentation layer picks fonts
//! and positions.

use crate::sim::{Phase, Snapshot};
use crate::tuning::Tuning;

/// Centered overlay shown outside active play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub subtitle: String,
    pub tip: String,
}

/// HUD bar items, left to right
pub fn hud_items(snapshot: &Snapshot) -> Vec<String> {
    let mut items = vec![
        format!("Score: {}", snapshot.score),
        format!("Hits: {}", snapshot.hits),
        format!("Misses: {}", snapshot.misses),
        format!("Timeouts: {}", snapshot.timeouts),
        format!("Acc: {:.1}%", snapshot.accuracy()),
    ];
    match snapshot.time_left() {
        Some(secs) => items.push(format!("Time: {secs}s")),
        None => items.push(format!("Time: {:.0}s", snapshot.elapsed)),
    }
    items
}

/// Overlay for the current phase, if any. Score hints follow `tuning`.
pub fn overlay(snapshot: &Snapshot, tuning: &Tuning) -> Option<Overlay> {
    match snapshot.phase {
        Phase::Idle => Some(Overlay {
            title: "SHARPSHOT".to_string(),
            subtitle: format!(
                "Click to start. Bullseye {:+}, Miss {}, Timeout {}.",
                tuning.ring_scores[0], tuning.miss_score, tuning.timeout_score
            ),
            tip: "ESC: quit   |   R: reset best".to_string(),
        }),
        Phase::RoundOver => Some(Overlay {
            title: "ROUND OVER".to_string(),
            subtitle: format!("Score: {}    Best: {}", snapshot.score, snapshot.best_score),
            tip: "Click to play again   |   R: reset best   |   ESC: quit".to_string(),
        }),
        Phase::Paused => Some(Overlay {
            title: "PAUSED".to_string(),
            subtitle: String::new(),
            tip: "P: resume".to_string(),
        }),
        Phase::Playing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Session;
    use glam::Vec2;

    #[test]
    fn test_hud_items() {
        let mut session = Session::new(
            Tuning {
                spawn_interval_start: 100.0,
                spawn_interval_min: 100.0,
                ..Tuning::default()
            },
            1,
        )
        .unwrap();
        session.handle_click(Vec2::ZERO, 0.0);
        session.place_target(Vec2::new(100.0, 100.0), 20.0, 10.0);
        session.place_target(Vec2::new(300.0, 300.0), 20.0, 10.0);
        session.handle_click(Vec2::new(100.0, 100.0), 0.1);
        session.handle_click(Vec2::new(300.0, 300.0), 0.2);
        session.handle_click(Vec2::new(800.0, 500.0), 0.3);
        session.update(0.0, 3.4);

        let items = hud_items(&session.snapshot());
        assert_eq!(
            items,
            vec![
                "Score: 15",
                "Hits: 2",
                "Misses: 1",
                "Timeouts: 0",
                "Acc: 66.7%",
                "Time: 11s",
            ]
        );
    }

    #[test]
    fn test_overlay_per_phase() {
        let mut session = Session::with_seed(1);
        let title = |s: &Session| overlay(&s.snapshot(), s.tuning()).map(|o| o.title);

        assert_eq!(title(&session).as_deref(), Some("SHARPSHOT"));
        session.handle_click(Vec2::ZERO, 0.0);
        assert_eq!(title(&session), None);
        session.toggle_pause();
        assert_eq!(title(&session).as_deref(), Some("PAUSED"));
        session.toggle_pause();
        session.update(0.0, 15.0);
        let over = overlay(&session.snapshot(), session.tuning()).unwrap();
        assert_eq!(over.title, "ROUND OVER");
        assert!(over.subtitle.starts_with("Score: "));
    }

    #[test]
    fn test_idle_overlay_follows_tuning() {
        let session = Session::with_seed(1);
        let default = overlay(&session.snapshot(), session.tuning()).unwrap();
        assert_eq!(
            default.subtitle,
            "Click to start. Bullseye +10, Miss -5, Timeout -3."
        );

        let tuning = Tuning {
            ring_scores: [25, 8, 2],
            miss_score: -7,
            timeout_score: -4,
            ..Tuning::default()
        };
        let custom = overlay(&session.snapshot(), &tuning).unwrap();
        assert_eq!(
            custom.subtitle,
            "Click to start. Bullseye +25, Miss -7, Timeout -4."
        );
    }

    #[test]
    fn test_endless_shows_elapsed() {
        let mut session = Session::new(Tuning::endless(), 1).unwrap();
        session.handle_click(Vec2::ZERO, 0.0);
        session.update(0.0, 42.2);
        assert_eq!(hud_items(&session.snapshot()).last().map(String::as_str), Some("Time: 42s"));
    }
}
