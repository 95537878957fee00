//! Integration test: the correct-answer flow end to end.
//!
//! Walks a profile through multi-day answer sequences and checks the streak
//! laws, the once-per-day bonus, level recomputation, and badge unlocks as
//! they fall out of the orchestrated flow.

use chrono::NaiveDate;
use studypath::{BadgeKey, Profile, ProgressionEngine, ProgressionEvent};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn bonus_of(events: &[ProgressionEvent]) -> u64 {
    events
        .iter()
        .find_map(|e| match e {
            ProgressionEvent::StreakBonus { amount } => Some(*amount),
            _ => None,
        })
        .unwrap_or(0)
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_first_answer_starts_streak_and_grants_bonus() {
    // Scenario: fresh profile, one correct answer worth 400 XP
    let engine = ProgressionEngine::new();
    let profile = Profile::new();

    let (next, events) = engine
        .record_correct_answer(&profile, 400, date(2026, 3, 1))
        .unwrap();

    assert_eq!(next.streak, 1);
    assert_eq!(bonus_of(&events), 50);
    assert_eq!(next.xp, 450);
    assert_eq!(next.level, engine.curve().level_for(450));
    assert_eq!(next.last_activity, Some(date(2026, 3, 1)));
}

#[test]
fn test_second_answer_same_day_grants_no_bonus() {
    let engine = ProgressionEngine::new();
    let day1 = date(2026, 3, 1);
    let (after_first, _) = engine
        .record_correct_answer(&Profile::new(), 400, day1)
        .unwrap();

    let (next, events) = engine.record_correct_answer(&after_first, 400, day1).unwrap();

    assert_eq!(next.streak, 1, "streak must not grow within a day");
    assert_eq!(bonus_of(&events), 0);
    assert_eq!(next.xp, 850);
}

#[test]
fn test_next_day_continues_streak_with_higher_bonus() {
    let engine = ProgressionEngine::new();
    let (day1_profile, _) = engine
        .record_correct_answer(&Profile::new(), 400, date(2026, 3, 1))
        .unwrap();
    let (day1_profile, _) = engine
        .record_correct_answer(&day1_profile, 400, date(2026, 3, 1))
        .unwrap();

    let (next, events) = engine
        .record_correct_answer(&day1_profile, 400, date(2026, 3, 2))
        .unwrap();

    assert_eq!(next.streak, 2);
    assert_eq!(bonus_of(&events), 70);
    assert_eq!(next.xp, 850 + 400 + 70);
}

#[test]
fn test_gap_of_more_than_one_day_resets_streak() {
    let engine = ProgressionEngine::new();
    let mut profile = Profile::new();
    for day in 1..=2 {
        let (next, _) = engine
            .record_correct_answer(&profile, 400, date(2026, 3, day))
            .unwrap();
        profile = next;
    }
    assert_eq!(profile.streak, 2);

    let (next, events) = engine
        .record_correct_answer(&profile, 400, date(2026, 3, 5))
        .unwrap();
    assert_eq!(next.streak, 1);
    assert_eq!(bonus_of(&events), 50);
}

// =============================================================================
// Properties across longer sequences
// =============================================================================

#[test]
fn test_level_is_monotonic_and_always_consistent() {
    let engine = ProgressionEngine::new();
    let mut profile = Profile::new();
    let mut previous_level = profile.level;

    for day in 1..=28 {
        for _ in 0..3 {
            let (next, _) = engine
                .record_correct_answer(&profile, 350, date(2026, 2, day))
                .unwrap();
            profile = next;
            assert!(profile.level >= previous_level);
            assert_eq!(profile.level, engine.curve().level_for(profile.xp));
            previous_level = profile.level;
        }
    }
}

#[test]
fn test_level_up_event_fires_exactly_at_threshold() {
    let engine = ProgressionEngine::new();
    let day = date(2026, 3, 1);

    // First answer: 50 bonus + 400 base = 450, still level 1
    let (profile, events) = engine
        .record_correct_answer(&Profile::new(), 400, day)
        .unwrap();
    assert!(!events
        .iter()
        .any(|e| matches!(e, ProgressionEvent::LevelUp { .. })));

    // Second answer crosses the 500 XP threshold into level 2
    let (profile, events) = engine.record_correct_answer(&profile, 100, day).unwrap();
    assert_eq!(profile.level, 2);
    assert!(events.contains(&ProgressionEvent::LevelUp { new_level: 2 }));
}

#[test]
fn test_seven_day_streak_unlocks_streak_badges() {
    let engine = ProgressionEngine::new();
    let mut profile = Profile::new();
    let mut unlocked = Vec::new();

    for day in 1..=7 {
        let (next, events) = engine
            .record_correct_answer(&profile, 100, date(2026, 3, day))
            .unwrap();
        profile = next;
        unlocked.extend(events.iter().filter_map(|e| match e {
            ProgressionEvent::BadgeUnlocked { key } => Some(*key),
            _ => None,
        }));
    }

    assert_eq!(profile.streak, 7);
    assert!(unlocked.contains(&BadgeKey::StreakStarter));
    assert!(unlocked.contains(&BadgeKey::StreakMaster));
    // Unlocks land in the unclaimed pool, never directly in the collection
    assert!(profile.unclaimed_badges.contains(&BadgeKey::StreakMaster));
    assert!(profile.badges.is_empty());
}

#[test]
fn test_badge_unlock_events_never_repeat() {
    let engine = ProgressionEngine::new();
    let mut profile = Profile::new();
    let mut seen = Vec::new();

    for day in 1..=14 {
        let (next, events) = engine
            .record_correct_answer(&profile, 500, date(2026, 3, day))
            .unwrap();
        profile = next;
        for event in events {
            if let ProgressionEvent::BadgeUnlocked { key } = event {
                assert!(!seen.contains(&key), "{key:?} unlocked twice");
                seen.push(key);
            }
        }
    }
}

#[test]
fn test_streak_survives_same_day_answers_between_days() {
    let engine = ProgressionEngine::new();
    let mut profile = Profile::new();

    // Several answers per day for 3 consecutive days
    for day in 10..=12 {
        for _ in 0..5 {
            let (next, _) = engine
                .record_correct_answer(&profile, 50, date(2026, 3, day))
                .unwrap();
            profile = next;
        }
    }
    assert_eq!(profile.streak, 3);
}
