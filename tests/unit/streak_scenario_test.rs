//! Black-box streak scenarios through the public API.

use chrono::Duration;
use liftlog::progress::aggregate::current_progress;
use liftlog::progress::streak::{current_streak, period_history};
use liftlog::{recurring_report, Cadence, Measurement, RecurringGoal};
use uuid::Uuid;

use crate::helpers::{add_strength_sets, date, init_tracing, workout_on};

#[test]
fn test_weekly_workout_goal_current_week_only() {
    init_tracing();
    // Three workouts Mon/Wed/Fri of the current week, nothing earlier
    let goal = RecurringGoal::new(
        "Train 3x a week",
        Cadence::Weekly,
        Measurement::Workouts,
        3.0,
        date(2024, 2, 1),
    );
    let today = date(2024, 3, 15);
    let workouts = vec![
        workout_on(date(2024, 3, 11), 45),
        workout_on(date(2024, 3, 13), 45),
        workout_on(date(2024, 3, 15), 45),
    ];

    assert_eq!(current_progress(&goal, &workouts, today), 3.0);
    assert_eq!(current_streak(&goal, &workouts, today), 1);
}

#[test]
fn test_weekly_workout_goal_three_week_run() {
    let goal = RecurringGoal::new(
        "Train 3x a week",
        Cadence::Weekly,
        Measurement::Workouts,
        3.0,
        date(2024, 2, 1),
    );
    let today = date(2024, 3, 15);
    let mut workouts = Vec::new();
    for weeks_back in 0..3 {
        let monday = date(2024, 3, 11) - Duration::weeks(weeks_back);
        for offset in [0, 2, 4] {
            workouts.push(workout_on(monday + Duration::days(offset), 45));
        }
    }

    assert_eq!(current_streak(&goal, &workouts, today), 3);
}

#[test]
fn test_monthly_rep_goal_fails_in_current_month() {
    let bench = Uuid::new_v4();
    let goal = RecurringGoal::new(
        "100 bench reps a month",
        Cadence::Monthly,
        Measurement::Reps { exercise_id: bench },
        100.0,
        date(2024, 1, 1),
    );

    // January: 120 reps. February so far: 40.
    let mut january = workout_on(date(2024, 1, 10), 60);
    add_strength_sets(&mut january, bench, &[(135.0, 10); 12]);
    let mut february = workout_on(date(2024, 2, 10), 60);
    add_strength_sets(&mut february, bench, &[(135.0, 10); 4]);
    let workouts = vec![january, february];

    let today = date(2024, 2, 20);
    assert_eq!(current_streak(&goal, &workouts, today), 0);

    // The history listing still shows January as met
    let history = period_history(&goal, &workouts, today);
    assert_eq!(history.len(), 2);
    assert!(!history[0].met);
    assert_eq!(history[0].progress, 40.0);
    assert!(history[1].met);
    assert_eq!(history[1].progress, 120.0);
}

#[test]
fn test_minutes_goal_across_year_boundary() {
    let goal = RecurringGoal::new(
        "200 minutes a month",
        Cadence::Monthly,
        Measurement::Minutes,
        200.0,
        date(2023, 11, 1),
    );
    let mut workouts = Vec::new();
    // Four 60-minute sessions in each of Nov, Dec, Jan
    for month_start in [date(2023, 11, 1), date(2023, 12, 1), date(2024, 1, 1)] {
        for week in 0..4 {
            workouts.push(workout_on(month_start + Duration::weeks(week), 60));
        }
    }

    assert_eq!(current_streak(&goal, &workouts, date(2024, 1, 25)), 3);
}

#[test]
fn test_report_snapshot_matches_parts() {
    let goal = RecurringGoal::new(
        "Train 2x a week",
        Cadence::Weekly,
        Measurement::Workouts,
        2.0,
        date(2024, 3, 4),
    );
    let today = date(2024, 3, 15);
    let workouts = vec![
        workout_on(date(2024, 3, 4), 45),
        workout_on(date(2024, 3, 7), 45),
        workout_on(date(2024, 3, 12), 45),
        workout_on(date(2024, 3, 14), 45),
    ];

    let report = recurring_report(&goal, &workouts, today);
    assert_eq!(report.progress, current_progress(&goal, &workouts, today));
    assert_eq!(report.streak, current_streak(&goal, &workouts, today));
    assert_eq!(report.streak, 2);
    assert!(report.met);
}

#[test]
fn test_stale_snapshot_is_just_recomputed() {
    // The engine never caches: the same goal over two different
    // snapshots gives two independent answers.
    let goal = RecurringGoal::new(
        "Train 1x a day",
        Cadence::Daily,
        Measurement::Workouts,
        1.0,
        date(2024, 3, 10),
    );
    let today = date(2024, 3, 12);

    let before = vec![workout_on(date(2024, 3, 11), 30)];
    assert_eq!(current_streak(&goal, &before, today), 0);

    let mut after = before.clone();
    after.push(workout_on(date(2024, 3, 12), 30));
    assert_eq!(current_streak(&goal, &after, today), 2);
}
