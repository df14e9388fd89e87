//! Waiter state machine unit tests

use std::time::Duration;

use ecs_redeploy::deploy::waiter::{StabilityWaiter, WaitSettings, WaitState};

#[test]
fn test_default_settings() {
    let settings = WaitSettings::default();
    assert_eq!(settings.interval, Duration::from_secs(15));
    assert_eq!(settings.wait_budget, Duration::from_secs(30 * 60));
    assert_eq!(settings.max_attempts(), 120);
}

#[test]
fn test_max_attempts_rounds_up_on_non_multiple_budget() {
    let settings = WaitSettings {
        interval: Duration::from_secs(15),
        wait_budget: Duration::from_secs(31 * 60),
    };
    // 1860 / 15 = 124 exactly; 1861 seconds would need a 125th check
    assert_eq!(settings.max_attempts(), 124);

    let settings = WaitSettings {
        interval: Duration::from_secs(7),
        wait_budget: Duration::from_secs(60),
    };
    assert_eq!(settings.max_attempts(), 9);
}

#[test]
fn test_at_least_one_attempt_for_tiny_budget() {
    let settings = WaitSettings {
        interval: Duration::from_secs(15),
        wait_budget: Duration::from_secs(1),
    };
    assert_eq!(settings.max_attempts(), 1);
}

#[test]
fn test_stability_on_first_check() {
    let mut waiter = StabilityWaiter::new(WaitSettings::default());
    assert_eq!(waiter.observe(true), &WaitState::Stable);
    assert_eq!(waiter.attempts_made(), 1);
}

#[test]
fn test_full_budget_exhaustion() {
    let mut waiter = StabilityWaiter::new(WaitSettings::default());

    for _ in 0..119 {
        assert_eq!(waiter.observe(false), &WaitState::Polling);
    }
    assert_eq!(waiter.observe(false), &WaitState::TimedOut);
    assert_eq!(waiter.attempts_made(), 120);

    // Further observations never push the counter past the budget
    waiter.observe(false);
    assert_eq!(waiter.attempts_made(), 120);
}

#[test]
fn test_stability_just_before_exhaustion() {
    let settings = WaitSettings {
        interval: Duration::from_secs(15),
        wait_budget: Duration::from_secs(45),
    };
    let mut waiter = StabilityWaiter::new(settings);
    waiter.observe(false);
    waiter.observe(false);
    assert_eq!(waiter.observe(true), &WaitState::Stable);
    assert_eq!(waiter.attempts_made(), 3);
}
