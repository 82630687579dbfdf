use approx::assert_relative_eq;
use nalgebra::Vector2;
use proptest::prelude::*;

use rocket_lander::sim::{Engine, NoopObserver, TerminationReason};
use rocket_lander::vehicle::presets;
use rocket_lander::{RewardPolicy, RocketConfig, G0, TIME_STEP};

fn deterministic_engine() -> Engine {
    Engine::seeded(presets::deterministic(), NoopObserver, 0)
}

#[test]
fn repeated_deterministic_resets_are_identical() {
    let mut a = Engine::seeded(presets::deterministic(), NoopObserver, 1);
    let mut b = Engine::seeded(presets::deterministic(), NoopObserver, 99);
    for _ in 0..5 {
        a.step(0.7, 0.2);
        a.reset();
        b.reset();
        assert_eq!(a.state(), b.state());
    }
}

#[test]
fn full_throttle_scenario_matches_hand_integration() {
    let mut e = deterministic_engine();
    e.step(1.0, 0.0);
    assert_relative_eq!(e.state().fuel_remaining, 19.5);
    assert_relative_eq!(e.state().time_elapsed, 0.1);
    assert_relative_eq!(e.state().velocity.y, 3.5647895454545456, epsilon = 1e-12);
    assert_relative_eq!(e.state().position.y, 100.35647895454546, epsilon = 1e-10);

    e.step(1.0, 0.0);
    assert_relative_eq!(e.state().fuel_remaining, 19.0);
    assert_relative_eq!(e.state().time_elapsed, 0.2, epsilon = 1e-12);
    let vy2 = 3.5647895454545456 - G0 * 0.1 + 1000.0 / 21.5 * 0.1;
    assert_relative_eq!(e.state().velocity.y, vy2, epsilon = 1e-12);
    assert_eq!(e.state().angle, 0.0);
}

#[test]
fn idle_engine_only_feels_gravity() {
    let mut e = deterministic_engine();
    let mut expected_y = 100.0;
    for n in 1..=10 {
        e.step(0.0, 0.0);
        let vy = -G0 * TIME_STEP * n as f64;
        expected_y += vy * TIME_STEP;
        assert_relative_eq!(e.state().velocity.y, vy, epsilon = 1e-9);
        assert_relative_eq!(e.state().position.y, expected_y, epsilon = 1e-9);
        assert_eq!(e.state().fuel_remaining, 20.0);
    }
}

#[test]
fn fuel_runs_dry_after_four_seconds_of_full_burn() {
    let mut e = deterministic_engine();
    for _ in 0..40 {
        e.step(1.0, 0.0);
    }
    assert_eq!(e.state().fuel_remaining, 0.0);

    let vx = e.state().velocity.x;
    for _ in 0..5 {
        let vy = e.state().velocity.y;
        e.step(1.0, 1.0);
        assert_eq!(e.state().fuel_remaining, 0.0);
        assert_relative_eq!(e.state().velocity.y, vy - G0 * TIME_STEP, epsilon = 1e-9);
        assert_eq!(e.state().velocity.x, vx);
    }
}

#[test]
fn spinning_vehicle_eventually_terminates() {
    let mut e = deterministic_engine();
    let mut steps = 0;
    while !e.should_terminate() {
        e.step(0.25, 1.0);
        steps += 1;
        assert!(steps < 3000);
    }
    assert!(matches!(
        e.termination_reason(),
        Some(TerminationReason::HorizontalOutOfBounds)
            | Some(TerminationReason::BelowGround)
            | Some(TerminationReason::AltitudeOutOfBounds)
    ));
}

#[test]
fn time_limit_ends_a_long_hover() {
    // Bottomless tank so the hover never runs dry.
    let config = RocketConfig::builder()
        .disable_random_coords(true)
        .mass(1.0)
        .fuel_capacity(1.0e6)
        .max_thrust(2.0 * G0 * 1.0e6)
        .burn_rate(0.0)
        .build();
    let mut e = Engine::seeded(config, NoopObserver, 0);
    let mut steps = 0;
    while !e.should_terminate() {
        // Cancel gravity and any residual vertical velocity.
        let s = e.state();
        let accel_full = 2.0 * G0 * 1.0e6 / (1.0 + s.fuel_remaining);
        let needed = G0 - s.velocity.y / TIME_STEP;
        e.step(needed / accel_full, 0.0);
        steps += 1;
    }
    assert_eq!(e.termination_reason(), Some(TerminationReason::TimeLimit));
    assert_eq!(steps, 2561);
    assert!(e.state().time_elapsed > 256.0);
}

#[test]
fn position_aware_reward_penalizes_a_miss() {
    let config = RocketConfig::builder()
        .starting_position_x(30, 30)
        .starting_position_y(1, 1)
        .starting_velocity_range(1, 1)
        .reward_policy(RewardPolicy::PositionAware { max_horizontal_error: 5.0 })
        .build();
    let mut e = Engine::seeded(config, NoopObserver, 0);
    while !e.should_terminate() {
        e.step(0.0, 0.0);
    }
    assert_eq!(e.termination_reason(), Some(TerminationReason::BelowGround));
    assert_eq!(e.reward(), 0);

    let lenient = RewardPolicy::Lenient.evaluate(e.state());
    assert_eq!(lenient, 1);
}

proptest! {
    #[test]
    fn fuel_stays_within_capacity(
        inputs in prop::collection::vec((any::<f64>(), -10.0f64..10.0), 1..200)
    ) {
        let mut e = deterministic_engine();
        let capacity = e.config().fuel_capacity;
        let mut prev = capacity;
        for (throttle, rotation) in inputs {
            e.step(throttle, rotation);
            let fuel = e.state().fuel_remaining;
            prop_assert!(fuel >= 0.0);
            prop_assert!(fuel <= prev);
            prev = fuel;
        }
    }

    #[test]
    fn clock_advances_one_step_per_call(n in 0usize..500, throttle in -2.0f64..2.0) {
        let mut e = deterministic_engine();
        for _ in 0..n {
            e.step(throttle, 0.0);
        }
        prop_assert!((e.state().time_elapsed - n as f64 * TIME_STEP).abs() < 1e-9);
    }

    #[test]
    fn state_stays_finite(
        inputs in prop::collection::vec((any::<f64>(), any::<f64>()), 1..300)
    ) {
        let mut e = deterministic_engine();
        for (throttle, rotation) in inputs {
            e.step(throttle, rotation);
        }
        let s = e.state();
        prop_assert!(s.position.iter().all(|v| v.is_finite()));
        prop_assert!(s.velocity.iter().all(|v| v.is_finite()));
        prop_assert!(s.angle.is_finite() && s.angular_velocity.is_finite());
    }

    #[test]
    fn seeded_random_starts_are_in_range(seed in any::<u64>()) {
        let config = RocketConfig::default();
        let a = Engine::seeded(config.clone(), NoopObserver, seed);
        let b = Engine::seeded(config.clone(), NoopObserver, seed);
        prop_assert_eq!(a.state(), b.state());

        let s = a.state();
        prop_assert!(config.starting_position_x.contains(s.position.x));
        prop_assert!(config.starting_position_y.contains(s.position.y));
        prop_assert!(config.starting_velocity_range.contains(-s.velocity.y));
        prop_assert!(s.velocity.y <= 0.0);
        prop_assert_eq!(s.velocity.x, 0.0);
        prop_assert_eq!(s.target_position, Vector2::zeros());
    }
}
