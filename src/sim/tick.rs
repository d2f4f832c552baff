//! Per-frame step functions
//!
//! Each piece of the frame update as a small pure function over poses and
//! tuning. [`super::PlayMode::update`] runs them in order.

use glam::{Vec2, Vec3};

use super::rng::GameRng;
use crate::scene::Transform;
use crate::tuning::Tuning;
use crate::yaw;

/// Tank-style steering
///
/// Vertical intent drives along the player's current facing, horizontal
/// intent turns in place (right turns clockwise). Diagonal intent is
/// normalized so it isn't faster than a single key.
pub fn steer(player: &mut Transform, intent: Vec2, tuning: &Tuning, elapsed: f32) {
    if intent == Vec2::ZERO {
        return;
    }
    let intent = intent.normalize();

    let forward = player.forward();
    player.position += forward * (intent.y * tuning.player_speed * elapsed);

    // Positive angles turn counter-clockwise, hence the minus
    let turn = -intent.x * tuning.rotation_speed * elapsed;
    player.rotation = (player.rotation * yaw(turn)).normalize();
}

/// Spin a node about world Z
pub fn spin(node: &mut Transform, speed: f32, elapsed: f32) {
    node.rotation = (node.rotation * yaw(speed * elapsed)).normalize();
}

/// Whether two positions are close enough to count as touching
#[inline]
pub fn within_reach(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) <= radius
}

/// Move the cheese to a random spot on the floor disk
///
/// Only X and Y change; height and spin are kept.
pub fn respawn(cheese: &mut Transform, rng: &mut GameRng, floor_radius: f32) {
    let spot = rng.disk(floor_radius);
    cheese.position.x = spot.x;
    cheese.position.y = spot.y;
}

/// Fresh countdown after a chomp, in `[round, round + bonus)`
pub fn bonus_timer(rng: &mut GameRng, tuning: &Tuning) -> f32 {
    rearm_timer(rng.unit(), tuning)
}

/// Countdown for a unit draw `u` in `[0, 1)`
///
/// `round + u * bonus` can round up to `round + bonus` in f32 when `u` is
/// just below 1, so the result is pulled back under the upper bound.
pub fn rearm_timer(u: f32, tuning: &Tuning) -> f32 {
    let timer = tuning.round_seconds + u * tuning.bonus_seconds;
    if tuning.bonus_seconds <= 0.0 {
        return timer;
    }
    let ceiling = tuning.round_seconds + tuning.bonus_seconds;
    // Largest f32 below a positive `ceiling`
    timer.min(f32::from_bits(ceiling.to_bits() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    fn player() -> Transform {
        Transform::new("Player", Vec3::ZERO)
    }

    #[test]
    fn test_steer_forward() {
        let mut p = player();
        let tuning = Tuning::default();
        steer(&mut p, Vec2::new(0.0, 1.0), &tuning, 0.1);
        // 30 units/s along +Y for 0.1s
        assert!((p.position - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-5);
        assert_eq!(p.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_steer_follows_facing() {
        let mut p = player();
        p.rotation = yaw(FRAC_PI_2);
        let tuning = Tuning::default();
        steer(&mut p, Vec2::new(0.0, -1.0), &tuning, 0.1);
        // Facing -X, backing up moves toward +X
        assert!((p.position - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_steer_right_turns_clockwise() {
        let mut p = player();
        let tuning = Tuning::default();
        steer(&mut p, Vec2::new(1.0, 0.0), &tuning, 0.01);
        assert_eq!(p.position, Vec3::ZERO);
        let (axis, angle) = p.rotation.to_axis_angle();
        // -0.1 rad about +Z, i.e. 0.1 rad about -Z
        assert!((axis * angle - Vec3::new(0.0, 0.0, -0.1)).length() < 1e-5);
    }

    #[test]
    fn test_steer_diagonal_normalized() {
        let mut p = player();
        let tuning = Tuning::default();
        steer(&mut p, Vec2::new(1.0, 1.0), &tuning, 0.1);
        let expected = 3.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((p.position.length() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_steer_no_intent() {
        let mut p = player();
        p.rotation = yaw(0.3);
        let before = p.clone();
        steer(&mut p, Vec2::ZERO, &Tuning::default(), 1.0);
        assert_eq!(p, before);
    }

    #[test]
    fn test_spin() {
        let mut c = Transform::new("Cheese", Vec3::ZERO);
        spin(&mut c, 5.0, 0.1);
        let (_, angle) = c.rotation.to_axis_angle();
        assert!((angle - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_within_reach_inclusive() {
        assert!(within_reach(Vec3::ZERO, Vec3::new(0.15, 0.0, 0.0), 0.2));
        assert!(within_reach(Vec3::ZERO, Vec3::new(0.0, 0.2, 0.0), 0.2));
        assert!(!within_reach(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.21), 0.2));
    }

    #[test]
    fn test_respawn_keeps_height_and_spin() {
        let mut rng = GameRng::new(1);
        let mut c = Transform::new("Cheese", Vec3::new(9.0, 9.0, 0.2));
        c.rotation = yaw(1.0);
        let rotation = c.rotation;
        respawn(&mut c, &mut rng, 2.0);
        assert_eq!(c.position.z, 0.2);
        assert_eq!(c.rotation, rotation);
        assert!(c.position.truncate().length_squared() < 4.0);
    }

    #[test]
    fn test_rearm_timer_stays_below_ceiling() {
        let tuning = Tuning::default();
        // Largest f32 below 1.0
        let u = 1.0 - f32::EPSILON / 2.0;
        assert!(u < 1.0);
        let t = rearm_timer(u, &tuning);
        assert!(t < 5.0, "timer {t} reached the ceiling");
        assert!(t > 4.999);
        assert_eq!(rearm_timer(0.0, &tuning), 3.0);
    }

    #[test]
    fn test_rearm_timer_without_bonus() {
        let tuning = Tuning {
            bonus_seconds: 0.0,
            ..Tuning::default()
        };
        assert_eq!(rearm_timer(0.9, &tuning), 3.0);
    }

    #[test]
    fn test_bonus_timer_range() {
        let mut rng = GameRng::new(5);
        let tuning = Tuning::default();
        for _ in 0..1000 {
            let t = bonus_timer(&mut rng, &tuning);
            assert!((3.0..5.0).contains(&t));
        }
    }
}
