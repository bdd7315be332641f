//! Ball transform producer
//!
//! A ball drops to the ground, waits for the scene to start moving, then
//! rolls around its base point until it either drifts back near the center
//! (rejoined) or, for a split ball, strays far enough out to bounce.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::SceneState;
use crate::consts::*;

/// Per-ball motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Motion {
    /// Dropping toward y = 0, or resting there until the scene moves
    #[default]
    Falling,
    /// Circling the base point
    Rolling,
    /// Returned near center, frozen for good
    Rejoined,
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// Spawn point; rolling circles around its x/z
    pub base: Vec3,
    pub position: Vec3,
    /// Roll angle (radians)
    pub angle: f32,
    /// +1.0 or -1.0
    pub direction: f32,
    /// One of the two halves (only split balls bounce)
    pub split: bool,
    pub motion: Motion,
}

impl Ball {
    pub fn new(id: u32, start: Vec3, split: bool) -> Self {
        Self {
            id,
            base: start,
            position: start,
            angle: 0.0,
            direction: 1.0,
            split,
            motion: Motion::Falling,
        }
    }

    pub fn is_falling(&self) -> bool {
        self.motion == Motion::Falling
    }

    pub fn is_rolling(&self) -> bool {
        self.motion == Motion::Rolling
    }

    /// Resting on the ground
    pub fn landed(&self) -> bool {
        self.position.y <= 0.0
    }

    /// Next frame's ball for the given scene snapshot
    pub fn step(&self, scene: SceneState) -> Ball {
        let mut next = *self;
        match self.motion {
            Motion::Falling => {
                if !self.landed() {
                    next.fall();
                } else if scene.moving() {
                    next.motion = Motion::Rolling;
                    next.roll();
                }
            }
            Motion::Rolling => next.roll(),
            Motion::Rejoined => {}
        }
        next
    }

    /// Replace this ball with its next frame
    pub fn advance(&mut self, scene: SceneState) {
        *self = self.step(scene);
    }

    fn fall(&mut self) {
        self.position.y -= FALL_STEP;
        if self.position.y <= GROUND_EPSILON {
            self.position.y = 0.0;
        }
    }

    /// Advances the angle first, then places the ball at the new angle, so
    /// the first roll already sits at `ROLL_STEP`.
    fn roll(&mut self) {
        self.angle += ROLL_STEP;
        let (sin, cos) = self.angle.sin_cos();
        let x = self.base.x + cos * self.direction;
        let z = self.base.z + sin * self.direction;
        self.position = Vec3::new(x, 0.0, z);

        // Distance from center stands in for real contact tests
        if x.abs() < REJOIN_THRESHOLD {
            self.motion = Motion::Rejoined;
        }
        if self.split && x.abs() > BOUNCE_THRESHOLD {
            self.direction = -self.direction;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Phase;
    use proptest::prelude::*;

    const IDLE: SceneState = SceneState {
        phase: Phase::Idle,
        elapsed_ticks: 0,
    };
    const MOVING: SceneState = SceneState {
        phase: Phase::Moving,
        elapsed_ticks: 180,
    };

    #[test]
    fn test_falls_to_ground_and_stays() {
        let mut ball = Ball::new(1, Vec3::new(-1.5, 1.0, 0.0), true);

        for frame in 1..20 {
            let before = ball.position.y;
            ball.advance(IDLE);
            assert!((before - ball.position.y - FALL_STEP).abs() < 1e-5, "frame {frame}");
            assert!(ball.is_falling());
        }

        ball.advance(IDLE);
        assert_eq!(ball.position.y, 0.0);

        for _ in 0..50 {
            ball.advance(IDLE);
            assert_eq!(ball.position.y, 0.0);
            assert_eq!(ball.position.x, -1.5);
            assert!(ball.is_falling());
        }
    }

    #[test]
    fn test_stays_falling_mid_air_when_moving() {
        let ball = Ball::new(1, Vec3::new(0.0, 1.0, 0.0), true);
        let next = ball.step(MOVING);
        assert!(next.is_falling());
        assert!((next.position.y - 0.95).abs() < 1e-6);
        assert_eq!(next.angle, 0.0);
    }

    #[test]
    fn test_starts_rolling_once_landed_and_moving() {
        let ball = Ball::new(1, Vec3::new(-1.5, 0.0, 0.0), true);
        let next = ball.step(MOVING);

        assert!(next.is_rolling());
        assert!((next.angle - ROLL_STEP).abs() < 1e-6);
        assert!((next.position.x - (-1.5 + ROLL_STEP.cos())).abs() < 1e-6);
        assert!((next.position.z - ROLL_STEP.sin()).abs() < 1e-6);
        assert_eq!(next.position.y, 0.0);
    }

    #[test]
    fn test_right_ball_bounces_on_first_roll() {
        let mut ball = Ball::new(2, Vec3::new(1.5, 0.0, 0.0), true);
        ball.advance(MOVING);
        assert!(ball.position.x > BOUNCE_THRESHOLD);
        assert_eq!(ball.direction, -1.0);

        ball.advance(MOVING);
        assert!(ball.position.x.abs() < BOUNCE_THRESHOLD);
        assert_eq!(ball.direction, -1.0);
    }

    #[test]
    fn test_left_ball_bounces_past_quarter_turn() {
        let mut ball = Ball::new(1, Vec3::new(-1.5, 0.0, 0.0), true);
        for _ in 0..31 {
            ball.advance(MOVING);
            assert_eq!(ball.direction, 1.0);
        }
        ball.advance(MOVING);
        assert!(ball.position.x < -BOUNCE_THRESHOLD);
        assert_eq!(ball.direction, -1.0);
    }

    #[test]
    fn test_no_bounce_exactly_on_bounce_line() {
        let mut ball = Ball::new(1, Vec3::new(BOUNCE_THRESHOLD - ROLL_STEP.cos(), 0.0, 0.0), true);
        ball.advance(MOVING);
        assert_eq!(ball.position.x, BOUNCE_THRESHOLD);
        assert_eq!(ball.direction, 1.0);
        assert!(ball.is_rolling());
    }

    #[test]
    fn test_keeps_rolling_exactly_on_rejoin_line() {
        let mut ball = Ball::new(1, Vec3::new(REJOIN_THRESHOLD - ROLL_STEP.cos(), 0.0, 0.0), true);
        ball.advance(MOVING);
        assert_eq!(ball.position.x, REJOIN_THRESHOLD);
        assert!(ball.is_rolling());
        assert_eq!(ball.direction, 1.0);
    }

    #[test]
    fn test_unsplit_ball_never_bounces() {
        let mut ball = Ball::new(1, Vec3::new(1.5, 0.0, 0.0), false);
        ball.advance(MOVING);
        assert!(ball.position.x > BOUNCE_THRESHOLD);
        assert_eq!(ball.direction, 1.0);
    }

    #[test]
    fn test_rejoined_is_absorbing() {
        let mut ball = Ball::new(1, Vec3::ZERO, false);
        let mut frames = 0;
        while ball.motion != Motion::Rejoined {
            ball.advance(MOVING);
            frames += 1;
            assert!(frames < 100, "ball never rejoined");
        }
        assert_eq!(frames, 21);
        assert!(ball.position.x.abs() < REJOIN_THRESHOLD);

        let frozen = ball;
        for _ in 0..100 {
            ball.advance(MOVING);
            assert_eq!(ball, frozen);
        }
    }

    proptest! {
        #[test]
        fn prop_fall_is_monotone_and_non_negative(y in 0.0f32..10.0, frames in 1usize..400) {
            let mut ball = Ball::new(1, Vec3::new(0.0, y, 0.0), true);
            for _ in 0..frames {
                let before = ball.position.y;
                ball.advance(IDLE);
                prop_assert!(ball.position.y >= 0.0);
                prop_assert!(ball.position.y <= before);
                prop_assert!(ball.is_falling());
            }
        }

        #[test]
        fn prop_never_falling_and_rolling(x in -3.0f32..3.0, frames in 1usize..300) {
            let mut ball = Ball::new(1, Vec3::new(x, 0.5, 0.0), true);
            for _ in 0..frames {
                ball.advance(MOVING);
                if ball.is_rolling() {
                    prop_assert_eq!(ball.position.y, 0.0);
                }
                prop_assert!(ball.direction == 1.0 || ball.direction == -1.0);
            }
        }
    }
}
