//! Fixed timestep scene tick
//!
//! One call per rendered frame. Every producer sees the same snapshot.

use super::ball::Motion;
use super::state::{Phase, Scene, SceneEvent};

/// Advance the scene by one frame
///
/// Balls created on the split tick already take their first fall step on that tick.
pub fn tick(scene: &mut Scene) {
    if let Some(phase) = scene.sequencer.advance() {
        let tick = scene.sequencer.state().elapsed_ticks;
        log::info!("Scene entered {:?} at tick {}", phase, tick);
        if phase == Phase::Split {
            scene.split_balls();
        }
        scene.events.push(SceneEvent::PhaseChanged { phase, tick });
    }

    let state = scene.state();

    for ball in &mut scene.balls {
        let next = ball.step(state);
        if next.direction != ball.direction {
            log::debug!("Ball {} bounced at x={:.3}", ball.id, next.position.x);
            scene.events.push(SceneEvent::BallBounced {
                ball_id: ball.id,
                direction: next.direction,
            });
        }
        if next.motion == Motion::Rejoined && ball.motion != Motion::Rejoined {
            log::debug!("Ball {} rejoined at x={:.3}", ball.id, next.position.x);
            scene.events.push(SceneEvent::BallRejoined { ball_id: ball.id });
        }
        *ball = next;
    }

    for capsule in &mut scene.capsules {
        capsule.advance(state);
    }
}
