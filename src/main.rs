//! Pill Split entry point
//!
//! Headless host: drives the scene at the fixed tick rate and reports what a
//! renderer would draw each frame.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;

use pill_split::Settings;
use pill_split::consts::SIM_DT;
use pill_split::renderer::{Meshes, OrbitCamera, ShapeKind, Vertex, compose};
use pill_split::settings::OutputMode;
use pill_split::sim::{Ball, Capsule, Phase, Scene, SceneEvent, tick};

/// One line of snapshot output
#[derive(Serialize)]
struct Snapshot<'a> {
    tick: u64,
    phase: Phase,
    balls: &'a [Ball],
    capsules: &'a [Capsule],
    draw_items: usize,
    eye: [f32; 3],
}

fn main() {
    env_logger::init();
    log::info!("Pill Split (headless) starting...");

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let settings = Settings::load(&path);
    let camera = settings.camera();

    let meshes = Meshes::new();
    for shape in [ShapeKind::Sphere, ShapeKind::Cylinder] {
        let mesh = meshes.get(shape);
        log::info!(
            "{:?} mesh ready: {} tris, {} vertex bytes",
            shape,
            mesh.triangle_count(),
            mesh.vertices.len() * Vertex::STRIDE
        );
    }
    log::debug!("Camera eye {:?}, view_proj {:?}", camera.eye(), camera.view_proj());

    let mut scene = Scene::new();
    let frame_time = Duration::from_secs_f32(SIM_DT);
    let mut next_frame = Instant::now();

    for _ in 0..settings.frames {
        tick(&mut scene);
        let frame = compose(&scene);

        for event in scene.drain_events() {
            report_event(&settings, &event);
        }

        if settings.wants_snapshot(frame.tick) {
            print_snapshot(&scene, frame.items.len(), &camera);
        }

        if settings.realtime {
            next_frame += frame_time;
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            }
        }
    }

    let state = scene.state();
    if settings.output != OutputMode::Quiet {
        println!(
            "Finished at tick {} ({} ms) in {:?} with {} ball(s), {} falling, {} rolling",
            state.elapsed_ticks,
            state.elapsed_ms(),
            state.phase,
            scene.balls.len(),
            scene.balls.iter().filter(|b| b.is_falling()).count(),
            scene.balls.iter().filter(|b| b.is_rolling()).count()
        );
        for ball in &scene.balls {
            println!(
                "  ball {} {:?} at ({:.3}, {:.3}, {:.3})",
                ball.id, ball.motion, ball.position.x, ball.position.y, ball.position.z
            );
        }
        for capsule in &scene.capsules {
            println!(
                "  capsule at x={:.1} rotated {:.3} rad",
                capsule.position.x, capsule.rotation_z
            );
        }
    }
    log::info!("Pill Split done");
}

fn report_event(settings: &Settings, event: &SceneEvent) {
    if let SceneEvent::PhaseChanged { phase, tick } = event
        && settings.output == OutputMode::Summary
    {
        println!("tick {:>5}: entered {:?}", tick, phase);
    }
}

fn print_snapshot(scene: &Scene, draw_items: usize, camera: &OrbitCamera) {
    let snapshot = Snapshot {
        tick: scene.state().elapsed_ticks,
        phase: scene.phase(),
        balls: &scene.balls,
        capsules: &scene.capsules,
        draw_items,
        eye: camera.eye().to_array(),
    };
    match serde_json::to_string(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Snapshot serialization failed: {}", e),
    }
}
