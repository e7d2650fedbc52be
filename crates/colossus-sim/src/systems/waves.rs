//! Projectile wave scheduler — telegraphed area attacks on the arena floor.
//!
//! Each wave is a batch of target spots sharing one warning/impact
//! timeline: the telegraph (ground markers plus descending projectile
//! stand-ins) appears at `warning_time`, impact resolves at `impact_time`,
//! and the projectile fall speed is back-solved from the remaining time so
//! the visual arrival and the mechanical impact always coincide, however
//! jittered the frame that fired the warning was.

use glam::{vec2, vec3, Vec2, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use colossus_core::constants::*;
use colossus_core::enums::{MeshKind, SpreadBias};
use colossus_core::handles::{MeshDesc, MeshId, VisualScene};
use colossus_core::state::WaveView;

use colossus_boss::profile::WaveTuning;

/// Parameters for one scheduled wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSpec {
    /// Number of projectiles. Zero is tolerated (empty spot list).
    pub count: u32,
    /// Target center in the XZ plane.
    pub center: Vec2,
    /// Scatter radius (meters). Zero puts every spot at the center.
    pub radius: f32,
    /// Area damage delivered at impact.
    pub damage: f32,
    /// Seconds until the telegraph appears.
    pub warning_delay: f32,
    /// Seconds from telegraph to impact.
    pub impact_delay: f32,
    /// Spot distribution.
    pub spread: SpreadBias,
}

impl Default for WaveSpec {
    fn default() -> Self {
        Self {
            count: BASE_MISSILES,
            center: Vec2::ZERO,
            radius: WAVE_RADIUS,
            damage: WAVE_DAMAGE,
            warning_delay: WAVE_WARNING_DELAY_SECS,
            impact_delay: WAVE_IMPACT_DELAY_SECS,
            spread: SpreadBias::Uniform,
        }
    }
}

impl WaveSpec {
    /// Build a spec from profile tuning, a projectile count, and a target.
    pub fn from_tuning(tuning: &WaveTuning, count: u32, center: Vec2) -> Self {
        Self {
            count,
            center,
            radius: tuning.radius,
            damage: tuning.damage,
            warning_delay: tuning.warning_delay,
            impact_delay: tuning.impact_delay,
            spread: tuning.spread,
        }
    }
}

/// Impact record returned from `update` for external AoE resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveImpact {
    /// Impact spots in the XZ plane (one explosion effect per spot).
    pub spots: Vec<Vec2>,
    pub damage: f32,
}

/// A projectile visual descending onto its spot.
#[derive(Debug, Clone, Copy)]
struct FallingProjectile {
    mesh: MeshId,
    position: Vec3,
    floor_y: f32,
    fall_speed: f32,
}

/// One in-flight wave.
#[derive(Debug, Clone)]
struct ProjectileWave {
    spots: Vec<Vec2>,
    damage: f32,
    warning_time: f32,
    impact_time: f32,
    elapsed: f32,
    warned: bool,
    impacted: bool,
    markers: Vec<MeshId>,
    projectiles: Vec<FallingProjectile>,
}

/// Manages the full lifecycle of projectile waves.
pub struct WaveScheduler {
    waves: Vec<ProjectileWave>,
    /// Height of the walkable floor the waves land on.
    ground_y: f32,
    /// Height above the floor at which projectile visuals spawn.
    spawn_height: f32,
}

impl WaveScheduler {
    pub fn new(ground_y: f32) -> Self {
        Self {
            waves: Vec::new(),
            ground_y,
            spawn_height: PROJECTILE_SPAWN_HEIGHT,
        }
    }

    /// Sample spots and append a new wave with `elapsed = 0`.
    pub fn schedule_wave(&mut self, spec: WaveSpec, rng: &mut ChaCha8Rng) {
        let spots = sample_spots(&spec, rng);
        let warning_time = spec.warning_delay.max(0.0);
        let impact_time = warning_time + spec.impact_delay.max(0.0);
        log::debug!(
            "wave scheduled: {} spots around ({:.1}, {:.1}), impact in {:.2}s",
            spots.len(),
            spec.center.x,
            spec.center.y,
            impact_time
        );
        self.waves.push(ProjectileWave {
            spots,
            damage: spec.damage,
            warning_time,
            impact_time,
            elapsed: 0.0,
            warned: false,
            impacted: false,
            markers: Vec::new(),
            projectiles: Vec::new(),
        });
    }

    /// Age every wave; fire warnings and impacts that came due this frame.
    ///
    /// Returns a [`WaveImpact`] for each wave whose impact resolved — the
    /// caller applies area damage and spawns per-spot explosion effects.
    pub fn update(&mut self, dt: f32, scene: &mut dyn VisualScene) -> Vec<WaveImpact> {
        let mut impacts = Vec::new();

        for wave in &mut self.waves {
            wave.elapsed += dt;

            if !wave.warned && wave.elapsed >= wave.warning_time {
                wave.warned = true;
                spawn_telegraph(wave, self.ground_y, self.spawn_height, scene);
            }

            if wave.warned && !wave.impacted {
                for projectile in &mut wave.projectiles {
                    projectile.position.y =
                        (projectile.position.y - projectile.fall_speed * dt).max(projectile.floor_y);
                    scene.set_mesh_position(projectile.mesh, projectile.position);
                }
            }

            if !wave.impacted && wave.elapsed >= wave.impact_time {
                wave.impacted = true;
                despawn_telegraph(wave, scene);
                impacts.push(WaveImpact {
                    spots: wave.spots.clone(),
                    damage: wave.damage,
                });
                log::debug!("wave impact: {} spots, {} damage", wave.spots.len(), wave.damage);
            }
        }

        self.waves
            .retain(|w| !(w.impacted && w.elapsed >= w.impact_time + WAVE_PRUNE_SLACK_SECS));

        impacts
    }

    /// Drop all waves and their visuals immediately. Safe at any time,
    /// including mid-wave.
    pub fn clear(&mut self, scene: &mut dyn VisualScene) {
        for wave in &mut self.waves {
            despawn_telegraph(wave, scene);
        }
        self.waves.clear();
    }

    /// Number of waves not yet pruned.
    pub fn active_count(&self) -> usize {
        self.waves.len()
    }

    /// Read-only views for the snapshot.
    pub fn views(&self) -> Vec<WaveView> {
        self.waves
            .iter()
            .map(|w| WaveView {
                elapsed: w.elapsed,
                warned: w.warned,
                impacted: w.impacted,
                spots: w.spots.clone(),
                damage: w.damage,
            })
            .collect()
    }
}

/// Sample `count` spots within `radius` of the center.
fn sample_spots(spec: &WaveSpec, rng: &mut ChaCha8Rng) -> Vec<Vec2> {
    let radius = spec.radius.max(0.0);
    let mut spots = Vec::with_capacity(spec.count as usize);
    for _ in 0..spec.count {
        let u: f32 = rng.gen();
        let v: f32 = rng.gen();
        // Uniform disk needs sqrt; the biased variant clusters inward.
        let r = match spec.spread {
            SpreadBias::Uniform => radius * u.sqrt(),
            SpreadBias::CenterBiased => radius * u.powf(CENTER_BIAS_EXPONENT),
        };
        let theta = std::f32::consts::TAU * v;
        spots.push(spec.center + vec2(theta.cos(), theta.sin()) * r);
    }
    spots
}

/// Add ground markers and descending projectile visuals for a wave.
fn spawn_telegraph(
    wave: &mut ProjectileWave,
    ground_y: f32,
    spawn_height: f32,
    scene: &mut dyn VisualScene,
) {
    let remaining = (wave.impact_time - wave.elapsed).max(MIN_FALL_TIME_SECS);
    let fall_speed = spawn_height / remaining;

    for &spot in &wave.spots {
        let marker_pos = vec3(spot.x, ground_y + MARKER_THICKNESS, spot.y);
        wave.markers.push(scene.add_mesh(MeshDesc {
            kind: MeshKind::ImpactMarker,
            half_extents: vec3(MARKER_RADIUS, MARKER_THICKNESS, MARKER_RADIUS),
            position: marker_pos,
        }));

        let start = vec3(spot.x, ground_y + spawn_height, spot.y);
        let mesh = scene.add_mesh(MeshDesc {
            kind: MeshKind::Projectile,
            half_extents: Vec3::splat(PROJECTILE_HALF_EXTENT),
            position: start,
        });
        wave.projectiles.push(FallingProjectile {
            mesh,
            position: start,
            floor_y: ground_y,
            fall_speed,
        });
    }
}

/// Remove a wave's markers and any still-descending projectiles.
fn despawn_telegraph(wave: &mut ProjectileWave, scene: &mut dyn VisualScene) {
    for marker in wave.markers.drain(..) {
        scene.remove_mesh(marker);
    }
    for projectile in wave.projectiles.drain(..) {
        scene.remove_mesh(projectile.mesh);
    }
}
