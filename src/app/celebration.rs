//! One-shot confetti burst shown when a task is completed.
//!
//! The burst is transient UI state: it knows when it started and where its
//! particles are, and it clears itself once its duration has passed. A new
//! trigger replaces the running burst, so a stale deadline never clears a
//! fresh one.

use rand::Rng;
use std::time::{Duration, Instant};

pub const PARTICLE_COUNT: usize = 50;
/// Number of colors in the confetti palette. The renderer maps indices to colors.
pub const PALETTE_SIZE: usize = 5;

const MAX_DELAY_SECS: f32 = 0.5;
const FALL_SECS: f32 = 1.2;
const MAX_START_ABOVE_ROWS: f32 = 4.0;
const GLYPHS: [char; 4] = ['■', '▪', '●', '◆'];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the area width, 0.0..1.0.
    pub x: f32,
    pub delay_secs: f32,
    /// Starting row relative to the top of the area; always negative.
    pub start_row: f32,
    pub palette_index: usize,
    pub glyph: char,
}

/// A particle's cell at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleCell {
    pub column: u16,
    pub row: u16,
    pub palette_index: usize,
    pub glyph: char,
}

#[derive(Debug, Clone)]
pub struct Celebration {
    duration: Duration,
    started_at: Option<Instant>,
    particles: Vec<Particle>,
}

impl Celebration {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
            particles: Vec::new(),
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.trigger_with(now, &mut rand::thread_rng());
    }

    pub fn trigger_with<R: Rng>(&mut self, now: Instant, rng: &mut R) {
        self.started_at = Some(now);
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                delay_secs: rng.gen_range(0.0..MAX_DELAY_SECS),
                start_row: -rng.gen_range(1.0..=MAX_START_ABOVE_ROWS),
                palette_index: rng.gen_range(0..PALETTE_SIZE),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            })
            .collect();
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < self.duration)
    }

    /// Drops an expired burst. Returns true if something was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() && !self.is_active(now) {
            self.started_at = None;
            self.particles.clear();
            return true;
        }
        false
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Cells occupied by visible particles in a `width` x `height` area at `now`.
    pub fn cells(&self, now: Instant, width: u16, height: u16) -> Vec<ParticleCell> {
        let Some(start) = self.started_at else {
            return Vec::new();
        };
        if !self.is_active(now) || width == 0 || height == 0 {
            return Vec::new();
        }

        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        let travel = height as f32 + MAX_START_ABOVE_ROWS;

        self.particles
            .iter()
            .filter_map(|p| {
                let progress = ((elapsed - p.delay_secs) / FALL_SECS).clamp(0.0, 1.0);
                // ease-out
                let eased = 1.0 - (1.0 - progress).powi(2);
                let row = p.start_row + eased * travel;
                if row < 0.0 || row >= height as f32 {
                    return None;
                }
                let column = ((p.x * width as f32) as u16).min(width - 1);
                Some(ParticleCell {
                    column,
                    row: row as u16,
                    palette_index: p.palette_index,
                    glyph: p.glyph,
                })
            })
            .collect()
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn triggered(now: Instant) -> Celebration {
        let mut celebration = Celebration::new(Duration::from_millis(2000));
        celebration.trigger_with(now, &mut StdRng::seed_from_u64(7));
        celebration
    }

    #[test]
    fn test_inactive_until_triggered() {
        let celebration = Celebration::default();
        let now = Instant::now();
        assert!(!celebration.is_active(now));
        assert!(celebration.cells(now, 40, 20).is_empty());
    }

    #[test]
    fn test_trigger_creates_particles() {
        let now = Instant::now();
        let celebration = triggered(now);
        assert!(celebration.is_active(now));
        assert_eq!(celebration.particles().len(), PARTICLE_COUNT);
        for p in celebration.particles() {
            assert!((0.0..1.0).contains(&p.x));
            assert!(p.delay_secs < MAX_DELAY_SECS);
            assert!(p.start_row < 0.0);
            assert!(p.palette_index < PALETTE_SIZE);
        }
    }

    #[test]
    fn test_clears_itself_after_duration() {
        let now = Instant::now();
        let mut celebration = triggered(now);

        assert!(!celebration.tick(now + Duration::from_millis(1999)));
        assert!(celebration.is_active(now + Duration::from_millis(1999)));

        assert!(celebration.tick(now + Duration::from_millis(2000)));
        assert!(!celebration.is_active(now + Duration::from_millis(2000)));
        assert!(celebration.particles().is_empty());
        assert!(!celebration.tick(now + Duration::from_millis(3000)));
    }

    #[test]
    fn test_retrigger_extends_the_burst() {
        let now = Instant::now();
        let mut celebration = triggered(now);

        let later = now + Duration::from_millis(1500);
        celebration.trigger_with(later, &mut StdRng::seed_from_u64(8));

        // The first burst's deadline has passed, the second one's has not.
        let check = now + Duration::from_millis(2500);
        assert!(!celebration.tick(check));
        assert!(celebration.is_active(check));
        assert!(celebration.tick(later + Duration::from_millis(2000)));
    }

    #[test]
    fn test_cells_stay_inside_area() {
        let now = Instant::now();
        let celebration = triggered(now);
        for ms in [0u64, 300, 600, 900, 1200, 1600, 1999] {
            for cell in celebration.cells(now + Duration::from_millis(ms), 30, 10) {
                assert!(cell.column < 30);
                assert!(cell.row < 10);
            }
        }
    }

    #[test]
    fn test_particles_fall_into_view() {
        let now = Instant::now();
        let celebration = triggered(now);
        assert!(celebration.cells(now, 30, 10).is_empty());
        assert!(!celebration.cells(now + Duration::from_millis(900), 30, 10).is_empty());
    }
}
