//! wander — a handful of walkers roaming a small walled room.
//!
//! Each walker picks a new heading at random, turns away from walls and
//! other walkers, and now and then changes pace.  Halfway through the run
//! one walker is destroyed and a newcomer spawned in its place, so the
//! deferred release shows up in `frame_summaries.csv`.
//!
//! Usage: `wander [config.json]`.  The JSON file may set any `SimConfig`
//! field; missing fields keep their defaults.  Set `RUST_LOG=debug` to see
//! walker lifecycle events.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tw_actor::ActorStore;
use tw_core::{ActorId, Direction, Frame, PixelPos, SimConfig, WalkerId, WalkerRng};
use tw_map::{OccupancyGrid, TileGeometry, TileMap};
use tw_output::{CsvWriter, OutputWriter, SimOutputObserver};
use tw_sim::{ControlContext, Controller, Intent, SimBuilder, SimObserver};
use tw_walk::{PassReport, WalkerRegistry, adjacent_tile};

// ── Constants ─────────────────────────────────────────────────────────────────

const TILE_SIZE:        i32  = 16;
const TURN_CHANCE:      f64  = 0.05;
const PAUSE_CHANCE:     f64  = 0.01;
const PACE_CHANCE:      f64  = 0.02;
const MAX_SPEED:        u32  = 6;
const PROGRESS_EVERY:   u64  = 100;
const OUTPUT_DIR:       &str = "output/wander";

const ROOM: &str = "
    ################
    #..............#
    #..##......#...#
    #..#.......#...#
    #......##......#
    #..............#
    #...#......##..#
    #...#..........#
    ################
";

/// Starting tiles (col, row).
const STARTS: [(i32, i32); 6] = [(1, 1), (14, 1), (6, 3), (9, 5), (1, 7), (14, 7)];

// ── Controller ────────────────────────────────────────────────────────────────

/// Random-walk steering.
struct WanderController;

impl Controller for WanderController {
    fn control(
        &mut self,
        walker: WalkerId,
        ctx:    &ControlContext<'_>,
        rng:    &mut WalkerRng,
    ) -> Vec<Intent> {
        let Some(w) = ctx.walker(walker) else {
            return vec![];
        };
        let mut intents = Vec::new();

        if rng.gen_bool(PACE_CHANCE) {
            intents.push(Intent::SetSpeed(rng.gen_range(1..=MAX_SPEED)));
        }

        // Only an idle walker can change course without finishing a tile.
        if w.state().is_en_route() {
            return intents;
        }

        if w.direction == Direction::Stop {
            if rng.gen_bool(TURN_CHANCE * 4.0) {
                intents.push(Intent::Face(rng.cardinal()));
            }
            return intents;
        }

        if rng.gen_bool(PAUSE_CHANCE) {
            intents.push(Intent::Stop);
        } else if rng.gen_bool(TURN_CHANCE) || !ahead_is_clear(w.actor(), w.direction, ctx) {
            let open: Vec<Direction> = Direction::CARDINALS
                .into_iter()
                .filter(|&d| ahead_is_clear(w.actor(), d, ctx))
                .collect();
            match rng.choose(&open) {
                Some(&d) => intents.push(Intent::Face(d)),
                None => intents.push(Intent::Stop),
            }
        }
        intents
    }
}

/// `true` if the tile one step from `actor` in `direction` can be entered.
fn ahead_is_clear(actor: ActorId, direction: Direction, ctx: &ControlContext<'_>) -> bool {
    let Some(pos) = ctx.actors.position(actor) else {
        return false;
    };
    let here = ctx.map.pixels_to_coords(pos);
    let next = adjacent_tile(here, direction, ctx.map.bounds());
    next != here && ctx.map.is_walkable_at(next)
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    pixels:        u64,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, pixels: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, report: &PassReport) {
        self.summary_rows += 1;
        self.pixels += report.pixels;
        if frame.0.is_multiple_of(PROGRESS_EVERY) {
            info!(%frame, moved = report.moved, idle = report.idle, "progress");
        }
        self.inner.on_frame_end(frame, report);
    }

    fn on_snapshot(
        &mut self,
        frame:   Frame,
        walkers: &WalkerRegistry,
        actors:  &ActorStore,
        map:     &TileMap,
    ) {
        self.snapshot_rows += walkers.len();
        self.inner.on_snapshot(frame, walkers, actors, map);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig::default(),
    };
    info!(
        frames = config.total_frames,
        frame_ms = config.frame_duration_ms,
        seed = config.seed,
        "=== wander ==="
    );

    // 1. Map.
    let map = TileMap::from_ascii(ROOM, TileGeometry::square(TILE_SIZE)?)?;
    let bounds = map.bounds();
    info!(width = bounds.width, height = bounds.height, "room loaded");

    // 2. Sim with walkers on their starting tiles.
    let mut builder = SimBuilder::new(config.clone(), map, WanderController);
    for (i, &(col, row)) in STARTS.iter().enumerate() {
        let pos = PixelPos::new(col * TILE_SIZE, row * TILE_SIZE);
        builder = builder.walker(pos, 2 + (i as u32 % MAX_SPEED));
    }
    let mut sim = builder.build()?;

    // 3. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer, &config));

    // 4. Run the first half, swap one walker, run the rest.
    let t0 = Instant::now();
    sim.run_frames(config.total_frames / 2, &mut obs)?;

    if let Some(&first) = sim.walkers.ids().first() {
        sim.destroy_walker(first);
    }
    let newcomer = sim.spawn_walker(PixelPos::new(7 * TILE_SIZE, 7 * TILE_SIZE), 3);
    match newcomer {
        Ok(w) => info!(walker = %w, "newcomer spawned"),
        Err(e) => info!(error = %e, "newcomer could not be placed"),
    }

    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  walker_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  frame_summaries.csv  : {} rows", obs.summary_rows);
    println!("  pixels travelled     : {}", obs.pixels);
    println!();

    println!("{:<10} {:<10} {:<8} {:<12}", "Walker", "Position", "Heading", "Destination");
    println!("{}", "-".repeat(42));
    for (id, w) in sim.walkers.iter() {
        let pos = sim.actors.position(w.actor()).unwrap_or_default();
        let dest = w.destination().map_or_else(|| "-".to_owned(), |t| t.to_string());
        println!("{:<10} {:<10} {:<8} {:<12}", id.0, pos.to_string(), w.direction.as_str(), dest);
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
