//! Integration tests for tw-sim.

use tw_core::{Direction, Frame, PixelPos, SimConfig, TileCoord, WalkerId, WalkerRng};
use tw_map::{OccupancyGrid, TileGeometry, TileMap};
use tw_walk::{PassReport, WalkerRegistry};

use crate::{
    ControlContext, Controller, Intent, NoopController, NoopObserver, SimBuilder, SimError,
    SimObserver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_frames: u64) -> SimConfig {
    SimConfig {
        frame_duration_ms:      16,
        total_frames,
        seed:                   42,
        output_interval_frames: total_frames,
    }
}

/// 6x4 room with one wall tile at [3, 1].
fn room() -> TileMap {
    TileMap::from_ascii(
        "
        ......
        ...#..
        ......
        ......
        ",
        TileGeometry::square(16).unwrap(),
    )
    .unwrap()
}

fn px(x: i32, y: i32) -> PixelPos {
    PixelPos::new(x, y)
}

/// Returns the same intents for every walker on `frame`, nothing otherwise.
struct OnFrame {
    frame:   Frame,
    intents: Vec<Intent>,
}

impl Controller for OnFrame {
    fn control(&mut self, _w: WalkerId, ctx: &ControlContext<'_>, _r: &mut WalkerRng) -> Vec<Intent> {
        if ctx.frame == self.frame { self.intents.clone() } else { vec![] }
    }
}

/// Turns to a random cardinal direction 30% of the time.
struct Wander;

impl Controller for Wander {
    fn control(&mut self, _w: WalkerId, _ctx: &ControlContext<'_>, rng: &mut WalkerRng) -> Vec<Intent> {
        if rng.gen_bool(0.3) { vec![Intent::Face(rng.cardinal())] } else { vec![] }
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_and_marks_initial_tiles() {
        let sim = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(0, 0), 4)
            .walker(px(40, 20), 4)
            .build()
            .unwrap();
        assert_eq!(sim.walkers.len(), 2);
        assert_eq!(sim.actors.len(), 2);
        assert_eq!(sim.map.occupied_tiles().count(), 2);

        let (_, second) = sim.walkers.iter().nth(1).unwrap();
        assert_eq!(sim.map.occupant_at(TileCoord::new(2, 1)), Some(second.actor()));
    }

    #[test]
    fn walker_facing_sets_direction() {
        let sim = SimBuilder::new(test_config(10), room(), NoopController)
            .walker_facing(px(0, 0), 4, Direction::South)
            .build()
            .unwrap();
        let (_, walker) = sim.walkers.iter().next().unwrap();
        assert_eq!(walker.direction, Direction::South);
    }

    #[test]
    fn zero_frame_duration_errors() {
        let config = SimConfig { frame_duration_ms: 0, ..test_config(10) };
        let result = SimBuilder::new(config, room(), NoopController).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn shared_start_tile_errors() {
        let result = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(16, 16), 4)
            .walker(px(20, 30), 4)
            .build();
        assert!(matches!(result, Err(SimError::Blocked { tile, .. }) if tile == TileCoord::new(1, 1)));
    }

    #[test]
    fn wall_or_off_map_start_errors() {
        let on_wall = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(48, 16), 4)
            .build();
        assert!(matches!(on_wall, Err(SimError::Blocked { .. })));

        let off_map = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(-1, 0), 4)
            .build();
        assert!(matches!(off_map, Err(SimError::Blocked { .. })));
    }

    #[test]
    fn zero_speed_errors() {
        let result = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(0, 0), 0)
            .build();
        assert!(matches!(result, Err(SimError::Walk(_))));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn noop_runs_to_end_frame() {
        let mut sim = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(0, 0), 4)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_frame, Frame(10));
        assert_eq!(sim.clock.elapsed_ms(), 160);
    }

    #[test]
    fn run_frames_advances_clock() {
        let mut sim = SimBuilder::new(test_config(100), room(), NoopController).build().unwrap();
        sim.run_frames(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_frame, Frame(5));
        sim.run_frames(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_frame, Frame(8));
    }

    /// Observer that counts hook calls.
    #[derive(Default)]
    struct Counter {
        starts:    usize,
        ends:      usize,
        snapshots: Vec<Frame>,
        moved:     usize,
        finished:  Option<Frame>,
    }

    impl SimObserver for Counter {
        fn on_frame_start(&mut self, _f: Frame) {
            self.starts += 1;
        }
        fn on_frame_end(&mut self, _f: Frame, report: &PassReport) {
            self.ends += 1;
            self.moved += report.moved;
        }
        fn on_snapshot(
            &mut self,
            frame: Frame,
            _w: &WalkerRegistry,
            _a: &tw_actor::ActorStore,
            _m: &TileMap,
        ) {
            self.snapshots.push(frame);
        }
        fn on_sim_end(&mut self, final_frame: Frame) {
            self.finished = Some(final_frame);
        }
    }

    #[test]
    fn observer_hooks_fire_per_frame() {
        let config = SimConfig { output_interval_frames: 5, ..test_config(20) };
        let mut sim = SimBuilder::new(config, room(), NoopController)
            .walker_facing(px(0, 48), 1, Direction::East)
            .build()
            .unwrap();
        let mut obs = Counter::default();
        sim.run(&mut obs).unwrap();

        assert_eq!(obs.starts, 20);
        assert_eq!(obs.ends, 20);
        assert_eq!(obs.moved, 20);
        assert_eq!(obs.snapshots, vec![Frame(0), Frame(5), Frame(10), Frame(15)]);
        assert_eq!(obs.finished, Some(Frame(20)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SimConfig { output_interval_frames: 0, ..test_config(6) };
        let mut sim = SimBuilder::new(config, room(), NoopController).build().unwrap();
        let mut obs = Counter::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn same_seed_same_trajectories() {
        let run = || {
            let mut sim = SimBuilder::new(test_config(200), room(), Wander)
                .walker(px(0, 0), 3)
                .walker(px(80, 0), 5)
                .walker(px(0, 48), 7)
                .build()
                .unwrap();
            sim.run(&mut NoopObserver).unwrap();
            sim.actors.position.clone()
        };
        assert_eq!(run(), run());
    }
}

// ── Intent processing ─────────────────────────────────────────────────────────

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn face_intent_moves_walker_same_frame() {
        let controller = OnFrame { frame: Frame(0), intents: vec![Intent::Face(Direction::East)] };
        let mut sim = SimBuilder::new(test_config(10), room(), controller)
            .walker(px(0, 0), 16)
            .build()
            .unwrap();
        let w = sim.walkers.ids()[0];

        let report = sim.step();
        assert_eq!(report.moved, 1);
        assert_eq!(sim.walker_position(w), Some(px(16, 0)));
    }

    #[test]
    fn intents_apply_in_order() {
        let controller = OnFrame {
            frame:   Frame(0),
            intents: vec![Intent::Face(Direction::East), Intent::Stop],
        };
        let mut sim = SimBuilder::new(test_config(10), room(), controller)
            .walker(px(0, 0), 16)
            .build()
            .unwrap();
        let w = sim.walkers.ids()[0];
        sim.step();
        assert_eq!(sim.walker_position(w), Some(px(0, 0)));
        assert_eq!(sim.walkers.get(w).unwrap().direction, Direction::Stop);
    }

    #[test]
    fn zero_speed_intent_is_refused() {
        let controller = OnFrame { frame: Frame(0), intents: vec![Intent::SetSpeed(0)] };
        let mut sim = SimBuilder::new(test_config(10), room(), controller)
            .walker(px(0, 0), 6)
            .build()
            .unwrap();
        let w = sim.walkers.ids()[0];
        sim.step();
        assert_eq!(sim.walkers.get(w).unwrap().speed, 6);
    }

    #[test]
    fn destroy_intent_is_released_by_the_registry_pass_of_the_same_frame() {
        let controller = OnFrame {
            frame:   Frame(0),
            intents: vec![Intent::Destroy, Intent::Face(Direction::East)],
        };
        let mut sim = SimBuilder::new(test_config(10), room(), controller)
            .walker(px(16, 0), 4)
            .build()
            .unwrap();
        let w = sim.walkers.ids()[0];

        let report = sim.step();
        assert!(sim.walkers.is_empty());
        assert!(sim.walkers.get(w).is_none());
        assert_eq!(report.released, 1);
        assert_eq!(report.moved, 0);
        assert_eq!(sim.map.occupied_tiles().count(), 0);
    }

    #[test]
    fn destroy_between_frames_holds_cells_until_step() {
        let mut sim = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(16, 0), 4)
            .build()
            .unwrap();
        let w = sim.walkers.ids()[0];
        let actor = sim.walkers.get(w).unwrap().actor();
        sim.step();

        assert!(sim.destroy_walker(w));
        assert_eq!(sim.map.occupant_at(TileCoord::new(1, 0)), Some(actor));

        assert_eq!(sim.step().released, 1);
        assert_eq!(sim.map.occupant_at(TileCoord::new(1, 0)), None);
    }
}

// ── Runtime spawning and despawning ───────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use super::*;

    #[test]
    fn spawn_reserves_tile_immediately() {
        let mut sim = SimBuilder::new(test_config(10), room(), NoopController).build().unwrap();
        let w = sim.spawn_walker(px(32, 32), 4).unwrap();
        let actor = sim.walkers.get(w).unwrap().actor();
        assert_eq!(sim.map.occupant_at(TileCoord::new(2, 2)), Some(actor));

        let again = sim.spawn_walker(px(40, 40), 4);
        assert!(matches!(again, Err(SimError::Blocked { .. })));
        assert_eq!(sim.actors.len(), 1);
    }

    #[test]
    fn spawn_on_wall_errors() {
        let mut sim = SimBuilder::new(test_config(10), room(), NoopController).build().unwrap();
        assert!(matches!(sim.spawn_walker(px(48, 16), 4), Err(SimError::Blocked { .. })));
        assert!(sim.actors.is_empty());
    }

    #[test]
    fn failed_attach_despawns_the_new_actor() {
        let mut sim = SimBuilder::new(test_config(10), room(), NoopController).build().unwrap();
        assert!(matches!(sim.spawn_walker(px(0, 0), 0), Err(SimError::Walk(_))));
        assert!(sim.actors.is_empty());
        assert_eq!(sim.map.occupied_tiles().count(), 0);
    }

    #[test]
    fn despawned_actor_is_swept_next_frame() {
        let mut sim = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(0, 0), 4)
            .build()
            .unwrap();
        let w = sim.walkers.ids()[0];
        let actor = sim.walkers.get(w).unwrap().actor();
        sim.step();

        assert!(sim.despawn_actor(actor));
        let report = sim.step();
        assert_eq!(report.orphaned, 1);
        assert!(sim.walkers.is_empty());
        assert_eq!(sim.map.occupied_tiles().count(), 0);
    }

    #[test]
    fn destroy_walker_twice_is_a_no_op() {
        let mut sim = SimBuilder::new(test_config(10), room(), NoopController)
            .walker(px(0, 0), 4)
            .build()
            .unwrap();
        let w = sim.walkers.ids()[0];
        assert!(sim.destroy_walker(w));
        assert!(!sim.destroy_walker(w));
    }
}
