//! quickstart: a small transit map driven for three periods.
//!
//! Seven stations, two of them locked until later periods.  The script
//! draws three lines, grants resources at each period boundary the way the
//! outer game loop would, and writes CSV snapshots to `output/quickstart`.
//!
//! Pass a TOML file as the first argument to override `TransitConfig`.
//! Set `RUST_LOG=debug` to see every line edit and docking event.

mod logger;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use ts_core::{LineColor, Point2, StationId, StationShape, TransitConfig};
use ts_mobility::DockReport;
use ts_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ts_policy::ReachabilityPolicy;
use ts_sim::{Sim, SimBuilder, SimObserver, SimSnapshot, TickSummary};
use ts_station::{Rider, SpawnEvent, StationSpec};

// ── Constants ─────────────────────────────────────────────────────────────────

const DT:               f32 = 1.0 / 30.0;
const TICKS_PER_PERIOD: u64 = 30 * 60;
const PERIODS:          u32 = 3;
const OUTPUT_DIR:       &str = "output/quickstart";

const CIRCLE:   StationId = StationId(0);
const SQUARE:   StationId = StationId(1);
const TRIANGLE: StationId = StationId(2);
const CIRCLE_2: StationId = StationId(3);
const STAR:     StationId = StationId(4);
const DIAMOND:  StationId = StationId(5);
const CROSS:    StationId = StationId(6);

fn stations() -> Vec<StationSpec> {
    vec![
        StationSpec::new(StationShape::Circle, Point2::new(0.0, 0.0)),
        StationSpec::new(StationShape::Square, Point2::new(160.0, 20.0)),
        StationSpec::new(StationShape::Triangle, Point2::new(320.0, 0.0)),
        StationSpec::new(StationShape::Circle, Point2::new(160.0, 180.0)),
        StationSpec::new(StationShape::Star, Point2::new(320.0, 200.0)),
        StationSpec::new(StationShape::Diamond, Point2::new(0.0, 200.0)).locked(),
        StationSpec::new(StationShape::Cross, Point2::new(80.0, 10.0)).locked(),
    ]
}

// ── Observer: CSV output plus a few counters ──────────────────────────────────

struct DemoObserver<W: OutputWriter> {
    inner:       SimOutputObserver<W>,
    transfers:   usize,
    deliveries:  usize,
    peak_queue:  usize,
    snapshots:   usize,
}

impl<W: OutputWriter> DemoObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, transfers: 0, deliveries: 0, peak_queue: 0, snapshots: 0 }
    }
}

impl<W: OutputWriter> SimObserver for DemoObserver<W> {
    fn on_rider_spawned(&mut self, tick: ts_core::Tick, event: &SpawnEvent) {
        self.inner.on_rider_spawned(tick, event);
    }

    fn on_dock(&mut self, tick: ts_core::Tick, report: &DockReport) {
        self.transfers += report.transferred.len();
        self.inner.on_dock(tick, report);
    }

    fn on_rider_arrived(&mut self, tick: ts_core::Tick, rider: &Rider, station: StationId) {
        self.deliveries += 1;
        self.inner.on_rider_arrived(tick, rider, station);
    }

    fn on_period_advanced(&mut self, tick: ts_core::Tick, period: u32, unlocked: &[StationId]) {
        println!("  period {period} at {tick}: unlocked {unlocked:?}");
        self.inner.on_period_advanced(tick, period, unlocked);
    }

    fn on_tick_end(&mut self, tick: ts_core::Tick, summary: &TickSummary) {
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, snapshot: &SimSnapshot<'_>) {
        self.snapshots += 1;
        let longest = snapshot.stations.iter().map(|s| s.queue_len()).max().unwrap_or(0);
        self.peak_queue = self.peak_queue.max(longest);
        self.inner.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: ts_core::Tick, score: u64) {
        self.inner.on_sim_end(final_tick, score);
    }
}

// ── Script ────────────────────────────────────────────────────────────────────

fn load_config() -> Result<TransitConfig> {
    match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => TransitConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(TransitConfig { snapshot_interval_ticks: 30, ..TransitConfig::default() }),
    }
}

/// The player's moves for `period`.  Rejections are printed, not fatal.
fn play_period(sim: &mut Sim<ReachabilityPolicy>, period: u32) {
    let moves: &[(StationId, StationId, LineColor)] = match period {
        0 => &[
            (CIRCLE, SQUARE, LineColor::Red),
            (SQUARE, TRIANGLE, LineColor::Red),
            (SQUARE, CIRCLE_2, LineColor::Blue),
            (CIRCLE_2, STAR, LineColor::Blue),
        ],
        1 => &[(CIRCLE, DIAMOND, LineColor::Red), (STAR, TRIANGLE, LineColor::Blue)],
        _ => &[(DIAMOND, CIRCLE_2, LineColor::Green)],
    };
    for &(a, b, color) in moves {
        let ok = sim.try_connect(a, b, color);
        println!("  connect {a} - {b} on {color}: {}", if ok { "ok" } else { "rejected" });
    }

    if period == 2 {
        // Cross opens up between Circle and Square on Red.
        if let Some(red) = sim.line_by_color(LineColor::Red).map(|l| l.id) {
            let segment = sim.lines()[red.index()].position_of(CIRCLE).unwrap_or(0);
            let ok = sim.insert_station(red, segment, CROSS, 0.5);
            println!("  insert {CROSS} into {red}: {}", if ok { "ok" } else { "rejected" });
        }
    }
}

fn main() -> Result<()> {
    logger::init_logger();

    let config = load_config()?;
    println!("=== quickstart: transit simulation ===");
    println!("Seed: {}  |  Periods: {PERIODS}  |  dt: {DT:.4} s", config.seed);
    println!();

    let mut sim = SimBuilder::new(config, ReachabilityPolicy).stations(stations()).build()?;

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = DemoObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    for period in 0..PERIODS {
        if period > 0 {
            let unlocks: &[StationId] = if period == 1 { &[DIAMOND] } else { &[CROSS] };
            sim.advance_period(unlocks, &mut obs);
            sim.add_vehicle_stock(1);
            sim.add_upgrade_stock(1);
        }
        play_period(&mut sim, period);

        if period == 1 {
            if let Some(blue) = sim.line_by_color(LineColor::Blue).map(|l| l.id) {
                let spawned = sim.spawn_vehicle(blue, true);
                println!("  extra vehicle on {blue}: {spawned:?}");
            }
        }
        if period == 2 {
            let ok = sim.try_upgrade_vehicle_capacity(ts_core::VehicleId(0));
            println!("  upgrade {}: {}", ts_core::VehicleId(0), if ok { "ok" } else { "rejected" });
        }

        sim.run_ticks(TICKS_PER_PERIOD, DT, &mut obs)?;
    }
    obs.on_sim_end(sim.now(), sim.score());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // ── Summary ───────────────────────────────────────────────────────────
    println!();
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  score        : {}", sim.score());
    println!("  deliveries   : {}", obs.deliveries);
    println!("  transfers    : {}", obs.transfers);
    println!("  peak queue   : {}", obs.peak_queue);
    println!("  snapshots    : {} (written to {OUTPUT_DIR})", obs.snapshots);
    let stock = sim.stock();
    println!(
        "  stock        : vehicles {}  upgrades {}  tunnels {}  line cap {}",
        stock.vehicles, stock.upgrades, stock.tunnels, stock.line_cap,
    );
    println!();

    println!("{:<8} {:<8} {:<24}", "Line", "Colour", "Stations");
    println!("{}", "-".repeat(40));
    for line in sim.lines() {
        let seq: Vec<String> = line.stations().iter().map(|s| s.0.to_string()).collect();
        println!("{:<8} {:<8} {:<24}", line.id.0, line.color, seq.join(" → "));
    }
    println!();

    println!("{:<8} {:<6} {:<10} {:<10} {:<8}", "Vehicle", "Line", "x", "y", "Load");
    println!("{}", "-".repeat(44));
    for v in sim.network().vehicles() {
        if let Some(view) = sim.vehicle_view(v.id) {
            println!(
                "{:<8} {:<6} {:<10.1} {:<10.1} {}/{}",
                view.id.0, view.line.0, view.position.x, view.position.y, view.passengers, view.capacity,
            );
        }
    }

    Ok(())
}
