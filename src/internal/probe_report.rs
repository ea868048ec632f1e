#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::indexing_slicing)]

//! Charts how many slots a `DoubleHashTable` lookup inspects as the table fills up.
//!
//! Set `RUST_LOG` to control the log output, e.g. `RUST_LOG=debug` to see every resize.

use std::error::Error;

use dsa_collections::{DoubleHashTable, ResizePolicy};
use plotters::{coord::Shift, prelude::*};
use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// A prime, so the table keeps exactly this many slots
const TABLE_SIZE: usize = 100_003;
// Load factors from 0.1 to 0.9
const NUM_LOAD_FACTORS: usize = 9;
const MIN_LOAD: f64 = 0.1;
const MAX_LOAD: f64 = 0.9;
const KEY_LENGTH: usize = 12;
const MISS_SAMPLES: usize = 10_000;
const SEED: u64 = 0x5eed_cafe;
const OUTPUT: &str = "probe_lengths.png";

/// Probe statistics of a table filled to one load factor
#[derive(Debug, Clone, Copy)]
struct Measurement {
    load: f64,
    avg_hit: f64,
    worst_hit: usize,
    avg_miss: f64,
    worst_miss: usize,
}

/// Series to draw: legend name, colour and points
type Series = (&'static str, RGBColor, Vec<(f64, f64)>);

fn random_key(rng: &mut StdRng, length: usize) -> String {
    (0..length).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Average and worst probe count over `keys`
fn probe_stats(table: &DoubleHashTable<usize>, keys: &[String]) -> (f64, usize) {
    let counts: Vec<usize> = keys.iter().map(|key| table.probe_count(key)).collect();
    let average = counts.iter().sum::<usize>() as f64 / counts.len().max(1) as f64;
    (average, counts.iter().copied().max().unwrap_or(0))
}

fn measure(
    policy: ResizePolicy,
    keys: &[String],
    misses: &[String],
    load: f64,
) -> Result<Measurement, Box<dyn Error>> {
    let n_keys = ((TABLE_SIZE as f64 * load) as usize).min(keys.len());
    let mut table = DoubleHashTable::with_policy(TABLE_SIZE, policy)?;

    for (value, key) in keys.iter().take(n_keys).enumerate() {
        table.put(key.as_str(), value);
    }
    if table.capacity() != TABLE_SIZE {
        warn!(capacity = table.capacity(), "table resized during measurement");
    }

    let (avg_hit, worst_hit) = probe_stats(&table, &keys[..n_keys]);
    let (avg_miss, worst_miss) = probe_stats(&table, misses);

    Ok(Measurement { load: table.load_factor(), avg_hit, worst_hit, avg_miss, worst_miss })
}

fn draw_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    y_desc: &str,
    series: &[Series],
) -> Result<(), Box<dyn Error>> {
    let font_family = "sans-serif";
    let max_y = series
        .iter()
        .flat_map(|(_, _, points)| points.iter().map(|&(_, y)| y))
        .fold(1.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(area)
        .caption(caption, (font_family, 30))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Load factor")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (name, color, points) in series {
        let line_style = ShapeStyle::from(color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
        chart.draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Never shrink, and only grow beyond the highest measured load
    let policy = ResizePolicy::new(0.95, 0.01, 0.5)?;

    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| MIN_LOAD + (MAX_LOAD - MIN_LOAD) * i as f64 / (NUM_LOAD_FACTORS - 1) as f64)
        .collect();

    // Generate the keys once so every load factor sees the same prefix
    let mut rng = StdRng::seed_from_u64(SEED);
    let max_keys = (TABLE_SIZE as f64 * MAX_LOAD) as usize;
    let keys: Vec<String> = (0..max_keys).map(|_| random_key(&mut rng, KEY_LENGTH)).collect();
    // One character longer than any stored key, so every lookup misses
    let misses: Vec<String> =
        (0..MISS_SAMPLES).map(|_| random_key(&mut rng, KEY_LENGTH + 1)).collect();

    let mut measurements = Vec::with_capacity(NUM_LOAD_FACTORS);
    for &load in &load_factors {
        let measurement = measure(policy, &keys, &misses, load)?;
        info!(
            load = measurement.load,
            avg_hit = measurement.avg_hit,
            worst_hit = measurement.worst_hit,
            avg_miss = measurement.avg_miss,
            worst_miss = measurement.worst_miss,
            "measured"
        );
        measurements.push(measurement);
    }

    let hit_color = RGBColor(50, 90, 220);
    let miss_color = RGBColor(220, 50, 50);
    let points = |select: fn(&Measurement) -> f64| -> Vec<(f64, f64)> {
        measurements.iter().map(|m| (m.load, select(m))).collect()
    };

    let root = BitMapBackend::new(OUTPUT, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));

    draw_chart(
        &areas[0],
        "Average Probes per Lookup",
        "Slots inspected",
        &[
            ("Successful lookup", hit_color, points(|m| m.avg_hit)),
            ("Unsuccessful lookup", miss_color, points(|m| m.avg_miss)),
        ],
    )?;
    draw_chart(
        &areas[1],
        "Worst-Case Probes per Lookup",
        "Slots inspected",
        &[
            ("Successful lookup", hit_color, points(|m| m.worst_hit as f64)),
            ("Unsuccessful lookup", miss_color, points(|m| m.worst_miss as f64)),
        ],
    )?;
    root.present()?;

    info!(output = OUTPUT, "chart written");
    Ok(())
}
