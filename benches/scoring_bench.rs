use criterion::{criterion_group, criterion_main, Criterion};
use roadscore::geometry::CoordinateSlot;
use roadscore::lanes::{Metric, Side, LANES_PER_SIDE};
use roadscore::matcher::{nearest_segment, Query};
use roadscore::model::{RawMeasurementRow, RoadSegment};
use roadscore::scorer::Scorer;
use std::hint::black_box;
use strum::IntoEnumIterator;

const SEGMENTS: usize = 5000;

fn random_rows(rng: &mut fastrand::Rng) -> Vec<RawMeasurementRow> {
    (0..SEGMENTS)
        .map(|i| {
            let mut row = RawMeasurementRow {
                nh_number: Some("NH48".to_string()),
                start_chainage: Some(i as f64 * 0.5),
                end_chainage: Some(i as f64 * 0.5 + 0.5),
                ..Default::default()
            };
            for metric in Metric::iter() {
                let scale = match metric {
                    Metric::Roughness => 3000.0,
                    Metric::RutDepth | Metric::CrackArea => 6.0,
                    Metric::Ravelling => 1.2,
                };
                let readings = row.readings.get_mut(metric);
                for side in [Side::Left, Side::Right] {
                    for v in readings.side_mut(side).iter_mut().take(LANES_PER_SIDE) {
                        *v = if rng.u8(..10) == 0 {
                            None
                        } else {
                            Some(rng.f64() * scale)
                        };
                    }
                }
            }
            // Segments strung along a north-running highway.
            let lat = 22.0 + i as f64 * 0.0045;
            for (side, lane) in [(Side::Left, 1), (Side::Right, 1)] {
                if let Some(line) = row.geometry.lane_mut(side, lane) {
                    line.start = CoordinateSlot::at(lat, 73.18);
                    line.end = CoordinateSlot::at(lat + 0.0045, 73.18);
                }
            }
            row
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(42);
    let rows = random_rows(&mut rng);
    let scorer = Scorer::new().expect("valid constants");

    c.bench_function("score_batch (5k rows)", |b| {
        b.iter(|| scorer.score_batch(black_box(&rows)))
    });

    let segments: Vec<RoadSegment> = scorer.score_batch(&rows).expect("finite readings");
    let queries: Vec<Query> = (0..100)
        .filter_map(|_| Query::new(22.0 + rng.f64() * 22.0, 73.18, 100.0).ok())
        .collect();

    c.bench_function("nearest_segment (5k segments, 100 queries)", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(nearest_segment(black_box(&segments), q));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
