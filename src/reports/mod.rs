use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use roadscore::api::{BatchEntry, LocateResponse};
use roadscore::lanes::{Metric, Span};
use roadscore::model::RoadSegment;
use roadscore::scorer::{BatchSummary, QualityBand};
use roadscore::structure::expand_structure_abbreviations;
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn pct(score: f64) -> String {
    format!("{:.1}", score * 100.0)
}

fn opt_num(v: Option<f64>, precision: usize) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{:.*}", precision, x))
}

fn band_cell(score: f64) -> Cell {
    let band = QualityBand::from_score(score);
    let color = match band {
        QualityBand::Good => Color::Green,
        QualityBand::Fair => Color::Cyan,
        QualityBand::Poor => Color::Yellow,
        QualityBand::VeryPoor => Color::Red,
    };
    Cell::new(band.to_string()).fg(color)
}

pub fn print_batch_summary(summary: &BatchSummary) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Segments").add_attribute(Attribute::Bold),
        Cell::new("Mean %").fg(Color::Cyan),
        Cell::new("Best %"),
        Cell::new("Worst %"),
    ]);
    table.add_row(vec![
        Cell::new(summary.total_segments),
        Cell::new(opt_num(summary.mean_quality.map(|q| q * 100.0), 1)).fg(Color::Cyan),
        Cell::new(opt_num(summary.best_quality.map(|q| q * 100.0), 1)),
        Cell::new(opt_num(summary.worst_quality.map(|q| q * 100.0), 1)),
    ]);
    align_right(&mut table, 0..=3);
    println!("\n{}", table);

    let mut bands = new_table();
    bands.add_row(vec![
        Cell::new("Band").add_attribute(Attribute::Bold),
        Cell::new("Segments"),
    ]);
    for band in QualityBand::iter() {
        bands.add_row(vec![
            Cell::new(band.to_string()),
            Cell::new(summary.bands.get(band)),
        ]);
    }
    align_right(&mut bands, 1..=1);
    println!("{}", bands);
}

pub fn print_locate_report(response: &LocateResponse) {
    let (segment, distance) = match (&response.segment, response.distance) {
        (Some(seg), Some(d)) => (seg, d),
        _ => {
            println!(
                "{}",
                response
                    .message
                    .as_deref()
                    .unwrap_or("No road segment found")
            );
            return;
        }
    };

    println!(
        "\nSegment #{} on {} ({} to {}), {:.1} m away",
        segment.id,
        segment.nh_number.as_deref().unwrap_or("unknown NH"),
        opt_num(segment.start_chainage, 3),
        opt_num(segment.end_chainage, 3),
        distance
    );
    if let Some(details) = &segment.structure_details {
        println!("Structure: {}", expand_structure_abbreviations(details));
    }
    if let Some(remark) = &segment.remark {
        println!("Remark: {}", remark);
    }

    let mut table = new_table();
    let mut header = vec![Cell::new("Metric").add_attribute(Attribute::Bold)];
    for span in Span::iter() {
        header.push(Cell::new(format!("{} avg", span)));
        header.push(Cell::new(format!("{} %", span)));
    }
    header.push(Cell::new("Limit"));
    table.add_row(header);

    for metric in Metric::iter() {
        let mut row = vec![Cell::new(format!("{} ({})", metric, metric.unit()))];
        for span in Span::iter() {
            row.push(Cell::new(opt_num(
                *segment.averages.get(metric).get(span),
                2,
            )));
            row.push(Cell::new(pct(*segment.scores.get(metric).get(span))));
        }
        row.push(Cell::new(opt_num(segment.limits.get(metric), 2)));
        table.add_row(row);
    }

    let mut quality = vec![Cell::new("Quality").add_attribute(Attribute::Bold)];
    for span in Span::iter() {
        quality.push(Cell::new(""));
        quality.push(Cell::new(pct(*segment.quality.get(span))).add_attribute(Attribute::Bold));
    }
    quality.push(band_cell(segment.quality.overall));
    table.add_row(quality);

    align_right(&mut table, 1..=7);
    println!("{}", table);
}

pub fn print_segment_table(segments: &[RoadSegment]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("NH"),
        Cell::new("Start"),
        Cell::new("End"),
        Cell::new("Quality %").fg(Color::Cyan),
        Cell::new("Band"),
        Cell::new("Structure"),
    ]);

    for seg in segments {
        table.add_row(vec![
            Cell::new(seg.id),
            Cell::new(seg.nh_number.as_deref().unwrap_or("-")),
            Cell::new(opt_num(seg.start_chainage, 3)),
            Cell::new(opt_num(seg.end_chainage, 3)),
            Cell::new(pct(seg.quality.overall)).fg(Color::Cyan),
            band_cell(seg.quality.overall),
            Cell::new(seg.structure_details.as_deref().unwrap_or("")),
        ]);
    }
    align_right(&mut table, 2..=4);
    println!("\n{}", table);
}

pub fn print_batch_table(entries: &[BatchEntry]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Lat").add_attribute(Attribute::Bold),
        Cell::new("Lng").add_attribute(Attribute::Bold),
        Cell::new("Segment"),
        Cell::new("Distance m"),
        Cell::new("Quality %").fg(Color::Cyan),
        Cell::new("Note"),
    ]);

    for entry in entries {
        let mut row = vec![Cell::new(&entry.lat), Cell::new(&entry.lng)];
        match (&entry.result, &entry.error) {
            (Some(resp), _) => match (&resp.segment, resp.distance) {
                (Some(seg), Some(d)) => {
                    row.push(Cell::new(seg.id));
                    row.push(Cell::new(format!("{:.1}", d)));
                    row.push(Cell::new(pct(seg.quality.overall)).fg(Color::Cyan));
                    row.push(Cell::new(""));
                }
                _ => {
                    row.extend(["-", "-", "-"].map(Cell::new));
                    row.push(Cell::new(resp.message.as_deref().unwrap_or("")).fg(Color::Yellow));
                }
            },
            (None, Some(err)) => {
                row.extend(["-", "-", "-"].map(Cell::new));
                row.push(Cell::new(err).fg(Color::Red));
            }
            (None, None) => row.extend(["-", "-", "-", ""].map(Cell::new)),
        }
        table.add_row(row);
    }
    align_right(&mut table, 2..=4);
    println!("\n{}", table);
}
