use super::Schedule;
use tui::style::Color;

/// Bar colors, picked by interval index.
pub const PALETTE: [Color; 8] = [
    Color::Rgb(0x34, 0x98, 0xdb),
    Color::Rgb(0xe7, 0x4c, 0x3c),
    Color::Rgb(0x2e, 0xcc, 0x71),
    Color::Rgb(0xf3, 0x9c, 0x12),
    Color::Rgb(0x9b, 0x59, 0xb6),
    Color::Rgb(0x1a, 0xbc, 0x9c),
    Color::Rgb(0x34, 0x49, 0x5e),
    Color::Rgb(0x95, 0xa5, 0xa6),
];

pub fn bar_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Width in columns of each interval's bar: its share of the schedule span
/// (the end of the last interval) applied to `width`.
pub fn bar_widths(schedule: &Schedule, width: u16) -> Vec<u16> {
    let span = schedule.span();
    if span == 0 {
        return Vec::new();
    }

    schedule
        .iter()
        .map(|interval| {
            let share = interval.duration() as f64 / span as f64;
            (share * width as f64).round() as u16
        })
        .collect()
}

/// Text rendering of the chart: one row of bars followed by one line per
/// interval with its label and bounds.
pub fn render_plain(schedule: &Schedule, width: u16) -> String {
    if schedule.is_empty() {
        return String::from("(empty schedule)\n");
    }

    let mut bars = String::from("|");
    for (index, (interval, columns)) in schedule
        .iter()
        .zip(bar_widths(schedule, width))
        .enumerate()
    {
        let fill = char::from(b'A' + (index % PALETTE.len()) as u8);
        let columns = usize::from(columns.max(1));
        let label: String = interval.name.chars().take(columns).collect();
        bars.push_str(&label);
        bars.extend(std::iter::repeat(fill).take(columns - label.chars().count()));
        bars.push('|');
    }

    let mut out = bars;
    out.push('\n');
    for interval in schedule {
        out.push_str(&format!("  {interval}\n"));
    }
    out
}
