use std::fmt::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::card::view::ViewModel;

// Stream Deck key images are 144×144.
const SIZE: f32 = 144.0;
const PAD: f32 = 4.0;
const GAP: f32 = 4.0;
// More tiles than this no longer fit a readable value on the key.
const MAX_TILES: usize = 6;

const BACKGROUND: &str = "#1C1C1C";
const START_COLOR: &str = "#4CAF50";
const STOP_COLOR: &str = "#F44336";

/// Render the full card: header, counter tiles, status line and the
/// action control.
pub fn render_card(title: &str, view: &ViewModel) -> String {
    let mut svg = open_svg(title);

    let n = view.counters.len().min(MAX_TILES);
    if n > 0 {
        let w = (SIZE - 2.0 * PAD - GAP * (n as f32 - 1.0)) / n as f32;
        for (i, c) in view.counters.iter().take(n).enumerate() {
            let x = PAD + i as f32 * (w + GAP);
            let cx = x + w / 2.0;
            let value_size = value_font_size(c.value, w);
            write!(
                svg,
                "<g class='stat' data-icon='{icon}'>\
                 <rect x='{x:.1}' y='26' width='{w:.1}' height='56' rx='8' fill='{color}'/>\
                 <text x='{cx:.1}' y='60' font-size='{value_size:.0}' font-weight='bold' text-anchor='middle' fill='white'>{value}</text>\
                 <text x='{cx:.1}' y='76' font-size='10' text-anchor='middle' fill='white'>{label}</text>\
                 </g>",
                icon = escape(&c.icon),
                color = escape(&c.color),
                value = c.value,
                label = escape(&c.label),
            )
            .ok();
        }
    }

    let (status, button, fill, class) = if view.status_on {
        ("In progress", "■ STOP", STOP_COLOR, "stop-btn")
    } else {
        ("Idle", "▶ START", START_COLOR, "start-btn")
    };
    write!(
        svg,
        "<text x='72' y='99' font-size='11' text-anchor='middle' fill='#BDBDBD'>Status: {status}</text>\
         <g class='btn {class}'>\
         <rect x='{PAD}' y='106' width='136' height='34' rx='8' fill='{fill}'/>\
         <text x='72' y='129' font-size='16' font-weight='bold' text-anchor='middle' fill='white'>{button}</text>\
         </g>",
    )
    .ok();

    svg.push_str("</svg>");
    svg
}

/// Render the neutral placeholder shown until the card is configured.
pub fn render_loading(title: &str) -> String {
    let mut svg = open_svg(title);
    svg.push_str(
        "<text x='72' y='80' font-size='14' text-anchor='middle' fill='#BDBDBD'>Loading…</text></svg>",
    );
    svg
}

/// Wrap SVG markup as a `data:` URL suitable for `set_image`.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

fn open_svg(title: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='144' height='144' viewBox='0 0 144 144' font-family='sans-serif'>\
         <rect width='144' height='144' rx='12' fill='{BACKGROUND}'/>\
         <text x='72' y='18' font-size='13' font-weight='bold' text-anchor='middle' fill='white'>{}</text>",
        escape(title)
    )
}

/// Shrink long numbers so they stay inside their tile.
fn value_font_size(value: i64, tile_width: f32) -> f32 {
    let digits = value.to_string().len() as f32;
    (tile_width / (digits * 0.6)).clamp(10.0, 24.0)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::view::CounterView;

    fn counter(label: &str, value: i64) -> CounterView {
        CounterView {
            label: label.into(),
            icon: "mdi:water".into(),
            color: "#03A9F4".into(),
            value,
        }
    }

    #[test]
    fn card_shows_values_and_affordance() {
        let off = render_card(
            "Baby Tracker",
            &ViewModel { status_on: false, counters: vec![counter("Pee", 3), counter("Poo", 0)] },
        );
        assert!(off.contains(">3</text>"));
        assert!(off.contains(">0</text>"));
        assert!(off.contains("start-btn"));
        assert!(off.contains("Status: Idle"));
        assert!(!off.contains("undefined"));

        let on = render_card("Baby Tracker", &ViewModel { status_on: true, counters: vec![] });
        assert!(on.contains("stop-btn"));
        assert!(on.contains("Status: In progress"));
        assert!(!on.contains("class='stat'"));
    }

    #[test]
    fn text_is_escaped() {
        let svg = render_card(
            "<b>&",
            &ViewModel { status_on: false, counters: vec![counter("a'b", 1)] },
        );
        assert!(svg.contains("&lt;b&gt;&amp;"));
        assert!(svg.contains("a&apos;b"));
    }

    #[test]
    fn long_values_shrink() {
        assert!(value_font_size(1_000_000, 40.0) < value_font_size(3, 40.0));
        assert!(value_font_size(i64::MIN, 10.0) >= 10.0);
    }

    #[test]
    fn many_counters_are_capped() {
        let counters = (0..40).map(|i| counter("c", i)).collect();
        let svg = render_card("Baby Tracker", &ViewModel { status_on: false, counters });
        assert_eq!(svg.matches("class='stat'").count(), MAX_TILES);
        assert!(!svg.contains("width='-"));
        assert!(!svg.contains("x='-"));
    }

    #[test]
    fn tile_count_fills_key_width() {
        for n in 1..=MAX_TILES as i64 {
            let counters = (0..n).map(|i| counter("c", i)).collect();
            let svg = render_card("Baby Tracker", &ViewModel { status_on: true, counters });
            assert_eq!(svg.matches("class='stat'").count(), n as usize);
            assert!(!svg.contains("width='-"));
        }
    }

    #[test]
    fn data_url_is_base64() {
        let url = svg_data_url("<a fill='#fff'/>");
        let encoded = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), b"<a fill='#fff'/>");
    }
}
