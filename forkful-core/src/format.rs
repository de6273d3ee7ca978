//! Display formatting shared by the catalog views.

/// Format total minutes as an hour label: 200 becomes "3:20h".
pub fn time_label(minutes: i32) -> String {
    format!("{}:{:02}h", minutes / 60, minutes % 60)
}

/// Format a cost in euros with two decimals: "3.50 €".
pub fn cost_label(cost: f32) -> String {
    format!("{:.2} €", cost)
}

/// Five-glyph star row; glyph n is filled when the rating clears n - 0.5.
pub fn stars(rating: i32) -> String {
    (1..=5)
        .map(|n| {
            if rating as f32 > n as f32 - 0.5 {
                '★'
            } else {
                '☆'
            }
        })
        .collect()
}
