//! Card-grid rendering for the monthly summary.
//!
//! The web app shows the month's totals as a row of four cards; here each
//! card becomes a boxed title/value pair laid out side by side.

pub struct Card {
    pub title: String,
    pub value: String,
}

impl Card {
    pub fn new<T: Into<String>, V: Into<String>>(title: T, value: V) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

pub fn render_cards(cards: &[Card]) -> String {
    let width = cards
        .iter()
        .map(|c| c.title.chars().count().max(c.value.chars().count()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut top = String::new();
    let mut titles = String::new();
    let mut values = String::new();
    let mut bottom = String::new();

    for card in cards {
        top.push_str(&format!("+{}+ ", "-".repeat(width)));
        titles.push_str(&format!("|{:^width$}| ", card.title, width = width));
        values.push_str(&format!("|{:^width$}| ", card.value, width = width));
        bottom.push_str(&format!("+{}+ ", "-".repeat(width)));
    }

    format!("{}\n{}\n{}\n{}\n", top, titles, values, bottom)
}
