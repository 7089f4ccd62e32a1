use chrono::DateTime;
use prelo_board::{BookCard, CardRow, Column};

// Builder helpers shared by the board test suites.

pub fn card(id: &str, title: &str, status: Column) -> BookCard {
    BookCard {
        id: id.to_string(),
        title: title.to_string(),
        isbn: format!("978-85-0000-{id}"),
        invoice_ref: None,
        sent_to_printer: None,
        arrived_at_publisher: None,
        expected_arrival: None,
        expected_quantity: None,
        arrived_quantity: None,
        created_at: DateTime::from_timestamp(1_750_000_000, 0).unwrap(),
        status,
    }
}

pub fn row(id: &str, title: &str, status: Column) -> CardRow {
    CardRow::from(card(id, title, status))
}
