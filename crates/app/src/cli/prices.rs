//! Market price board.

use std::path::Path;

use hevea::{fixtures::Fixture, prices::inr};

use super::display;

pub fn run(fixtures: &Path) -> Result<(), String> {
    let mut fixture = Fixture::with_base_path(fixtures);

    fixture
        .load_quotes("tripura")
        .map_err(|error| format!("failed to load market prices: {error}"))?;

    let board = fixture.board();

    if let Some(average) = board.average() {
        println!("average price: {}/kg", inr(average.round_dp(2)));
    }

    if let Some(highest) = board.highest() {
        println!("highest: {} at {}/kg", highest.grade, inr(highest.current));
    }

    println!("{}", display::quotes_table(&board.quotes));

    Ok(())
}
