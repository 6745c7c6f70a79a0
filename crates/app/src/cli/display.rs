//! Table rendering for CLI output.

use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};

use hevea::{
    listings::Listing,
    prices::{MarketQuote, Trend, inr},
};

use hevea_app::domain::inquiries::models::Inquiry;

/// Render a header plus rows with the house table style.
pub(crate) fn table<R>(header: &[&str], rows: R) -> String
where
    R: IntoIterator<Item = Vec<String>>,
{
    let mut builder = Builder::default();

    builder.push_record(header.iter().copied());

    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    table.to_string()
}

/// Catalog view for buyers: one row per listing, keyed for follow-up
/// inquiries.
pub(crate) fn catalog_table<'a>(
    listings: impl IntoIterator<Item = (Option<&'a str>, &'a Listing)>,
) -> String {
    let rows = listings.into_iter().map(|(key, listing)| {
        vec![
            key.unwrap_or("-").to_string(),
            listing.grade.to_string(),
            listing.seller.name.clone(),
            listing.seller.location.clone(),
            format!("{} kg", listing.quantity),
            listing.quality.to_string(),
            moisture_cell(listing),
            inr(listing.price).to_string(),
        ]
    });

    table(
        &["Ref", "Grade", "Farmer", "Location", "Quantity", "Quality", "Moisture", "Price/kg"],
        rows,
    )
}

/// A farmer's own listings.
pub(crate) fn my_listings_table<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> String {
    let rows = listings.into_iter().map(|listing| {
        vec![
            listing.grade.to_string(),
            format!("{} kg", listing.quantity),
            listing.quality.to_string(),
            moisture_cell(listing),
            inr(listing.price).to_string(),
            listing.created_at.strftime("%Y-%m-%d").to_string(),
            listing.description.clone(),
        ]
    });

    table(
        &["Grade", "Quantity", "Quality", "Moisture", "Price/kg", "Listed", "Description"],
        rows,
    )
}

/// A farmer's received inquiries.
pub(crate) fn inquiries_table<'a>(inquiries: impl IntoIterator<Item = &'a Inquiry>) -> String {
    let rows = inquiries.into_iter().map(|inquiry| {
        vec![
            inquiry.buyer_name.clone(),
            inquiry.buyer_email.clone(),
            inquiry.message.clone(),
            inquiry.created_at.strftime("%Y-%m-%d").to_string(),
        ]
    });

    table(&["From", "Email", "Message", "Received"], rows)
}

/// The market price board.
pub(crate) fn quotes_table<'a>(quotes: impl IntoIterator<Item = &'a MarketQuote>) -> String {
    let rows = quotes.into_iter().map(|quote| {
        let locations = quote
            .locations
            .iter()
            .map(|location| format!("{} {}", location.name, inr(location.price)))
            .collect::<Vec<_>>()
            .join(", ");

        let change = quote.change();
        let change_cell = if change.is_sign_positive() && !change.is_zero() {
            format!("+{change}")
        } else {
            change.to_string()
        };

        vec![
            quote.grade.to_string(),
            quote.grade.label().to_string(),
            inr(quote.current).to_string(),
            change_cell,
            trend_cell(quote.trend()).to_string(),
            locations,
        ]
    });

    table(
        &["Grade", "Description", "Current/kg", "Change", "Trend", "Markets"],
        rows,
    )
}

fn moisture_cell(listing: &Listing) -> String {
    if listing.grade.is_liquid() || listing.moisture.is_zero() {
        "-".to_string()
    } else {
        format!("{}%", listing.moisture)
    }
}

fn trend_cell(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Stable => "stable",
    }
}
