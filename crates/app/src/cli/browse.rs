//! Buyer catalog browsing.

use std::path::Path;

use clap::Args;

use hevea::filter::{ListingFilter, filter_listings};
use hevea_app::context::AppContext;

use super::{display, market_fixture, require_session};

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Free-text search over farmer name, grade and location.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Location substring, or "all".
    #[arg(long, default_value = "all")]
    pub location: String,

    /// Quality tier, or "all".
    #[arg(long, default_value = "all")]
    pub quality: String,

    /// Inclusive price bracket "min-max" in rupees per kilogram, or
    /// "all".
    #[arg(long, default_value = "all")]
    pub price: String,
}

pub fn run(ctx: &AppContext, fixtures: &Path, args: &BrowseArgs) -> Result<(), String> {
    require_session(ctx)?;

    let fixture = market_fixture(fixtures)?;

    let filter = ListingFilter::from_form(&args.search, &args.location, &args.quality, &args.price)
        .map_err(|error| format!("bad filter: {error}"))?;

    let matched = filter_listings(fixture.catalog(), &filter);

    if matched.is_empty() {
        println!("no listings found; try adjusting your filters");

        return Ok(());
    }

    let keyed = matched
        .iter()
        .map(|&listing| (fixture.key_of(listing), listing));

    println!("{}", display::catalog_table(keyed));
    println!("contact a farmer with `hevea inquiry send --listing <ref> --message ...`");

    Ok(())
}
