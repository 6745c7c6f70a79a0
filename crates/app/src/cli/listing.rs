//! Farmer listing commands.

use clap::{Args, Subcommand};

use hevea::listings::ListingDraft;
use hevea_app::{context::AppContext, domain::listings::ListingsService};

use super::{display, require_session};

#[derive(Debug, Subcommand)]
pub enum ListingSubcommand {
    /// Publish a new listing.
    Add(AddListingArgs),

    /// Show your listings.
    List,
}

#[derive(Debug, Args)]
pub struct AddListingArgs {
    /// Rubber grade: RSS-1, RSS-3, RSS-4, Latex or "Cup Lump".
    #[arg(long)]
    pub grade: String,

    /// Quantity in kilograms.
    #[arg(long)]
    pub quantity: String,

    /// Quality tier: Premium, Standard or Commercial.
    #[arg(long)]
    pub quality: String,

    /// Moisture percentage; omit for liquid grades.
    #[arg(long, default_value = "")]
    pub moisture: String,

    /// Asking price in rupees per kilogram.
    #[arg(long)]
    pub price: String,

    /// Free-text description.
    #[arg(long, default_value = "")]
    pub description: String,
}

pub fn run(ctx: &AppContext, command: ListingSubcommand) -> Result<(), String> {
    match command {
        ListingSubcommand::Add(args) => add(ctx, args),
        ListingSubcommand::List => list(ctx),
    }
}

fn add(ctx: &AppContext, args: AddListingArgs) -> Result<(), String> {
    let actor = require_session(ctx)?;

    let draft = ListingDraft {
        grade: args.grade,
        quantity: args.quantity,
        quality: args.quality,
        moisture: args.moisture,
        price: args.price,
        description: args.description,
    };

    let listing = ctx
        .listings
        .add_listing(&actor, draft)
        .map_err(|error| format!("could not add listing: {error}"))?;

    println!(
        "listing added: {} kg of {} at {}/kg",
        listing.quantity,
        listing.grade,
        hevea::prices::inr(listing.price)
    );

    Ok(())
}

fn list(ctx: &AppContext) -> Result<(), String> {
    let actor = require_session(ctx)?;

    let listings = ctx
        .listings
        .my_listings(&actor)
        .map_err(|error| format!("could not load listings: {error}"))?;

    if listings.is_empty() {
        println!("no listings yet; add your first with `hevea listing add`");

        return Ok(());
    }

    println!("{}", display::my_listings_table(&listings));

    Ok(())
}
