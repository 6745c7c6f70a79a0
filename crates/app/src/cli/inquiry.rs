//! Inquiry commands.

use std::path::Path;

use clap::{Args, Subcommand};

use hevea_app::{context::AppContext, domain::inquiries::InquiriesService};

use super::{display, market_fixture, require_session};

#[derive(Debug, Subcommand)]
pub enum InquirySubcommand {
    /// Send an inquiry about a catalog listing.
    Send(SendInquiryArgs),

    /// Show the inquiries you have received (farmers).
    List,
}

#[derive(Debug, Args)]
pub struct SendInquiryArgs {
    /// Catalog reference of the listing, as shown by `hevea browse`.
    #[arg(long)]
    pub listing: String,

    /// Your message to the farmer.
    #[arg(long)]
    pub message: String,
}

pub fn run(ctx: &AppContext, fixtures: &Path, command: InquirySubcommand) -> Result<(), String> {
    match command {
        InquirySubcommand::Send(args) => send(ctx, fixtures, &args),
        InquirySubcommand::List => list(ctx),
    }
}

fn send(ctx: &AppContext, fixtures: &Path, args: &SendInquiryArgs) -> Result<(), String> {
    let actor = require_session(ctx)?;
    let fixture = market_fixture(fixtures)?;

    let listing = fixture
        .listing(&args.listing)
        .map_err(|error| format!("unknown listing: {error}"))?;

    ctx.inquiries
        .send_inquiry(&actor, listing, &args.message)
        .map_err(|error| format!("could not send inquiry: {error}"))?;

    println!(
        "inquiry sent! your message has been delivered to {}.",
        listing.seller.name
    );

    Ok(())
}

fn list(ctx: &AppContext) -> Result<(), String> {
    let actor = require_session(ctx)?;

    let inquiries = ctx
        .inquiries
        .received_inquiries(&actor)
        .map_err(|error| format!("could not load inquiries: {error}"))?;

    if inquiries.is_empty() {
        println!("no inquiries yet; buyers will contact you through your listings");

        return Ok(());
    }

    println!("{}", display::inquiries_table(&inquiries));

    Ok(())
}
