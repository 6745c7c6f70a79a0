//! Command-line surface for the marketplace.

mod browse;
mod display;
mod inquiry;
mod listing;
mod prices;
mod session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use hevea::fixtures::Fixture;
use hevea_app::{
    context::AppContext,
    session::{SessionService, models::Actor},
};

/// Hevea rubber marketplace.
#[derive(Debug, Parser)]
#[command(name = "hevea", about = "Rubber marketplace for farmers and buyers", long_about = None)]
pub struct Cli {
    /// Directory holding durable state.
    #[arg(long, env = "HEVEA_DATA_DIR", default_value = "./.hevea", global = true)]
    pub data_dir: PathBuf,

    /// Directory holding the demo catalog and market-price fixtures.
    #[arg(long, env = "HEVEA_FIXTURES", default_value = "./fixtures", global = true)]
    pub fixtures: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an account and sign in.
    Register(session::RegisterArgs),

    /// Sign in.
    Login(session::LoginArgs),

    /// Sign out.
    Logout,

    /// Show the signed-in actor.
    Whoami,

    /// Manage the signed-in actor's profile.
    Profile(ProfileCommand),

    /// Manage your listings (farmers).
    Listing(ListingCommand),

    /// Browse and filter the market catalog (buyers).
    Browse(browse::BrowseArgs),

    /// Send and read inquiries.
    Inquiry(InquiryCommand),

    /// Show current market prices.
    Prices,
}

#[derive(Debug, Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: session::ProfileSubcommand,
}

#[derive(Debug, Args)]
pub struct ListingCommand {
    #[command(subcommand)]
    pub command: listing::ListingSubcommand,
}

#[derive(Debug, Args)]
pub struct InquiryCommand {
    #[command(subcommand)]
    pub command: inquiry::InquirySubcommand,
}

/// Dispatch a parsed invocation.
///
/// # Errors
///
/// Returns a user-facing message when the command fails.
pub fn run(cli: Cli) -> Result<(), String> {
    let ctx = AppContext::open(&cli.data_dir)
        .map_err(|error| format!("failed to open data directory: {error}"))?;

    match cli.command {
        Commands::Register(args) => session::register(&ctx, args),
        Commands::Login(args) => session::login(&ctx, args),
        Commands::Logout => session::logout(&ctx),
        Commands::Whoami => session::whoami(&ctx),
        Commands::Profile(profile) => session::profile(&ctx, profile.command),
        Commands::Listing(listing) => listing::run(&ctx, listing.command),
        Commands::Browse(args) => browse::run(&ctx, &cli.fixtures, &args),
        Commands::Inquiry(inquiry) => inquiry::run(&ctx, &cli.fixtures, inquiry.command),
        Commands::Prices => prices::run(&cli.fixtures),
    }
}

/// The signed-in actor, or a friendly pointer at `login`.
fn require_session(ctx: &AppContext) -> Result<Actor, String> {
    ctx.sessions
        .current()
        .ok_or_else(|| "not signed in; run `hevea login` first".to_string())
}

/// Load the demo market catalog from the fixtures directory.
fn market_fixture(fixtures: &std::path::Path) -> Result<Fixture, String> {
    let mut fixture = Fixture::with_base_path(fixtures);

    fixture
        .load_listings("market")
        .map_err(|error| format!("failed to load market catalog: {error}"))?;

    Ok(fixture)
}
