//! Account and profile commands.

use clap::{Args, Subcommand};

use hevea_app::{
    context::AppContext,
    session::{
        SessionService,
        models::{BuyerProfile, FarmerProfile, Profile, Role},
    },
};

use super::require_session;

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Account secret. Not verified in this build; any non-empty value
    /// is accepted.
    #[arg(long)]
    pub password: String,

    /// Display name.
    #[arg(long)]
    pub name: String,

    /// Account role: farmer or buyer.
    #[arg(long)]
    pub role: Role,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Account secret.
    #[arg(long)]
    pub password: String,

    /// Account role: farmer or buyer.
    #[arg(long)]
    pub role: Role,
}

#[derive(Debug, Subcommand)]
pub enum ProfileSubcommand {
    /// Set the farmer profile.
    Farm(FarmProfileArgs),

    /// Set the buyer profile.
    Buyer(BuyerProfileArgs),
}

#[derive(Debug, Args)]
pub struct FarmProfileArgs {
    /// Farm location, e.g. "Agartala, West Tripura".
    #[arg(long)]
    pub location: String,

    /// Farm size in acres.
    #[arg(long, default_value = "")]
    pub size: String,

    /// Years of tapping experience.
    #[arg(long, default_value = "")]
    pub experience: String,

    /// Contact phone.
    #[arg(long, default_value = "")]
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct BuyerProfileArgs {
    /// Trading company name.
    #[arg(long, default_value = "")]
    pub company: String,

    /// Buyer location.
    #[arg(long, default_value = "")]
    pub location: String,

    /// Contact phone.
    #[arg(long, default_value = "")]
    pub phone: String,
}

pub fn register(ctx: &AppContext, args: RegisterArgs) -> Result<(), String> {
    let actor = ctx
        .sessions
        .register(&args.email, &args.password, &args.name, args.role)
        .map_err(|error| format!("registration failed: {error}"))?;

    println!("welcome to the marketplace, {}!", actor.name);
    println!("signed in as {} ({})", actor.email, actor.role);

    Ok(())
}

pub fn login(ctx: &AppContext, args: LoginArgs) -> Result<(), String> {
    let actor = ctx
        .sessions
        .login(&args.email, &args.password, args.role)
        .map_err(|error| format!("login failed: {error}"))?;

    println!("signed in as {} ({})", actor.email, actor.role);

    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<(), String> {
    ctx.sessions
        .logout()
        .map_err(|error| format!("logout failed: {error}"))?;

    println!("signed out");

    Ok(())
}

pub fn whoami(ctx: &AppContext) -> Result<(), String> {
    match ctx.sessions.current() {
        Some(actor) => {
            println!("{} <{}> ({})", actor.name, actor.email, actor.role);
            println!("actor id: {}", actor.id);

            if let Some(Profile::Farmer(profile)) = &actor.profile {
                println!("farm: {} ({} acres)", profile.farm_location, profile.farm_size);
            }

            Ok(())
        }
        None => {
            println!("not signed in");

            Ok(())
        }
    }
}

pub fn profile(ctx: &AppContext, command: ProfileSubcommand) -> Result<(), String> {
    require_session(ctx)?;

    let profile = match command {
        ProfileSubcommand::Farm(args) => Profile::Farmer(FarmerProfile {
            farm_location: args.location,
            farm_size: args.size,
            experience: args.experience,
            phone: args.phone,
        }),
        ProfileSubcommand::Buyer(args) => Profile::Buyer(BuyerProfile {
            company: args.company,
            location: args.location,
            phone: args.phone,
        }),
    };

    ctx.sessions
        .update_profile(profile)
        .map_err(|error| format!("profile update failed: {error}"))?;

    println!("profile saved");

    Ok(())
}
