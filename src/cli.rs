use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dtrip")]
#[command(about = "Stamp-rally and travel-pass companion for Daejeon")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show every stamp place with its collectability from a location
    Status(StatusArgs),

    /// Record a stamp as collected
    Collect(CollectArgs),

    /// Undo a collection (support/testing flow)
    Remove(RemoveArgs),

    /// Show collection progress
    Progress(ProgressArgs),

    /// Clear all collected stamps
    Reset(ResetArgs),

    /// Day-pass booking
    #[command(subcommand)]
    Ticket(TicketCommand),
}

#[derive(Parser)]
pub struct StatusArgs {
    /// Current location as "lat,lng" (omit when no fix is available)
    #[arg(long)]
    pub at: Option<String>,

    /// Collection radius in meters (overrides the config file)
    #[arg(long)]
    pub radius: Option<u32>,

    /// Output as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also show when each stamp was collected
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct CollectArgs {
    /// Stamp place id
    pub id: u32,

    /// Current location as "lat,lng", used to warn when out of range
    #[arg(long)]
    pub at: Option<String>,

    /// Collection radius in meters (overrides the config file)
    #[arg(long)]
    pub radius: Option<u32>,
}

#[derive(Parser)]
pub struct RemoveArgs {
    /// Stamp place id
    pub id: u32,
}

#[derive(Parser)]
pub struct ProgressArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ResetArgs {
    /// Skip confirmation and clear everything
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum TicketCommand {
    /// Purchase a day pass, replacing any existing booking
    Buy(TicketBuyArgs),

    /// Show the current booking
    Show(TicketShowArgs),
}

#[derive(Parser)]
pub struct TicketBuyArgs {
    /// Travel date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Adult travellers
    #[arg(long, default_value_t = 0)]
    pub adults: u32,

    /// Child travellers
    #[arg(long, default_value_t = 0)]
    pub children: u32,

    /// Confirm payment without prompting
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}

#[derive(Parser)]
pub struct TicketShowArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
