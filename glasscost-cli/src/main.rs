//! glasscost - command-line dashboard for the glass costing engine.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use glasscost_core::{
    calculate_cost, store::load_pricing_file, validate_specification, Client, DoorOrder, Edgework,
    GlassSpecification, GlassType, PricingRules, SavedQuote, Shape, Store, Thickness,
};

/// Costing and record keeping for a toughened glass fabrication shop.
#[derive(Parser, Debug)]
#[command(name = "glasscost")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory for saved records and pricing
    #[arg(long, default_value = "glasscost-data", global = true)]
    data_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a glass specification
    Cost(CostArgs),
    /// Manage saved quotes
    #[command(subcommand)]
    Quotes(QuotesCommand),
    /// Manage door orders
    #[command(subcommand)]
    Doors(DoorsCommand),
    /// Manage clients
    #[command(subcommand)]
    Clients(ClientsCommand),
    /// Show or reset the active pricing rules
    #[command(subcommand)]
    Pricing(PricingCommand),
}

#[derive(Args, Debug)]
struct CostArgs {
    /// Width in millimeters
    #[arg(long)]
    width: f64,

    /// Height in millimeters
    #[arg(long)]
    height: f64,

    /// Thickness in millimeters (4, 5, 6, 8, 10, 12)
    #[arg(long)]
    thickness: Thickness,

    /// Glass type (clear, green, grey, dark-grey, super-grey)
    #[arg(long, default_value = "clear")]
    glass: GlassType,

    /// Edgework style (e.g. rough-arris, flat-grind-straight)
    #[arg(long, default_value = "flat-grind-straight")]
    edgework: Edgework,

    /// Shape (rectangle, triangle, simple, complex)
    #[arg(long, default_value = "rectangle")]
    shape: Shape,

    /// Number of holes to drill
    #[arg(long, default_value = "0")]
    holes: u32,

    /// Add ceramic banding
    #[arg(long)]
    ceramic_band: bool,

    /// Add template scanning
    #[arg(long)]
    scanning: bool,

    /// Radius corners (switches to a curved polish edgework style)
    #[arg(long)]
    radius_corners: bool,

    /// Custom pricing rule file (JSON); the stored table otherwise
    #[arg(long)]
    pricing: Option<PathBuf>,

    /// Emit the breakdown as JSON
    #[arg(long)]
    json: bool,

    /// Save the result as a quote under this name
    #[arg(long)]
    save: Option<String>,

    /// Client to record on the saved quote
    #[arg(long, default_value = "")]
    client: String,
}

#[derive(Subcommand, Debug)]
enum QuotesCommand {
    /// List saved quotes
    List,
    /// Show one saved quote in full
    Show { id: Uuid },
    /// Remove a saved quote
    Remove { id: Uuid },
}

#[derive(Subcommand, Debug)]
enum DoorsCommand {
    /// Record a door order
    Add(DoorAddArgs),
    /// List door orders
    List,
    /// Remove a door order
    Remove { id: Uuid },
}

#[derive(Args, Debug)]
struct DoorAddArgs {
    /// Agreed price
    #[arg(long)]
    price: f64,

    /// Order date (YYYY-MM-DD); today when omitted
    #[arg(long)]
    order_date: Option<NaiveDate>,

    /// Scheduled delivery date (YYYY-MM-DD)
    #[arg(long)]
    delivery_date: Option<NaiveDate>,

    /// Client the order belongs to
    #[arg(long)]
    client: String,

    /// Free-form notes
    #[arg(long, default_value = "")]
    notes: String,
}

#[derive(Subcommand, Debug)]
enum ClientsCommand {
    /// Add a client record
    Add(ClientAddArgs),
    /// List clients
    List,
    /// Remove a client record
    Remove { id: Uuid },
}

#[derive(Args, Debug)]
struct ClientAddArgs {
    /// Company name
    #[arg(long)]
    company: String,

    /// Primary contact name
    #[arg(long, default_value = "")]
    contact: String,

    /// Contact email
    #[arg(long, default_value = "")]
    email: String,

    /// Contact phone
    #[arg(long, default_value = "")]
    phone: String,

    /// Default markup percentage (0-100)
    #[arg(long, default_value = "30")]
    markup: u8,
}

#[derive(Subcommand, Debug)]
enum PricingCommand {
    /// Print the active pricing rules as JSON
    Show,
    /// Delete the stored pricing file and return to the shop defaults
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let store = Store::open(&cli.data_dir)
        .with_context(|| format!("Failed to open data directory {}", cli.data_dir.display()))?;

    match cli.command {
        Command::Cost(args) => run_cost(&store, args),
        Command::Quotes(command) => run_quotes(&store, command),
        Command::Doors(command) => run_doors(&store, command),
        Command::Clients(command) => run_clients(&store, command),
        Command::Pricing(command) => run_pricing(&store, command),
    }
}

fn run_cost(store: &Store, args: CostArgs) -> Result<()> {
    let rules: PricingRules = match &args.pricing {
        Some(path) => load_pricing_file(path)
            .with_context(|| format!("Failed to load pricing file {}", path.display()))?,
        None => store.pricing()?,
    };

    let mut edgework = args.edgework;
    if args.radius_corners && !edgework.is_curved() {
        edgework = Edgework::FlatPolishCurved;
        warn!("Radius corners switch edgework to {}", edgework);
    }

    let spec = GlassSpecification {
        width: args.width,
        height: args.height,
        thickness: args.thickness,
        glass_type: args.glass,
        edgework,
        shape: args.shape,
        ceramic_band: args.ceramic_band,
        holes: args.holes > 0,
        num_holes: args.holes,
        scanning: args.scanning,
        radius_corners: args.radius_corners,
    };

    for warning in validate_specification(&spec, &rules).warnings {
        warn!("{}", warning);
    }

    let costs = calculate_cost(&spec, &rules)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&costs)?);
    } else {
        println!("{costs}");
    }

    if let Some(name) = args.save {
        let quote = SavedQuote::new(
            name,
            args.client,
            spec,
            costs,
            chrono::Local::now().date_naive(),
        );
        info!("Saved quote {} ({})", quote.name, quote.id);
        store.add_quote(quote)?;
    }

    Ok(())
}

fn run_quotes(store: &Store, command: QuotesCommand) -> Result<()> {
    match command {
        QuotesCommand::List => {
            let quotes = store.quotes()?;
            if quotes.is_empty() {
                println!("No saved quotes");
                return Ok(());
            }
            for quote in quotes {
                println!(
                    "{}  {}  {}  {}  ${:.2}",
                    quote.id, quote.date, quote.name, quote.client, quote.cost.total
                );
            }
        }
        QuotesCommand::Show { id } => {
            let quotes = store.quotes()?;
            let quote = quotes
                .iter()
                .find(|quote| quote.id == id)
                .with_context(|| format!("No quote with id {id}"))?;
            println!("{}", serde_json::to_string_pretty(quote)?);
        }
        QuotesCommand::Remove { id } => {
            let removed = store.remove_quote(id)?;
            info!("Removed quote {} ({})", removed.name, removed.id);
        }
    }
    Ok(())
}

fn run_doors(store: &Store, command: DoorsCommand) -> Result<()> {
    match command {
        DoorsCommand::Add(args) => {
            let order_date = args
                .order_date
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            let order = DoorOrder::new(
                args.price,
                order_date,
                args.delivery_date,
                args.client,
                args.notes,
            );
            info!("Recorded door order {}", order.id);
            store.add_door(order)?;
        }
        DoorsCommand::List => {
            let doors = store.doors()?;
            if doors.is_empty() {
                println!("No door orders");
                return Ok(());
            }
            for order in doors {
                let delivery = order
                    .delivery_date
                    .map(|date| date.to_string())
                    .unwrap_or_else(|| "unscheduled".to_string());
                println!(
                    "{}  {}  delivery {}  {}  ${:.2}  {}",
                    order.id, order.order_date, delivery, order.client, order.price, order.notes
                );
            }
        }
        DoorsCommand::Remove { id } => {
            let removed = store.remove_door(id)?;
            info!("Removed door order {}", removed.id);
        }
    }
    Ok(())
}

fn run_clients(store: &Store, command: ClientsCommand) -> Result<()> {
    match command {
        ClientsCommand::Add(args) => {
            let client = Client::new(args.company, args.contact, args.email, args.phone, args.markup);
            info!("Added client {} ({})", client.company, client.id);
            store.add_client(client)?;
        }
        ClientsCommand::List => {
            let clients = store.clients()?;
            if clients.is_empty() {
                println!("No clients on record");
                return Ok(());
            }
            for client in clients {
                println!(
                    "{}  {}  {}  {}  {}  markup {}%",
                    client.id,
                    client.company,
                    client.contact,
                    client.email,
                    client.phone,
                    client.default_markup_pct
                );
            }
        }
        ClientsCommand::Remove { id } => {
            let removed = store.remove_client(id)?;
            info!("Removed client {} ({})", removed.company, removed.id);
        }
    }
    Ok(())
}

fn run_pricing(store: &Store, command: PricingCommand) -> Result<()> {
    match command {
        PricingCommand::Show => {
            let rules = store.pricing()?;
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
        PricingCommand::Reset => {
            store.reset_pricing()?;
            info!("Pricing reset to the shop defaults");
        }
    }
    Ok(())
}
