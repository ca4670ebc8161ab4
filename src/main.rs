use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use property_hunter::models::locations::LOCATIONS;
use property_hunter::{
    App, Config, FilterUpdate, ListingFilter, Property, PropertyType, SortOption, User, UserType,
    ViewMode,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "property-hunter", version, about = "Browse and manage Singapore property listings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List listings matching the given filters
    List(ListArgs),
    /// Show one listing in full
    Show { id: String },
    /// Print the known MRT locations
    Locations,
    /// Remove a listing you are allowed to delete
    Delete { id: String },
    /// Sign in on this device
    Login(LoginArgs),
    /// Sign out on this device
    Logout,
    /// Show who is signed in
    Whoami,
    /// Star or unstar a listing
    Favorite { id: String },
    /// List starred listings
    Favorites,
    /// Switch between light and dark theme
    Theme,
    /// Set the result layout (grid or list)
    View { mode: ViewMode },
}

#[derive(Args)]
struct ListArgs {
    #[arg(long, default_value = "all")]
    listing_type: ListingFilter,
    #[arg(long = "property-type")]
    property_types: Vec<PropertyType>,
    /// Minimum bedrooms
    #[arg(long)]
    bedrooms: Option<u32>,
    /// Minimum bathrooms
    #[arg(long)]
    bathrooms: Option<u32>,
    #[arg(long = "location")]
    locations: Vec<String>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = "none")]
    sort: SortOption,
    /// Print JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LoginArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    /// Sign in as an agent who can publish listings
    #[arg(long)]
    agent: bool,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    agent_license: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    info!("🏠 Property Hunter");
    let mut app = App::from_config(&config)?;

    match cli.command {
        Command::List(args) => {
            app.catalog.load().await;
            warn_on_failed_load(&app);
            app.catalog.update_filters(FilterUpdate {
                listing_type: Some(args.listing_type),
                property_types: Some(args.property_types),
                bedrooms: Some(args.bedrooms),
                bathrooms: Some(args.bathrooms),
                locations: Some(args.locations),
                min_price: Some(args.min_price),
                max_price: Some(args.max_price),
                search_term: Some(args.search),
            });
            app.catalog.set_sort(args.sort);

            let results = app.catalog.filtered();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                info!("✅ {} of {} listings match\n", results.len(), app.catalog.store().len());
                for (i, property) in results.iter().enumerate() {
                    print_summary(i + 1, property);
                }
            }
        }
        Command::Show { id } => {
            app.catalog.load().await;
            warn_on_failed_load(&app);
            match app.catalog.fetch(&id).await? {
                Some(property) => {
                    print_details(&property);
                    if app.catalog.can_edit(&id, app.user()) {
                        println!("   You can edit this listing");
                    }
                }
                None => anyhow::bail!("No listing with id {id}"),
            }
        }
        Command::Locations => {
            for location in LOCATIONS {
                println!("{location}");
            }
        }
        Command::Delete { id } => {
            app.catalog.load().await;
            app.delete_property(&id).await?;
            println!("Deleted {id}");
        }
        Command::Login(args) => {
            let user = User {
                id: User::id_for_email(&args.email),
                name: args.name,
                email: args.email,
                user_type: if args.agent { UserType::Agent } else { UserType::Hunter },
                phone: args.phone,
                agent_license: args.agent_license,
            };
            app.sign_in(user)?;
        }
        Command::Logout => app.sign_out()?,
        Command::Whoami => match app.user() {
            Some(user) => {
                let role = if user.is_agent() { "agent" } else { "hunter" };
                println!("{} <{}> ({})", user.name, user.email, role);
            }
            None => println!("Not signed in"),
        },
        Command::Favorite { id } => {
            let starred = app.favorites.toggle(&id)?;
            println!("{} {}", if starred { "★ Starred" } else { "☆ Unstarred" }, id);
        }
        Command::Favorites => {
            app.catalog.load().await;
            for (i, property) in app.favorite_properties().iter().enumerate() {
                print_summary(i + 1, property);
            }
        }
        Command::Theme => {
            let theme = app.preferences.toggle_theme()?;
            println!("Theme: {theme}");
        }
        Command::View { mode } => {
            app.preferences.set_view_mode(mode)?;
            println!("View: {mode}");
        }
    }

    Ok(())
}

fn warn_on_failed_load(app: &App) {
    if let Some(error) = app.catalog.state().error() {
        warn!("{}, showing bundled and local listings only", error);
    }
}

fn print_summary(n: usize, property: &Property) {
    println!("{}. {} (S${:.0})", n, property.title, property.price);
    println!(
        "   {} for {}, {} bed, {} bath, {} sqft",
        property.property_type.label(),
        property.listing_type,
        property.bedrooms,
        property.bathrooms,
        property.size
    );
    println!("   {} ({})", property.address, property.location);
    println!("   ID: {}", property.id);
    println!();
}

fn print_details(property: &Property) {
    print_summary(1, property);
    println!("   {}", property.description);
    if !property.features.is_empty() {
        println!("   Features: {}", property.features.join(", "));
    }
    if !property.amenities.is_empty() {
        println!("   Amenities: {}", property.amenities.join(", "));
    }
    println!(
        "   Contact: {} {} {}",
        property.contact.name, property.contact.phone, property.contact.email
    );
    println!(
        "   Map: {:.4}, {:.4}",
        property.coordinates.lat, property.coordinates.lng
    );
}
