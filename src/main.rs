use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_point::algorithms::progress::LogReporter;
use meeting_point::algorithms::ranking::{distance_to_center_km, rank_venues, RankBy};
use meeting_point::config::{SEARCH, STORE};
use meeting_point::models::{Location, Member, Optimization};
use meeting_point::utils::member_store::{MemberStore, Upserted};
use meeting_point::utils::travel_time::DistanceModel;
use meeting_point::utils::venue_source::{clamp_radius, StaticVenueSource, VenueSource};
use meeting_point::{GeographicCentroid, MeetingPointSolver, WeightedCentroid};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meeting-point", about = "Find the bar that is easiest to reach for the whole group")]
struct Cli {
    /// Member file
    #[arg(long, global = true, default_value = STORE.path)]
    data: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a friend, or update the one with the same name
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove a friend by name, ignoring case
    Remove { name: String },
    /// List registered friends
    List,
    /// Compute the group's meeting point
    Center {
        #[arg(long, value_enum, default_value_t = Strategy::Weighted)]
        strategy: Strategy,
    },
    /// Rank bars around the meeting point
    Bars {
        #[arg(long, value_enum, default_value_t = Strategy::Weighted)]
        strategy: Strategy,
        /// Search radius in kilometers
        #[arg(long, default_value_t = SEARCH.default_radius_km)]
        radius: f64,
        /// JSON file with candidate venues (defaults to the built-in list)
        #[arg(long)]
        venues: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Order::Distance)]
        rank_by: Order,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    Geographic,
    Weighted,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Distance,
    Time,
}

impl From<Order> for RankBy {
    fn from(order: Order) -> Self {
        match order {
            Order::Distance => RankBy::Distance,
            Order::Time => RankBy::TravelTime,
        }
    }
}

fn init_log(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("meeting_point"), level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_log(cli.verbose);

    let mut store = MemberStore::open(&cli.data)
        .with_context(|| format!("Failed to load members from {}", cli.data.display()))?;

    match cli.command {
        Command::Add {
            name,
            address,
            lat,
            lon,
            email,
        } => {
            let mut member = Member::new(name.clone(), address);
            if let (Some(lat), Some(lon)) = (lat, lon) {
                member = member.with_location(Location::new(lat, lon));
            } else {
                log::warn!("{name} has no coordinates and will be ignored when locating bars");
            }
            if let Some(email) = email {
                member = member.with_email(email);
            }

            let outcome = store.upsert(member)?;
            store.save()?;
            match outcome {
                Upserted::Added => println!("{name} was added."),
                Upserted::Updated => println!("{name} already existed, details updated."),
            }
        }
        Command::Remove { name } => {
            store.remove(&name)?;
            store.save()?;
            println!("{name} was removed.");
        }
        Command::List => print_members(&store),
        Command::Center { strategy } => {
            let result = solve(strategy, store.members());
            print_optimization(&result);
        }
        Command::Bars {
            strategy,
            radius,
            venues,
            rank_by,
        } => {
            if store.is_empty() {
                println!("No friends registered yet. Add some with `meeting-point add`.");
                return Ok(());
            }

            let result = solve(strategy, store.members());
            print_optimization(&result);

            let source = match venues {
                Some(path) => StaticVenueSource::from_file(&path)
                    .with_context(|| format!("Failed to load venues from {}", path.display()))?,
                None => StaticVenueSource::default(),
            };
            let radius = clamp_radius(radius);
            let candidates = source.venues_around(&result.center, radius)?;
            println!(
                "\n{} bars found within {:.2} km of the meeting point",
                candidates.len(),
                radius
            );

            let ranked = rank_venues(
                candidates,
                store.members(),
                &DistanceModel::default(),
                rank_by.into(),
            );
            println!("\nTop {} bars:", ranked.len());
            for (i, entry) in ranked.iter().enumerate() {
                println!(
                    "  {:>2}. {} ({}) - {} | avg {:.1} km, {:.0} min",
                    i + 1,
                    entry.venue.name,
                    entry.venue.kind,
                    entry.venue.address,
                    entry.avg_distance_km,
                    entry.avg_travel_time
                );
            }

            if let Some(best) = ranked.first() {
                println!(
                    "\nBest bar: {} at {:.2} km from the meeting point",
                    best.venue.name,
                    distance_to_center_km(&best.venue, &result.center)
                );
            }
        }
    }

    Ok(())
}

fn solve(strategy: Strategy, members: &[Member]) -> Optimization {
    match strategy {
        Strategy::Geographic => GeographicCentroid::new().solve(members),
        Strategy::Weighted => WeightedCentroid::new().solve_with_progress(members, &LogReporter),
    }
}

fn print_members(store: &MemberStore) {
    if store.is_empty() {
        println!("No friends registered yet.");
        return;
    }

    println!("Registered friends:");
    for member in store.members() {
        let location = member
            .location()
            .map(|loc| format!("{:.4}, {:.4}", loc.latitude, loc.longitude))
            .unwrap_or_else(|| "not located".to_string());
        println!(
            "  {} <{}> - {} ({})",
            member.name,
            member.email.as_deref().unwrap_or(""),
            member.address,
            location
        );
    }

    let stats = store.stats();
    println!(
        "\n{} friends, {} emails, {} valid addresses",
        stats.members, stats.with_email, stats.with_location
    );
}

fn print_optimization(result: &Optimization) {
    println!(
        "Meeting point: {:.6}, {:.6}",
        result.center.latitude, result.center.longitude
    );

    if let Some(report) = &result.report {
        println!(
            "Initial centroid: {:.6}, {:.6} (moved {:.0} m)",
            report.initial_center.latitude,
            report.initial_center.longitude,
            report.displacement_km * 1000.0
        );
        println!(
            "Average travel time: {:.0} min -> {:.0} min ({:+.1} min)",
            report.avg_initial_time, report.avg_final_time, report.time_improvement
        );
    }

    for (name, minutes) in &result.final_times {
        println!("  {name}: {minutes:.0} min");
    }
}
