use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use flightboard::config::Config;
use flightboard::data::{FlightCatalog, MockFlightApi};
use flightboard::domain::Flight;
use flightboard::logging::init_tracing;
use flightboard::repository::FlightRepository;
use flightboard::ui::{
    FlightDetailScreen, FlightDetailViewModel, FlightListScreen, FlightListViewModel,
    ScreenState, StateObserver,
};

#[derive(Parser)]
#[command(name = "flightboard", version, about = "Browse demo flight information")]
struct Cli {
    /// Config file (default: ~/.config/flightboard/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Simulated data-source latency in milliseconds.
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    /// JSON flight catalog to serve instead of the built-in data.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List all flights.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one flight.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Navigate list and detail screens from stdin.
    Browse,
}

/// Navigation target for `browse`.
#[derive(Debug, Clone, PartialEq)]
enum Route {
    List,
    Detail(String),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let repository = build_repository(&config)?;

    match cli.command.unwrap_or(Command::List { json: false }) {
        Command::List { json } => list(repository, json).await,
        Command::Show { id, json } => show(repository, &id, json).await,
        Command::Browse => browse(repository).await,
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;

    if let Some(latency_ms) = cli.latency_ms {
        config.data.simulated_latency_ms = latency_ms;
    }
    if let Some(catalog) = &cli.catalog {
        config.data.catalog_path = Some(catalog.clone());
    }
    config.validate()?;
    Ok(config)
}

fn build_repository(config: &Config) -> anyhow::Result<FlightRepository> {
    let catalog = match &config.data.catalog_path {
        Some(path) => FlightCatalog::load_from(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => FlightCatalog::reference(),
    };
    tracing::info!(
        flights = catalog.len(),
        latency_ms = config.data.simulated_latency_ms,
        "Flight source ready"
    );

    let api = MockFlightApi::new(catalog).with_latency(config.data.latency());
    Ok(FlightRepository::new(Arc::new(api)))
}

async fn list(repository: FlightRepository, json: bool) -> anyhow::Result<()> {
    let view_model = FlightListViewModel::new(repository);
    let flights = into_payload(settle(view_model.subscribe()).await?)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&flights)?);
    } else {
        print_flight_list(&flights);
    }
    Ok(())
}

async fn show(repository: FlightRepository, id: &str, json: bool) -> anyhow::Result<()> {
    let view_model = FlightDetailViewModel::new(repository);
    view_model.load(id);
    let flight = into_payload(settle(view_model.subscribe()).await?)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&flight)?);
    } else {
        print_flight_detail(&flight);
    }
    Ok(())
}

async fn settle<T: Clone>(mut observer: StateObserver<T>) -> anyhow::Result<ScreenState<T>> {
    observer
        .settled()
        .await
        .context("screen closed before loading finished")
}

/// Payload of a finished screen; an `Error` state becomes the error.
fn into_payload<T>(state: ScreenState<T>) -> anyhow::Result<T> {
    match state {
        ScreenState::Success(payload) => Ok(payload),
        ScreenState::Error(message) => bail!(message),
        ScreenState::Loading => bail!("screen has not finished loading"),
    }
}

async fn browse(repository: FlightRepository) -> anyhow::Result<()> {
    let (nav_tx, mut nav_rx) = mpsc::unbounded_channel::<Route>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut route = Route::List;

    loop {
        match route.clone() {
            Route::List => {
                let tx = nav_tx.clone();
                let screen = FlightListScreen::new(
                    FlightListViewModel::new(repository.clone()),
                    move |id| {
                        let _ = tx.send(Route::Detail(id.to_string()));
                    },
                );
                print_list_state(settle(screen.view_model().subscribe()).await?);

                loop {
                    println!("[id] open  [r] refresh  [q] quit");
                    let Some(line) = lines.next_line().await? else {
                        return Ok(());
                    };
                    match line.trim() {
                        "" => continue,
                        "q" => return Ok(()),
                        "r" => {
                            screen.view_model().refresh();
                            print_list_state(settle(screen.view_model().subscribe()).await?);
                        }
                        id => screen.select(id),
                    }
                    if let Ok(next) = nav_rx.try_recv() {
                        route = next;
                        break;
                    }
                }
            }
            Route::Detail(id) => {
                let tx = nav_tx.clone();
                let screen = FlightDetailScreen::new(
                    &id,
                    FlightDetailViewModel::new(repository.clone()),
                    move || {
                        let _ = tx.send(Route::List);
                    },
                );
                print_detail_state(settle(screen.view_model().subscribe()).await?);

                loop {
                    println!("[b] back  [r] reload  [q] quit");
                    let Some(line) = lines.next_line().await? else {
                        return Ok(());
                    };
                    match line.trim() {
                        "q" => return Ok(()),
                        "b" => screen.back(),
                        "r" => {
                            screen.view_model().reload();
                            print_detail_state(settle(screen.view_model().subscribe()).await?);
                        }
                        _ => continue,
                    }
                    if let Ok(next) = nav_rx.try_recv() {
                        route = next;
                        break;
                    }
                }
            }
        }
    }
}

fn print_list_state(state: ScreenState<Vec<Flight>>) {
    match state {
        ScreenState::Loading => println!("Loading..."),
        ScreenState::Success(flights) => print_flight_list(&flights),
        ScreenState::Error(message) => println!("Error: {}", message),
    }
}

fn print_detail_state(state: ScreenState<Flight>) {
    match state {
        ScreenState::Loading => println!("Loading..."),
        ScreenState::Success(flight) => print_flight_detail(&flight),
        ScreenState::Error(message) => println!("Error: {}", message),
    }
}

fn print_flight_list(flights: &[Flight]) {
    if flights.is_empty() {
        println!("No flights.");
        return;
    }
    for flight in flights {
        println!(
            "{:>4}  {:<8} {} -> {}  {:>5}  {}",
            flight.id,
            flight.flight_number,
            flight.origin.code,
            flight.destination.code,
            flight.origin.expected_time(),
            flight.status,
        );
    }
}

fn print_flight_detail(flight: &Flight) {
    println!("{} ({})", flight.flight_number, flight.airline);
    println!("  Status:   {}", flight.status);
    println!("  Class:    {}", flight.service_class);
    if let Some(aircraft) = &flight.aircraft {
        println!("  Aircraft: {}", aircraft);
    }
    if let Some(gate) = &flight.gate {
        println!("  Gate:     {}", gate);
    }
    for (label, endpoint) in [("From", &flight.origin), ("To", &flight.destination)] {
        print!(
            "  {:<9} {} {}, {}  {}",
            format!("{}:", label),
            endpoint.code,
            endpoint.city,
            endpoint.country,
            endpoint.scheduled_time
        );
        if let Some(estimated) = &endpoint.estimated_time {
            print!(" (est. {})", estimated);
        }
        if let Some(terminal) = &endpoint.terminal {
            print!("  T{}", terminal);
        }
        println!();
    }
}
