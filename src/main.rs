use std::io::{self, BufRead, Write};

use clap::Parser;
use dtrip::catalog;
use dtrip::cli::{Cli, Command, TicketCommand};
use dtrip::config::Config;
use dtrip::fare::Party;
use dtrip::geo::GeoPoint;
use dtrip::rally::{CollectionStatus, Rally};
use dtrip::report;
use dtrip::store::ticket::PassTicket;
use dtrip::store::StampStore;
use dtrip::util;

fn parse_location(at: Option<&str>) -> Option<GeoPoint> {
    at.map(|raw| {
        raw.parse().unwrap_or_else(|e| {
            eprintln!("Invalid location '{raw}': {e}");
            std::process::exit(1);
        })
    })
}

fn open_store(config: &Config) -> StampStore {
    StampStore::open(config.db_path.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error opening stamp store: {e}");
        std::process::exit(1);
    })
}

fn open_rally(config: &Config) -> Rally {
    Rally::with_radius_m(open_store(config), config.radius_m)
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim(), "y" | "Y")
}

fn print_collection_log(store: &StampStore) {
    let records = store.list_collected();
    if records.is_empty() {
        return;
    }

    println!("\ncollection log:");
    for record in records {
        let when = chrono::DateTime::parse_from_rfc3339(&record.collected_at)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let name = catalog::find(record.stamp_id)
            .map(|place| place.name)
            .unwrap_or("unknown place");

        println!("  {when}  {name} (#{})", record.stamp_id);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Status(args) => {
            let config = Config::load(args.json, args.verbose, args.radius);
            let user = parse_location(args.at.as_deref());
            let rally = open_rally(&config);

            let status_report = report::build(&rally, user);
            report::print(&status_report, &config);

            if config.verbose && !config.json_output {
                print_collection_log(rally.store());
            }
        }
        Command::Collect(args) => {
            let config = Config::load(false, false, args.radius);
            let user = parse_location(args.at.as_deref());
            let mut rally = open_rally(&config);

            let Some(place) = catalog::find(args.id) else {
                eprintln!("No stamp place with id {}", args.id);
                std::process::exit(1);
            };

            // the gate is advisory: warn when out of position, record anyway
            match rally.status(place, user) {
                CollectionStatus::OutOfRange { distance_km } => {
                    eprintln!(
                        "warning: {} away from {}, collecting anyway",
                        util::format_distance(distance_km),
                        place.name
                    );
                }
                CollectionStatus::Unknown => {
                    eprintln!("warning: no location given, collecting without a proximity check");
                }
                _ => {}
            }

            if rally.collect(args.id) {
                let progress = rally.progress();
                println!(
                    "collected: {} ({} / {})",
                    place.name, progress.collected, progress.total
                );
            } else {
                println!("already collected: {}", place.name);
            }
        }
        Command::Remove(args) => {
            let config = Config::load(false, false, None);
            let mut rally = open_rally(&config);

            let Some(place) = catalog::find(args.id) else {
                eprintln!("No stamp place with id {}", args.id);
                std::process::exit(1);
            };

            rally.remove(args.id);
            println!("removed: {}", place.name);
        }
        Command::Progress(args) => {
            let config = Config::load(args.json, false, None);
            let rally = open_rally(&config);
            let progress = rally.progress();

            if config.json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&progress).unwrap_or_else(|_| String::from("{}"))
                );
            } else {
                println!(
                    "{} / {} stamps ({}%)",
                    progress.collected, progress.total, progress.percentage
                );
            }
        }
        Command::Reset(args) => {
            let config = Config::load(false, false, None);
            let mut rally = open_rally(&config);
            let collected = rally.progress().collected;

            if collected == 0 {
                println!("nothing collected yet");
                return;
            }

            if !args.yes && !confirm(&format!("Clear {collected} collected stamps?")) {
                println!("aborted");
                return;
            }

            rally.store_mut().reset_all();
            println!("cleared {collected} stamps");
        }
        Command::Ticket(TicketCommand::Buy(args)) => {
            let config = Config::load(false, false, None);

            let party = Party::new(args.adults, args.children);
            if let Err(e) = party.validate() {
                eprintln!("{e}");
                std::process::exit(1);
            }

            let date: chrono::NaiveDate = args.date.parse().unwrap_or_else(|_| {
                eprintln!("Invalid date '{}'. Use YYYY-MM-DD.", args.date);
                std::process::exit(1);
            });

            let total = party.total_fare();
            let prompt = format!("Pay {} for {}?", util::format_krw(total), party.label());
            if !args.yes && !confirm(&prompt) {
                println!("aborted");
                return;
            }

            let ticket = PassTicket::new(date, party);
            let mut store = open_store(&config);
            store.save_ticket(&ticket);

            println!("booked: {} / {} / {}", date, party.label(), util::format_krw(total));
            println!("check-in code: {}", ticket.checkin_code());
        }
        Command::Ticket(TicketCommand::Show(args)) => {
            let config = Config::load(args.json, false, None);
            let store = open_store(&config);

            match store.load_ticket() {
                Some(ticket) => {
                    if config.json_output {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&ticket)
                                .unwrap_or_else(|_| String::from("{}"))
                        );
                    } else {
                        let party = ticket.party();
                        println!("DTRIP day pass");
                        println!("  date:       {}", ticket.travel_date.format("%m/%d"));
                        println!("  travellers: {}", party.label());
                        println!("  fare:       {}", util::format_krw(party.total_fare()));
                        println!("  check-in:   {}", ticket.checkin_code());
                    }
                }
                None => {
                    println!("No pass booked. Run 'dtrip ticket buy' to purchase one.");
                }
            }
        }
    }
}
