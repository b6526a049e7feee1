//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `eventrating_core` linkage.
//! - Exercise the full open/create/list/get path against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use eventrating_core::db::open_db_in_memory;
use eventrating_core::{EventRatingService, SqliteEventRatingRepository};

fn main() {
    println!("eventrating_core ping={}", eventrating_core::ping());
    println!(
        "eventrating_core version={}",
        eventrating_core::core_version()
    );

    if let Err(err) = run_smoke_flow() {
        eprintln!("smoke flow failed: {err}");
        std::process::exit(1);
    }
}

fn run_smoke_flow() -> Result<(), Box<dyn std::error::Error>> {
    // In-memory store keeps the probe side-effect free; real callers open a
    // file database and compose the exact same way.
    let conn = open_db_in_memory()?;
    let service = EventRatingService::new(SqliteEventRatingRepository::try_new(&conn)?);

    service.create_event_rating("evt-1", 5, "great")?;
    service.create_event_rating("evt-2", 1, "bad")?;

    let mut ratings = service.list_event_ratings()?;
    ratings.sort_by(|a, b| a.event_id.cmp(&b.event_id));
    for rating in &ratings {
        println!(
            "rating event_id={} rating={} comment={}",
            rating.event_id, rating.rating, rating.comment
        );
    }

    match service.get_event_rating("evt-1")? {
        Some(rating) => println!("lookup evt-1 rating={}", rating.rating),
        None => println!("lookup evt-1 missing"),
    }

    Ok(())
}
