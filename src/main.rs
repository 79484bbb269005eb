// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tern CLI - Booking API Contract Test Harness
//!
//! Live smoke checks against a booking service. The base URL comes from
//! `BOOKER_BASE_URL` when set, otherwise the public service is used.

use std::env;
use std::process::ExitCode;

use serde_json::json;

use tern::booking::data;
use tern::check::{assert_booking_shape, assert_field_equals, assert_status_default};
use tern::{booking_schema_path, load_schema, BookingService, CreatedBooking, EndpointConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tern=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "create" => create_booking().await,
        "get" => {
            if args.len() < 3 {
                eprintln!("Usage: tern get <id>");
                return ExitCode::from(1);
            }
            get_booking(&args[2]).await
        }
        "list" => list_bookings().await,
        "smoke" => run_smoke().await,
        "validate" => {
            if args.len() < 3 {
                eprintln!("Usage: tern validate <file>");
                return ExitCode::from(1);
            }
            validate_file(&args[2])
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("tern {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"Tern - Booking API Contract Test Harness

USAGE:
    tern <COMMAND> [OPTIONS]

COMMANDS:
    create           Create a booking from the sample payload
    get <id>         Fetch a booking by id
    list             List booking ids
    smoke            Create, shape-check, re-fetch and schema-check a booking
    validate <file>  Validate a JSON file against the booking schema
    help             Show this help message
    version          Show version information

ENVIRONMENT:
    BOOKER_BASE_URL  Base URL of the service under test

EXAMPLES:
    tern smoke
    tern get 42
    BOOKER_BASE_URL=http://localhost:3001 tern create
"#
    );
}

fn service() -> Option<BookingService> {
    let config = match EndpointConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            return None;
        }
    };
    match BookingService::with_config(config) {
        Ok(s) => Some(s),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            None
        }
    }
}

async fn create_booking() -> ExitCode {
    let Some(service) = service() else {
        return ExitCode::from(1);
    };

    match service.create_parsed(&data::valid_booking()).await {
        Ok(created) => {
            println!(
                "Created booking {} for {} {}",
                created.bookingid, created.booking.firstname, created.booking.lastname
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Create failed: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn get_booking(id: &str) -> ExitCode {
    let Ok(id) = id.parse::<i64>() else {
        eprintln!("Booking id must be an integer, got '{}'", id);
        return ExitCode::from(1);
    };
    let Some(service) = service() else {
        return ExitCode::from(1);
    };

    match service.get(id).await {
        Ok(resp) if resp.status_code() == 404 => {
            eprintln!("Booking {} not found", id);
            ExitCode::from(1)
        }
        Ok(resp) => match resp.json_value() {
            Ok(body) => {
                println!("{:#}", body);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Bad response body: {}", e);
                ExitCode::from(1)
            }
        },
        Err(e) => {
            eprintln!("Get failed: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn list_bookings() -> ExitCode {
    let Some(service) = service() else {
        return ExitCode::from(1);
    };

    match service.list().await {
        Ok(resp) => match resp.json::<Vec<tern::booking::BookingSummary>>() {
            Ok(entries) => {
                println!("{} bookings", entries.len());
                for entry in entries.iter().take(25) {
                    println!("  {}", entry.bookingid);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Bad response body: {}", e);
                ExitCode::from(1)
            }
        },
        Err(e) => {
            eprintln!("List failed: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn run_smoke() -> ExitCode {
    let Some(service) = service() else {
        return ExitCode::from(1);
    };

    match smoke(&service).await {
        Ok(id) => {
            println!("Smoke check passed (booking {})", id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Smoke check failed: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Create a booking, verify the response shape, re-fetch it by id, compare
/// the echoed fields and validate the body against the bundled schema.
async fn smoke(service: &BookingService) -> tern::Result<i64> {
    let payload = data::valid_booking();

    let created = service.create(&payload).await?;
    assert_status_default(&created)?;
    assert_booking_shape(&created)?;
    assert_field_equals(&created, "booking.firstname", &json!(payload.firstname))?;

    let created: CreatedBooking = created.json()?;
    let fetched = service.get(created.bookingid).await?;
    assert_status_default(&fetched)?;
    assert_field_equals(&fetched, "firstname", &json!(payload.firstname))?;
    assert_field_equals(&fetched, "lastname", &json!(payload.lastname))?;

    let schema = load_schema(booking_schema_path())?;
    schema.validate_response(&fetched)?;

    Ok(created.bookingid)
}

fn validate_file(path: &str) -> ExitCode {
    let schema = match load_schema(booking_schema_path()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load schema: {}", e);
            return ExitCode::from(1);
        }
    };

    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            return ExitCode::from(1);
        }
    };

    let instance: serde_json::Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{} is not valid JSON: {}", path, e);
            return ExitCode::from(1);
        }
    };

    match schema.validate(&instance) {
        Ok(()) => {
            println!("{} conforms to the booking schema", path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
