//! Interactive menus
//!
//! Thin prompt layer over the boundary operations. Validation failures
//! are recoverable: they print and return to the menu.

use std::io::{self, Write};

use innkeep_core::{dates, identity, BookingEngine, BookingFilter, Result, RoomFilter, RoomType};

use crate::receipt;
use crate::state::AppState;

pub fn run(mut app: AppState) -> Result<()> {
    println!("Welcome to {}", app.hotel_name);
    loop {
        let open = if app.session.is_admin {
            admin_menu(&mut app)?
        } else if app.session.is_logged_in() {
            customer_menu(&mut app)?
        } else {
            entry_menu(&mut app)?
        };
        if !open {
            println!("Goodbye.");
            return Ok(());
        }
    }
}

/// Reads one trimmed line; `None` means end of input
fn prompt(label: &str) -> Option<String> {
    print!("{label}: ");
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn entry_menu(app: &mut AppState) -> Result<bool> {
    println!();
    println!("1) Login  2) Register  3) Admin login  0) Quit");
    let choice = match prompt("Choice") {
        Some(choice) => choice,
        None => return Ok(false),
    };
    match choice.as_str() {
        "1" => {
            let (Some(username), Some(phone)) = (prompt("Username"), prompt("Phone")) else {
                return Ok(false);
            };
            match identity::login(&app.store, &username, &phone) {
                Ok(()) => {
                    println!("Login successful!");
                    app.session.login(username);
                }
                Err(e) => println!("{e}"),
            }
        }
        "2" => {
            let (Some(username), Some(phone), Some(confirm)) = (
                prompt("Username"),
                prompt("Phone"),
                prompt("Confirm phone"),
            ) else {
                return Ok(false);
            };
            match identity::register(&app.store, &username, &phone, &confirm) {
                Ok(()) => println!("Registration successful! Please complete your profile."),
                Err(e) => println!("{e}"),
            }
        }
        "3" => {
            let Some(password) = prompt("Admin password") else {
                return Ok(false);
            };
            if identity::admin_authenticate(&app.store, &password)? {
                println!("Admin login successful!");
                app.session.is_admin = true;
            } else {
                println!("Invalid admin password.");
            }
        }
        "0" => return Ok(false),
        _ => println!("Unknown choice."),
    }
    Ok(true)
}

fn customer_menu(app: &mut AppState) -> Result<bool> {
    println!();
    println!(
        "1) Rooms  2) Book  3) Cancel booking  4) My bookings  5) Receipts  6) Profile  0) Logout"
    );
    let choice = match prompt("Choice") {
        Some(choice) => choice,
        None => return Ok(false),
    };
    let username = match &app.session.current_user {
        Some(username) => username.clone(),
        None => return Ok(true),
    };
    let engine = BookingEngine::new(&app.store);

    match choice.as_str() {
        "1" => {
            let filter = room_filter_prompt();
            for room in engine.list_rooms(filter.as_ref())? {
                println!(
                    "{}  {}  ${:.2}/night  {}  [{}]",
                    room.room_number,
                    room.room_type,
                    room.price_per_night,
                    room.status,
                    room.facilities_joined()
                );
            }
        }
        "2" => {
            let (Some(room), Some(check_in), Some(check_out)) = (
                prompt("Room number"),
                prompt("Check-in (YYYY-MM-DD)"),
                prompt("Check-out (YYYY-MM-DD)"),
            ) else {
                return Ok(false);
            };
            let room_number = room.parse().unwrap_or(0);
            match engine.book_room(&username, room_number, &check_in, &check_out) {
                Ok(confirmation) => println!(
                    "Booking confirmed! ID: {}, Total: ${:.2} for {} nights.",
                    confirmation.booking_id, confirmation.total_price, confirmation.nights
                ),
                Err(e) => println!("{e}"),
            }
        }
        "3" => {
            let Some(id) = prompt("Booking ID") else {
                return Ok(false);
            };
            match engine.cancel_booking(id.parse().unwrap_or(0)) {
                Ok(()) => println!("Booking canceled."),
                Err(e) => println!("{e}"),
            }
        }
        "4" => {
            for booking in engine.bookings_for_user(&username)? {
                println!(
                    "{}  room {}  {} -> {}  ${:.2}  {}",
                    booking.booking_id,
                    booking.room_number,
                    booking.check_in,
                    booking.check_out,
                    booking.total_price,
                    booking.status
                );
            }
        }
        "5" => {
            for booking in engine.bookings_for_user(&username)? {
                print!("{}", receipt::render(&app.hotel_name, &booking));
            }
        }
        "6" => {
            if !profile_prompt(app, &username)? {
                return Ok(false);
            }
        }
        "0" => app.session.logout(),
        _ => println!("Unknown choice."),
    }
    Ok(true)
}

fn admin_menu(app: &mut AppState) -> Result<bool> {
    println!();
    println!("1) All bookings  2) Daily revenue  3) Weekly revenue  4) Change password  0) Logout");
    let choice = match prompt("Choice") {
        Some(choice) => choice,
        None => return Ok(false),
    };
    let engine = BookingEngine::new(&app.store);

    match choice.as_str() {
        "1" => {
            let filter = booking_filter_prompt();
            for booking in engine.all_bookings(filter.as_ref())? {
                println!(
                    "{}  {}  room {}  booked {}  {} -> {}  ${:.2}  {}",
                    booking.booking_id,
                    booking.username,
                    booking.room_number,
                    booking.booking_date.format("%Y-%m-%d %H:%M:%S"),
                    booking.check_in,
                    booking.check_out,
                    booking.total_price,
                    booking.status
                );
            }
        }
        "2" => {
            let Some(date) = prompt("Date (YYYY-MM-DD)") else {
                return Ok(false);
            };
            match engine.daily_revenue(&date) {
                Ok(revenue) => println!("Revenue for {date}: ${revenue:.2}"),
                Err(e) => println!("{e}"),
            }
        }
        "3" => {
            let Some(date) = prompt("Any date in the week (YYYY-MM-DD)") else {
                return Ok(false);
            };
            match engine.weekly_revenue(&date) {
                Ok(revenue) => println!("Weekly revenue: ${revenue:.2}"),
                Err(e) => println!("{e}"),
            }
        }
        "4" => {
            let Some(password) = prompt("New admin password") else {
                return Ok(false);
            };
            match identity::change_admin_password(&app.store, &password) {
                Ok(()) => println!("Password changed."),
                Err(e) => println!("{e}"),
            }
        }
        "0" => app.session.logout(),
        _ => println!("Unknown choice."),
    }
    Ok(true)
}

/// Empty answers leave a field unconstrained
fn room_filter_prompt() -> Option<RoomFilter> {
    let min_price = prompt("Min price (blank for any)")?;
    let max_price = prompt("Max price (blank for any)")?;
    let room_type = prompt("Type (Single/Double/Suite, blank for any)")?;
    let facilities = prompt("Facilities contains (blank for any)")?;

    Some(RoomFilter {
        min_price: min_price.parse().unwrap_or(0.0),
        max_price: max_price.parse().unwrap_or(0.0),
        room_type: RoomType::parse(&room_type),
        facilities,
    })
}

fn booking_filter_prompt() -> Option<BookingFilter> {
    let booking_id = prompt("Booking ID (blank for any)")?;
    let username = prompt("Username contains (blank for any)")?;
    let start_date = prompt("Booked from (blank for any)")?;
    let end_date = prompt("Booked until (blank for any)")?;

    let normalize = |raw: String| {
        if raw.is_empty() {
            String::new()
        } else {
            dates::normalize(&raw).unwrap_or(raw)
        }
    };

    Some(BookingFilter {
        booking_id: booking_id.parse().unwrap_or(0),
        username,
        start_date: normalize(start_date),
        end_date: normalize(end_date),
    })
}

fn profile_prompt(app: &mut AppState, username: &str) -> Result<bool> {
    let current = identity::profile_of(&app.store, username)?;
    println!("Leave a field blank to keep its current value.");

    let mut next = current.clone();
    let fields: [(&str, &mut String); 5] = [
        ("Full name", &mut next.full_name),
        ("ID number", &mut next.id_number),
        ("Email", &mut next.email),
        ("Address", &mut next.address),
        ("Phone", &mut next.phone),
    ];
    for (label, slot) in fields {
        let Some(value) = prompt(label) else {
            return Ok(false);
        };
        if !value.is_empty() {
            *slot = value;
        }
    }

    match identity::profile_upsert(&app.store, &next) {
        Ok(()) => println!("Profile updated successfully!"),
        Err(e) => println!("{e}"),
    }
    Ok(true)
}
