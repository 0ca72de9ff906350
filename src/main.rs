//! Clinic Calendar CLI
//!
//! Command-line front-end for the booking screen:
//! - Register doctors
//! - Book appointments
//! - List doctors and appointments
//! - Print the calendar in month, week or day view
//! - Export the appointment table

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use clinic_calendar::booking::{
    appointment_rows, doctor_rows, AppointmentForm, BookingService, DoctorForm, DoctorOutcome,
    APPOINTMENT_HEADERS, DOCTOR_HEADERS,
};
use clinic_calendar::calendar::{
    day_grid, month_grid, now_slot, week_grid, CalendarBinder, CalendarView, TimeGrid,
};
use clinic_calendar::config::{generate_default_config, Config};
use clinic_calendar::logging::init_logging;
use clinic_calendar::storage::{open_store, KeyValueStore, StorageBackend};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Book patient appointments with doctors on a day/week/month calendar")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: searched in standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage backend: memory, json or sqlite (overrides config)
    #[arg(long, global = true)]
    pub backend: Option<StorageBackend>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage doctors
    Doctor {
        #[command(subcommand)]
        action: DoctorCommand,
    },

    /// Book an appointment (replaces the doctor's previous appointment)
    Book {
        /// Patient name
        #[arg(short, long)]
        name: String,
        /// Doctor id (created as "Dr. <id>" if unknown)
        #[arg(short, long)]
        doctor: String,
        /// Appointment time, YYYY-MM-DDTHH:MM
        #[arg(short, long)]
        time: String,
        /// Patient email
        #[arg(short, long, default_value = "")]
        email: String,
    },

    /// List appointments
    Appointments {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Print the calendar
    Calendar {
        /// View: month, week, day (default: configured initial view)
        #[arg(short, long)]
        view: Option<CalendarView>,
        /// Anchor date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Export the appointment table as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format of `clinic appointments`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum DoctorCommand {
    /// Register a doctor (ignored if the id exists)
    Add {
        /// Doctor id
        id: String,
        /// Display name
        name: String,
    },
    /// List doctors
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }
    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Config { output } => write_config(output),
        command => run(command, &config),
    }
}

fn write_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &content)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    let data_dir = config.storage.data_dir();
    tracing::debug!("Data directory: {:?}", data_dir);

    let store = open_store(config.storage.backend, &data_dir)
        .with_context(|| format!("opening {} store in {:?}", config.storage.backend, data_dir))?;
    let mut service = BookingService::load(store).context("loading stored bookings")?;

    match command {
        Commands::Doctor { action } => match action {
            DoctorCommand::Add { id, name } => {
                let mut form = DoctorForm {
                    dr_id: id.clone(),
                    dr_name: name,
                };
                match service.submit_doctor(&mut form)? {
                    DoctorOutcome::Added => println!("Added doctor {}", id),
                    DoctorOutcome::AlreadyKnown => println!("Doctor {} already exists", id),
                }
            }
            DoctorCommand::List => print_doctors(&service),
        },

        Commands::Book {
            name,
            doctor,
            time,
            email,
        } => {
            let mut form = AppointmentForm {
                email,
                name,
                doctor: doctor.clone(),
                appointment_time: time,
            };
            let outcome = service.submit_appointment(&mut form)?;

            if let Some(created) = &outcome.created_doctor {
                println!("Registered new doctor {} ({})", created.id, created.title);
            }
            for old in &outcome.replaced {
                println!("Replaced {}'s appointment at {}", old.title, old.start_display());
            }
            if let Some(booked) = service.schedule().appointment_for(&doctor) {
                println!(
                    "Booked {} with {} at {}",
                    booked.title,
                    service.schedule().doctor_name(&doctor),
                    booked.start_display()
                );
            }
        }

        Commands::Appointments { format } => match format {
            ListFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(service.schedule().appointments())?
                );
            }
            ListFormat::Csv => {
                clinic_calendar::export::write_appointments_csv(
                    service.schedule(),
                    std::io::stdout().lock(),
                )?;
            }
            ListFormat::Table => print_appointments(&service),
        },

        Commands::Calendar { view, date } => {
            let mut binder = CalendarBinder::new(config.calendar.clone());
            binder.sync_schedule(service.schedule());
            if let Some(view) = view {
                binder.change_view(view);
            }

            let date = date.unwrap_or_else(|| Local::now().date_naive());
            print_calendar(&binder, date);
        }

        Commands::Export { output } => match output {
            Some(path) => {
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("creating {:?}", path))?;
                clinic_calendar::export::write_appointments_csv(service.schedule(), file)?;
                println!(
                    "Exported {} appointments to {:?}",
                    service.schedule().appointments().len(),
                    path
                );
            }
            None => {
                clinic_calendar::export::write_appointments_csv(
                    service.schedule(),
                    std::io::stdout().lock(),
                )?;
            }
        },

        Commands::Config { output } => write_config(output)?,
    }

    Ok(())
}

fn print_doctors<S: KeyValueStore>(service: &BookingService<S>) {
    let rows = doctor_rows(service.schedule());
    if rows.is_empty() {
        println!("No doctors registered yet.");
        println!();
        println!("Add one with:");
        println!("  clinic doctor add D1 \"Dr. Grey\"");
        return;
    }

    println!("{:<12} {}", DOCTOR_HEADERS[0], DOCTOR_HEADERS[1]);
    println!("{}", "-".repeat(40));
    for row in rows {
        println!("{:<12} {}", row.id, row.name);
    }
}

fn print_appointments<S: KeyValueStore>(service: &BookingService<S>) {
    let rows = appointment_rows(service.schedule());
    if rows.is_empty() {
        println!("No appointments booked.");
        return;
    }

    println!(
        "{:<4} {:<28} {:<20} {:<18} {}",
        APPOINTMENT_HEADERS[0],
        APPOINTMENT_HEADERS[1],
        APPOINTMENT_HEADERS[2],
        APPOINTMENT_HEADERS[3],
        APPOINTMENT_HEADERS[4]
    );
    println!("{}", "-".repeat(90));
    for row in rows {
        println!(
            "{:<4} {:<28} {:<20} {:<18} {}",
            row.index, row.email, row.name, row.time, row.doctor
        );
    }
}

fn print_calendar(binder: &CalendarBinder, date: NaiveDate) {
    println!("{} ({})", binder.view().label(), binder.view());
    println!();

    match binder.view() {
        CalendarView::ResourceTimeGridDay => {
            let grid = day_grid(binder, date);
            println!("{}", date.format("%A %Y-%m-%d"));
            if grid.columns.is_empty() {
                println!("No doctors registered yet.");
            }
            let headers: Vec<String> = grid.columns.iter().map(|c| c.key.title.clone()).collect();
            let now = now_slot(binder, date, Local::now().naive_local());
            print_time_grid(binder, &grid, &headers, now);
            print_leftovers("Outside visible hours", &grid.out_of_hours, binder);
            print_leftovers("Unknown doctor", &grid.unassigned, binder);
        }
        CalendarView::TimeGridWeek => {
            let grid = week_grid(binder, date);
            let headers: Vec<String> = grid
                .columns
                .iter()
                .map(|c| c.key.format("%a %m-%d").to_string())
                .collect();
            print_time_grid(binder, &grid, &headers, None);
            print_leftovers("Outside visible hours", &grid.out_of_hours, binder);
        }
        CalendarView::DayGridMonth => {
            let grid = month_grid(binder, date);
            println!("{}", date.format("%B %Y"));
            for day in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
                print!("{:<12}", day);
            }
            println!();
            for week in &grid.weeks {
                for cell in week {
                    let marker = if cell.in_month { ' ' } else { '·' };
                    let count = if cell.events.is_empty() {
                        String::new()
                    } else {
                        format!("({})", cell.events.len())
                    };
                    print!("{}{:<2} {:<8}", marker, cell.date.format("%d"), count);
                }
                println!();
            }

            let in_month: Vec<_> = grid
                .weeks
                .iter()
                .flatten()
                .filter(|c| c.in_month)
                .flat_map(|c| c.events.iter())
                .collect();
            if !in_month.is_empty() {
                println!();
                for event in in_month {
                    println!(
                        "  {}  {}",
                        event.start.format("%m-%d"),
                        event.label(binder.options())
                    );
                }
            }
        }
    }
}

fn print_time_grid<K>(
    binder: &CalendarBinder,
    grid: &TimeGrid<K>,
    headers: &[String],
    now: Option<usize>,
) {
    const WIDTH: usize = 22;

    print!("{:<7}", "");
    for header in headers {
        print!("| {:<w$}", truncate(header, WIDTH), w = WIDTH);
    }
    println!();
    println!("{}", "-".repeat(7 + headers.len() * (WIDTH + 2)));

    for (slot, time) in grid.slots.iter().enumerate() {
        let marker = if now == Some(slot) { '>' } else { ' ' };
        print!("{}{:<6}", marker, time.format("%H:%M"));
        for column in 0..headers.len() {
            let text: Vec<String> = grid
                .cell(column, slot)
                .map(|e| e.label(binder.options()))
                .collect();
            print!("| {:<w$}", truncate(&text.join("; "), WIDTH), w = WIDTH);
        }
        println!();
    }
}

fn print_leftovers(heading: &str, events: &[clinic_calendar::CalendarEvent], binder: &CalendarBinder) {
    if events.is_empty() {
        return;
    }
    println!();
    println!("{}:", heading);
    for event in events {
        println!(
            "  {} [{}] {}",
            event.start.format("%Y-%m-%d"),
            event.resource_id,
            event.label(binder.options())
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_flag_accepts_memory() {
        let cli = Cli::try_parse_from(["clinic", "--backend", "memory", "doctor", "list"]).unwrap();
        assert_eq!(cli.backend, Some(StorageBackend::Memory));

        assert!(Cli::try_parse_from(["clinic", "--backend", "redis", "doctor", "list"]).is_err());
    }

    #[test]
    fn test_appointments_format() {
        let cli = Cli::try_parse_from(["clinic", "appointments"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Appointments { format: ListFormat::Table }
        ));

        let cli = Cli::try_parse_from(["clinic", "appointments", "--format", "csv"]).unwrap();
        assert!(matches!(cli.command, Commands::Appointments { format: ListFormat::Csv }));

        assert!(Cli::try_parse_from(["clinic", "appointments", "--format", "jsno"]).is_err());
    }

    #[test]
    fn test_calendar_view_aliases() {
        let cli = Cli::try_parse_from(["clinic", "calendar", "-v", "week", "-d", "2024-01-03"]).unwrap();
        match cli.command {
            Commands::Calendar { view, date } => {
                assert_eq!(view, Some(CalendarView::TimeGridWeek));
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 3));
            }
            _ => panic!("expected calendar command"),
        }
    }
}
