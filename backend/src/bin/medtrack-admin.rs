//! Operator tool working directly against the medtrack database.
//!
//! Usage: medtrack-admin [--database-url URL] <COMMAND>
//!   user create        : create an account (email/password rules enforced)
//!   medication add     : add a medication for an existing user
//!   medication list    : list a user's medications
//!   log                : record a dose for a calendar day
//!   stats              : print the dashboard summary for a user

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use sqlx::SqlitePool;

use medtrack_api::{
    db,
    models::{
        medication::CreateMedicationRequest, medication_log::LogTakenRequest,
        user::{UserProfile, UserRole},
    },
    services::{
        auth::AuthService, medication_logs::MedicationLogService,
        medications::MedicationService, stats::StatsService,
    },
    validation::{validate_email, validate_medication_form, validate_password},
};

#[derive(Parser)]
#[command(name = "medtrack-admin", about = "Manage medtrack users, medications and logs")]
struct Cli {
    /// SQLite database to operate on
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://medication.db")]
    database_url: String,

    /// bcrypt work factor for new passwords
    #[arg(long, env = "BCRYPT_COST", default_value_t = 10)]
    bcrypt_cost: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Medication management commands
    Medication {
        #[command(subcommand)]
        command: MedicationCommands,
    },

    /// Record that a medication was taken on a given day
    Log {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        medication_id: i64,

        /// Calendar day, YYYY-MM-DD
        #[arg(short, long)]
        date: String,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Print adherence stats for a user
    Stats {
        #[arg(short, long)]
        email: String,

        /// Day to compute the window for (defaults to today, UTC)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        #[arg(short, long)]
        name: String,

        /// patient or caretaker
        #[arg(short, long, default_value = "patient")]
        role: UserRole,
    },
}

#[derive(Subcommand)]
enum MedicationCommands {
    /// Add a medication to a user's list
    Add {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        dosage: String,

        /// Doses per day
        #[arg(short, long)]
        frequency: i64,

        #[arg(short, long)]
        instructions: Option<String>,
    },

    /// List a user's medications, newest first
    List {
        #[arg(short, long)]
        email: String,
    },
}

async fn user_by_email(pool: &SqlitePool, email: &str) -> anyhow::Result<UserProfile> {
    AuthService::find_by_email(pool, email)
        .await?
        .with_context(|| format!("No user with email {email}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let pool = db::create_pool(&cli.database_url).await?;
    db::run_migrations(&pool).await?;

    match cli.command {
        Commands::User {
            command:
                UserCommands::Create {
                    email,
                    password,
                    name,
                    role,
                },
        } => {
            if !validate_email(&email) {
                anyhow::bail!("Invalid email address: {email}");
            }
            let check = validate_password(&password);
            if !check.is_valid {
                anyhow::bail!("Weak password: {}", check.errors.join("; "));
            }

            let user =
                AuthService::create_user(&pool, &email, &password, &name, role, cli.bcrypt_cost)
                    .await?;
            println!("Created user {} <{}> ({})", user.id, user.email, user.role);
        }

        Commands::Medication {
            command:
                MedicationCommands::Add {
                    email,
                    name,
                    dosage,
                    frequency,
                    instructions,
                },
        } => {
            let check = validate_medication_form(&name, &dosage, frequency);
            if !check.is_valid {
                let errors: Vec<String> = check
                    .errors
                    .iter()
                    .map(|(field, msg)| format!("{field}: {msg}"))
                    .collect();
                anyhow::bail!("Invalid medication: {}", errors.join("; "));
            }

            let user = user_by_email(&pool, &email).await?;
            let req = CreateMedicationRequest {
                name: Some(name),
                dosage: Some(dosage),
                frequency: Some(frequency),
                instructions,
            };
            let medication = MedicationService::create(&pool, user.id, &req).await?;
            println!("Added medication {} ({}) for {}", medication.id, medication.name, user.email);
        }

        Commands::Medication {
            command: MedicationCommands::List { email },
        } => {
            let user = user_by_email(&pool, &email).await?;
            let medications = MedicationService::list(&pool, user.id).await?;
            if medications.is_empty() {
                println!("No medications for {}", user.email);
            }
            for m in medications {
                println!("{:>5}  {}  {}  {}x/day", m.id, m.name, m.dosage, m.frequency);
            }
        }

        Commands::Log {
            email,
            medication_id,
            date,
            notes,
        } => {
            let user = user_by_email(&pool, &email).await?;
            let req = LogTakenRequest {
                taken_date: Some(date),
                notes,
            };
            let log = MedicationLogService::log_taken(&pool, user.id, medication_id, &req).await?;
            println!("Logged medication {} on {}", log.medication_id, log.taken_date);
        }

        Commands::Stats { email, date } => {
            let user = user_by_email(&pool, &email).await?;
            let today = date.unwrap_or_else(|| Utc::now().date_naive());
            let stats = StatsService::compute(&pool, user.id, today).await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
