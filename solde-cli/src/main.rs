use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use solde_api::{accounts, predictions, profile, transactions, Session};
use solde_core::{
    bucket_by_month, category_totals, filter_transactions, last_six_month_keys, month_label,
    product_usage, trend_for_category, FinanceAnalysis, Transaction, DEFAULT_STARTING_BALANCE,
};

mod auth;
mod config;
mod report;
mod state;

#[derive(Parser, Debug)]
#[command(name = "solde", version, about = "Banking service client with local finance analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage ~/.solde/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Sign in and store the session token
    Login {
        /// Email; prompted when omitted
        #[arg(long)]
        email: Option<String>,
    },

    /// Drop the stored session token
    Logout,

    /// Greeting, total balance, category breakdown, monthly movements
    Overview,

    /// List bank accounts
    Accounts {
        /// Filter on IBAN or currency (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Browse transactions with the monthly spending trend
    Transactions {
        /// Restrict to one account id
        #[arg(long)]
        account: Option<i64>,

        /// Exact category filter
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive description search
        #[arg(long)]
        search: Option<String>,

        /// Only the server's recent-transactions slice
        #[arg(long)]
        recent: bool,
    },

    /// Six-month finance analysis with anomaly alerts
    Analyze {
        /// Restrict to one account id (default: all accounts)
        #[arg(long)]
        account: Option<i64>,

        /// Seed for the simulated balance projection
        #[arg(long, default_value_t = DEFAULT_STARTING_BALANCE)]
        starting_balance: f64,

        /// Reference date YYYY-MM-DD (default: today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Next-month spending predictions per category
    Predict,

    /// Personalized product recommendations
    Recommend {
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Show or update the user profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
        },

        Command::Login { email } => {
            login(&cfg, email).await?;
        }

        Command::Logout => {
            auth::clear_auth()?;
            println!("Session fermée.");
        }

        Command::Overview => {
            let session = open_session(&cfg)?;
            overview(&session).await?;
        }

        Command::Accounts { search } => {
            let session = open_session(&cfg)?;
            let mut list = accounts::list(&session).await?;
            if let Some(q) = search {
                list.retain(|a| a.matches(&q));
            }
            report::print_accounts(&list);
        }

        Command::Transactions {
            account,
            category,
            search,
            recent,
        } => {
            let session = open_session(&cfg)?;
            browse(&session, account, category, search, recent).await?;
        }

        Command::Analyze {
            account,
            starting_balance,
            as_of,
        } => {
            let session = open_session(&cfg)?;
            analyze(&session, account, starting_balance, as_of).await?;
        }

        Command::Predict => {
            let session = open_session(&cfg)?;
            let me = profile::me(&session).await?;
            let batch = predictions::predict(&session, me.client_id).await?;
            report::print_predictions(&batch);
        }

        Command::Recommend { top } => {
            let session = open_session(&cfg)?;
            let me = profile::me(&session).await?;
            let recos = predictions::recommend(&session, me.client_id, top).await?;
            if recos.is_empty() {
                println!("(aucune recommandation)");
            }
            for r in recos {
                println!("- {r}");
            }
        }

        Command::Profile { command } => {
            let session = open_session(&cfg)?;
            match command {
                ProfileCommand::Show => {
                    let me = profile::me(&session).await?;
                    println!("Nom    : {}", me.name);
                    println!("Email  : {}", me.email);
                    println!("Client : {}", me.client_id);
                }
                ProfileCommand::Update { name, email } => {
                    profile::update(&session, &name, &email).await?;
                    println!("Profil mis à jour.");
                }
            }
        }
    }

    Ok(())
}

/// Rebuild the session context from the stored token.
fn open_session(cfg: &config::Config) -> Result<Session> {
    let auth = auth::load_auth()?;
    let token = auth
        .token
        .ok_or_else(|| anyhow::anyhow!("no stored session; run: solde login"))?;
    Ok(Session::with_token(&cfg.api.base_url, token))
}

async fn login(cfg: &config::Config, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => auth::prompt_line("Email")?,
    };
    let password = auth::prompt_line("Mot de passe")?;

    let session = Session::login(&cfg.api.base_url, &email, &password).await?;
    auth::save_auth(&auth::AuthState {
        token: Some(session.token().to_string()),
    })?;
    println!("Connexion réussie. Token enregistré dans ~/.solde/auth.json");
    Ok(())
}

async fn overview(session: &Session) -> Result<()> {
    let me = profile::me(session).await?;
    let total = accounts::total_balance(session).await?;
    let account_list = accounts::list(session).await?;
    let recent = transactions::recent(session).await?;
    let all = transactions::list(session).await?;

    println!("Bonjour {}\n", me.name);
    println!("Solde total : {total:.2}\n");

    println!("Comptes :");
    report::print_accounts(&account_list);

    println!("\nRépartition par catégorie :");
    report::print_category_totals(&category_totals(&all));

    let keys = last_six_month_keys(today());
    let buckets = bucket_by_month(&all, &keys);
    println!("\nMouvements mensuels :");
    for (key, value) in keys.iter().zip(&buckets) {
        println!("{:<6} {:>12.2}", month_label(key), value);
    }

    println!("\nTransactions récentes :");
    let recent_refs: Vec<&Transaction> = recent.iter().collect();
    report::print_transactions(&recent_refs);
    Ok(())
}

async fn browse(
    session: &Session,
    account: Option<i64>,
    category: Option<String>,
    search: Option<String>,
    recent: bool,
) -> Result<()> {
    let txns = if recent {
        transactions::recent(session).await?
    } else {
        transactions::list(session).await?
    };

    if !recent {
        let trend = transactions::monthly_trend(session).await?;
        let trend = trend_for_category(&txns, &trend, category.as_deref());
        println!("Dépenses par mois :");
        report::print_trend(&trend);
        println!();
    }

    let hits = filter_transactions(&txns, account, category.as_deref(), search.as_deref());
    report::print_transactions(&hits);
    Ok(())
}

async fn analyze(
    session: &Session,
    account: Option<i64>,
    starting_balance: f64,
    as_of: Option<NaiveDate>,
) -> Result<()> {
    let all = transactions::list(session).await?;
    let mine: Vec<Transaction> = filter_transactions(&all, account, None, None)
        .into_iter()
        .cloned()
        .collect();

    let reference = as_of.unwrap_or_else(today);
    let analysis = FinanceAnalysis::compute(&mine, reference, starting_balance);
    report::print_analysis(&analysis);

    println!("\nProduits bancaires utilisés :");
    report::print_product_usage(&product_usage(&mine));

    println!("\nNombre total de transactions : {}", mine.len());
    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
