mod display;
mod seed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use phaply_ai::GeminiClient;
use phaply_client::{ApiClient, QuerySession, QueryState};
use phaply_server::{ServerConfig, run_server};
use phaply_store::ArticleCatalog;

#[derive(Parser)]
#[command(name = "phaply", version, about = "Hệ thống trợ lý pháp lý AI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the legal-advisory API server.
    Serve {
        /// Bind address.
        #[arg(long, default_value = "127.0.0.1:8000")]
        bind: String,
        /// Catalog file; omit for an ephemeral in-memory catalog.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Gemini API key.
        #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
        api_key: String,
    },
    /// Build a catalog from a seed-data file, embedding every article.
    Seed {
        /// Seed file (array of articles with their knowledge bases).
        #[arg(long, default_value = "data/legal_data.json")]
        input: PathBuf,
        /// Catalog file to (re)create.
        #[arg(long, default_value = "catalog.json")]
        catalog: PathBuf,
        /// Gemini API key.
        #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
        api_key: String,
    },
    /// Print the article listing from a running server.
    List {
        #[arg(long, default_value = "http://localhost:8000")]
        base_url: String,
    },
    /// Ask a free-text legal question against a running server.
    Search {
        #[arg(long, default_value = "http://localhost:8000")]
        base_url: String,
        /// The question, e.g. "thủ tục chuyển nhượng đất".
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("phaply v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            catalog,
            api_key,
        } => {
            run_server(ServerConfig {
                bind,
                catalog_path: catalog,
                api_key,
                gemini_base_url: None,
            })
            .await
        }

        Command::Seed {
            input,
            catalog,
            api_key,
        } => {
            let mut store = ArticleCatalog::open_persistent(&catalog)?;
            let ai = GeminiClient::new(api_key);
            let stats = seed::run_seed(&mut store, &ai, &input).await?;
            println!(
                "Đã nạp {} điều luật vào {} ({:.1}s).",
                stats.total,
                catalog.display(),
                stats.elapsed_secs
            );
            Ok(())
        }

        Command::List { base_url } => {
            let client = ApiClient::new(base_url);
            let articles = client.list_articles().await?;
            display::print_listing(&articles);
            Ok(())
        }

        Command::Search { base_url, query } => {
            let client = ApiClient::new(base_url);
            let mut session = QuerySession::new();
            session.submit(&client, &query).await;

            match session.state() {
                QueryState::Found(result) => display::print_result(result),
                QueryState::NotFound { message } => println!("{message}"),
                QueryState::Error { message } => anyhow::bail!("{message}"),
                // Blank query: nothing was submitted.
                QueryState::Idle | QueryState::Searching => {}
            }
            Ok(())
        }
    }
}
