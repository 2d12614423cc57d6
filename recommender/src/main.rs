use anyhow::Result;
use clap::{Parser, Subcommand};
use engine::{recommend, Catalog, FeatureIndex, RecommendError};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recommender")]
#[command(about = "Content-based movie recommendations from overview text", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV
    #[arg(long, global = true, default_value = "movies_data.csv")]
    data: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the distinct titles available for querying
    Titles,
    /// Rank the titles most similar to the given one
    Recommend {
        /// Exact title to query
        #[arg(long)]
        title: String,
        /// How many recommendations to return
        #[arg(long, default_value_t = 5)]
        top_n: usize,
        /// Emit JSON instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the full metadata record for a title
    Show {
        /// Exact title to look up
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let catalog = Catalog::from_csv_path(&cli.data)?;
    tracing::info!(path = %cli.data, titles = catalog.len(), "catalog ready");

    match cli.command {
        Commands::Titles => {
            for title in catalog.titles() {
                println!("{title}");
            }
        }
        Commands::Recommend { title, top_n, json } => {
            // Built once per invocation; a changed catalog means a fresh
            // build, never an in-place update.
            let index = FeatureIndex::build(&catalog);
            let recs = recommend(&title, &catalog, &index, top_n)?;
            if json {
                let doc = serde_json::json!({
                    "title": title,
                    "recommendations": recs,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("Top recommendations for '{title}':");
                for (i, rec) in recs.iter().enumerate() {
                    println!("{}. {} ({:.3})", i + 1, rec.title, rec.score);
                }
            }
        }
        Commands::Show { title } => {
            let movie = catalog
                .get(&title)
                .ok_or_else(|| RecommendError::TitleNotFound(title.clone()))?;
            println!("{}", movie.title);
            println!("Overview: {}", movie.overview);
            println!("Genre: {}", movie.genre);
            println!("Certificate: {}", movie.certificate);
            println!("Year: {}", movie.year);
            println!("Runtime: {}", movie.runtime);
            println!("Rating: {} ({} ratings)", movie.rating, movie.rating_count);
        }
    }
    Ok(())
}
