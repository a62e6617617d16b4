use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{load_from_files, Catalog, RatingStore};
use recommender::{CfRecommender, ContentRecommender, Recommendation};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// MovieRecs - score and rank movies from two rating tables
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Movie recommendations via content similarity and item-item CF", long_about = None)]
struct Cli {
    /// Path to the movie attribute table
    #[arg(short, long, default_value = "data/movies_features.txt")]
    movies_file: PathBuf,

    /// Path to the user rating table
    #[arg(short, long, default_value = "data/ranks_matrix.txt")]
    ranks_file: PathBuf,

    /// Emit machine-readable JSON instead of human output
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a movie by taste-profile similarity
    Content {
        /// User name to recommend for
        #[arg(long)]
        user: String,
    },

    /// Recommend a movie by k-NN collaborative filtering
    Cf {
        /// User name to recommend for
        #[arg(long)]
        user: String,

        /// Number of nearest rated movies to average over
        #[arg(long, default_value = "3")]
        k: usize,
    },

    /// Predict the rating a user would give a movie
    Predict {
        /// Movie name to score
        #[arg(long)]
        movie: String,

        /// User name to predict for
        #[arg(long)]
        user: String,

        /// Number of nearest rated movies to average over
        #[arg(long, default_value = "3")]
        k: usize,
    },

    /// Show table statistics
    Stats,
}

#[derive(Serialize)]
struct RecommendOutput<'a> {
    algorithm: &'a str,
    user: &'a str,
    result: &'a Recommendation,
}

#[derive(Serialize)]
struct PredictOutput<'a> {
    movie: &'a str,
    user: &'a str,
    k: usize,
    score: f64,
}

#[derive(Serialize)]
struct StatsOutput {
    movies: usize,
    users: usize,
    evaluations: usize,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let (catalog, ratings) = load_from_files(&cli.movies_file, &cli.ranks_file)
        .context("Failed to load recommendation tables")?;
    let catalog = Arc::new(catalog);
    let ratings = Arc::new(ratings);
    if !cli.json {
        println!(
            "{} Loaded {} movies and {} users in {:?}",
            "✓".green(),
            catalog.len(),
            ratings.len(),
            start.elapsed()
        );
    }

    match cli.command {
        Commands::Content { user } => {
            let content = ContentRecommender::new(catalog, ratings);
            let result = content.recommend(&user)?;
            print_recommendation("content", &user, &result, cli.json)?;
        }
        Commands::Cf { user, k } => {
            let cf = CfRecommender::new(catalog, ratings);
            let result = cf.recommend(&user, k)?;
            print_recommendation("cf", &user, &result, cli.json)?;
        }
        Commands::Predict { movie, user, k } => {
            let cf = CfRecommender::new(catalog, ratings);
            let score = cf.predict_score(&movie, &user, k)?;
            print_prediction(&movie, &user, k, score, cli.json)?;
        }
        Commands::Stats => print_stats(&catalog, &ratings, cli.json)?,
    }

    Ok(())
}

fn print_recommendation(
    algorithm: &str,
    user: &str,
    result: &Recommendation,
    json: bool,
) -> Result<()> {
    if json {
        let output = RecommendOutput {
            algorithm,
            user,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match result {
        Recommendation::Movie(name) => {
            println!(
                "{} {} should watch {}",
                "→".green(),
                user.bold(),
                name.bold().blue()
            );
        }
        Recommendation::AllMoviesRated => {
            println!("{} has already rated every movie", user.bold());
        }
        Recommendation::UserNotFound => {
            println!("{}", result.to_string().red());
        }
    }
    Ok(())
}

fn print_prediction(movie: &str, user: &str, k: usize, score: f64, json: bool) -> Result<()> {
    if json {
        let output = PredictOutput {
            movie,
            user,
            k,
            score,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} predicted rating of {} for {}: {}",
        "→".green(),
        movie.bold().blue(),
        user.bold(),
        format!("{:.3}", score).bold()
    );
    Ok(())
}

fn print_stats(catalog: &Catalog, ratings: &RatingStore, json: bool) -> Result<()> {
    if json {
        let output = StatsOutput {
            movies: catalog.len(),
            users: ratings.len(),
            evaluations: catalog.num_evaluations(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Table statistics".bold().blue());
    println!("{}Movies: {}", "• ".green(), catalog.len());
    println!("{}Users: {}", "• ".green(), ratings.len());
    println!(
        "{}Evaluation categories: {}",
        "• ".green(),
        catalog.num_evaluations()
    );
    Ok(())
}
