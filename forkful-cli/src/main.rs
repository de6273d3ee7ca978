use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use forkful_core::{
    cost_label, search_recipes, stars, submit_recipe, time_label, ApiClient, Recipe, RecipeApi,
    RecipeForm,
};

#[derive(Parser)]
#[command(name = "forkful")]
#[command(about = "Forkful recipe catalog CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ServerArgs {
    /// API base URL
    #[arg(
        long,
        env = "FORKFUL_SERVER",
        default_value = "http://localhost:8080/api/v1"
    )]
    server: String,
    /// Base URL recipe image paths are resolved against
    #[arg(
        long,
        env = "FORKFUL_IMAGES",
        default_value = "http://localhost:8080/images"
    )]
    images: String,
}

#[derive(Args)]
struct CreateArgs {
    #[command(flatten)]
    server: ServerArgs,
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    /// Star rating, 1-5
    #[arg(long, default_value_t = 5)]
    rating: i32,
    /// Required time as HH:MM
    #[arg(long, default_value = "00:00")]
    time: String,
    /// Cost in whole euros
    #[arg(long, default_value = "1")]
    cost: String,
    /// Ingredient, repeatable; the most recent one lists first
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
    /// Path to a JPEG or PNG image to upload with the recipe
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog, optionally ranked by a fuzzy query
    List {
        #[command(flatten)]
        server: ServerArgs,
        /// Free-text query matched against titles and descriptions
        query: Option<String>,
    },
    /// Show a single recipe
    Show {
        #[command(flatten)]
        server: ServerArgs,
        /// Recipe id
        id: String,
    },
    /// Create a recipe from a draft form
    Create(CreateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { server, query } => {
            let client = build_client(&server)?;
            list(&client, query.as_deref().unwrap_or("")).await?;
        }
        Commands::Show { server, id } => {
            let client = build_client(&server)?;
            show(&client, &id).await?;
        }
        Commands::Create(args) => {
            let client = build_client(&args.server)?;
            create(&client, args).await?;
        }
    }

    Ok(())
}

fn build_client(args: &ServerArgs) -> Result<ApiClient> {
    ApiClient::builder()
        .base_url(args.server.clone())
        .images_base_url(args.images.clone())
        .build()
        .context("Failed to build API client")
}

async fn list(client: &ApiClient, query: &str) -> Result<()> {
    // The matcher runs client-side: fetch the whole catalog, rank locally.
    let recipes = client.list_recipes("").await?;
    for recipe in search_recipes(query, &recipes) {
        println!("{}  {}  ({})", stars(recipe.rating), recipe.title, recipe.id);
    }
    Ok(())
}

async fn show(client: &ApiClient, id: &str) -> Result<()> {
    let recipe = client.get_recipe(id).await?;
    print_recipe(client, &recipe);
    Ok(())
}

fn print_recipe(client: &ApiClient, recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("{}", stars(recipe.rating));
    if let Some(time) = recipe.time {
        println!("Time: {}", time_label(time));
    }
    if let Some(cost) = recipe.cost {
        println!("Cost: {}", cost_label(cost));
    }
    if let Some(image) = &recipe.image {
        println!("Image: {}", client.image_url(image));
    }
    println!();
    println!("{}", recipe.description);
    if !recipe.ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in &recipe.ingredients {
            println!("  - {}", ingredient);
        }
    }
}

async fn create(client: &ApiClient, args: CreateArgs) -> Result<()> {
    let mut form = RecipeForm::new();
    form.set_title(args.title);
    form.set_description(args.description);
    form.set_rating(args.rating);
    form.set_time(args.time);
    form.set_cost(args.cost);
    for ingredient in args.ingredients {
        form.add_ingredient(ingredient);
    }

    // One aggregate check, no per-field messages.
    if !form.form_valid() {
        bail!("Recipe is not valid, nothing was submitted");
    }

    let id = submit_recipe(client, &form, args.image.as_deref()).await?;
    println!("Created recipe {}", id);
    println!();
    // Back to the catalog after a successful create.
    list(client, "").await
}
