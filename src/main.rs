// Copyright 2023 Remi Bernotavicius

use clap::Parser;
use clap::Subcommand;
use database::models::RecipeId;
use std::path::{Path, PathBuf};

mod categories;
mod database;
mod store;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;
type Result<T> = std::result::Result<T, Error>;

/// The category source document bundled with the application.
pub(crate) const RECIPE_TYPES_XML: &str = include_str!("../assets/recipetypes.xml");

#[derive(Parser, Debug)]
struct Args {
    /// Path to the database file. Defaults to a file in the user data
    /// directory.
    #[arg(long)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List recipe ids and titles, optionally filtered by type.
    List {
        /// Only show recipes whose type contains this text.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show every field of one recipe.
    Show { id: i32 },
    /// Add a new recipe. All four fields are required to be non-empty.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        ingredients: String,
        #[arg(long)]
        steps: String,
        #[arg(long = "type")]
        type_: String,
    },
    /// Replace every field of an existing recipe.
    Edit {
        id: i32,
        #[arg(long)]
        title: String,
        #[arg(long)]
        ingredients: String,
        #[arg(long)]
        steps: String,
        #[arg(long = "type")]
        type_: String,
    },
    /// Delete a recipe.
    Delete { id: i32 },
    /// List the category names from the bundled source document.
    Categories {
        /// Read categories from this file instead of the bundled document.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// This is where the database lives on-disk. On Linux it should be like:
/// `~/.local/share/recipe_book/`
fn data_path() -> Result<PathBuf> {
    let dirs = directories::BaseDirs::new().ok_or("failed to get user home directory")?;
    let path = dirs.data_dir().join("recipe_book");
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

fn require_fields(title: &str, ingredients: &str, steps: &str, type_: &str) -> Result<()> {
    if [title, ingredients, steps, type_]
        .iter()
        .any(|f| f.trim().is_empty())
    {
        return Err("title, ingredients, steps, and type must all be filled in".into());
    }
    Ok(())
}

fn print_recipe_line(id: RecipeId, title: &str) {
    println!("{id}\t{title}");
}

fn show_recipe(conn: &mut database::Connection, id: RecipeId) -> Result<()> {
    match store::fetch_recipe(conn, id)? {
        Some(r) => {
            println!("Title: {}", r.title);
            println!("Type: {}", r.type_);
            println!("Ingredients:\n{}", r.ingredients);
            println!("Steps:\n{}", r.steps);
        }
        None => println!("no recipe with id {id}"),
    }
    Ok(())
}

fn print_categories(file: Option<&Path>) -> Result<()> {
    let names = match file {
        Some(path) => categories::load_categories(&std::fs::read_to_string(path)?),
        None => categories::load_categories(RECIPE_TYPES_XML),
    };
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn main() -> Result<()> {
    simple_logger::init_with_level(log::Level::Info)?;
    let args = Args::parse();

    if let Commands::Categories { file } = &args.commands {
        return print_categories(file.as_deref());
    }

    let database_path = match args.database {
        Some(path) => path,
        None => data_path()?.join("recipes.sqlite"),
    };
    let mut conn = database::establish_connection(&database_path)?;

    match args.commands {
        Commands::List { filter } => {
            let all = match filter {
                Some(filter) => store::fetch_recipes_by_type(&mut conn, &filter)?,
                None => store::fetch_all_recipes(&mut conn)?,
            };
            for r in all {
                print_recipe_line(r.id, &r.title);
            }
        }
        Commands::Show { id } => show_recipe(&mut conn, RecipeId::new(id))?,
        Commands::Add {
            title,
            ingredients,
            steps,
            type_,
        } => {
            require_fields(&title, &ingredients, &steps, &type_)?;
            let new_id = store::create_recipe(&mut conn, &title, &ingredients, &steps, &type_)?;
            println!("added recipe {new_id}");
        }
        Commands::Edit {
            id,
            title,
            ingredients,
            steps,
            type_,
        } => {
            require_fields(&title, &ingredients, &steps, &type_)?;
            let changed = store::update_recipe(
                &mut conn,
                RecipeId::new(id),
                &title,
                &ingredients,
                &steps,
                &type_,
            )?;
            if changed {
                println!("updated recipe {id}");
            } else {
                println!("no recipe with id {id}");
            }
        }
        Commands::Delete { id } => {
            if store::delete_recipe(&mut conn, RecipeId::new(id))? {
                println!("deleted recipe {id}");
            } else {
                println!("no recipe with id {id}");
            }
        }
        Commands::Categories { .. } => unreachable!(),
    }
    Ok(())
}
