//! Interactive menu loop driving the movie catalog.

use std::io::BufRead;

use cineshelf_error::CineshelfErrorKind;
use cineshelf_omdb::OmdbClient;
use cineshelf_site::SiteGenerator;
use cineshelf_storage::{CsvStorage, JsonStorage, MovieStorage};

use super::commands::{Cli, StorageFormat};
use super::prompt;

const TEMPLATE_PATH: &str = "_static/index_template.html";
const OUTPUT_PATH: &str = "index.html";
const SITE_TITLE: &str = "My Movie App";

/// Build the storage backend selected on the command line and run the
/// menu until the user exits or input closes.
pub fn run_menu(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let path = cli
        .file
        .clone()
        .unwrap_or_else(|| cli.storage.default_path());

    let storage: Box<dyn MovieStorage> = match cli.storage {
        StorageFormat::Json => Box::new(JsonStorage::new(path)),
        StorageFormat::Csv => Box::new(CsvStorage::new(path)?),
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_loop(&mut input, storage.as_ref())
}

fn run_loop<R: BufRead>(
    input: &mut R,
    storage: &dyn MovieStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        println!();
        println!("Cineshelf Menu:");
        println!("0. Exit");
        println!("1. List Movies");
        println!("2. Add Movie (manual)");
        println!("3. Delete Movie");
        println!("4. Update Movie");
        println!("5. Add Movie (via OMDb API)");
        println!("9. Generate website");

        let choice = prompt::line(input, "Choose an option: ")?;

        if choice == "0" {
            println!("Exiting Cineshelf. Thank you!");
            return Ok(());
        }

        let result = match choice.as_str() {
            "1" => list_movies(storage),
            "2" => add_movie_manual(input, storage),
            "3" => delete_movie(input, storage),
            "4" => update_movie(input, storage),
            "5" => add_movie_from_omdb(input, storage),
            "9" => generate_website(storage),
            _ => {
                println!("Invalid choice, please try again.");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("Operation failed: {}", e);
        }

        prompt::line(input, "Press Enter to continue...")?;
    }
}

fn list_movies(storage: &dyn MovieStorage) -> Result<(), Box<dyn std::error::Error>> {
    let movies = storage.get_all()?;
    if movies.is_empty() {
        println!("No movies in the database.");
        return Ok(());
    }

    println!("{} movies in total:", movies.len());
    for movie in &movies {
        println!("{} ({}): {}", movie.title, movie.year, movie.rating);
    }
    Ok(())
}

fn add_movie_manual<R: BufRead>(
    input: &mut R,
    storage: &dyn MovieStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = prompt::line(input, "Enter movie title: ")?;
    let year: i32 = prompt::parsed(
        input,
        "Enter release year: ",
        "Invalid input. Please enter an integer.",
    )?;
    let rating: f64 = prompt::parsed(
        input,
        "Enter rating: ",
        "Invalid input. Please enter a number.",
    )?;
    let poster = prompt::line(input, "Enter poster URL (or leave blank): ")?;

    storage.add(&title, year, rating, &poster)?;
    println!("Movie added successfully (manual entry).");
    Ok(())
}

fn delete_movie<R: BufRead>(
    input: &mut R,
    storage: &dyn MovieStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = prompt::line(input, "Enter movie title to delete: ")?;
    if storage.delete(&title)? {
        println!("Movie deleted successfully.");
    } else {
        println!("Movie not found.");
    }
    Ok(())
}

fn update_movie<R: BufRead>(
    input: &mut R,
    storage: &dyn MovieStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = prompt::line(input, "Enter movie title to update: ")?;
    let rating: f64 = prompt::parsed(
        input,
        "Enter new rating: ",
        "Invalid input. Please enter a number.",
    )?;

    if storage.update(&title, rating)? {
        println!("Movie updated successfully.");
    } else {
        println!("Movie not found.");
    }
    Ok(())
}

fn add_movie_from_omdb<R: BufRead>(
    input: &mut R,
    storage: &dyn MovieStorage,
) -> Result<(), Box<dyn std::error::Error>> {
    let title = prompt::line(input, "Enter movie title: ")?;

    let lookup = match OmdbClient::from_env().and_then(|client| client.movie_by_title(&title)) {
        Ok(lookup) => lookup,
        Err(e) => {
            // A failed lookup is routine (no network, bad key); the
            // catalog stays usable, so report and return to the menu.
            println!("Error fetching data from OMDb API: {}", e);
            return Ok(());
        }
    };

    if !lookup.is_found() {
        println!(
            "Movie '{}' not found in OMDb API. Please try another title.",
            title
        );
        return Ok(());
    }

    let movie = lookup.to_movie(&title);
    storage.add(&movie.title, movie.year, movie.rating, &movie.poster)?;
    println!(
        "Movie '{}' added successfully (via OMDb API).",
        movie.title
    );
    Ok(())
}

fn generate_website(storage: &dyn MovieStorage) -> Result<(), Box<dyn std::error::Error>> {
    let movies = storage.get_all()?;
    let generator = SiteGenerator::new(TEMPLATE_PATH, OUTPUT_PATH, SITE_TITLE);

    if let Err(e) = generator.generate(&movies) {
        match e.kind() {
            CineshelfErrorKind::Site(site) => match &site.kind {
                cineshelf_error::SiteErrorKind::TemplateRead(_) => {
                    println!("Template file not found.");
                }
                cineshelf_error::SiteErrorKind::OutputWrite(_) => {
                    println!("Error writing website file: {}", site);
                }
            },
            _ => return Err(e.into()),
        }
        return Ok(());
    }

    println!("Website was generated successfully.");
    Ok(())
}
