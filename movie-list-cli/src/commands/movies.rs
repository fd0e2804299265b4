//! One-shot catalog commands. Output goes through the logger like the rest
//! of the non-interactive CLI; the text itself is built by the plain
//! functions below.

use movie_list_catalog::NewMovie;
use movie_list_db::{DbError, MovieRepository};

use crate::CliError;
use crate::render;

/// Result of a delete, worded for the user.
#[derive(Debug, PartialEq, Eq)]
enum DeleteOutcome {
    Deleted(i64),
    Missing(i64),
}

impl DeleteOutcome {
    fn message(&self) -> String {
        match self {
            DeleteOutcome::Deleted(id) => format!("Movie ID {} was deleted from the database.", id),
            DeleteOutcome::Missing(id) => format!("There is no movie with ID {}.", id),
        }
    }
}

pub(crate) fn run_categories(repo: &MovieRepository) -> Result<(), CliError> {
    log::info!("{}", category_listing(repo)?);
    Ok(())
}

pub(crate) fn run_movies_by_category(
    repo: &MovieRepository,
    category_id: i64,
) -> Result<(), CliError> {
    log::info!("{}", category_movies_listing(repo, category_id)?);
    Ok(())
}

pub(crate) fn run_movies_by_year(repo: &MovieRepository, year: i64) -> Result<(), CliError> {
    log::info!("{}", year_movies_listing(repo, year)?);
    Ok(())
}

pub(crate) fn run_add(repo: &MovieRepository, movie: NewMovie) -> Result<(), CliError> {
    log::info!("{}", add_movie(repo, &movie)?);
    Ok(())
}

pub(crate) fn run_delete(repo: &MovieRepository, movie_id: i64) -> Result<(), CliError> {
    match delete_movie(repo, movie_id)? {
        outcome @ DeleteOutcome::Deleted(_) => log::info!("{}", outcome.message()),
        outcome @ DeleteOutcome::Missing(_) => log::warn!("{}", outcome.message()),
    }
    Ok(())
}

fn category_listing(repo: &MovieRepository) -> Result<String, CliError> {
    let categories = repo
        .categories()
        .map_err(|e| CliError::database(format!("Failed to list categories: {}", e)))?;
    Ok(render::category_list(&categories).trim_end().to_string())
}

fn category_movies_listing(repo: &MovieRepository, category_id: i64) -> Result<String, CliError> {
    let category = repo
        .category(category_id)
        .map_err(|e| CliError::database(format!("Failed to look up category: {}", e)))?
        .ok_or_else(|| CliError::not_found("There is no category with that ID."))?;

    let movies = repo
        .movies_by_category(category_id)
        .map_err(|e| CliError::database(format!("Failed to list movies: {}", e)))?;
    Ok(render::movie_table(&category.name.to_uppercase(), &movies)
        .trim_end()
        .to_string())
}

fn year_movies_listing(repo: &MovieRepository, year: i64) -> Result<String, CliError> {
    let movies = repo
        .movies_by_year(year)
        .map_err(|e| CliError::database(format!("Failed to list movies: {}", e)))?;
    Ok(render::movie_table(&year.to_string(), &movies)
        .trim_end()
        .to_string())
}

fn add_movie(repo: &MovieRepository, movie: &NewMovie) -> Result<String, CliError> {
    match repo.add_movie(movie) {
        Ok(added) => Ok(format!(
            "{} was added to the database (ID {}).",
            added.name, added.id
        )),
        Err(DbError::UnknownCategory(_)) => Err(CliError::not_found(
            "There is no category with that ID. Movie not added.",
        )),
        Err(DbError::Validation(e)) => Err(CliError::invalid(e.to_string())),
        Err(e) => Err(CliError::database(format!("Failed to add movie: {}", e))),
    }
}

fn delete_movie(repo: &MovieRepository, movie_id: i64) -> Result<DeleteOutcome, CliError> {
    let removed = repo
        .delete_movie(movie_id)
        .map_err(|e| CliError::database(format!("Failed to delete movie: {}", e)))?;
    if removed == 0 {
        Ok(DeleteOutcome::Missing(movie_id))
    } else {
        Ok(DeleteOutcome::Deleted(movie_id))
    }
}
