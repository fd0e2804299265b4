//! Interactive command loop.
//!
//! Reads commands from any `BufRead` and writes to any `Write`, so a session
//! can be scripted in tests.

use std::io::{BufRead, Write};

use movie_list_catalog::NewMovie;
use movie_list_db::{DbError, MovieRepository};

use crate::CliError;
use crate::render;

/// Whether the loop should keep reading commands.
enum Step {
    Continue,
    Quit,
}

pub(crate) struct Shell<R, W> {
    repo: MovieRepository,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(crate) fn new(repo: MovieRepository, input: R, out: W) -> Self {
        Self { repo, input, out }
    }

    /// Run until `exit` or end of input, then close the repository.
    pub(crate) fn run(mut self) -> Result<(), CliError> {
        write!(self.out, "{}", render::welcome())?;
        self.show_categories()?;

        loop {
            let Some(command) = self.read_line("Command: ")? else {
                break;
            };
            let step = match command.trim().to_lowercase().as_str() {
                "cat" => self.movies_by_category()?,
                "year" => self.movies_by_year()?,
                "add" => self.add_movie()?,
                "del" => self.delete_movie()?,
                "exit" => Step::Quit,
                _ => {
                    writeln!(self.out, "Not a valid command, please try again.\n")?;
                    Step::Continue
                }
            };
            if let Step::Quit = step {
                break;
            }
        }

        let Self { repo, mut out, .. } = self;
        repo.close();
        writeln!(out, "Thank you for visiting!")?;
        out.flush()?;
        Ok(())
    }

    fn show_categories(&mut self) -> Result<(), CliError> {
        match self.repo.categories() {
            Ok(categories) => write!(self.out, "{}", render::category_list(&categories))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn movies_by_category(&mut self) -> Result<Step, CliError> {
        let Some(category_id) = self.read_int("Category ID: ")? else {
            return Ok(Step::Quit);
        };

        let category = match self.repo.category(category_id) {
            Ok(Some(category)) => category,
            Ok(None) => {
                writeln!(self.out, "There is no category with that ID.\n")?;
                return Ok(Step::Continue);
            }
            Err(e) => {
                self.report(&e)?;
                return Ok(Step::Continue);
            }
        };

        writeln!(self.out)?;
        match self.repo.movies_by_category(category_id) {
            Ok(movies) => write!(
                self.out,
                "{}",
                render::movie_table(&category.name.to_uppercase(), &movies)
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn movies_by_year(&mut self) -> Result<Step, CliError> {
        let Some(year) = self.read_int("Year: ")? else {
            return Ok(Step::Quit);
        };

        writeln!(self.out)?;
        match self.repo.movies_by_year(year) {
            Ok(movies) => write!(
                self.out,
                "{}",
                render::movie_table(&year.to_string(), &movies)
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn add_movie(&mut self) -> Result<Step, CliError> {
        let Some(name) = self.read_line("Name: ")? else {
            return Ok(Step::Quit);
        };
        let Some(year) = self.read_int("Year: ")? else {
            return Ok(Step::Quit);
        };
        let Some(minutes) = self.read_int("Minutes: ")? else {
            return Ok(Step::Quit);
        };
        let Some(category_id) = self.read_int("Category ID: ")? else {
            return Ok(Step::Quit);
        };

        let movie = NewMovie::new(name.trim(), year, minutes, category_id);
        match self.repo.add_movie(&movie) {
            Ok(added) => writeln!(self.out, "{} was added to the database.\n", added.name)?,
            Err(DbError::UnknownCategory(_)) => writeln!(
                self.out,
                "There is no category with that ID. Movie not added.\n"
            )?,
            Err(DbError::Validation(e)) => writeln!(self.out, "{}. Movie not added.\n", e)?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn delete_movie(&mut self) -> Result<Step, CliError> {
        let Some(movie_id) = self.read_int("Movie ID: ")? else {
            return Ok(Step::Quit);
        };

        match self.repo.delete_movie(movie_id) {
            Ok(0) => writeln!(self.out, "There is no movie with that ID.\n")?,
            Ok(_) => writeln!(
                self.out,
                "Movie ID {} was deleted from the database.\n",
                movie_id
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    /// Storage failures end the command, not the session.
    fn report(&mut self, e: &DbError) -> Result<(), CliError> {
        writeln!(self.out, "Database error: {}\n", e)?;
        Ok(())
    }

    /// Prompt and read one line without its line ending. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt until a whole number is entered. `None` at end of input.
    fn read_int(&mut self, prompt: &str) -> Result<Option<i64>, CliError> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_int(&line) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.out, "Invalid whole number. Please try again.\n")?,
            }
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}
