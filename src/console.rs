//! Handling the snellview CLI
//!
//! This module handles the command line parsing. Parameters which are not given (or invalid) on the
//! command line are asked for interactively.
use crate::{
    error::{SnellError, SnellResult},
    incidence::{IncidenceAngle, MAX_INCIDENCE_DEGREES},
    medium::Medium,
    medium_table::MediumTable,
};
use clap::Parser;
use rprompt::prompt_reply_from_bufread;
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

/// Number of interactive attempts per parameter before giving up.
const MAX_ATTEMPTS: usize = 3;

/// Validated command line arguments of the snellview application.
#[derive(Debug, PartialEq)]
pub struct Args {
    /// medium on the incident side of the interface
    pub medium1: Medium,
    /// medium on the far side of the interface
    pub medium2: Medium,
    /// angle of incidence
    pub angle: IncidenceAngle,
    /// path of the plot file (.svg, .png, .bmp), if a plot should be created
    pub output: Option<PathBuf>,
    /// path of the JSON report, if a report should be written
    pub report: Option<PathBuf>,
}

/// Raw command line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct PartialArgs {
    /// medium 1 (incident side): name of a medium of the dataset or its refractive index
    #[arg(short = 'm', long)]
    medium1: Option<String>,

    /// medium 2: name of a medium of the dataset or its refractive index
    #[arg(short = 'n', long)]
    medium2: Option<String>,

    /// angle of incidence in degrees (integer from 0 to 89)
    #[arg(short, long)]
    angle: Option<String>,

    /// CSV file with the columns "Medium" and "Index". If not given, a built-in table of media is used
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// file path of the ray diagram plot (.svg, .png or .bmp)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// file path of the JSON report
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// print the available media and exit
    #[arg(short, long)]
    pub list: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArgFlag {
    Medium1,
    Medium2,
    Angle,
}
impl ArgFlag {
    /// Value used if the user just hits enter.
    const fn default_input(self) -> &'static str {
        match self {
            Self::Medium1 => "1",
            Self::Medium2 => "1.33",
            Self::Angle => "30",
        }
    }
}

/// Evaluates if the passed medium string is valid.
///
/// The input may either be the name of a medium of the table or a refractive index. An index which
/// is found in the table selects the corresponding medium, any other positive index creates an
/// unnamed medium.
fn eval_medium_input(table: &MediumTable, input: &str) -> Option<Medium> {
    let input = input.trim();
    if let Some(medium) = table.get(input) {
        return Some(medium.clone());
    }
    let refractive_index = input.parse::<f64>().ok()?;
    table
        .find_by_index(refractive_index)
        .cloned()
        .or_else(|| Medium::from_index(refractive_index).ok())
}

/// Evaluates if the passed angle string is a valid (integer) angle of incidence.
fn eval_angle_input(input: &str) -> Option<IncidenceAngle> {
    let degrees = input.trim().parse::<u32>().ok()?;
    IncidenceAngle::new(f64::from(degrees)).ok()
}

/// Creates the prompt string that is displayed in the console.
fn create_prompt_str(flag: ArgFlag, init_str: &str, table: &MediumTable) -> String {
    let mut prompt_str = init_str.to_owned();
    match flag {
        ArgFlag::Medium1 | ArgFlag::Medium2 => {
            let number = if flag == ArgFlag::Medium1 { 1 } else { 2 };
            prompt_str += &format!(
                "Please choose medium {number} by name or refractive index (default: {}):\n",
                flag.default_input()
            );
            prompt_str += &list_media(table);
        }
        ArgFlag::Angle => {
            prompt_str += &format!(
                "Please insert the angle of incidence in degrees (0 - {MAX_INCIDENCE_DEGREES}, default: {}):\n",
                flag.default_input()
            );
        }
    }
    prompt_str
}

/// Returns a list of all media of the table, one per line.
#[must_use]
pub fn list_media(table: &MediumTable) -> String {
    table.iter().map(|medium| format!("  {medium}\n")).collect()
}

/// Extracts an argument from its command line value or asks for it interactively.
///
/// A valid command line value is returned directly. Otherwise the user is prompted (at most
/// [`MAX_ATTEMPTS`] times). An empty reply selects the default value of the argument.
///
/// # Errors
///
/// Returns an [`SnellError::Console`] if the reader fails (e.g. end of input) or if no valid value
/// was given.
fn get_args<T>(
    func: impl Fn(&str) -> Option<T>,
    input: Option<&str>,
    arg_flag: ArgFlag,
    table: &MediumTable,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> SnellResult<T> {
    if let Some(arg) = input.and_then(&func) {
        return Ok(arg);
    }
    let mut init_str = if input.is_some() { "Invalid input!\n" } else { "" };
    for _ in 0..MAX_ATTEMPTS {
        let prompt_str = create_prompt_str(arg_flag, init_str, table);
        let reply = prompt_reply_from_bufread(reader, writer, prompt_str)
            .map_err(|e| SnellError::Console(format!("cannot read input: {e}")))?;
        let reply = if reply.trim().is_empty() {
            arg_flag.default_input()
        } else {
            reply.as_str()
        };
        if let Some(arg) = func(reply) {
            return Ok(arg);
        }
        init_str = "Invalid input!\n";
    }
    Err(SnellError::Console(
        "Too many wrong inputs! Program exits! Please type \"snellview -h\" for help!".into(),
    ))
}

impl Args {
    /// Create validated [`Args`] from the raw command line arguments.
    ///
    /// Missing or invalid media and angles are asked for via the given reader / writer (e.g.
    /// `stdin` / `stdout`).
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Console`] if a parameter could not be determined.
    pub fn from_partial_args(
        part_args: PartialArgs,
        table: &MediumTable,
        reader: &mut impl BufRead,
        writer: &mut impl Write,
    ) -> SnellResult<Self> {
        let medium1 = get_args(
            |input| eval_medium_input(table, input),
            part_args.medium1.as_deref(),
            ArgFlag::Medium1,
            table,
            reader,
            writer,
        )?;
        let medium2 = get_args(
            |input| eval_medium_input(table, input),
            part_args.medium2.as_deref(),
            ArgFlag::Medium2,
            table,
            reader,
            writer,
        )?;
        let angle = get_args(
            eval_angle_input,
            part_args.angle.as_deref(),
            ArgFlag::Angle,
            table,
            reader,
            writer,
        )?;
        writeln!(
            writer,
            "Medium 1: {medium1}\nMedium 2: {medium2}\nAngle of incidence: {angle}"
        )
        .map_err(|e| SnellError::Console(e.to_string()))?;
        Ok(Self {
            medium1,
            medium2,
            angle,
            output: part_args.output,
            report: part_args.report,
        })
    }
}
