//! Command-line interface for kmlkit.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{WriteOptions, DEFAULT_DELIMITER};
use crate::document::{coordinate_collections, DocumentReader, DocumentWriter};
use crate::element::Element;
use crate::error::{ModelError, Result};
use crate::point::GeoPoint;
use crate::registry::TypeRegistry;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// kmlkit - Inspect and normalize KML documents.
#[derive(Parser)]
#[command(name = "kmlkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read a KML file and write it back with regenerated coordinates.
    Normalize {
        /// Input KML file
        file: PathBuf,

        /// Text placed between coordinate tuples (default: newline)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print every coordinate list in a KML file as YAML.
    Points {
        /// Input KML file
        file: PathBuf,
    },

    /// List the built-in element names.
    Names,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            file,
            delimiter,
            output,
        } => normalize_command(&file, delimiter.as_deref(), output.as_deref()),
        Commands::Points { file } => points_command(&file),
        Commands::Names => {
            names_command();
            Ok(())
        }
    }
}

/// Read `path` into a model tree.
fn load(registry: &TypeRegistry, path: &Path) -> Result<Box<dyn Element>> {
    let xml = fs::read_to_string(path)?;
    DocumentReader::new(registry)
        .read_str(&xml)?
        .ok_or_else(|| {
            ModelError::InvalidArgument(format!(
                "root element of {} is not a known KML element",
                path.display()
            ))
        })
}

/// Execute the normalize command.
fn normalize_command(file: &Path, delimiter: Option<&str>, output: Option<&Path>) -> Result<()> {
    let options = WriteOptions::with_delimiter(delimiter.unwrap_or(DEFAULT_DELIMITER))?;
    let registry = TypeRegistry::with_builtins();

    let mut root = load(&registry, file)?;
    let body = DocumentWriter::new(&registry, options).write(root.as_mut())?;
    let document = format!("{XML_DECLARATION}\n{body}\n");

    match output {
        Some(path) => {
            fs::write(path, document)?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => print!("{document}"),
    }
    Ok(())
}

/// Execute the points command.
fn points_command(file: &Path) -> Result<()> {
    let registry = TypeRegistry::with_builtins();
    let root = load(&registry, file)?;

    let lists: Vec<&[GeoPoint]> = coordinate_collections(root.as_ref())
        .into_iter()
        .map(|collection| collection.as_slice())
        .collect();
    print!("{}", serde_yaml_ng::to_string(&lists)?);
    Ok(())
}

/// Execute the names command.
fn names_command() {
    let registry = TypeRegistry::with_builtins();
    let mut names: Vec<String> = registry
        .registered_names()
        .filter(|name| {
            registry
                .find_type(name)
                .is_some_and(|descriptor| !descriptor.is_abstract())
        })
        .map(ToString::to_string)
        .collect();
    names.sort();

    for name in names {
        println!("{}", style(name).cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_normalize() {
        let cli = Cli::parse_from(["kmlkit", "normalize", "doc.kml", "--delimiter", " "]);

        let Commands::Normalize {
            file,
            delimiter,
            output,
        } = cli.command
        else {
            panic!("expected normalize command");
        };
        assert_eq!(file, PathBuf::from("doc.kml"));
        assert_eq!(delimiter, Some(" ".to_string()));
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_points() {
        let cli = Cli::parse_from(["kmlkit", "points", "doc.kml"]);
        assert!(matches!(cli.command, Commands::Points { .. }));
    }

    #[test]
    fn test_cli_parse_names() {
        let cli = Cli::parse_from(["kmlkit", "names"]);
        assert!(matches!(cli.command, Commands::Names));
    }
}
