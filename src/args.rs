use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::records::stream_segment::FieldNames;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Attribute table of the channel coverage (CSV with a header row)
    #[clap(required_unless_present = "config_file")]
    pub table: Option<String>,

    /// Workspace prefix, `stream.map.dat` is appended to it as-is
    #[clap(required_unless_present = "config_file")]
    pub workspace: Option<String>,

    /// TOML configuration file, positional arguments take precedence over it
    #[clap(long)]
    pub config_file: Option<String>,

    /// Output method
    #[clap(short, long, value_enum)]
    pub output: Option<OutputMethod>,
}

#[derive(clap::ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMethod {
    /// The stream map is written to `<workspace>stream.map.dat`
    #[default]
    File,

    /// The stream map is printed to the console, no file is touched
    Print,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub table: String,
    pub workspace: String,
    pub output: OutputMethod,
    pub fields: FieldNames,
}

impl ConfigFile {
    /// Command line values override whatever the configuration file holds.
    pub fn merge_cli(mut self, cli: Cli) -> Self {
        if let Some(table) = cli.table {
            self.table = table;
        }
        if let Some(workspace) = cli.workspace {
            self.workspace = workspace;
        }
        if let Some(output) = cli.output {
            self.output = output;
        }
        self
    }
}
