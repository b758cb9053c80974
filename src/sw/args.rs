use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sw")]
#[command(about = "SSH wallet: connect to your servers by label", long_about = None)]
#[command(disable_help_subcommand = true, disable_version_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Positional arguments are collected as-is; their count is validated by the
// commands themselves so a wrong count is reported, not a parse error. Help
// flags are disabled on these so `-h` or `--help` can be a label or address.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version
    Version,

    /// List every label and its address
    List,

    /// Register LABEL for ADDR
    #[command(disable_help_flag = true)]
    Add {
        #[arg(value_name = "LABEL ADDR", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Give LABEL a new name
    #[command(disable_help_flag = true)]
    Rename {
        #[arg(value_name = "LABEL NEWLABEL", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Forget LABEL
    #[command(disable_help_flag = true)]
    Remove {
        #[arg(value_name = "LABEL", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Open an interactive ssh session to LABEL
    #[command(disable_help_flag = true)]
    Connect {
        #[arg(value_name = "LABEL", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run COMMAND on LABEL
    #[command(disable_help_flag = true)]
    Run {
        #[arg(value_name = "LABEL COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the keyring as JSON
    Export,

    /// Merge the keyring in FILE into the current one
    #[command(disable_help_flag = true)]
    Import {
        #[arg(value_name = "FILE", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

pub const USAGE: &str = "\
USAGE: sw COMMAND

Possible commands:

sw version
sw list
sw add       LABEL   ADDR
sw rename    LABEL   NEWLABEL
sw remove    LABEL
sw connect   LABEL
sw run       LABEL   COMMAND
sw export
sw import    FILE";
