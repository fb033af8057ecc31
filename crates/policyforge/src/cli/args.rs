//! # CLI Argument Definitions
//!
//! - `policyforge build <FILE|->` - Render a policy configuration file
//! - `policyforge compose [flags]` - Build a policy from flags and presets
//! - `policyforge preset list|show` - Browse the preset catalog
//! - `policyforge dialects` - Describe the condition dialects
//! - `policyforge config [path|init]` - Manage the application configuration
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level
//! - `-c, --config <PATH>` - Path to configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use policyforge_core::{
    ActivityCondition, ConsensusOperator, CountClause, EthereumCondition, PolicyEffect,
    SolanaInstructionCondition, SolanaTransferCondition, TronCondition,
};

/// Compose custodial signing policies and export them as JSON.
#[derive(Debug, Parser)]
#[command(name = "policyforge")]
#[command(author, version, about = "Compose custodial signing policies")]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    ///
    /// - `-v` - Show info messages
    /// - `-vv` - Show debug messages
    /// - `-vvv` - Show trace messages
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    ///
    /// Defaults to `~/.policyforge/config.toml`.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
#[allow(clippy::large_enum_variant)]
pub enum Commands {
    /// Render a policy configuration file
    ///
    /// Reads a policy configuration as JSON (or TOML when the file name ends
    /// in `.toml`) and prints the policy document. Use `-` to read stdin.
    Build {
        /// Configuration file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: String,

        /// Output options
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a policy from flags
    ///
    /// Flags are applied in a fixed order: the preset first, then metadata,
    /// consensus, and condition rows.
    Compose(ComposeArgs),

    /// Browse the preset catalog
    Preset {
        /// Preset action to perform
        #[command(subcommand)]
        action: PresetAction,
    },

    /// Describe the condition dialects, their fields and hints
    Dialects {
        /// Only describe this dialect (ethereum, solana, tron, activity, raw)
        id: Option<String>,
    },

    /// View or initialize the configuration
    ///
    /// Without a subcommand, displays the effective configuration.
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Where the rendered document goes.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Write the document to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write `<policy name>.json` into the configured output directory
    #[arg(long)]
    pub download: bool,

    /// Single-line JSON regardless of configuration
    #[arg(long)]
    pub compact: bool,
}

/// Flags for `policyforge compose`.
#[derive(Debug, Clone, Default, Args)]
pub struct ComposeArgs {
    /// Start from a preset
    #[arg(long, value_name = "ID")]
    pub preset: Option<String>,

    /// Policy name
    #[arg(long)]
    pub name: Option<String>,

    /// Effect: allow or deny
    #[arg(long, value_name = "EFFECT")]
    pub effect: Option<PolicyEffect>,

    /// Consensus operator: any, all, or count
    #[arg(long, value_name = "OP")]
    pub operator: Option<ConsensusOperator>,

    /// Approving user id (repeatable)
    #[arg(long = "user", value_name = "ID")]
    pub users: Vec<String>,

    /// Minimum approvals for the `count` operator
    #[arg(long, value_name = "N")]
    pub threshold: Option<u32>,

    /// Ethereum row: `<field> <op> [value]` (repeatable)
    #[arg(long, value_name = "ROW")]
    pub ethereum: Vec<EthereumCondition>,

    /// Solana transfer row: `<transfers|spl_transfers> <all|any|count[:N]> <field> <op> [value]`
    #[arg(long, value_name = "ROW")]
    pub solana_transfer: Vec<SolanaTransferCondition>,

    /// Solana instruction row: `program_key <all|any> <op> [value]` or `count <op> <value>`
    #[arg(long, value_name = "ROW")]
    pub solana_instruction: Vec<SolanaInstructionCondition>,

    /// Solana instruction-count clause: `<op> <n>`
    #[arg(long, value_name = "CLAUSE")]
    pub instruction_count: Option<CountClause>,

    /// Solana transfer-count clause: `<op> <n>`
    #[arg(long, value_name = "CLAUSE")]
    pub transfer_count: Option<CountClause>,

    /// Tron row: `contract <Type>` or `<field> <op> [value]` (repeatable)
    #[arg(long, value_name = "ROW")]
    pub tron: Vec<TronCondition>,

    /// Activity row: `<type|resource> <==|!=> [value]` (repeatable)
    #[arg(long, value_name = "ROW")]
    pub activity: Vec<ActivityCondition>,

    /// Raw condition expression, used verbatim
    #[arg(long, value_name = "EXPR")]
    pub raw: Option<String>,

    /// Notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Print the editable configuration instead of the document
    #[arg(long)]
    pub show_config: bool,

    /// Output options
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Preset catalog actions.
#[derive(Debug, Clone, Subcommand)]
pub enum PresetAction {
    /// List presets
    List {
        /// Category filter: all, ethereum, solana, tron, or general
        #[arg(long, default_value = "all")]
        category: String,
    },

    /// Show one preset's rendered document
    Show {
        /// Preset id
        #[arg(value_name = "ID")]
        id: String,

        /// Print the editable configuration instead of the document
        #[arg(long)]
        editable: bool,

        /// Single-line JSON regardless of configuration
        #[arg(long)]
        compact: bool,
    },
}

/// Configuration-related actions.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Show configuration file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
