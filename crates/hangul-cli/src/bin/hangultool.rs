use clap::{Parser, Subcommand};

use hangul_cli::commands::{config_ops, type_ops};

#[derive(Parser)]
#[command(name = "hangultool", about = "Hangul input engine diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a key script through an input session and print the result
    Type {
        /// Keys to type, e.g. "dkssud<space>gksrmf<bs>"
        script: String,
        /// Print one row per key with the marked text and document
        #[arg(long)]
        trace: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Custom layout TOML (optional)
        #[arg(long)]
        layout: Option<String>,
        /// Custom settings TOML (optional)
        #[arg(long)]
        settings: Option<String>,
    },

    /// Keyboard layout table
    Layout {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Engine settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default TOML
    Export,
    /// Validate a TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Type {
            script,
            trace,
            json,
            layout,
            settings,
        } => {
            config_ops::load_custom(layout.as_deref(), settings.as_deref());
            type_ops::type_cmd(&script, trace, json);
        }
        Command::Layout { action } => match action {
            ConfigAction::Export => config_ops::layout_export(),
            ConfigAction::Validate { file } => config_ops::layout_validate(&file),
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
