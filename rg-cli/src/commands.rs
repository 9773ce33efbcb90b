use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or overwrite the persisted company settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Draft a reply to an inbound email (from FILE, or stdin when omitted)
    Generate {
        /// File holding the inbound email text
        file: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the current settings (defaults when nothing is saved yet)
    Show,

    /// Overwrite the settings document. Omitted fields keep their current
    /// value; the write itself is always the full document.
    Save {
        /// Company mission / product description
        #[arg(long)]
        mission: Option<String>,

        /// Sender name used in the attribution line
        #[arg(long)]
        name: Option<String>,

        /// Sender email used in the attribution line
        #[arg(long)]
        email: Option<String>,
    },
}
