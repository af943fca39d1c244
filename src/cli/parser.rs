use clap::{Parser, Subcommand};

/// Command-line interface definition for tmsdash
#[derive(Parser)]
#[command(
    name = "tmsdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Trip-management dashboard: on-time rating, attendance clock-in/out and POD summary",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Read dashboard numbers from this YAML/JSON file instead of the config
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        /// Print the current configuration as YAML
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Compute the on-time rating for a pair of trip counters
    Rating {
        /// Trips delivered on time (negative values count as 0)
        #[arg(allow_negative_numbers = true)]
        on_time: i64,

        /// Trips delivered late (negative values count as 0)
        #[arg(allow_negative_numbers = true)]
        late: i64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a single dashboard frame
    Dashboard {
        /// Page to show: home or absensi
        #[arg(long, default_value = "home")]
        page: String,

        /// Open the POD submenu
        #[arg(long)]
        pod: bool,

        /// Expand a trip widget: approved, finished or pending
        #[arg(long)]
        expand: Option<String>,
    },

    /// Interactive session reading commands from stdin (attendance lives until exit)
    Session {
        /// Pin the clock to today's date at HH:MM[:SS]
        #[arg(long = "clock")]
        clock: Option<String>,
    },
}
