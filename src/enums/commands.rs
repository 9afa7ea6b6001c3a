use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run a simulated audit for a URL
    Analyze {
        url: String,
        #[clap(short, long)]
        seed: Option<u64>,
        #[clap(short, long)]
        json: bool,
        /// Send the finished report to the configured webhook for this address
        #[clap(short, long)]
        email: Option<String>,
    },
    /// Classify a load-speed string such as "3.2s"
    Classify {
        duration: String,
    },
    /// Start the dashboard server
    Serve {
        /// Overrides `[server] port` from the configuration file
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        open: bool,
    },
    /// Check the configuration file
    Validate,
}
