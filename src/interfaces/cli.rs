use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "callerid")]
#[command(about = "Identify callers from contacts, cache or a bounded remote lookup.")]
#[command(version)]
pub struct Cli {
    /// Lookup timeout in milliseconds (1000-10000)
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Also look up numbers that are already in contacts
    #[arg(long)]
    pub lookup_contacts: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Read numbers from stdin, one per line, sharing one cache
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Phone numbers to resolve
    #[arg(num_args = 1..)]
    pub numbers: Vec<String>,
}
