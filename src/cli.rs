use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "retrotasks")]
#[command(about = "A retro-styled terminal to-do list with categories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Start in dark mode regardless of the config file
    #[arg(long, global = true)]
    pub dark: bool,

    /// Category selected on startup (e.g. work, shopping)
    #[arg(short, long, global = true)]
    pub category: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the task list and exit
    Show {
        /// Print JSON instead of a checklist
        #[arg(long)]
        json: bool,
    },
    /// Write a config file with the default settings
    InitConfig,
}
