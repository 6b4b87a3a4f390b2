use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "desk")]
#[command(about = "Manage canned messages and users against a REST backend")]
pub struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the REST API base URL
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Override the directory holding the saved session
    #[arg(long, global = true)]
    pub session_dir: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record the identity to work as
    Login {
        email: String,
    },
    /// Forget the saved identity
    Logout,
    /// Show the saved identity
    Whoami,
    /// Canned messages
    #[command(subcommand)]
    Messages(MessageCommand),
    /// Managed users
    #[command(subcommand)]
    Users(UserCommand),
    /// Run commands interactively against one loaded session
    Shell,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ListArgs {
    /// Page to show, starting at 1
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

#[derive(Subcommand, Debug)]
pub enum MessageCommand {
    List(ListArgs),
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    Update {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    Remove {
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    List(ListArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    Update {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    Remove {
        id: u64,
    },
}
