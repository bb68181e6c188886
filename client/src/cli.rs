use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Game Search Client")]
#[clap(about = "Plays matches between search engines, random movers and people", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Tictactoe(TictactoeCommand),
    Draughts(DraughtsCommand),
}

#[derive(Args)]
pub struct TictactoeCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}

#[derive(Args)]
pub struct DraughtsCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}
