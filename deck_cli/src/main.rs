mod args;
mod card;
mod codec;
mod commands;
mod deck;
mod error;
mod logger;
mod store;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use args::{exit_code_for, Args, Commands};
use commands::{Session, Settings};
use deck::ShuffleMode;

fn run(session: &mut Session, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::New { out } => {
            session.create_new_deck_file(&out).context("could not create deck file")?;
            println!("Deck saved to {}", out.display());
        }
        Commands::Shuffle { input, out } => {
            let target = out.unwrap_or_else(|| input.clone());
            session.shuffle_deck_file(&input, &target).context("could not shuffle deck")?;
            println!("Shuffled deck saved to {}", target.display());
        }
        Commands::Deal { input, hand } => {
            let (hand, rest) = session.deal_from_file(&input, hand)?;
            println!("Hand ({} cards):", hand.len());
            for (i, card) in hand.iter().enumerate() {
                println!("{} {}", i, card);
            }
            println!("Remaining deck size: {}", rest.len());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(exit_code_for(&err));
        }
    };

    let settings = Settings {
        shuffle: if args.uniform { ShuffleMode::Uniform } else { ShuffleMode::Compat },
        seed: args.seed,
        verbose: args.verbose,
    };
    let mut session = Session::new(settings);
    let result = run(&mut session, args.command);

    if session.settings.verbose {
        session.log.dump();
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
