#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod parse;
mod prelude;
mod presets;
mod quantity;
mod storage;
mod tables;
mod workbench;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, add, calculate, list, list_presets, remove, reset, tariff, update},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.command {
        Command::Calculate(command_args) => calculate(&args.state, &command_args)?,
        Command::List => list(&args.state)?,
        Command::Add(command_args) => add(&args.state, &command_args)?,
        Command::Update(command_args) => update(&args.state, &command_args)?,
        Command::Remove(command_args) => remove(&args.state, &command_args)?,
        Command::Tariff(command_args) => tariff(&args.state, &command_args)?,
        Command::Presets(command_args) => list_presets(&command_args),
        Command::Reset => reset(&args.state)?,
    }

    Ok(())
}
