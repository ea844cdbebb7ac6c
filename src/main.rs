use docopt::Docopt;
use labyrinth::{
    maze::Maze,
    units::{Height, Width},
};
use log::{info, LevelFilter};
use rand::{rngs::OsRng, Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{
    io,
    io::prelude::*,
    fs::File,
    time::Instant
};

const USAGE: &str = "Labyrinth

Generate a perfect maze and show the shortest route from its entrance (E) to its exit (S).

Usage:
    labyrinth -h | --help
    labyrinth [--width=<w>] [--height=<h>] [--seed=<n>] [--allow-even] [--no-solve] [--text-out=<path>] [-v...] [-q]

Options:
    -h --help           Show this screen.
    --width=<w>         Maze width in cells, odd and at least 3. Asked for on stdin when missing.
    --height=<h>        Maze height in cells, odd and at least 3. Asked for on stdin when missing.
    --seed=<n>          Seed for the maze generator. A random seed is used when missing.
    --allow-even        Accept even dimensions. The exit of such a maze cannot be reached.
    --no-solve          Only generate and print the maze.
    --text-out=<path>   Also write the final maze rendering to a text file.
    -v --verbose        Log more, repeat for even more (-vvv traces every carving step).
    -q --quiet          Log nothing, not even warnings.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_width: Option<u32>,
    flag_height: Option<u32>,
    flag_seed: Option<u64>,
    flag_allow_even: bool,
    flag_no_solve: bool,
    flag_text_out: String,
    flag_verbose: usize,
    flag_quiet: bool,
}

// The binary's own errors, wrapping the library errors.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Labyrinth(::labyrinth::errors::Error, ::labyrinth::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Logger(::log::SetLoggerError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = match Docopt::new(USAGE).and_then(|d| d.deserialize()) {
        Ok(args) => args,
        // --help
        Err(e) if !e.fatal() => e.exit(),
        Err(e) => return Err(e.into()),
    };

    TermLogger::init(log_level(&args),
                     Config::default(),
                     TerminalMode::Mixed,
                     ColorChoice::Auto)?;

    let width = match args.flag_width {
        Some(w) => w,
        None => prompt_dimension("width")?,
    };
    let height = match args.flag_height {
        Some(h) => h,
        None => prompt_dimension("height")?,
    };

    let start_time = Instant::now();

    let mut maze = if args.flag_allow_even {
        Maze::new_allow_even(Width(width), Height(height))?
    } else {
        Maze::new(Width(width), Height(height))?
    };

    let seed = args.flag_seed.unwrap_or_else(|| OsRng.gen());
    info!("Using seed: {}", seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);
    maze.generate(&mut rng)?;

    println!("Generated maze:");
    println!("{}", maze);

    if !args.flag_no_solve {
        println!("Solving maze...");
        if maze.solve()? {
            println!("Maze solved!");
        } else {
            println!("No solution found for the maze.");
        }
        println!("{}", maze);
    }

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&maze.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("Wrote maze to {}", args.flag_text_out);
    }

    println!("Execution time: {} seconds", start_time.elapsed().as_secs_f64());

    Ok(())
}

fn log_level(args: &MazeArgs) -> LevelFilter {
    if args.flag_quiet {
        return LevelFilter::Off;
    }
    match args.flag_verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn prompt_dimension(name: &str) -> Result<u32> {
    print!("Enter the maze {} (must be odd): ", name);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let value = line.trim()
        .parse::<u32>()
        .chain_err(|| format!("Invalid maze {}: {:?}", name, line.trim()))?;
    Ok(value)
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
