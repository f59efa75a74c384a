// shuffle lines of text from an input file
// by Ian Kluft
// usage: shuffle input.txt > output.txt

use shuffle::ShuffleError;
use std::{env, process};

// mainline - read file, shuffle it, output it
fn main() {
    let Err(err) = shuffle::run(env::args_os()) else {
        return;
    };
    match err.downcast_ref::<ShuffleError>() {
        // clap formats its own usage, help and version text
        Some(usage_err @ ShuffleError::Usage(usage)) => {
            if usage.print().is_err() {
                eprintln!("{usage}");
            }
            process::exit(usage_err.exit_code());
        }
        Some(shuffle_err) => {
            eprintln!("shuffle: {err:#}");
            process::exit(shuffle_err.exit_code());
        }
        None => {
            eprintln!("shuffle: {err:#}");
            process::exit(1);
        }
    }
}
