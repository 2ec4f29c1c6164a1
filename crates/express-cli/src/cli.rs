#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(about = "Decode and replay sound queue data", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a whole .SND file to raw signed 16-bit little-endian PCM
    Decode {
        /// Compressed input file
        input: PathBuf,

        /// Raw PCM output file
        output: PathBuf,

        /// Entry volume selecting the output scale (0-31, above 16 plays at full volume)
        #[arg(long, default_value_t = 16)]
        volume: u8,
    },

    /// Queue sound files and run the maintenance timer over them
    Simulate {
        /// Sound files to queue, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of decode rounds to run
        #[arg(long, default_value_t = 32)]
        ticks: u32,

        /// JSON configuration file (default: platform config directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config {
        /// JSON configuration file (default: platform config directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decode() {
        let args = Args::try_parse_from(["express", "decode", "in.snd", "out.raw", "--volume", "8"])
            .unwrap();
        match args.command {
            Command::Decode {
                input,
                output,
                volume,
            } => {
                assert_eq!(input, PathBuf::from("in.snd"));
                assert_eq!(output, PathBuf::from("out.raw"));
                assert_eq!(volume, 8);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_simulate_requires_files() {
        assert!(Args::try_parse_from(["express", "simulate"]).is_err());

        let args = Args::try_parse_from(["express", "simulate", "a.snd", "b.snd"])
            .unwrap();
        assert!(matches!(
            args.command,
            Command::Simulate { ref files, ticks: 32, config: None } if files.len() == 2
        ));
    }
}
