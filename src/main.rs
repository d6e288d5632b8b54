use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
mod input;
use passprobe::crypto::{DEFAULT_SALT_LEN, generate_salt};
use passprobe::{HashAlgorithm, HashConfig, Hasher, Salt, assess};

#[derive(Debug, clap::Args)]
struct KdfArgs {
    /// PBKDF2 iteration count (default: 100000)
    #[arg(long, env = "PASSPROBE_ITERATIONS")]
    iterations: Option<u32>,

    /// Length in bytes of generated salts (default: 16)
    #[arg(long = "salt-len", env = "PASSPROBE_SALT_LEN")]
    salt_len: Option<usize>,

    /// Derived key size in bits (default: 256)
    #[arg(long = "output-bits", env = "PASSPROBE_OUTPUT_BITS")]
    output_bits: Option<u32>,
}

impl KdfArgs {
    fn to_hash_config(&self) -> Result<HashConfig> {
        let default = HashConfig::default();

        HashConfig::new(
            self.salt_len.unwrap_or(default.salt_len()),
            self.iterations.unwrap_or(default.iterations()),
            self.output_bits.unwrap_or(default.output_bits()),
        )
        .context("invalid PBKDF2 parameters")
    }
}

#[derive(Debug, Parser)]
#[command(name = "passprobe")]
#[command(
    version,
    about = "Offline password strength estimation, digests and PBKDF2 key derivation."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes the input with a SHA-2 digest or PBKDF2
    Hash {
        /// sha-256, sha-384, sha-512 or pbkdf2
        #[arg(short, long, default_value = "sha-256")]
        algorithm: HashAlgorithm,

        /// Hex salt for PBKDF2; generated when omitted
        #[arg(long)]
        salt: Option<Salt>,

        #[command(flatten)]
        kdf: KdfArgs,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Checks the input against a previously derived PBKDF2 key
    #[command(arg_required_else_help = true)]
    Verify {
        /// Hex salt the key was derived with
        #[arg(long)]
        salt: Salt,

        /// Hex key to compare against
        #[arg(long)]
        expected: String,

        #[command(flatten)]
        kdf: KdfArgs,
    },

    /// Estimates the strength of the input
    Strength {
        /// Print the assessment as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Prints a fresh random hex salt
    Salt {
        /// Salt length in bytes
        #[arg(short, long, default_value_t = DEFAULT_SALT_LEN)]
        length: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Hash {
            algorithm,
            salt,
            kdf,
            json,
        } => {
            let config = match algorithm {
                HashAlgorithm::Pbkdf2 => kdf.to_hash_config()?,
                HashAlgorithm::Digest(_) => HashConfig::default(),
            };
            let hasher = Hasher::new(config);
            let input = input::read_secret("Input: ")?;
            let result = hasher
                .compute_hash(&input, algorithm, salt, kdf.iterations)
                .with_context(|| format!("failed to compute {algorithm} hash"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.hex);
                if let Some(salt) = &result.salt_used {
                    println!("salt: {salt}");
                }
                if let Some(iterations) = result.iterations {
                    println!("iterations: {iterations}");
                }
            }
        }
        Commands::Verify {
            salt,
            expected,
            kdf,
        } => {
            let hasher = Hasher::new(kdf.to_hash_config()?);
            let input = input::read_secret("Password: ")?;
            let matches = hasher
                .verify(&input, &salt, kdf.iterations, &expected)
                .context("failed to verify derived key")?;

            if !matches {
                println!("mismatch");
                bail!("derived key does not match");
            }
            println!("match");
        }
        Commands::Strength { json } => {
            let input = input::read_secret("Password: ")?;
            let assessment = assess(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                println!("Entropy: {}", assessment.entropy);
                println!("Pool: {}", assessment.pool);
                println!("Classes: {}/4", assessment.pool.class_count());
                println!("Score: {}", assessment.verdict);
            }
        }
        Commands::Salt { length } => {
            let salt = generate_salt(length).context("failed to generate salt")?;
            println!("{salt}");
        }
    }

    Ok(())
}
