use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use hmacdrbg::{
    Drbg, Hmac, NoPr, Pr, PredictionResistance,
    hashfn::{HashFn, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HashArg {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    #[value(name = "sha512-224")]
    Sha512_224,
    #[value(name = "sha512-256")]
    Sha512_256,
}

/// Print HMAC_DRBG output as hex, one line per request.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = HashArg::Sha256)]
    hash: HashArg,

    /// Security strength in bits [default: highest the hash supports]
    #[arg(long)]
    strength: Option<u32>,

    /// Hex seed material (entropy input || nonce); without it the OS
    /// entropy source is used.
    #[arg(long)]
    seed: Option<String>,

    /// Hex personalization string.
    #[arg(long)]
    personalization: Option<String>,

    /// Hex additional input mixed into every request.
    #[arg(long)]
    additional: Option<String>,

    /// Bytes per request.
    #[arg(long, default_value_t = 32)]
    bytes: usize,

    /// Number of requests.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Reseed from the OS entropy source before every request.
    #[arg(long)]
    prediction_resistance: bool,
}

fn decode_hex(name: &str, value: Option<&str>) -> Result<Option<Vec<u8>>> {
    value
        .map(|value| hex::decode(value).with_context(|| format!("--{name} is not valid hex")))
        .transpose()
}

fn run<F: HashFn, P: PredictionResistance>(args: &Args) -> Result<()> {
    let personalization = decode_hex("personalization", args.personalization.as_deref())?;
    let additional = decode_hex("additional", args.additional.as_deref())?.unwrap_or_default();
    let strength = args.strength.unwrap_or(F::SECURITY_STRENGTH);

    let mut drbg = match decode_hex("seed", args.seed.as_deref())? {
        Some(seed) => {
            Drbg::<Hmac<F>, P>::instantiate(strength, &seed, personalization.as_deref())?
        }
        None => {
            let mut builder = Drbg::<Hmac<F>, P>::builder().security_strength(strength);
            if let Some(personalization) = &personalization {
                builder = builder.personalization_string(personalization);
            }
            builder.build()?
        }
    };
    log::info!("{drbg:?}");

    let mut bytes = vec![0; args.bytes];
    for _ in 0..args.count {
        drbg.fill_bytes_with_ai(&mut bytes, &additional)?;
        println!("{}", hex::encode(&bytes));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.bytes > 0, "--bytes must be at least 1");

    match (args.hash, args.prediction_resistance) {
        (HashArg::Sha224, false) => run::<Sha224, NoPr>(&args),
        (HashArg::Sha224, true) => run::<Sha224, Pr>(&args),
        (HashArg::Sha256, false) => run::<Sha256, NoPr>(&args),
        (HashArg::Sha256, true) => run::<Sha256, Pr>(&args),
        (HashArg::Sha384, false) => run::<Sha384, NoPr>(&args),
        (HashArg::Sha384, true) => run::<Sha384, Pr>(&args),
        (HashArg::Sha512, false) => run::<Sha512, NoPr>(&args),
        (HashArg::Sha512, true) => run::<Sha512, Pr>(&args),
        (HashArg::Sha512_224, false) => run::<Sha512_224, NoPr>(&args),
        (HashArg::Sha512_224, true) => run::<Sha512_224, Pr>(&args),
        (HashArg::Sha512_256, false) => run::<Sha512_256, NoPr>(&args),
        (HashArg::Sha512_256, true) => run::<Sha512_256, Pr>(&args),
    }
}
