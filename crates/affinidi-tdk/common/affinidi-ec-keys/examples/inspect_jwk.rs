/*!
*   Utility that reads an EC JWK and prints it out in every supported representation.
*/

use affinidi_ec_keys::{Jwk, KeyPart, curve_size, to_buffer, to_engine_handle, to_jwk};
use clap::{Parser, ValueEnum};
use tracing_subscriber::filter;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None,arg_required_else_help(true))]
struct Args {
    /// JWK as a JSON string
    #[arg(short, long, required = true)]
    jwk: String,

    /// Which part of the key to convert
    #[arg(value_enum, short, long, default_value = "public")]
    part: Part,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum Part {
    /// x and y co-ordinates
    Public,

    /// d (and x, y if present)
    Private,
}

fn main() {
    // construct a subscriber that prints formatted traces to stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    let args = Args::parse();
    let part = match args.part {
        Part::Public => KeyPart::Public,
        Part::Private => KeyPart::Private,
    };

    let jwk: Jwk = serde_json::from_str(&args.jwk).expect("Couldn't parse JWK");

    println!("JWK: {part:?}");
    println!("============");
    let exported = to_jwk(&jwk, part).expect("Couldn't convert JWK");
    println!("{}", serde_json::to_string_pretty(&exported).unwrap());

    println!();
    println!(
        "Buffer (hex)       : {}",
        hex::encode(to_buffer(&jwk, part).expect("Couldn't build buffer"))
    );
    println!(
        "Curve order size   : {:?} bits",
        curve_size(&jwk.curve, false)
    );

    match to_engine_handle(&jwk, part) {
        Ok(handle) => println!("Engine handle      : {handle:?}"),
        Err(e) => println!("Engine handle      : rejected ({e})"),
    }
}
