//! Minimal CLI over the credential and sealing helpers. Commands stay small
//! and auditable so operators can see exactly how secrets are handled.

use std::env;
use std::str::FromStr;

use credlock_rs::crypto::credentials::{issue, verify};
use credlock_rs::crypto::digest::{digest_hex, DigestAlgorithm};
use credlock_rs::crypto::sealed::{open_value, seal_value};
use credlock_rs::parse::parse_integer;
use credlock_rs::random::alphanumeric_token;
use serde_json::Value;

fn print_usage() {
    eprintln!("Commands:\n  issue-password <plaintext>\n  verify-password <plaintext> <record>\n  seal <passphrase> <json>\n  open <passphrase> <payload-hex>\n  digest <md5|sha1|sha256> <data>\n  random-token <length>");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "issue-password" => {
            if args.len() != 3 {
                return print_usage();
            }
            println!("{}", issue(&args[2]));
        }
        "verify-password" => {
            if args.len() != 4 {
                return print_usage();
            }
            let matches = verify(&args[2], &args[3]);
            println!("{}", if matches { "match" } else { "no-match" });
        }
        "seal" => {
            if args.len() != 4 {
                return print_usage();
            }
            let value: Value = match serde_json::from_str(&args[3]) {
                Ok(value) => value,
                Err(err) => return eprintln!("invalid json value: {err}"),
            };
            match seal_value(&value, &args[2]) {
                Ok(payload) => println!("{payload}"),
                Err(err) => eprintln!("sealing failed: {err}"),
            }
        }
        "open" => {
            if args.len() != 4 {
                return print_usage();
            }
            match open_value::<Value>(&args[3], &args[2]) {
                Ok(value) => println!("{}", serde_json::to_string_pretty(&value).unwrap()),
                Err(err) => eprintln!("opening failed: {err}"),
            }
        }
        "digest" => {
            if args.len() != 4 {
                return print_usage();
            }
            match DigestAlgorithm::from_str(&args[2]) {
                Ok(algorithm) => println!("{}", digest_hex(algorithm, args[3].as_bytes())),
                Err(err) => eprintln!("{err}"),
            }
        }
        "random-token" => {
            if args.len() != 3 {
                return print_usage();
            }
            match parse_integer(&args[2]) {
                Ok(len) if len >= 0 => println!("{}", alphanumeric_token(len as usize)),
                Ok(_) => eprintln!("token length must not be negative"),
                Err(err) => eprintln!("{err}"),
            }
        }
        _ => print_usage(),
    }
}
