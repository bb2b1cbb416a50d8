//! Rust rewrite of a legacy credential and data-protection toolkit. Passwords
//! are stored as salted digest records and structured data travels as
//! passphrase-sealed payloads; both textual formats are stable so records and
//! payloads written by one implementation verify and open in another.

pub mod crypto;
pub mod parse;
pub mod random;
