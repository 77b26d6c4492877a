//! Parsing of bounds and keys supplied as text.

use crate::error::InvalidArgument;

pub fn parse_bound(s: &str) -> Result<i64, InvalidArgument> {
    s.trim()
        .parse::<i64>()
        .map_err(|err| InvalidArgument::new(s, err))
}

pub fn parse_key(s: &str) -> Result<u64, InvalidArgument> {
    s.trim()
        .parse::<u64>()
        .map_err(|err| InvalidArgument::new(s, err))
}
