//! HTTP verb as a typed enum.
//!
//! The set is closed: GET, POST, PUT, PATCH, DELETE, OPTIONS. Any other
//! verb string is rejected by the dispatcher with a 400 error before any
//! table is consulted.

use std::fmt;
use std::str::FromStr;

/// A supported HTTP verb.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Verb {
    Delete,
    Get,
    Options,
    Patch,
    Post,
    Put,
}

impl Verb {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Options => "OPTIONS",
            Self::Patch   => "PATCH",
            Self::Post    => "POST",
            Self::Put     => "PUT",
        }
    }
}

/// Case-sensitive: verbs are matched in their RFC 9110 uppercase wire
/// form only, so `"get"` does not parse.
impl FromStr for Verb {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DELETE"  => Ok(Self::Delete),
            "GET"     => Ok(Self::Get),
            "OPTIONS" => Ok(Self::Options),
            "PATCH"   => Ok(Self::Patch),
            "POST"    => Ok(Self::Post),
            "PUT"     => Ok(Self::Put),
            _         => Err(()),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_wire_form() {
        for verb in [
            Verb::Delete,
            Verb::Get,
            Verb::Options,
            Verb::Patch,
            Verb::Post,
            Verb::Put,
        ] {
            assert_eq!(verb.as_str().parse::<Verb>(), Ok(verb));
        }
    }

    #[test]
    fn rejects_verbs_outside_the_set() {
        assert!("TRACE".parse::<Verb>().is_err());
        assert!("HEAD".parse::<Verb>().is_err());
        assert!("get".parse::<Verb>().is_err());
        assert!("".parse::<Verb>().is_err());
    }
}
