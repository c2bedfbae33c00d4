use ethers::types::Address;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address pattern is valid")
});

/// A `0x`-prefixed, 40 hex digit address exactly as the user typed it.
///
/// Letter casing is kept for display; comparisons that need to ignore
/// casing go through [`ContractAddress::to_lowercase`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Returns `true` if `s` has the shape of an address
    pub fn is_valid(s: &str) -> bool {
        ADDRESS_RE.is_match(s)
    }
    
    pub fn parse(s: &str) -> Option<Self> {
        if Self::is_valid(s) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }
    
    pub fn as_str(&self) -> &str {
        &self.0
    }
    
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }
    
    /// The 20 byte value behind the hex string
    pub fn h160(&self) -> Address {
        // The shape check guarantees 40 hex digits, so this cannot fail
        Address::from_str(&self.0).unwrap_or_default()
    }
}

impl From<Address> for ContractAddress {
    fn from(address: Address) -> Self {
        // `{:?}` on H160 prints the full lower-case hex form
        Self(format!("{:?}", address))
    }
}

impl TryFrom<String> for ContractAddress {
    type Error = String;
    
    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(format!("not an address: {}", value))
        }
    }
}

impl From<ContractAddress> for String {
    fn from(address: ContractAddress) -> Self {
        address.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
