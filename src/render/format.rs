//! Display formatting helpers. All pure.

use chrono::NaiveDate;
use url::Url;

/// `0x123456...567890`. Inputs shorter than 10 characters come back as-is.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 10 {
        return address.to_string();
    }
    
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Humanized contract age, floored to whole units
pub fn age_text(created: NaiveDate, today: NaiveDate) -> String {
    let days = (today - created).num_days();
    
    match days {
        d if d < 1 => "Today".to_string(),
        1 => "1 day".to_string(),
        d if d < 7 => format!("{} days", d),
        d if d < 30 => format!("{} weeks", d / 7),
        d if d < 365 => format!("{} months", d / 30),
        d => format!("{} years", d / 365),
    }
}

/// `Nov 28, 2017`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `185432156` -> `185,432,156`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    
    out
}

/// Inspection link on the block explorer
pub fn explorer_url(base: &Url, address: &str) -> String {
    format!("{}/address/{}", base.as_str().trim_end_matches('/'), address)
}
