// src/format.rs

/// "$1,250,000"
pub fn format_price(price: u64) -> String {
    format!("${}", group_thousands(price))
}

/// "2,400"
pub fn format_sqft(sqft: u32) -> String {
    group_thousands(u64::from(sqft))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(250_000), "$250,000");
        assert_eq!(format_price(1_250_000), "$1,250,000");
        assert_eq!(format_sqft(1200), "1,200");
    }
}
