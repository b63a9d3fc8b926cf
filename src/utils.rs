use alloy::primitives::{Address, B256, U256};
use chrono::TimeDelta;

const WEI_PER_ETH: u64 = 1_000_000_000_000_000_000;
const ETH_DECIMALS: u8 = 18;

/// Truncate a B256 hash to "0xabcd...ef12" format
pub fn truncate_hash(hash: &B256) -> String {
    truncate_hex(format!("{hash}"))
}

/// Truncate an address to "0xabcd...ef12" format
pub fn truncate_address(addr: &Address) -> String {
    truncate_hex(format!("{addr:#x}"))
}

fn truncate_hex(s: String) -> String {
    if s.len() > 14 {
        format!("{}...{}", &s[..8], &s[s.len() - 4..])
    } else {
        s
    }
}

/// Where the USD symbol goes relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsdPattern {
    Prefix(&'static str),
    Suffix(&'static str),
}

/// Digit grouping and currency conventions of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub group: &'static str,
    pub decimal: &'static str,
    /// Integer digit count from which grouping separators are inserted
    pub grouping_from: usize,
    pub usd: UsdPattern,
}

const EN: NumberLocale = NumberLocale {
    group: ",",
    decimal: ".",
    grouping_from: 4,
    usd: UsdPattern::Prefix("$"),
};

/// Resolve formatting conventions for a BCP 47 tag such as "en-US" or "de_DE".
/// Unknown or missing tags format like "en-US".
pub fn number_locale(locale: Option<&str>) -> NumberLocale {
    let tag = locale.unwrap_or("en-US").replace('_', "-").to_lowercase();
    let mut parts = tag.split('-');
    let lang = parts.next().unwrap_or("en");
    let region = parts.find(|p| p.len() == 2);

    match (lang, region) {
        ("en", Some("gb" | "ca")) => NumberLocale {
            usd: UsdPattern::Prefix("US$"),
            ..EN
        },
        ("de", _) => NumberLocale {
            group: ".",
            decimal: ",",
            grouping_from: 4,
            usd: UsdPattern::Suffix("\u{a0}$"),
        },
        ("fr", _) => NumberLocale {
            group: "\u{202f}",
            decimal: ",",
            grouping_from: 4,
            usd: UsdPattern::Suffix("\u{a0}$US"),
        },
        ("es", _) => NumberLocale {
            group: ".",
            decimal: ",",
            grouping_from: 5,
            usd: UsdPattern::Suffix("\u{a0}US$"),
        },
        ("it", _) => NumberLocale {
            group: ".",
            decimal: ",",
            grouping_from: 4,
            usd: UsdPattern::Suffix("\u{a0}USD"),
        },
        ("pt", _) => NumberLocale {
            group: ".",
            decimal: ",",
            grouping_from: 4,
            usd: UsdPattern::Prefix("US$\u{a0}"),
        },
        ("ru", _) => NumberLocale {
            group: "\u{a0}",
            decimal: ",",
            grouping_from: 4,
            usd: UsdPattern::Suffix("\u{a0}$"),
        },
        ("zh", _) => NumberLocale {
            usd: UsdPattern::Prefix("US$"),
            ..EN
        },
        _ => EN,
    }
}

/// Insert group separators into a string of ASCII digits.
pub fn group_digits(digits: &str, locale: &NumberLocale) -> String {
    if digits.len() < locale.grouping_from {
        return digits.to_string();
    }
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 * locale.group.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push_str(locale.group);
        }
        result.push(c);
    }
    result
}

/// Format a number with the locale's group separators
pub fn format_number(n: u64, locale: Option<&str>) -> String {
    group_digits(&n.to_string(), &number_locale(locale))
}

/// Format an arbitrary precision integer with the locale's group separators
pub fn format_u256(n: U256, locale: Option<&str>) -> String {
    group_digits(&n.to_string(), &number_locale(locale))
}

/// Format a USD amount as localized currency text, e.g. "$3,000.00".
///
/// Always two fraction digits, ties rounded away from zero. NaN and
/// infinities keep the symbol placement.
pub fn format_currency(amount: f64, locale: Option<&str>) -> String {
    let negative = amount.is_sign_negative() && !amount.is_nan();
    let body = if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        "\u{221e}".to_string()
    } else {
        return currency_text(&amount.abs().to_string(), negative, locale);
    };
    place_usd_symbol(body, negative, &number_locale(locale))
}

/// Fiat value of `wei` at `price` USD per ether.
///
/// The product is taken on exact decimals and rounded once, so a 0.5 ether
/// reward at 2.25 shows "$1.13".
pub fn format_fiat_value(wei: U256, price: f64, locale: Option<&str>) -> String {
    let Some((mantissa, scale)) = decimal_parts(price) else {
        return format_currency(wei_to_eth(wei) * price, locale);
    };
    let Some(product) = wei.checked_mul(mantissa) else {
        return format_currency(wei_to_eth(wei) * price, locale);
    };
    let scale = scale + ETH_DECIMALS as usize;
    let digits = format!("{:0>width$}", product.to_string(), width = scale + 1);
    let (whole, frac) = digits.split_at(digits.len() - scale);
    currency_text(&format!("{whole}.{frac}"), price.is_sign_negative(), locale)
}

/// Split a finite number's shortest decimal form into an integer mantissa
/// and its count of fraction digits.
fn decimal_parts(value: f64) -> Option<(U256, usize)> {
    if !value.is_finite() {
        return None;
    }
    let text = value.abs().to_string();
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mantissa = format!("{whole}{frac}").parse::<U256>().ok()?;
    Some((mantissa, frac.len()))
}

/// Render an unsigned decimal string as two-digit currency text.
fn currency_text(decimal: &str, negative: bool, locale: Option<&str>) -> String {
    let loc = number_locale(locale);
    let (whole, frac) = round_half_away(decimal, 2);
    let body = format!("{}{}{frac}", group_digits(&whole, &loc), loc.decimal);
    place_usd_symbol(body, negative, &loc)
}

fn place_usd_symbol(body: String, negative: bool, loc: &NumberLocale) -> String {
    let sign = if negative { "-" } else { "" };
    match loc.usd {
        UsdPattern::Prefix(symbol) => format!("{sign}{symbol}{body}"),
        UsdPattern::Suffix(symbol) => format!("{sign}{body}{symbol}"),
    }
}

/// Round an unsigned decimal string to `places` fraction digits, ties away
/// from zero. Returns the whole and fraction digits.
fn round_half_away(decimal: &str, places: usize) -> (String, String) {
    let (whole, frac) = decimal.split_once('.').unwrap_or((decimal, ""));
    let round_up = frac.as_bytes().get(places).is_some_and(|d| *d >= b'5');

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let text: String = digits.iter().map(|&d| char::from(d)).collect();
    let whole = text[..split].trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    (whole.to_string(), text[split..].to_string())
}

/// Convert wei to ether without going through lossy float division.
///
/// The exact decimal expansion is built first and parsed once, so any value
/// with at most 18 fractional digits lands on the nearest f64.
pub fn wei_to_eth(wei: U256) -> f64 {
    let divisor = U256::from(WEI_PER_ETH);
    let whole = wei / divisor;
    let remainder = wei % divisor;
    format!(
        "{whole}.{:0>width$}",
        remainder.to_string(),
        width = ETH_DECIMALS as usize
    )
    .parse()
    .unwrap_or(f64::NAN)
}

/// Format a wei amount in ether with a fixed number of decimals, rounding
/// half up, e.g. "1,234.5679 ETH".
pub fn format_eth_value(wei: U256, decimals: u8, symbol: &str, locale: Option<&str>) -> String {
    let loc = number_locale(locale);
    let decimals = decimals.min(ETH_DECIMALS);

    let unit = U256::from(10u64).pow(U256::from(ETH_DECIMALS - decimals));
    let half = unit / U256::from(2u64);
    let rounded = wei.saturating_add(half) / unit;

    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = group_digits(&(rounded / scale).to_string(), &loc);
    if decimals == 0 {
        return format!("{whole} {symbol}");
    }
    let frac = format!(
        "{:0>width$}",
        (rounded % scale).to_string(),
        width = decimals as usize
    );
    format!("{whole}{}{frac} {symbol}", loc.decimal)
}

/// Determine gas utilization percentage
pub fn gas_utilization_pct(used: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (used as f64 / limit as f64) * 100.0
}

/// Format gas usage as "12,500,000 (63.2%)"
pub fn format_gas_usage(used: u64, limit: u64, locale: Option<&str>) -> String {
    let loc = number_locale(locale);
    let pct = format!("{:.1}", gas_utilization_pct(used, limit)).replace('.', loc.decimal);
    format!("{} ({pct}%)", format_number(used, locale))
}

/// Format a duration in seconds as "45s", "3m 20s" or "2h 05m"
pub fn format_time_span(seconds: u64) -> String {
    let span = i64::try_from(seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX);
    let hours = span.num_hours();
    let minutes = span.num_minutes() % 60;
    let secs = span.num_seconds() % 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}

/// Decode raw bytes as text, replacing anything unprintable with '.'
pub fn decode_printable(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .map(|c| {
            if c.is_control() || c == char::REPLACEMENT_CHARACTER {
                '.'
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn eth(n: u128) -> U256 {
        U256::from(n) * U256::from(WEI_PER_ETH)
    }

    #[rstest]
    #[case(Some("en-US"), "$3,000.00")]
    #[case(None, "$3,000.00")]
    #[case(Some("en-GB"), "US$3,000.00")]
    #[case(Some("de-DE"), "3.000,00\u{a0}$")]
    #[case(Some("de_AT"), "3.000,00\u{a0}$")]
    #[case(Some("fr-FR"), "3\u{202f}000,00\u{a0}$US")]
    #[case(Some("es-ES"), "3000,00\u{a0}US$")]
    #[case(Some("it-IT"), "3.000,00\u{a0}USD")]
    #[case(Some("pt-BR"), "US$\u{a0}3.000,00")]
    #[case(Some("ja-JP"), "$3,000.00")]
    #[case(Some("xx-YY"), "$3,000.00")]
    fn test_format_currency_locales(#[case] locale: Option<&str>, #[case] expected: &str) {
        assert_eq!(format_currency(3000.0, locale), expected);
    }

    #[test]
    fn test_format_currency_rounding_and_sign() {
        assert_eq!(format_currency(0.0, Some("en-US")), "$0.00");
        assert_eq!(format_currency(1234.5, Some("en-US")), "$1,234.50");
        assert_eq!(format_currency(-1234.5, Some("en-US")), "-$1,234.50");
        assert_eq!(format_currency(-1234.5, Some("de-DE")), "-1.234,50\u{a0}$");
        assert_eq!(format_currency(1_000_000.75, Some("en-US")), "$1,000,000.75");
        assert_eq!(format_currency(30_000.0, Some("es-ES")), "30.000,00\u{a0}US$");
    }

    #[rstest]
    #[case(0.125, "$0.13")]
    #[case(0.625, "$0.63")]
    #[case(2.375, "$2.38")]
    #[case(1.005, "$1.01")]
    #[case(0.004, "$0.00")]
    #[case(999.995, "$1,000.00")]
    #[case(-0.125, "-$0.13")]
    fn test_format_currency_ties_round_away_from_zero(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_currency(amount, Some("en-US")), expected);
    }

    #[test]
    fn test_format_fiat_value_rounds_once() {
        let half_eth = U256::from(500_000_000_000_000_000u64);
        assert_eq!(format_fiat_value(half_eth, 2.25, Some("en-US")), "$1.13");
        assert_eq!(format_fiat_value(eth(2), 1234.5, Some("de-DE")), "2.469,00\u{a0}$");
        assert_eq!(format_fiat_value(U256::from(1u64), 1500.0, Some("en-US")), "$0.00");
        assert_eq!(format_fiat_value(eth(1), -2.5, Some("en-US")), "-$2.50");
    }

    #[test]
    fn test_format_fiat_value_non_finite_price() {
        assert_eq!(format_fiat_value(eth(1), f64::INFINITY, Some("en-US")), "$\u{221e}");
        assert_eq!(format_fiat_value(eth(1), f64::NAN, Some("en-US")), "$NaN");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN, Some("en-US")), "$NaN");
        assert_eq!(format_currency(f64::INFINITY, Some("en-US")), "$\u{221e}");
        assert_eq!(format_currency(f64::NEG_INFINITY, Some("en-US")), "-$\u{221e}");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(format_number(0, None), "0");
        assert_eq!(format_number(999, None), "999");
        assert_eq!(format_number(1000, None), "1,000");
        assert_eq!(format_number(15_000_000, None), "15,000,000");
        assert_eq!(format_number(15_000_000, Some("de-DE")), "15.000.000");
        assert_eq!(format_number(1234, Some("es")), "1234");
        assert_eq!(format_number(12345, Some("es")), "12.345");
    }

    #[test]
    fn test_format_u256() {
        let difficulty = U256::from(2_573_254_524_108_389u64);
        assert_eq!(format_u256(difficulty, Some("en-US")), "2,573,254,524,108,389");
        assert_eq!(format_u256(U256::ZERO, None), "0");
    }

    #[test]
    fn test_wei_to_eth() {
        assert_eq!(wei_to_eth(eth(2)), 2.0);
        assert_eq!(wei_to_eth(U256::ZERO), 0.0);
        assert_eq!(wei_to_eth(U256::from(1u64)), 1e-18);
        // 2.041264 ETH, a typical post-Byzantium block reward plus fees
        assert_eq!(wei_to_eth(U256::from(2_041_264_000_000_000_000u128)), 2.041264);
    }

    #[test]
    fn test_format_eth_value() {
        assert_eq!(format_eth_value(eth(2), 4, "ETH", Some("en-US")), "2.0000 ETH");
        assert_eq!(
            format_eth_value(U256::from(1_234_567_890_000_000_000_000u128), 4, "ETH", None),
            "1,234.5679 ETH"
        );
        assert_eq!(format_eth_value(U256::from(5u64), 4, "ETH", None), "0.0000 ETH");
        assert_eq!(
            format_eth_value(U256::from(50_000_000_000_000u64), 4, "ETH", None),
            "0.0001 ETH"
        );
        assert_eq!(
            format_eth_value(eth(1500), 4, "MATIC", Some("de-DE")),
            "1.500,0000 MATIC"
        );
        assert_eq!(format_eth_value(eth(3), 0, "ETH", None), "3 ETH");
    }

    #[test]
    fn test_format_gas_usage() {
        assert_eq!(
            format_gas_usage(12_500_000, 20_000_000, Some("en-US")),
            "12,500,000 (62.5%)"
        );
        assert_eq!(
            format_gas_usage(12_500_000, 20_000_000, Some("de-DE")),
            "12.500.000 (62,5%)"
        );
        assert_eq!(format_gas_usage(5, 0, None), "5 (0.0%)");
    }

    #[test]
    fn test_gas_utilization_pct() {
        assert_eq!(gas_utilization_pct(50, 100), 50.0);
        assert_eq!(gas_utilization_pct(1, 0), 0.0);
    }

    #[test]
    fn test_format_time_span() {
        assert_eq!(format_time_span(0), "0s");
        assert_eq!(format_time_span(45), "45s");
        assert_eq!(format_time_span(200), "3m 20s");
        assert_eq!(format_time_span(7500), "2h 05m");
    }

    #[test]
    fn test_truncate() {
        let hash = B256::repeat_byte(0xab);
        assert_eq!(truncate_hash(&hash), "0xababab...abab");
        let addr = Address::repeat_byte(0x12);
        assert_eq!(truncate_address(&addr), "0x121212...1212");
    }

    #[test]
    fn test_decode_printable() {
        assert_eq!(decode_printable(b"Geth/v1.0"), "Geth/v1.0");
        assert_eq!(decode_printable(&[0x65, 0x00, 0x74, 0x0a]), "e.t.");
        assert_eq!(decode_printable(&[]), "");
    }
}
