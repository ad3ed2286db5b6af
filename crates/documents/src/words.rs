use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const UNITS: [&str; 10] = [
    "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];

const TEENS: [&str; 10] = [
    "dix",
    "onze",
    "douze",
    "treize",
    "quatorze",
    "quinze",
    "seize",
    "dix-sept",
    "dix-huit",
    "dix-neuf",
];

const TENS: [&str; 9] = [
    "",
    "dix",
    "vingt",
    "trente",
    "quarante",
    "cinquante",
    "soixante",
    "soixante-dix",
    "quatre-vingt",
];

fn under_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    match n {
        0..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ => {
            let ten = (n / 10) as usize;
            let unit = (n % 10) as usize;
            // 70-79 and 90-99 are built on the previous ten plus a teen:
            // soixante-onze, quatre-vingt-dix-sept.
            if ten == 7 || ten == 9 {
                format!("{}-{}", TENS[ten - 1], TEENS[unit])
            } else if unit == 0 {
                TENS[ten].to_string()
            } else {
                format!("{}-{}", TENS[ten], UNITS[unit])
            }
        }
    }
}

/// `is_final` is true when nothing follows this group in the full
/// spelling; "cent" only takes its plural s in that position
/// (deux cents, but deux cent un and cinq cent mille).
fn under_thousand(n: u64, is_final: bool) -> String {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;

    if hundreds == 0 {
        return under_hundred(rest);
    }

    let mut out = if hundreds == 1 {
        "cent".to_string()
    } else {
        format!("{} cent", UNITS[hundreds as usize])
    };
    if rest == 0 {
        if hundreds > 1 && is_final {
            out.push('s');
        }
        out
    } else {
        format!("{} {}", out, under_hundred(rest))
    }
}

/// Spells a whole number in French.
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return "zéro".to_string();
    }

    let millions = n / 1_000_000;
    let thousands = (n / 1_000) % 1_000;
    let rest = n % 1_000;

    let mut parts: Vec<String> = Vec::new();

    if millions > 0 {
        if millions == 1 {
            parts.push("un million".to_string());
        } else {
            parts.push(format!("{} millions", number_to_words(millions)));
        }
    }

    if thousands > 0 {
        if thousands == 1 {
            parts.push("mille".to_string());
        } else {
            parts.push(format!("{} mille", under_thousand(thousands, false)));
        }
    }

    if rest > 0 {
        parts.push(under_thousand(rest, true));
    }

    parts.join(" ")
}

/// Spells a money amount for the closing formula of a quote.
///
/// The integer part is spelled as-is; when the amount carries centimes a
/// ", X centime(s)" clause is appended. Amounts are rounded to the
/// centime first so the spelling always matches the printed figure.
pub fn amount_to_words(amount: Decimal) -> String {
    let amount = amount
        .max(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let whole = amount.trunc().to_u64().unwrap_or(0);
    let centimes = ((amount - amount.trunc()) * Decimal::new(100, 0))
        .to_u64()
        .unwrap_or(0);

    let mut out = number_to_words(whole);
    if centimes > 0 {
        let plural = if centimes > 1 { "s" } else { "" };
        out.push_str(&format!(", {} centime{}", number_to_words(centimes), plural));
    }
    out
}
