use chrono::DateTime;
use chrono_tz::Tz;

use crate::service::calendar::{localize_digits, SolarDate};
use crate::service::rate::{currency, RateSnapshot};

const FOOTER: &str = "📲 برای دریافت لحظه‌ای نرخ ارز:\n@kabulafg2025";

/// Renders `rates` as an HTML-flavored Telegram message.
pub fn render(rates: &RateSnapshot, title: &str, now: &DateTime<Tz>) -> String {
    let date = SolarDate::from_gregorian(now.date_naive()).localized();
    let time = localize_digits(&now.format("%H:%M").to_string());

    let mut msg = format!("{title}\n");
    msg += &format!("📅 تاریخ: {date} | 🕘 ساعت: {time}\n\n");
    msg += &format!("<pre>{:<6}{:<22}{:>10}{:>10}\n", "نماد", "نام ارز", "خرید", "فروش");
    msg += &format!("{}\n", "-".repeat(48));

    for (code, entry) in rates {
        msg += &format!(
            "{:<6}{:<22}{:>10}{:>10}\n",
            code,
            currency::local_name(code),
            beautify_number(&entry.buy),
            beautify_number(&entry.sell),
        );
    }

    msg += "</pre>\n\n";
    msg += FOOTER;

    msg.trim().to_string()
}

/// Two decimals with thousands grouping, localized. Non-numeric input passes through.
pub fn beautify_number(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => localize_digits(&group_thousands(value)),
        _ => raw.to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::from(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(frac_part);

    grouped
}
