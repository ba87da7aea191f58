/// Source display-name fragments, matched in order.
const CODES: &[(&str, &str)] = &[
    ("US Dollar", "USD"),
    ("Euro", "EUR"),
    ("British Pound", "GBP"),
    ("UAE Dirham", "AED"),
    ("Saudi Riyal", "SAR"),
    ("Iranian Rial", "IRR"),
    ("Pakistani Rupee", "PKR"),
    ("Indian Rupee", "INR"),
    ("Chinese Yuan", "CNY"),
    ("Turkish Lira", "TRY"),
    ("Afghani", "AFN"),
    ("Canadian Dollar", "CAD"),
    ("Australian Dollar", "AUD"),
    ("Swiss Franc", "CHF"),
    ("Swedish Krona", "SEK"),
    ("Japanese Yen", "JPY"),
    ("Russian Ruble", "RUB"),
    ("Danish Krone", "DKK"),
    ("Norwegian Krone", "NOK"),
    ("Kuwaiti Dinar", "KWD"),
    ("Bahraini Dinar", "BHD"),
    ("Qatari Riyal", "QAR"),
];

const NAMES: &[(&str, &str)] = &[
    ("USD", "دالر امریکا"),
    ("EUR", "یورو"),
    ("GBP", "پوند انگلیس"),
    ("AED", "درهم امارات"),
    ("SAR", "ریال سعودی"),
    ("IRR", "ریال ایران"),
    ("PKR", "کلدار پاکستان"),
    ("INR", "روپیه هند"),
    ("CNY", "یوآن چین"),
    ("TRY", "لیره ترکیه"),
    ("AFN", "افغانی"),
    ("CAD", "دالر کانادا"),
    ("AUD", "دالر آسترالیا"),
    ("CHF", "فرانک سویس"),
    ("SEK", "کرون سویدن"),
    ("JPY", "ین جاپان"),
    ("RUB", "روبل روسیه"),
    ("DKK", "کرون دنمارک"),
    ("NOK", "کرون ناروی"),
    ("KWD", "دینار کویت"),
    ("BHD", "دینار بحرین"),
    ("QAR", "ریال قطر"),
];

pub const UNKNOWN_NAME: &str = "نامشخص";

pub fn code_for(display_name: &str) -> Option<&'static str> {
    CODES
        .iter()
        .find(|&&(fragment, _)| display_name.contains(fragment))
        .map(|&(_, code)| code)
}

pub fn local_name(code: &str) -> &'static str {
    NAMES
        .iter()
        .find(|&&(c, _)| c == code)
        .map(|&(_, name)| name)
        .unwrap_or(UNKNOWN_NAME)
}
