//! Display formatting. Currency and date rendering are presentation
//! concerns and live here, not in the core.

use chrono::{DateTime, Local, Utc};

use pledges_core::Amount;

/// pt-BR currency rendering with dot thousands separators, whole reais.
pub fn brl(amount: Amount) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-R$ {grouped}")
    } else {
        format!("R$ {grouped}")
    }
}

/// `dd/mm/yyyy hh:mm` in the local timezone.
pub fn date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}
