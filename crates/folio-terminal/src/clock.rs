//! Wall-clock seam for the `date` command.

use chrono::Local;

use folio_types::Lang;

/// Source of the current date/time label. Abstracted so tests can pin it.
pub trait Clock {
    fn now_label(&self, lang: Lang) -> String;
}

/// The real local clock, formatted in the locale's customary order.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self, lang: Lang) -> String {
        let now = Local::now();
        let fmt = match lang {
            Lang::En => "%m/%d/%Y, %H:%M:%S",
            Lang::De => "%d.%m.%Y, %H:%M:%S",
        };
        now.format(fmt).to_string()
    }
}
