use dioxus_i18n::prelude::*;
use unic_langid::{langid, LanguageIdentifier};

/// Initialize i18n with the configured locale, English when unknown
pub fn init_i18n(locale: &str) -> I18nConfig {
    let selected = match locale.parse::<LanguageIdentifier>() {
        Ok(id) if id == langid!("de-DE") => id,
        Ok(id) if id != langid!("en-US") => {
            log::warn!("i18n: no translation for {}, using en-US", id);
            langid!("en-US")
        }
        Ok(id) => id,
        Err(e) => {
            log::warn!("i18n: invalid locale {:?} ({}), using en-US", locale, e);
            langid!("en-US")
        }
    };

    I18nConfig::new(selected)
        .with_locale(Locale::new_static(
            langid!("en-US"),
            include_str!("../locales/en-US.ftl"),
        ))
        .with_locale(Locale::new_static(
            langid!("de-DE"),
            include_str!("../locales/de-DE.ftl"),
        ))
        .with_fallback(langid!("en-US"))
}
