// ==========================================
// Internationalization (i18n) module
// ==========================================
// Uses the rust-i18n crate.
// Italian (default) and English locales.
// ==========================================
// Note: the rust_i18n::i18n! macro is initialized in lib.rs
// ==========================================

/// Current locale
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Set the locale
///
/// # Parameters
/// - locale: locale code ("it" or "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message (no arguments)
///
/// # Example
/// ```no_run
/// use binari_ammissibili::i18n::t;
/// let msg = t("reason.all_constraints");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message with arguments
///
/// # Example
/// ```no_run
/// use binari_ammissibili::i18n::t_with_args;
/// let msg = t_with_args("reason.length_ok", &[("len", "449"), ("train_len", "250")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
