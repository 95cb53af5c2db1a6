//! Minimal HTML rendering shared by all pages.

use crate::i18n::{Locale, Translations};

pub const SITE_NAME: &str = "SME Finance Toolkit";

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/debt-brake", "Debt Brake"),
    ("/cost-analysis", "Cost Analysis"),
    ("/debt-equity", "Debt vs. Equity"),
    ("/debt-snowball", "Debt Snowball"),
    ("/funding-guidance", "Funding Guidance"),
    ("/covenant-tracking", "Covenant Tracking"),
    ("/about", "About"),
    ("/donation", "Donation"),
];

/// Locale and catalog for a single render.
pub struct PageContext<'a> {
    pub locale: Locale,
    translations: &'a Translations,
}

impl<'a> PageContext<'a> {
    pub fn new(locale: Locale, translations: &'a Translations) -> Self {
        Self {
            locale,
            translations,
        }
    }

    /// Translated and escaped for element text.
    pub fn t(&self, text: &str) -> String {
        html_escape::encode_text(self.translations.translate(self.locale, text)).into_owned()
    }

    /// Translated and escaped for a double-quoted attribute value.
    pub fn attr(&self, text: &str) -> String {
        html_escape::encode_double_quoted_attribute(self.translations.translate(self.locale, text))
            .into_owned()
    }
}

pub fn layout(ctx: &PageContext, title: &str, body: &str) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            format!(
                r#"<a href="{}">{}</a>"#,
                html_escape::encode_double_quoted_attribute(href),
                ctx.t(label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    let languages: String = Locale::ALL
        .iter()
        .map(|locale| {
            let class = if *locale == ctx.locale { r#" class="active""# } else { "" };
            format!(
                r#"<a href="/set_language/{code}"{class}>{label}</a>"#,
                code = locale.code(),
                class = class,
                label = locale.code().to_uppercase()
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | {site}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header>
        <span class="brand">{site}</span>
        <nav aria-label="{nav_label}">
        {nav}
        </nav>
        <div class="lang-switch">{languages}</div>
    </header>
    <main>
{body}
    </main>
    <footer>{footer}</footer>
    <script src="/static/app.js" defer></script>
</body>
</html>
"#,
        lang = ctx.locale.code(),
        title = ctx.t(title),
        site = SITE_NAME,
        nav_label = ctx.attr("Main navigation"),
        nav = nav,
        languages = languages,
        body = body,
        footer = ctx.t("Calculations are estimates and do not replace professional financial advice."),
    )
}

pub fn error_page(ctx: &PageContext, code: u16, title: &str, message: &str) -> String {
    let body = format!(
        r#"        <section class="error">
            <h1>{code}</h1>
            <h2>{title}</h2>
            <p>{message}</p>
            <p><a href="/">{home}</a></p>
        </section>"#,
        code = code,
        title = ctx.t(title),
        message = ctx.t(message),
        home = ctx.t("Back to the home page"),
    );
    layout(ctx, title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_text_is_escaped() {
        let translations = Translations::default().with_catalog(
            Locale::De,
            Translations::parse_catalog("Debt vs. Equity|Fremd- & Eigenkapital <neu>\nAbout|Sag \"Hallo\""),
        );
        let ctx = PageContext::new(Locale::De, &translations);

        assert_eq!(ctx.t("Debt vs. Equity"), "Fremd- &amp; Eigenkapital &lt;neu&gt;");
        assert_eq!(ctx.attr("About"), "Sag &quot;Hallo&quot;");
        assert_eq!(ctx.t("plain"), "plain");
    }

    #[test]
    fn test_layout_uses_locale() {
        let translations = Translations::default().with_catalog(
            Locale::De,
            Translations::parse_catalog("Home|Startseite\nAbout|Über uns\nMain navigation|Hauptnavigation"),
        );
        let ctx = PageContext::new(Locale::De, &translations);
        let html = layout(&ctx, "About", "<p>body</p>");

        assert!(html.contains(r#"<html lang="de">"#));
        assert!(html.contains("<title>Über uns | SME Finance Toolkit</title>"));
        assert!(html.contains(r#"<a href="/">Startseite</a>"#));
        assert!(html.contains(r#"<nav aria-label="Hauptnavigation">"#));
        assert!(html.contains(r#"<a href="/set_language/de" class="active">DE</a>"#));
        assert!(html.contains("<p>body</p>"));
    }
}
