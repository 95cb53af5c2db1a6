use std::any::Any;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::{
    config::CookiePolicy,
    error::ApiError,
    html::{error_page, layout, PageContext},
    i18n::{Locale, Translations, LANG_COOKIE},
    state::AppState,
    Result,
};

enum FieldKind {
    Number,
    Text,
    Select(&'static [(&'static str, &'static str)]),
    /// One debt per line: `principal, interest rate, minimum payment`.
    DebtList,
}

struct Field {
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
}

struct CalculatorPage {
    title: &'static str,
    intro: &'static str,
    endpoint: &'static str,
    fields: &'static [Field],
}

const fn number(name: &'static str, label: &'static str) -> Field {
    Field {
        name,
        label,
        kind: FieldKind::Number,
    }
}

const DEBT_BRAKE: CalculatorPage = CalculatorPage {
    title: "Debt Brake",
    intro: "Estimate a conservative borrowing limit of 0.35% of annual revenue, modelled on the German debt brake.",
    endpoint: "/api/debt-brake",
    fields: &[number("revenue", "Annual revenue (EUR)")],
};

const COST_ANALYSIS: CalculatorPage = CalculatorPage {
    title: "Cost Analysis",
    intro: "Compare the total and after-tax cost of a loan with fixed monthly payments.",
    endpoint: "/api/cost-analysis",
    fields: &[
        number("principal", "Loan amount (EUR)"),
        number("interest_rate", "Annual interest rate (%)"),
        number("term_years", "Term (years)"),
        number("tax_rate", "Tax rate (%)"),
    ],
};

const DEBT_SNOWBALL: CalculatorPage = CalculatorPage {
    title: "Debt Snowball",
    intro: "Find out which debt to pay off first. Debts are ordered by interest rate, highest first.",
    endpoint: "/api/debt-snowball",
    fields: &[Field {
        name: "debts",
        label: "Debts, one per line: principal, interest rate (%), minimum payment",
        kind: FieldKind::DebtList,
    }],
};

const FUNDING_GUIDANCE: CalculatorPage = CalculatorPage {
    title: "Funding Guidance",
    intro: "Find public funding programs suitable for your company.",
    endpoint: "/api/funding-guidance",
    fields: &[
        Field {
            name: "company_size",
            label: "Company size",
            kind: FieldKind::Select(&[
                ("small", "Small"),
                ("medium", "Medium"),
                ("large", "Large"),
            ]),
        },
        Field {
            name: "industry",
            label: "Industry",
            kind: FieldKind::Text,
        },
        Field {
            name: "purpose",
            label: "Purpose of funding",
            kind: FieldKind::Text,
        },
    ],
};

const COVENANT_TRACKING: CalculatorPage = CalculatorPage {
    title: "Covenant Tracking",
    intro: "Check your key financial ratios against typical loan covenants.",
    endpoint: "/api/covenant-tracking",
    fields: &[
        number("total_debt", "Total debt (EUR)"),
        number("ebitda", "EBITDA (EUR)"),
        number("current_assets", "Current assets (EUR)"),
        number("current_liabilities", "Current liabilities (EUR)"),
        number("net_worth", "Net worth (EUR)"),
    ],
};

const CALCULATORS: &[(&str, &CalculatorPage)] = &[
    ("/debt-brake", &DEBT_BRAKE),
    ("/cost-analysis", &COST_ANALYSIS),
    ("/debt-snowball", &DEBT_SNOWBALL),
    ("/funding-guidance", &FUNDING_GUIDANCE),
    ("/covenant-tracking", &COVENANT_TRACKING),
];

fn render_field(ctx: &PageContext, field: &Field) -> String {
    let label = ctx.t(field.label);
    let input = match &field.kind {
        FieldKind::Number => format!(
            r#"<input type="number" step="any" min="0" id="{0}" name="{0}" required>"#,
            field.name
        ),
        FieldKind::Text => format!(r#"<input type="text" id="{0}" name="{0}">"#, field.name),
        FieldKind::Select(options) => {
            let options: String = options
                .iter()
                .map(|(value, text)| {
                    format!(
                        r#"<option value="{}">{}</option>"#,
                        html_escape::encode_double_quoted_attribute(value),
                        ctx.t(text)
                    )
                })
                .collect();
            format!(r#"<select id="{0}" name="{0}">{1}</select>"#, field.name, options)
        }
        FieldKind::DebtList => format!(
            r#"<textarea id="{0}" name="{0}" rows="6" data-kind="debt-list" placeholder="5000, 18.9, 150"></textarea>"#,
            field.name
        ),
    };
    format!(
        r#"            <label for="{}">{}</label>
            {}"#,
        field.name, label, input
    )
}

fn render_calculator(ctx: &PageContext, page: &CalculatorPage) -> String {
    let fields: String = page
        .fields
        .iter()
        .map(|field| render_field(ctx, field))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"        <h1>{title}</h1>
        <p>{intro}</p>
        <form class="calculator" data-endpoint="{endpoint}">
{fields}
            <button type="submit">{submit}</button>
        </form>
        <h2>{result}</h2>
        <pre class="result" aria-live="polite"></pre>"#,
        title = ctx.t(page.title),
        intro = ctx.t(page.intro),
        endpoint = page.endpoint,
        fields = fields,
        submit = ctx.t("Calculate"),
        result = ctx.t("Result"),
    );
    layout(ctx, page.title, &body)
}

fn render_info(ctx: &PageContext, title: &str, paragraphs: &[&str]) -> String {
    let paragraphs: String = paragraphs
        .iter()
        .map(|p| format!("        <p>{}</p>", ctx.t(p)))
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!("        <h1>{}</h1>\n{}", ctx.t(title), paragraphs);
    layout(ctx, title, &body)
}

fn calculator_page(state: &AppState, locale: Locale, page: &CalculatorPage) -> Html<String> {
    let ctx = PageContext::new(locale, &state.translations);
    Html(render_calculator(&ctx, page))
}

/// GET /
pub async fn index(State(state): State<AppState>, locale: Locale) -> Html<String> {
    let ctx = PageContext::new(locale, &state.translations);
    let cards: String = CALCULATORS
        .iter()
        .map(|(href, page)| {
            format!(
                r#"            <li><a href="{}">{}</a><p>{}</p></li>"#,
                html_escape::encode_double_quoted_attribute(href),
                ctx.t(page.title),
                ctx.t(page.intro)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!(
        r#"        <h1>{title}</h1>
        <p>{lead}</p>
        <ul class="cards">
{cards}
            <li><a href="/debt-equity">{de_title}</a><p>{de_intro}</p></li>
        </ul>"#,
        title = ctx.t("Financial tools for small and medium enterprises"),
        lead = ctx.t("Simple calculators to plan borrowing, compare financing costs and monitor loan covenants."),
        cards = cards,
        de_title = ctx.t("Debt vs. Equity"),
        de_intro = ctx.t("Understand the trade-offs between borrowing and selling equity."),
    );
    Html(layout(&ctx, "Home", &body))
}

/// GET /debt-brake
pub async fn debt_brake(State(state): State<AppState>, locale: Locale) -> Html<String> {
    calculator_page(&state, locale, &DEBT_BRAKE)
}

/// GET /cost-analysis
pub async fn cost_analysis(State(state): State<AppState>, locale: Locale) -> Html<String> {
    calculator_page(&state, locale, &COST_ANALYSIS)
}

/// GET /debt-snowball
pub async fn debt_snowball(State(state): State<AppState>, locale: Locale) -> Html<String> {
    calculator_page(&state, locale, &DEBT_SNOWBALL)
}

/// GET /funding-guidance
pub async fn funding_guidance(State(state): State<AppState>, locale: Locale) -> Html<String> {
    calculator_page(&state, locale, &FUNDING_GUIDANCE)
}

/// GET /covenant-tracking
pub async fn covenant_tracking(State(state): State<AppState>, locale: Locale) -> Html<String> {
    calculator_page(&state, locale, &COVENANT_TRACKING)
}

/// GET /debt-equity
pub async fn debt_equity(State(state): State<AppState>, locale: Locale) -> Html<String> {
    let ctx = PageContext::new(locale, &state.translations);
    Html(render_info(
        &ctx,
        "Debt vs. Equity",
        &[
            "Debt financing keeps ownership with the founders, and interest is usually tax deductible, but repayments are due regardless of business performance.",
            "Equity financing does not have to be repaid, but investors share in profits and decisions.",
            "Use the cost analysis to see the after-tax cost of a loan and the covenant tracker to check how much additional debt your ratios can carry.",
        ],
    ))
}

/// GET /about
pub async fn about(State(state): State<AppState>, locale: Locale) -> Html<String> {
    let ctx = PageContext::new(locale, &state.translations);
    Html(render_info(
        &ctx,
        "About",
        &[
            "This toolkit helps small and medium enterprises make informed financing decisions.",
            "All calculations run on the server without storing any of your data.",
        ],
    ))
}

/// GET /donation
pub async fn donation(State(state): State<AppState>, locale: Locale) -> Html<String> {
    let ctx = PageContext::new(locale, &state.translations);
    Html(render_info(
        &ctx,
        "Donation",
        &[
            "This toolkit is free to use. If it helped your business, please consider supporting its development.",
        ],
    ))
}

fn lang_cookie(locale: Locale, policy: CookiePolicy) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age=31536000; HttpOnly; SameSite={}",
        LANG_COOKIE,
        locale.code(),
        policy.same_site.as_str()
    );
    if policy.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Where to send the user after a language switch: the Referer when it points
/// back at this site, `/` otherwise.
fn redirect_target(headers: &HeaderMap) -> HeaderValue {
    let same_site = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Uri>().ok())
        .and_then(|referer| {
            if referer.authority().is_some() {
                let host = headers.get(header::HOST)?.to_str().ok()?;
                if referer.authority()?.as_str() != host {
                    return None;
                }
            } else if referer.scheme().is_some() {
                return None;
            }
            let path = referer.path_and_query()?.as_str();
            let local = path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\");
            local.then(|| HeaderValue::from_str(path).ok()).flatten()
        });

    same_site.unwrap_or_else(|| HeaderValue::from_static("/"))
}

/// GET /set_language/:lang
/// Stores the language in a cookie and sends the user back where they came from
pub async fn set_language(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let target = redirect_target(&headers);

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::LOCATION, target);

    match Locale::from_code(&lang) {
        Some(locale) => {
            let cookie = HeaderValue::from_str(&lang_cookie(locale, state.cookie))
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            response_headers.insert(header::SET_COOKIE, cookie);
        }
        None => tracing::debug!("Ignoring unsupported language {}", lang),
    }

    Ok((StatusCode::SEE_OTHER, response_headers).into_response())
}

/// Fallback for unknown routes: JSON under `/api/`, an HTML page elsewhere.
pub async fn not_found(State(state): State<AppState>, locale: Locale, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return ApiError::NotFound(uri.path().to_string()).into_response();
    }

    let ctx = PageContext::new(locale, &state.translations);
    let page = error_page(
        &ctx,
        404,
        "Page Not Found",
        "The page you are looking for does not exist.",
    );
    (StatusCode::NOT_FOUND, Html(page)).into_response()
}

/// Response for a handler that panicked.
///
/// The panic hook never sees the request, so this page is always English.
pub fn internal_error(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    let translations = Translations::default();
    let ctx = PageContext::new(Locale::default(), &translations);
    let page = error_page(
        &ctx,
        500,
        "Internal Server Error",
        "Something went wrong on our side. Please try again later.",
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
}
