//! HTML rendering of the catalog view model
//!
//! Card fragments are built here with explicit escaping of every free-text
//! field. The page shell around them is a `tera` template with autoescaping
//! on; the pre-escaped card markup is the only value inserted with `safe`.

use super::{CardView, CatalogView};
use crate::core::error::CatalogError;
use crate::core::normalize::escape_html;
use serde::Serialize;
use tera::{Context, Tera};

/// Operator-facing message shown in place of the results when loading failed
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load data.json. If you're opening this file directly, run a tiny local server.";

/// Remediation hint accompanying [`LOAD_FAILURE_MESSAGE`]
pub const LOAD_FAILURE_HINT: &str = "python -m http.server then open http://localhost:8000";

/// Text of the missing-image indicator
pub const IMAGE_PLACEHOLDER: &str = "No image";

const PAGE_TEMPLATE_NAME: &str = "catalog.html";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ title }}</title>
</head>
<body>
  <header>
    <h1>{{ title }}</h1>
    <form class="controls" method="get" action="">
      <input id="q" name="q" type="search" placeholder="Search element id, description, group, price" value="{{ query }}" />
      <select id="mainGroup" name="main_group" onchange="this.form.submit()">
        <option value="">All main groups</option>
        {%- for group in main_groups %}
        <option value="{{ group }}"{% if group == main_group %} selected{% endif %}>{{ group }}</option>
        {%- endfor %}
      </select>
      <select id="subGroup" name="sub_group" onchange="this.form.submit()">
        <option value="">All sub groups</option>
        {%- for group in sub_groups %}
        <option value="{{ group }}"{% if group == sub_group %} selected{% endif %}>{{ group }}</option>
        {%- endfor %}
      </select>
      <button type="submit">Search</button>
    </form>
    <div class="meta"><span id="count">{{ count_label }}</span></div>
  </header>
  <main id="results" class="grid">
{{ results | safe }}
  </main>
  <nav class="pager">
    {%- if has_prev %}
    <a id="prev" class="btn" href="?q={{ query | urlencode_strict }}&amp;main_group={{ main_group | urlencode_strict }}&amp;sub_group={{ sub_group | urlencode_strict }}&amp;page={{ page - 1 }}">Prev</a>
    {%- else %}
    <span id="prev" class="btn" aria-disabled="true">Prev</span>
    {%- endif %}
    <span id="pageInfo">{{ page_label }}</span>
    {%- if has_next %}
    <a id="next" class="btn" href="?q={{ query | urlencode_strict }}&amp;main_group={{ main_group | urlencode_strict }}&amp;sub_group={{ sub_group | urlencode_strict }}&amp;page={{ page + 1 }}">Next</a>
    {%- else %}
    <span id="next" class="btn" aria-disabled="true">Next</span>
    {%- endif %}
  </nav>
</body>
</html>
"#;

/// Values the page template reads
#[derive(Debug, Default, Serialize)]
struct PageContext<'a> {
    title: &'a str,
    query: &'a str,
    main_groups: &'a [String],
    main_group: &'a str,
    sub_groups: &'a [String],
    sub_group: &'a str,
    count_label: &'a str,
    page_label: &'a str,
    page: usize,
    has_prev: bool,
    has_next: bool,
    results: String,
}

/// Renders full catalog documents
#[derive(Debug)]
pub struct HtmlRenderer {
    tera: Tera,
    title: String,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>) -> Result<Self, CatalogError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|e| CatalogError::Internal(format!("page template: {}", e)))?;
        Ok(Self {
            tera,
            title: title.into(),
        })
    }

    /// Render the page for a catalog view
    pub fn render_page(&self, view: &CatalogView) -> Result<String, CatalogError> {
        let choices = &view.choices;
        let summary = &view.summary;
        self.render(PageContext {
            title: &self.title,
            query: &choices.query,
            main_groups: &choices.main_groups,
            main_group: choices.main_group.as_deref().unwrap_or_default(),
            sub_groups: &choices.sub_groups,
            sub_group: choices.sub_group.as_deref().unwrap_or_default(),
            count_label: &summary.count_label,
            page_label: &summary.page_label,
            page: summary.page,
            has_prev: summary.has_prev,
            has_next: summary.has_next,
            results: render_cards(&view.cards),
        })
    }

    /// Render the page with the result area replaced by the load diagnostic
    pub fn render_failure_page(&self) -> Result<String, CatalogError> {
        self.render(PageContext {
            title: &self.title,
            results: render_load_failure(),
            ..Default::default()
        })
    }

    fn render(&self, page: PageContext<'_>) -> Result<String, CatalogError> {
        let context = Context::from_serialize(&page)
            .map_err(|e| CatalogError::Internal(format!("page context: {}", e)))?;
        self.tera
            .render(PAGE_TEMPLATE_NAME, &context)
            .map_err(|e| CatalogError::Internal(format!("page render: {}", e)))
    }
}

/// Card grid fragment for a page of cards
pub fn render_cards(cards: &[CardView]) -> String {
    cards.iter().map(render_card).collect()
}

/// One card fragment
pub fn render_card(card: &CardView) -> String {
    let price = card
        .price
        .as_deref()
        .map(|p| {
            format!(
                r#"<div class="priceRow"><span class="price">{}</span></div>"#,
                escape_html(p)
            )
        })
        .unwrap_or_default();

    format!(
        r#"
    <article class="card">
      <div class="imgWrap">{image}</div>
      <div class="cardBody">
        <div class="badges">
          <span class="badge accent">{id}</span>
          <span class="badge">{category_a}</span>
          <span class="badge">{category_b}</span>
        </div>
        {price}
        <div class="desc">{description}</div>
        <div class="small">
          <span>Image source: LEGO CDN</span>
          <span>•</span>
          <a href="{link}" target="_blank" rel="noopener noreferrer">Pick a Brick</a>
        </div>
      </div>
    </article>
"#,
        image = render_image(card),
        id = escape_html(&card.id),
        category_a = escape_html(&card.category_a),
        category_b = escape_html(&card.category_b),
        price = price,
        description = escape_html(&card.description),
        link = escape_html(safe_href(&card.link)),
    )
}

/// Link target for a card, restricted to `http`/`https` URLs
///
/// Anything else (`javascript:`, `data:`, garbage) becomes an inert `#`.
pub fn safe_href(url: &str) -> &str {
    let url = url.trim();
    let scheme = url.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("http") | Some("https") => url,
        _ => "#",
    }
}

/// Image element with an in-place placeholder swap if it fails to load
///
/// Cards without an image get the placeholder directly and no `<img>`, so
/// nothing is fetched for them.
pub fn render_image(card: &CardView) -> String {
    match card.image.as_deref() {
        Some(url) => format!(
            r#"<img loading="lazy" src="{}" alt="{}" onerror="this.onerror=null; this.parentElement.innerHTML='{}';" />"#,
            escape_html(url),
            escape_html(&card.description),
            escape_html(&placeholder()),
        ),
        None => placeholder(),
    }
}

fn placeholder() -> String {
    format!(r#"<div class="mutedImg">{}</div>"#, IMAGE_PLACEHOLDER)
}

/// Result-area replacement shown when the record source failed to load
pub fn render_load_failure() -> String {
    let (command, url) = LOAD_FAILURE_HINT
        .split_once(" then open ")
        .unwrap_or((LOAD_FAILURE_HINT, ""));
    format!(
        r#"<div class="card"><div class="cardBody"><div class="desc">{}</div>
  <div class="small"><code>{}</code> then open <code>{}</code></div></div></div>"#,
        escape_html(LOAD_FAILURE_MESSAGE),
        escape_html(command),
        escape_html(url),
    )
}
