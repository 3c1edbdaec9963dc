use std::collections::HashMap;

use scraper::{Html, Selector};

/// Extract the label/value pairs from a facility status page.
///
/// Every `li` under the `main` content region carries a pair of spans:
/// the first is the field label, the last its displayed value. Items
/// without spans yield empty strings rather than errors, and a repeated
/// label keeps the later item's value. Absent labels simply stay out of
/// the map; missing data is handled downstream, not here.
pub fn parse_status_fields(html: &str) -> HashMap<String, String> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse("main li").unwrap();
    let span_selector = Selector::parse("span").unwrap();

    let mut fields = HashMap::new();
    for item in document.select(&item_selector) {
        let spans: Vec<_> = item.select(&span_selector).collect();
        let label = spans
            .first()
            .map(|s| s.text().collect::<String>())
            .unwrap_or_default();
        let value = spans
            .last()
            .map(|s| s.text().collect::<String>())
            .unwrap_or_default();
        fields.insert(label, value);
    }
    fields
}
