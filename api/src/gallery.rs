use gloo_net::http::Request;
use serde_json::Value;

use crate::http_err;

// messages

// fetch the gallery list
//
// the request always bypasses the http cache so that freshly uploaded images
// show up on the next page load
pub async fn get_gallery(url: &str, field: &str) -> anyhow::Result<Vec<String>> {
    let resp = Request::get(url)
        .header("Cache-Control", "no-cache")
        .send()
        .await?;

    let text = resp.text().await?;

    if !resp.ok() {
        return Err(http_err(resp.status(), &text));
    }

    parse_gallery(&text, field)
}

// parse the list body
//
// the body itself must be a json array; anything else fails the whole fetch.
// the payload field name is configurable, so records stay raw json until
// payloads_from_records() picks them apart
pub fn parse_gallery(body: &str, field: &str) -> anyhow::Result<Vec<String>> {
    let records: Vec<Value> = serde_json::from_str(body)?;

    Ok(payloads_from_records(&records, field))
}

// pull the payload strings out of the records, in order
//
// records that are not objects, lack the field, or carry something other than
// a non-empty string are dropped without failing the rest
pub fn payloads_from_records(records: &[Value], field: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.get(field)?.as_str())
        .filter(|payload| !payload.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_has_no_payloads() {
        let payloads = parse_gallery("[]", "imageBase64").unwrap();

        assert!(payloads.is_empty());
    }

    #[test]
    fn records_missing_the_field_are_skipped() {
        let body = r#"[
            {"imageBase64": "aaaa", "_id": "1"},
            {"_id": "2"},
            {"imageBase64": "cccc", "_id": "3"}
        ]"#;

        let payloads = parse_gallery(body, "imageBase64").unwrap();

        assert_eq!(payloads, vec!["aaaa".to_string(), "cccc".to_string()]);
    }

    #[test]
    fn non_conforming_records_are_skipped() {
        let body = r#"[
            "not an object",
            42,
            null,
            {"imageBase64": 17},
            {"imageBase64": ""},
            {"imageBase64": null},
            {"imageBase64": "dddd"}
        ]"#;

        let payloads = parse_gallery(body, "imageBase64").unwrap();

        assert_eq!(payloads, vec!["dddd".to_string()]);
    }

    #[test]
    fn field_name_is_respected() {
        let body = r#"[{"imageBase64": "aaaa"}, {"image": "bbbb"}]"#;

        let payloads = parse_gallery(body, "image").unwrap();

        assert_eq!(payloads, vec!["bbbb".to_string()]);
    }

    #[test]
    fn order_is_preserved() {
        let body = r#"[{"imageBase64": "3"}, {"imageBase64": "1"}, {"imageBase64": "2"}]"#;

        let payloads = parse_gallery(body, "imageBase64").unwrap();

        assert_eq!(payloads, vec!["3", "1", "2"]);
    }

    #[test]
    fn non_array_body_is_an_error() {
        assert!(parse_gallery(r#"{"imageBase64": "aaaa"}"#, "imageBase64").is_err());
        assert!(parse_gallery("<html>oops</html>", "imageBase64").is_err());
        assert!(parse_gallery("", "imageBase64").is_err());
    }
}
