use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PlannerError, Result};
use crate::models::{CartLine, CatalogItem};

/// Load a catalog snapshot from a JSON array of items.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let items: Vec<CatalogItem> = serde_json::from_str(&content)?;

    if items.is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }

    info!(path = %path.display(), items = items.len(), "catalog loaded");
    Ok(items)
}

/// Write committed cart lines as pretty-printed JSON.
pub fn write_cart_json<P: AsRef<Path>>(path: P, lines: &[CartLine]) -> Result<()> {
    let json = serde_json::to_string_pretty(lines)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), lines = lines.len(), "cart written");
    Ok(())
}

/// Write committed cart lines as CSV with a header row.
pub fn write_cart_csv<P: AsRef<Path>>(path: P, lines: &[CartLine]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for line in lines {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    info!(path = %path.as_ref().display(), lines = lines.len(), "cart written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog() {
        let json = r#"[
            {"id": "a1", "name": "Dal Makhani", "price": 400, "platform_margin_type": "percent", "platform_margin_value": 10, "serves_persons": 8, "category_id": "mains", "category_name": "Mains", "is_vegetarian": true, "is_available": true},
            {"id": "a2", "name": "Rose Lassi", "price": "35.5", "platform_margin_type": null, "platform_margin_value": null, "serves_persons": null}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].customer_price(), Decimal::from(440));
        assert_eq!(items[1].customer_price(), Decimal::new(355, 1));
        assert!(!items[1].is_plannable());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, PlannerError::EmptyCatalog));
    }

    #[test]
    fn test_write_cart_csv() {
        let lines = vec![CartLine {
            item_id: "a1".to_string(),
            name: "Dal Makhani".to_string(),
            unit_customer_price: Decimal::from(440),
            quantity: 7,
            category_label: "Mains".to_string(),
        }];

        let out = NamedTempFile::new().unwrap();
        write_cart_csv(out.path(), &lines).unwrap();

        let written = fs::read_to_string(out.path()).unwrap();
        let mut rows = written.lines();
        assert_eq!(
            rows.next(),
            Some("item_id,name,unit_customer_price,quantity,category_label")
        );
        assert_eq!(rows.next(), Some("a1,Dal Makhani,440,7,Mains"));
    }

    #[test]
    fn test_write_cart_json() {
        let lines = vec![CartLine {
            item_id: "a1".to_string(),
            name: "Dal Makhani".to_string(),
            unit_customer_price: Decimal::from(440),
            quantity: 7,
            category_label: "Mains".to_string(),
        }];

        let out = NamedTempFile::new().unwrap();
        write_cart_json(out.path(), &lines).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(value[0]["quantity"], 7);
        assert_eq!(value[0]["category_label"], "Mains");
    }
}
