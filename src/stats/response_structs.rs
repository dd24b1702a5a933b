use serde::Deserialize;

use crate::types::InspectionSummary;

/// Envelope around the inspection listing endpoints; the rows live under a
/// `data` key.
#[derive(Deserialize, Debug)]
pub struct InspectionPage {
    /// A listing with no `data` key reads as empty rather than failing.
    #[serde(default)]
    pub data: Vec<InspectionSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspection_page_deserializes() {
        let json = r#"{
            "data": [
                {"id": "UA-1", "title": "Road repair", "items": 4.0, "locality": 6.0, "suppliers": 2.0, "total": 12.0},
                {"id": "UA-2", "title": null, "items": 0.0, "locality": 1.0, "suppliers": 0.0, "total": 1.0}
            ]
        }"#;
        let page: InspectionPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, "UA-1");
        assert!(page.data[1].title.is_none());
    }
}
