//! Merchandising card on the plans-and-pricing business tab

use pagesweep_common::{PageFields, Verdict};
use tracing::debug;

use super::is_absent;
use crate::component::Component;

pub struct MerchCard;

struct MerchCardData {
    tab_name: String,
    vis: String,
    title: String,
    cta: String,
    cta_href: String,
    card_count: String,
    gen_ai_bar: String,
}

impl MerchCardData {
    fn from_fields(fields: &PageFields) -> Self {
        Self {
            tab_name: fields.value("tabName").to_string(),
            vis: fields.value("merchCardVis").to_string(),
            title: fields.value("merchCardTitle").to_string(),
            cta: fields.value("merchCardCTA").to_string(),
            cta_href: fields.value("merchCardCTAHref").to_string(),
            card_count: fields.value("cardCount").to_string(),
            gen_ai_bar: fields.value("genAIBar").to_string(),
        }
    }

    fn validate(&self) -> Verdict {
        let required = [
            (self.vis.as_str(), "Merch Card Visibility"),
            (self.title.as_str(), "Merch Card Title"),
            (self.cta.as_str(), "Merch Card CTA"),
            (self.cta_href.as_str(), "CTA Href"),
            (self.tab_name.as_str(), "Tab Name"),
            (self.gen_ai_bar.as_str(), "GenAI Bar"),
        ];

        let mut failed = Vec::new();
        for (value, name) in required {
            if is_absent(value) {
                failed.push(name);
            }
        }
        if !failed.is_empty() {
            debug!("Failed fields: {}", failed.join(", "));
            return Verdict::Fail;
        }

        if self.card_count.parse::<u32>() != Ok(1) {
            debug!("Card count validation failed, expected 1, found {}", self.card_count);
            return Verdict::Fail;
        }

        Verdict::Pass
    }
}

impl Component for MerchCard {
    fn name(&self) -> &'static str {
        "merchCard"
    }

    fn columns(&self) -> &'static [&'static str] {
        &[
            "Tab Name",
            "Merch Card Visibility",
            "Merch Card Title",
            "Merch Card CTA",
            "CTA Href",
            "Card Count",
            "GenAI Bar",
        ]
    }

    fn fields(&self) -> &'static [&'static str] {
        &[
            "tabName",
            "merchCardVis",
            "merchCardTitle",
            "merchCardCTA",
            "merchCardCTAHref",
            "cardCount",
            "genAIBar",
        ]
    }

    fn validate(&self, fields: &PageFields) -> Verdict {
        MerchCardData::from_fields(fields).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_fields() -> PageFields {
        let mut fields = PageFields::new();
        fields.insert("tabName", "Business");
        fields.insert("merchCardVis", "Visible");
        fields.insert("merchCardTitle", "Acrobat Pro");
        fields.insert("merchCardCTA", "Buy now");
        fields.insert("merchCardCTAHref", "https://commerce.example.com/buy");
        fields.insert("cardCount", "1");
        fields.insert("genAIBar", "Visible");
        fields
    }

    #[test]
    fn test_complete_card_passes() {
        assert_eq!(MerchCard.validate(&healthy_fields()), Verdict::Pass);
    }

    #[test]
    fn test_hidden_card_fails() {
        let mut fields = healthy_fields();
        fields.insert("merchCardVis", "Not Visible");
        assert_eq!(MerchCard.validate(&fields), Verdict::Fail);
    }

    #[test]
    fn test_wrong_card_count_fails() {
        let mut fields = healthy_fields();
        fields.insert("cardCount", "2");
        assert_eq!(MerchCard.validate(&fields), Verdict::Fail);
    }

    #[test]
    fn test_missing_field_fails() {
        let mut fields = healthy_fields();
        fields.insert("genAIBar", "");
        assert_eq!(MerchCard.validate(&fields), Verdict::Fail);
    }
}
