//! Acrobat pricing blade, including the buy-now cart checks

use pagesweep_common::{PageFields, Verdict};

use crate::component::Component;

pub struct AcrobatBlade;

struct AcrobatBladeData {
    vis: String,
    title: String,
    desc: String,
    buy_now_btn: String,
    compare_features_link: String,
    cart_subtotal_label: String,
    cart_subtotal_price: String,
    cart_total_label: String,
    cart_total_price: String,
}

impl AcrobatBladeData {
    fn from_fields(fields: &PageFields) -> Self {
        Self {
            vis: fields.value("bladeVis").to_string(),
            title: fields.value("bladeTitle").to_string(),
            desc: fields.value("bladeDesc").to_string(),
            buy_now_btn: fields.value("bladeBuyNowBtn").to_string(),
            compare_features_link: fields.value("bladeCompareFeaturesLink").to_string(),
            cart_subtotal_label: fields.value("cartSubtotalLabel").to_string(),
            cart_subtotal_price: fields.value("cartSubtotalPrice").to_string(),
            cart_total_label: fields.value("cartTotalLabel").to_string(),
            cart_total_price: fields.value("cartTotalPrice").to_string(),
        }
    }

    fn validate(&self) -> Verdict {
        if self.vis != "Visible" {
            return Verdict::fail_with("Blade not visible");
        }
        if self.title == "Not Visible" {
            return Verdict::fail_with("Blade title not visible");
        }
        if self.desc == "Not Visible" {
            return Verdict::fail_with("Blade description not visible");
        }
        if self.buy_now_btn == "Not Visible" {
            return Verdict::fail_with("Buy Now button not visible");
        }
        if self.compare_features_link == "Not Visible" {
            return Verdict::fail_with("Compare Features link not visible");
        }

        // Cart checks only apply once the buy-now flow was reachable
        if self.buy_now_btn != "Not Visible" {
            if self.cart_subtotal_label == "Not Found" {
                return Verdict::fail_with("Cart subtotal label not found");
            }
            if self.cart_subtotal_price == "Not Found" {
                return Verdict::fail_with("Cart subtotal price not found");
            }
            if self.cart_total_label == "Not Found" {
                return Verdict::fail_with("Cart total label not found");
            }
            if self.cart_total_price == "Not Found" {
                return Verdict::fail_with("Cart total price not found");
            }
        }

        Verdict::Pass
    }
}

impl Component for AcrobatBlade {
    fn name(&self) -> &'static str {
        "acrobatBlade"
    }

    fn columns(&self) -> &'static [&'static str] {
        &[
            "Blade Visibility",
            "Blade Title",
            "Blade Description",
            "Buy Now Button",
            "Buy Now Href",
            "Buy Now OSI ID",
            "Product Name",
            "Store Commitment URL",
            "Store Email URL",
            "Cart Subtotal Label",
            "Cart Subtotal Price",
            "Cart Total Label",
            "Cart Total Price",
            "Compare Features Link",
            "Compare Features Href",
            "Compare Features Modal Text",
        ]
    }

    fn fields(&self) -> &'static [&'static str] {
        &[
            "bladeVis",
            "bladeTitle",
            "bladeDesc",
            "bladeBuyNowBtn",
            "bladeBuyNowHref",
            "bladeBuyNowOsiId",
            "productName",
            "storeCommitmentUrl",
            "storeEmailUrl",
            "cartSubtotalLabel",
            "cartSubtotalPrice",
            "cartTotalLabel",
            "cartTotalPrice",
            "bladeCompareFeaturesLink",
            "bladeCompareFeaturesHref",
            "bladeCompareFeaturesModalText",
        ]
    }

    fn validate(&self, fields: &PageFields) -> Verdict {
        AcrobatBladeData::from_fields(fields).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_fields() -> PageFields {
        let mut fields = PageFields::new();
        fields.insert("bladeVis", "Visible");
        fields.insert("bladeTitle", "Acrobat Pro");
        fields.insert("bladeDesc", "The all-in-one PDF solution");
        fields.insert("bladeBuyNowBtn", "Visible");
        fields.insert("bladeCompareFeaturesLink", "Visible");
        fields.insert("cartSubtotalLabel", "Subtotal");
        fields.insert("cartSubtotalPrice", "US$19.99/mo");
        fields.insert("cartTotalLabel", "Total");
        fields.insert("cartTotalPrice", "US$19.99/mo");
        fields
    }

    #[test]
    fn test_complete_blade_passes() {
        assert_eq!(AcrobatBlade.validate(&healthy_fields()), Verdict::Pass);
    }

    #[test]
    fn test_hidden_blade_reports_reason() {
        let mut fields = healthy_fields();
        fields.insert("bladeVis", "Not Visible");
        assert_eq!(
            AcrobatBlade.validate(&fields).to_string(),
            "Fail - Blade not visible"
        );
    }

    #[test]
    fn test_missing_cart_price_reports_reason() {
        let mut fields = healthy_fields();
        fields.insert("cartTotalPrice", "Not Found");
        assert_eq!(
            AcrobatBlade.validate(&fields).to_string(),
            "Fail - Cart total price not found"
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let mut fields = healthy_fields();
        fields.insert("bladeTitle", "Not Visible");
        fields.insert("cartSubtotalLabel", "Not Found");
        assert_eq!(
            AcrobatBlade.validate(&fields).to_string(),
            "Fail - Blade title not visible"
        );
    }
}
