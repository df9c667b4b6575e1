//! Frictionless unity verb widget (file-upload block)

use pagesweep_common::{PageFields, Verdict};
use tracing::debug;

use super::is_absent;
use crate::component::Component;

pub struct UnityVerb;

impl Component for UnityVerb {
    fn name(&self) -> &'static str {
        "unityVerb"
    }

    fn columns(&self) -> &'static [&'static str] {
        &[
            "Block Visibility",
            "Block Attributes",
            "Title",
            "Logo",
            "Block Text",
            "Block Description",
            "Block Image",
            "File Upload Button",
            "File Upload Text",
            "Footer Security Icon",
            "Footer Text",
            "Link Count",
            "Terms Links",
            "Country in Footer Links",
            "Tooltip Presence",
            "Tooltip Text",
            "Tooltip Hover Visibility",
            "Tooltip Display",
        ]
    }

    fn fields(&self) -> &'static [&'static str] {
        &[
            "blockVis",
            "blockVisAttr",
            "title",
            "logo",
            "BlockText",
            "BlockDesc",
            "BlockImg",
            "BlockFileUpload",
            "BlockFileUploadTxt",
            "BlockFooterIcon",
            "footerText",
            "LinkCount",
            "TermsLink",
            "CountryInFooterLink",
            "ToolTipPre",
            "ToolTipText",
            "OnHoverBlockVis",
            "blockTooltipDisp",
        ]
    }

    fn validate(&self, fields: &PageFields) -> Verdict {
        let required = [
            ("blockVis", "Block Visibility"),
            ("title", "Title"),
            ("logo", "Logo"),
            ("BlockText", "Block Text"),
            ("BlockDesc", "Block Description"),
            ("BlockImg", "Block Image"),
            ("BlockFileUpload", "File Upload Button"),
            ("BlockFooterIcon", "Footer Security Icon"),
            ("footerText", "Footer Text"),
        ];

        let mut failed = Vec::new();
        for (key, name) in required {
            if is_absent(fields.value(key)) {
                failed.push(name);
            }
        }
        if !failed.is_empty() {
            debug!("Failed fields: {}", failed.join(", "));
            return Verdict::Fail;
        }

        Verdict::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_fields() -> PageFields {
        let mut fields = PageFields::new();
        for key in [
            "blockVis",
            "title",
            "logo",
            "BlockText",
            "BlockDesc",
            "BlockImg",
            "BlockFileUpload",
            "BlockFooterIcon",
            "footerText",
        ] {
            fields.insert(key, "Visible");
        }
        fields
    }

    #[test]
    fn test_required_fields_present_passes() {
        assert_eq!(UnityVerb.validate(&healthy_fields()), Verdict::Pass);
    }

    #[test]
    fn test_na_value_fails() {
        let mut fields = healthy_fields();
        fields.insert("logo", "NA");
        assert_eq!(UnityVerb.validate(&fields), Verdict::Fail);
    }

    #[test]
    fn test_optional_tooltip_fields_do_not_gate() {
        let mut fields = healthy_fields();
        fields.insert("ToolTipText", "");
        fields.insert("blockTooltipDisp", "NA");
        assert_eq!(UnityVerb.validate(&fields), Verdict::Pass);
    }
}
