//! Plan comparison cards

use pagesweep_common::{PageFields, Verdict};

use super::split_list;
use crate::component::Component;

/// The comparison section always merchandises exactly three plans.
const EXPECTED_CARDS: usize = 3;

pub struct CompareCards;

struct CompareCardsData {
    vis: String,
    count: String,
    titles: [String; 3],
    ctas: Vec<String>,
    cta_hrefs: Vec<String>,
}

impl CompareCardsData {
    fn from_fields(fields: &PageFields) -> Self {
        Self {
            vis: fields.value("compareCardsVis").to_string(),
            count: fields.value("compareCardsCount").to_string(),
            titles: [
                fields.value("compareCard1Title").to_string(),
                fields.value("compareCard2Title").to_string(),
                fields.value("compareCard3Title").to_string(),
            ],
            ctas: split_list(fields.value("compareCardsCTAs"))
                .into_iter()
                .map(String::from)
                .collect(),
            cta_hrefs: split_list(fields.value("compareCardsCTAHrefs"))
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    fn validate(&self) -> Verdict {
        if self.vis == "Not Visible" || self.titles.iter().any(|t| t.is_empty()) {
            return Verdict::Fail;
        }

        if self.count.parse::<usize>() != Ok(EXPECTED_CARDS) {
            return Verdict::Fail;
        }

        if self.ctas.len() != EXPECTED_CARDS || self.cta_hrefs.len() != EXPECTED_CARDS {
            return Verdict::Fail;
        }

        Verdict::Pass
    }
}

impl Component for CompareCards {
    fn name(&self) -> &'static str {
        "compareCards"
    }

    fn columns(&self) -> &'static [&'static str] {
        &[
            "Compare Cards Visibility",
            "Card Count",
            "Card 1 Title",
            "Card 2 Title",
            "Card 3 Title",
            "CTAs",
            "CTA Hrefs",
        ]
    }

    fn fields(&self) -> &'static [&'static str] {
        &[
            "compareCardsVis",
            "compareCardsCount",
            "compareCard1Title",
            "compareCard2Title",
            "compareCard3Title",
            "compareCardsCTAs",
            "compareCardsCTAHrefs",
        ]
    }

    fn validate(&self, fields: &PageFields) -> Verdict {
        CompareCardsData::from_fields(fields).validate()
    }
}
