//! Built-in regulations table.
//!
//! Process-wide and read-only. Built on first access.

use super::entities::{RegulationItem, RegulationSection};
use crate::core::rich_text::RichText;
use std::sync::LazyLock;

/// Ordinance most public-order entries are based on
pub const PUBLIC_ORDER_LAW: &str = "Law No. 251/2016 Sb.";

static REGULATIONS: LazyLock<Vec<RegulationSection>> = LazyLock::new(build_regulations);

/// All regulation sections, in display order
pub fn regulations() -> &'static [RegulationSection] {
    &REGULATIONS
}

fn build_regulations() -> Vec<RegulationSection> {
    vec![
        RegulationSection::new("2.1", "2.1 Public Order and Quiet")
            .with_item(
                RegulationItem::fine(
                    "Night Quiet",
                    "10,000 CZK",
                    RichText::new()
                        .text("Strict quiet hours are enforced between ")
                        .strong("22:00 and 06:00")
                        .text(
                            ". Loud noise, music, or shouting in residential areas is prohibited.",
                        ),
                )
                .with_legal_reference(PUBLIC_ORDER_LAW),
            )
            .with_item(
                RegulationItem::warning(
                    "Public Indecency",
                    "Inappropriate behavior, public nudity, or urination in public spaces is strictly penalized.",
                )
                .with_legal_reference(PUBLIC_ORDER_LAW),
            ),
        RegulationSection::new("2.2", "2.2 Protecting City Cleanliness")
            .with_item(RegulationItem::fine(
                "Property Damage",
                "50,000 CZK",
                RichText::new()
                    .text("Damaging public property, monuments, or green spaces is a serious offense. ")
                    .strong("Graffiti")
                    .text(" is only allowed in specific designated legal zones."),
            ))
            .with_item(RegulationItem::fine(
                "Littering",
                "20,000 CZK",
                RichText::new()
                    .text("Includes throwing cigarette butts, gum, or waste on the ground. ")
                    .strong("Throwing objects from vehicles")
                    .text(" is also strictly prohibited."),
            ))
            .with_item(RegulationItem::fine(
                "Feeding Animals",
                "1,000 CZK",
                "Do not feed pigeons, swans, or nutria (river rats). It harms the ecosystem and attracts pests.",
            )),
    ]
}
