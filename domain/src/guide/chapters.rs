//! Built-in guide chapters and footer notes.

use super::entities::{ChapterId, EmergencyNumber, GuideChapter};
use crate::core::rich_text::RichText;
use crate::regulation::catalog::PUBLIC_ORDER_LAW;
use std::sync::LazyLock;

pub const GUIDE_TITLE: &str = "Prague Visitors Guide";
pub const GUIDE_SUBTITLE: &str = "Essential Information & Regulations for a Safe Stay";

pub const EMERGENCY_NUMBERS: [EmergencyNumber; 4] = [
    EmergencyNumber { number: "112", service: "General" },
    EmergencyNumber { number: "158", service: "Police" },
    EmergencyNumber { number: "155", service: "Ambulance" },
    EmergencyNumber { number: "150", service: "Fire" },
];

static CHAPTERS: LazyLock<Vec<GuideChapter>> = LazyLock::new(build_chapters);

/// Every chapter, in guide order
pub fn chapters() -> &'static [GuideChapter] {
    &CHAPTERS
}

pub fn chapter(id: ChapterId) -> Option<&'static GuideChapter> {
    chapters().iter().find(|c| c.id == id)
}

/// Legal basis line printed under the guide
pub fn legal_basis() -> String {
    format!("Information is based on local ordinances including {PUBLIC_ORDER_LAW}")
}

fn build_chapters() -> Vec<GuideChapter> {
    vec![
        GuideChapter::new(ChapterId::Alcohol, "Alcohol Consumption Restriction Zones")
            .heading("Restricted Zones")
            .paragraph(
                "Drinking alcohol in public is prohibited in zones designated by local ordinance. \
                 Check signage before drinking outdoors.",
            ),
        GuideChapter::new(ChapterId::Penalties, "Infractions and Penalties (Avoid Fines!)")
            .regulations(),
        GuideChapter::new(ChapterId::Water, "Drinking Water")
            .heading("Public Drinking Fountains")
            .paragraph(
                RichText::new()
                    .text("Available mostly from ")
                    .strong("April 1st to October 31st")
                    .text(". Look for fountains marked with the \"Pitná voda\" (Drinking Water) pictogram."),
            )
            .heading("Do Not Drink from Decorative Fountains")
            .paragraph(
                RichText::new()
                    .text("Water in ornamental fountains, cascades, and mists is generally ")
                    .strong("not potable")
                    .text(" and is treated chemically."),
            ),
        GuideChapter::new(ChapterId::Traffic, "Traffic Rules")
            .heading("Zero Tolerance")
            .paragraph("0.0% Blood Alcohol Content limit for cyclists and scooter riders.")
            .heading("Sidewalks")
            .paragraph(
                RichText::new()
                    .text("Riding bikes or electric scooters on sidewalks is ")
                    .strong("prohibited")
                    .text("."),
            )
            .heading("Single File")
            .paragraph("Cyclists must ride one behind another, not side-by-side.")
            .heading("Yielding")
            .paragraph("Riders must always yield to pedestrians, especially on shared paths."),
        GuideChapter::new(ChapterId::Substances, "Controlled Substances and Gambling")
            .heading("5.1 Controlled Substances")
            .paragraph(
                "Cannabis is illegal. Possession and distribution of recreational cannabis \
                 containing THC (>1%) is illegal in the Czech Republic.",
            )
            .heading("Psycho-modulating Substances (e.g., HHC, Kratom)")
            .bullets([
                RichText::new()
                    .text("Sale strictly prohibited to persons under ")
                    .strong("18 years of age")
                    .text("."),
                RichText::from("Products must carry mandatory labeling."),
                RichText::from("Regulations change frequently; caution is advised."),
            ])
            .heading("5.2 Gambling")
            .paragraph(
                RichText::new()
                    .text(
                        "Gambling is strictly regulated. Entry to casinos and gaming halls is allowed only for persons ",
                    )
                    .strong("18+")
                    .text(
                        ". Many districts in Prague have banned slot machines and technical games entirely to reduce nuisance.",
                    ),
            ),
        GuideChapter::new(ChapterId::Fees, "Fees (City Tax)")
            .highlight("Local Stay Fee (Tourist Tax)", "50 CZK / day")
            .heading("Purpose")
            .paragraph(
                "Collected by accommodation providers (hotels, hostels, AirBnb). The revenue supports \
                 city infrastructure, waste management, and tourism services.",
            )
            .note("Payment is mandatory for every day of stay (max 60 days).")
            .heading("Exemptions")
            .bullets([
                "Persons under 18 years of age.",
                "Holders of ZTP/P cards (severe disability) and their guides.",
            ]),
        GuideChapter::new(ChapterId::Fireworks, "Fireworks and Pyrotechnics")
            .heading("Strictly Regulated")
            .paragraph(
                "Amateur use of pyrotechnics is banned throughout most of the year to protect \
                 historical buildings and wildlife (especially swans).",
            )
            .heading("When is it allowed?")
            .paragraph(
                RichText::new()
                    .text("Only on ")
                    .strong("January 1st")
                    .text(" and ")
                    .strong("December 31st")
                    .text("."),
            )
            .note("Exceptions apply for official public holidays or permitted events.")
            .highlight("Time Restriction", "10:00 – 22:00")
            .heading("Permanent Prohibited Zones")
            .bullets([
                "Historical City Core (Heritage conservation areas).",
                "Within 250 meters of hospitals, nursing homes, and veterinary clinics.",
                "Parks, nature reserves, and near waterways (rivers/dams).",
            ]),
    ]
}
