//! Generation prompt construction.
//!
//! Maps the selected academic program to a hand-authored commemorative
//! portrait prompt parameterized by the operator's display name. Unknown or
//! absent programs fall back to a generic template. Pure and deterministic:
//! the exact text sent to the backend can be reproduced for debugging.

use serde::{Deserialize, Serialize};

/// A program of study, selected through the attribute screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Stable identifier used for prompt lookup.
    pub id: String,
    /// Human-readable name, interpolated into the generic template.
    pub name: String,
}

impl Program {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Placeholder used by the generic template when no program was selected.
pub const UNSELECTED_PROGRAM_PHRASE: &str = "their chosen program";

/// Identifiers with a dedicated narrative template.
pub const KNOWN_PROGRAM_IDS: &[&str] = &[
    "online-hospitality-business",
    "restaurant-administration",
    "hotel-administration",
    "international-gastronomy",
    "gastronomy-food-science",
    "hospitality-business-management",
    "culinary-business-management",
    "hotel-management",
    "nutrition-food-science",
    "public-relations-event-direction",
    "public-relations-event-organization",
    "online-event-organization",
];

/// Build the generation prompt for a session.
///
/// Same inputs always yield the same string. The display name appears
/// verbatim in every branch.
pub fn build(display_name: &str, program: Option<&Program>) -> String {
    if let Some(program) = program {
        if let Some(prompt) = known_program_prompt(&program.id, display_name) {
            return prompt;
        }
    }

    let program_phrase = program
        .map(|p| p.name.as_str())
        .unwrap_or(UNSELECTED_PROGRAM_PHRASE);
    format!(
        "Commemorative 50th anniversary university portrait. {name}, student of {program}. \
         Prominent golden \"50\" medal, elements representative of the program, navy blue \
         background with golden sparkles, soft cinematic light, aura of celebration and \
         academic legacy, elegant typography, emotive modern professional style, high \
         resolution and ultra detailed.",
        name = display_name,
        program = program_phrase,
    )
}

/// Hand-authored template for a known program identifier.
fn known_program_prompt(id: &str, name: &str) -> Option<String> {
    let prompt = match id {
        "online-hospitality-business" => format!(
            "Commemorative 50th anniversary university portrait. {name}, student of Online \
             Hospitality Business Administration. Prominent golden \"50\" medal, subtle digital \
             and modern elements, understated tablets and devices, navy blue background with \
             golden sparkles, professional executive style, soft cinematic light, aura of \
             innovation and digital transformation, elegant typography."
        ),
        "restaurant-administration" => format!(
            "Commemorative 50th anniversary university portrait. {name}, graduate of Restaurant \
             Administration. Golden \"50\" medal, subtle gastronomy elements (fine cutlery, \
             gourmet dishes), navy blue background with golden sparkles, soft professional \
             portrait light, aura of culinary excellence and management, elegant cinematic \
             style, refined typography."
        ),
        "hotel-administration" => format!(
            "Commemorative 50th anniversary university portrait. {name}, licensed in Hotel \
             Administration. Golden \"50\" medal, subtle hotel elements (golden keys, luxury \
             details), navy blue background with golden sparkles, professional cinematic light, \
             aura of hospitality and elegance, sophisticated typography, modern and emotive \
             executive style."
        ),
        "international-gastronomy" => format!(
            "Commemorative 50th anniversary university portrait. {name}, chef specialized in \
             International Gastronomy. Golden \"50\" medal, international culinary elements \
             (spices, gourmet ingredients, culinary art), navy blue background with golden \
             sparkles, soft professional portrait light, aura of global gastronomic mastery, \
             elegant typography, cinematic and artistic style."
        ),
        "gastronomy-food-science" => format!(
            "Commemorative 50th anniversary university portrait. {name}, graduate of Gastronomy \
             and Food Science. Golden \"50\" medal, fused scientific and culinary elements \
             (laboratory, natural ingredients), navy blue background with golden sparkles, \
             professional cinematic light, aura of gastronomic innovation, modern elegant \
             typography, sophisticated style."
        ),
        "hospitality-business-management" => format!(
            "Commemorative 50th anniversary university portrait. {name}, administrator in \
             Hospitality Business Management. Golden \"50\" medal, business management and \
             hospitality elements (charts, symbols of excellence), navy blue background with \
             golden sparkles, soft professional portrait light, aura of leadership and service, \
             elegant executive typography."
        ),
        "culinary-business-management" => format!(
            "Commemorative 50th anniversary university portrait. {name}, manager in Culinary \
             Business Management. Golden \"50\" medal, entrepreneurial gastronomy elements \
             (premium ingredients, business symbols), navy blue background with golden \
             sparkles, soft cinematic light, aura of culinary entrepreneurship and success, \
             sophisticated modern typography."
        ),
        "hotel-management" => format!(
            "Commemorative 50th anniversary university portrait. {name}, hotel manager. Golden \
             \"50\" medal, hotel management elements (luxury keys, hospitality symbols), navy \
             blue background with golden sparkles, soft professional light, aura of world-class \
             hospitality, elegant executive typography, sophisticated cinematic style."
        ),
        "nutrition-food-science" => format!(
            "Commemorative 50th anniversary university portrait. {name}, nutritionist \
             specialized in Food Science. Golden \"50\" medal, scientific nutrition elements \
             (fruit, vegetables, healthy balance), navy blue background with golden sparkles, \
             soft professional light, aura of health and wellbeing, modern elegant typography, \
             careful cinematic style."
        ),
        "public-relations-event-direction" => format!(
            "Commemorative 50th anniversary university portrait. {name}, professional in Public \
             Relations and Event Direction. Golden \"50\" medal, event and communication \
             elements (lights, connection symbols), navy blue background with golden sparkles, \
             dramatic cinematic light, aura of creativity and communicative leadership, modern \
             sophisticated typography."
        ),
        "public-relations-event-organization" => format!(
            "Commemorative 50th anniversary university portrait. {name}, organizer in Public \
             Relations and Events. Golden \"50\" medal, festive and professional elements \
             (golden confetti, celebration symbols), navy blue background with golden sparkles, \
             soft professional portrait light, aura of dynamism and excellence, elegant modern \
             typography."
        ),
        "online-event-organization" => format!(
            "Commemorative 50th anniversary university portrait. {name}, specialist in Online \
             Public Relations and Events. Golden \"50\" medal, digital and connected elements \
             (networks, technology), navy blue background with golden sparkles, modern \
             cinematic light, aura of digital innovation and leadership, contemporary elegant \
             typography, futuristic sophisticated style."
        ),
        _ => return None,
    };
    Some(prompt)
}
